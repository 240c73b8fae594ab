use crate::{Location, RequestGeneration};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Query the listing service; report back with `Msg::OffersLoaded`
    /// carrying the same generation.
    FetchOffers {
        generation: RequestGeneration,
        location: Location,
    },
}
