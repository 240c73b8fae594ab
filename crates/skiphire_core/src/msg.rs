use crate::{FetchFailure, Location, Offer, OfferId, RequestGeneration};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The wizard came on screen; loads offers for the configured location.
    Mounted,
    /// User entered a new postcode/area.
    LocationSubmitted(Location),
    /// User clicked Retry on the error panel.
    RetryClicked,
    /// Engine completion for a listing fetch.
    OffersLoaded {
        generation: RequestGeneration,
        result: Result<Vec<Offer>, FetchFailure>,
    },
    /// User picked an offer card.
    OfferSelected(OfferId),
    /// User clicked "Continue to Next Step" in the confirmation surface.
    ContinueClicked,
    /// User clicked "Go Back & Change".
    BackClicked,
    /// User closed the confirmation surface without choosing.
    ConfirmationDismissed,
    /// Fallback for placeholder wiring.
    NoOp,
}
