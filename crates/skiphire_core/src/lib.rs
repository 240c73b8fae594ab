//! Skip-hire core: pure booking state machine and view-model helpers.
mod effect;
mod fetch;
mod location;
mod msg;
mod normalize;
mod offer;
mod state;
mod update;
mod view_model;
mod wizard;

pub use effect::Effect;
pub use fetch::{
    FetchFailure, FetchState, OfferSource, RequestGeneration, DECODE_ERROR_MESSAGE,
    NETWORK_ERROR_MESSAGE,
};
pub use location::{Location, LocationError};
pub use msg::Msg;
pub use normalize::normalize;
pub use offer::{
    format_money, format_price, Offer, OfferId, PRICE_DECIMAL_PLACES, PRICE_UNAVAILABLE,
};
pub use state::AppState;
pub use update::update;
pub use view_model::{
    AppViewModel, ConfirmationView, OfferCardView, OffersPanel, StepView, SKELETON_CARD_COUNT,
};
pub use wizard::{SelectionError, Step, StepStatus, WizardState};
