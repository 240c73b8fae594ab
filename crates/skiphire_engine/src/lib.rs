//! Skip-hire engine: listing IO and effect execution.
mod engine;
mod listing;
mod types;

pub use engine::EngineHandle;
pub use listing::{
    ListingClient, ListingSettings, ReqwestListingClient, DEFAULT_BASE_URL, DEFAULT_ENDPOINT_PATH,
};
pub use types::{EngineError, EngineEvent, ListingError};
