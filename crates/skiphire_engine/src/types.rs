use skiphire_core::{FetchFailure, Location, Offer, RequestGeneration};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListingError {
    /// Transport failure or a non-success HTTP status.
    #[error("network error: {message}")]
    Network {
        status: Option<u16>,
        status_text: Option<String>,
        message: String,
    },
    /// The body is not a JSON array of offers.
    #[error("decode error: {0}")]
    Decode(String),
}

impl ListingError {
    pub(crate) fn network(message: impl Into<String>) -> Self {
        ListingError::Network {
            status: None,
            status_text: None,
            message: message.into(),
        }
    }

    /// Drops transport detail, keeping what the user-facing message needs.
    pub fn failure(&self) -> FetchFailure {
        match self {
            ListingError::Network {
                status,
                status_text,
                ..
            } => FetchFailure::Network {
                status: *status,
                status_text: status_text.clone(),
            },
            ListingError::Decode(_) => FetchFailure::Decode,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    OffersFetched {
        generation: RequestGeneration,
        location: Location,
        result: Result<Vec<Offer>, ListingError>,
    },
}
