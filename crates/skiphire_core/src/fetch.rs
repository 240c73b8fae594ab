use std::fmt;

use skiphire_logging::{skiphire_debug, skiphire_info};

use crate::{normalize, Location, Offer};

pub const NETWORK_ERROR_MESSAGE: &str =
    "Unable to connect to the server. Please check your internet connection.";
pub const DECODE_ERROR_MESSAGE: &str =
    "Received an unexpected response from the server. Please try again.";

/// Tags each fetch so that completions of superseded requests can be told
/// apart from the one the user is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestGeneration(u64);

impl RequestGeneration {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RequestGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Why a listing fetch failed, independent of the transport that ran it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// Unreachable host or a non-success HTTP status.
    Network {
        status: Option<u16>,
        status_text: Option<String>,
    },
    /// The body did not have the expected shape.
    Decode,
}

impl FetchFailure {
    /// Text suitable for the error panel; never includes raw error detail.
    pub fn user_message(&self) -> String {
        match self {
            FetchFailure::Network {
                status: Some(code),
                status_text,
            } => match status_text.as_deref().filter(|text| !text.is_empty()) {
                Some(text) => format!("Failed to fetch skips: {code} {text}"),
                None => format!("Failed to fetch skips: {code}"),
            },
            FetchFailure::Network { status: None, .. } => NETWORK_ERROR_MESSAGE.to_string(),
            FetchFailure::Decode => DECODE_ERROR_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Ready(Vec<Offer>),
    Error(String),
}

/// Fetch-state controller for the offers of one location.
///
/// Offers from the last successful fetch stay visible while a newer request is
/// loading or after it failed; they are replaced only when a newer fetch
/// succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OfferSource {
    location: Option<Location>,
    state: FetchState,
    retained: Vec<Offer>,
    generation: RequestGeneration,
}

impl OfferSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn generation(&self) -> RequestGeneration {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            FetchState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Offers to display: the current ready set, or the last one that landed
    /// for the same location.
    pub fn offers(&self) -> &[Offer] {
        match &self.state {
            FetchState::Ready(offers) => offers,
            _ => &self.retained,
        }
    }

    /// Offers that may be selected; only available once a fetch has landed.
    pub fn ready_offers(&self) -> Option<&[Offer]> {
        match &self.state {
            FetchState::Ready(offers) => Some(offers.as_slice()),
            _ => None,
        }
    }

    /// Starts a fetch for `location` and returns the generation to tag it with.
    pub fn begin(&mut self, location: Location) -> RequestGeneration {
        if let FetchState::Ready(offers) = std::mem::take(&mut self.state) {
            self.retained = offers;
        }
        // Offers of another location must never resurface.
        if self.location.as_ref() != Some(&location) {
            self.retained.clear();
        }
        self.state = FetchState::Loading;
        self.generation = self.generation.next();
        skiphire_info!("Fetching offers {} for {}", self.generation, location);
        self.location = Some(location);
        self.generation
    }

    /// Re-issues the request for the current location.
    ///
    /// Returns `None` when there is nothing to retry: no location yet, or a
    /// request is already loading.
    pub fn retry(&mut self) -> Option<RequestGeneration> {
        match self.state {
            FetchState::Ready(_) | FetchState::Error(_) => {}
            FetchState::Idle | FetchState::Loading => return None,
        }
        let location = self.location.clone()?;
        Some(self.begin(location))
    }

    /// Applies the outcome of the fetch tagged `generation`.
    ///
    /// Returns `false` and leaves the state untouched when the outcome belongs
    /// to a superseded request.
    pub fn complete(
        &mut self,
        generation: RequestGeneration,
        outcome: Result<Vec<Offer>, FetchFailure>,
    ) -> bool {
        if generation != self.generation || !self.is_loading() {
            skiphire_debug!(
                "Discarding stale fetch result {} (current {})",
                generation,
                self.generation
            );
            return false;
        }
        self.state = match outcome {
            Ok(raw) => {
                let offers = normalize(&raw);
                skiphire_info!(
                    "Fetch {} ready: {} of {} offers shown",
                    generation,
                    offers.len(),
                    raw.len()
                );
                self.retained.clear();
                FetchState::Ready(offers)
            }
            Err(failure) => {
                skiphire_info!("Fetch {} failed: {:?}", generation, failure);
                FetchState::Error(failure.user_message())
            }
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offer::fixtures::offer;

    fn nr32() -> Location {
        Location::new("NR32", Some("Lowestoft")).unwrap()
    }

    #[test]
    fn generations_increase_per_request() {
        let mut source = OfferSource::new();
        let first = source.begin(nr32());
        let second = source.begin(nr32());
        assert!(second > first);
        assert_eq!(source.generation(), second);
    }

    #[test]
    fn retry_is_ignored_while_idle_or_loading() {
        let mut source = OfferSource::new();
        assert_eq!(source.retry(), None);
        source.begin(nr32());
        assert_eq!(source.retry(), None);
    }

    #[test]
    fn completion_after_completion_is_ignored() {
        let mut source = OfferSource::new();
        let generation = source.begin(nr32());
        assert!(source.complete(generation, Ok(vec![offer(1, 4, false)])));
        assert!(!source.complete(generation, Ok(Vec::new())));
        assert_eq!(source.offers().len(), 1);
    }

    #[test]
    fn user_messages_depend_on_failure_kind() {
        let http = FetchFailure::Network {
            status: Some(500),
            status_text: Some("Internal Server Error".to_string()),
        };
        assert_eq!(http.user_message(), "Failed to fetch skips: 500 Internal Server Error");
        let bare = FetchFailure::Network {
            status: Some(599),
            status_text: None,
        };
        assert_eq!(bare.user_message(), "Failed to fetch skips: 599");
        let offline = FetchFailure::Network {
            status: None,
            status_text: None,
        };
        assert_eq!(offline.user_message(), NETWORK_ERROR_MESSAGE);
        assert_eq!(FetchFailure::Decode.user_message(), DECODE_ERROR_MESSAGE);
    }
}
