use skiphire_core::{Effect, Msg};
use skiphire_engine::{EngineError, EngineEvent, EngineHandle, ListingSettings};
use skiphire_logging::skiphire_info;

/// Hands core effects to the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ListingSettings) -> Result<Self, EngineError> {
        Ok(Self {
            engine: EngineHandle::new(settings)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchOffers {
                    generation,
                    location,
                } => {
                    skiphire_info!("FetchOffers generation={} location={}", generation, location);
                    self.engine.fetch_offers(generation, location);
                }
            }
        }
    }

    /// Drains completed engine work without blocking.
    pub fn poll(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::OffersFetched {
            generation, result, ..
        } => Msg::OffersLoaded {
            generation,
            result: result.map_err(|err| err.failure()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skiphire_core::{FetchFailure, Location, RequestGeneration};
    use skiphire_engine::ListingError;

    #[test]
    fn engine_failures_lose_transport_detail() {
        let msg = map_event(EngineEvent::OffersFetched {
            generation: RequestGeneration::new(3),
            location: Location::new("NR32", None).unwrap(),
            result: Err(ListingError::Network {
                status: Some(503),
                status_text: Some("Service Unavailable".to_string()),
                message: "503 Service Unavailable".to_string(),
            }),
        });
        assert_eq!(
            msg,
            Msg::OffersLoaded {
                generation: RequestGeneration::new(3),
                result: Err(FetchFailure::Network {
                    status: Some(503),
                    status_text: Some("Service Unavailable".to_string()),
                }),
            }
        );
    }
}
