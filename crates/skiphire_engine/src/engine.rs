use std::sync::{mpsc, Arc};
use std::thread;

use skiphire_core::{Location, RequestGeneration};
use skiphire_logging::{skiphire_info, skiphire_warn};

use crate::listing::{ListingClient, ListingSettings, ReqwestListingClient};
use crate::{EngineError, EngineEvent};

enum EngineCommand {
    FetchOffers {
        generation: RequestGeneration,
        location: Location,
    },
}

/// Runs listing fetches on a background runtime and reports completions.
///
/// Fetches run concurrently and complete in any order; each event carries the
/// generation it was issued with so the caller can discard superseded ones.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ListingSettings) -> Result<Self, EngineError> {
        Self::with_client(Arc::new(ReqwestListingClient::new(settings)))
    }

    pub fn with_client(client: Arc<dyn ListingClient>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch_offers(&self, generation: RequestGeneration, location: Location) {
        if self
            .cmd_tx
            .send(EngineCommand::FetchOffers {
                generation,
                location,
            })
            .is_err()
        {
            skiphire_warn!("Engine worker is gone; fetch {} dropped", generation);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    client: &dyn ListingClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchOffers {
            generation,
            location,
        } => {
            let result = client.fetch_offers(&location).await;
            match &result {
                Ok(offers) => skiphire_info!(
                    "Fetch {} for {} returned {} offers",
                    generation,
                    location,
                    offers.len()
                ),
                Err(err) => skiphire_warn!("Fetch {} for {} failed: {}", generation, location, err),
            }
            let _ = event_tx.send(EngineEvent::OffersFetched {
                generation,
                location,
                result,
            });
        }
    }
}
