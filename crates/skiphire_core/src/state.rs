use crate::view_model::{
    AppViewModel, ConfirmationView, OfferCardView, OffersPanel, StepView, SKELETON_CARD_COUNT,
};
use crate::{FetchState, Location, OfferSource, Step, StepStatus, WizardState};

/// Everything one booking session knows, owned by a single wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    default_location: Location,
    source: OfferSource,
    wizard: WizardState,
    dirty: bool,
}

impl AppState {
    /// `default_location` is what the listing loads on mount.
    pub fn new(default_location: Location) -> Self {
        Self {
            default_location,
            source: OfferSource::new(),
            wizard: WizardState::new(),
            dirty: false,
        }
    }

    pub fn default_location(&self) -> &Location {
        &self.default_location
    }

    pub fn source(&self) -> &OfferSource {
        &self.source
    }

    pub fn wizard(&self) -> &WizardState {
        &self.wizard
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut OfferSource, &mut WizardState) {
        (&mut self.source, &mut self.wizard)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether anything changed since the last call, and resets it.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let current = self.wizard.current_step();
        let selected = self.wizard.selected_offer_id();

        let offers = match self.source.state() {
            FetchState::Idle | FetchState::Loading => OffersPanel::Loading {
                skeleton_cards: SKELETON_CARD_COUNT,
            },
            FetchState::Error(message) => OffersPanel::Error {
                message: message.clone(),
            },
            FetchState::Ready(offers) if offers.is_empty() => OffersPanel::Empty,
            FetchState::Ready(offers) => OffersPanel::Grid(
                offers
                    .iter()
                    .map(|offer| OfferCardView::from_offer(offer, selected == Some(offer.id)))
                    .collect(),
            ),
        };

        let confirmation = if self.wizard.is_confirmation_open() {
            self.source
                .ready_offers()
                .and_then(|offers| self.wizard.selected_offer(offers))
                .map(ConfirmationView::from_offer)
        } else {
            None
        };

        AppViewModel {
            location: self.source.location().cloned(),
            current_step: current,
            steps: Step::ALL
                .iter()
                .map(|step| StepView {
                    step: *step,
                    label: step.label(),
                    status: StepStatus::of(*step, current),
                })
                .collect(),
            progress_percent: self.wizard.progress_percent(),
            offers,
            selected_offer_id: selected,
            confirmation,
            dirty: self.dirty,
        }
    }
}
