use skiphire_logging::{skiphire_debug, skiphire_info};

use crate::{AppState, Effect, Location, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => {
            // Only the first mount loads; later ones keep whatever is on screen.
            if state.source().location().is_some() {
                return (state, Vec::new());
            }
            let location = state.default_location().clone();
            start_fetch(&mut state, location)
        }
        Msg::LocationSubmitted(location) => {
            if state.source().location() == Some(&location) {
                return (state, Vec::new());
            }
            // A pick from another location's listing means nothing here.
            let (_, wizard) = state.parts_mut();
            wizard.go_back();
            start_fetch(&mut state, location)
        }
        Msg::RetryClicked => {
            let (source, wizard) = state.parts_mut();
            match (source.retry(), source.location().cloned()) {
                (Some(generation), Some(location)) => {
                    // The summary is hidden while loading, so it cannot stay open.
                    wizard.dismiss_confirmation();
                    state.mark_dirty();
                    vec![Effect::FetchOffers {
                        generation,
                        location,
                    }]
                }
                _ => Vec::new(),
            }
        }
        Msg::OffersLoaded { generation, result } => {
            let (source, wizard) = state.parts_mut();
            if source.complete(generation, result) {
                if let Some(offers) = source.ready_offers() {
                    if wizard.reconcile(offers) {
                        skiphire_info!("Selection cleared: offer no longer listed");
                    }
                }
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::OfferSelected(id) => {
            let (source, wizard) = state.parts_mut();
            let selected = wizard.select_offer(id, source.ready_offers());
            match selected {
                Ok(()) => state.mark_dirty(),
                Err(err) => skiphire_debug!("Ignoring selection of {}: {}", id, err),
            }
            Vec::new()
        }
        Msg::ContinueClicked => {
            let (_, wizard) = state.parts_mut();
            // Continue lives on the confirmation surface.
            if !wizard.is_confirmation_open() {
                skiphire_debug!("Ignoring continue: confirmation is not open");
                return (state, Vec::new());
            }
            if wizard.confirm_selection() {
                skiphire_info!("Advanced to step {:?}", wizard.current_step());
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::BackClicked => {
            let (_, wizard) = state.parts_mut();
            if wizard.selected_offer_id().is_some() || wizard.is_confirmation_open() {
                wizard.go_back();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ConfirmationDismissed => {
            let (_, wizard) = state.parts_mut();
            if wizard.is_confirmation_open() {
                wizard.dismiss_confirmation();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn start_fetch(state: &mut AppState, location: Location) -> Vec<Effect> {
    let (source, _) = state.parts_mut();
    let generation = source.begin(location.clone());
    state.mark_dirty();
    vec![Effect::FetchOffers {
        generation,
        location,
    }]
}
