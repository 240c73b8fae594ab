use std::fmt::Write as _;

use skiphire_core::{
    AppViewModel, ConfirmationView, OfferCardView, OffersPanel, Step, StepStatus, StepView,
};

const RULE: &str = "------------------------------------------------------------";
const DISCLAIMER: &str = "Imagery and information shown may not reflect the exact shape or \
size specification, colours may vary, options and/or accessories may be featured at \
additional cost.";

/// Draws the whole wizard screen as plain text.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    match &view.location {
        Some(location) => {
            let _ = writeln!(out, "Skip hire for {location}");
        }
        None => {
            let _ = writeln!(out, "Skip hire");
        }
    }
    out.push_str(&render_steps(&view.steps, view.progress_percent));
    let _ = writeln!(out, "{RULE}");

    if view.current_step == Step::SelectSkip {
        out.push_str(&render_offers(&view.offers));
    } else {
        let _ = writeln!(
            out,
            "{} is not available in this version yet.",
            view.current_step.label()
        );
        if let Some(id) = view.selected_offer_id {
            let _ = writeln!(out, "Selected skip: #{id}");
        }
    }

    if let Some(confirmation) = &view.confirmation {
        let _ = writeln!(out, "{RULE}");
        out.push_str(&render_confirmation(confirmation));
    }
    out
}

fn render_steps(steps: &[StepView], progress_percent: u8) -> String {
    let mut out = String::new();
    for step in steps {
        let (marker, suffix) = match step.status {
            StepStatus::Completed => ("[x]", ""),
            StepStatus::Active => ("[>]", "  (current step)"),
            StepStatus::Pending => ("[ ]", ""),
        };
        let _ = writeln!(out, "  {marker} {}{suffix}", step.label);
    }
    let _ = writeln!(out, "  Progress: {progress_percent}%");
    out
}

fn render_offers(panel: &OffersPanel) -> String {
    let mut out = String::new();
    match panel {
        OffersPanel::Loading { skeleton_cards } => {
            let _ = writeln!(out, "Loading skips...");
            for _ in 0..*skeleton_cards {
                let _ = writeln!(out, "  [ ........ ]  ....  ....");
            }
        }
        OffersPanel::Error { message } => {
            let _ = writeln!(out, "Something went wrong");
            let _ = writeln!(out, "  {message}");
            let _ = writeln!(out, "Type `retry` to try again.");
        }
        OffersPanel::Empty => {
            let _ = writeln!(out, "No skips available for this location.");
        }
        OffersPanel::Grid(cards) => {
            let _ = writeln!(out, "Choose your skip size ({} available):", cards.len());
            for card in cards {
                out.push_str(&render_card(card));
            }
            let _ = writeln!(out, "Type `select <id>` to choose a skip.");
        }
    }
    out
}

fn render_card(card: &OfferCardView) -> String {
    let marker = if card.is_selected { "*" } else { " " };
    let mut badges = Vec::new();
    if card.heavy_waste {
        badges.push("Heavy Waste");
    }
    if card.road_legal {
        badges.push("Road Legal");
    }
    if card.permit_required {
        badges.push("Permit Required");
    }
    format!(
        "{marker} #{id:<8} {title:<14} \u{a3}{price:>9}  Hire period: {hire:<9} {badges}\n",
        id = card.id,
        title = card.title,
        price = card.total_price,
        hire = card.hire_period,
        badges = badges.join(" | "),
    )
}

fn render_confirmation(confirmation: &ConfirmationView) -> String {
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };
    let mut out = String::new();
    let _ = writeln!(out, "Confirm Skip Selection");
    let _ = writeln!(out, "  {DISCLAIMER}");
    let _ = writeln!(out, "  {} (#{})", confirmation.title, confirmation.id);
    let _ = writeln!(out, "  Total Price: \u{a3}{}", confirmation.total_price);
    let _ = writeln!(
        out,
        "  Including VAT ({}%): \u{a3}{}",
        confirmation.vat_rate, confirmation.vat_amount
    );
    let _ = writeln!(out, "  Hire period: {}", confirmation.hire_period);
    let _ = writeln!(out, "  Road Legal: {}", yes_no(confirmation.road_legal));
    let _ = writeln!(out, "  Heavy Waste Accepted: {}", yes_no(confirmation.heavy_waste));
    if confirmation.permit_required {
        let _ = writeln!(out, "  Permit Required");
    }
    let _ = writeln!(
        out,
        "Type `continue` to go to the next step, `back` to change, or `close`."
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use skiphire_core::{update, AppState, Effect, FetchFailure, Location, Msg, Offer};

    fn offer(id: u64, size: u32, allowed_on_road: bool) -> Offer {
        Offer {
            id,
            size,
            hire_period_days: 14,
            transport_cost: None,
            per_tonne_cost: None,
            price_before_vat: Decimal::from(278),
            vat_rate: Decimal::from(20),
            postcode: "NR32".to_string(),
            area: "Lowestoft".to_string(),
            forbidden: false,
            created_at: String::new(),
            updated_at: String::new(),
            allowed_on_road,
            allows_heavy_waste: true,
        }
    }

    fn loaded(result: Result<Vec<Offer>, FetchFailure>) -> AppState {
        let location = Location::new("NR32", Some("Lowestoft")).unwrap();
        let (state, effects) = update(AppState::new(location), Msg::Mounted);
        let Some(Effect::FetchOffers { generation, .. }) = effects.into_iter().next() else {
            panic!("mount must fetch");
        };
        update(state, Msg::OffersLoaded { generation, result }).0
    }

    #[test]
    fn loading_screen_shows_skeletons_and_steps() {
        let location = Location::new("NR32", Some("Lowestoft")).unwrap();
        let (state, _) = update(AppState::new(location), Msg::Mounted);
        let text = render(&state.view());

        assert!(text.contains("Skip hire for NR32, Lowestoft"));
        assert!(text.contains("[x] Postcode"));
        assert!(text.contains("[>] Select Skip  (current step)"));
        assert!(text.contains("[ ] Payment"));
        assert_eq!(text.matches("[ ........ ]").count(), 8);
    }

    #[test]
    fn grid_lists_cards_with_prices_and_badges() {
        let state = loaded(Ok(vec![offer(2, 6, false), offer(1, 4, true)]));
        let text = render(&state.view());

        let four = text.find("4 Yard Skip").unwrap();
        let six = text.find("6 Yard Skip").unwrap();
        assert!(four < six);
        assert!(text.contains("\u{a3}   333.60"));
        assert!(text.contains("Heavy Waste | Permit Required"));
        assert!(text.contains("Hire period: 14 days"));
    }

    #[test]
    fn error_screen_offers_retry() {
        let state = loaded(Err(FetchFailure::Network {
            status: Some(500),
            status_text: Some("Internal Server Error".to_string()),
        }));
        let text = render(&state.view());
        assert!(text.contains("Failed to fetch skips: 500 Internal Server Error"));
        assert!(text.contains("retry"));
    }

    #[test]
    fn empty_listing_says_so() {
        let text = render(&loaded(Ok(Vec::new())).view());
        assert!(text.contains("No skips available for this location."));
    }

    #[test]
    fn confirmation_summarises_selected_skip() {
        let state = loaded(Ok(vec![offer(1, 4, false)]));
        let (state, _) = update(state, Msg::OfferSelected(1));
        let text = render(&state.view());

        assert!(text.contains("Confirm Skip Selection"));
        assert!(text.contains("Total Price: \u{a3}333.60"));
        assert!(text.contains("Including VAT (20%): \u{a3}55.60"));
        assert!(text.contains("Permit Required"));
        assert!(text.contains("* #1"));
    }

    #[test]
    fn later_steps_show_placeholder() {
        let state = loaded(Ok(vec![offer(1, 4, true)]));
        let (state, _) = update(state, Msg::OfferSelected(1));
        let (state, _) = update(state, Msg::ContinueClicked);
        let text = render(&state.view());

        assert!(text.contains("Permit Check is not available in this version yet."));
        assert!(text.contains("Selected skip: #1"));
        assert!(!text.contains("Confirm Skip Selection"));
    }
}
