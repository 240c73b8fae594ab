use crate::offer::format_price;
use crate::{Location, Offer, OfferId, Step, StepStatus};

/// Placeholder cards shown while a listing loads.
pub const SKELETON_CARD_COUNT: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub location: Option<Location>,
    pub current_step: Step,
    pub steps: Vec<StepView>,
    pub progress_percent: u8,
    pub offers: OffersPanel,
    pub selected_offer_id: Option<OfferId>,
    pub confirmation: Option<ConfirmationView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    pub step: Step,
    pub label: &'static str,
    pub status: StepStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OffersPanel {
    Loading { skeleton_cards: usize },
    Error { message: String },
    Empty,
    Grid(Vec<OfferCardView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferCardView {
    pub id: OfferId,
    pub size: u32,
    pub title: String,
    /// VAT-inclusive, two decimals, no currency sign; `n/a` if it overflows.
    pub total_price: String,
    pub hire_period: String,
    pub heavy_waste: bool,
    pub road_legal: bool,
    pub permit_required: bool,
    pub is_selected: bool,
}

impl OfferCardView {
    pub(crate) fn from_offer(offer: &Offer, is_selected: bool) -> Self {
        Self {
            id: offer.id,
            size: offer.size,
            title: format!("{} Yard Skip", offer.size),
            total_price: format_price(offer.total_price()),
            hire_period: offer.hire_period_label(),
            heavy_waste: offer.allows_heavy_waste,
            road_legal: offer.allowed_on_road,
            permit_required: offer.requires_permit(),
            is_selected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationView {
    pub id: OfferId,
    pub title: String,
    pub total_price: String,
    pub vat_rate: String,
    pub vat_amount: String,
    pub hire_period: String,
    pub road_legal: bool,
    pub heavy_waste: bool,
    pub permit_required: bool,
}

impl ConfirmationView {
    pub(crate) fn from_offer(offer: &Offer) -> Self {
        Self {
            id: offer.id,
            title: format!("{} Yard Skip", offer.size),
            total_price: format_price(offer.total_price()),
            vat_rate: offer.vat_rate.normalize().to_string(),
            vat_amount: format_price(offer.vat_amount()),
            hire_period: offer.hire_period_label(),
            road_legal: offer.allowed_on_road,
            heavy_waste: offer.allows_heavy_waste,
            permit_required: offer.requires_permit(),
        }
    }
}
