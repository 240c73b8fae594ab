use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

pub type OfferId = u64;

/// Decimal places used for every displayed money amount.
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// Shown in place of an amount that does not fit in a `Decimal`.
pub const PRICE_UNAVAILABLE: &str = "n/a";

/// One rentable skip as returned by the listing service.
///
/// Records are never modified after decoding; display values such as the
/// VAT-inclusive total are derived on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub id: OfferId,
    /// Capacity in cubic yards.
    pub size: u32,
    pub hire_period_days: u32,
    #[serde(default)]
    pub transport_cost: Option<Decimal>,
    #[serde(default)]
    pub per_tonne_cost: Option<Decimal>,
    pub price_before_vat: Decimal,
    /// VAT percentage, e.g. `20` for 20%.
    #[serde(rename = "vat")]
    pub vat_rate: Decimal,
    #[serde(default)]
    pub postcode: String,
    #[serde(default)]
    pub area: String,
    pub forbidden: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    pub allowed_on_road: bool,
    pub allows_heavy_waste: bool,
}

impl Offer {
    /// Price including VAT, rounded to pence.
    ///
    /// `None` when the amount overflows; the listing service controls both
    /// operands.
    pub fn total_price(&self) -> Option<Decimal> {
        let rate = Decimal::ONE_HUNDRED.checked_add(self.vat_rate)?;
        percent_of(self.price_before_vat, rate)
    }

    /// VAT portion of the total, rounded to pence. `None` on overflow.
    pub fn vat_amount(&self) -> Option<Decimal> {
        percent_of(self.price_before_vat, self.vat_rate)
    }

    pub fn hire_period_label(&self) -> String {
        format!("{} days", self.hire_period_days)
    }

    /// Skips that may not stand on a public road need a council permit.
    pub fn requires_permit(&self) -> bool {
        !self.allowed_on_road
    }
}

fn percent_of(amount: Decimal, percent: Decimal) -> Option<Decimal> {
    let scaled = amount.checked_mul(percent)?;
    scaled.checked_div(Decimal::ONE_HUNDRED).map(round_money)
}

fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(PRICE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a money amount with exactly two decimals, e.g. `312.00`.
pub fn format_money(value: Decimal) -> String {
    format!("{:.2}", round_money(value))
}

/// Like [`format_money`], with [`PRICE_UNAVAILABLE`] for a missing amount.
pub fn format_price(value: Option<Decimal>) -> String {
    value.map_or_else(|| PRICE_UNAVAILABLE.to_string(), format_money)
}
