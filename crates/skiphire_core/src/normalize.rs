use crate::Offer;

/// Removes forbidden offers and orders the rest by size, smallest first.
///
/// The sort is stable, so offers of equal size keep the order the listing
/// service sent them in. Applying it twice gives the same result as once.
pub fn normalize(raw: &[Offer]) -> Vec<Offer> {
    let mut offers: Vec<Offer> = raw.iter().filter(|offer| !offer.forbidden).cloned().collect();
    offers.sort_by_key(|offer| offer.size);
    offers
}
