use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("postcode must not be empty")]
    EmptyPostcode,
}

/// The (postcode, area) pair that keys an offer lookup.
///
/// Two locations are the same lookup exactly when both parts are equal, so a
/// change to either one triggers a fresh fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLocation", into = "RawLocation")]
pub struct Location {
    postcode: String,
    area: Option<String>,
}

impl Location {
    pub fn new(postcode: &str, area: Option<&str>) -> Result<Self, LocationError> {
        let postcode = postcode.trim();
        if postcode.is_empty() {
            return Err(LocationError::EmptyPostcode);
        }
        let area = area
            .map(str::trim)
            .filter(|area| !area.is_empty())
            .map(ToOwned::to_owned);
        Ok(Self {
            postcode: postcode.to_owned(),
            area,
        })
    }

    pub fn postcode(&self) -> &str {
        &self.postcode
    }

    pub fn area(&self) -> Option<&str> {
        self.area.as_deref()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.area {
            Some(area) => write!(f, "{}, {}", self.postcode, area),
            None => f.write_str(&self.postcode),
        }
    }
}

// Serde shape used by configuration files.
#[derive(Serialize, Deserialize)]
struct RawLocation {
    postcode: String,
    #[serde(default)]
    area: Option<String>,
}

impl TryFrom<RawLocation> for Location {
    type Error = LocationError;

    fn try_from(raw: RawLocation) -> Result<Self, Self::Error> {
        Location::new(&raw.postcode, raw.area.as_deref())
    }
}

impl From<Location> for RawLocation {
    fn from(location: Location) -> Self {
        Self {
            postcode: location.postcode,
            area: location.area,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_blank_area() {
        let location = Location::new("  NR32 ", Some("   ")).unwrap();
        assert_eq!(location.postcode(), "NR32");
        assert_eq!(location.area(), None);
        assert_eq!(location.to_string(), "NR32");
    }

    #[test]
    fn rejects_blank_postcode() {
        assert_eq!(Location::new(" ", Some("Lowestoft")), Err(LocationError::EmptyPostcode));
    }

    #[test]
    fn identity_is_the_pair() {
        let plain = Location::new("NR32", None).unwrap();
        let with_area = Location::new("NR32", Some("Lowestoft")).unwrap();
        assert_ne!(plain, with_area);
        assert_eq!(with_area, Location::new("NR32", Some(" Lowestoft ")).unwrap());
        assert_eq!(with_area.to_string(), "NR32, Lowestoft");
    }
}
