use std::time::Duration;

use reqwest::header::ACCEPT;
use skiphire_core::{Location, Offer};
use skiphire_logging::skiphire_debug;
use url::Url;

use crate::ListingError;

pub const DEFAULT_BASE_URL: &str = "https://app.wewantwaste.co.uk";
pub const DEFAULT_ENDPOINT_PATH: &str = "/api/skips/by-location";

#[derive(Debug, Clone)]
pub struct ListingSettings {
    pub base_url: String,
    pub endpoint_path: String,
    /// `None` waits for as long as the connection takes.
    pub connect_timeout: Option<Duration>,
    /// `None` lets a hung request stay pending until superseded.
    pub request_timeout: Option<Duration>,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_string(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

impl ListingSettings {
    /// Full request URL for `location`, with `area` only when present.
    pub fn url_for(&self, location: &Location) -> Result<Url, ListingError> {
        let base = Url::parse(&self.base_url)
            .map_err(|err| ListingError::network(format!("invalid base url: {err}")))?;
        let mut url = base
            .join(&self.endpoint_path)
            .map_err(|err| ListingError::network(format!("invalid endpoint path: {err}")))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("postcode", location.postcode());
            if let Some(area) = location.area() {
                query.append_pair("area", area);
            }
        }
        Ok(url)
    }
}

/// Reads the offers listed for a location. Every call is a fresh request;
/// retrying is up to the caller.
#[async_trait::async_trait]
pub trait ListingClient: Send + Sync {
    async fn fetch_offers(&self, location: &Location) -> Result<Vec<Offer>, ListingError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestListingClient {
    settings: ListingSettings,
}

impl ReqwestListingClient {
    pub fn new(settings: ListingSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ListingError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| ListingError::network(err.to_string()))
    }
}

#[async_trait::async_trait]
impl ListingClient for ReqwestListingClient {
    async fn fetch_offers(&self, location: &Location) -> Result<Vec<Offer>, ListingError> {
        let url = self.settings.url_for(location)?;
        let client = self.build_client()?;
        skiphire_debug!("GET {}", url);

        let response = client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ListingError::Network {
                status: Some(status.as_u16()),
                status_text: status.canonical_reason().map(ToOwned::to_owned),
                message: status.to_string(),
            });
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        serde_json::from_slice::<Vec<Offer>>(&body)
            .map_err(|err| ListingError::Decode(err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ListingError {
    if err.is_timeout() {
        return ListingError::network(format!("timed out: {err}"));
    }
    ListingError::network(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_carries_postcode_and_optional_area() {
        let settings = ListingSettings {
            base_url: "http://localhost:8080".to_string(),
            ..ListingSettings::default()
        };
        let with_area = Location::new("NR32", Some("Lowestoft")).unwrap();
        assert_eq!(
            settings.url_for(&with_area).unwrap().as_str(),
            "http://localhost:8080/api/skips/by-location?postcode=NR32&area=Lowestoft"
        );

        let spaced = Location::new("LE10 1SH", None).unwrap();
        assert_eq!(
            settings.url_for(&spaced).unwrap().as_str(),
            "http://localhost:8080/api/skips/by-location?postcode=LE10+1SH"
        );
    }

    #[test]
    fn bad_base_url_is_a_network_error() {
        let settings = ListingSettings {
            base_url: "not a url".to_string(),
            ..ListingSettings::default()
        };
        let location = Location::new("NR32", None).unwrap();
        assert!(matches!(
            settings.url_for(&location),
            Err(ListingError::Network { status: None, .. })
        ));
    }
}
