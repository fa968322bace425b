use async_trait::async_trait;
use tracing::warn;
use urlencoding::encode;

use crate::types::lat_long_location::LatLongLocation;
use crate::types::structured_address::StructuredAddress;

use super::types::{
    geocoding_service_error::GeocodingServiceError,
    nominatim_reverse_response::NominatimReverseResponse,
    nominatim_search_response::{NominatimResponsePlaceAddress, NominatimSearchResponsePlace},
};

pub const DEFAULT_HOST: &str = "https://nominatim.openstreetmap.org";

#[derive(Clone)]
pub struct GeocodingServiceConfig {
    pub host: String,
    pub accept_language: String,
}

impl Default for GeocodingServiceConfig {
    fn default() -> Self {
        GeocodingServiceConfig {
            host: DEFAULT_HOST.to_string(),
            accept_language: "en-US,en;q=0.9".to_string(),
        }
    }
}

#[derive(Clone)]
pub struct GeocodingService {
    config: GeocodingServiceConfig,
    client: reqwest::Client,
}

/// A geocoded place with its coordinates parsed and its address flattened
/// into the shared structured form.
#[derive(Clone, Debug, PartialEq)]
pub struct GeocodedPlace {
    pub display_name: String,
    pub location: LatLongLocation,
    pub address: StructuredAddress,
}

/// Seam between the widget and the concrete geocoding backend.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<GeocodedPlace>, GeocodingServiceError>;

    async fn reverse(
        &self,
        location: LatLongLocation,
    ) -> Result<Option<GeocodedPlace>, GeocodingServiceError>;
}

impl GeocodingService {
    pub fn new(config: GeocodingServiceConfig) -> Self {
        GeocodingService {
            config,
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, GeocodingServiceError> {
        let resp = self
            .client
            .get(url)
            .header("Accept-Language", &self.config.accept_language)
            .send()
            .await
            .map_err(|e| {
                GeocodingServiceError::Internal(format!("Failed to send request: {}", e))
            })?
            .error_for_status()
            .map_err(|e| GeocodingServiceError::Internal(format!("Request failed: {}", e)))?;

        resp.json::<T>().await.map_err(|e| {
            GeocodingServiceError::Internal(format!("Failed to get response body: {}", e))
        })
    }
}

#[async_trait]
impl Geocoder for GeocodingService {
    async fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<GeocodedPlace>, GeocodingServiceError> {
        let url = format!(
            "{}/search?format=json&q={}&addressdetails=1&limit={}",
            self.config.host,
            encode(query),
            limit
        );

        let places = self.get_json::<Vec<NominatimSearchResponsePlace>>(&url).await?;

        Ok(places
            .into_iter()
            .filter_map(|p| match (p.lat.parse::<f64>(), p.lon.parse::<f64>()) {
                (Ok(latitude), Ok(longitude)) => Some(GeocodedPlace {
                    display_name: p.display_name,
                    location: LatLongLocation::new(latitude, longitude),
                    address: structured_address(p.address),
                }),
                _ => {
                    warn!(
                        "Skipping place with unparsable coordinates: {}",
                        p.display_name
                    );
                    None
                }
            })
            .collect())
    }

    async fn reverse(
        &self,
        location: LatLongLocation,
    ) -> Result<Option<GeocodedPlace>, GeocodingServiceError> {
        let url = format!(
            "{}/reverse?format=json&lat={}&lon={}",
            self.config.host, location.latitude, location.longitude
        );

        let resp = self.get_json::<NominatimReverseResponse>(&url).await?;

        // Nominatim reports an unresolvable coordinate as 200 with no address.
        let address = match resp.address {
            Some(address) => address,
            None => return Ok(None),
        };

        let latitude = resp.lat.and_then(|l| l.parse().ok());
        let longitude = resp.lon.and_then(|l| l.parse().ok());

        Ok(Some(GeocodedPlace {
            display_name: resp.display_name.unwrap_or_default(),
            location: LatLongLocation::new(
                latitude.unwrap_or(location.latitude),
                longitude.unwrap_or(location.longitude),
            ),
            address: structured_address(Some(address)),
        }))
    }
}

fn structured_address(address: Option<NominatimResponsePlaceAddress>) -> StructuredAddress {
    match address {
        Some(a) => StructuredAddress {
            road: a.road,
            city: a.city,
            town: a.town,
            village: a.village,
            postcode: a.postcode,
            state: a.state,
            country: a.country,
        },
        None => StructuredAddress::default(),
    }
}
