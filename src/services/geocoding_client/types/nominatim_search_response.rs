use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Default)]
pub struct NominatimResponsePlaceAddress {
    pub road: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub postcode: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

/// One entry of the JSON array returned by `/search?format=json`. The
/// `address` object is only present when `addressdetails=1` is requested.
#[derive(Serialize, Deserialize)]
pub struct NominatimSearchResponsePlace {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub address: Option<NominatimResponsePlaceAddress>,
}
