use serde::{Deserialize, Serialize};

use super::nominatim_search_response::NominatimResponsePlaceAddress;

/// Response of `/reverse?format=json`. An unresolvable coordinate still
/// answers 200, with an `error` field and no `address`.
#[derive(Serialize, Deserialize, Default)]
pub struct NominatimReverseResponse {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub lon: Option<String>,
    #[serde(default)]
    pub address: Option<NominatimResponsePlaceAddress>,
}
