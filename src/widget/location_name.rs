use tracing::error;

use crate::services::geocoding_client::geocoding_service::Geocoder;
use crate::types::lat_long_location::LatLongLocation;

/// Reverse-geocode a coordinate into a short human label (road, locality,
/// state). Falls back to the raw coordinates when the lookup fails or
/// resolves to nothing usable.
pub async fn location_name<G: Geocoder + ?Sized>(
    geocoder: &G,
    location: LatLongLocation,
) -> String {
    match geocoder.reverse(location).await {
        Ok(Some(place)) => {
            let mut parts = Vec::new();
            if let Some(road) = place.address.road.as_deref() {
                parts.push(road);
            }
            if let Some(locality) = place.address.locality() {
                parts.push(locality);
            }
            if let Some(state) = place.address.state.as_deref() {
                parts.push(state);
            }
            if parts.is_empty() {
                coordinate_label(location)
            } else {
                parts.join(", ")
            }
        }
        Ok(None) => coordinate_label(location),
        Err(e) => {
            error!("Failed to resolve location name: {}", e);
            coordinate_label(location)
        }
    }
}

fn coordinate_label(location: LatLongLocation) -> String {
    format!(
        "Location: {:.4}, {:.4}",
        location.latitude, location.longitude
    )
}
