//! Address suggestion widget: debounced, cancellable address autocomplete
//! backed by a geocoding service, with keyboard navigation, dependent form
//! field population, and a map preview upsert.

pub mod services;
pub mod types;
pub mod widget;

pub use services::geocoding_client::geocoding_service::{
    GeocodedPlace, Geocoder, GeocodingService, GeocodingServiceConfig,
};
pub use widget::autocomplete::{AddressAutocomplete, AutocompleteConfig, NavKey};
pub use widget::host::{AddressForm, MapView, SuggestionPanel};
