pub mod autocomplete;
pub mod host;
pub mod location_name;
