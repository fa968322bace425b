use crate::types::lat_long_location::LatLongLocation;
use crate::types::structured_address::StructuredAddress;

/// One candidate location offered to the user. Rebuilt wholesale on every
/// successful query, never mutated in place.
#[derive(Clone, Debug, PartialEq)]
pub struct Suggestion {
    pub display_text: String,
    pub location: LatLongLocation,
    pub address: StructuredAddress,
}

/// The location the user committed. Persists until a new selection is made
/// or the address field is cleared.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedLocation {
    pub location: LatLongLocation,
    pub address: StructuredAddress,
}
