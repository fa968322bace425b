/// Structured address sub-fields as returned by the geocoder. Any of them
/// may be absent for a given place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StructuredAddress {
    pub road: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub postcode: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl StructuredAddress {
    /// Best available locality name: city, then town, then village.
    pub fn locality(&self) -> Option<&str> {
        self.city
            .as_deref()
            .or(self.town.as_deref())
            .or(self.village.as_deref())
    }
}
