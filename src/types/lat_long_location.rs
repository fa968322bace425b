#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLongLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLongLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        LatLongLocation {
            latitude,
            longitude,
        }
    }
}
