use crate::types::lat_long_location::LatLongLocation;
use crate::types::panel_content::PanelContent;

/// The suggestion panel container owned by the host page.
pub trait SuggestionPanel: Send {
    /// Replace the rendered rows. `active_index` marks the highlighted row,
    /// shared between keyboard and mouse.
    fn render(&mut self, content: &PanelContent, active_index: Option<usize>);

    fn set_visible(&mut self, visible: bool);
}

/// Read/write access to the form fields the widget populates on commit.
pub trait AddressForm: Send {
    fn address_text(&self) -> String;

    fn set_address_text(&mut self, value: &str);
    fn set_city(&mut self, value: &str);
    fn set_postal_code(&mut self, value: &str);
    fn set_province(&mut self, value: &str);
    fn set_country(&mut self, value: &str);
    fn set_coordinates(&mut self, latitude: f64, longitude: f64);
}

/// The map preview. The widget drives these as an upsert pair: `create_view`
/// and `place_marker` exactly once, `set_view` and `move_marker` afterwards.
pub trait MapView: Send {
    fn create_view(&mut self, center: LatLongLocation, zoom: u8);
    fn set_view(&mut self, center: LatLongLocation, zoom: u8);
    fn place_marker(&mut self, center: LatLongLocation);
    fn move_marker(&mut self, center: LatLongLocation);
}
