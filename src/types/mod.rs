pub mod lat_long_location;
pub mod panel_content;
pub mod structured_address;
pub mod suggestion;
