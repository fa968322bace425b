pub mod geocoding_client;
