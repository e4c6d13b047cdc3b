pub mod airports;
pub mod fares;
pub mod flight_url;
pub mod launcher;
