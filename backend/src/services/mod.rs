//! Business logic services for the AgroSense advisory server

pub mod soil;
pub mod weather;

pub use soil::SoilService;
pub use weather::WeatherService;
