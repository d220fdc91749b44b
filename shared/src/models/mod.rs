//! Domain models for the AgroSense platform

mod advisory;
mod forecast;
mod health;
mod insight;
mod risk;
mod soil;

pub use advisory::*;
pub use forecast::*;
pub use health::*;
pub use insight::*;
pub use risk::*;
pub use soil::*;
