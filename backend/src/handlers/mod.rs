//! HTTP handlers for the AgroSense advisory server

pub mod health;
pub mod soil;
pub mod weather;

pub use health::*;
pub use soil::*;
pub use weather::*;
