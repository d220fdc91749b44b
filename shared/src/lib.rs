//! Shared engine and models for the AgroSense platform
//!
//! This crate holds the agronomic insight and advisory engine shared
//! between the backend and browser clients (via WASM): the data model, the
//! threshold tables, and the five pipeline stages (metric classification,
//! health scoring, forecast aggregation, risk derivation, advisory text).
//! Everything here is pure and synchronous; fetching inputs is the
//! caller's concern.

pub mod advisory;
pub mod aggregate;
pub mod insights;
pub mod models;
pub mod risk;
pub mod scoring;
pub mod thresholds;
pub mod validation;

pub use advisory::*;
pub use aggregate::*;
pub use insights::*;
pub use models::*;
pub use risk::*;
pub use scoring::*;
pub use thresholds::*;
pub use validation::*;
