//! API models for the AgroSense advisory server
//!
//! Re-exports models from the shared crate and adds the response envelope

use serde::Serialize;

pub use shared::models::*;

/// Uniform success envelope for API responses
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Wrap a payload in the success envelope
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
