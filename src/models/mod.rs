//! Request and Response models for the top news API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! deserializing query strings and serializing response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::TopNewsQuery;
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
