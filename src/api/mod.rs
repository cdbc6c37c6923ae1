//! API Module
//!
//! HTTP handlers and routing for the top news REST API.
//!
//! # Endpoints
//! - `GET /top-news/?num=N` - The first N stories of the current ranking
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
