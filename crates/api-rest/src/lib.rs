//! # API REST
//!
//! REST API implementation for RSG.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Uses `api-shared` for common types and `rsg-core` for report generation.

#![warn(rust_2018_idioms)]

pub use rsg_core::ReportGenerator;
