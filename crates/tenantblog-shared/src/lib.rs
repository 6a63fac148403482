//! # Tenantblog Shared
//!
//! Wire types for the HTTP surface: request/response DTOs and error bodies.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
