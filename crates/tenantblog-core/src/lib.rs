//! # Tenantblog Core
//!
//! The domain layer of the multi-tenant blog.
//! Posts are partitioned by organization id; identity and storage live behind ports.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
pub use service::BlogService;
