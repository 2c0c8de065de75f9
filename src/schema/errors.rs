//! # Schema Errors
//!
//! Rejections raised while validating request payloads, before any store
//! access.

use thiserror::Error;

/// Result type for schema validation
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Payload validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Value outside the rendering-type enumeration
    #[error("Invalid rendering_type '{0}': expected one of SSR, SSG, CSR, ISR, DSR")]
    UnknownRenderingType(String),

    /// Explicit null supplied for a non-nullable field
    #[error("Field '{0}' may not be null")]
    NullField(&'static str),

    /// Required string field is empty
    #[error("Field '{0}' may not be empty")]
    EmptyField(&'static str),

    /// Field exceeds its column width
    #[error("Field '{field}' exceeds {max} characters")]
    TooLong { field: &'static str, max: usize },
}
