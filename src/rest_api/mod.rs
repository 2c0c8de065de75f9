//! # Glossary REST API Module
//!
//! Provides the HTTP endpoints for term CRUD, filtered listing and
//! aggregate statistics.

pub mod errors;
pub mod parser;
pub mod response;
pub mod server;

pub use errors::{ErrorResponse, RestError, RestResult};
pub use parser::{ListParams, ListQuery, DEFAULT_LIMIT};
pub use response::MessageResponse;
pub use server::{glossary_routes, GlossaryState};
