//! Term schema
//!
//! Defines the term entity, the closed rendering-type domain and the
//! create / update request shapes validated at the boundary.

mod errors;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaResult};
pub use types::{NewTerm, RenderingType, Term, TermField, TermPatch};
pub use validator::{parse_rendering_type, TermCreate, TermUpdate, MAX_NAME_LEN};
