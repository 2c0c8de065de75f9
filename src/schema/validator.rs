//! Create and update request shapes and their validation.
//!
//! Validation happens before the store is touched:
//! - `TermCreate` requires every attribute
//! - `TermUpdate` makes every attribute optional; an absent key and an
//!   explicit `null` are kept apart so only supplied fields are written
//! - `rendering_type` must be a member of the enumeration

use serde::{Deserialize, Deserializer, Serialize};

use super::errors::{SchemaError, SchemaResult};
use super::types::{NewTerm, RenderingType, TermField, TermPatch};

/// Width of the `name` column
pub const MAX_NAME_LEN: usize = 100;

/// Create payload: every attribute required
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermCreate {
    pub name: String,
    pub description: String,
    pub rendering_type: String,
    pub frameworks: Vec<String>,
    pub use_cases: Vec<String>,
    pub advantages: Vec<String>,
    pub disadvantages: Vec<String>,
}

impl TermCreate {
    /// Validates the payload into a storable term
    pub fn validate(self) -> SchemaResult<NewTerm> {
        Ok(NewTerm {
            name: validate_name(self.name)?,
            description: self.description,
            rendering_type: parse_rendering_type(&self.rendering_type)?,
            frameworks: self.frameworks,
            use_cases: self.use_cases,
            advantages: self.advantages,
            disadvantages: self.disadvantages,
        })
    }
}

/// Update payload.
///
/// Outer `None` means the key was absent, `Some(None)` means it was sent as
/// `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TermUpdate {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub rendering_type: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub frameworks: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "present")]
    pub use_cases: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "present")]
    pub advantages: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "present")]
    pub disadvantages: Option<Option<Vec<String>>>,
}

/// Marks a key as present; serde's `default` covers the absent case
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl TermUpdate {
    /// Validates the payload into the explicit list of changes to apply
    pub fn validate(self) -> SchemaResult<TermPatch> {
        let mut patch = TermPatch::new();

        if let Some(name) = supplied("name", self.name)? {
            patch = patch.set(TermField::Name(validate_name(name)?));
        }
        if let Some(description) = supplied("description", self.description)? {
            patch = patch.set(TermField::Description(description));
        }
        if let Some(raw) = supplied("rendering_type", self.rendering_type)? {
            patch = patch.set(TermField::RenderingType(parse_rendering_type(&raw)?));
        }
        if let Some(v) = supplied("frameworks", self.frameworks)? {
            patch = patch.set(TermField::Frameworks(v));
        }
        if let Some(v) = supplied("use_cases", self.use_cases)? {
            patch = patch.set(TermField::UseCases(v));
        }
        if let Some(v) = supplied("advantages", self.advantages)? {
            patch = patch.set(TermField::Advantages(v));
        }
        if let Some(v) = supplied("disadvantages", self.disadvantages)? {
            patch = patch.set(TermField::Disadvantages(v));
        }

        Ok(patch)
    }
}

fn supplied<T>(field: &'static str, value: Option<Option<T>>) -> SchemaResult<Option<T>> {
    match value {
        None => Ok(None),
        Some(None) => Err(SchemaError::NullField(field)),
        Some(Some(v)) => Ok(Some(v)),
    }
}

fn validate_name(name: String) -> SchemaResult<String> {
    if name.trim().is_empty() {
        return Err(SchemaError::EmptyField("name"));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(SchemaError::TooLong {
            field: "name",
            max: MAX_NAME_LEN,
        });
    }
    Ok(name)
}

/// Parses a rendering type, rejecting anything outside the enumeration
pub fn parse_rendering_type(raw: &str) -> SchemaResult<RenderingType> {
    raw.parse()
}
