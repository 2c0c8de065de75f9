//! Term types shared by the validator, the store and the HTTP layer.
//!
//! The rendering-type domain is closed: anything outside the five
//! enumerated values is rejected at the boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::SchemaError;

/// Fixed enumeration of rendering techniques
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RenderingType {
    /// Server-side rendering
    #[serde(rename = "SSR")]
    Ssr,
    /// Static site generation
    #[serde(rename = "SSG")]
    Ssg,
    /// Client-side rendering
    #[serde(rename = "CSR")]
    Csr,
    /// Incremental static regeneration
    #[serde(rename = "ISR")]
    Isr,
    /// Distributed server rendering
    #[serde(rename = "DSR")]
    Dsr,
}

impl RenderingType {
    /// Every member of the enumeration, in declaration order
    pub const ALL: [RenderingType; 5] = [
        RenderingType::Ssr,
        RenderingType::Ssg,
        RenderingType::Csr,
        RenderingType::Isr,
        RenderingType::Dsr,
    ];

    /// Returns the persisted / wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderingType::Ssr => "SSR",
            RenderingType::Ssg => "SSG",
            RenderingType::Csr => "CSR",
            RenderingType::Isr => "ISR",
            RenderingType::Dsr => "DSR",
        }
    }
}

impl fmt::Display for RenderingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderingType {
    type Err = SchemaError;

    /// Exact, case-sensitive match against the enumeration
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RenderingType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownRenderingType(s.to_string()))
    }
}

/// A persisted glossary term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub rendering_type: RenderingType,
    pub frameworks: Vec<String>,
    pub use_cases: Vec<String>,
    pub advantages: Vec<String>,
    pub disadvantages: Vec<String>,
}

/// A validated term that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTerm {
    pub name: String,
    pub description: String,
    pub rendering_type: RenderingType,
    pub frameworks: Vec<String>,
    pub use_cases: Vec<String>,
    pub advantages: Vec<String>,
    pub disadvantages: Vec<String>,
}

/// One supplied field of a partial update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermField {
    Name(String),
    Description(String),
    RenderingType(RenderingType),
    Frameworks(Vec<String>),
    UseCases(Vec<String>),
    Advantages(Vec<String>),
    Disadvantages(Vec<String>),
}

impl TermField {
    /// Column name of the field
    pub fn name(&self) -> &'static str {
        match self {
            TermField::Name(_) => "name",
            TermField::Description(_) => "description",
            TermField::RenderingType(_) => "rendering_type",
            TermField::Frameworks(_) => "frameworks",
            TermField::UseCases(_) => "use_cases",
            TermField::Advantages(_) => "advantages",
            TermField::Disadvantages(_) => "disadvantages",
        }
    }
}

/// The set of fields a partial update actually supplied.
///
/// Fields absent from the patch are never touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermPatch {
    changes: Vec<TermField>,
}

impl TermPatch {
    /// An empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a change, replacing an earlier change to the same field
    pub fn set(mut self, field: TermField) -> Self {
        self.changes.retain(|c| c.name() != field.name());
        self.changes.push(field);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn changes(&self) -> &[TermField] {
        &self.changes
    }

    /// New name carried by the patch, if any
    pub fn renamed_to(&self) -> Option<&str> {
        self.changes.iter().find_map(|c| match c {
            TermField::Name(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// Applies every supplied change to `term` in place
    pub fn apply_to(&self, term: &mut Term) {
        for change in &self.changes {
            match change.clone() {
                TermField::Name(v) => term.name = v,
                TermField::Description(v) => term.description = v,
                TermField::RenderingType(v) => term.rendering_type = v,
                TermField::Frameworks(v) => term.frameworks = v,
                TermField::UseCases(v) => term.use_cases = v,
                TermField::Advantages(v) => term.advantages = v,
                TermField::Disadvantages(v) => term.disadvantages = v,
            }
        }
    }
}
