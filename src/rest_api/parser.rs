//! # Query Parameter Parser
//!
//! Parses list query parameters into a store query.

use serde::Deserialize;

use super::errors::RestResult;
use crate::schema::{parse_rendering_type, RenderingType};

/// Default page size if `limit` is not supplied
pub const DEFAULT_LIMIT: u64 = 100;

/// Raw `GET /terms/` query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub skip: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub rendering_type: Option<String>,
}

/// Parsed list parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub offset: u64,
    pub limit: u64,
    pub rendering_type: Option<RenderingType>,
}

impl ListQuery {
    /// Resolves defaults and validates the rendering-type filter.
    ///
    /// No upper bound is put on `limit`.
    pub fn parse(self, default_limit: u64) -> RestResult<ListParams> {
        let rendering_type = self
            .rendering_type
            .as_deref()
            .map(parse_rendering_type)
            .transpose()?;

        Ok(ListParams {
            offset: self.skip.unwrap_or(0),
            limit: self.limit.unwrap_or(default_limit),
            rendering_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest_api::errors::RestError;

    #[test]
    fn test_defaults() {
        let params = ListQuery::default().parse(DEFAULT_LIMIT).unwrap();
        assert_eq!(
            params,
            ListParams {
                offset: 0,
                limit: DEFAULT_LIMIT,
                rendering_type: None
            }
        );
    }

    #[test]
    fn test_explicit_values() {
        let query = ListQuery {
            skip: Some(5),
            limit: Some(100_000),
            rendering_type: Some("CSR".to_string()),
        };
        let params = query.parse(DEFAULT_LIMIT).unwrap();
        assert_eq!(params.offset, 5);
        assert_eq!(params.limit, 100_000);
        assert_eq!(params.rendering_type, Some(RenderingType::Csr));
    }

    #[test]
    fn test_unknown_rendering_type() {
        let query = ListQuery {
            rendering_type: Some("XSR".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            query.parse(DEFAULT_LIMIT),
            Err(RestError::Validation(_))
        ));
    }
}
