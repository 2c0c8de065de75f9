//! # Response Formatting
//!
//! Small response bodies that are not terms or stats.

use serde::Serialize;

/// Message-only response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Body returned by `GET /`
    pub fn welcome() -> Self {
        Self::new("Welcome to Glossary API")
    }

    /// Body returned after a successful delete
    pub fn deleted() -> Self {
        Self::new("Term deleted successfully")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_serialization() {
        let json = serde_json::to_value(MessageResponse::deleted()).unwrap();
        assert_eq!(json["message"], "Term deleted successfully");
    }
}
