//! Wire types for the poem gallery HTTP API
//!
//! The API owns these records; the client keeps a read-mostly cached copy
//! and never fabricates poem data. JSON field names are camelCase on the
//! wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published poem as returned by `GET /poems` and `GET /poems/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Poem {
    /// Opaque stable identifier, unique per poem.
    pub id: String,
    pub title: String,
    pub excerpt: String,
    /// Full poem text; literal whitespace and line breaks are significant.
    #[serde(default)]
    pub content: String,
    /// Ordered tags; the client does not deduplicate.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Promotional flag. The model does not enforce a single featured
    /// poem; views highlight the first one in response order.
    #[serde(default)]
    pub is_featured: bool,
    /// Absolute URL or server-relative path to the cover image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    /// Creation timestamp, display-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poem_fields_are_camel_case_on_the_wire() {
        let json = r#"{
            "id": "p1",
            "title": "Night Rain",
            "excerpt": "A short excerpt",
            "content": "line one\nline two",
            "tags": ["rain", "night"],
            "isFeatured": true,
            "coverImage": "/uploads/rain.jpg",
            "createdAt": "2024-05-01T12:00:00Z"
        }"#;

        let poem: Poem = serde_json::from_str(json).unwrap();
        assert_eq!(poem.id, "p1");
        assert!(poem.is_featured);
        assert_eq!(poem.cover_image.as_deref(), Some("/uploads/rain.jpg"));
        assert_eq!(poem.tags, vec!["rain", "night"]);
        assert!(poem.created_at.is_some());

        let out = serde_json::to_string(&poem).unwrap();
        assert!(out.contains("\"isFeatured\":true"));
        assert!(out.contains("\"coverImage\""));
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let json = r#"{"id": "p2", "title": "Untitled", "excerpt": ""}"#;
        let poem: Poem = serde_json::from_str(json).unwrap();

        assert_eq!(poem.content, "");
        assert!(poem.tags.is_empty());
        assert!(!poem.is_featured);
        assert!(poem.cover_image.is_none());
        assert!(poem.created_at.is_none());
    }

    #[test]
    fn content_whitespace_survives_a_round_trip() {
        let poem = Poem {
            id: "p3".to_string(),
            title: "Stanzas".to_string(),
            excerpt: "x".to_string(),
            content: "  indented\n\nblank line kept\n".to_string(),
            ..Poem::default()
        };

        let json = serde_json::to_string(&poem).unwrap();
        let back: Poem = serde_json::from_str(&json).unwrap();
        assert_eq!(back.content, "  indented\n\nblank line kept\n");
    }
}
