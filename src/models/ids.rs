//! Strongly-typed ID wrappers for stored entities
//!
//! Record and projection ids are distinct types so one can't be passed where
//! the other is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Whether a user-typed identifier refers to this id
            ///
            /// Accepts the full UUID, the prefixed short form, or the bare
            /// 8-character UUID prefix.
            pub fn matches(&self, identifier: &str) -> bool {
                let identifier = identifier.trim().to_ascii_lowercase();
                let full = self.0.to_string();
                if identifier == full {
                    return true;
                }
                let bare = identifier
                    .strip_prefix($display_prefix)
                    .unwrap_or(&identifier);
                bare.len() >= 8 && full.starts_with(bare)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(RecordId, "rec-");
define_id!(ProjectionId, "exp-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = RecordId::new();
        let display = id.to_string();
        assert!(display.starts_with("rec-"));
        assert_eq!(display.len(), 12);
        assert!(ProjectionId::new().to_string().starts_with("exp-"));
    }

    #[test]
    fn test_id_matches_short_and_full_forms() {
        let id: RecordId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();

        assert!(id.matches("550e8400-e29b-41d4-a716-446655440000"));
        assert!(id.matches("rec-550e8400"));
        assert!(id.matches("550e8400"));
        assert!(id.matches("REC-550E8400"));
        assert!(!id.matches("rec-550e"));
        assert!(!id.matches("rec-12345678"));
    }

    #[test]
    fn test_id_serialization() {
        let id = RecordId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: RecordId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_parse_with_prefix() {
        let id: ProjectionId = "exp-550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        assert_eq!(
            id.as_uuid().to_string(),
            "550e8400-e29b-41d4-a716-446655440000"
        );
    }
}
