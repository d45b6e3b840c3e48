//! Entity identity based on creation-timestamp milliseconds
//!
//! Every entity id is the Unix timestamp (in milliseconds) of the moment it
//! was created. Uniqueness rests on the assumption that no two entities of
//! the same collection are created within the same millisecond; it is not
//! otherwise enforced.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A unique entity identifier (creation time in Unix milliseconds)
///
/// The `Default` id is zero, used only when an imported entity arrives
/// without one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(i64);

impl EntityId {
    /// Create a new id stamped with the current time
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    /// Wrap an existing millisecond timestamp
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// The raw millisecond value
    pub fn as_millis(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(EntityId)
            .map_err(|_| IdParseError::NotNumeric(s.to_string()))
    }
}

/// Errors that can occur when parsing entity IDs
#[derive(Debug, Error)]
pub enum IdParseError {
    #[error("invalid entity id: '{0}' (ids are numeric timestamps, see `list` output)")]
    NotNumeric(String),
}

/// Resolve an id query against a set of candidates
///
/// Accepts the full numeric id or any unambiguous decimal prefix of it.
/// Returns an error when nothing matches or the query is ambiguous.
pub fn resolve_id(candidates: &[(EntityId, String)], query: &str) -> Result<EntityId, IdLookupError> {
    // Exact match wins outright
    if let Ok(id) = query.parse::<EntityId>() {
        if candidates.iter().any(|(c, _)| *c == id) {
            return Ok(id);
        }
    }

    let matches: Vec<&(EntityId, String)> = candidates
        .iter()
        .filter(|(id, _)| id.to_string().starts_with(query))
        .collect();

    match matches.len() {
        0 => Err(IdLookupError::NotFound(query.to_string())),
        1 => Ok(matches[0].0),
        _ => Err(IdLookupError::Ambiguous {
            query: query.to_string(),
            labels: matches
                .iter()
                .map(|(id, label)| format!("{} - {}", id, label))
                .collect(),
        }),
    }
}

/// Errors that can occur when looking up an entity by id query
#[derive(Debug, Error)]
pub enum IdLookupError {
    #[error("no entry found matching '{0}'")]
    NotFound(String),

    #[error("ambiguous query '{query}', matches:\n{}", labels.join("\n"))]
    Ambiguous { query: String, labels: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_millis() {
        let before = Utc::now().timestamp_millis();
        let id = EntityId::now();
        let after = Utc::now().timestamp_millis();
        assert!(id.as_millis() >= before && id.as_millis() <= after);
    }

    #[test]
    fn test_id_display_roundtrip() {
        let id = EntityId::from_millis(1700000000123);
        let parsed: EntityId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_id_serializes_as_integer() {
        let id = EntityId::from_millis(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }

    #[test]
    fn test_id_parse_rejects_garbage() {
        let err = "notanid".parse::<EntityId>().unwrap_err();
        assert!(matches!(err, IdParseError::NotNumeric(_)));
    }

    #[test]
    fn test_resolve_exact() {
        let candidates = vec![
            (EntityId::from_millis(1700000000001), "one".to_string()),
            (EntityId::from_millis(1700000000002), "two".to_string()),
        ];
        let id = resolve_id(&candidates, "1700000000002").unwrap();
        assert_eq!(id.as_millis(), 1700000000002);
    }

    #[test]
    fn test_resolve_prefix() {
        let candidates = vec![
            (EntityId::from_millis(1700000000001), "one".to_string()),
            (EntityId::from_millis(1800000000002), "two".to_string()),
        ];
        let id = resolve_id(&candidates, "18").unwrap();
        assert_eq!(id.as_millis(), 1800000000002);
    }

    #[test]
    fn test_resolve_ambiguous() {
        let candidates = vec![
            (EntityId::from_millis(1700000000001), "one".to_string()),
            (EntityId::from_millis(1700000000002), "two".to_string()),
        ];
        let err = resolve_id(&candidates, "17").unwrap_err();
        assert!(matches!(err, IdLookupError::Ambiguous { .. }));
    }

    #[test]
    fn test_resolve_not_found() {
        let err = resolve_id(&[], "17").unwrap_err();
        assert!(matches!(err, IdLookupError::NotFound(_)));
    }
}
