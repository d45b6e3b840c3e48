//! Methodology item entity type

use serde::{Deserialize, Serialize};

use crate::core::identity::EntityId;

/// Kind of methodology building block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum MethodologyKind {
    #[default]
    Hypothesis,
    Question,
    Variable,
    Tool,
    Population,
}

impl std::fmt::Display for MethodologyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MethodologyKind::Hypothesis => write!(f, "hypothesis"),
            MethodologyKind::Question => write!(f, "question"),
            MethodologyKind::Variable => write!(f, "variable"),
            MethodologyKind::Tool => write!(f, "tool"),
            MethodologyKind::Population => write!(f, "population"),
        }
    }
}

/// One building block of the study's methodology section
///
/// Append-only list plus delete; insertion order is the only ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodologyItem {
    /// Unique identifier (creation timestamp)
    #[serde(default, deserialize_with = "crate::json::lenient")]
    pub id: EntityId,

    /// Item kind; unknown tags fall back to hypothesis
    #[serde(rename = "type", default, deserialize_with = "crate::json::lenient")]
    pub kind: MethodologyKind,

    /// Free-text content
    #[serde(default)]
    pub content: String,
}

impl MethodologyItem {
    pub fn new(kind: MethodologyKind, content: impl Into<String>) -> Self {
        Self {
            id: EntityId::now(),
            kind,
            content: content.into(),
        }
    }
}
