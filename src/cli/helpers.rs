//! Shared helper functions for CLI commands

use miette::Result;

use crate::cli::GlobalOpts;
use crate::core::identity::{resolve_id, EntityId};
use crate::core::project::Project;

/// Open the workspace, honoring --project when given
pub fn open_project(global: &GlobalOpts) -> Result<Project> {
    let project = match &global.project {
        Some(path) => Project::discover_from(path),
        None => Project::discover(),
    };
    project.map_err(|e| miette::miette!("{}", e))
}

/// Resolve an id query (full id or unambiguous prefix) against candidates
pub fn lookup(candidates: &[(EntityId, String)], query: &str) -> Result<EntityId> {
    resolve_id(candidates, query).map_err(|e| miette::miette!("{}", e))
}

/// Truncate a string to max_len, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
    }

    #[test]
    fn test_truncate_str_is_char_safe() {
        assert_eq!(truncate_str("héllo wörld", 8), "héllo...");
    }
}
