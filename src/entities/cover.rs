//! Cover page record

use serde::{Deserialize, Serialize};

/// The singleton cover-page record, rendered only by the Word export
///
/// The wire key for the university field is `uni`, kept for compatibility
/// with existing backups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverPage {
    /// University name
    #[serde(rename = "uni", alias = "university", default)]
    pub university: String,

    /// College / department
    #[serde(default)]
    pub college: String,

    /// Student name
    #[serde(default)]
    pub student: String,

    /// Supervisor name
    #[serde(default)]
    pub supervisor: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_key_is_uni() {
        let cover = CoverPage {
            university: "State University".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&cover).unwrap();
        assert_eq!(json["uni"], "State University");
        assert!(json.get("university").is_none());
    }

    #[test]
    fn test_accepts_university_alias() {
        let cover: CoverPage =
            serde_json::from_str(r#"{"university": "Alias U"}"#).unwrap();
        assert_eq!(cover.university, "Alias U");
    }

    #[test]
    fn test_missing_fields_default_empty() {
        let cover: CoverPage = serde_json::from_str("{}").unwrap();
        assert_eq!(cover, CoverPage::default());
    }
}
