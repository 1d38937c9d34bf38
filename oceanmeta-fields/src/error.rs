//! Error types for schema construction

use thiserror::Error;

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors that can occur while assembling a schema
#[derive(Debug, Error)]
pub enum FieldsError {
    /// Section registered twice under the same id
    #[error("duplicate section id: {id}")]
    DuplicateSection { id: String },

    /// Two fields share the same key
    #[error("duplicate field key: {key}")]
    DuplicateFieldKey { key: String },

    /// Two settings share the same storage key
    #[error("duplicate setting key: {key}")]
    DuplicateSettingKey { key: String },

    /// Field references a section that was never registered
    #[error("field '{field}' references unknown section: {section}")]
    UnknownSection { field: String, section: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FieldsError::DuplicateFieldKey {
            key: "ocean_sidebar".into(),
        };
        assert_eq!(err.to_string(), "duplicate field key: ocean_sidebar");
    }

    #[test]
    fn unknown_section_names_both_sides() {
        let err = FieldsError::UnknownSection {
            field: "ocean_sidebar".into(),
            section: "oceanwp_mb_main".into(),
        };
        assert!(err.to_string().contains("ocean_sidebar"));
        assert!(err.to_string().contains("oceanwp_mb_main"));
    }
}
