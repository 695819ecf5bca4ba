//! Error types for tabula-data.
//!
//! The pipeline itself never fails; these cover loading configuration and
//! converting external JSON into records.

use thiserror::Error;

/// Errors raised at the crate's input edges.
#[derive(Debug, Error)]
pub enum Error {
    /// YAML configuration could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON input could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Record input was not a JSON array.
    #[error("expected an array of records")]
    NotAnArray,

    /// A record was not a JSON object.
    #[error("record {index} is not an object")]
    NotAnObject { index: usize },

    /// A field held an array or object.
    #[error("field '{field}' of record {index} is not a scalar")]
    NonScalarField { index: usize, field: String },
}

/// Result alias for tabula-data.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::NotAnObject { index: 2 }.to_string(),
            "record 2 is not an object"
        );
        assert_eq!(
            Error::NonScalarField {
                index: 0,
                field: "tags".to_string()
            }
            .to_string(),
            "field 'tags' of record 0 is not a scalar"
        );
        assert_eq!(Error::NotAnArray.to_string(), "expected an array of records");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
