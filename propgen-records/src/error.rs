//! Error types for loading and querying a record store

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Failed to read record file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse record JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Record dump is not a JSON object")]
    NotAnObject,

    #[error("Record dump has no '!tablegen_json_version' entry")]
    MissingVersion,

    #[error("Unsupported record dump version {0} (only version 1 is understood)")]
    UnsupportedVersion(u64),

    #[error("Record '{name}' is malformed: {source}")]
    InvalidRecord {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Record stored under '{key}' calls itself '{name}'")]
    NameMismatch { key: String, name: String },

    #[error("Class '{class}' lists record '{name}', which is not defined")]
    UnknownRecord { class: String, name: String },

    #[error("Record '{record}' has no value for field '{field}'")]
    MissingField { record: String, field: String },

    #[error("Record '{record}', field '{field}': expected {expected}, found {found}")]
    FieldType {
        record: String,
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl RecordError {
    pub fn missing_field(record: &str, field: &str) -> Self {
        RecordError::MissingField {
            record: record.to_string(),
            field: field.to_string(),
        }
    }

    pub fn field_type(
        record: &str,
        field: &str,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        RecordError::FieldType {
            record: record.to_string(),
            field: field.to_string(),
            expected,
            found,
        }
    }
}
