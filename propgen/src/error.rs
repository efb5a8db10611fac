use propgen_records::RecordError;
use thiserror::Error;

/// Why a generation pass was refused.
///
/// The two invariant variants name the offending record so the calling
/// build can point at it. Any error fails the whole pass.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("{}property '{record}' must have a default value", at(.location))]
    MissingDefault {
        record: String,
        location: Option<String>,
    },

    #[error(
        "{}property '{record}' cannot have both an unsigned and an enum default value",
        at(.location)
    )]
    ConflictingDefaults {
        record: String,
        location: Option<String>,
    },

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("Failed to write generated output: {0}")]
    Fmt(#[from] std::fmt::Error),
}

fn at(location: &Option<String>) -> String {
    location
        .as_deref()
        .map(|loc| format!("{loc}: "))
        .unwrap_or_default()
}

impl GenerateError {
    /// The record an invariant failure points at, if any.
    pub fn record(&self) -> Option<&str> {
        match self {
            GenerateError::MissingDefault { record, .. }
            | GenerateError::ConflictingDefaults { record, .. } => Some(record),
            _ => None,
        }
    }
}
