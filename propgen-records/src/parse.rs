//! Record dump parsing utilities

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::RecordError;
use crate::types::{Record, RecordKeeper};

/// The only `!tablegen_json_version` this crate understands.
pub const SUPPORTED_VERSION: u64 = 1;

const VERSION_KEY: &str = "!tablegen_json_version";
const INSTANCE_OF_KEY: &str = "!instanceof";

pub fn parse_records_file<P: AsRef<Path>>(path: P) -> Result<RecordKeeper, RecordError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let keeper = parse_records_content(&content)?;
    tracing::debug!(
        path = %path.display(),
        records = keeper.len(),
        "loaded record dump"
    );
    Ok(keeper)
}

pub fn parse_records_content(content: &str) -> Result<RecordKeeper, RecordError> {
    let root: Value = serde_json::from_str(content)?;
    let Value::Object(entries) = root else {
        return Err(RecordError::NotAnObject);
    };

    let version = entries
        .get(VERSION_KEY)
        .ok_or(RecordError::MissingVersion)?;
    match version.as_u64() {
        Some(SUPPORTED_VERSION) => {}
        Some(other) => return Err(RecordError::UnsupportedVersion(other)),
        None => return Err(RecordError::MissingVersion),
    }

    let mut records = BTreeMap::new();
    let mut instance_of = BTreeMap::new();

    for (key, value) in entries {
        if key == INSTANCE_OF_KEY {
            instance_of = serde_json::from_value(value)?;
            continue;
        }
        if key.starts_with('!') {
            continue;
        }

        let record: Record = serde_json::from_value(value).map_err(|source| {
            RecordError::InvalidRecord {
                name: key.clone(),
                source,
            }
        })?;
        if record.name != key {
            return Err(RecordError::NameMismatch {
                key,
                name: record.name,
            });
        }
        records.insert(key, record);
    }

    Ok(RecordKeeper::new(records, instance_of))
}
