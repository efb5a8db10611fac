//! Entry points: one full fetch, group and emit pass per call.

use std::fmt;

use propgen_records::RecordKeeper;
use serde::{Deserialize, Serialize};

use crate::emit::{enums, table};
use crate::error::GenerateError;
use crate::group::group_by_definition;
use crate::header::{emit_source_file_header, HeaderOptions};
use crate::property::load_properties;

pub const PROPERTY_DEFS_DESCRIPTION: &str = "Property definitions for LLDB.";
pub const PROPERTY_ENUM_DESCRIPTION: &str = "Property definition enum for LLDB.";

/// Which of the two include files to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// `PropertyDefinition` tables.
    PropertyDefs,
    /// `ePropertyXxx` enum cases.
    PropertyEnumDefs,
}

impl Backend {
    pub fn description(self) -> &'static str {
        match self {
            Backend::PropertyDefs => PROPERTY_DEFS_DESCRIPTION,
            Backend::PropertyEnumDefs => PROPERTY_ENUM_DESCRIPTION,
        }
    }

    pub fn run<W: fmt::Write>(
        self,
        keeper: &RecordKeeper,
        out: &mut W,
        options: &HeaderOptions,
    ) -> Result<(), GenerateError> {
        match self {
            Backend::PropertyDefs => emit_property_defs(keeper, out, options),
            Backend::PropertyEnumDefs => emit_property_enum_defs(keeper, out, options),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::PropertyDefs => write!(f, "property-defs"),
            Backend::PropertyEnumDefs => write!(f, "property-enum-defs"),
        }
    }
}

/// Emit every `PropertyDefinition` table in `keeper`.
///
/// The whole file is rendered before anything reaches `out`; on error `out`
/// is left untouched.
pub fn emit_property_defs<W: fmt::Write>(
    keeper: &RecordKeeper,
    out: &mut W,
    options: &HeaderOptions,
) -> Result<(), GenerateError> {
    let mut buf = String::new();
    emit_source_file_header(PROPERTY_DEFS_DESCRIPTION, options, &mut buf)?;

    let groups = group_by_definition(load_properties(keeper)?);
    tracing::debug!(groups = groups.len(), "emitting property definitions");
    for (definition, properties) in &groups {
        table::emit_property_group(definition, properties, &mut buf)?;
    }

    out.write_str(&buf)?;
    Ok(())
}

/// Emit every `ePropertyXxx` enum block in `keeper`.
pub fn emit_property_enum_defs<W: fmt::Write>(
    keeper: &RecordKeeper,
    out: &mut W,
    options: &HeaderOptions,
) -> Result<(), GenerateError> {
    let mut buf = String::new();
    emit_source_file_header(PROPERTY_ENUM_DESCRIPTION, options, &mut buf)?;

    let groups = group_by_definition(load_properties(keeper)?);
    tracing::debug!(groups = groups.len(), "emitting property enum cases");
    for (definition, properties) in &groups {
        enums::emit_property_enum_group(definition, properties, &mut buf)?;
    }

    out.write_str(&buf)?;
    Ok(())
}

/// Run `backend` into a fresh string.
pub fn generate(
    backend: Backend,
    keeper: &RecordKeeper,
    options: &HeaderOptions,
) -> Result<String, GenerateError> {
    let mut out = String::new();
    backend.run(keeper, &mut out, options)?;
    Ok(out)
}
