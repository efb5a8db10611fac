use std::fmt::Write;

use crate::emit::write_guarded;
use crate::error::GenerateError;
use crate::property::{validate_defaults, PropertyView};

pub const ENUM_CASE_PREFIX: &str = "eProperty";

/// `eProperty<Record>,` for one property.
///
/// The default-value invariants are checked here too, so a malformed record
/// fails the enum pass just as it fails the table pass.
pub fn emit_property_enum<P: PropertyView>(
    property: &P,
    out: &mut String,
) -> Result<(), GenerateError> {
    validate_defaults(property)?;
    writeln!(out, "{ENUM_CASE_PREFIX}{},", property.record_name())?;
    Ok(())
}

/// The guarded list of enum cases for one `Definition`.
pub fn emit_property_enum_group<P: PropertyView>(
    definition: &str,
    properties: &[P],
    out: &mut String,
) -> Result<(), GenerateError> {
    write_guarded(out, "enum cases", definition, |out| {
        properties
            .iter()
            .try_for_each(|property| emit_property_enum(property, out))
    })
}
