//! `PropertyDefinition` table emission.
//!
//! Each entry is one brace initializer with seven fields, in this order:
//! name, type, global flag, unsigned/enum default, string default, enum
//! values, description. Literal text goes between quotes as-is.

use std::fmt::Write;

use crate::emit::write_guarded;
use crate::error::GenerateError;
use crate::property::{validate_defaults, PropertyView};

pub const TYPE_PREFIX: &str = "OptionValue::eType";

/// Marker for "no default string".
pub const NULL_STRING: &str = "nullptr";

/// Marker for "no enum values".
pub const EMPTY_ENUM_VALUES: &str = "{}";

/// The shared unsigned/enum default slot.
///
/// `0` is only reachable when the default lives in the string slot.
pub fn default_value_slot<P: PropertyView>(property: &P) -> Result<String, GenerateError> {
    validate_defaults(property)?;

    Ok(match (property.default_unsigned_value(), property.default_enum_value()) {
        (Some(value), _) => value.to_string(),
        (None, Some(expr)) => expr.to_string(),
        (None, None) => "0".to_string(),
    })
}

pub fn default_string_slot<P: PropertyView>(property: &P) -> String {
    match property.default_string_value() {
        Some(text) => format!("\"{text}\""),
        None => NULL_STRING.to_string(),
    }
}

pub fn enum_values_slot<P: PropertyView>(property: &P) -> String {
    property
        .enum_values()
        .unwrap_or(EMPTY_ENUM_VALUES)
        .to_string()
}

/// One `{...},` table entry.
pub fn emit_property<P: PropertyView>(property: &P, out: &mut String) -> Result<(), GenerateError> {
    let default_value = default_value_slot(property)?;

    writeln!(
        out,
        "  {{\"{name}\", {TYPE_PREFIX}{ty}, {global}, {default_value}, {string}, {enums}, \"{desc}\"}},",
        name = property.name(),
        ty = property.type_name(),
        global = property.is_global(),
        string = default_string_slot(property),
        enums = enum_values_slot(property),
        desc = property.description().unwrap_or_default(),
    )?;
    Ok(())
}

/// The guarded `g_<Definition>_properties[]` array for one `Definition`.
pub fn emit_property_group<P: PropertyView>(
    definition: &str,
    properties: &[P],
    out: &mut String,
) -> Result<(), GenerateError> {
    write_guarded(out, "definitions", definition, |out| {
        writeln!(
            out,
            "static constexpr PropertyDefinition g_{definition}_properties[] = {{"
        )?;
        for property in properties {
            emit_property(property, out)?;
        }
        writeln!(out, "}};")?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::PropertyRecord;

    fn render(property: &PropertyRecord) -> String {
        let mut out = String::new();
        emit_property(property, &mut out).unwrap();
        out
    }

    #[test]
    fn test_entry_for_unsigned_default() {
        let prop = PropertyRecord::new("Target", "EnableSyntheticTypes", "Boolean")
            .with_default_unsigned(1)
            .with_description("Enable synthetic.");
        assert_eq!(
            render(&prop),
            "  {\"EnableSyntheticTypes\", OptionValue::eTypeBoolean, false, 1, nullptr, {}, \"Enable synthetic.\"},\n"
        );
    }

    #[test]
    fn test_default_slot_variants() {
        let base = PropertyRecord::new("t", "P", "UInt64");

        let unsigned = base.clone().with_default_unsigned(5);
        assert_eq!(default_value_slot(&unsigned).unwrap(), "5");

        let enumerated = base.clone().with_default_enum("eFoo");
        assert_eq!(default_value_slot(&enumerated).unwrap(), "eFoo");

        let string_only = base.clone().with_default_string("abc");
        assert_eq!(default_value_slot(&string_only).unwrap(), "0");

        let negative = base.with_default_unsigned(-1);
        assert_eq!(default_value_slot(&negative).unwrap(), "-1");
    }

    #[test]
    fn test_empty_string_default_differs_from_absent() {
        let base = PropertyRecord::new("t", "P", "String");

        let empty = base.clone().with_default_string("");
        assert_eq!(default_string_slot(&empty), "\"\"");

        let absent = base.with_default_unsigned(0);
        assert_eq!(default_string_slot(&absent), "nullptr");
    }

    #[test]
    fn test_global_enum_values_and_missing_description() {
        let prop = PropertyRecord::new("debugger", "StopDisassemblyDisplay", "Enum")
            .with_global(true)
            .with_default_enum("Debugger::eStopDisassemblyTypeNoDebugInfo")
            .with_enum_values("OptionEnumValues(g_show_disassembly_enum_values)");
        assert_eq!(
            render(&prop),
            "  {\"StopDisassemblyDisplay\", OptionValue::eTypeEnum, true, \
             Debugger::eStopDisassemblyTypeNoDebugInfo, nullptr, \
             OptionEnumValues(g_show_disassembly_enum_values), \"\"},\n"
        );
    }

    #[test]
    fn test_text_is_not_escaped() {
        let prop = PropertyRecord::new("t", "Prompt", "String")
            .with_default_string("(lldb) ")
            .with_description("The \\\"prompt\\\" text.");
        assert_eq!(
            render(&prop),
            "  {\"Prompt\", OptionValue::eTypeString, false, 0, \"(lldb) \", {}, \"The \\\"prompt\\\" text.\"},\n"
        );
    }

    #[test]
    fn test_invariant_violations_abort_the_entry() {
        let none = PropertyRecord::new("t", "NoDefault", "Boolean");
        let mut out = String::new();
        assert!(matches!(
            emit_property(&none, &mut out),
            Err(GenerateError::MissingDefault { .. })
        ));

        let both = PropertyRecord::new("t", "Both", "Enum")
            .with_default_unsigned(1)
            .with_default_enum("eFoo");
        assert!(matches!(
            emit_property(&both, &mut out),
            Err(GenerateError::ConflictingDefaults { .. })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_table_group() {
        let props = vec![
            PropertyRecord::new("Target", "EnableSyntheticTypes", "Boolean")
                .with_default_unsigned(1)
                .with_description("Enable synthetic."),
            PropertyRecord::new("Target", "Arg0", "String").with_default_string(""),
        ];
        let mut out = String::new();
        emit_property_group("Target", &props, &mut out).unwrap();

        assert_eq!(
            out,
            "// Property definitions for Target\n\
             #ifdef LLDB_PROPERTIES_Target\n\
             static constexpr PropertyDefinition g_Target_properties[] = {\n  \
             {\"EnableSyntheticTypes\", OptionValue::eTypeBoolean, false, 1, nullptr, {}, \"Enable synthetic.\"},\n  \
             {\"Arg0\", OptionValue::eTypeString, false, 0, \"\", {}, \"\"},\n\
             };\n\
             #undef LLDB_PROPERTIES_Target\n\
             #endif // Target Property\n\n"
        );
    }
}
