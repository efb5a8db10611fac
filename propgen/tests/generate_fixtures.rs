use std::fs;
use std::path::PathBuf;

use propgen::driver::{emit_property_defs, emit_property_enum_defs, generate, Backend};
use propgen::emit::guard_macro;
use propgen::{GenerateError, HeaderOptions};
use propgen_records::parse::{parse_records_content, parse_records_file};
use serde_json::json;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn dump(records: serde_json::Value) -> propgen_records::RecordKeeper {
    let names: Vec<String> = records
        .as_object()
        .expect("records object")
        .keys()
        .cloned()
        .collect();
    let mut root = records;
    root["!tablegen_json_version"] = json!(1);
    root["!instanceof"] = json!({ "Property": names });
    parse_records_content(&root.to_string()).expect("dump should parse")
}

#[test]
fn test_property_defs_match_golden() {
    let input = fixture_path("lldb_properties.json");
    let keeper = parse_records_file(&input).expect("should parse lldb_properties.json");
    let options = HeaderOptions::from_source(&input);

    let output = generate(Backend::PropertyDefs, &keeper, &options).unwrap();
    let expected = fs::read_to_string(fixture_path("lldb_properties.inc")).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn test_property_enum_defs_match_golden() {
    let input = fixture_path("lldb_properties.json");
    let keeper = parse_records_file(&input).expect("should parse lldb_properties.json");
    let options = HeaderOptions::from_source(&input);

    let output = generate(Backend::PropertyEnumDefs, &keeper, &options).unwrap();
    let expected = fs::read_to_string(fixture_path("lldb_property_enums.inc")).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn test_single_record_round_trip() {
    let keeper = dump(json!({
        "EnableSyntheticTypes": {
            "!name": "EnableSyntheticTypes",
            "!superclasses": ["Property"],
            "Definition": "Target",
            "Name": "EnableSyntheticTypes",
            "Type": "Boolean",
            "DefaultUnsignedValue": 1,
            "Description": "Enable synthetic."
        }
    }));
    let options = HeaderOptions::default();

    let table = generate(Backend::PropertyDefs, &keeper, &options).unwrap();
    assert!(table.contains(
        "#ifdef LLDB_PROPERTIES_Target\n\
         static constexpr PropertyDefinition g_Target_properties[] = {\n  \
         {\"EnableSyntheticTypes\", OptionValue::eTypeBoolean, false, 1, nullptr, {}, \"Enable synthetic.\"},\n\
         };\n\
         #undef LLDB_PROPERTIES_Target\n"
    ));

    let enums = generate(Backend::PropertyEnumDefs, &keeper, &options).unwrap();
    assert!(enums.contains(
        "#ifdef LLDB_PROPERTIES_Target\n\
         ePropertyEnableSyntheticTypes,\n\
         #undef LLDB_PROPERTIES_Target\n"
    ));
}

#[test]
fn test_empty_input_emits_header_only() {
    let keeper = parse_records_content(r#"{ "!tablegen_json_version": 1, "!instanceof": {} }"#)
        .unwrap();
    let options = HeaderOptions::default();

    for backend in [Backend::PropertyDefs, Backend::PropertyEnumDefs] {
        let output = generate(backend, &keeper, &options).unwrap();
        assert!(output.starts_with("/*===- TableGen'erated file"));
        assert!(output.contains(backend.description()));
        assert!(output.ends_with("===*/\n\n"));
        assert!(!output.contains("#ifdef"));
    }
}

#[test]
fn test_missing_default_fails_both_passes_without_output() {
    let keeper = dump(json!({
        "Good": {
            "!name": "Good",
            "Definition": "debugger",
            "Name": "good",
            "Type": "Boolean",
            "DefaultUnsignedValue": 0
        },
        "NoDefault": {
            "!name": "NoDefault",
            "!locs": ["CoreProperties.td:40"],
            "Definition": "debugger",
            "Name": "no-default",
            "Type": "Boolean"
        }
    }));
    let options = HeaderOptions::default();

    let mut out = String::new();
    let err = emit_property_defs(&keeper, &mut out, &options).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::MissingDefault { ref record, .. } if record == "NoDefault"
    ));
    assert!(out.is_empty());

    let err = emit_property_enum_defs(&keeper, &mut out, &options).unwrap_err();
    assert_eq!(err.record(), Some("NoDefault"));
    assert!(out.is_empty());
}

#[test]
fn test_conflicting_defaults_fail() {
    let keeper = dump(json!({
        "Both": {
            "!name": "Both",
            "Definition": "process",
            "Name": "both",
            "Type": "Enum",
            "DefaultUnsignedValue": 2,
            "DefaultEnumValue": "eFollowParent"
        }
    }));

    let err = generate(Backend::PropertyDefs, &keeper, &HeaderOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::ConflictingDefaults { ref record, .. } if record == "Both"
    ));
    assert_eq!(
        err.to_string(),
        "property 'Both' cannot have both an unsigned and an enum default value"
    );
}

#[test]
fn test_malformed_record_is_a_record_error() {
    let keeper = dump(json!({
        "NoType": {
            "!name": "NoType",
            "Definition": "process",
            "Name": "no-type",
            "DefaultUnsignedValue": 2
        }
    }));

    let err = generate(Backend::PropertyEnumDefs, &keeper, &HeaderOptions::default()).unwrap_err();
    assert!(matches!(err, GenerateError::Record(_)));
    assert_eq!(err.to_string(), "Record 'NoType' has no value for field 'Type'");
}

#[test]
fn test_guards_are_symmetric() {
    let keeper = parse_records_file(fixture_path("lldb_properties.json")).unwrap();
    let output = generate(Backend::PropertyDefs, &keeper, &HeaderOptions::default()).unwrap();

    let ifdefs: Vec<&str> = output
        .lines()
        .filter_map(|l| l.strip_prefix("#ifdef "))
        .collect();
    let undefs: Vec<&str> = output
        .lines()
        .filter_map(|l| l.strip_prefix("#undef "))
        .collect();
    let groups: Vec<&str> = output
        .lines()
        .filter_map(|l| l.strip_prefix("#endif // "))
        .filter_map(|l| l.strip_suffix(" Property"))
        .collect();

    assert_eq!(ifdefs, undefs);
    assert_eq!(groups.len(), ifdefs.len());
    for (group, guard) in groups.iter().zip(&ifdefs) {
        assert_eq!(guard_macro(group), *guard);
        assert!(!guard.contains(' '));
    }
}
