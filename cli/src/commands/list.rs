use anyhow::Result;
use colored::Colorize;
use propgen::emit::guard_macro;
use propgen::emit::table::{default_string_slot, default_value_slot, enum_values_slot};
use propgen::{group_by_definition, load_properties, PropertyView, TableGenProperty};
use propgen_records::search::suggest_similar;
use serde::Serialize;
use std::path::Path;

use crate::commands::generate::load_records;
use crate::ui;

#[derive(Debug, Serialize)]
struct GroupSummary {
    definition: String,
    guard: String,
    properties: usize,
}

#[derive(Debug, Serialize)]
struct PropertySummary {
    record: String,
    name: String,
    #[serde(rename = "type")]
    type_name: String,
    global: bool,
    default_value: String,
    default_string: String,
    enum_values: String,
    description: Option<String>,
}

impl PropertySummary {
    fn from_property(property: &TableGenProperty<'_>) -> Result<Self> {
        Ok(Self {
            record: property.record_name().to_string(),
            name: property.name().to_string(),
            type_name: property.type_name().to_string(),
            global: property.is_global(),
            default_value: default_value_slot(property)?,
            default_string: default_string_slot(property),
            enum_values: enum_values_slot(property),
            description: property.description().map(str::to_string),
        })
    }
}

/// List every Definition group in a record dump.
pub fn list(input: &Path, json: bool) -> Result<()> {
    let keeper = load_records(input)?;
    let groups = group_by_definition(load_properties(&keeper)?);

    let summaries: Vec<GroupSummary> = groups
        .iter()
        .map(|(definition, properties)| GroupSummary {
            definition: definition.clone(),
            guard: guard_macro(definition),
            properties: properties.len(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("{}", "No Property records found.".yellow());
        return Ok(());
    }

    ui::print_step(&format!("Definitions in {}:", input.display()));
    for summary in &summaries {
        println!(
            "  {} {} {}",
            ui::symbols::BULLET.dimmed(),
            summary.definition.green().bold(),
            format!("({} properties, {})", summary.properties, summary.guard).dimmed()
        );
    }
    Ok(())
}

/// Show the properties of one Definition group.
pub fn show(input: &Path, definition: &str, json: bool) -> Result<()> {
    let keeper = load_records(input)?;
    let groups = group_by_definition(load_properties(&keeper)?);

    let Some(properties) = groups.get(definition) else {
        let suggestions = suggest_similar(definition, groups.keys().map(String::as_str), 3);
        match suggestions.first() {
            Some(best) => anyhow::bail!(
                "Definition '{}' not found. Did you mean: {}?",
                definition,
                best.candidate
            ),
            None => anyhow::bail!("Definition '{}' not found", definition),
        }
    };

    let summaries = properties
        .iter()
        .map(PropertySummary::from_property)
        .collect::<Result<Vec<_>>>()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!("{} {}", definition.green().bold(), guard_macro(definition).dimmed());
    for summary in &summaries {
        let scope = if summary.global { " (global)" } else { "" };
        println!(
            "  {} {}{}",
            summary.name.bold(),
            summary.type_name.cyan(),
            scope
        );
        println!("    Enum case: eProperty{}", summary.record);
        println!(
            "    Default: {}, {}",
            summary.default_value, summary.default_string
        );
        if summary.enum_values != propgen::emit::table::EMPTY_ENUM_VALUES {
            println!("    Values: {}", summary.enum_values);
        }
        if let Some(desc) = &summary.description {
            println!("    {}", desc.dimmed());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_records(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("Properties.json");
        fs::write(
            &path,
            r#"{
                "!tablegen_json_version": 1,
                "!instanceof": { "Property": ["DisableASLR", "AutoConfirm"] },
                "AutoConfirm": {
                    "!name": "AutoConfirm",
                    "Definition": "debugger",
                    "Name": "auto-confirm",
                    "Type": "Boolean",
                    "Global": 1,
                    "DefaultUnsignedValue": 1
                },
                "DisableASLR": {
                    "!name": "DisableASLR",
                    "Definition": "target",
                    "Name": "disable-aslr",
                    "Type": "Boolean",
                    "DefaultUnsignedValue": 1
                }
            }"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_list_and_show_known_definition() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_records(dir.path());

        list(&input, true).unwrap();
        show(&input, "target", false).unwrap();
    }

    #[test]
    fn test_show_suggests_close_definition() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_records(dir.path());

        let err = show(&input, "targt", false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Definition 'targt' not found. Did you mean: target?"
        );

        let err = show(&input, "platform", true).unwrap_err();
        assert_eq!(err.to_string(), "Definition 'platform' not found");
    }
}
