//! Core types for a loaded record store

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// A single field value as it appears in a TableGen JSON dump.
///
/// `Unset` is the `?` value: the field is declared on the record but holds
/// nothing.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Unset,
    Int(i64),
    String(String),
    List(Vec<FieldValue>),
    Node(NodeValue),
}

/// Object-shaped values: `def`, `var`, `varbit`, `dag`, `complex`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NodeValue {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub def: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub printable: Option<String>,
}

impl FieldValue {
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Unset => "unset",
            FieldValue::Int(_) => "int",
            FieldValue::String(_) => "string",
            FieldValue::List(_) => "list",
            FieldValue::Node(node) => match node.kind.as_str() {
                "def" => "def",
                "dag" => "dag",
                "var" | "varbit" => "var",
                _ => "complex",
            },
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, FieldValue::Unset)
    }
}

/// A concrete record from the store.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Record {
    #[serde(rename = "!name")]
    pub name: String,
    #[serde(rename = "!superclasses", default)]
    pub superclasses: Vec<String>,
    #[serde(rename = "!anonymous", default)]
    pub anonymous: bool,
    #[serde(rename = "!fields", default)]
    pub declared_fields: Vec<String>,
    #[serde(rename = "!locs", default, skip_serializing_if = "Vec::is_empty")]
    pub locs: Vec<String>,
    #[serde(flatten)]
    pub values: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn superclasses(&self) -> &[String] {
        &self.superclasses
    }

    pub fn is_subclass_of(&self, class: &str) -> bool {
        self.superclasses.iter().any(|c| c == class)
    }

    pub fn is_anonymous(&self) -> bool {
        self.anonymous
    }

    /// True when the record declares `field`, whether or not it is set.
    pub fn has_field(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// The value of `field` if the record declares it and it is set.
    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field).filter(|v| v.is_set())
    }

    fn require(&self, field: &str) -> Result<&FieldValue, RecordError> {
        self.value(field)
            .ok_or_else(|| RecordError::missing_field(&self.name, field))
    }

    pub fn value_as_string(&self, field: &str) -> Result<&str, RecordError> {
        match self.require(field)? {
            FieldValue::String(s) => Ok(s),
            other => Err(RecordError::field_type(
                &self.name,
                field,
                "string",
                other.kind_name(),
            )),
        }
    }

    pub fn value_as_int(&self, field: &str) -> Result<i64, RecordError> {
        match self.require(field)? {
            FieldValue::Int(i) => Ok(*i),
            other => Err(RecordError::field_type(
                &self.name,
                field,
                "int",
                other.kind_name(),
            )),
        }
    }

    pub fn value_as_bit(&self, field: &str) -> Result<bool, RecordError> {
        match self.require(field)? {
            FieldValue::Int(0) => Ok(false),
            FieldValue::Int(1) => Ok(true),
            other => Err(RecordError::field_type(
                &self.name,
                field,
                "bit",
                other.kind_name(),
            )),
        }
    }

    /// Raw text of a scalar field, without surrounding quotes.
    ///
    /// Strings come back verbatim, ints as decimal text and `def`/`complex`
    /// values as their printable form.
    pub fn unquoted_string(&self, field: &str) -> Result<String, RecordError> {
        match self.require(field)? {
            FieldValue::String(s) => Ok(s.clone()),
            FieldValue::Int(i) => Ok(i.to_string()),
            FieldValue::Node(NodeValue {
                printable: Some(text),
                ..
            }) => Ok(text.clone()),
            other => Err(RecordError::field_type(
                &self.name,
                field,
                "scalar",
                other.kind_name(),
            )),
        }
    }
}

/// All records of one dump, plus the class membership index.
#[derive(Debug, Clone, Default)]
pub struct RecordKeeper {
    pub(crate) records: BTreeMap<String, Record>,
    pub(crate) instance_of: BTreeMap<String, Vec<String>>,
}

impl RecordKeeper {
    pub fn new(
        records: BTreeMap<String, Record>,
        instance_of: BTreeMap<String, Vec<String>>,
    ) -> Self {
        Self {
            records,
            instance_of,
        }
    }

    pub fn record(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Class names that have at least one concrete instance.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.instance_of.keys().map(String::as_str)
    }

    /// Every concrete record derived from `class`, in store order.
    ///
    /// A class nobody derives from yields an empty list.
    pub fn all_derived_definitions(&self, class: &str) -> Result<Vec<&Record>, RecordError> {
        let Some(names) = self.instance_of.get(class) else {
            return Ok(Vec::new());
        };

        names
            .iter()
            .map(|name| {
                self.records
                    .get(name)
                    .ok_or_else(|| RecordError::UnknownRecord {
                        class: class.to_string(),
                        name: name.clone(),
                    })
            })
            .collect()
    }
}
