//! Typed, read-only view of a property record.
//!
//! The emitters only ever see [`PropertyView`]. Every optional field keeps
//! its presence observable: `None` means the record does not set it, and an
//! explicitly empty string is `Some("")`.

use std::borrow::Cow;

use propgen_records::{FieldValue, Record, RecordError, RecordKeeper};

use crate::error::GenerateError;

/// Class every property record derives from.
pub const PROPERTY_CLASS: &str = "Property";

pub trait PropertyView {
    /// Identifier of the record; becomes the enum case name.
    fn record_name(&self) -> &str;
    fn definition(&self) -> &str;
    fn name(&self) -> &str;
    fn type_name(&self) -> &str;
    fn is_global(&self) -> bool;
    fn default_unsigned_value(&self) -> Option<i64>;
    fn default_enum_value(&self) -> Option<&str>;
    fn default_string_value(&self) -> Option<&str>;
    fn enum_values(&self) -> Option<&str>;
    fn description(&self) -> Option<&str>;

    /// Source location used in diagnostics.
    fn location(&self) -> Option<&str> {
        None
    }
}

/// An owned property, built by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRecord {
    pub record_name: Option<String>,
    pub definition: String,
    pub name: String,
    pub type_name: String,
    pub global: bool,
    pub default_unsigned_value: Option<i64>,
    pub default_enum_value: Option<String>,
    pub default_string_value: Option<String>,
    pub enum_values: Option<String>,
    pub description: Option<String>,
}

impl PropertyRecord {
    pub fn new(
        definition: impl Into<String>,
        name: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            record_name: None,
            definition: definition.into(),
            name: name.into(),
            type_name: type_name.into(),
            global: false,
            default_unsigned_value: None,
            default_enum_value: None,
            default_string_value: None,
            enum_values: None,
            description: None,
        }
    }

    /// Give the record an identifier distinct from its `Name`.
    pub fn with_record_name(mut self, record_name: impl Into<String>) -> Self {
        self.record_name = Some(record_name.into());
        self
    }

    pub fn with_global(mut self, global: bool) -> Self {
        self.global = global;
        self
    }

    pub fn with_default_unsigned(mut self, value: i64) -> Self {
        self.default_unsigned_value = Some(value);
        self
    }

    pub fn with_default_enum(mut self, value: impl Into<String>) -> Self {
        self.default_enum_value = Some(value.into());
        self
    }

    pub fn with_default_string(mut self, value: impl Into<String>) -> Self {
        self.default_string_value = Some(value.into());
        self
    }

    pub fn with_enum_values(mut self, value: impl Into<String>) -> Self {
        self.enum_values = Some(value.into());
        self
    }

    pub fn with_description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }
}

impl PropertyView for PropertyRecord {
    fn record_name(&self) -> &str {
        self.record_name.as_deref().unwrap_or(&self.name)
    }

    fn definition(&self) -> &str {
        &self.definition
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn is_global(&self) -> bool {
        self.global
    }

    fn default_unsigned_value(&self) -> Option<i64> {
        self.default_unsigned_value
    }

    fn default_enum_value(&self) -> Option<&str> {
        self.default_enum_value.as_deref()
    }

    fn default_string_value(&self) -> Option<&str> {
        self.default_string_value.as_deref()
    }

    fn enum_values(&self) -> Option<&str> {
        self.enum_values.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A property read straight out of a TableGen record.
///
/// All consumed fields are checked when the adapter is built, so the
/// accessors cannot fail. The `HasDefault*Value` bits set by LLDB's default
/// mixin classes count as presence of the matching default.
#[derive(Debug, Clone)]
pub struct TableGenProperty<'a> {
    record: &'a Record,
    definition: &'a str,
    name: &'a str,
    type_name: &'a str,
    global: bool,
    default_unsigned_value: Option<i64>,
    default_enum_value: Option<&'a str>,
    default_string_value: Option<Cow<'a, str>>,
    enum_values: Option<&'a str>,
    description: Option<Cow<'a, str>>,
}

impl<'a> TableGenProperty<'a> {
    pub fn new(record: &'a Record) -> Result<Self, RecordError> {
        let has_unsigned = record.value("DefaultUnsignedValue").is_some()
            || flag(record, "HasDefaultUnsignedValue")?;
        let has_enum =
            record.value("DefaultEnumValue").is_some() || flag(record, "HasDefaultEnumValue")?;

        let default_unsigned_value = if has_unsigned {
            Some(record.value_as_int("DefaultUnsignedValue")?)
        } else {
            None
        };
        let default_enum_value = if has_enum {
            Some(record.value_as_string("DefaultEnumValue")?)
        } else {
            None
        };

        // The string mixin may set the flag without a value; that is an
        // empty default, not a missing one.
        let default_string_value = match raw_text(record, "DefaultStringValue")? {
            Some(text) => Some(text),
            None if flag(record, "HasDefaultStringValue")? => Some(Cow::Borrowed("")),
            None => None,
        };

        let enum_values = match record.value("EnumValues") {
            Some(_) => Some(record.value_as_string("EnumValues")?),
            None => None,
        };

        Ok(Self {
            record,
            definition: record.value_as_string("Definition")?,
            name: record.value_as_string("Name")?,
            type_name: record.value_as_string("Type")?,
            global: record.value("Global").is_some(),
            default_unsigned_value,
            default_enum_value,
            default_string_value,
            enum_values,
            description: raw_text(record, "Description")?,
        })
    }

    pub fn record(&self) -> &'a Record {
        self.record
    }
}

fn flag(record: &Record, field: &str) -> Result<bool, RecordError> {
    match record.value(field) {
        Some(_) => record.value_as_bit(field),
        None => Ok(false),
    }
}

fn raw_text<'a>(record: &'a Record, field: &str) -> Result<Option<Cow<'a, str>>, RecordError> {
    match record.value(field) {
        None => Ok(None),
        Some(FieldValue::String(text)) => Ok(Some(Cow::Borrowed(text))),
        Some(_) => record.unquoted_string(field).map(|text| Some(Cow::Owned(text))),
    }
}

impl PropertyView for TableGenProperty<'_> {
    fn record_name(&self) -> &str {
        self.record.name()
    }

    fn definition(&self) -> &str {
        self.definition
    }

    fn name(&self) -> &str {
        self.name
    }

    fn type_name(&self) -> &str {
        self.type_name
    }

    fn is_global(&self) -> bool {
        self.global
    }

    fn default_unsigned_value(&self) -> Option<i64> {
        self.default_unsigned_value
    }

    fn default_enum_value(&self) -> Option<&str> {
        self.default_enum_value
    }

    fn default_string_value(&self) -> Option<&str> {
        self.default_string_value.as_deref()
    }

    fn enum_values(&self) -> Option<&str> {
        self.enum_values
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn location(&self) -> Option<&str> {
        self.record.locs.first().map(String::as_str)
    }
}

/// Check the two default-value invariants.
///
/// A property needs at least one default, and the unsigned and enum
/// defaults share one slot of the descriptor so at most one may be set.
pub fn validate_defaults<P: PropertyView + ?Sized>(property: &P) -> Result<(), GenerateError> {
    let unsigned = property.default_unsigned_value().is_some();
    let enumerated = property.default_enum_value().is_some();
    let string = property.default_string_value().is_some();

    if !(unsigned || enumerated || string) {
        return Err(GenerateError::MissingDefault {
            record: property.record_name().to_string(),
            location: property.location().map(str::to_string),
        });
    }
    if unsigned && enumerated {
        return Err(GenerateError::ConflictingDefaults {
            record: property.record_name().to_string(),
            location: property.location().map(str::to_string),
        });
    }
    Ok(())
}

/// Every `Property` record in the store, in store order.
pub fn load_properties(keeper: &RecordKeeper) -> Result<Vec<TableGenProperty<'_>>, GenerateError> {
    let records = keeper.all_derived_definitions(PROPERTY_CLASS)?;
    tracing::debug!(count = records.len(), "loaded property records");

    records
        .into_iter()
        .map(|record| TableGenProperty::new(record).map_err(GenerateError::from))
        .collect()
}
