//! LLDB property generator
//!
//! Turns TableGen `Property` records into the two include files LLDB's
//! settings code consumes: the `ePropertyXxx` enum cases and the
//! `PropertyDefinition` tables. Both outputs group properties by their
//! `Definition` and put every group behind an `LLDB_PROPERTIES_<group>`
//! guard so a single generated file can serve every settings class.

pub mod driver;
pub mod emit;
pub mod error;
pub mod group;
pub mod header;
pub mod property;

pub use driver::{emit_property_defs, emit_property_enum_defs, generate, Backend};
pub use error::GenerateError;
pub use group::{group_by_definition, RecordsByDefinition};
pub use header::HeaderOptions;
pub use property::{load_properties, PropertyRecord, PropertyView, TableGenProperty};
