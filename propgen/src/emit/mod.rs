//! Text emitters for the two generated include files.
//!
//! All groups share one file, so each one sits behind a guard macro the
//! including code defines to pick the group it wants. The guard is
//! undefined again on the way out, the way Clang's own `.inc` files do it.

pub mod enums;
pub mod table;

use std::fmt::Write;

use crate::error::GenerateError;

pub const GUARD_PREFIX: &str = "LLDB_PROPERTIES_";

/// Guard macro for a `Definition`: prefix plus the key, spaces → `_`.
pub fn guard_macro(definition: &str) -> String {
    format!("{GUARD_PREFIX}{definition}").replace(' ', "_")
}

/// Write one guarded group, `body` renders what goes between the guards.
pub(crate) fn write_guarded<F>(
    out: &mut String,
    what: &str,
    definition: &str,
    body: F,
) -> Result<(), GenerateError>
where
    F: FnOnce(&mut String) -> Result<(), GenerateError>,
{
    let guard = guard_macro(definition);

    writeln!(out, "// Property {what} for {definition}")?;
    writeln!(out, "#ifdef {guard}")?;
    body(out)?;
    writeln!(out, "#undef {guard}")?;
    writeln!(out, "#endif // {definition} Property")?;
    writeln!(out)?;
    Ok(())
}
