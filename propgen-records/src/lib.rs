//! Record store for propgen
//!
//! This crate loads the JSON form of a TableGen record set (as written by
//! `llvm-tblgen --dump-json`) and exposes a small read-only query surface:
//! look up the records derived from a class, and read individual fields
//! by name.

pub mod error;
pub mod parse;
pub mod search;
pub mod types;

pub use error::*;
pub use search::*;
pub use types::*;
