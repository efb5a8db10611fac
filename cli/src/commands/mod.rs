pub mod build;
pub mod config;
pub mod generate;
pub mod list;
