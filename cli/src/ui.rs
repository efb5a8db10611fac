//! Shared UI helpers for terminal status output.
//!
//! Status lines go to stderr: the `gen-*` commands may be streaming the
//! generated file to stdout.

use colored::Colorize;

/// Standard symbols used throughout the CLI.
pub mod symbols {
    pub const ARROW: &str = "→";
    pub const SUCCESS: &str = "✓";
    pub const BULLET: &str = "•";
    pub const EQUALS: &str = "=";
}

/// Print a step header with the action arrow.
pub fn print_step(message: &str) {
    eprintln!("{} {}", symbols::ARROW.blue().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    eprintln!("{} {}", symbols::SUCCESS.green().bold(), message);
}

/// Print an "up to date" message.
pub fn print_unchanged(message: &str) {
    eprintln!("{} {}", symbols::EQUALS.dimmed(), message.dimmed());
}

/// Print a dimmed info line (indented).
pub fn print_info(message: &str) {
    eprintln!("  {}", message.dimmed());
}
