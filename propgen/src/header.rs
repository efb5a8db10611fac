//! The banner every generated file starts with.

use std::fmt::Write;
use std::path::Path;

const LINE_WIDTH: usize = 80;
const PREFIX: &str = "|* ";
const SUFFIX: &str = " *|";

/// What the banner should say about where the output came from.
#[derive(Debug, Clone, Default)]
pub struct HeaderOptions {
    /// Input file; only its file name is printed.
    pub source: Option<String>,
}

impl HeaderOptions {
    pub fn from_source(path: impl AsRef<Path>) -> Self {
        Self {
            source: path
                .as_ref()
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
        }
    }
}

/// `prefix`, then `fill` up to the suffix column, then `suffix`.
fn print_line(out: &mut String, prefix: &str, fill: char, suffix: &str) -> std::fmt::Result {
    let used = prefix.chars().count() + suffix.chars().count();
    out.push_str(prefix);
    for _ in used..LINE_WIDTH {
        out.push(fill);
    }
    writeln!(out, "{suffix}")
}

pub fn emit_source_file_header(
    description: &str,
    options: &HeaderOptions,
    out: &mut String,
) -> std::fmt::Result {
    print_line(out, "/*===- TableGen'erated file ", '-', "*- C++ -*-===*\\")?;
    print_line(out, PREFIX, ' ', SUFFIX)?;

    // Long descriptions are cut into as many lines as it takes.
    let room = LINE_WIDTH - PREFIX.len() - SUFFIX.len();
    let chars: Vec<char> = description.chars().collect();
    if chars.is_empty() {
        print_line(out, PREFIX, ' ', SUFFIX)?;
    }
    for chunk in chars.chunks(room) {
        let text: String = chunk.iter().collect();
        print_line(out, &format!("{PREFIX}{text}"), ' ', SUFFIX)?;
    }

    print_line(out, PREFIX, ' ', SUFFIX)?;
    print_line(
        out,
        &format!("{PREFIX}Automatically generated file, do not edit!"),
        ' ',
        SUFFIX,
    )?;
    if let Some(source) = &options.source {
        print_line(out, &format!("{PREFIX}From: {source}"), ' ', SUFFIX)?;
    }
    print_line(out, PREFIX, ' ', SUFFIX)?;
    print_line(out, "\\*===", '-', "===*/")?;
    writeln!(out)
}
