use anyhow::{Context, Result};
use propgen::{Backend, HeaderOptions};
use propgen_records::parse::parse_records_file;
use propgen_records::RecordKeeper;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::output::{write_depfile, write_output, WriteOutcome};
use crate::ui;

/// One generation pass: a record dump in, one include file out.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub backend: Backend,
    pub input: PathBuf,
    /// `None` (or `-`) writes to stdout.
    pub output: Option<PathBuf>,
    pub depfile: Option<PathBuf>,
    pub write_if_changed: bool,
}

impl GenerateRequest {
    fn output_path(&self) -> Option<&Path> {
        self.output
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }
}

pub fn load_records(input: &Path) -> Result<RecordKeeper> {
    parse_records_file(input)
        .with_context(|| format!("Failed to load records from {}", input.display()))
}

pub fn generate(request: &GenerateRequest) -> Result<()> {
    let text = render(request)?;
    write_rendered(request, &text)
}

/// Load the records and render the whole file, without touching any output.
pub fn render(request: &GenerateRequest) -> Result<String> {
    if request.depfile.is_some() && request.output_path().is_none() {
        anyhow::bail!("A depfile (-d) can only be written together with an output file (-o)");
    }

    let keeper = load_records(&request.input)?;
    let options = HeaderOptions::from_source(&request.input);
    propgen::generate(request.backend, &keeper, &options).with_context(|| {
        format!(
            "Failed to generate {} from {}",
            request.backend,
            request.input.display()
        )
    })
}

/// Write text produced by [`render`] to the request's output and depfile.
pub fn write_rendered(request: &GenerateRequest, text: &str) -> Result<()> {
    let Some(output_path) = request.output_path() else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    };

    match write_output(output_path, text, request.write_if_changed)? {
        WriteOutcome::Written => {
            ui::print_success(&format!("Wrote {}", output_path.display()));
        }
        WriteOutcome::Unchanged => {
            ui::print_unchanged(&format!("{} is up to date", output_path.display()));
        }
    }

    if let Some(depfile) = &request.depfile {
        write_depfile(depfile, output_path, &[request.input.as_path()])?;
        ui::print_info(&format!("Dependencies: {}", depfile.display()));
    }

    Ok(())
}
