//! # propgen
//!
//! Generates LLDB's property include files from TableGen record dumps
//! (`llvm-tblgen --dump-json`).
//!
//! ## Commands
//!
//! - `propgen gen-property-defs <INPUT>` - `PropertyDefinition` tables
//! - `propgen gen-property-enum-defs <INPUT>` - `ePropertyXxx` enum cases
//! - `propgen build` - Run every target in propgen.toml
//! - `propgen list <INPUT>` - List the Definition groups in a dump
//! - `propgen show <INPUT> <DEFINITION>` - Show one group's properties
//!
//! See `propgen --help` for the full command reference.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use propgen::Backend;
use std::io;
use std::path::PathBuf;
use std::process;

mod commands;
mod config;
mod logging;
mod output;
mod ui;

use commands::generate::GenerateRequest;

#[derive(Parser)]
#[command(name = "propgen")]
#[command(about = "Generate LLDB property tables and enums from TableGen records", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to propgen.toml configuration file
    #[arg(short, long, global = true, default_value = "propgen.toml")]
    config: String,

    /// Output as JSON (machine-readable format)
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose output
    #[arg(long, global = true)]
    verbose: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the PropertyDefinition tables
    GenPropertyDefs(GenArgs),

    /// Generate the ePropertyXxx enum cases
    GenPropertyEnumDefs(GenArgs),

    /// Generate every target listed in propgen.toml
    Build,

    /// List the Definition groups in a record dump
    List {
        /// Record dump (llvm-tblgen --dump-json output)
        input: PathBuf,
    },

    /// Show the properties of one Definition group
    Show {
        /// Record dump (llvm-tblgen --dump-json output)
        input: PathBuf,

        /// Definition key, e.g. "target" or "target experimental"
        definition: String,
    },

    /// Configuration file commands
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(clap::Args)]
struct GenArgs {
    /// Record dump (llvm-tblgen --dump-json output)
    input: PathBuf,

    /// Output file, `-` or omitted for stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write a make-style dependency file (needs -o)
    #[arg(short = 'd', long)]
    depfile: Option<PathBuf>,

    /// Leave the output file untouched when nothing changed
    #[arg(long)]
    write_if_changed: bool,
}

impl GenArgs {
    fn into_request(self, backend: Backend) -> GenerateRequest {
        GenerateRequest {
            backend,
            input: self.input,
            output: self.output,
            depfile: self.depfile,
            write_if_changed: self.write_if_changed,
        }
    }
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Check propgen.toml and list its targets
    Validate,
}

fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "propgen", &mut io::stdout());
        return;
    }

    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::GenPropertyDefs(args) => {
            commands::generate::generate(&args.into_request(Backend::PropertyDefs))
        }
        Commands::GenPropertyEnumDefs(args) => {
            commands::generate::generate(&args.into_request(Backend::PropertyEnumDefs))
        }
        Commands::Build => commands::build::build(&cli.config),
        Commands::List { input } => commands::list::list(&input, cli.json),
        Commands::Show { input, definition } => {
            commands::list::show(&input, &definition, cli.json)
        }
        Commands::Config(ConfigCommands::Validate) => commands::config::validate(&cli.config),
    }
}
