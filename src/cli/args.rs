//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `compact`: Compact a project into a skeleton document
//! - `pick`: Keep a subset of the sections of a compacted document
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Compact(cmd)) => cmd.args.verbose,
            Some(Command::Pick(_)) | Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Parser)]
pub struct CompactArgs {
    /// Project directory to compact
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Write `{output, stats, files}` as JSON instead of the text document
    #[arg(long)]
    pub json: bool,

    /// Append function and component signatures to each JS/TS section
    #[arg(long)]
    pub signatures: bool,

    /// Print the document to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Directory for the output file (overrides config file)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Skip test files (overrides config file)
    #[arg(long)]
    pub ignore_test_files: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CompactCommand {
    #[command(flatten)]
    pub args: CompactArgs,
}

#[derive(Debug, Parser)]
pub struct PickArgs {
    /// Compacted document (default: newest compacted_*.md in the current directory)
    pub file: Option<PathBuf>,

    /// Keep only sections whose path matches (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub only: Vec<String>,

    /// Drop sections whose path matches (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// List sections grouped by directory without writing anything
    #[arg(long)]
    pub list: bool,
}

#[derive(Debug, Args)]
pub struct PickCommand {
    #[command(flatten)]
    pub args: PickArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compact a JS/TS/Python project into a skeleton document
    Compact(CompactCommand),
    /// Select sections of a compacted document into a new file
    Pick(PickCommand),
    /// Initialize a new .compactrc.json configuration file
    Init,
}
