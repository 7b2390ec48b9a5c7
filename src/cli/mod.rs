//! Command-line interface layer: argument model, command handlers and
//! terminal reporting.

mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;
pub use run::run_cli;
