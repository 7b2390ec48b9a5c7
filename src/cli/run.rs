use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{compact::compact, init::init, pick::pick},
    exit_status::ExitStatus,
};

/// Dispatch parsed arguments to the command handler.
///
/// Prints help and succeeds when no command is given.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Some(Command::Compact(cmd)) => compact(cmd),
        Some(Command::Pick(cmd)) => pick(cmd),
        Some(Command::Init) => init(),
        None => Ok(ExitStatus::Success),
    }
}
