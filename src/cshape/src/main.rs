use cli::{Command, Invoke};
use std::process::ExitCode;

fn main() -> ExitCode {
    let Ok(command) = Command::parse() else {
        return ExitCode::FAILURE;
    };

    match command.invoke() {
        Ok(()) => ExitCode::SUCCESS,
        Err(()) => ExitCode::FAILURE,
    }
}
