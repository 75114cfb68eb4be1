mod classify_command;
mod help;

pub use classify_command::{ClassifyCommand, classify_file};
use enum_dispatch::enum_dispatch;
use help::HelpCommand;

#[enum_dispatch(Invoke)]
#[derive(Clone, Debug)]
pub enum Command {
    Help(HelpCommand),
    Classify(ClassifyCommand),
}

impl Command {
    pub fn parse() -> Result<Self, ()> {
        Self::parse_from(std::env::args().skip(1))
    }

    pub fn parse_from(args: impl IntoIterator<Item = String>) -> Result<Self, ()> {
        let mut args = args.into_iter().peekable();

        match args.peek().map(String::as_str) {
            Some("-h" | "--help") | None => HelpCommand::parse(args).map(Self::from),
            Some("classify") => {
                // Skip over 'classify' command keyword
                args.next();
                ClassifyCommand::parse(args).map(Self::from)
            }
            _ => ClassifyCommand::parse(args).map(Self::from),
        }
    }
}

#[enum_dispatch]
pub trait Invoke {
    fn invoke(self) -> Result<(), ()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(args: &[&str]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn picks_command() {
        assert!(matches!(Command::parse_from(args(&[])), Ok(Command::Help(_))));
        assert!(matches!(
            Command::parse_from(args(&["--help"])),
            Ok(Command::Help(_))
        ));
        assert!(matches!(
            Command::parse_from(args(&["record.h"])),
            Ok(Command::Classify(_))
        ));

        let Ok(Command::Classify(command)) = Command::parse_from(args(&["classify", "record.h"]))
        else {
            panic!("expected classify command");
        };
        assert_eq!(command.filename, "record.h");
    }
}
