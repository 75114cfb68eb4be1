use super::ClassifyCommand;
use session::{ClassifyOptions, EmitKind};

impl ClassifyCommand {
    pub fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, ()> {
        let mut filename = None;
        let mut options = ClassifyOptions::default();

        while let Some(option) = args.next() {
            match option.as_str() {
                "--emit" => {
                    let Some(emit) = args.next() else {
                        eprintln!("error: Expected 'groups' or 'c' after '--emit'");
                        return Err(());
                    };

                    let Some(emit) = EmitKind::from_name(&emit) else {
                        eprintln!("error: Unknown emit kind '{}'", emit);
                        return Err(());
                    };

                    options.emit = emit;
                }
                "--members" => options.emit = EmitKind::Members,
                "--no-warn-duplicates" => options.warn_duplicate_shapes = false,
                "--strict" => options.strict = true,
                _ if option.len() > 1 && option.starts_with('-') => {
                    eprintln!("error: Unknown option '{}'", option);
                    return Err(());
                }
                _ => {
                    if filename.replace(option).is_some() {
                        eprintln!("error: Multiple filenames specified");
                        return Err(());
                    }
                }
            }
        }

        let Some(filename) = filename else {
            eprintln!("error: No filename specified");
            return Err(());
        };

        Ok(Self { filename, options })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<ClassifyCommand, ()> {
        ClassifyCommand::parse(args.iter().map(ToString::to_string))
    }

    #[test]
    fn parses_options() {
        let command = parse(&["--strict", "imgui.h", "--emit", "c", "--no-warn-duplicates"]).unwrap();

        assert_eq!(command.filename, "imgui.h");
        assert!(command.options.emit.is_c());
        assert!(command.options.strict);
        assert!(!command.options.warn_duplicate_shapes);
    }

    #[test]
    fn defaults_to_groups() {
        let command = parse(&["record.h"]).unwrap();
        assert!(command.options.emit.is_groups());
        assert!(command.options.warn_duplicate_shapes);
        assert!(!command.options.strict);

        assert!(parse(&["--members", "record.h"]).unwrap().options.emit.is_members());
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["a.h", "b.h"]).is_err());
        assert!(parse(&["--emit"]).is_err());
        assert!(parse(&["--emit", "json", "a.h"]).is_err());
        assert!(parse(&["--verbose", "a.h"]).is_err());
    }
}
