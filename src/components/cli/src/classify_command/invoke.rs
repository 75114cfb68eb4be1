use super::{ClassifyCommand, classify_file};
use crate::Invoke;
use diagnostics::{DiagnosticFlags, Diagnostics};
use session::Session;
use source_files::SourceFiles;
use std::path::Path;

impl Invoke for ClassifyCommand {
    fn invoke(self) -> Result<(), ()> {
        let ClassifyCommand { filename, options } = self;
        let filepath = Path::new(&filename);

        let content = std::fs::read_to_string(filepath).map_err(|err| {
            eprintln!("error: Failed to read '{}' - {}", filename, err);
        })?;

        let mut source_files = SourceFiles::new();
        let key = source_files.add(filepath.into(), content);

        let diagnostics = Diagnostics::new(
            &source_files,
            DiagnosticFlags {
                print_without_collecting: true,
                project_root: std::env::current_dir().ok(),
            },
        );

        let session = Session::new(options, &source_files, &diagnostics);
        print!("{}", classify_file(&session, key)?);

        if session.has_errors() {
            Err(())
        } else {
            Ok(())
        }
    }
}
