use crate::ClassifyOptions;
use diagnostics::{Diagnostic, Diagnostics, Show, unerror};
use source_files::SourceFiles;
use std::path::Path;

/// Everything one run of the classifier shares
pub struct Session<'a> {
    pub options: ClassifyOptions,
    pub source_files: &'a SourceFiles,
    pub diagnostics: &'a Diagnostics<'a>,
}

impl<'a> Session<'a> {
    pub fn new(
        options: ClassifyOptions,
        source_files: &'a SourceFiles,
        diagnostics: &'a Diagnostics<'a>,
    ) -> Self {
        Self {
            options,
            source_files,
            diagnostics,
        }
    }

    pub fn project_root(&self) -> Option<&Path> {
        self.diagnostics.flags().project_root.as_deref()
    }

    /// Reports a recoverable problem, the run continues
    pub fn report(&self, diagnostic: impl Diagnostic + 'static) {
        self.diagnostics.push(diagnostic);
    }

    /// Prints the error of a failed step that stops the run
    pub fn unerror<T, E: Show>(&self, result: Result<T, E>) -> Result<T, ()> {
        unerror(result, self.source_files, self.project_root())
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.num_errors() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EmitKind;
    use diagnostics::{DiagnosticFlags, ErrorDiagnostic, WarningDiagnostic};

    #[test]
    fn defaults() {
        let options = ClassifyOptions::default();
        assert!(options.emit.is_groups());
        assert!(options.warn_duplicate_shapes);
        assert!(!options.strict);
        assert_eq!(EmitKind::from_name("c"), Some(EmitKind::C));
        assert_eq!(EmitKind::from_name("json"), None);
    }

    #[test]
    fn only_errors_fail_the_run() {
        let source_files = SourceFiles::new();
        let diagnostics = Diagnostics::new(
            &source_files,
            DiagnosticFlags {
                print_without_collecting: false,
                project_root: None,
            },
        );
        let session = Session::new(ClassifyOptions::default(), &source_files, &diagnostics);

        session.report(WarningDiagnostic::plain("same layout"));
        assert!(!session.has_errors());

        session.report(ErrorDiagnostic::plain("bad record"));
        assert!(session.has_errors());
        assert_eq!(diagnostics.num_collected(), 2);
    }
}
