mod error;
mod show;
mod unerror;
mod warning;

use core::fmt::Debug;
pub use error::ErrorDiagnostic;
pub use show::{Show, minimal_filename};
use source_files::SourceFiles;
use std::{
    path::PathBuf,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};
pub use unerror::unerror;
pub use warning::WarningDiagnostic;

pub trait Diagnostic: Show + Send + Sync {
    fn is_error(&self) -> bool {
        false
    }
}

#[derive(Clone, Debug)]
pub struct DiagnosticFlags {
    pub print_without_collecting: bool,
    pub project_root: Option<PathBuf>,
}

impl Default for DiagnosticFlags {
    fn default() -> Self {
        Self {
            print_without_collecting: true,
            project_root: None,
        }
    }
}

pub struct Diagnostics<'a> {
    source_files: &'a SourceFiles,
    diagnostics: Mutex<Vec<Box<dyn Diagnostic>>>,
    num_errors: AtomicUsize,
    flags: DiagnosticFlags,
}

impl<'a> Debug for Diagnostics<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics").finish_non_exhaustive()
    }
}

impl<'a> Diagnostics<'a> {
    pub fn new(source_files: &'a SourceFiles, flags: DiagnosticFlags) -> Self {
        Self {
            source_files,
            diagnostics: Mutex::new(Vec::new()),
            num_errors: AtomicUsize::new(0),
            flags,
        }
    }

    pub fn flags(&self) -> &DiagnosticFlags {
        &self.flags
    }

    pub fn push(&self, diagnostic: impl Diagnostic + 'static) {
        if diagnostic.is_error() {
            self.num_errors.fetch_add(1, Ordering::Relaxed);
        }

        if self.flags.print_without_collecting {
            self.print(&diagnostic);
        } else {
            self.collected().push(Box::new(diagnostic));
        }
    }

    pub fn num_errors(&self) -> usize {
        self.num_errors.load(Ordering::Relaxed)
    }

    pub fn num_collected(&self) -> usize {
        self.collected().len()
    }

    /// Renders every collected diagnostic without printing it
    pub fn render_all(&self) -> Vec<String> {
        self.collected()
            .iter()
            .map(|diagnostic| self.render(&**diagnostic))
            .collect()
    }

    pub fn print(&self, diagnostic: &dyn Diagnostic) {
        eprintln!("{}", self.render(diagnostic));
    }

    fn render(&self, diagnostic: &dyn Diagnostic) -> String {
        let mut message = String::new();

        diagnostic
            .show(
                &mut message,
                self.source_files,
                self.flags.project_root.as_deref(),
            )
            .expect("show diagnostic");

        message
    }

    fn collected(&self) -> std::sync::MutexGuard<'_, Vec<Box<dyn Diagnostic>>> {
        // A poisoned list still holds every diagnostic pushed before the panic
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use source_files::{Location, Source};

    #[test]
    fn collects_when_not_printing_immediately() {
        colored::control::set_override(false);

        let mut source_files = SourceFiles::new();
        let key = source_files.add("record.h".into(), "".into());

        let diagnostics = Diagnostics::new(
            &source_files,
            DiagnosticFlags {
                print_without_collecting: false,
                project_root: None,
            },
        );

        diagnostics.push(WarningDiagnostic::new(
            "same layout",
            Source::new(key, Location::new(4, 5)),
        ));
        diagnostics.push(ErrorDiagnostic::plain("bad record"));

        assert_eq!(diagnostics.num_collected(), 2);
        assert_eq!(diagnostics.num_errors(), 1);
        assert_eq!(
            diagnostics.render_all(),
            vec![
                "record.h:4:5: warning: same layout".to_string(),
                "error: bad record".to_string(),
            ]
        );
    }
}
