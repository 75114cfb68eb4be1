use source_files::{Source, SourceFiles};
use std::path::Path;

pub trait Show {
    fn show(
        &self,
        w: &mut dyn std::fmt::Write,
        source_files: &SourceFiles,
        project_root: Option<&Path>,
    ) -> std::fmt::Result;

    fn eprintln(&self, source_files: &SourceFiles, project_root: Option<&Path>) {
        let mut message = String::new();
        self.show(&mut message, source_files, project_root)
            .expect("show message");
        eprintln!("{}", message);
    }
}

/// Filename of `source`, relative to `project_root` when it lives inside it
pub fn minimal_filename<'a>(
    source: Source,
    source_files: &'a SourceFiles,
    project_root: Option<&Path>,
) -> &'a str {
    let file = source_files.get(source.key);

    project_root
        .and_then(|root| file.filepath().strip_prefix(root).ok())
        .and_then(|relative| relative.to_str())
        .unwrap_or_else(|| file.filename())
}

#[cfg(test)]
mod tests {
    use super::*;
    use source_files::Location;

    #[test]
    fn strips_project_root() {
        let mut source_files = SourceFiles::new();
        let key = source_files.add("/work/imgui/tests/anon.c".into(), "".into());
        let source = Source::new(key, Location::start());

        assert_eq!(
            minimal_filename(source, &source_files, Some(Path::new("/work/imgui"))),
            "tests/anon.c"
        );
        assert_eq!(
            minimal_filename(source, &source_files, Some(Path::new("/elsewhere"))),
            "/work/imgui/tests/anon.c"
        );
        assert_eq!(
            minimal_filename(source, &source_files, None),
            "/work/imgui/tests/anon.c"
        );
    }
}
