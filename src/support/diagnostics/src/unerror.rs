use crate::Show;
use source_files::SourceFiles;
use std::path::Path;

pub fn unerror<T, E: Show>(
    result: Result<T, E>,
    source_files: &SourceFiles,
    project_root: Option<&Path>,
) -> Result<T, ()> {
    match result {
        Ok(value) => Ok(value),
        Err(err) => {
            err.eprintln(source_files, project_root);
            Err(())
        }
    }
}
