mod file;
mod key;
mod source;

pub use file::SourceFile;
pub use key::SourceFileKey;
pub use line_column::Location;
pub use source::Source;
use std::path::PathBuf;

#[derive(Debug)]
pub struct SourceFiles {
    files: Vec<SourceFile>,
}

impl SourceFiles {
    pub const INTERNAL_KEY: SourceFileKey = SourceFileKey(0);

    pub fn new() -> Self {
        // The <internal> file is used for members built by hand rather than parsed
        Self {
            files: vec![SourceFile::new("<internal>".into(), "".into())],
        }
    }

    pub fn get(&self, key: SourceFileKey) -> &SourceFile {
        &self.files[key.0 as usize]
    }

    pub fn add(&mut self, filename: PathBuf, content: String) -> SourceFileKey {
        let key = SourceFileKey(self.files.len() as u32);
        self.files.push(SourceFile::new(filename, content));
        key
    }
}

impl Default for SourceFiles {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_file_is_always_present() {
        let mut source_files = SourceFiles::new();
        assert_eq!(
            source_files.get(SourceFiles::INTERNAL_KEY).filename(),
            "<internal>"
        );

        let key = source_files.add("fixture.c".into(), "struct A { int a; };".into());
        assert_ne!(key, SourceFiles::INTERNAL_KEY);
        assert_eq!(source_files.get(key).content(), "struct A { int a; };");
    }
}
