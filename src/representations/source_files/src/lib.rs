mod file;
mod key;
mod location;
mod source;

use append_only_vec::AppendOnlyVec;
pub use file::SourceFile;
pub use key::SourceFileKey;
pub use location::Location;
pub use source::Source;
use std::path::PathBuf;

pub struct SourceFiles {
    files: AppendOnlyVec<SourceFile>,
}

impl SourceFiles {
    pub const INTERNAL_KEY: SourceFileKey = SourceFileKey(0);
    pub const DOC_COMMENT_KEY: SourceFileKey = SourceFileKey(1);

    pub fn new() -> Self {
        let files = AppendOnlyVec::new();

        // Reserved files for constructs that don't come from user-visible code
        files.push(SourceFile::new("<internal>".into()));
        files.push(SourceFile::new("<doc comment>".into()));

        Self { files }
    }

    pub fn get(&self, key: SourceFileKey) -> &SourceFile {
        &self.files[key.index()]
    }

    pub fn add(&self, filename: PathBuf) -> SourceFileKey {
        SourceFileKey::from_index(self.files.push(SourceFile::new(filename)))
    }
}

impl Default for SourceFiles {
    fn default() -> Self {
        Self::new()
    }
}

#[test]
fn test_reserved_files() {
    let source_files = SourceFiles::new();
    assert_eq!(
        source_files.get(SourceFiles::INTERNAL_KEY).filename(),
        "<internal>"
    );
    assert_eq!(
        source_files.get(SourceFiles::DOC_COMMENT_KEY).filename(),
        "<doc comment>"
    );
}

#[test]
fn test_add_file() {
    let source_files = SourceFiles::new();
    let key = source_files.add("main.php".into());

    assert_eq!(key, SourceFileKey(2));
    assert_eq!(source_files.get(key).filename(), "main.php");
}
