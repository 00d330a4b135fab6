use std::path::PathBuf;

#[derive(Debug)]
pub struct SourceFile {
    filepath: PathBuf,
}

impl SourceFile {
    pub fn new(filepath: PathBuf) -> Self {
        Self { filepath }
    }

    pub fn filename(&self) -> &str {
        self.filepath
            .to_str()
            .unwrap_or("<invalid unicode filename>")
    }
}
