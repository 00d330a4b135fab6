use crate::Show;
use colored::Colorize;
use source_files::{Source, SourceFiles};

#[derive(Debug)]
pub struct ErrorDiagnostic {
    message: String,
    source: Source,
}

impl ErrorDiagnostic {
    pub fn new(message: impl ToString, source: Source) -> Self {
        Self {
            message: message.to_string(),
            source,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source(&self) -> Source {
        self.source
    }
}

impl Show for ErrorDiagnostic {
    fn show(&self, w: &mut dyn std::fmt::Write, source_files: &SourceFiles) -> std::fmt::Result {
        write!(
            w,
            "{}:{}:{}: {} {}",
            source_files.get(self.source.key).filename(),
            self.source.location.line,
            self.source.location.column,
            "error:".bright_red().bold(),
            self.message,
        )
    }
}

#[test]
fn test_show() {
    use source_files::Location;

    colored::control::set_override(false);

    let source_files = SourceFiles::new();
    let key = source_files.add("closures.php".into());
    let error = ErrorDiagnostic::new("Bad closure", Source::new(key, Location::new(4, 12)));

    let mut message = String::new();
    error.show(&mut message, &source_files).unwrap();
    assert_eq!(message, "closures.php:4:12: error: Bad closure");
}
