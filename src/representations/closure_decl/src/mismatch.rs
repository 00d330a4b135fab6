use derive_more::{Display, IsVariant};
use diagnostics::ErrorDiagnostic;
use source_files::Source;
use union_type::UnionType;

/// Why one closure parameter can't substitute for another
#[derive(Clone, Debug, PartialEq, Eq, Display, IsVariant)]
pub enum ParamMismatch {
    #[display(
        "expected a {} parameter",
        if *expected_reference { "pass-by-reference" } else { "pass-by-value" }
    )]
    ReferenceMismatch { expected_reference: bool },
    #[display("parameter is required but an optional parameter is expected")]
    RequiredForOptional,
    #[display("'{from}' cannot be cast to '{to}'")]
    IncompatibleType { from: UnionType, to: UnionType },
}

impl ParamMismatch {
    /// Creates a diagnostic for the closure parameter at (0-based) `index`
    pub fn into_diagnostic(self, index: usize, source: Source) -> ErrorDiagnostic {
        ErrorDiagnostic::new(
            format!("Closure parameter #{} is incompatible, {}", index + 1, self),
            source,
        )
    }
}

#[test]
fn test_messages() {
    let int: UnionType = "int".parse().unwrap();
    let float: UnionType = "float".parse().unwrap();

    assert_eq!(
        ParamMismatch::ReferenceMismatch {
            expected_reference: true
        }
        .to_string(),
        "expected a pass-by-reference parameter"
    );
    assert_eq!(
        ParamMismatch::ReferenceMismatch {
            expected_reference: false
        }
        .to_string(),
        "expected a pass-by-value parameter"
    );
    assert_eq!(
        ParamMismatch::IncompatibleType {
            from: float,
            to: int
        }
        .to_string(),
        "'float' cannot be cast to 'int'"
    );
}

#[test]
fn test_into_diagnostic() {
    use diagnostics::Show;
    use source_files::SourceFiles;

    colored::control::set_override(false);

    let source_files = SourceFiles::new();
    let diagnostic = ParamMismatch::RequiredForOptional.into_diagnostic(1, Source::doc_comment());

    assert_eq!(
        diagnostic.message(),
        "Closure parameter #2 is incompatible, parameter is required but an optional parameter is expected"
    );

    let mut shown = String::new();
    diagnostic.show(&mut shown, &source_files).unwrap();
    assert!(shown.starts_with("<doc comment>:1:1: error: "));
}
