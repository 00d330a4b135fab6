use crate::{Location, SourceFileKey, SourceFiles};

// WARNING: Don't implement PartialEq, Eq, or Hash for this.
// Two parameters declared in different places are still the same parameter.
#[derive(Copy, Clone, Debug)]
pub struct Source {
    pub key: SourceFileKey,
    pub location: Location,
}

impl Source {
    pub fn new(key: SourceFileKey, location: Location) -> Self {
        Self { key, location }
    }

    /// Placeholder location for constructs synthesized from declared signatures
    pub fn doc_comment() -> Self {
        Self::new(SourceFiles::DOC_COMMENT_KEY, Location::new(1, 1))
    }

    pub fn is_doc_comment(&self) -> bool {
        self.key == SourceFiles::DOC_COMMENT_KEY
    }
}

#[test]
fn test_doc_comment_placeholder() {
    assert!(Source::doc_comment().is_doc_comment());
    assert!(!Source::new(SourceFiles::INTERNAL_KEY, Location::new(1, 1)).is_doc_comment());
}
