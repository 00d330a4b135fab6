#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceFileKey(pub u32);

impl SourceFileKey {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index.try_into().expect("too many source files"))
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

#[test]
fn test_from_index() {
    assert_eq!(SourceFileKey::from_index(7), SourceFileKey(7));
    assert_eq!(SourceFileKey(7).index(), 7);
}

#[test]
#[cfg(target_pointer_width = "64")]
#[should_panic(expected = "too many source files")]
fn test_from_index_overflow() {
    SourceFileKey::from_index(u32::MAX as usize + 1);
}
