mod kind;
mod parse;

use indexmap::IndexSet;
use itertools::Itertools;
pub use kind::TypeKind;
pub use parse::ParseUnionTypeError;
use std::fmt::Display;

/// A set of possible types for a value, in the order they were declared.
///
/// An empty union means the type is unknown, and is castable to and from anything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnionType {
    types: IndexSet<TypeKind>,
}

impl UnionType {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn mixed() -> Self {
        Self::of(TypeKind::Mixed)
    }

    pub fn of(kind: TypeKind) -> Self {
        Self {
            types: IndexSet::from([kind]),
        }
    }

    pub fn with(mut self, kind: TypeKind) -> Self {
        self.types.insert(kind);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Whether a value of this type may be passed where `other` is expected.
    ///
    /// This is permissive: it's enough for any one member to be castable to any one
    /// member of `other`.
    pub fn can_cast_to(&self, other: &UnionType) -> bool {
        if self.is_empty() || other.is_empty() {
            return true;
        }

        self.types
            .iter()
            .cartesian_product(other.types.iter())
            .any(|(from, to)| from.can_cast_to(to))
    }
}

impl Display for UnionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.types.iter().join("|"))
    }
}

#[test]
fn test_display() {
    let ty = UnionType::of(TypeKind::Int)
        .with(TypeKind::String)
        .with(TypeKind::Named("ArrayObject".into()));

    assert_eq!(ty.to_string(), "int|string|ArrayObject");
    assert_eq!(UnionType::empty().to_string(), "");
}

#[test]
fn test_members_are_unique() {
    let ty = UnionType::of(TypeKind::Int)
        .with(TypeKind::Int)
        .with(TypeKind::Null);

    assert_eq!(ty.to_string(), "int|null");
}

#[test]
fn test_empty_is_castable_both_ways() {
    let int = UnionType::of(TypeKind::Int);

    assert!(UnionType::empty().can_cast_to(&int));
    assert!(int.can_cast_to(&UnionType::empty()));
}

#[test]
fn test_any_member_suffices() {
    let int_or_string = UnionType::of(TypeKind::Int).with(TypeKind::String);
    let int = UnionType::of(TypeKind::Int);
    let bool_or_null = UnionType::of(TypeKind::Bool).with(TypeKind::Null);

    assert!(int_or_string.can_cast_to(&int));
    assert!(int.can_cast_to(&int_or_string));
    assert!(!int_or_string.can_cast_to(&bool_or_null));
}

#[test]
fn test_widening_is_one_way() {
    let int = UnionType::of(TypeKind::Int);
    let float = UnionType::of(TypeKind::Float);

    assert!(int.can_cast_to(&float));
    assert!(!float.can_cast_to(&int));
}
