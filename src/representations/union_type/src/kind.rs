use std::fmt::Display;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Mixed,
    Null,
    Bool,
    False,
    True,
    Int,
    Float,
    String,
    Array,
    Iterable,
    Object,
    Callable,
    Closure,
    Named(String),
}

impl TypeKind {
    pub fn can_cast_to(&self, to: &TypeKind) -> bool {
        if self == to {
            return true;
        }

        match (self, to) {
            (Self::Mixed, _) | (_, Self::Mixed) => true,
            (Self::False | Self::True, Self::Bool) => true,
            (Self::Bool, Self::False | Self::True) => true,
            (Self::Int, Self::Float) => true,
            (Self::Array, Self::Iterable) => true,
            (Self::Closure | Self::String | Self::Array, Self::Callable) => true,
            (Self::Closure | Self::Named(_), Self::Object) => true,
            (Self::Closure, Self::Named(name)) | (Self::Named(name), Self::Closure) => {
                name == "Closure"
            }
            _ => false,
        }
    }
}

impl Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeKind::Mixed => write!(f, "mixed"),
            TypeKind::Null => write!(f, "null"),
            TypeKind::Bool => write!(f, "bool"),
            TypeKind::False => write!(f, "false"),
            TypeKind::True => write!(f, "true"),
            TypeKind::Int => write!(f, "int"),
            TypeKind::Float => write!(f, "float"),
            TypeKind::String => write!(f, "string"),
            TypeKind::Array => write!(f, "array"),
            TypeKind::Iterable => write!(f, "iterable"),
            TypeKind::Object => write!(f, "object"),
            TypeKind::Callable => write!(f, "callable"),
            TypeKind::Closure => write!(f, "Closure"),
            TypeKind::Named(name) => write!(f, "{}", name),
        }
    }
}

#[test]
fn test_mixed_casts_both_ways() {
    for kind in [TypeKind::Int, TypeKind::Null, TypeKind::Named("Foo".into())] {
        assert!(kind.can_cast_to(&TypeKind::Mixed));
        assert!(TypeKind::Mixed.can_cast_to(&kind));
    }
}

#[test]
fn test_callable_forms() {
    assert!(TypeKind::Closure.can_cast_to(&TypeKind::Callable));
    assert!(TypeKind::String.can_cast_to(&TypeKind::Callable));
    assert!(TypeKind::Array.can_cast_to(&TypeKind::Callable));
    assert!(!TypeKind::Callable.can_cast_to(&TypeKind::Closure));
    assert!(!TypeKind::Int.can_cast_to(&TypeKind::Callable));
}

#[test]
fn test_closure_class() {
    let closure_class = TypeKind::Named("Closure".into());

    assert!(TypeKind::Closure.can_cast_to(&closure_class));
    assert!(closure_class.can_cast_to(&TypeKind::Closure));
    assert!(!TypeKind::Closure.can_cast_to(&TypeKind::Named("Generator".into())));
}

#[test]
fn test_unrelated_classes() {
    let a = TypeKind::Named("A".into());
    let b = TypeKind::Named("B".into());

    assert!(!a.can_cast_to(&b));
    assert!(a.can_cast_to(&TypeKind::Object));
    assert!(!TypeKind::Object.can_cast_to(&a));
}
