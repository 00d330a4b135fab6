use crate::{TypeKind, UnionType};
use derive_more::{Display, Error};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseUnionTypeError {
    #[display("Expected type")]
    Empty,
    #[display("Unknown type '{name}'")]
    UnknownType {
        #[error(not(source))]
        name: String,
    },
}

impl FromStr for UnionType {
    type Err = ParseUnionTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut union_type = UnionType::empty();

        for member in s.split('|').map(str::trim) {
            let (is_nullable, name) = match member.strip_prefix('?') {
                Some(rest) => (true, rest.trim_start()),
                None => (false, member),
            };

            if name.is_empty() {
                return Err(ParseUnionTypeError::Empty);
            }

            union_type = union_type.with(parse_type_kind(name)?);

            if is_nullable {
                union_type = union_type.with(TypeKind::Null);
            }
        }

        Ok(union_type)
    }
}

fn parse_type_kind(name: &str) -> Result<TypeKind, ParseUnionTypeError> {
    Ok(match name.to_ascii_lowercase().as_str() {
        "mixed" => TypeKind::Mixed,
        "null" => TypeKind::Null,
        "bool" | "boolean" => TypeKind::Bool,
        "false" => TypeKind::False,
        "true" => TypeKind::True,
        "int" | "integer" => TypeKind::Int,
        "float" | "double" => TypeKind::Float,
        "string" => TypeKind::String,
        "array" => TypeKind::Array,
        "iterable" => TypeKind::Iterable,
        "object" => TypeKind::Object,
        "callable" => TypeKind::Callable,
        "closure" => TypeKind::Closure,
        _ if is_class_name(name) => TypeKind::Named(name.into()),
        _ => {
            return Err(ParseUnionTypeError::UnknownType { name: name.into() });
        }
    })
}

fn is_class_name(name: &str) -> bool {
    let mut segments = name.trim_start_matches('\\').split('\\');

    segments.all(|segment| {
        let mut chars = segment.chars();

        chars.next().is_some_and(|c| c.is_ascii_uppercase())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    })
}

#[test]
fn test_parse_builtins() {
    let ty: UnionType = "int|string".parse().unwrap();
    assert_eq!(ty, UnionType::of(TypeKind::Int).with(TypeKind::String));
}

#[test]
fn test_parse_nullable() {
    let ty: UnionType = "?int".parse().unwrap();
    assert_eq!(ty, UnionType::of(TypeKind::Int).with(TypeKind::Null));
}

#[test]
fn test_parse_ignores_case_and_whitespace() {
    let ty: UnionType = " Bool | FLOAT ".parse().unwrap();
    assert_eq!(ty.to_string(), "bool|float");
}

#[test]
fn test_parse_class_names() {
    let ty: UnionType = "\\App\\Model|Closure".parse().unwrap();
    assert_eq!(
        ty,
        UnionType::of(TypeKind::Named("\\App\\Model".into())).with(TypeKind::Closure)
    );
}

#[test]
fn test_parse_errors() {
    assert_eq!("".parse::<UnionType>(), Err(ParseUnionTypeError::Empty));
    assert_eq!("int|".parse::<UnionType>(), Err(ParseUnionTypeError::Empty));
    assert_eq!(
        "int|wat".parse::<UnionType>(),
        Err(ParseUnionTypeError::UnknownType { name: "wat".into() })
    );
    assert_eq!(
        ParseUnionTypeError::UnknownType { name: "wat".into() }.to_string(),
        "Unknown type 'wat'"
    );
}
