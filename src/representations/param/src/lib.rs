mod flags;

pub use flags::ParamFlags;
use source_files::Source;
use std::fmt::Display;
use union_type::UnionType;

/// A parameter of a function-like, either declared in code or synthesized as a placeholder.
#[derive(Clone, Debug)]
pub struct Param {
    pub source: Source,
    pub name: String,
    pub ty: UnionType,
    pub flags: ParamFlags,

    /// The type of the default value, if the parameter has one.
    /// The value itself isn't tracked.
    pub default_value_type: Option<UnionType>,
}

impl Param {
    pub fn new(source: Source, name: impl Into<String>, ty: UnionType, flags: ParamFlags) -> Self {
        Self {
            source,
            name: name.into(),
            ty,
            flags,
            default_value_type: None,
        }
    }

    pub fn set_default_value_type(&mut self, ty: UnionType) {
        self.default_value_type = Some(ty);
    }

    pub fn has_default_value(&self) -> bool {
        self.default_value_type.is_some()
    }

    pub fn is_variadic(&self) -> bool {
        self.flags.is_variadic
    }

    pub fn is_pass_by_reference(&self) -> bool {
        self.flags.is_reference
    }

    pub fn is_optional(&self) -> bool {
        self.has_default_value() || self.is_variadic()
    }
}

impl Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.ty.is_empty() {
            write!(f, "{} ", self.ty)?;
        }

        if self.flags.is_reference {
            write!(f, "&")?;
        }

        if self.flags.is_variadic {
            write!(f, "...")?;
        }

        write!(f, "${}", self.name)?;

        if self.has_default_value() {
            write!(f, " = default")?;
        }

        Ok(())
    }
}

#[test]
fn test_display() {
    use union_type::TypeKind;

    let mut param = Param::new(
        Source::doc_comment(),
        "p0",
        UnionType::of(TypeKind::Int),
        ParamFlags::default()
            .with_reference(true)
            .with_variadic(true),
    );
    assert_eq!(param.to_string(), "int &...$p0");

    param.flags = ParamFlags::default();
    param.set_default_value_type(UnionType::mixed());
    assert_eq!(param.to_string(), "int $p0 = default");

    let untyped = Param::new(
        Source::doc_comment(),
        "x",
        UnionType::empty(),
        ParamFlags::default(),
    );
    assert_eq!(untyped.to_string(), "$x");
}

#[test]
fn test_optionality() {
    let mut param = Param::new(
        Source::doc_comment(),
        "p1",
        UnionType::empty(),
        ParamFlags::default(),
    );
    assert!(!param.is_optional());

    param.set_default_value_type(UnionType::mixed());
    assert!(param.is_optional());

    let variadic = Param::new(
        Source::doc_comment(),
        "p2",
        UnionType::empty(),
        ParamFlags::default().with_variadic(true),
    );
    assert!(variadic.is_optional());
    assert!(!variadic.has_default_value());
}
