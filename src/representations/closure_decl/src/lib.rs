mod mismatch;

pub use mismatch::ParamMismatch;
use param::{Param, ParamFlags};
use source_files::Source;
use std::fmt::Display;
use union_type::UnionType;

/// One parameter of a declared closure/callable signature, e.g. the `int&...`
/// in `Closure(string, int&...): void`.
///
/// This isn't a type itself, it only exists as part of a closure declaration type.
/// Once created it is never modified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClosureDeclParam {
    /// The type of each individual argument, even when variadic
    ty: UnionType,
    is_variadic: bool,
    is_reference: bool,
    is_optional: bool,
}

impl ClosureDeclParam {
    /// Variadic parameters are always optional, regardless of `is_optional`.
    pub fn new(ty: UnionType, is_variadic: bool, is_reference: bool, is_optional: bool) -> Self {
        Self {
            ty,
            is_variadic,
            is_reference,
            is_optional: is_optional || is_variadic,
        }
    }

    /// The type of the individual arguments the closure expects callers to pass
    pub fn non_variadic_union_type(&self) -> &UnionType {
        &self.ty
    }

    pub fn is_variadic(&self) -> bool {
        self.is_variadic
    }

    pub fn is_pass_by_reference(&self) -> bool {
        self.is_reference
    }

    /// Whether callers may omit an argument for this parameter
    pub fn is_optional(&self) -> bool {
        self.is_optional
    }

    /// Whether a closure with this parameter can be used where a closure with `other`
    /// in the same position is expected.
    ///
    /// Variadic-ness is ignored, callers are expected to have already lined up
    /// the parameter lists.
    pub fn can_substitute_for(&self, other: &ClosureDeclParam) -> bool {
        self.substitution_mismatch(other).is_none()
    }

    /// Same as [`Self::can_substitute_for`], but explains the first rule that was violated
    pub fn substitution_mismatch(&self, other: &ClosureDeclParam) -> Option<ParamMismatch> {
        let mismatch = if self.is_reference != other.is_reference {
            ParamMismatch::ReferenceMismatch {
                expected_reference: other.is_reference,
            }
        } else if !self.is_optional && other.is_optional {
            // Arity should already have been checked by the caller
            ParamMismatch::RequiredForOptional
        } else if !self.ty.can_cast_to(&other.ty) {
            ParamMismatch::IncompatibleType {
                from: self.ty.clone(),
                to: other.ty.clone(),
            }
        } else {
            return None;
        };

        log::trace!(
            "closure parameter '{}' cannot substitute for '{}': {}",
            self,
            other,
            mismatch
        );
        Some(mismatch)
    }

    /// Creates a parameter with the type seen by callers for an individual argument.
    /// Never variadic.
    pub fn as_non_variadic_regular_param(&self, i: usize) -> Param {
        let mut param = self.regular_param(i, ParamFlags::default());

        if self.is_optional && !self.is_variadic {
            param.set_default_value_type(self.ty.clone());
        }

        param
    }

    /// Creates a placeholder for the `i`th parameter of a function-like (`$p0`, `$p1`, ...)
    pub fn as_regular_param(&self, i: usize) -> Param {
        let mut param = self.regular_param(i, ParamFlags::default().with_variadic(self.is_variadic));

        if self.is_optional && !self.is_variadic {
            param.set_default_value_type(UnionType::mixed());
        }

        param
    }

    fn regular_param(&self, i: usize, flags: ParamFlags) -> Param {
        Param::new(
            Source::doc_comment(),
            format!("p{i}"),
            self.ty.clone(),
            flags.with_reference(self.is_reference),
        )
    }
}

impl Display for ClosureDeclParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ty)?;

        if self.is_reference {
            write!(f, "&")?;
        }

        if self.is_variadic {
            write!(f, "...")?;
        } else if self.is_optional {
            write!(f, "=")?;
        }

        Ok(())
    }
}

#[cfg(test)]
fn ty(s: &str) -> UnionType {
    s.parse().unwrap()
}

#[cfg(test)]
fn all_facets() -> impl Iterator<Item = (bool, bool, bool)> {
    (0..8u8).map(|bits| (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0))
}

#[test]
fn test_variadic_is_always_optional() {
    for (is_variadic, is_reference, is_optional) in all_facets() {
        let param = ClosureDeclParam::new(ty("int"), is_variadic, is_reference, is_optional);

        assert_eq!(param.is_variadic(), is_variadic);
        assert_eq!(param.is_pass_by_reference(), is_reference);
        assert_eq!(param.is_optional(), is_optional || is_variadic);
    }
}

#[test]
fn test_accessors() {
    let param = ClosureDeclParam::new(ty("string|null"), false, true, false);

    assert_eq!(param.non_variadic_union_type(), &ty("?string"));
    assert!(!param.is_variadic());
    assert!(param.is_pass_by_reference());
    assert!(!param.is_optional());
}

#[test]
fn test_display() {
    assert_eq!(
        ClosureDeclParam::new(ty("int"), true, true, true).to_string(),
        "int&..."
    );
    assert_eq!(
        ClosureDeclParam::new(ty("int"), true, false, false).to_string(),
        "int..."
    );
    assert_eq!(
        ClosureDeclParam::new(ty("string"), false, false, true).to_string(),
        "string="
    );
    assert_eq!(
        ClosureDeclParam::new(ty("array"), false, true, true).to_string(),
        "array&="
    );
    assert_eq!(
        ClosureDeclParam::new(ty("bool"), false, false, false).to_string(),
        "bool"
    );
}

#[test]
fn test_display_signature() {
    use indoc::indoc;

    let params = [
        ClosureDeclParam::new(ty("string"), false, false, false),
        ClosureDeclParam::new(ty("?int"), false, false, true),
        ClosureDeclParam::new(ty("array"), true, true, false),
    ];

    let rendered = params
        .iter()
        .enumerate()
        .map(|(i, param)| format!("{i}: {param}\n"))
        .collect::<String>();

    assert_eq!(
        rendered,
        indoc! {"
            0: string
            1: int|null=
            2: array&...
        "}
    );
}

#[test]
fn test_optionality_is_asymmetric() {
    let optional = ClosureDeclParam::new(ty("int"), false, false, true);
    let required = ClosureDeclParam::new(ty("int"), false, false, false);

    assert!(optional.can_substitute_for(&required));
    assert!(!required.can_substitute_for(&optional));
    assert!(
        required
            .substitution_mismatch(&optional)
            .is_some_and(|mismatch| mismatch.is_required_for_optional())
    );
}

#[test]
fn test_required_cannot_substitute_for_variadic() {
    let variadic = ClosureDeclParam::new(ty("int"), true, false, false);
    let required = ClosureDeclParam::new(ty("int"), false, false, false);

    assert!(variadic.can_substitute_for(&required));
    assert!(
        required
            .substitution_mismatch(&variadic)
            .is_some_and(|mismatch| mismatch.is_required_for_optional())
    );
}

#[test]
fn test_reference_mismatch_always_fails() {
    let types = [ty("int"), ty("mixed"), ty("string|int")];

    for self_ty in types.iter() {
        for other_ty in types.iter() {
            for (is_variadic, _, is_optional) in all_facets() {
                for (other_variadic, _, other_optional) in all_facets() {
                    let by_ref =
                        ClosureDeclParam::new(self_ty.clone(), is_variadic, true, is_optional);
                    let by_value = ClosureDeclParam::new(
                        other_ty.clone(),
                        other_variadic,
                        false,
                        other_optional,
                    );

                    assert!(!by_ref.can_substitute_for(&by_value));
                    assert!(
                        by_value
                            .substitution_mismatch(&by_ref)
                            .is_some_and(|mismatch| mismatch.is_reference_mismatch())
                    );
                    assert_eq!(
                        by_ref.substitution_mismatch(&by_value),
                        Some(ParamMismatch::ReferenceMismatch {
                            expected_reference: false
                        })
                    );
                }
            }
        }
    }
}

#[test]
fn test_castable_types_substitute() {
    let int = ClosureDeclParam::new(ty("int"), false, true, false);
    let float = ClosureDeclParam::new(ty("float"), false, true, false);

    assert!(int.can_substitute_for(&float));
    assert!(!float.can_substitute_for(&int));
    assert_eq!(
        float.substitution_mismatch(&int),
        Some(ParamMismatch::IncompatibleType {
            from: ty("float"),
            to: ty("int"),
        })
    );
}

#[test]
fn test_incompatible_type_fails_even_when_flags_match() {
    let string = ClosureDeclParam::new(ty("string"), false, false, true);
    let array = ClosureDeclParam::new(ty("array"), false, false, true);

    assert!(
        string
            .substitution_mismatch(&array)
            .is_some_and(|mismatch| mismatch.is_incompatible_type())
    );
    assert!(!array.can_substitute_for(&string));
}

#[test]
fn test_substitution_ignores_variadic() {
    let variadic = ClosureDeclParam::new(ty("int"), true, false, false);
    let optional = ClosureDeclParam::new(ty("int"), false, false, true);

    assert!(variadic.can_substitute_for(&optional));
    assert!(optional.can_substitute_for(&variadic));
}

#[test]
fn test_unknown_type_substitutes() {
    let unknown = ClosureDeclParam::new(UnionType::empty(), false, false, false);
    let named = ClosureDeclParam::new(ty("ArrayObject"), false, false, false);

    assert!(unknown.can_substitute_for(&named));
    assert!(named.can_substitute_for(&unknown));
}

#[test]
fn test_non_variadic_regular_param() {
    let variadic = ClosureDeclParam::new(ty("int"), true, true, false);
    let param = variadic.as_non_variadic_regular_param(2);

    assert_eq!(param.name, "p2");
    assert!(param.source.is_doc_comment());
    assert_eq!(param.ty, ty("int"));
    assert!(!param.is_variadic());
    assert!(param.is_pass_by_reference());
    assert!(!param.has_default_value());

    let optional = ClosureDeclParam::new(ty("?string"), false, false, true);
    let param = optional.as_non_variadic_regular_param(0);

    assert!(!param.is_variadic());
    assert!(!param.is_pass_by_reference());
    assert_eq!(param.default_value_type, Some(ty("?string")));

    let required = ClosureDeclParam::new(ty("bool"), false, false, false);
    assert!(!required.as_non_variadic_regular_param(1).has_default_value());
}

#[test]
fn test_regular_param() {
    let variadic = ClosureDeclParam::new(ty("int"), true, false, true);
    let param = variadic.as_regular_param(3);

    assert_eq!(param.name, "p3");
    assert!(param.source.is_doc_comment());
    assert_eq!(param.ty, ty("int"));
    assert!(param.is_variadic());
    assert!(!param.is_pass_by_reference());
    assert!(!param.has_default_value());
    assert!(param.is_optional());

    let optional = ClosureDeclParam::new(ty("string"), false, true, true);
    let param = optional.as_regular_param(0);

    assert!(!param.is_variadic());
    assert!(param.is_pass_by_reference());
    assert_eq!(param.default_value_type, Some(UnionType::mixed()));
    assert_eq!(param.ty, ty("string"));

    let required = ClosureDeclParam::new(ty("bool"), false, false, false);
    let param = required.as_regular_param(1);

    assert!(!param.is_variadic());
    assert!(!param.has_default_value());
    assert!(!param.is_optional());
}

#[test]
fn test_regular_params_variadic_iff_declared_variadic() {
    for (is_variadic, is_reference, is_optional) in all_facets() {
        let decl = ClosureDeclParam::new(ty("mixed"), is_variadic, is_reference, is_optional);
        let placeholder = decl.as_regular_param(0);
        let individual = decl.as_non_variadic_regular_param(0);

        assert_eq!(placeholder.is_variadic(), is_variadic);
        assert!(!individual.is_variadic());
        assert_eq!(placeholder.is_pass_by_reference(), is_reference);
        assert_eq!(individual.is_pass_by_reference(), is_reference);

        let expect_default = decl.is_optional() && !is_variadic;
        assert_eq!(placeholder.has_default_value(), expect_default);
        assert_eq!(individual.has_default_value(), expect_default);
    }
}

#[test]
fn test_conversions_are_fresh() {
    let decl = ClosureDeclParam::new(ty("int"), false, false, true);

    let mut first = decl.as_regular_param(0);
    first.name = "renamed".into();
    first.default_value_type = None;

    let second = decl.as_regular_param(0);
    assert_eq!(second.name, "p0");
    assert!(second.has_default_value());
}

#[test]
fn test_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClosureDeclParam>();
    assert_send_sync::<ParamMismatch>();

    let decl = std::sync::Arc::new(ClosureDeclParam::new(ty("int"), false, false, false));
    let other = ClosureDeclParam::new(ty("float"), false, false, false);

    let handles = (0..4)
        .map(|_| {
            let decl = decl.clone();
            let other = other.clone();
            std::thread::spawn(move || decl.can_substitute_for(&other))
        })
        .collect::<Vec<_>>();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
