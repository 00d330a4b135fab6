#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParamFlags {
    pub is_reference: bool,
    pub is_variadic: bool,
}

impl ParamFlags {
    pub fn with_reference(self, is_reference: bool) -> Self {
        Self {
            is_reference,
            ..self
        }
    }

    pub fn with_variadic(self, is_variadic: bool) -> Self {
        Self {
            is_variadic,
            ..self
        }
    }
}
