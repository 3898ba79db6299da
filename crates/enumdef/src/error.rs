use thiserror::Error;

/// Invalid enum value, reported by validation.
///
/// Messages are meant to be shown to end users as they are.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnumError {
    /// No value was ever declared for the enum type.
    #[error("{type_name} doesn't have any definition")]
    Undefined { type_name: &'static str },

    /// The enum type has declarations, but not this value.
    ///
    /// `value` and `allowed` hold rendered values, `allowed` in declaration order.
    #[error("{value} is not a valid choice, allowed values are: {}", .allowed.join(", "))]
    InvalidChoice { type_name: &'static str, value: String, allowed: Vec<String> },
}

impl EnumError {
    /// Name of the enum type the value was validated against.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined { type_name } | Self::InvalidChoice { type_name, .. } => *type_name,
        }
    }

    /// Rendered values the enum type accepts, empty when it has no definition.
    pub fn allowed(&self) -> &[String] {
        match self {
            Self::Undefined { .. } => &[],
            Self::InvalidChoice { allowed, .. } => allowed,
        }
    }
}
