//! Enum types and the primitives they are built on.
//!
//! An enum type is a named type whose representation is a single integer or
//! string. The registry keys declarations by the enum type itself, so two enum
//! types over the same primitive never see each other's values.
//!
//! Enum types are usually declared with [`enum_type!`](crate::enum_type), which
//! generates a newtype and its [`EnumType`] implementation. Bare primitives are
//! enum types too, with themselves as representation.

use std::{fmt, hash::Hash};

mod sealed {
    pub trait Sealed {}
}

/// Underlying representation of an enum type.
///
/// Implemented for every signed and unsigned integer width and for string
/// types. The set is sealed: floats, tuples or other hashable types cannot be
/// used as enum representations.
pub trait Primitive:
    Clone + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static + sealed::Sealed
{
    /// Renders the value the way it appears in validation messages.
    ///
    /// Integers are written as plain numbers, strings are quoted and escaped so
    /// that they read differently from numbers. String quoting follows Rust
    /// `Debug` escaping, e.g. `"\u{7f}"` for a DEL character.
    fn render(&self) -> String;
}

/// A named type holding one of a fixed set of declared values.
pub trait EnumType: Clone + Eq + Hash + Send + Sync + 'static {
    type Repr: Primitive;

    /// Borrow the underlying primitive value.
    fn repr(&self) -> &Self::Repr;

    /// Name used in validation messages.
    ///
    /// Defaults to the Rust type name without its module path.
    fn type_name() -> &'static str {
        short_type_name::<Self>()
    }
}

/// Strips the module path from the outermost type name, keeping generic
/// arguments as they are.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    match base.rfind("::") {
        Some(index) => &full[index + 2..],
        None => full,
    }
}

macro_rules! integer_primitives {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                fn render(&self) -> String {
                    self.to_string()
                }
            }

            impl EnumType for $ty {
                type Repr = Self;

                fn repr(&self) -> &Self {
                    self
                }
            }
        )*
    };
}

macro_rules! string_primitives {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                fn render(&self) -> String {
                    format!("{self:?}")
                }
            }

            impl EnumType for $ty {
                type Repr = Self;

                fn repr(&self) -> &Self {
                    self
                }
            }
        )*
    };
}

integer_primitives!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
string_primitives!(String, &'static str);

/// Declares one or more enum types as newtypes over a primitive.
///
/// Each generated type derives `Debug`, `Clone`, `PartialEq`, `Eq` and `Hash`,
/// exposes its value as a public tuple field, and implements [`EnumType`],
/// `From<Repr>` and `Display` (the bare inner value, unquoted). Its
/// [`EnumType::type_name`] is the identifier as written.
///
/// ```
/// use enumdef::{EnumType, enum_type};
///
/// enum_type! {
///     /// Review state of a pull request.
///     pub struct Status(String);
///     pub struct Access(u8);
/// }
///
/// const READ: Access = Access(1);
/// let open = Status::new("open");
///
/// assert_eq!(open.to_string(), "open");
/// assert_eq!(*READ.repr(), 1);
/// assert_eq!(Status::type_name(), "Status");
/// ```
#[macro_export]
macro_rules! enum_type {
    ($($(#[$meta:meta])* $vis:vis struct $name:ident($repr:ty);)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq, Hash)]
            $vis struct $name(pub $repr);

            #[allow(dead_code)]
            impl $name {
                $vis fn new(value: impl ::std::convert::Into<$repr>) -> Self {
                    Self(value.into())
                }

                $vis fn into_inner(self) -> $repr {
                    self.0
                }
            }

            impl $crate::EnumType for $name {
                type Repr = $repr;

                fn repr(&self) -> &$repr {
                    &self.0
                }

                fn type_name() -> &'static str {
                    ::std::stringify!($name)
                }
            }

            impl ::std::convert::From<$repr> for $name {
                fn from(value: $repr) -> Self {
                    Self(value)
                }
            }

            impl ::std::fmt::Display for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    ::std::fmt::Display::fmt(&self.0, f)
                }
            }
        )+
    };
}
