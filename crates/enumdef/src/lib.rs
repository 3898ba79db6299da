//! Runtime registry of enum values.
//!
//! Rust enums are closed at compile time, but values crossing a boundary
//! (request bodies, configuration, database columns) often arrive as plain
//! strings or integers. This crate lets a program declare, once, the legal
//! values of such a named primitive type, and later validate arbitrary values
//! of that type against the declared set without writing a matching
//! validation function for every type.
//!
//! ## Declaring
//!
//! Enum types are newtypes over an integer or string, usually generated with
//! [`enum_type!`]. Each legal value is declared with [`declare`], which
//! returns its input so that declaration can double as a binding:
//!
//! ```
//! use enumdef::enum_type;
//!
//! enum_type! {
//!     pub struct Status(String);
//!     pub struct Access(i32);
//! }
//!
//! let draft = enumdef::declare(Status::new("draft"));
//! let open = enumdef::declare(Status::new("open"));
//! enumdef::declare_all([Access(1), Access(2), Access(4)]);
//!
//! assert!(enumdef::is_valid(&open));
//! assert!(!enumdef::is_valid(&Access(3)));
//! assert_eq!(enumdef::values_of::<Status>(), [draft, open]);
//! assert_eq!(
//!     enumdef::validate(&Status::new("postponed")).unwrap_err().to_string(),
//!     r#""postponed" is not a valid choice, allowed values are: "draft", "open""#
//! );
//! assert_eq!(
//!     enumdef::validate(&Access(99)).unwrap_err().to_string(),
//!     "99 is not a valid choice, allowed values are: 1, 2, 4"
//! );
//! ```
//!
//! ## Scoping
//!
//! Declarations are keyed by the enum type, never by its representation: a
//! value declared for one type is not valid for another type over the same
//! primitive.
//!
//! ## Instances
//!
//! The free functions of this crate operate on [`Registry::global`]. Code that
//! prefers an injected registry, or tests that need a fresh one, can build an
//! isolated [`Registry`] and call the same operations on it.

#[cfg(test)]
mod tests;

pub mod error;
pub mod registry;
pub mod value;

pub use error::EnumError;
pub use registry::Registry;
pub use value::{EnumType, Primitive};

/// Declares `value` valid for its enum type in the global registry and returns it.
pub fn declare<T: EnumType>(value: T) -> T {
    Registry::global().declare(value)
}

/// Declares every value of `values` in the global registry.
pub fn declare_all<T, I>(values: I) -> Vec<T>
where
    T: EnumType,
    I: IntoIterator<Item = T>,
{
    Registry::global().declare_all(values)
}

/// Reports whether `value` is declared in the global registry.
pub fn is_valid<T: EnumType>(value: &T) -> bool {
    Registry::global().is_valid(value)
}

/// Checks `value` against the global registry.
pub fn validate<T: EnumType>(value: &T) -> Result<(), EnumError> {
    Registry::global().validate(value)
}

/// Values declared for `T` in the global registry, in declaration order.
pub fn values_of<T: EnumType>() -> Vec<T> {
    Registry::global().values_of()
}

/// Removes every declaration of `T` from the global registry.
pub fn clear<T: EnumType>() {
    Registry::global().clear::<T>()
}

/// Reports whether `T` has any declaration in the global registry.
pub fn is_defined<T: EnumType>() -> bool {
    Registry::global().is_defined::<T>()
}

#[cfg(feature = "enumdef_tracing")]
pub mod enumdef_tracing {
    use std::sync::Once;
    use tracing_subscriber::{EnvFilter, fmt};

    static INIT: Once = Once::new();

    /// Install a global `fmt` subscriber for the registry events, once per process.
    ///
    /// The filter is read from RUST_LOG and defaults to "off". Output goes
    /// through the test writer, so it is captured by `cargo test`.
    pub fn init() {
        INIT.call_once(|| {
            let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

            fmt().with_target(false).with_test_writer().with_env_filter(filter).init();
        });
    }
}
