//! Scenarios against the global registry.
//!
//! Every test declares its own function-local enum types: tests run in
//! parallel and share the process-wide registry.


use crate::{clear, declare, declare_all, enum_type, is_defined, is_valid, validate, values_of};

#[test]
fn integration_declare_is_identity() {
    #[cfg(feature = "enumdef_tracing")]
    crate::enumdef_tracing::init();
    enum_type! {
        struct Status(String);
    }

    let draft = declare(Status::new("draft"));
    assert_eq!(draft, Status::new("draft"));
    assert_eq!(draft.0, "draft");
}

#[test]
fn integration_idempotent_declaration() {
    #[cfg(feature = "enumdef_tracing")]
    crate::enumdef_tracing::init();
    enum_type! {
        struct Status(String);
    }

    declare(Status::new("open"));
    declare(Status::new("open"));
    assert_eq!(values_of::<Status>(), [Status::new("open")]);
}

#[test]
fn integration_order_preservation() {
    #[cfg(feature = "enumdef_tracing")]
    crate::enumdef_tracing::init();
    enum_type! {
        struct Status(String);
        struct Access(u32);
    }

    // Interleaved with another enum type
    declare(Status::new("draft"));
    declare(Access(4));
    declare(Status::new("open"));
    declare(Access(1));
    declare(Status::new("merged"));
    declare(Status::new("draft"));
    declare(Status::new("closed"));

    let statuses: Vec<String> = values_of::<Status>().into_iter().map(Status::into_inner).collect();
    assert_eq!(statuses, ["draft", "open", "merged", "closed"]);
    assert_eq!(values_of::<Access>(), [Access(4), Access(1)]);
}

#[test]
fn integration_validity_round_trip() {
    #[cfg(feature = "enumdef_tracing")]
    crate::enumdef_tracing::init();
    enum_type! {
        struct Access(i64);
    }

    let declared = declare_all([Access(1), Access(2), Access(4), Access(-8)]);
    for value in &declared {
        assert!(is_valid(value));
        assert_eq!(validate(value), Ok(()));
    }
    assert!(!is_valid(&Access(0)));
    assert!(validate(&Access(3)).is_err());
}

#[test]
fn integration_undeclared_type() {
    #[cfg(feature = "enumdef_tracing")]
    crate::enumdef_tracing::init();
    enum_type! {
        struct Nothing(i32);
    }

    assert!(!is_defined::<Nothing>());
    assert!(!is_valid(&Nothing(0)));
    assert!(values_of::<Nothing>().is_empty());
}

#[test]
fn integration_clear_resets_state() {
    #[cfg(feature = "enumdef_tracing")]
    crate::enumdef_tracing::init();
    enum_type! {
        struct Status(String);
    }

    let declared = declare_all(["draft", "open", "merged"].map(Status::new));
    assert!(is_defined::<Status>());

    clear::<Status>();
    for value in &declared {
        assert!(!is_valid(value));
    }
    assert!(values_of::<Status>().is_empty());
    assert!(!is_defined::<Status>());
    assert_eq!(validate(&Status::new("open")).unwrap_err().to_string(), "Status doesn't have any definition");

    // Declarable again after a clear, in fresh order
    declare(Status::new("merged"));
    declare(Status::new("draft"));
    assert_eq!(values_of::<Status>(), [Status::new("merged"), Status::new("draft")]);
}

#[test]
fn integration_empty_declare_all_leaves_type_undefined() {
    #[cfg(feature = "enumdef_tracing")]
    crate::enumdef_tracing::init();
    enum_type! {
        struct Ghost(i32);
    }

    declare_all(Vec::<Ghost>::new());
    assert!(!is_defined::<Ghost>());
    assert_eq!(validate(&Ghost(1)).unwrap_err().to_string(), "Ghost doesn't have any definition");
}
