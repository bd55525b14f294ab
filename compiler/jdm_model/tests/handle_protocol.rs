//! End-to-end handle/store protocol.
//!
//! Handles are enumerated from a store, the store is edited underneath
//! them, and the tests check which queries notice.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use jdm_model::{
    Declaration, InMemoryStore, MethodHandle, ModelError, Modifiers, ProgramStore, StoreError,
    TypeRef,
};
use jdm_signature::{decode_method, TypeSignature};
use pretty_assertions::assert_eq;

fn widget() -> TypeRef {
    TypeRef::new("ui/Widget")
}

/// `Widget` with a constructor, `setText(String, int)` and `main`.
fn populated() -> InMemoryStore {
    let store = InMemoryStore::new();
    store.declare(
        MethodHandle::constructor(widget(), Vec::<String>::new()),
        Declaration::constructor().with_modifiers(Modifiers::PUBLIC),
    );
    store.declare(
        MethodHandle::method(widget(), "setText", ["QString;", "I"]),
        Declaration::method(TypeSignature::source("String"))
            .with_modifiers(Modifiers::PUBLIC)
            .with_parameter_names(["text", "length"])
            .with_thrown_types([TypeSignature::source("IOException")]),
    );
    store.declare(
        MethodHandle::method(widget(), "main", ["[Ljava/lang/String;"]),
        Declaration::method(TypeSignature::VOID)
            .with_modifiers(Modifiers::PUBLIC | Modifiers::STATIC),
    );
    store
}

fn member(store: &InMemoryStore, name: &str) -> MethodHandle {
    store
        .members(&widget())
        .into_iter()
        .find(|h| h.element_name() == name)
        .unwrap()
}

/// Every resolving query, reduced to whether it reported staleness.
fn resolving_results(handle: &MethodHandle, store: &dyn ProgramStore) -> Vec<Result<(), ModelError>> {
    vec![
        handle.parameter_names(store).map(drop),
        handle.exception_types(store).map(drop),
        handle.return_type(store).map(drop),
        handle.full_signature(store).map(drop),
        handle.method_signature(store).map(drop),
        handle.is_constructor(store).map(drop),
        handle.is_main_method(store).map(drop),
        handle.modifiers(store).map(drop),
    ]
}

#[test]
fn enumerated_handles_resolve() {
    let store = populated();
    let set_text = member(&store, "setText");

    assert_eq!(set_text.parameter_names(&store).unwrap(), vec!["text", "length"]);
    assert_eq!(set_text.exception_types(&store).unwrap(), vec!["QIOException;"]);
    assert_eq!(set_text.return_type(&store).unwrap(), "QString;");
    assert_eq!(set_text.full_signature(&store).unwrap(), "(QString;I)QString;");
    assert!(!set_text.is_constructor(&store).unwrap());
    assert!(!set_text.is_main_method(&store).unwrap());

    let ctor = member(&store, "Widget");
    assert!(ctor.is_constructor(&store).unwrap());
    assert_eq!(ctor.full_signature(&store).unwrap(), "()V");

    assert!(member(&store, "main").is_main_method(&store).unwrap());
}

#[test]
fn full_signature_decodes() {
    let store = populated();
    let text = member(&store, "setText").full_signature(&store).unwrap();
    let sig = decode_method(&text).unwrap();
    assert_eq!(sig.parameter_count(), 2);
}

#[test]
fn rebuilt_handle_is_interchangeable() {
    let store = populated();
    let rebuilt = MethodHandle::method(widget(), "setText", ["QString;", "I"]);
    assert_eq!(rebuilt, member(&store, "setText"));
    assert_eq!(rebuilt.return_type(&store).unwrap(), "QString;");
}

#[test]
fn removed_member_makes_handle_stale() {
    let store = populated();
    let set_text = member(&store, "setText");
    store.remove_member(&set_text);

    for result in resolving_results(&set_text, &store) {
        assert!(result.unwrap_err().is_stale());
    }
    assert!(!set_text.exists(&store).unwrap());

    // Handle-only queries still answer from the handle itself.
    assert_eq!(set_text.element_name(), "setText");
    assert_eq!(set_text.parameter_count(), 2);
    assert_eq!(set_text.raw_parameter_signatures(), ["QString;", "I"]);
}

#[test]
fn removed_type_makes_every_member_stale() {
    let store = populated();
    let members = store.members(&widget());
    store.remove_type(&widget());

    for handle in &members {
        for result in resolving_results(handle, &store) {
            assert!(result.unwrap_err().is_stale());
        }
    }
}

#[test]
fn changed_parameter_shape_makes_old_handle_stale() {
    let store = populated();
    let old = member(&store, "setText");
    store.remove_member(&old);
    let new = store.declare(
        MethodHandle::method(widget(), "setText", ["QString;"]),
        Declaration::method(TypeSignature::VOID),
    );

    assert!(old.return_type(&store).unwrap_err().is_stale());
    assert_eq!(new.return_type(&store).unwrap(), "V");
    // Still "looks like" nothing: arity differs.
    assert!(!old.is_similar(&new));
}

#[test]
fn changed_details_are_seen_without_new_handles() {
    let store = populated();
    let set_text = member(&store, "setText");
    store.replace(
        &set_text,
        Declaration::method(TypeSignature::VOID).with_modifiers(Modifiers::PRIVATE),
    );

    assert_eq!(set_text.return_type(&store).unwrap(), "V");
    assert!(set_text.exception_types(&store).unwrap().is_empty());
    assert_eq!(set_text.parameter_names(&store).unwrap(), vec!["arg1", "arg2"]);
}

#[test]
fn similar_members_across_types() {
    let store = populated();
    let subclass = TypeRef::new("ui/Button");
    let overriding = store.declare(
        MethodHandle::method(subclass, "setText", ["Qjava/lang/String;", "I"]),
        Declaration::method(TypeSignature::source("String")),
    );

    let similar: Vec<_> = store
        .members(&widget())
        .into_iter()
        .filter(|h| h.is_similar(&overriding))
        .collect();
    assert_eq!(similar, vec![member(&store, "setText")]);
}

struct Unreadable;

impl ProgramStore for Unreadable {
    fn lookup_declaration(
        &self,
        enclosing: &TypeRef,
        _name: &str,
        _parameter_types: &[String],
    ) -> Result<Option<Declaration>, StoreError> {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        Err(StoreError::with_source(format!("cannot read {enclosing}"), io))
    }
}

#[test]
fn store_failure_is_propagated_unchanged() {
    let handle = MethodHandle::method(widget(), "setText", ["QString;", "I"]);

    for result in resolving_results(&handle, &Unreadable) {
        let err = result.unwrap_err();
        assert!(!err.is_stale());
        assert_eq!(err.to_string(), "cannot read ui/Widget");
        let ModelError::Store(store_err) = err else {
            panic!("expected store error");
        };
        assert_eq!(store_err.message(), "cannot read ui/Widget");
        assert!(std::error::Error::source(&store_err).is_some());
    }
    assert!(handle.exists(&Unreadable).is_err());

    // Handle-only queries never reach the store.
    assert_eq!(handle.parameter_count(), 2);
}
