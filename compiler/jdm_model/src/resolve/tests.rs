#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use super::*;
use crate::handle::TypeRef;
use crate::store::StoreError;
use jdm_signature::{PrimitiveKind, TypeSignature};
use pretty_assertions::assert_eq;

/// Store holding at most one declaration, matched by name only.
struct Single(Option<Declaration>);

impl ProgramStore for Single {
    fn lookup_declaration(
        &self,
        _enclosing: &TypeRef,
        _name: &str,
        _parameter_types: &[String],
    ) -> Result<Option<Declaration>, StoreError> {
        Ok(self.0.clone())
    }
}

struct Broken;

impl ProgramStore for Broken {
    fn lookup_declaration(
        &self,
        _enclosing: &TypeRef,
        _name: &str,
        _parameter_types: &[String],
    ) -> Result<Option<Declaration>, StoreError> {
        Err(StoreError::new("index is corrupt"))
    }
}

fn handle(name: &str, params: &[&str]) -> MethodHandle {
    MethodHandle::method(TypeRef::new("p/Foo"), name, params.iter().copied())
}

fn main_declaration() -> Declaration {
    Declaration::method(TypeSignature::VOID).with_modifiers(Modifiers::PUBLIC | Modifiers::STATIC)
}

// Parameter names

#[test]
fn declared_parameter_names() {
    let store = Single(Some(
        Declaration::method(TypeSignature::VOID).with_parameter_names(["text", "length"]),
    ));
    let names = handle("foo", &["QString;", "I"])
        .parameter_names(&store)
        .unwrap();
    assert_eq!(names, vec!["text", "length"]);
}

#[test]
fn synthesized_parameter_names() {
    let store = Single(Some(Declaration::method(TypeSignature::VOID)));
    let names = handle("foo", &["I", "J", "QString;"])
        .parameter_names(&store)
        .unwrap();
    assert_eq!(names, vec!["arg1", "arg2", "arg3"]);
}

#[test]
fn partially_declared_names_are_filled_by_position() {
    let store = Single(Some(
        Declaration::method(TypeSignature::VOID).with_parameter_names(["first", ""]),
    ));
    let names = handle("foo", &["I", "I", "I"])
        .parameter_names(&store)
        .unwrap();
    assert_eq!(names, vec!["first", "arg2", "arg3"]);
}

#[test]
fn no_parameters_no_names() {
    let store = Single(Some(Declaration::method(TypeSignature::VOID)));
    assert!(handle("foo", &[]).parameter_names(&store).unwrap().is_empty());
}

// Types

#[test]
fn exception_types_in_declaration_order() {
    let store = Single(Some(Declaration::method(TypeSignature::VOID).with_thrown_types([
        TypeSignature::source("IOException"),
        TypeSignature::binary("java/lang/InterruptedException"),
    ])));
    assert_eq!(
        handle("foo", &[]).exception_types(&store).unwrap(),
        vec!["QIOException;", "Ljava/lang/InterruptedException;"]
    );
}

#[test]
fn no_exceptions_is_empty() {
    let store = Single(Some(Declaration::method(TypeSignature::VOID)));
    assert!(handle("foo", &[]).exception_types(&store).unwrap().is_empty());
}

#[test]
fn return_type_of_method() {
    let store = Single(Some(Declaration::method(TypeSignature::source("String"))));
    assert_eq!(handle("getName", &[]).return_type(&store).unwrap(), "QString;");
}

#[test]
fn constructor_returns_void() {
    let store = Single(Some(Declaration::constructor()));
    let ctor = MethodHandle::constructor(TypeRef::new("p/Foo"), ["I"]);
    assert_eq!(ctor.return_type(&store).unwrap(), "V");
    assert!(ctor.is_constructor(&store).unwrap());
}

#[test]
fn full_signature_keeps_stored_parameters() {
    let store = Single(Some(Declaration::method(TypeSignature::source("String"))));
    assert_eq!(
        handle("foo", &["QString;", "I"])
            .full_signature(&store)
            .unwrap(),
        "(QString;I)QString;"
    );
}

#[test]
fn method_signature_decodes_parameters() {
    let store = Single(Some(Declaration::method(TypeSignature::VOID)));
    let sig = handle("foo", &["[I"]).method_signature(&store).unwrap().unwrap();
    assert_eq!(sig.parameters, vec![TypeSignature::array(PrimitiveKind::Int.into(), 1)]);
    assert!(sig.return_type.is_void());

    let malformed = handle("foo", &["Q"]).method_signature(&store).unwrap();
    assert_eq!(malformed, None);
}

#[test]
fn method_is_not_constructor() {
    let store = Single(Some(Declaration::method(TypeSignature::VOID)));
    assert!(!handle("foo", &[]).is_constructor(&store).unwrap());
}

#[test]
fn static_initializer_is_static() {
    let store = Single(Some(Declaration::static_initializer()));
    let clinit = MethodHandle::static_initializer(TypeRef::new("p/Foo"));
    assert_eq!(clinit.modifiers(&store).unwrap(), Modifiers::STATIC);
    assert_eq!(clinit.return_type(&store).unwrap(), "V");
}

// Main method: each condition on its own

#[test]
fn main_method() {
    let store = Single(Some(main_declaration()));
    assert!(handle("main", &["[QString;"]).is_main_method(&store).unwrap());
    assert!(handle("main", &["[Ljava/lang/String;"])
        .is_main_method(&store)
        .unwrap());
}

#[test]
fn main_method_needs_name() {
    let store = Single(Some(main_declaration()));
    assert!(!handle("run", &["[QString;"]).is_main_method(&store).unwrap());
}

#[test]
fn main_method_needs_void_return() {
    let store = Single(Some(
        Declaration::method(PrimitiveKind::Int.into())
            .with_modifiers(Modifiers::PUBLIC | Modifiers::STATIC),
    ));
    assert!(!handle("main", &["[QString;"]).is_main_method(&store).unwrap());
}

#[test]
fn main_method_needs_static() {
    let store = Single(Some(
        Declaration::method(TypeSignature::VOID).with_modifiers(Modifiers::PUBLIC),
    ));
    assert!(!handle("main", &["[QString;"]).is_main_method(&store).unwrap());
}

#[test]
fn main_method_needs_public() {
    let store = Single(Some(
        Declaration::method(TypeSignature::VOID).with_modifiers(Modifiers::STATIC),
    ));
    assert!(!handle("main", &["[QString;"]).is_main_method(&store).unwrap());
}

#[test]
fn main_method_needs_exactly_one_parameter() {
    let store = Single(Some(main_declaration()));
    assert!(!handle("main", &[]).is_main_method(&store).unwrap());
    assert!(!handle("main", &["[QString;", "I"])
        .is_main_method(&store)
        .unwrap());
}

#[test]
fn main_method_needs_string_array() {
    let store = Single(Some(main_declaration()));
    assert!(!handle("main", &["QString;"]).is_main_method(&store).unwrap());
    assert!(!handle("main", &["[[QString;"]).is_main_method(&store).unwrap());
    assert!(!handle("main", &["[QObject;"]).is_main_method(&store).unwrap());
    assert!(!handle("main", &["[Q"]).is_main_method(&store).unwrap());
}

#[test]
fn extra_modifiers_do_not_matter() {
    let store = Single(Some(
        main_declaration().with_modifiers(Modifiers::PUBLIC | Modifiers::STATIC | Modifiers::FINAL),
    ));
    assert!(handle("main", &["[QString;"]).is_main_method(&store).unwrap());
}

// Failures

#[test]
fn missing_declaration_is_stale() {
    let store = Single(None);
    let h = handle("foo", &["I"]);
    let err = h.return_type(&store).unwrap_err();
    assert!(err.is_stale());
    assert_eq!(err.to_string(), "`p/Foo#foo(I)` does not exist");
    assert!(!h.exists(&store).unwrap());
}

#[test]
fn store_errors_pass_through() {
    let h = handle("foo", &[]);
    let err = h.return_type(&Broken).unwrap_err();
    assert!(matches!(err, ModelError::Store(_)));
    assert_eq!(err.to_string(), "index is corrupt");
    assert!(h.exists(&Broken).is_err());
}

#[test]
fn works_through_trait_objects() {
    let store: &dyn ProgramStore = &Single(Some(Declaration::constructor()));
    assert!(handle("Foo", &[]).is_constructor(store).unwrap());
}
