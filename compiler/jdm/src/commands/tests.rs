#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use super::*;
use jdm_signature::SignatureErrorKind;
use pretty_assertions::assert_eq;

#[test]
fn describe_generic_array() {
    let report = describe_type("[Ljava/util/List<QString;>;").unwrap();
    assert_eq!(
        report,
        "encoding:  [Ljava/util/List<QString;>;\n\
         simple:    List<String>[]\n\
         qualified: java.util.List<String>[]\n\
         structure:\n\
         \x20 array of 1\n\
         \x20   reference java/util/List (binary)\n\
         \x20     reference String (source)\n"
    );
}

#[test]
fn describe_deeply_nested_type_on_a_small_stack() {
    let depth = 5_000;
    let text = format!("{}I{}", "QBox<".repeat(depth), ">;".repeat(depth));

    let report = std::thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(move || describe_type(&text))
        .unwrap()
        .join()
        .unwrap()
        .unwrap();

    let structure = report.split_once("structure:\n").unwrap().1;
    assert_eq!(structure.lines().count(), depth + 1);
    assert!(structure.ends_with(&format!("{}primitive int\n", "  ".repeat(depth + 1))));
}

#[test]
fn describe_type_reports_malformed_input() {
    let err = describe_type("[").unwrap_err();
    assert_eq!(err.kind, SignatureErrorKind::UnexpectedEnd);
}

#[test]
fn describe_method_lists_parameters() {
    let report = describe_method("(QString;I)V").unwrap();
    assert_eq!(
        report,
        "encoding:   (QString;I)V\n\
         parameters: 2\n\
         \x20 0: QString;  String\n\
         \x20 1: I  int\n\
         returns:    V  void\n\
         display:    void method(String, int)\n"
    );
}

#[test]
fn describe_method_rejects_trailing_content() {
    let err = describe_method("()VV").unwrap_err();
    assert_eq!(err.kind, SignatureErrorKind::TrailingContent);
}

#[test]
fn simple_names_one_per_line() {
    let args = vec!["Qjava/lang/String;".to_owned(), "[[J".to_owned(), "Foo".to_owned()];
    assert_eq!(simple_names(&args), "String\nlong[][]\nFoo\n");
}

#[test]
fn similar_ignores_qualification() {
    assert_eq!(
        similar("foo", "(QString;)V", "(Ljava/lang/String;)I").unwrap(),
        "similar\n"
    );
    assert_eq!(similar("foo", "(I)V", "(J)V").unwrap(), "not similar\n");
}

#[test]
fn similar_rejects_malformed_method() {
    assert!(similar("foo", "(I", "()V").is_err());
}
