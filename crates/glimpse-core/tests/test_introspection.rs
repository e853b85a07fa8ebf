mod test_common;
use test_common::api;

use glimpse_core::{Api, ResolveError, NO_DOCS};

// ============================================================================
// docs
// ============================================================================

#[test]
fn test_docs_unresolvable_name_is_an_error() {
    let api = Api::new();
    assert_eq!(
        api.docs("itertools").unwrap_err(),
        ResolveError::UnknownRoot("itertools".to_string())
    );
}

#[test]
fn test_docs_module_first_line() {
    let api = api();
    assert_eq!(
        api.docs("itertools").unwrap(),
        "Functional tools for creating and using iterators."
    );
}

#[test]
fn test_docs_function_renders_signature() {
    let api = api();
    assert_eq!(
        api.docs("print").unwrap(),
        "print: (value &optional [end newline]) - Print a value."
    );
}

#[test]
fn test_docs_dotted_name() {
    let api = api();
    assert_eq!(
        api.docs("itertools.tee").unwrap(),
        "tee: (iterable &optional [n 2]) - Return n independent iterators."
    );
}

#[test]
fn test_docs_final_segment_must_resolve() {
    let api = api();
    assert_eq!(
        api.docs("itertools.nope").unwrap_err(),
        ResolveError::AttributeNotFound {
            name: "nope".to_string(),
            segment: 1,
        }
    );
}

#[test]
fn test_docs_sentinel_for_undocumented_object() {
    let api = api();
    assert_eq!(api.docs("my_var").unwrap(), NO_DOCS);
}

#[test]
fn test_docs_opaque_attribute_not_introspectable() {
    let api = api();
    let err = api.docs("opaque_handle.x").unwrap_err();
    assert!(matches!(err, ResolveError::NotIntrospectable { .. }));
    assert_eq!(err.segment(), 1);
}

// ============================================================================
// full_docs
// ============================================================================

#[test]
fn test_full_docs_includes_body() {
    let api = api();
    let full = api.full_docs("itertools").unwrap();
    assert!(full.starts_with("Functional tools for creating and using iterators."));
    assert!(full.contains("Chain, slice, and tee lazily."));
}

#[test]
fn test_full_docs_same_errors_as_docs() {
    let api = api();
    assert!(api.full_docs("no_such_thing").is_err());
}

// ============================================================================
// annotate
// ============================================================================

#[test]
fn test_annotate_kinds() {
    let api = api();
    assert_eq!(api.annotate("print").unwrap(), "<function print>");
    assert_eq!(api.annotate("itertools").unwrap(), "<module itertools>");
    assert_eq!(api.annotate("MyClass").unwrap(), "<class MyClass>");
}

#[test]
fn test_annotate_instance_displayed_unmangled() {
    let api = api();
    assert_eq!(api.annotate("my_var").unwrap(), "<instance my-var>");
}

#[test]
fn test_annotate_macro() {
    let api = api();
    assert_eq!(api.annotate("defmacro").unwrap(), "<macro defmacro>");
    assert_eq!(api.annotate("when-let").unwrap(), "<macro when-let>");
}

#[test]
fn test_annotate_macro_attribute_uses_object_kind() {
    let api = api();
    // Only a bare macro root annotates as a macro.
    assert_eq!(
        api.annotate("defmacro.__call__").unwrap(),
        "<function defmacro.__call__>"
    );
}

#[test]
fn test_annotate_unresolvable_name_is_an_error() {
    let api = api();
    assert_eq!(
        api.annotate("nonexistent_xyz").unwrap_err(),
        ResolveError::UnknownRoot("nonexistent-xyz".to_string())
    );
}

#[test]
fn test_annotate_dotted_name() {
    let api = api();
    assert_eq!(
        api.annotate("itertools.chain").unwrap(),
        "<function itertools.chain>"
    );
}
