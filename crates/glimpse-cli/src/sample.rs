//! Demo namespace for the interactive shell.
//!
//! A small stand-in for a live host runtime: a couple of modules, some
//! builtins, an instance, and a macro table. Real embedders hand their
//! own tables to `set_namespace`.

use glimpse_core::ObjectRef;
use glimpse_object::{HostObject, Opaque, Signature};

pub fn namespace() -> (Vec<(String, ObjectRef)>, Vec<(String, ObjectRef)>) {
    (bindings(), macros())
}

fn bindings() -> Vec<(String, ObjectRef)> {
    vec![
        (
            "print".to_string(),
            builtin(
                "print",
                Signature::new().arg("value").optional("end", "newline"),
                "Print a value to standard output.",
            ),
        ),
        (
            "len".to_string(),
            builtin(
                "len",
                Signature::new().arg("collection"),
                "Return the number of items in a collection.",
            ),
        ),
        (
            "map".to_string(),
            builtin(
                "map",
                Signature::new().arg("f").rest("colls"),
                "Apply f to each item, lazily.",
            ),
        ),
        ("itertools".to_string(), itertools()),
        ("string-utils".to_string(), string_utils()),
        (
            "Point".to_string(),
            HostObject::class("Point")
                .with_signature(Signature::new().arg("x").arg("y"))
                .with_doc("A 2D point.")
                .with_attr(
                    "distance_to",
                    builtin(
                        "distance_to",
                        Signature::new().arg("other"),
                        "Euclidean distance to another point.",
                    ),
                )
                .into_ref(),
        ),
        (
            "answer".to_string(),
            HostObject::instance("answer")
                .with_doc("The answer to everything. Currently 42.")
                .into_ref(),
        ),
        // A foreign handle the reflector cannot see into.
        ("ffi-handle".to_string(), Opaque.into_ref()),
    ]
}

fn macros() -> Vec<(String, ObjectRef)> {
    vec![
        (
            "defmacro".to_string(),
            builtin(
                "defmacro",
                Signature::new().arg("name").arg("params").rest("body"),
                "Define a new macro.",
            ),
        ),
        (
            "when-let".to_string(),
            builtin(
                "when_let",
                Signature::new().arg("binding").rest("body"),
                "Bind and run body only when the value is truthy.",
            ),
        ),
        (
            "->".to_string(),
            builtin(
                "->",
                Signature::new().arg("x").rest("forms"),
                "Thread x through forms as the first argument.",
            ),
        ),
    ]
}

fn itertools() -> ObjectRef {
    HostObject::module("itertools")
        .with_doc("Functional tools for creating and using iterators.\n\nEverything here is lazy: nothing is computed until consumed.")
        .with_attr(
            "chain",
            builtin(
                "chain",
                Signature::new().rest("iterables"),
                "Chain iterables end to end.",
            ),
        )
        .with_attr(
            "count",
            builtin(
                "count",
                Signature::new().optional("start", "0").optional("step", "1"),
                "Count upward forever.",
            ),
        )
        .with_attr(
            "tee",
            builtin(
                "tee",
                Signature::new().arg("iterable").optional("n", "2"),
                "Return n independent iterators from one.",
            ),
        )
        .with_attr(
            "take_while",
            builtin(
                "take_while",
                Signature::new().arg("pred").arg("iterable"),
                "Yield items while pred holds.",
            ),
        )
        .into_ref()
}

fn string_utils() -> ObjectRef {
    HostObject::module("string_utils")
        .with_doc("Helpers for working with strings.")
        .with_attr(
            "join",
            builtin(
                "join",
                Signature::new().arg("separator").arg("items"),
                "Join items with a separator.",
            ),
        )
        .with_attr(
            "split_lines",
            builtin(
                "split_lines",
                Signature::new().arg("text"),
                "Split text at line boundaries.",
            ),
        )
        .into_ref()
}

fn builtin(name: &str, signature: Signature, doc: &str) -> ObjectRef {
    HostObject::function(name)
        .with_signature(signature)
        .with_doc(doc)
        .with_attr("__call__", HostObject::function("__call__").into_ref())
        .with_attr("__str__", HostObject::function("__str__").into_ref())
        .into_ref()
}
