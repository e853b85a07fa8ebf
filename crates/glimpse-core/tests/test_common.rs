//! Shared fixture namespace for the engine integration tests.

use glimpse_core::{Api, ObjectRef};
use glimpse_object::{HostObject, Opaque, Signature};

fn callable(name: &str) -> ObjectRef {
    HostObject::function(name)
        .with_attr("__call__", HostObject::function("__call__").into_ref())
        .with_attr("__class__", HostObject::class("builtin_function").into_ref())
        .with_attr("__str__", HostObject::function("__str__").into_ref())
        .into_ref()
}

pub fn bindings() -> Vec<(String, ObjectRef)> {
    let print = HostObject::function("print")
        .with_signature(Signature::new().arg("value").optional("end", "newline"))
        .with_doc("Print a value.")
        .with_attr("__call__", HostObject::function("__call__").into_ref())
        .with_attr("__class__", HostObject::class("builtin_function").into_ref())
        .with_attr("__str__", HostObject::function("__str__").into_ref())
        .into_ref();

    let itertools = HostObject::module("itertools")
        .with_doc("Functional tools for creating and using iterators.\n\nChain, slice, and tee lazily.")
        .with_attr("chain", callable("chain"))
        .with_attr("count", callable("count"))
        .with_attr(
            "tee",
            HostObject::function("tee")
                .with_signature(Signature::new().arg("iterable").optional("n", "2"))
                .with_doc("Return n independent iterators.")
                .into_ref(),
        )
        .with_attr("take_while", callable("take_while"))
        .into_ref();

    vec![
        ("print".to_string(), print),
        ("len".to_string(), callable("len")),
        ("itertools".to_string(), itertools),
        ("my_var".to_string(), HostObject::instance("my_var").into_ref()),
        ("MyClass".to_string(), HostObject::class("MyClass").into_ref()),
        ("opaque_handle".to_string(), Opaque.into_ref()),
    ]
}

pub fn macros() -> Vec<(String, ObjectRef)> {
    vec![
        ("defmacro".to_string(), callable("defmacro")),
        ("when-let".to_string(), callable("when_let")),
    ]
}

pub fn api() -> Api {
    let api = Api::new();
    api.set_namespace(bindings(), macros());
    api
}
