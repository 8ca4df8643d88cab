//! Shared fixture types and their class descriptors

use std::sync::Arc;

use wirebox_domain::{Callable, Class, DependencyDefinition, Parameter, value};
use wirebox_infrastructure::TypeCatalog;
use wirebox_infrastructure::di::Container;

pub struct A;

pub struct B {
    pub a: Arc<A>,
}

pub struct C {
    pub b: Arc<B>,
}

pub struct Remaining {
    pub first: Arc<String>,
    pub a: Arc<A>,
}

#[allow(dead_code)]
pub struct CircularDependency {
    pub circular_dependency: Arc<CircularDependency>,
}

/// Class descriptors for every fixture type
pub fn catalog() -> TypeCatalog {
    TypeCatalog::new()
        .with(Class::concrete("A", Callable::nullary(|| Ok(value(A)))))
        .with(Class::concrete(
            "B",
            Callable::new(vec![Parameter::typed_as("a", "A")], |args| {
                Ok(value(B { a: args.get(0)? }))
            }),
        ))
        .with(Class::concrete(
            "C",
            Callable::new(vec![Parameter::typed_as("b", "B")], |args| {
                Ok(value(C { b: args.get(0)? }))
            }),
        ))
        .with(Class::concrete(
            "Remaining",
            Callable::new(
                vec![
                    Parameter::typed_as("first", "String"),
                    Parameter::typed_as("a", "A"),
                ],
                |args| {
                    Ok(value(Remaining {
                        first: args.get(0)?,
                        a: args.get(1)?,
                    }))
                },
            ),
        ))
        .with(Class::concrete(
            "CircularDependency",
            Callable::new(
                vec![Parameter::typed_as("circular_dependency", "CircularDependency")],
                |args| {
                    Ok(value(CircularDependency {
                        circular_dependency: args.get(0)?,
                    }))
                },
            ),
        ))
        .with(Class::abstract_class("AbstractClass"))
}

/// Container over `definitions` and the fixture catalog
pub fn container_with(definitions: Vec<DependencyDefinition>) -> Container {
    Container::with_catalog(definitions, Arc::new(catalog()))
}

/// Definition producing the string "value"
pub fn value_definition() -> DependencyDefinition {
    DependencyDefinition::from_fn("value", |_, _| Ok(value("value".to_string())))
}

/// Definition whose factory constructs `class`
pub fn class_definition(class: &'static str) -> DependencyDefinition {
    DependencyDefinition::from_fn(class, move |resolver, parameters| {
        resolver.construct(class, parameters)
    })
}
