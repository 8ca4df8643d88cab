//! Unit tests for the resolution engine

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use wirebox_domain::{
    Callable, Class, DependencyDefinition, DependencyResolver, Error, Lifetime, Parameter,
    ResolverExt, Value, value,
};
use wirebox_infrastructure::TypeCatalog;
use wirebox_infrastructure::di::Container;

use crate::fixtures::{A, B, C, Remaining, class_definition, container_with, value_definition};

#[test]
fn test_has_identifier() {
    let empty = container_with(Vec::new());
    let container = container_with(vec![value_definition()]);

    assert!(!empty.has("value"));
    assert!(container.has("value"));
}

#[test]
fn test_has_alias() {
    let mut definition = value_definition();
    definition.add_alias("alias");
    let container = container_with(vec![definition]);

    assert!(container.has("alias"));
    assert!(!container.has("other"));
}

#[test]
fn test_get_missing_identifier() {
    let mut container = container_with(Vec::new());

    let result = container.get("missing");
    assert!(matches!(result, Err(Error::NotFound { .. })));
}

#[test]
fn test_get_produces_value() {
    let mut container = container_with(vec![value_definition()]);

    let produced = container.get_as::<String>("value").unwrap();
    assert_eq!(produced.as_str(), "value");
}

#[test]
fn test_get_by_alias_produces_value() {
    let mut definition = value_definition();
    definition.add_alias("alias");
    let mut container = container_with(vec![definition]);

    let produced = container.get_as::<String>("alias").unwrap();
    assert_eq!(produced.as_str(), "value");
}

#[test]
fn test_get_as_wrong_type() {
    let mut container = container_with(vec![value_definition()]);

    let result = container.get_as::<u32>("value");
    assert!(matches!(result, Err(Error::TypeMismatch { .. })));
}

#[test]
fn test_factory_error_propagates_unchanged() {
    let failing = DependencyDefinition::from_fn("failing", |_, _| Err(Error::generic("boom")));
    let mut container = container_with(vec![failing]);

    let error = container.get("failing").unwrap_err();
    assert!(matches!(error, Error::Generic(_)));
    assert!(error.to_string().contains("boom"));
    assert_eq!(container.resolution_depth(), 0);
}

#[test]
fn test_nested_resolution_failure_passes_through_factory() {
    let outer = DependencyDefinition::from_fn("outer", |resolver, _| resolver.get("missing"));
    let mut container = container_with(vec![outer]);

    let error = container.get("outer").unwrap_err();
    assert!(error.is_resolution_failure());
    assert!(matches!(error, Error::NotFound { .. }));
}

#[test]
fn test_reflection_failure_is_not_a_resolution_failure() {
    let mut container = container_with(Vec::new());

    let error = container.construct("AbstractClass", Vec::new()).unwrap_err();
    assert!(!error.is_resolution_failure());
}

#[test]
fn test_self_referencing_definition_is_circular() {
    let circular = DependencyDefinition::from_fn("circular", |resolver, _| {
        resolver.get("circular")
    });
    let mut container = container_with(vec![circular]);

    let error = container.get("circular").unwrap_err();
    match error {
        Error::CircularReference { key, path } => {
            assert_eq!(key, "circular");
            assert_eq!(path, "circular -> circular");
        }
        other => panic!("expected circular reference, got {other:?}"),
    }
}

#[test]
fn test_indirect_circular_reference() {
    let first = DependencyDefinition::from_fn("first", |resolver, _| resolver.get("second"));
    let second = DependencyDefinition::from_fn("second", |resolver, _| resolver.get("first"));
    let mut container = container_with(vec![first, second]);

    let result = container.get("first");
    assert!(matches!(result, Err(Error::CircularReference { .. })));
    assert_eq!(container.resolution_depth(), 0);
}

#[test]
fn test_self_dependent_class_is_circular() {
    let mut container = container_with(Vec::new());

    let result = container.construct("CircularDependency", Vec::new());
    match result {
        Err(Error::CircularReference { key, .. }) => assert_eq!(key, "CircularDependency"),
        other => panic!("expected circular reference, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_cycle_through_identifier_and_construction() {
    let classes = crate::fixtures::catalog().with(Class::concrete(
        "Loop",
        Callable::new(
            vec![Parameter::new("service").inject("service")],
            |args| Ok(args.value(0).cloned().unwrap_or_else(|| value(()))),
        ),
    ));
    let service = DependencyDefinition::from_fn("service", |resolver, parameters| {
        resolver.construct("Loop", parameters)
    });
    let mut container = Container::with_catalog(vec![service], Arc::new(classes));

    let result = container.get("service");
    assert!(matches!(result, Err(Error::CircularReference { .. })));
}

#[test]
fn test_failed_resolution_leaves_stack_empty() {
    let a = class_definition("A");
    let b = class_definition("B").with_lifetime(Lifetime::Singleton);
    let mut container = container_with(vec![a, b, value_definition()]);

    let first = container.get("B");
    assert!(matches!(first, Err(Error::LifetimeViolation { .. })));
    assert_eq!(container.resolution_depth(), 0);

    let second = container.get("B");
    assert!(matches!(second, Err(Error::LifetimeViolation { .. })));

    assert!(container.get("value").is_ok());
}

#[test]
fn test_missing_class() {
    let mut container = container_with(Vec::new());

    let error = container.construct("NonExistingClass", Vec::new()).unwrap_err();
    assert!(matches!(error, Error::Construction { source: Some(_), .. }));
    assert!(std::error::Error::source(&error)
        .map(ToString::to_string)
        .is_some_and(|message| message.contains("does not exist")));
}

#[test]
fn test_abstract_class_is_not_instantiable() {
    let mut container = container_with(Vec::new());

    let error = container.construct("AbstractClass", Vec::new()).unwrap_err();
    assert!(matches!(error, Error::Construction { .. }));
    assert!(std::error::Error::source(&error)
        .map(ToString::to_string)
        .is_some_and(|message| message.contains("not instantiable")));
    assert_eq!(container.resolution_depth(), 0);
}

#[test]
fn test_construct_class() {
    let mut container = container_with(Vec::new());

    assert!(container.construct_as::<A>("A", Vec::new()).is_ok());
}

#[test]
fn test_construct_autowires_dependencies() {
    let mut container = container_with(Vec::new());

    let c = container.construct_as::<C>("C", Vec::new()).unwrap();
    let other = container.construct_as::<C>("C", Vec::new()).unwrap();
    assert!(!Arc::ptr_eq(&c.b, &other.b));
}

#[test]
fn test_construct_uses_given_parameters() {
    let a = Arc::new(A);
    let b: Arc<B> = Arc::new(B { a: Arc::clone(&a) });
    let mut container = container_with(Vec::new());

    let given: Value = b.clone();
    let c = container.construct_as::<C>("C", vec![given]).unwrap();
    assert!(Arc::ptr_eq(&c.b, &b));
    assert!(Arc::ptr_eq(&c.b.a, &a));
}

#[test]
fn test_construct_resolves_registered_types() {
    let a = value(A);
    let b = value(B {
        a: wirebox_domain::downcast::<A>(a.clone(), "A").unwrap(),
    });
    let (a_value, b_value) = (a.clone(), b.clone());
    let mut container = container_with(vec![
        DependencyDefinition::from_fn("A", move |_, _| Ok(a_value.clone())),
        DependencyDefinition::from_fn("B", move |_, _| Ok(b_value.clone())),
    ]);

    let c = container.construct_as::<C>("C", Vec::new()).unwrap();
    let expected_b = wirebox_domain::downcast::<B>(b, "B").unwrap();
    assert!(Arc::ptr_eq(&c.b, &expected_b));
}

#[test]
fn test_construct_resolves_remaining_parameters() {
    let mut container = container_with(Vec::new());

    let remaining = container
        .construct_as::<Remaining>("Remaining", vec![value("first".to_string())])
        .unwrap();
    assert_eq!(remaining.first.as_str(), "first");
    assert_eq!(Arc::strong_count(&remaining.a), 1);
}

#[test]
fn test_construct_builtin_parameter_without_value() {
    let mut container = container_with(Vec::new());

    let result = container.construct("Remaining", Vec::new());
    assert!(matches!(result, Err(Error::NotFound { .. })));
    assert_eq!(container.resolution_depth(), 0);
}

#[test]
fn test_invoke_calls_function() {
    let called = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&called);
    let mut container = container_with(Vec::new());

    let callable = Callable::nullary(move || {
        flag.store(true, Ordering::SeqCst);
        Ok(value(()))
    });
    container.invoke(&callable, Vec::new()).unwrap();

    assert!(called.load(Ordering::SeqCst));
}

#[test]
fn test_invoke_returns_result() {
    let mut container = container_with(Vec::new());

    let callable = Callable::nullary(|| Ok(value("value".to_string())));
    let result = container.invoke_as::<String>(&callable, Vec::new()).unwrap();
    assert_eq!(result.as_str(), "value");
}

#[test]
fn test_invoke_resolves_parameters() {
    let mut container = container_with(Vec::new());

    let callable = Callable::new(vec![Parameter::typed_as("c", "C")], |args| {
        Ok(args.value(0).cloned().unwrap_or_else(|| value(())))
    });
    assert!(container.invoke_as::<C>(&callable, Vec::new()).is_ok());
}

#[test]
fn test_invoke_unresolvable_builtin_parameter() {
    let mut container = container_with(Vec::new());

    let callable = Callable::new(vec![Parameter::typed_as("value", "String")], |_| {
        Ok(value(()))
    });
    let result = container.invoke(&callable, Vec::new());
    assert!(matches!(result, Err(Error::NotFound { .. })));
}

#[test]
fn test_invoke_uses_default_value() {
    let mut container = container_with(Vec::new());

    let callable = Callable::new(
        vec![Parameter::typed_as("value", "String").with_default(value("default".to_string()))],
        |args| Ok(args.value(0).cloned().unwrap_or_else(|| value(()))),
    );
    let result = container.invoke_as::<String>(&callable, Vec::new()).unwrap();
    assert_eq!(result.as_str(), "default");
}

#[test]
fn test_invoke_injects_by_identifier() {
    let mut container = container_with(vec![value_definition()]);

    let callable = Callable::new(
        vec![
            Parameter::typed_as("value", "String")
                .inject("value")
                .with_default(value("default".to_string())),
        ],
        |args| Ok(args.value(0).cloned().unwrap_or_else(|| value(()))),
    );
    let result = container.invoke_as::<String>(&callable, Vec::new()).unwrap();
    assert_eq!(result.as_str(), "value");
}

#[test]
fn test_invoke_injection_of_missing_identifier() {
    let mut container = container_with(Vec::new());

    let callable = Callable::new(
        vec![Parameter::typed_as("value", "String").inject("missing")],
        |args| Ok(args.value(0).cloned().unwrap_or_else(|| value(()))),
    );
    let result = container.invoke(&callable, Vec::new());
    assert!(matches!(result, Err(Error::NotFound { .. })));
}

#[test]
fn test_invoke_without_autowire() {
    let mut container = container_with(Vec::new()).with_autowire(false);

    let callable = Callable::new(vec![Parameter::typed_as("a", "A")], |_| Ok(value(())));
    let result = container.invoke(&callable, Vec::new());
    assert!(matches!(result, Err(Error::NotFound { .. })));
    assert!(!container.autowire());
}

#[test]
fn test_explicit_catalog_is_used() {
    let container = Container::with_catalog(Vec::new(), Arc::new(TypeCatalog::new()));

    assert!(container.classes().is_empty());
    assert_eq!(container.identifiers().count(), 0);
}
