//! Unit tests for parameter, callable and class descriptors

use wirebox_domain::{Arguments, Callable, Class, ClassKind, DeclaredType, Parameter, value};

#[test]
fn test_callable_assigns_positions_in_order() {
    let callable = Callable::new(
        vec![
            Parameter::typed_as("first", "String"),
            Parameter::typed_as("mailer", "app::Mailer"),
        ],
        |_| Ok(value(())),
    );

    let positions: Vec<usize> = callable.parameters().iter().map(Parameter::position).collect();
    assert_eq!(positions, vec![0, 1]);
    assert_eq!(
        callable.parameters()[1].declared_type(),
        Some(&DeclaredType::Named("app::Mailer".to_string()))
    );
}

#[test]
fn test_parameter_metadata() {
    let parameter = Parameter::typed_as("value", "String")
        .inject("value")
        .with_default(value("default".to_string()));

    assert!(parameter.is_optional());
    assert_eq!(parameter.injected_identifier(), Some("value"));
    assert!(parameter.declared_type().is_some_and(DeclaredType::is_builtin));
}

#[test]
fn test_nullary_callable() {
    let callable = Callable::nullary(|| Ok(value(42_i32)));

    assert!(callable.parameters().is_empty());
    let result = callable.call(Arguments::default()).unwrap();
    assert_eq!(*result.downcast::<i32>().unwrap(), 42);
}

#[test]
fn test_class_instantiability() {
    let concrete = Class::concrete("A", Callable::nullary(|| Ok(value(()))));
    let abstract_class = Class::abstract_class("AbstractClass");
    let interface = Class::interface("Service");

    assert!(concrete.is_instantiable());
    assert!(!abstract_class.is_instantiable());
    assert!(!interface.is_instantiable());
    assert_eq!(interface.kind(), ClassKind::Interface);
    assert!(abstract_class.constructor().is_none());
}
