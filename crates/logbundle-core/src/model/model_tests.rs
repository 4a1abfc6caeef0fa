#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// Level tests

#[test_case("WARN", Some(Level::Warn))]
#[test_case("INFO", Some(Level::Info))]
#[test_case("ERROR", Some(Level::Error))]
#[test_case("warn", Some(Level::Warn))]
#[test_case("Error", Some(Level::Error))]
#[test_case("DEBUG", None)]
#[test_case("", None)]
#[test_case(" WARN", None)]
fn Level___parse___recognizes_known_levels(input: &str, expected: Option<Level>) {
    assert_eq!(Level::parse(input), expected);
}

#[test_case(Level::Warn, "warn")]
#[test_case(Level::Info, "info")]
#[test_case(Level::Error, "error")]
fn Level___method_name___matches_logger_api(level: Level, expected: &str) {
    assert_eq!(level.method_name(), expected);
}

#[test]
fn Level___display___is_uppercase() {
    assert_eq!(Level::Warn.to_string(), "WARN");
}

// AnnotationSet tests

#[test]
fn AnnotationSet___kinds___follows_resolution_order() {
    let set = AnnotationSet {
        message: Some(MessageAnnotation {
            id: 1,
            value: "a".into(),
        }),
        log_message: None,
        get_logger: Some(GetLoggerAnnotation {}),
    };

    assert_eq!(
        set.kinds(),
        vec![AnnotationKind::Message, AnnotationKind::GetLogger]
    );
}

#[test]
fn AnnotationSet___default___is_empty() {
    let set = AnnotationSet::default();

    assert!(set.is_empty());
    assert!(set.kinds().is_empty());
}

#[test]
fn AnnotationKind___display___uses_annotation_syntax() {
    assert_eq!(AnnotationKind::LogMessage.to_string(), "@LogMessage");
}

// Element deserialization tests

#[test]
fn InterfaceElement___from_json___defaults_optional_fields() {
    let json = r#"{
        "name": "org.example.Plain",
        "method": [{ "name": "run" }]
    }"#;

    let element: InterfaceElement = serde_json::from_str(json).unwrap();

    assert!(element.log_bundle.is_none());
    assert!(element.namespace.is_none());
    assert_eq!(element.methods[0].returns, "void");
    assert!(element.methods[0].parameters.is_empty());
}

#[test]
fn InterfaceElement___from_json___accepts_methods_alias() {
    let json = r#"{
        "name": "org.example.Bundle",
        "log_bundle": { "project_code": "AMQ1" },
        "methods": [{
            "name": "queueNotFound",
            "returns": "java.lang.String",
            "parameters": [{ "type": "java.lang.String", "name": "name" }],
            "message": { "id": 100, "value": "Queue {0} not found" }
        }]
    }"#;

    let element: InterfaceElement = serde_json::from_str(json).unwrap();

    let method = &element.methods[0];
    assert_eq!(method.parameters[0], ParameterDeclaration::new("java.lang.String", "name"));
    assert_eq!(method.message.as_ref().map(|m| m.id), Some(100));
}

#[test]
fn InterfaceElement___from_json___parses_empty_get_logger() {
    let json = r#"{
        "name": "org.example.Bundle",
        "method": [{ "name": "logger", "get_logger": {} }]
    }"#;

    let element: InterfaceElement = serde_json::from_str(json).unwrap();

    assert!(element.methods[0].get_logger.is_some());
}

#[test]
fn MethodElement___builder___preserves_parameter_order() {
    let method = MethodElement::new("m")
        .parameter("int", "first")
        .parameter("long", "second")
        .parameter("java.lang.String", "third");

    let names: Vec<&str> = method.parameters.iter().map(|p| p.name.as_str()).collect();

    assert_eq!(names, vec!["first", "second", "third"]);
}
