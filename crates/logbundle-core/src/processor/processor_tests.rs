#![allow(non_snake_case)]

use super::*;
use crate::filer::MemoryFiler;
use crate::model::MethodElement;

fn processor() -> LogProcessor {
    LogProcessor::new(GeneratorConfig::default()).unwrap()
}

fn queue_bundle() -> InterfaceElement {
    InterfaceElement::bundle("org.example.QueueBundle", "AMQ1")
        .method(
            MethodElement::new("queueNotFound")
                .returns("java.lang.String")
                .parameter("java.lang.String", "name")
                .message(100, "Queue {0} not found"),
        )
        .method(
            MethodElement::new("queueCreated")
                .parameter("java.lang.String", "name")
                .log_message(101, "Queue {} created", "INFO"),
        )
        .method(MethodElement::new("logger").returns("org.slf4j.Logger").get_logger())
}

#[test]
fn LogProcessor___new___rejects_invalid_config() {
    let result = LogProcessor::new(GeneratorConfig::default().with_impl_suffix(""));

    assert!(matches!(result, Err(GeneratorError::Config(_))));
}

#[test]
fn LogProcessor___process___writes_one_unit_per_bundle() {
    let mut filer = MemoryFiler::new();
    let interfaces = vec![
        queue_bundle(),
        InterfaceElement::new("org.example.NotABundle"),
        InterfaceElement::bundle("org.example.Other", "AMQ2")
            .method(MethodElement::new("boom").returns("String").message(200, "boom")),
    ];

    let report = processor().process(&interfaces, &mut filer).unwrap();

    assert_eq!(filer.len(), 2);
    assert!(filer.get("org.example.QueueBundle_impl").is_some());
    assert!(filer.get("org.example.Other_impl").is_some());
    assert_eq!(
        report.units,
        vec![
            GeneratedUnit {
                qualified_name: "org.example.QueueBundle_impl".into(),
                method_count: 3,
            },
            GeneratedUnit {
                qualified_name: "org.example.Other_impl".into(),
                method_count: 1,
            },
        ]
    );
    assert_eq!(report.total_methods(), 4);
    assert_eq!(report.message_ids, 3);
}

#[test]
fn LogProcessor___process___formats_project_code_and_id() {
    let mut filer = MemoryFiler::new();

    processor().process(&[queue_bundle()], &mut filer).unwrap();

    let code = filer.get("org.example.QueueBundle_impl").unwrap();
    assert!(code.contains(
        "FormattingTuple tuple = MessageFormatter.format(\"AMQ1100 Queue {0} not found\", name);"
    ));
    assert!(code.contains("return returnString;"));
    assert!(code.contains("public Logger logger() { return logger; }"));
}

#[test]
fn LogProcessor___duplicate_log_message_ids___fail_round_without_output() {
    let mut filer = MemoryFiler::new();
    let interfaces = vec![
        InterfaceElement::bundle("org.example.A", "AMQ")
            .method(MethodElement::new("first").log_message(5, "first {}", "WARN"))
            .method(MethodElement::new("second").log_message(5, "second {}", "ERROR")),
    ];

    let err = processor().process(&interfaces, &mut filer).unwrap_err();

    assert!(matches!(err, GeneratorError::DuplicateMessageId { id: 5, .. }));
    assert!(err.to_string().contains("message 5"));
    assert!(filer.is_empty());
}

#[test]
fn LogProcessor___duplicate_id_in_later_bundle___writes_nothing() {
    let mut filer = MemoryFiler::new();
    let interfaces = vec![
        InterfaceElement::bundle("org.example.A", "AMQ")
            .method(MethodElement::new("a").returns("String").message(1, "same")),
        InterfaceElement::bundle("org.example.B", "AMQ")
            .method(MethodElement::new("b").returns("String").message(1, "same")),
    ];

    let result = processor().process(&interfaces, &mut filer);

    assert!(matches!(result, Err(GeneratorError::DuplicateMessageId { .. })));
    assert!(filer.is_empty());
}

#[test]
fn LogProcessor___triple_annotation___fails_round() {
    let mut filer = MemoryFiler::new();
    let interfaces = vec![queue_bundle().method(
        MethodElement::new("everything")
            .message(900, "a")
            .log_message(901, "b", "INFO")
            .get_logger(),
    )];

    let result = processor().process(&interfaces, &mut filer);

    assert!(matches!(
        result,
        Err(GeneratorError::ConflictingAnnotations { .. })
    ));
    assert!(filer.is_empty());
}

#[test]
fn LogProcessor___lenient_config___resolves_two_way_overlap() {
    let config = GeneratorConfig::default().with_strict_annotations(false);
    let processor = LogProcessor::new(config).unwrap();
    let interfaces = vec![InterfaceElement::bundle("org.example.A", "AMQ").method(
        MethodElement::new("pair")
            .returns("String")
            .message(1, "as message")
            .get_logger(),
    )];

    let sources = processor.render(&interfaces).unwrap();

    assert!(sources[0].contents.contains("String returnString = \"AMQ1 as message\";"));
    assert!(!sources[0].contents.contains("// @GetLogger"));
}

#[test]
fn LogProcessor___unknown_level___fails_round() {
    let mut filer = MemoryFiler::new();
    let interfaces = vec![InterfaceElement::bundle("org.example.A", "AMQ")
        .method(MethodElement::new("noisy").log_message(1, "x", "DEBUG"))];

    let result = processor().process(&interfaces, &mut filer);

    assert!(matches!(result, Err(GeneratorError::UnknownLevel { .. })));
}

#[test]
fn LogProcessor___same_output_identity___fails_round() {
    let mut filer = MemoryFiler::new();
    let interfaces = vec![
        InterfaceElement::bundle("org.example.Twin", "A"),
        InterfaceElement::bundle("org.example.Twin", "B"),
    ];

    let result = processor().process(&interfaces, &mut filer);

    assert!(matches!(
        result,
        Err(GeneratorError::DuplicateOutput { target }) if target == "org.example.Twin_impl"
    ));
    assert!(filer.is_empty());
}

#[test]
fn LogProcessor___separate_rounds___do_not_share_ids() {
    let processor = processor();
    let interfaces = vec![queue_bundle()];

    let first = processor.render(&interfaces);
    let second = processor.render(&interfaces);

    assert!(first.is_ok());
    assert!(second.is_ok());
    assert_eq!(first.unwrap(), second.unwrap());
}

#[test]
fn LogProcessor___no_bundles___succeeds_with_empty_report() {
    let mut filer = MemoryFiler::new();

    let report = processor().process(&[], &mut filer).unwrap();

    assert_eq!(report, RoundReport::default());
}

#[test]
fn LogProcessor___get_logger_with_parameter___fails_round_without_output() {
    let mut filer = MemoryFiler::new();
    let interfaces = vec![InterfaceElement::bundle("org.example.A", "AMQ").method(
        MethodElement::new("logger")
            .returns("org.slf4j.Logger")
            .parameter("java.lang.String", "name")
            .get_logger(),
    )];

    let result = processor().process(&interfaces, &mut filer);

    assert!(matches!(
        result,
        Err(GeneratorError::InvalidSignature { ref method, .. }) if method == "logger"
    ));
    assert!(filer.is_empty());
}

#[test]
fn LogProcessor___void_message___fails_round_without_output() {
    let mut filer = MemoryFiler::new();
    let interfaces = vec![
        queue_bundle(),
        InterfaceElement::bundle("org.example.B", "AMQ")
            .method(MethodElement::new("oops").message(7, "no return value")),
    ];

    let result = processor().process(&interfaces, &mut filer);

    assert!(matches!(result, Err(GeneratorError::InvalidSignature { .. })));
    assert!(filer.is_empty());
}

#[test]
fn LogProcessor___template_ending_in_backslash___fails_round() {
    let interfaces = vec![InterfaceElement::bundle("org.example.A", "AMQ").method(
        MethodElement::new("path")
            .returns("String")
            .message(8, "C:\\temp\\"),
    )];

    let result = processor().render(&interfaces);

    assert!(matches!(
        result,
        Err(GeneratorError::DanglingEscape { id: 8, .. })
    ));
}

#[test]
fn LogProcessor___carriage_return_in_template___is_escaped_in_literal_and_comment() {
    let interfaces = vec![InterfaceElement::bundle("org.example.A", "AMQ").method(
        MethodElement::new("windows")
            .returns("String")
            .message(9, "first\r\nsecond"),
    )];

    let sources = processor().render(&interfaces).unwrap();

    let code = &sources[0].contents;
    assert!(!code.contains('\r'));
    assert!(code.contains("// @Message(id = 9, value = \"first\\r\\nsecond\")"));
    assert!(code.contains("String returnString = \"AMQ9 first\\r\\nsecond\";"));
}
