//! End-to-end generation tests.
//!
//! Drives whole rounds through the public API and checks what lands on disk.

#![allow(non_snake_case)]

use logbundle_core::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to build a bundle with `n` zero-argument message methods.
fn bundle_with_messages(name: &str, first_id: i32, n: i32) -> InterfaceElement {
    (0..n).fold(InterfaceElement::bundle(name, "AMQ"), |bundle, i| {
        bundle.method(
            MethodElement::new(format!("message{i}"))
                .returns("String")
                .message(first_id + i, format!("message number {i}")),
        )
    })
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn process___n_unique_messages___emits_n_bodies_plus_boilerplate() {
    let temp_dir = TempDir::new().unwrap();
    let mut filer = DirectoryFiler::new(temp_dir.path());
    let processor = LogProcessor::new(GeneratorConfig::default()).unwrap();

    let report = processor
        .process(&[bundle_with_messages("org.example.Many", 1000, 12)], &mut filer)
        .unwrap();

    let code = fs::read_to_string(temp_dir.path().join("org/example/Many_impl.java")).unwrap();
    assert_eq!(report.total_methods(), 12);
    assert_eq!(count(&code, "// @Message("), 12);
    assert_eq!(count(&code, "private final Logger logger;"), 1);
    assert_eq!(count(&code, "public Many_impl("), 2);
    assert_eq!(count(&code, "INSTANCE = new Many_impl();"), 1);
}

#[test]
fn process___bundles_in_several_packages___land_in_package_directories() {
    let temp_dir = TempDir::new().unwrap();
    let mut filer = DirectoryFiler::new(temp_dir.path());
    let processor = LogProcessor::new(GeneratorConfig::default()).unwrap();
    let interfaces = vec![
        bundle_with_messages("org.apache.core.CoreBundle", 1, 2),
        bundle_with_messages("org.apache.jms.JmsBundle", 100, 2),
    ];

    processor.process(&interfaces, &mut filer).unwrap();

    assert!(temp_dir.path().join("org/apache/core/CoreBundle_impl.java").is_file());
    assert!(temp_dir.path().join("org/apache/jms/JmsBundle_impl.java").is_file());
}

#[test]
fn process___failed_round___leaves_output_directory_empty() {
    let temp_dir = TempDir::new().unwrap();
    let mut filer = DirectoryFiler::new(temp_dir.path().join("out"));
    let processor = LogProcessor::new(GeneratorConfig::default()).unwrap();
    let interfaces = vec![
        bundle_with_messages("org.example.First", 1, 3),
        bundle_with_messages("org.example.Second", 3, 1),
    ];

    let err = processor.process(&interfaces, &mut filer).unwrap_err();

    assert!(matches!(err, GeneratorError::DuplicateMessageId { id: 3, .. }));
    assert!(!temp_dir.path().join("out").exists());
}

#[test]
fn process___rerun___produces_identical_files() {
    let first_dir = TempDir::new().unwrap();
    let second_dir = TempDir::new().unwrap();
    let processor = LogProcessor::new(GeneratorConfig::default()).unwrap();
    let interfaces = vec![bundle_with_messages("org.example.Stable", 1, 4)];

    processor
        .process(&interfaces, &mut DirectoryFiler::new(first_dir.path()))
        .unwrap();
    processor
        .process(&interfaces, &mut DirectoryFiler::new(second_dir.path()))
        .unwrap();

    let relative = "org/example/Stable_impl.java";
    assert_eq!(
        fs::read(first_dir.path().join(relative)).unwrap(),
        fs::read(second_dir.path().join(relative)).unwrap()
    );
}

#[test]
fn process___manifest_json___round_trips_through_serde() {
    let json = r#"[
        {
            "name": "org.example.ServerBundle",
            "log_bundle": { "project_code": "AMQ22" },
            "method": [
                {
                    "name": "serverStarting",
                    "parameters": [{ "type": "java.lang.String", "name": "version" }],
                    "log_message": { "id": 1000, "value": "Server starting: {}", "level": "INFO" }
                },
                {
                    "name": "unannotated"
                }
            ]
        }
    ]"#;
    let interfaces: Vec<InterfaceElement> = serde_json::from_str(json).unwrap();
    let mut filer = MemoryFiler::new();
    let processor = LogProcessor::new(GeneratorConfig::default()).unwrap();

    let report = processor.process(&interfaces, &mut filer).unwrap();

    let code = filer.get("org.example.ServerBundle_impl").unwrap();
    assert_eq!(report.total_methods(), 1);
    assert!(code.contains("logger.info(\"AMQ221000 Server starting: {}\", version);"));
    assert!(!code.contains("unannotated"));
}
