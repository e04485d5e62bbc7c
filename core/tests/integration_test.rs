use s3key::api::*;
use s3key::options::{SpecialChar, ValidationMode, ValidationOptions};
use s3key::types::{ErrorKind, WarningKind};

fn defaults() -> ValidationOptions {
    ValidationOptions::default()
}

fn mode(mode: ValidationMode) -> ValidationOptions {
    ValidationOptions::new().with_mode(mode)
}

#[test]
fn test_default_allows_slash() {
    let result = validate("folder/file.txt", &defaults());
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
}

#[test]
fn test_empty_key_single_length_error() {
    let result = validate("", &defaults());
    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ErrorKind::Length);
}

#[test]
fn test_angle_brackets_two_character_errors() {
    let result = validate("file<name>.txt", &defaults());
    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 2);
    assert!(result.errors.iter().all(|e| e.kind == ErrorKind::Character));
}

#[test]
fn test_strict_rejects_slash() {
    let result = validate("folder/file.txt", &mode(ValidationMode::Strict));
    assert!(!result.is_valid);
    assert_eq!(result.errors[0].character, Some('/'));
}

#[test]
fn test_sanitize_scenarios() {
    assert_eq!(sanitize("folder//file.txt", &defaults()), "folder/file.txt");
    assert_eq!(sanitize("./file.txt", &defaults()), "file.txt");
    assert_eq!(sanitize("file name.txt", &defaults()), "file-name.txt");

    let keep_spaces = ValidationOptions::new().allow_special(SpecialChar::Space, true);
    assert_eq!(sanitize("file name.txt", &keep_spaces), "file name.txt");
}

#[test]
fn test_japanese_allowed_with_warning() {
    let options = ValidationOptions::from_json_str(r#"{"languages": {"allowJapanese": true}}"#)
        .unwrap();
    let result = validate("ファイル名.txt", &options);
    assert!(result.is_valid);
    assert!(result
        .warnings()
        .iter()
        .any(|w| w.kind == WarningKind::Encoding));
}

#[test]
fn test_byte_length_not_codepoint_count() {
    let key = "漢".repeat(342);
    assert_eq!(key.chars().count(), 342);
    assert_eq!(key.len(), 1026);

    let options = ValidationOptions::from_json_str(r#"{"languages": {"allowChinese": true}}"#)
        .unwrap();
    let result = validate(&key, &options);
    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ErrorKind::Length);
}

#[test]
fn test_verdict_json_shape() {
    let json = validate("a b", &defaults()).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["isValid"], false);
    assert_eq!(value["errors"][0]["type"], "CHARACTER");
    assert_eq!(value["errors"][0]["character"], " ");
    assert!(value.get("warnings").is_none());
    assert_eq!(
        value["suggestions"][0],
        "Replace spaces with hyphens (-) or underscores (_)"
    );
}

#[test]
fn test_control_character_and_path_errors_combine() {
    let result = validate("./a\u{7}//", &defaults());
    let kinds: Vec<_> = result.errors.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ErrorKind::Encoding,
            ErrorKind::Path,
            ErrorKind::Path,
            ErrorKind::Path,
            ErrorKind::Character,
        ]
    );
}
