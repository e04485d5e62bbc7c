//! # CONCRETE VALIDATOR IMPLEMENTATIONS
//!
//! **CRITICAL**: Four stateless checkers implementing the core `Validator` trait.
//! **MANDATE**: Positions are codepoint indices, lengths are UTF-8 bytes.

use super::charset::{classify, CharClass};
use super::{ValidationReport, Validator};
use crate::options::{ResolvedOptions, DEFAULT_MAX_LENGTH};
use crate::types::{ErrorKind, Key, ValidationError, ValidationWarning, WarningKind};

// ================================================================================================
// LENGTH VALIDATOR - UTF-8 byte length ceiling
// ================================================================================================

/// **LENGTH VALIDATOR**
///
/// **PURPOSE**: Rejects empty keys and keys whose UTF-8 encoding exceeds
/// `max_length` bytes. A zero `max_length` falls back to 1024.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthValidator;

impl Validator for LengthValidator {
    fn validate(&self, key: &Key<'_>, options: &ResolvedOptions, report: &mut ValidationReport) {
        // **STEP 1**: Empty key short-circuits
        if key.is_empty() {
            report.error(ValidationError::new(ErrorKind::Length, "Key cannot be empty"));
            return;
        }

        // **STEP 2**: Compare encoded byte count, never codepoint count
        let max_length = match options.max_length {
            0 => DEFAULT_MAX_LENGTH,
            limit => limit,
        };
        let byte_length = key.byte_len();
        if byte_length > max_length {
            report.error(ValidationError::new(
                ErrorKind::Length,
                format!(
                    "Key exceeds maximum length of {} bytes (current: {} bytes)",
                    max_length, byte_length
                ),
            ));
        }
    }
}

// ================================================================================================
// ENCODING VALIDATOR - Round-trip and control characters
// ================================================================================================

/// **ENCODING VALIDATOR**
///
/// **PURPOSE**: Reports keys whose source data did not survive decoding,
/// then every control character in C0 (`U+0000..=U+001F`) or DEL/C1
/// (`U+007F..=U+009F`). Runs regardless of options.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodingValidator;

impl EncodingValidator {
    pub fn is_control(c: char) -> bool {
        matches!(u32::from(c), 0x00..=0x1F | 0x7F..=0x9F)
    }
}

impl Validator for EncodingValidator {
    fn validate(&self, key: &Key<'_>, _options: &ResolvedOptions, report: &mut ValidationReport) {
        if !key.round_trips() {
            report.error(ValidationError::new(
                ErrorKind::Encoding,
                "Key contains invalid UTF-8 sequences",
            ));
        }

        for (position, c) in key.as_str().chars().enumerate() {
            if Self::is_control(c) {
                report.error(
                    ValidationError::new(
                        ErrorKind::Encoding,
                        format!(
                            "Control character (U+{:04X}) at position {}",
                            u32::from(c),
                            position
                        ),
                    )
                    .at(position)
                    .with_character(c),
                );
            }
        }
    }
}

// ================================================================================================
// PATH VALIDATOR - Path-safety conventions
// ================================================================================================

/// **PATH VALIDATOR**
///
/// **PURPOSE**: Four independent checks reported in a fixed order: dot
/// prefix, relative segment, consecutive slashes, trailing slash.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathValidator;

impl PathValidator {
    /// Byte offsets of every `//`, rescanning one byte past each match so
    /// that `///` yields two hits.
    fn consecutive_slashes(text: &str) -> Vec<usize> {
        let mut offsets = Vec::new();
        let mut from = 0;
        while let Some(found) = text.get(from..).and_then(|rest| rest.find("//")) {
            let offset = from + found;
            offsets.push(offset);
            from = offset + 1;
        }
        offsets
    }
}

impl Validator for PathValidator {
    fn validate(&self, key: &Key<'_>, options: &ResolvedOptions, report: &mut ValidationReport) {
        let text = key.as_str();

        if !options.allow_dot_prefix && text.starts_with("./") {
            report.error(
                ValidationError::new(
                    ErrorKind::Path,
                    r#"Keys starting with "./" are not allowed (console limitation)"#,
                )
                .at(0),
            );
        }

        if !options.allow_relative_paths {
            if let Some(offset) = text.find("../") {
                report.error(
                    ValidationError::new(
                        ErrorKind::Path,
                        r#"Relative path elements "../" are not allowed"#,
                    )
                    .at(key.char_position(offset)),
                );
            }
        }

        for offset in Self::consecutive_slashes(text) {
            report.error(
                ValidationError::new(
                    ErrorKind::Path,
                    r#"Consecutive slashes "//" are not recommended"#,
                )
                .at(key.char_position(offset)),
            );
        }

        if text.ends_with('/') {
            report.error(
                ValidationError::new(
                    ErrorKind::Path,
                    "Trailing slash is not recommended for object keys",
                )
                .at(key.char_len() - 1),
            );
        }
    }
}

// ================================================================================================
// CHARACTER VALIDATOR - Per-codepoint classification
// ================================================================================================

/// **CHARACTER VALIDATOR**
///
/// **PURPOSE**: Classifies every codepoint in order and reports at most one
/// error or warning per codepoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterValidator;

impl CharacterValidator {
    fn check(
        c: char,
        position: usize,
        options: &ResolvedOptions,
        report: &mut ValidationReport,
    ) {
        match classify(c, &options.additional_chars) {
            CharClass::Safe | CharClass::Additional => {}
            CharClass::Forbidden => report.error(
                ValidationError::new(
                    ErrorKind::Character,
                    format!("Forbidden character '{}' at position {}", c, position),
                )
                .at(position)
                .with_character(c),
            ),
            CharClass::Special(special) if options.special_chars.allows(special) => {
                report.warning(ValidationWarning::new(
                    WarningKind::Compatibility,
                    format!("Special character '{}' may cause compatibility issues", c),
                ))
            }
            CharClass::Special(_) => report.error(
                ValidationError::new(
                    ErrorKind::Character,
                    format!(
                        "Special character '{}' not allowed at position {}",
                        c, position
                    ),
                )
                .at(position)
                .with_character(c),
            ),
            CharClass::Language(script) if options.languages.allows(script) => {
                report.warning(ValidationWarning::new(
                    WarningKind::Encoding,
                    "Non-ASCII characters may cause compatibility issues",
                ))
            }
            CharClass::Language(_) => report.error(
                ValidationError::new(
                    ErrorKind::Character,
                    format!(
                        "Multi-byte character '{}' not allowed at position {}",
                        c, position
                    ),
                )
                .at(position)
                .with_character(c),
            ),
            CharClass::Invalid => report.error(
                ValidationError::new(
                    ErrorKind::Character,
                    format!("Invalid character '{}' at position {}", c, position),
                )
                .at(position)
                .with_character(c),
            ),
        }
    }
}

impl Validator for CharacterValidator {
    fn validate(&self, key: &Key<'_>, options: &ResolvedOptions, report: &mut ValidationReport) {
        for (position, c) in key.as_str().chars().enumerate() {
            Self::check(c, position, options, report);
        }
    }
}

// ================================================================================================
// UNIT TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{
        resolve_options, Language, SpecialChar, ValidationMode, ValidationOptions,
        PERMISSIVE_PRESET, STANDARD_PRESET, STRICT_PRESET,
    };

    fn run(validator: &dyn Validator, key: &str, options: &ResolvedOptions) -> ValidationReport {
        let mut report = ValidationReport::new();
        validator.validate(&Key::new(key), options, &mut report);
        report
    }

    // **LENGTH VALIDATOR TESTS**
    mod length_validator_tests {
        use super::*;

        #[test]
        fn test_empty_key() {
            let report = run(&LengthValidator, "", &STANDARD_PRESET);
            assert_eq!(report.errors().len(), 1);
            assert_eq!(report.errors()[0].kind, ErrorKind::Length);
            assert!(report.errors()[0].message.contains("cannot be empty"));
        }

        #[test]
        fn test_exact_limit() {
            let options = resolve_options(&ValidationOptions::new().with_max_length(10));
            assert!(run(&LengthValidator, "exactly10b", &options).errors().is_empty());

            let report = run(&LengthValidator, "exactly11b!", &options);
            assert_eq!(report.errors().len(), 1);
            assert!(report.errors()[0].message.contains("10 bytes"));
            assert!(report.errors()[0].message.contains("current: 11 bytes"));
        }

        #[test]
        fn test_counts_bytes_not_codepoints() {
            let key = "漢".repeat(342);
            let report = run(&LengthValidator, &key, &STANDARD_PRESET);
            assert_eq!(report.errors().len(), 1);
            assert!(report.errors()[0].message.contains("current: 1026 bytes"));
        }

        #[test]
        fn test_zero_limit_falls_back_to_default() {
            let options = resolve_options(&ValidationOptions::new().with_max_length(0));
            assert!(run(&LengthValidator, &"a".repeat(1024), &options).errors().is_empty());
            assert_eq!(run(&LengthValidator, &"a".repeat(1025), &options).errors().len(), 1);
        }
    }

    // **ENCODING VALIDATOR TESTS**
    mod encoding_validator_tests {
        use super::*;

        #[test]
        fn test_clean_key() {
            assert!(run(&EncodingValidator, "a/b.txt", &STANDARD_PRESET).errors().is_empty());
        }

        #[test]
        fn test_control_characters() {
            let report = run(&EncodingValidator, "a\tb\u{7F}c\u{9F}", &STANDARD_PRESET);
            let errors = report.errors();
            assert_eq!(errors.len(), 3);
            assert_eq!(errors[0].position, Some(1));
            assert!(errors[0].message.contains("U+0009"));
            assert_eq!(errors[1].position, Some(3));
            assert!(errors[1].message.contains("U+007F"));
            assert!(errors[2].message.contains("U+009F"));
            assert!(errors.iter().all(|e| e.kind == ErrorKind::Encoding));
        }

        #[test]
        fn test_lossy_key_reports_round_trip_first() {
            let key = Key::from_utf8(&[0xFF, b'\n']);
            let mut report = ValidationReport::new();
            EncodingValidator.validate(&key, &STANDARD_PRESET, &mut report);

            let errors = report.errors();
            assert_eq!(errors.len(), 2);
            assert_eq!(errors[0].position, None);
            assert!(errors[0].message.contains("invalid UTF-8"));
            assert_eq!(errors[1].position, Some(1));
        }

        #[test]
        fn test_unpaired_surrogate() {
            let key = Key::from_utf16(&[0x0061, 0xDC00]);
            let mut report = ValidationReport::new();
            EncodingValidator.validate(&key, &STANDARD_PRESET, &mut report);
            assert_eq!(report.errors().len(), 1);
        }
    }

    // **PATH VALIDATOR TESTS**
    mod path_validator_tests {
        use super::*;

        #[test]
        fn test_dot_prefix() {
            let report = run(&PathValidator, "./file.txt", &STANDARD_PRESET);
            assert_eq!(report.errors().len(), 1);
            assert_eq!(report.errors()[0].position, Some(0));

            let options = resolve_options(&ValidationOptions::new().allow_dot_prefix(true));
            assert!(run(&PathValidator, "./file.txt", &options).errors().is_empty());
        }

        #[test]
        fn test_relative_path_reports_first_occurrence() {
            let report = run(&PathValidator, "a/../b/../c", &STANDARD_PRESET);
            assert_eq!(report.errors().len(), 1);
            assert_eq!(report.errors()[0].position, Some(2));

            let options = resolve_options(&ValidationOptions::new().allow_relative_paths(true));
            assert!(run(&PathValidator, "a/../b", &options).errors().is_empty());
        }

        #[test]
        fn test_consecutive_slashes_overlap() {
            let report = run(&PathValidator, "a///b", &STANDARD_PRESET);
            let positions: Vec<_> = report.errors().iter().map(|e| e.position).collect();
            assert_eq!(positions, vec![Some(1), Some(2)]);
        }

        #[test]
        fn test_trailing_slash_position_in_codepoints() {
            let report = run(&PathValidator, "写真/", &STANDARD_PRESET);
            assert_eq!(report.errors().len(), 1);
            assert_eq!(report.errors()[0].position, Some(2));
        }

        #[test]
        fn test_all_checks_accumulate() {
            let report = run(&PathValidator, "./a/..//", &STANDARD_PRESET);
            let errors = report.errors();
            assert_eq!(errors.len(), 4);
            assert!(errors[0].message.contains("./"));
            assert!(errors[1].message.contains("../"));
            assert!(errors[2].message.contains("//"));
            assert!(errors[3].message.contains("Trailing"));
            assert_eq!(errors[3].position, Some(7));
        }
    }

    // **CHARACTER VALIDATOR TESTS**
    mod character_validator_tests {
        use super::*;

        #[test]
        fn test_forbidden_characters_report_position() {
            let report = run(&CharacterValidator, "file<name>.txt", &STANDARD_PRESET);
            let errors = report.errors();
            assert_eq!(errors.len(), 2);
            assert_eq!(errors[0].character, Some('<'));
            assert_eq!(errors[0].position, Some(4));
            assert_eq!(errors[1].character, Some('>'));
            assert_eq!(errors[1].position, Some(9));
        }

        #[test]
        fn test_allowed_special_warns() {
            let report = run(&CharacterValidator, "a b", &PERMISSIVE_PRESET);
            assert!(report.errors().is_empty());
            assert_eq!(report.warnings().len(), 1);
            assert_eq!(report.warnings()[0].kind, WarningKind::Compatibility);
        }

        #[test]
        fn test_disallowed_special_errors() {
            let report = run(&CharacterValidator, "a/b", &STRICT_PRESET);
            assert_eq!(report.errors().len(), 1);
            assert_eq!(report.errors()[0].character, Some('/'));
            assert!(report.errors()[0].message.contains("Special character"));
        }

        #[test]
        fn test_language_gate() {
            let report = run(&CharacterValidator, "한글", &STANDARD_PRESET);
            assert_eq!(report.errors().len(), 2);
            assert!(report.errors()[0].message.contains("Multi-byte"));

            let korean = resolve_options(
                &ValidationOptions::new().allow_language(Language::Korean, true),
            );
            let report = run(&CharacterValidator, "한글", &korean);
            assert!(report.errors().is_empty());
            assert_eq!(report.warnings().len(), 2);
            assert_eq!(report.warnings()[0].kind, WarningKind::Encoding);
        }

        #[test]
        fn test_additional_chars() {
            let options = resolve_options(
                &ValidationOptions::new()
                    .with_mode(ValidationMode::Strict)
                    .with_additional_chars(['+']),
            );
            let report = run(&CharacterValidator, "a+b", &options);
            assert!(report.errors().is_empty());
            assert!(report.warnings().is_empty());
        }

        #[test]
        fn test_invalid_character() {
            let report = run(&CharacterValidator, "é", &STANDARD_PRESET);
            assert_eq!(report.errors().len(), 1);
            assert!(report.errors()[0].message.contains("Invalid character"));
        }

        #[test]
        fn test_override_special_flag() {
            let options = resolve_options(
                &ValidationOptions::new().allow_special(SpecialChar::At, true),
            );
            let report = run(&CharacterValidator, "me@host/x", &options);
            assert!(report.errors().is_empty());
            assert_eq!(report.warnings().len(), 2);
        }
    }
}
