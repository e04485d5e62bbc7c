use super::charset::{forbidden_list, is_forbidden};
use super::validators::{CharacterValidator, EncodingValidator, LengthValidator, PathValidator};
use super::{ValidationReport, Validator};
use crate::options::{resolve_options, ResolvedOptions, ValidationOptions};
use crate::types::{Key, ValidationResult};
use log::debug;

/// Checkers in reporting order. Errors are concatenated, never deduplicated.
const PIPELINE: [&dyn Validator; 4] = [
    &LengthValidator,
    &EncodingValidator,
    &PathValidator,
    &CharacterValidator,
];

/// **KEY VALIDATION ENGINE**
///
/// Holds one resolved options record and runs the full pipeline plus the
/// suggestion pass for each key. Cheap to share across threads.
#[derive(Debug, Clone, Default)]
pub struct KeyValidator {
    options: ResolvedOptions,
}

impl KeyValidator {
    pub fn new(options: ResolvedOptions) -> Self {
        Self { options }
    }

    pub fn from_options(options: &ValidationOptions) -> Self {
        Self::new(resolve_options(options))
    }

    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    pub fn validate(&self, key: &Key<'_>) -> ValidationResult {
        let mut report = ValidationReport::new();

        for stage in PIPELINE {
            stage.validate(key, &self.options, &mut report);
        }
        suggest(key.as_str(), &self.options, &mut report);

        let result = report.into_result();
        debug!(
            "validated key ({} bytes, mode={}): {} errors, {} warnings",
            key.byte_len(),
            self.options.mode,
            result.errors.len(),
            result.warnings().len()
        );
        result
    }

    pub fn validate_str(&self, key: &str) -> ValidationResult {
        self.validate(&Key::new(key))
    }

    pub fn is_valid(&self, key: &str) -> bool {
        self.validate_str(key).is_valid
    }
}

/// Advisory fixes, independent of which checkers fired. Each condition adds
/// at most one suggestion.
fn suggest(key: &str, options: &ResolvedOptions, report: &mut ValidationReport) {
    if key.contains("//") {
        report.suggest("Remove consecutive slashes (//)");
    }

    if key.ends_with('/') {
        report.suggest("Remove trailing slash");
    }

    if key.starts_with("./") {
        report.suggest(r#"Remove "./" prefix for better console compatibility"#);
    }

    if key.contains("../") {
        report.suggest(r#"Remove relative path elements ("../")"#);
    }

    if key.chars().any(is_forbidden) {
        report.suggest(format!("Remove forbidden characters: {}", forbidden_list()));
    }

    let special = &options.special_chars;
    if key.contains(' ') && !special.allow_space {
        report.suggest("Replace spaces with hyphens (-) or underscores (_)");
    }

    if key.contains(':') && !special.allow_colon {
        report.suggest("Replace colons (:) with hyphens (-) or underscores (_)");
    }

    if key.contains('@') && !special.allow_at {
        report.suggest("Replace @ symbols with hyphens (-) or underscores (_)");
    }
}
