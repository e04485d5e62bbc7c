//! # S3KEY VALIDATION MODULE
//!
//! **CORE VALIDATION SYSTEM WITH TRAIT-BASED ARCHITECTURE**
//!
//! This module provides the `Validator` trait and the four stateless
//! checkers that the engine runs against every key.
//!
//! ## VALIDATION PIPELINE
//!
//! 1. **LENGTH VALIDATION** - Empty keys and UTF-8 byte ceiling
//! 2. **ENCODING VALIDATION** - Round-trip loss and control characters
//! 3. **PATH VALIDATION** - Dot prefix, `../`, `//` and trailing slash
//! 4. **CHARACTER VALIDATION** - Per-codepoint classification
//!
//! Every stage runs; one stage finding nothing never suppresses another.
//!
//! ## USAGE
//!
//! ```rust
//! use s3key::options::ValidationOptions;
//! use s3key::validation::KeyValidator;
//!
//! let validator = KeyValidator::from_options(&ValidationOptions::default());
//! let result = validator.validate_str("folder/file.txt");
//! assert!(result.is_valid);
//! ```

use crate::options::ResolvedOptions;
use crate::types::{Key, ValidationError, ValidationResult, ValidationWarning};

pub mod charset;
pub mod engine;
pub mod validators;

pub use charset::{classify, CharClass, Script, FORBIDDEN_CHARS};
pub use engine::KeyValidator;
pub use validators::{CharacterValidator, EncodingValidator, LengthValidator, PathValidator};

/// **CORE VALIDATOR TRAIT**
///
/// **MANDATE**: Each checker is stateless and reports into the shared
/// report rather than returning early.
/// **GUARANTEE**: MUST NOT panic. Problems in the key are data, not errors.
pub trait Validator {
    fn validate(&self, key: &Key<'_>, options: &ResolvedOptions, report: &mut ValidationReport);
}

/// **PER-CALL ACCUMULATOR**
///
/// Three ordered lists that live for one validation call.
#[derive(Debug, Default)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationWarning>,
    suggestions: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    pub fn suggest(&mut self, suggestion: impl Into<String>) {
        self.suggestions.push(suggestion.into());
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    pub fn into_result(self) -> ValidationResult {
        ValidationResult::from_parts(self.errors, self.warnings, self.suggestions)
    }
}
