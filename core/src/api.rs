//! One-call entry points over the validation engine and the sanitizer.

use crate::options::ValidationOptions;
use crate::types::{Key, ValidationResult};
use crate::validation::KeyValidator;

pub use crate::options::{PERMISSIVE_PRESET, STANDARD_PRESET, STRICT_PRESET};
pub use crate::sanitize::sanitize_key as sanitize;

/// **VALIDATE A KEY** - Resolves `options` and returns the full verdict.
pub fn validate(key: &str, options: &ValidationOptions) -> ValidationResult {
    validate_key(&Key::new(key), options)
}

/// **VALIDATE RAW UTF-8** - Undecodable bytes yield an `ENCODING` error.
pub fn validate_bytes(key: &[u8], options: &ValidationOptions) -> ValidationResult {
    validate_key(&Key::from_utf8(key), options)
}

/// **VALIDATE UTF-16 UNITS** - Unpaired surrogates yield an `ENCODING` error.
pub fn validate_utf16(key: &[u16], options: &ValidationOptions) -> ValidationResult {
    validate_key(&Key::from_utf16(key), options)
}

pub fn validate_key(key: &Key<'_>, options: &ValidationOptions) -> ValidationResult {
    KeyValidator::from_options(options).validate(key)
}

pub fn is_valid(key: &str, options: &ValidationOptions) -> bool {
    validate(key, options).is_valid
}
