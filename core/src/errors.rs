use thiserror::Error;

/// Crate-level failures.
///
/// Problems found in a key are never reported through this type; they are
/// data in [`crate::types::ValidationResult`]. `ProjectError` only covers
/// misuse of the library surface, such as an unreadable options document.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("VALIDATION ERROR: {code} - {message}")]
    Validation { code: String, message: String },

    #[error("CONFIG ERROR: {code} - {message}")]
    Config { code: String, message: String },
}

/// **ERROR CODES**
///
/// **MANDATE**: Use these standardized error codes for consistent error reporting.
pub mod error_codes {
    pub const INVALID_MODE: &str = "RUST_CORE_CONFIG_INVALID_MODE";
    pub const INVALID_OPTIONS: &str = "RUST_CORE_CONFIG_INVALID_OPTIONS";
    pub const SERIALIZATION_FAILED: &str = "RUST_CORE_VALIDATION_SERIALIZATION_FAILED";
}
