//! # S3KEY CORE LIBRARY
//!
//! **OBJECT STORAGE KEY VALIDATION AND SANITIZATION**
//!
//! **ARCHITECTURE**: Stateless checker pipeline behind a `Validator` trait
//! **GUARANTEE**: Pure functions over immutable input, safe to call from any thread
//! **COMPATIBILITY**: Verdicts serialize to the camelCase JSON shape consumers expect
//!
//! ```rust
//! use s3key::api::{sanitize, validate};
//! use s3key::options::ValidationOptions;
//!
//! let options = ValidationOptions::default();
//! assert!(validate("folder/file.txt", &options).is_valid);
//! assert_eq!(sanitize("folder//file name.txt", &options), "folder/file-name.txt");
//! ```

pub mod api;
pub mod errors;
pub mod options;
pub mod sanitize;
pub mod types;

// **VALIDATION MODULE REGISTRATION**
pub mod validation;

pub use api::{is_valid, sanitize, validate, validate_bytes, validate_utf16};
pub use errors::ProjectError;
pub use options::{ResolvedOptions, ValidationMode, ValidationOptions};
pub use types::{
    ErrorKind, Key, ValidationError, ValidationResult, ValidationWarning, WarningKind,
};
pub use validation::KeyValidator;
