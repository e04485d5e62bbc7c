//! Python bindings for the S3 key validator.
//!
//! Example:
//!     validate_key("folder/file.txt", {"mode": "strict"})
//!
//! Returns:
//!     dict -- the verdict, shaped like `ValidationResult` JSON
//!
//! Raises:
//!     ValueError -- malformed options document
//!     RuntimeError -- verdict could not be converted

use pyo3::prelude::*;

mod validation;

#[pymodule]
fn _rust_lib(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // A host process may already own the global logger.
    let _ = env_logger::try_init();

    validation::register_module(m)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
