use log::debug;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyString};
use s3key::api;
use s3key::options::{ResolvedOptions, PERMISSIVE_PRESET, STANDARD_PRESET, STRICT_PRESET};
use s3key::{Key, KeyValidator, ProjectError, ValidationOptions};
use serde::Serialize;

/// **PYTHON KEY VALIDATOR**
///
/// Resolves its options once and reuses them for every key.
#[pyclass(name = "KeyValidator", frozen)]
pub struct PyKeyValidator {
    inner: KeyValidator,
    raw: ValidationOptions,
}

#[pymethods]
impl PyKeyValidator {
    /// **CONSTRUCTOR**
    #[new]
    #[pyo3(signature = (options=None))]
    fn new(py: Python<'_>, options: Option<&Bound<'_, PyDict>>) -> PyResult<Self> {
        let raw = options_from_py(py, options)?;
        let inner = KeyValidator::from_options(&raw);
        debug!("KeyValidator created with mode {}", inner.options().mode);
        Ok(Self { inner, raw })
    }

    /// **VALIDATE KEY**
    fn validate<'py>(
        &self,
        py: Python<'py>,
        key: &Bound<'py, PyString>,
    ) -> PyResult<Bound<'py, PyAny>> {
        let result = with_key(key, |key| self.inner.validate(key))?;
        to_py(py, &result)
    }

    /// **CHECK KEY**
    fn is_valid(&self, key: &Bound<'_, PyString>) -> PyResult<bool> {
        with_key(key, |key| self.inner.validate(key).is_valid)
    }

    /// **SANITIZE KEY** - Uses only the special-character flags given at
    /// construction.
    fn sanitize(&self, key: &Bound<'_, PyString>) -> PyResult<String> {
        with_key(key, |key| api::sanitize(key.as_str(), &self.raw))
    }

    /// **RESOLVED MODE**
    #[getter]
    fn mode(&self) -> &'static str {
        self.inner.options().mode.as_str()
    }
}

/// **VALIDATE KEY**
#[pyfunction(name = "validate_key", signature = (key, options=None))]
fn validate_key_py<'py>(
    py: Python<'py>,
    key: &Bound<'py, PyString>,
    options: Option<&Bound<'py, PyDict>>,
) -> PyResult<Bound<'py, PyAny>> {
    let options = options_from_py(py, options)?;
    let result = with_key(key, |key| api::validate_key(key, &options))?;
    to_py(py, &result)
}

/// **CHECK KEY**
#[pyfunction(name = "is_valid_key", signature = (key, options=None))]
fn is_valid_key_py(
    py: Python<'_>,
    key: &Bound<'_, PyString>,
    options: Option<&Bound<'_, PyDict>>,
) -> PyResult<bool> {
    let options = options_from_py(py, options)?;
    with_key(key, |key| api::validate_key(key, &options).is_valid)
}

/// **SANITIZE KEY**
#[pyfunction(name = "sanitize_key", signature = (key, options=None))]
fn sanitize_key_py(
    py: Python<'_>,
    key: &Bound<'_, PyString>,
    options: Option<&Bound<'_, PyDict>>,
) -> PyResult<String> {
    let options = options_from_py(py, options)?;
    with_key(key, |key| api::sanitize(key.as_str(), &options))
}

/// **HELPER FUNCTIONS**

fn to_py_err(err: ProjectError) -> PyErr {
    match err {
        ProjectError::Config { message, .. } => PyValueError::new_err(message),
        ProjectError::Validation { message, .. } => PyRuntimeError::new_err(message),
    }
}

/// **CONVERT PYTHON DICT TO OPTIONS**
fn options_from_py(
    py: Python<'_>,
    options: Option<&Bound<'_, PyDict>>,
) -> PyResult<ValidationOptions> {
    let Some(dict) = options else {
        return Ok(ValidationOptions::default());
    };

    let document: String = py
        .import("json")?
        .call_method1("dumps", (dict,))?
        .extract()?;
    ValidationOptions::from_json_str(&document).map_err(to_py_err)
}

/// **CONVERT SERIALIZABLE VALUE TO PYTHON OBJECT**
fn to_py<'py, T: Serialize>(py: Python<'py>, value: &T) -> PyResult<Bound<'py, PyAny>> {
    let document = serde_json::to_string(value)
        .map_err(|e| PyRuntimeError::new_err(format!("Serialization failed: {}", e)))?;
    py.import("json")?.call_method1("loads", (document,))
}

/// Python strings may hold lone surrogates that have no UTF-8 form. Those
/// are decoded from their UTF-16 units so the encoding check can flag them.
fn with_key<R>(key: &Bound<'_, PyString>, f: impl FnOnce(&Key<'_>) -> R) -> PyResult<R> {
    if let Ok(text) = key.to_str() {
        return Ok(f(&Key::new(text)));
    }

    let bytes: Vec<u8> = key
        .call_method1("encode", ("utf-16-le", "surrogatepass"))?
        .extract()?;
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    Ok(f(&Key::from_utf16(&units)))
}

fn add_preset(m: &Bound<'_, PyModule>, name: &str, preset: &ResolvedOptions) -> PyResult<()> {
    m.add(name, to_py(m.py(), preset)?)
}

/// **REGISTER FUNCTIONS, CLASSES AND PRESETS**
pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyKeyValidator>()?;

    m.add_function(wrap_pyfunction!(validate_key_py, m)?)?;
    m.add_function(wrap_pyfunction!(is_valid_key_py, m)?)?;
    m.add_function(wrap_pyfunction!(sanitize_key_py, m)?)?;

    add_preset(m, "STRICT_PRESET", &STRICT_PRESET)?;
    add_preset(m, "STANDARD_PRESET", &STANDARD_PRESET)?;
    add_preset(m, "PERMISSIVE_PRESET", &PERMISSIVE_PRESET)?;
    Ok(())
}
