//! # casemark-python
//!
//! Python bindings for the casemark casing encoder/decoder, built with PyO3.
//!
//! Exposes the following functions to Python as the `casemark` module:
//!
//! - `encode(text)` -- text -> marked lowercase stream
//! - `decode(text)` -- marked stream -> text with casing restored
//! - `decode_strict(text)` -- like `decode`, but raises on dangling markers

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Encode text into a marked lowercase stream.
///
/// Args:
///     text: The input text.
///
/// Returns:
///     The space-joined stream of lowercase tokens and casing markers.
#[pyfunction]
fn encode(text: &str) -> String {
    casemark_core::encode(text)
}

/// Decode a marked stream, restoring casing on marked tokens.
///
/// Dangling markers at end of stream are silently dropped.
///
/// Args:
///     text: A marked lowercase stream.
///
/// Returns:
///     The text with casing restored.
#[pyfunction]
fn decode(text: &str) -> String {
    casemark_core::decode(text)
}

/// Decode a marked stream, refusing dangling markers.
///
/// Args:
///     text: A marked lowercase stream.
///
/// Returns:
///     The text with casing restored.
///
/// Raises:
///     ValueError: If a marker is left pending at end of stream.
#[pyfunction]
fn decode_strict(text: &str) -> PyResult<String> {
    casemark_core::decode_strict(text).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// The `casemark` Python module.
#[pymodule]
fn casemark(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(encode, m)?)?;
    m.add_function(wrap_pyfunction!(decode, m)?)?;
    m.add_function(wrap_pyfunction!(decode_strict, m)?)?;
    Ok(())
}
