//! This file is the root of the `minscan` Rust crate.
//!
//! `minscan` finds the first minimum of a sequence of `f64`: its value, its
//! zero-based index, or both from a single linear scan.
//!
//! ```
//! let data = [3.0, 1.0, 4.0, 1.0, 5.0];
//! assert_eq!(minscan::find_min_value(&data).unwrap(), 1.0);
//! assert_eq!(minscan::find_min_index(&data).unwrap(), 1);
//! ```
//!
//! With the `python` feature the crate also defines the `#[pymodule]` that is
//! the entry point when the compiled library is imported into Python.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod bridge;
pub mod config;
pub mod error;
pub mod kernels;
pub mod types;

mod null_handling;
pub mod utils;

#[cfg(feature = "python")]
mod ffi;

pub use config::{MinScanConfig, NanPolicy};
pub use error::MinScanError;
pub use kernels::{
    find_min, find_min_index, find_min_index_with, find_min_value, find_min_value_with,
    find_min_with, Minimum,
};

//==================================================================================
// 2. Python Module Definition
//==================================================================================
#[cfg(feature = "python")]
use pyo3::prelude::*;

/// The `minscan` Python module, containing all exposed Rust functions.
#[cfg(feature = "python")]
#[pymodule]
fn minscan(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // --- Sequence API ---
    m.add_function(wrap_pyfunction!(ffi::python::find_min_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::python::find_min_idx_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::python::analyze_py, m)?)?;

    // --- Buffer API ---
    m.add_function(wrap_pyfunction!(ffi::python::find_min_arrow_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::python::find_min_bytes_py, m)?)?;

    // --- Expose the error type raised for every library failure ---
    m.add(
        "MinScanError",
        m.py().get_type_bound::<pyo3::exceptions::PyValueError>(),
    )?;

    // --- Expose version string as a module attribute ---
    m.add("__version__", VERSION)?;

    // --- Turn on logging for the bridge ---
    m.add_function(wrap_pyfunction!(ffi::python::enable_verbose_logging_py, m)?)?;

    Ok(())
}
