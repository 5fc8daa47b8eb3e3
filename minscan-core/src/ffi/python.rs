// In: src/ffi/python.rs

use arrow::array::{make_array, ArrayData};
use arrow::pyarrow::PyArrowType;
use log::LevelFilter;
use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;
use std::fs::OpenOptions;
use std::str::FromStr;
use std::sync::Once;

use crate::bridge;
use crate::config::{MinScanConfig, NanPolicy};
use crate::kernels;

/// Builds the config from the keyword arguments every function accepts.
fn parse_config(nan_policy: &str) -> PyResult<MinScanConfig> {
    let policy = NanPolicy::from_str(nan_policy)?;
    Ok(MinScanConfig::with_nan_policy(policy))
}

//==================================================================================
// I. Sequence API (Python lists, tuples, any sequence of floats)
//==================================================================================

/// Returns the smallest value of `values`.
///
/// Raises `ValueError` if `values` is empty or `nan_policy` is unknown.
#[pyfunction]
#[pyo3(name = "find_min", signature = (values, nan_policy = "ignore"))]
pub fn find_min_py(values: Vec<f64>, nan_policy: &str) -> PyResult<f64> {
    let config = parse_config(nan_policy)?;
    Ok(kernels::find_min_value_with(&values, &config)?)
}

/// Returns the zero-based index of the first smallest value of `values`.
#[pyfunction]
#[pyo3(name = "find_min_idx", signature = (values, nan_policy = "ignore"))]
pub fn find_min_idx_py(values: Vec<f64>, nan_policy: &str) -> PyResult<usize> {
    let config = parse_config(nan_policy)?;
    Ok(kernels::find_min_index_with(&values, &config)?)
}

/// Scans `values` and returns a dict with `index`, `value`, `len` and `nan_count`.
#[pyfunction]
#[pyo3(name = "analyze", signature = (values, nan_policy = "ignore"))]
pub fn analyze_py(py: Python, values: Vec<f64>, nan_policy: &str) -> PyResult<PyObject> {
    let config = parse_config(nan_policy)?;
    let summary = bridge::summarize(&values, &config)?;

    let result_dict = PyDict::new_bound(py);
    result_dict.set_item("index", summary.index)?;
    result_dict.set_item("value", summary.value)?;
    result_dict.set_item("len", summary.len)?;
    result_dict.set_item("nan_count", summary.nan_count)?;
    result_dict.set_item("nan_policy", config.nan_policy.as_str())?;

    Ok(result_dict.into_any().unbind())
}

//==================================================================================
// II. Buffer API (PyArrow arrays and raw bytes, scanned without the GIL)
//==================================================================================

/// Scans a numeric PyArrow array and returns `(index, value)`.
///
/// Nulls are read as NaN; integer and Float32 arrays are widened to Float64.
#[pyfunction]
#[pyo3(name = "find_min_arrow", signature = (array, nan_policy = "ignore"))]
pub fn find_min_arrow_py(
    py: Python,
    array: PyArrowType<ArrayData>,
    nan_policy: &str,
) -> PyResult<(usize, f64)> {
    let config = parse_config(nan_policy)?;
    let rust_array = make_array(array.0);
    let found = py.allow_threads(move || bridge::min_of_arrow(rust_array.as_ref(), &config))?;
    Ok((found.index, found.value))
}

/// Scans a bytes object holding Little-Endian `f64` values and returns `(index, value)`.
#[pyfunction]
#[pyo3(name = "find_min_bytes", signature = (data, nan_policy = "ignore"))]
pub fn find_min_bytes_py(py: Python, data: &[u8], nan_policy: &str) -> PyResult<(usize, f64)> {
    let config = parse_config(nan_policy)?;
    let found = py.allow_threads(move || bridge::min_of_le_bytes(data, &config))?;
    Ok((found.index, found.value))
}

//==================================================================================
// III. Logging
//==================================================================================

static INIT_LOGGER: Once = Once::new();

/// Routes the library's `log` output to stderr, or appends it to `log_file`.
/// Only the first call has any effect.
#[pyfunction]
#[pyo3(name = "enable_verbose_logging", signature = (log_file = None, level = "debug"))]
pub fn enable_verbose_logging_py(log_file: Option<String>, level: &str) -> PyResult<()> {
    let filter = LevelFilter::from_str(level)
        .map_err(|_| PyValueError::new_err(format!("Invalid log level '{}'", level)))?;

    let mut result = Ok(());
    INIT_LOGGER.call_once(|| {
        result = init_logger(log_file, filter);
    });
    result
}

fn init_logger(log_file: Option<String>, filter: LevelFilter) -> PyResult<()> {
    let mut builder = env_logger::Builder::new();

    builder.is_test(false);
    builder.filter_level(filter);

    // Custom formatter: just print the level and message
    builder.format(|buf, record| {
        use std::io::Write;
        writeln!(buf, "[{}] {}", record.level(), record.args())?;
        buf.flush()?;
        Ok(())
    });

    if let Some(filename) = log_file {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&filename)
            .map_err(|e| PyIOError::new_err(format!("Could not open log file {}: {}", filename, e)))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    let _ = builder.try_init();
    Ok(())
}
