// In: src/bridge/stateless_api.rs

use arrow::array::Array;
use log::{debug, trace};
use ndarray::ArrayView1;

use crate::bridge::arrow_impl::Float64Input;
use crate::bridge::format::ScanSummary;
use crate::config::MinScanConfig;
use crate::error::MinScanError;
use crate::kernels::{self, scan, Minimum};
use crate::utils;

/// Scans a plain slice. Every other entry point funnels into this one.
pub fn min_of_slice(data: &[f64], config: &MinScanConfig) -> Result<Minimum<f64>, MinScanError> {
    trace!(
        "Scanning {} values with nan_policy={}",
        data.len(),
        config.nan_policy
    );
    kernels::find_min_with(data, config)
}

/// Scans a one-dimensional ndarray view.
///
/// Contiguous views are scanned in place; strided views are gathered first.
pub fn min_of_ndarray(
    view: ArrayView1<'_, f64>,
    config: &MinScanConfig,
) -> Result<Minimum<f64>, MinScanError> {
    match view.as_slice() {
        Some(slice) => min_of_slice(slice, config),
        None => {
            debug!("Gathering strided ndarray view of len {}", view.len());
            let gathered: Vec<f64> = view.iter().copied().collect();
            min_of_slice(&gathered, config)
        }
    }
}

/// Scans a buffer of Little-Endian `f64` values.
pub fn min_of_le_bytes(bytes: &[u8], config: &MinScanConfig) -> Result<Minimum<f64>, MinScanError> {
    let values = utils::le_bytes_to_f64(bytes)?;
    min_of_slice(&values, config)
}

/// Scans any numeric Arrow array. Non-Float64 arrays are cast to Float64 and
/// nulls are read as NaN, so indices always refer to the original rows.
pub fn min_of_arrow(array: &dyn Array, config: &MinScanConfig) -> Result<Minimum<f64>, MinScanError> {
    // 1. Marshall the data from the Arrow world into a dense slice.
    let input = Float64Input::from_array(array)?;
    let values = input.values()?;

    // 2. Call the pure kernel.
    min_of_slice(&values, config)
}

/// Scans `data` and reports the minimum alongside input statistics.
pub fn summarize(data: &[f64], config: &MinScanConfig) -> Result<ScanSummary, MinScanError> {
    let Minimum { index, value } = min_of_slice(data, config)?;
    Ok(ScanSummary {
        index,
        value,
        len: data.len(),
        nan_count: scan::count_nan(data),
    })
}
