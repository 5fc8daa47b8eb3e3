// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the marshalling boundary between foreign data representations and
// the pure `kernels`. Every entry point reduces its input to a `&[f64]` and calls the
// same scan, so all inputs share one set of NaN and tie-break semantics.
//
//   [Arrow `&dyn Array`]   -> arrow_impl: validate type, cast to Float64, nulls -> NaN --.
//   [Little-Endian bytes]  -> utils: reinterpret (copy only if misaligned) -------------+
//   [ndarray ArrayView1]   -> borrow if contiguous, gather if strided -----------------+
//                                                                                       |
//                                          min_of_slice(&[f64], &MinScanConfig) <------'
//                                                   |
//                                          kernels::find_min_with -> Minimum<f64>
//
// ====================================================================================
pub(crate) mod arrow_impl;
pub mod format;
pub mod stateless_api;

pub use format::ScanSummary;
pub use stateless_api::{min_of_arrow, min_of_le_bytes, min_of_ndarray, min_of_slice, summarize};

#[cfg(test)]
mod tests;
