// In: src/bridge/format.rs

//! Defines the public result structures handed back across the bridge.

use serde::Serialize;

/// The public-facing struct for scan analysis results, returned by `summarize`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ScanSummary {
    /// Zero-based position of the first minimum.
    pub index: usize,
    /// The minimum itself; NaN only when the policy lets a NaN win.
    pub value: f64,
    /// Number of elements scanned.
    pub len: usize,
    /// Number of NaN elements (Arrow nulls included) in the input.
    pub nan_count: usize,
}
