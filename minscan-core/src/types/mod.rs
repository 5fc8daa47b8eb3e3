//! This module defines the strongly-typed data representations used at the
//! Arrow boundary.
//!
//! The scan core only ever sees `f64`. `ScanDataType` names the Arrow primitive
//! types the bridge is willing to widen into `f64` before scanning.

pub mod scan_data_type;

// Re-export the main type(s) for easier access.
pub use scan_data_type::ScanDataType;
