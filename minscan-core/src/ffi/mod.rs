//! The Foreign Function Interface for the minscan library. It exposes the scan
//! to the Python host; see `python.rs`.

pub mod python;
