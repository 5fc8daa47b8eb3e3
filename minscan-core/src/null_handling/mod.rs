//! Validity handling at the Arrow boundary.
//!
//! The scan kernels work on dense `&[f64]`. Arrow nulls are folded into that
//! representation as NaN, the same way R stores `NA_real_`, so the configured
//! `NanPolicy` decides their fate and every index still refers to the original
//! row.

pub mod bitmap;
