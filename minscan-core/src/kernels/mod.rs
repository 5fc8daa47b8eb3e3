//! This module is the public API of the pure, stateless minimum kernels.
//!
//! It owns the `Minimum` result type and routes every call to the scan kernel
//! selected by the caller's `NanPolicy`. The only failure is an empty input.

use num_traits::Float;
use serde::Serialize;

use crate::config::{MinScanConfig, NanPolicy};
use crate::error::MinScanError;

pub mod scan;

/// The result of one scan: where the first minimum sits and what it is.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Minimum<T> {
    pub index: usize,
    pub value: T,
}

//==================================================================================
// 1. Policy-Aware API
//==================================================================================

/// Finds the first minimal element of `data` under `config`.
pub fn find_min_with<T: Float>(
    data: &[T],
    config: &MinScanConfig,
) -> Result<Minimum<T>, MinScanError> {
    let found = match config.nan_policy {
        NanPolicy::Ignore => scan::first_min_ignoring_nan(data),
        NanPolicy::Propagate => scan::first_min_propagating_nan(data),
    };
    found.ok_or(MinScanError::EmptyInput)
}

pub fn find_min_value_with(data: &[f64], config: &MinScanConfig) -> Result<f64, MinScanError> {
    find_min_with(data, config).map(|m| m.value)
}

pub fn find_min_index_with(data: &[f64], config: &MinScanConfig) -> Result<usize, MinScanError> {
    find_min_with(data, config).map(|m| m.index)
}

//==================================================================================
// 2. Default-Policy API
//==================================================================================

/// Finds the first minimal element of `data`, ignoring NaN.
pub fn find_min(data: &[f64]) -> Result<Minimum<f64>, MinScanError> {
    find_min_with(data, &MinScanConfig::default())
}

/// Returns the smallest element of `data`.
///
/// # Errors
/// Returns `MinScanError::EmptyInput` if `data` is empty.
pub fn find_min_value(data: &[f64]) -> Result<f64, MinScanError> {
    find_min(data).map(|m| m.value)
}

/// Returns the zero-based position of the first smallest element of `data`.
///
/// # Errors
/// Returns `MinScanError::EmptyInput` if `data` is empty.
pub fn find_min_index(data: &[f64]) -> Result<usize, MinScanError> {
    find_min(data).map(|m| m.index)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_documented_scenarios() {
        let cases: [(&[f64], f64, usize); 4] = [
            (&[3.0, 1.0, 4.0, 1.0, 5.0][..], 1.0, 1),
            (&[-2.5][..], -2.5, 0),
            (&[7.0, 7.0, 7.0][..], 7.0, 0),
            (&[2.0, -1.0, -1.0, 0.0][..], -1.0, 1),
        ];
        for (data, value, index) in cases {
            assert_eq!(find_min_value(data).unwrap(), value, "value of {:?}", data);
            assert_eq!(find_min_index(data).unwrap(), index, "index of {:?}", data);
        }
    }

    #[test]
    fn test_empty_input_fails_for_both_operations() {
        assert!(matches!(find_min_value(&[]), Err(MinScanError::EmptyInput)));
        assert!(matches!(find_min_index(&[]), Err(MinScanError::EmptyInput)));
        let propagate = MinScanConfig::with_nan_policy(NanPolicy::Propagate);
        assert!(matches!(
            find_min_with::<f64>(&[], &propagate),
            Err(MinScanError::EmptyInput)
        ));
    }

    #[test]
    fn test_policy_selects_kernel() {
        let data = [f64::NAN, 2.0, 1.0];
        assert_eq!(find_min_index(&data).unwrap(), 2);

        let propagate = MinScanConfig::with_nan_policy(NanPolicy::Propagate);
        assert_eq!(find_min_index_with(&data, &propagate).unwrap(), 0);
        assert!(find_min_value_with(&data, &propagate).unwrap().is_nan());
    }

    #[test]
    fn test_scan_properties_on_random_sequences() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let len = rng.random_range(1..64);
            // A small value range forces plenty of ties.
            let data: Vec<f64> = (0..len)
                .map(|_| rng.random_range(-5i32..5) as f64 * 0.5)
                .collect();

            let m = find_min(&data).unwrap();
            assert!(data.iter().all(|&x| m.value <= x));
            assert_eq!(data[m.index], m.value);
            let first = data.iter().position(|&x| x == m.value).unwrap();
            assert_eq!(m.index, first);

            let mut shuffled = data.clone();
            shuffled.shuffle(&mut rng);
            assert_eq!(find_min_value(&shuffled).unwrap(), m.value);
        }
    }

    #[test]
    fn test_single_element() {
        let m = find_min(&[42.0]).unwrap();
        assert_eq!(m, Minimum { index: 0, value: 42.0 });
    }
}
