//! This module contains the pure, stateless linear-scan kernels that locate the
//! first minimal element of a slice.
//!
//! Both kernels make exactly one left-to-right pass with O(1) extra space and
//! compare with a strict `<`, so a later element equal to the tracked minimum
//! never replaces it. `-0.0` and `0.0` compare equal under IEEE-754 and are
//! therefore resolved by position like any other tie.

use num_traits::Float;

use super::Minimum;

/// Scans `data` treating NaN as larger than everything, itself included.
///
/// A leading NaN does not anchor the scan: the first non-NaN element replaces it.
/// Returns `None` only for an empty slice.
pub fn first_min_ignoring_nan<T: Float>(data: &[T]) -> Option<Minimum<T>> {
    let mut iter = data.iter().copied().enumerate();
    let (index, value) = iter.next()?;

    Some(iter.fold(Minimum { index, value }, |best, (i, v)| {
        if v < best.value || (best.value.is_nan() && !v.is_nan()) {
            Minimum { index: i, value: v }
        } else {
            best
        }
    }))
}

/// Scans `data` stopping at the first NaN, which becomes the result.
///
/// Returns `None` only for an empty slice.
pub fn first_min_propagating_nan<T: Float>(data: &[T]) -> Option<Minimum<T>> {
    let (&first, rest) = data.split_first()?;
    let mut best = Minimum {
        index: 0,
        value: first,
    };
    if first.is_nan() {
        return Some(best);
    }

    for (offset, &v) in rest.iter().enumerate() {
        if v.is_nan() {
            return Some(Minimum {
                index: offset + 1,
                value: v,
            });
        }
        if v < best.value {
            best = Minimum {
                index: offset + 1,
                value: v,
            };
        }
    }
    Some(best)
}

/// Counts the NaN elements of `data`.
pub fn count_nan<T: Float>(data: &[T]) -> usize {
    data.iter().filter(|v| v.is_nan()).count()
}
