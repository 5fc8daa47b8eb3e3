use std::borrow::Cow;

use arrow::array::{Array, Float64Array};

/// Returns the values of `array` with every null slot replaced by NaN.
///
/// Borrows the values buffer when the array has no nulls.
pub fn nulls_to_nan(array: &Float64Array) -> Cow<'_, [f64]> {
    if array.null_count() == 0 {
        return Cow::Borrowed(&array.values()[..]);
    }
    Cow::Owned(array.iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}
