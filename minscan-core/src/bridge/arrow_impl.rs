// In: src/bridge/arrow_impl.rs

//! Marshals Arrow arrays into the dense `f64` form the kernels scan.

use std::borrow::Cow;

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type};
use log::{debug, warn};

use crate::error::MinScanError;
use crate::null_handling::bitmap::nulls_to_nan;
use crate::types::ScanDataType;

/// Either a borrowed view of the caller's Float64 array or a freshly cast one.
pub(crate) enum Float64Input<'a> {
    Borrowed(&'a dyn Array),
    Cast(ArrayRef),
}

impl<'a> Float64Input<'a> {
    /// Validates the array type and casts it to Float64 when needed.
    pub(crate) fn from_array(array: &'a dyn Array) -> Result<Self, MinScanError> {
        let scan_type = ScanDataType::from_arrow_type(array.data_type())?;
        if !scan_type.needs_cast() {
            return Ok(Float64Input::Borrowed(array));
        }

        if scan_type.is_lossy_to_f64() {
            warn!(
                "Widening {} to Float64 may round values beyond 2^53; ties may change",
                scan_type
            );
        }
        debug!("Casting {} array of len {} to Float64", scan_type, array.len());
        let casted = cast(array, &DataType::Float64)?;
        Ok(Float64Input::Cast(casted))
    }

    fn as_array(&self) -> &dyn Array {
        match self {
            Float64Input::Borrowed(array) => *array,
            Float64Input::Cast(array) => array.as_ref(),
        }
    }

    /// Returns the values with nulls read as NaN.
    pub(crate) fn values(&self) -> Result<Cow<'_, [f64]>, MinScanError> {
        let typed = self
            .as_array()
            .as_primitive_opt::<Float64Type>()
            .ok_or_else(|| {
                MinScanError::UnsupportedType(format!(
                    "Expected a Float64 array after casting, found {:?}",
                    self.as_array().data_type()
                ))
            })?;
        Ok(nulls_to_nan(typed))
    }
}
