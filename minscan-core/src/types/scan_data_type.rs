//! This module defines the canonical set of Arrow input types accepted by the
//! bridge.

use crate::error::MinScanError;
use arrow::datatypes::DataType as ArrowDataType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An Arrow primitive type that can be widened to `f64` for scanning.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScanDataType {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
}

impl ScanDataType {
    /// Converts an Arrow `DataType` into a `ScanDataType`.
    pub fn from_arrow_type(arrow_type: &ArrowDataType) -> Result<Self, MinScanError> {
        match arrow_type {
            ArrowDataType::Int8 => Ok(Self::Int8),
            ArrowDataType::Int16 => Ok(Self::Int16),
            ArrowDataType::Int32 => Ok(Self::Int32),
            ArrowDataType::Int64 => Ok(Self::Int64),
            ArrowDataType::UInt8 => Ok(Self::UInt8),
            ArrowDataType::UInt16 => Ok(Self::UInt16),
            ArrowDataType::UInt32 => Ok(Self::UInt32),
            ArrowDataType::UInt64 => Ok(Self::UInt64),
            ArrowDataType::Float32 => Ok(Self::Float32),
            ArrowDataType::Float64 => Ok(Self::Float64),
            dt => Err(MinScanError::UnsupportedType(format!(
                "Cannot scan Arrow type {:?} for a minimum",
                dt
            ))),
        }
    }

    /// Converts a `ScanDataType` back into an Arrow `DataType`.
    pub fn to_arrow_type(&self) -> ArrowDataType {
        match self {
            Self::Int8 => ArrowDataType::Int8,
            Self::Int16 => ArrowDataType::Int16,
            Self::Int32 => ArrowDataType::Int32,
            Self::Int64 => ArrowDataType::Int64,
            Self::UInt8 => ArrowDataType::UInt8,
            Self::UInt16 => ArrowDataType::UInt16,
            Self::UInt32 => ArrowDataType::UInt32,
            Self::UInt64 => ArrowDataType::UInt64,
            Self::Float32 => ArrowDataType::Float32,
            Self::Float64 => ArrowDataType::Float64,
        }
    }

    /// Returns `true` if the array must be cast before it can be scanned.
    pub fn needs_cast(&self) -> bool {
        !matches!(self, Self::Float64)
    }

    /// Returns `true` if widening to `f64` can round values (64-bit integers
    /// beyond 2^53).
    pub fn is_lossy_to_f64(&self) -> bool {
        matches!(self, Self::Int64 | Self::UInt64)
    }
}

impl fmt::Display for ScanDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Matches the Arrow `DataType` string representation.
        write!(f, "{:?}", self)
    }
}
