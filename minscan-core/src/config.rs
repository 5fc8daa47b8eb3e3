// In: src/config.rs

//! The single source of truth for minscan configuration.
//!
//! `MinScanConfig` is created once at the application boundary (a Rust caller,
//! a JSON string, or the keyword arguments of a Python call) and then passed
//! down by reference to the bridge and the kernels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MinScanError;

//==================================================================================
// I. Core Configuration Enums
//==================================================================================

/// Decides how NaN elements take part in a minimum scan.
///
/// Neither policy ever fails: NaN is data, not an error.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NanPolicy {
    /// **Default:** NaN is never smaller than any value, itself included, and
    /// never anchors the scan. A NaN is only returned when every element is NaN,
    /// in which case the result is index 0.
    #[default]
    Ignore,

    /// The first NaN encountered is the result. Matches R's `min()` on data
    /// containing `NaN`/`NA`.
    Propagate,
}

impl NanPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            NanPolicy::Ignore => "ignore",
            NanPolicy::Propagate => "propagate",
        }
    }
}

impl FromStr for NanPolicy {
    type Err = MinScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ignore" => Ok(NanPolicy::Ignore),
            "propagate" => Ok(NanPolicy::Propagate),
            other => Err(MinScanError::InvalidConfig(format!(
                "Invalid nan_policy '{}'. Must be 'ignore' or 'propagate'.",
                other
            ))),
        }
    }
}

impl fmt::Display for NanPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//==================================================================================
// II. The Unified MinScanConfig
//==================================================================================

/// The unified configuration for every scan entry point.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct MinScanConfig {
    /// How NaN (and Arrow nulls, which are read as NaN) are treated.
    #[serde(default)]
    pub nan_policy: NanPolicy,
}

impl MinScanConfig {
    pub fn with_nan_policy(nan_policy: NanPolicy) -> Self {
        Self { nan_policy }
    }

    /// Parses a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, MinScanError> {
        Ok(serde_json::from_str(json)?)
    }
}
