use super::*;
use crate::config::{MinScanConfig, NanPolicy};
use crate::error::MinScanError;
use crate::kernels::Minimum;
use crate::utils::f64_slice_to_bytes;
use arrow::array::{Float32Array, Float64Array, Int32Array, StringArray, UInt64Array};
use ndarray::{s, Array1};

fn propagate() -> MinScanConfig {
    MinScanConfig::with_nan_policy(NanPolicy::Propagate)
}

#[test]
fn test_all_entry_points_agree() {
    let values = vec![2.0, -1.0, -1.0, 0.0];
    let config = MinScanConfig::default();
    let expected = Minimum {
        index: 1,
        value: -1.0,
    };

    assert_eq!(min_of_slice(&values, &config).unwrap(), expected);
    assert_eq!(
        min_of_ndarray(Array1::from(values.clone()).view(), &config).unwrap(),
        expected
    );
    assert_eq!(
        min_of_le_bytes(&f64_slice_to_bytes(&values), &config).unwrap(),
        expected
    );
    assert_eq!(
        min_of_arrow(&Float64Array::from(values), &config).unwrap(),
        expected
    );
}

#[test]
fn test_empty_input_from_every_entry_point() {
    let config = MinScanConfig::default();
    let empty: Vec<f64> = Vec::new();

    assert!(matches!(min_of_slice(&empty, &config), Err(MinScanError::EmptyInput)));
    assert!(matches!(
        min_of_ndarray(Array1::from(empty.clone()).view(), &config),
        Err(MinScanError::EmptyInput)
    ));
    assert!(matches!(min_of_le_bytes(&[], &config), Err(MinScanError::EmptyInput)));
    assert!(matches!(
        min_of_arrow(&Float64Array::from(empty.clone()), &config),
        Err(MinScanError::EmptyInput)
    ));
    assert!(matches!(summarize(&empty, &config), Err(MinScanError::EmptyInput)));
}

#[test]
fn test_strided_ndarray_view() {
    let array = Array1::from(vec![9.0, 5.0, 8.0, 1.0, 7.0, 0.5]);
    // Every other element: [9.0, 8.0, 7.0]
    let strided = array.slice(s![..;2]);
    assert!(strided.as_slice().is_none());

    let m = min_of_ndarray(strided, &MinScanConfig::default()).unwrap();
    assert_eq!(m, Minimum { index: 2, value: 7.0 });
}

#[test]
fn test_bytes_with_bad_length() {
    let result = min_of_le_bytes(&[0u8; 12], &MinScanConfig::default());
    assert!(matches!(result, Err(MinScanError::BufferMismatch(12, 8))));
}

#[test]
fn test_arrow_nulls_follow_nan_policy() {
    let array = Float64Array::from(vec![None, Some(2.0), Some(1.0)]);

    let m = min_of_arrow(&array, &MinScanConfig::default()).unwrap();
    assert_eq!(m, Minimum { index: 2, value: 1.0 });

    let m = min_of_arrow(&array, &propagate()).unwrap();
    assert_eq!(m.index, 0);
    assert!(m.value.is_nan());
}

#[test]
fn test_arrow_all_null() {
    let array = Float64Array::from(vec![None, None]);
    let m = min_of_arrow(&array, &MinScanConfig::default()).unwrap();
    assert_eq!(m.index, 0);
    assert!(m.value.is_nan());
}

#[test]
fn test_arrow_integer_input_is_widened() {
    let array = Int32Array::from(vec![Some(7), None, Some(-3), Some(-3)]);
    let m = min_of_arrow(&array, &MinScanConfig::default()).unwrap();
    assert_eq!(m, Minimum { index: 2, value: -3.0 });

    let array = UInt64Array::from(vec![10u64, 4, 4, 9]);
    let m = min_of_arrow(&array, &MinScanConfig::default()).unwrap();
    assert_eq!(m, Minimum { index: 1, value: 4.0 });
}

#[test]
fn test_arrow_float32_nan_is_preserved_by_cast() {
    let array = Float32Array::from(vec![1.5, f32::NAN, 0.25]);

    let m = min_of_arrow(&array, &MinScanConfig::default()).unwrap();
    assert_eq!(m, Minimum { index: 2, value: 0.25 });

    let m = min_of_arrow(&array, &propagate()).unwrap();
    assert_eq!(m.index, 1);
}

#[test]
fn test_arrow_sliced_array_reports_slice_positions() {
    let array = Float64Array::from(vec![0.0, 5.0, 3.0, 4.0]);
    let sliced = array.slice(1, 3);
    let m = min_of_arrow(&sliced, &MinScanConfig::default()).unwrap();
    assert_eq!(m, Minimum { index: 1, value: 3.0 });
}

#[test]
fn test_arrow_rejects_strings() {
    let array = StringArray::from(vec!["a", "b"]);
    let result = min_of_arrow(&array, &MinScanConfig::default());
    assert!(matches!(result, Err(MinScanError::UnsupportedType(_))));
}

#[test]
fn test_summary_serializes_to_json() {
    let summary = summarize(&[3.0, 1.0], &MinScanConfig::default()).unwrap();
    let json = serde_json::to_value(summary).unwrap();
    assert_eq!(json["index"], 1);
    assert_eq!(json["value"], 1.0);
    assert_eq!(json["len"], 2);
    assert_eq!(json["nan_count"], 0);
}
