//! Byte-buffer helpers shared by the bridge and the FFI layer.
//!
//! All multi-byte interpretations assume Little-Endian, native to every target
//! the library ships for.

use std::borrow::Cow;

use crate::error::MinScanError;

/// Reinterprets a byte buffer as `f64` values.
///
/// Borrows when `bytes` is suitably aligned and copies otherwise, since
/// buffers handed over from Python carry no alignment guarantee.
pub fn le_bytes_to_f64(bytes: &[u8]) -> Result<Cow<'_, [f64]>, MinScanError> {
    let width = std::mem::size_of::<f64>();
    if bytes.len() % width != 0 {
        return Err(MinScanError::BufferMismatch(bytes.len(), width));
    }
    match bytemuck::try_cast_slice::<u8, f64>(bytes) {
        Ok(slice) => Ok(Cow::Borrowed(slice)),
        Err(_) => Ok(Cow::Owned(bytemuck::pod_collect_to_vec(bytes))),
    }
}

/// Converts a slice of `f64` into its Little-Endian byte representation.
pub fn f64_slice_to_bytes(data: &[f64]) -> Vec<u8> {
    bytemuck::cast_slice(data).to_vec()
}
