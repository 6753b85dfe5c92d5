use crate::error::{GeometryError, Result};

/// Concatenates flat `x, y, z` coordinate buffers, dropping repeated points.
///
/// Points keep first-seen order across all buffers. A triple is dropped when
/// an earlier kept triple compares equal on all three coordinates, so NaN
/// triples are never merged.
///
/// # Errors
///
/// Returns an error if any buffer length is not a multiple of three. No
/// output is produced in that case.
pub fn merge_points(buffers: &[&[f64]]) -> Result<Vec<f64>> {
    if let Some(bad) = buffers.iter().find(|b| b.len() % 3 != 0) {
        return Err(GeometryError::IncompleteTriple { len: bad.len() }.into());
    }

    let mut out: Vec<f64> = Vec::with_capacity(buffers.iter().map(|b| b.len()).sum());
    for triple in buffers.iter().flat_map(|b| b.chunks_exact(3)) {
        if !out.chunks_exact(3).any(|kept| kept == triple) {
            out.extend_from_slice(triple);
        }
    }
    Ok(out)
}
