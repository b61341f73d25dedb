// File: crates/spotgrid-core/src/rays.rs
// Summary: Selection helpers over ray trace result collections.

use crate::types::{RayTraceResult, RayTraceResults};

/// Results traced at the given wavelength.
pub fn results_by_wavelength(
    results: &[RayTraceResult],
    wavelength_id: usize,
) -> RayTraceResults {
    results
        .iter()
        .filter(|r| r.wavelength_id == wavelength_id)
        .cloned()
        .collect()
}

/// Results traced at the given field.
pub fn results_by_field(results: &[RayTraceResult], field_id: usize) -> RayTraceResults {
    results.iter().filter(|r| r.field_id == field_id).cloned().collect()
}

/// Results pinned to the given surface.
pub fn results_by_surface(results: &[RayTraceResult], surface_id: usize) -> RayTraceResults {
    results
        .iter()
        .filter(|r| r.surface_id == Some(surface_id))
        .cloned()
        .collect()
}

/// Results at the highest surface id present; a missing surface id counts as
/// surface 0.
pub fn results_at_last_surface(results: &[RayTraceResult]) -> RayTraceResults {
    let last = results
        .iter()
        .map(|r| r.surface_id.unwrap_or(0))
        .max()
        .unwrap_or(0);
    results_by_surface(results, last)
}
