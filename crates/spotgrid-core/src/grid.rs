// File: crates/spotgrid-core/src/grid.rs
// Summary: Panel grid dimensions and title/font placement helpers.

use crate::geometry::BoundingBox;
use crate::types::{FieldSpec, SystemSpec};

/// Grid dimensions for one panel per (field, wavelength) pair: rows follow
/// field specs, columns follow wavelengths.
pub fn calc_num_rows_and_cols(
    wavelengths: &[SystemSpec],
    field_specs: &[FieldSpec],
) -> (usize, usize) {
    (field_specs.len(), wavelengths.len())
}

/// Center position of a title placed `title_offset` above the box's minimum
/// edge.
pub fn title_position(box_: &BoundingBox, title_offset: f64) -> (f64, f64) {
    (box_.min_x + box_.width / 2.0, box_.min_y + title_offset)
}

/// Font size as a fraction of the box diagonal.
pub fn font_size(box_: &BoundingBox, fraction: f64) -> f64 {
    fraction * box_.diagonal()
}
