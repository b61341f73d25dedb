// File: crates/spotgrid-core/src/panel.rs
// Summary: Full panel-grid layout derived from ray trace results and specs.

use crate::error::{LayoutError, Result};
use crate::geometry::{minimal_data_box, pad_box, BoundingBox};
use crate::grid::{calc_num_rows_and_cols, font_size, title_position};
use crate::rays::{results_at_last_surface, results_by_field, results_by_surface};
use crate::specs::sort_system_specs_indexes;
use crate::ticks::{calc_tick_positions, TickOptions, Ticks};
use crate::types::{FieldSpec, LayoutOptions, RayTraceResult, SystemSpec};

/// Layout of a single panel in the grid.
///
/// `axis_box` bounds the axis frame (data box plus axis padding); `view_box`
/// adds the outer view padding around it. Ticks are computed on the axis box.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelLayout {
    pub field_index: usize,
    pub wavelength_index: usize,
    pub row: usize,
    pub col: usize,
    pub axis_box: BoundingBox,
    pub view_box: BoundingBox,
    pub x_ticks: Ticks,
    pub y_ticks: Ticks,
    pub title_position: (f64, f64),
    pub title_font_size: f64,
}

/// A grid of panels, one per (field, wavelength) pair, in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelGrid {
    pub rows: usize,
    pub cols: usize,
    pub panels: Vec<PanelLayout>,
}

impl PanelGrid {
    /// Lay out one panel per (field, wavelength) pair.
    ///
    /// Rows iterate field specs and columns iterate wavelengths, both in
    /// ascending spec-value order. All panels in a row share the minimal data
    /// box of that field's results. Results are taken at `surface_index`, or
    /// at the last traced surface when `None`.
    pub fn compute(
        results: &[RayTraceResult],
        wavelengths: &[SystemSpec],
        field_specs: &[FieldSpec],
        options: &LayoutOptions,
        surface_index: Option<usize>,
    ) -> Result<PanelGrid> {
        if results.is_empty() || wavelengths.is_empty() || field_specs.is_empty() {
            return Err(LayoutError::EmptyInput);
        }

        let (rows, cols) = calc_num_rows_and_cols(wavelengths, field_specs);
        let sorted_wavelengths = sort_system_specs_indexes(wavelengths);
        let sorted_fields = sort_system_specs_indexes(field_specs);

        let selected = match surface_index {
            Some(surface_id) => results_by_surface(results, surface_id),
            None => results_at_last_surface(results),
        };

        let tick_options = TickOptions::default();
        let mut panels = Vec::with_capacity(rows * cols);

        for (row, &field_index) in sorted_fields.iter().enumerate() {
            let field_results = results_by_field(&selected, field_index);
            let data_box = minimal_data_box(&field_results)?;
            let axis_box = pad_box(&data_box, options.axis_box_padding);
            let view_box = pad_box(&axis_box, options.view_box_padding);

            let x_ticks = calc_tick_positions(axis_box.min_x, axis_box.max_x(), &tick_options)?;
            let y_ticks = calc_tick_positions(axis_box.min_y, axis_box.max_y(), &tick_options)?;

            let title_offset = options.title_offset_fraction * view_box.height;
            let title_pos = title_position(&view_box, title_offset);
            let title_size = font_size(&view_box, options.title_font_fraction);

            for (col, &wavelength_index) in sorted_wavelengths.iter().enumerate() {
                panels.push(PanelLayout {
                    field_index,
                    wavelength_index,
                    row,
                    col,
                    axis_box,
                    view_box,
                    x_ticks: x_ticks.clone(),
                    y_ticks: y_ticks.clone(),
                    title_position: title_pos,
                    title_font_size: title_size,
                });
            }
        }

        Ok(PanelGrid { rows, cols, panels })
    }
}
