// File: crates/spotgrid-core/src/types.rs
// Summary: Shared types (ray-trace records, system specs, layout options).

use crate::error::{LayoutError, Result};

/// X/Y coordinates of the intersections between a ray bundle and a surface.
/// Contract: both arrays have the same length.
#[derive(Clone, Debug, PartialEq)]
pub struct RayIntersections {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl RayIntersections {
    /// Try to construct a bundle, enforcing equal coordinate counts.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(LayoutError::MismatchedCoordinates {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Outcome of one ray trace: the intersections for a specific wavelength and
/// field, optionally pinned to a single surface.
#[derive(Clone, Debug, PartialEq)]
pub struct RayTraceResult {
    pub wavelength_id: usize,
    pub field_id: usize,
    pub ray_bundle: RayIntersections,
    pub chief_ray: RayIntersections,
    pub surface_id: Option<usize>,
}

/// A collection of ray trace results, one per (wavelength, field) pair.
pub type RayTraceResults = Vec<RayTraceResult>;

/// A labeled numeric property of the traced system (e.g. a wavelength).
#[derive(Clone, Debug, PartialEq)]
pub struct SystemSpec {
    pub value: f64,
    pub units: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Angle,
    PointSource,
}

/// A source specification: a system spec plus the kind of field it describes.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSpec {
    pub value: f64,
    pub units: String,
    pub kind: FieldKind,
}

/// Fractional paddings and title metrics for one panel.
/// Contract: all fields are non-negative fractions of the relevant box size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutOptions {
    /// Fraction of the axis box's side occupied by padding around the data,
    /// per side.
    pub axis_box_padding: f64,
    /// Fraction of the view box's side occupied by padding around the axis,
    /// per side.
    pub view_box_padding: f64,
    /// Title offset above the view box, as a fraction of the view box side.
    pub title_offset_fraction: f64,
    /// Title font size as a fraction of the view box diagonal.
    pub title_font_fraction: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            axis_box_padding: 0.05,
            view_box_padding: 0.1,
            title_offset_fraction: 0.05,
            title_font_fraction: 0.03,
        }
    }
}
