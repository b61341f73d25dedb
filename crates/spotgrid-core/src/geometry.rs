// File: crates/spotgrid-core/src/geometry.rs
// Summary: Square bounding boxes derived from ray intersection data.

use crate::error::{LayoutError, Result};
use crate::types::RayTraceResult;

/// Axis-aligned bounding box given by its minimum corner and extent.
/// Contract: `width` and `height` are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub const fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self { min_x, min_y, width, height }
    }

    pub fn max_x(&self) -> f64 {
        self.min_x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.min_y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.min_x + self.width / 2.0, self.min_y + self.height / 2.0)
    }

    pub fn diagonal(&self) -> f64 {
        (self.width * self.width + self.height * self.height).sqrt()
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x() && y >= self.min_y && y <= self.max_y()
    }
}

/// Smallest square box centered on the given rectangle that contains it.
/// The caller must supply `min <= max` on both axes.
pub fn force_square_box(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<BoundingBox> {
    if max_x < min_x {
        return Err(LayoutError::InvalidRange { min: min_x, max: max_x });
    }
    if max_y < min_y {
        return Err(LayoutError::InvalidRange { min: min_y, max: max_y });
    }

    let center_x = (min_x + max_x) / 2.0;
    let center_y = (min_y + max_y) / 2.0;
    let half_size = (max_x - min_x).max(max_y - min_y) / 2.0;

    Ok(BoundingBox::new(
        center_x - half_size,
        center_y - half_size,
        2.0 * half_size,
        2.0 * half_size,
    ))
}

/// Square bounding box of the ray bundle intersections of one result.
pub fn data_box(result: &RayTraceResult) -> Result<BoundingBox> {
    let bundle = &result.ray_bundle;
    if bundle.is_empty() {
        return Err(LayoutError::EmptyInput);
    }

    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for (&x, &y) in bundle.x.iter().zip(&bundle.y) {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    force_square_box(min_x, min_y, max_x, max_y)
}

/// Smallest square box bounding the ray intersections of all the results.
pub fn minimal_data_box(results: &[RayTraceResult]) -> Result<BoundingBox> {
    if results.is_empty() {
        return Err(LayoutError::EmptyInput);
    }

    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for result in results {
        let b = data_box(result)?;
        min_x = min_x.min(b.min_x);
        max_x = max_x.max(b.max_x());
        min_y = min_y.min(b.min_y);
        max_y = max_y.max(b.max_y());
    }

    force_square_box(min_x, min_y, max_x, max_y)
}

/// Pad a box about its own center.
///
/// `padding` is the fraction of the padded box's size spanned by margin on
/// each side: 0.05 leaves 10% of the width and height as padding and 90% for
/// the data.
pub fn pad_box(box_: &BoundingBox, padding: f64) -> BoundingBox {
    let (center_x, center_y) = box_.center();
    let factor = 1.0 + 2.0 * padding;

    BoundingBox::new(
        center_x - factor * box_.width / 2.0,
        center_y - factor * box_.height / 2.0,
        factor * box_.width,
        factor * box_.height,
    )
}
