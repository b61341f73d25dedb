// File: crates/spotgrid-core/src/axis.rs
// Summary: Axis sides and inward tick-mark segments along a box edge.

use std::fmt;
use std::str::FromStr;

use crate::error::{LayoutError, Result};
use crate::geometry::BoundingBox;
use crate::ticks::{calc_tick_positions, TickOptions};

/// Edge of a bounding box that an axis runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSide {
    Top,
    Bottom,
    Left,
    Right,
}

impl AxisSide {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AxisSide::Top => "top",
            AxisSide::Bottom => "bottom",
            AxisSide::Left => "left",
            AxisSide::Right => "right",
        }
    }
}

impl fmt::Display for AxisSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AxisSide {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "top" => Ok(AxisSide::Top),
            "bottom" => Ok(AxisSide::Bottom),
            "left" => Ok(AxisSide::Left),
            "right" => Ok(AxisSide::Right),
            other => Err(LayoutError::InvalidSide { side: other.to_string() }),
        }
    }
}

/// Numeric axis options; stroke styling belongs to the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisOptions {
    /// Tick length as a fraction of the box diagonal.
    pub fractional_tick_length: f64,
    pub ticks: TickOptions,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self { fractional_tick_length: 0.01, ticks: TickOptions::default() }
    }
}

/// One tick mark as a line segment from the box edge into its interior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Tick-mark segments along one edge of `box_`, pointing inward.
///
/// Horizontal edges carry ticks at nice positions over `[min_x, max_x]`,
/// vertical edges over `[min_y, max_y]`.
pub fn tick_segments(
    box_: &BoundingBox,
    side: AxisSide,
    options: &AxisOptions,
) -> Result<Vec<TickSegment>> {
    let tick_length = box_.diagonal() * options.fractional_tick_length;

    let segments = match side {
        AxisSide::Top => {
            let ticks = calc_tick_positions(box_.min_x, box_.max_x(), &options.ticks)?;
            ticks
                .positions
                .iter()
                .map(|&pos| TickSegment {
                    x1: pos,
                    y1: box_.min_y,
                    x2: pos,
                    y2: box_.min_y + tick_length,
                })
                .collect()
        }
        AxisSide::Bottom => {
            let ticks = calc_tick_positions(box_.min_x, box_.max_x(), &options.ticks)?;
            ticks
                .positions
                .iter()
                .map(|&pos| TickSegment {
                    x1: pos,
                    y1: box_.max_y(),
                    x2: pos,
                    y2: box_.max_y() - tick_length,
                })
                .collect()
        }
        AxisSide::Left => {
            let ticks = calc_tick_positions(box_.min_y, box_.max_y(), &options.ticks)?;
            ticks
                .positions
                .iter()
                .map(|&pos| TickSegment {
                    x1: box_.min_x,
                    y1: pos,
                    x2: box_.min_x + tick_length,
                    y2: pos,
                })
                .collect()
        }
        AxisSide::Right => {
            let ticks = calc_tick_positions(box_.min_y, box_.max_y(), &options.ticks)?;
            ticks
                .positions
                .iter()
                .map(|&pos| TickSegment {
                    x1: box_.max_x(),
                    y1: pos,
                    x2: box_.max_x() - tick_length,
                    y2: pos,
                })
                .collect()
        }
    };

    Ok(segments)
}
