// File: crates/spotgrid-core/src/ticks.rs
// Summary: Adaptive "nice number" tick position computation for a value range.

use crate::error::{LayoutError, Result};

/// Tick marks computed for one axis range.
///
/// `positions` is ascending and consecutive entries differ by `step`. `min`
/// and `max` are the snapped endpoints, not the caller's input range.
#[derive(Clone, Debug, PartialEq)]
pub struct Ticks {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub positions: Vec<f64>,
}

/// Bounds on how many ticks an axis should carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickOptions {
    pub min_tick_count: usize,
    pub max_tick_count: usize,
}

impl Default for TickOptions {
    fn default() -> Self {
        Self { min_tick_count: 5, max_tick_count: 9 }
    }
}

/// Cap on step refinements; each refinement doubles the tick budget, so any
/// representable range produces enough ticks long before this is reached.
const MAX_REFINEMENTS: usize = 32;

/// Absorbs floating-point rounding when emitting the final tick.
const BOUNDS_EPSILON: f64 = 1e-10;

/// Compute nice tick positions for `[min, max]`.
///
/// The step size is f * 10^n with f in {1, 2, 5, 10}, chosen so that at most
/// `max_tick_count` ticks span the range. When the snapped range yields fewer
/// than `min_tick_count` ticks the tick budget is doubled and the step
/// recomputed, which forces a finer subdivision.
///
/// The snapped endpoints are nudged one step inward when they fall outside
/// the input range; for some step sizes this still leaves an endpoint outside
/// `[min, max]`.
pub fn calc_tick_positions(min: f64, max: f64, options: &TickOptions) -> Result<Ticks> {
    // A degenerate range has no defined step (log10(0)); inverted and NaN
    // ranges are rejected the same way.
    if !(min < max) {
        return Err(LayoutError::InvalidRange { min, max });
    }

    let range = max - min;
    let mut max_tick_count = options.max_tick_count;

    for _ in 0..MAX_REFINEMENTS {
        let rough_step = range / (max_tick_count as f64 - 1.0);
        let nice_step = nice_number(rough_step);

        let mut nice_min = (min / nice_step).floor() * nice_step;
        let mut nice_max = (max / nice_step).ceil() * nice_step;

        // Pull the snapped endpoints back inside the input range, one step at
        // most per end.
        if nice_min < min {
            nice_min += nice_step;
        }
        if nice_max > max {
            nice_max -= nice_step;
        }

        // Signed: a step wider than the range can invert the snapped endpoints.
        let tick_count = ((nice_max - nice_min) / nice_step).round() as i64 + 1;

        if tick_count < options.min_tick_count as i64 {
            max_tick_count *= 2;
            continue;
        }

        let tick_count = tick_count.max(0) as usize;
        let mut positions = Vec::with_capacity(tick_count);
        for i in 0..tick_count {
            let value = nice_min + i as f64 * nice_step;
            if value <= nice_max + BOUNDS_EPSILON {
                positions.push(value);
            }
        }

        return Ok(Ticks { min: nice_min, max: nice_max, step: nice_step, positions });
    }

    Err(LayoutError::TickLimitExceeded { min, max })
}

/// Round a positive value to the nearest nice number (1, 2, 5, or 10 times a
/// power of ten).
pub fn nice_number(value: f64) -> f64 {
    let exponent = value.log10().floor();
    let fraction = value / 10f64.powf(exponent);

    let nice_fraction = if fraction < 1.5 {
        1.0
    } else if fraction < 3.0 {
        2.0
    } else if fraction < 7.0 {
        5.0
    } else {
        10.0
    };

    nice_fraction * 10f64.powf(exponent)
}
