// File: crates/spotgrid-core/src/lib.rs
// Summary: Core library entry point; exports the layout and tick API.

pub mod axis;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod panel;
pub mod rays;
pub mod specs;
pub mod ticks;
pub mod types;

pub use axis::{tick_segments, AxisOptions, AxisSide, TickSegment};
pub use error::{LayoutError, Result};
pub use geometry::{data_box, force_square_box, minimal_data_box, pad_box, BoundingBox};
pub use grid::{calc_num_rows_and_cols, font_size, title_position};
pub use panel::{PanelGrid, PanelLayout};
pub use rays::{
    results_at_last_surface, results_by_field, results_by_surface, results_by_wavelength,
};
pub use specs::{sort_system_specs_indexes, SpecValue};
pub use ticks::{calc_tick_positions, nice_number, TickOptions, Ticks};
pub use types::{
    FieldKind, FieldSpec, LayoutOptions, RayIntersections, RayTraceResult, RayTraceResults,
    SystemSpec,
};
