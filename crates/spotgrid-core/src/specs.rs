// File: crates/spotgrid-core/src/specs.rs
// Summary: Ordering of system and field specs by their numeric value.

use crate::types::{FieldSpec, SystemSpec};

/// Anything sortable by a numeric spec value.
pub trait SpecValue {
    fn value(&self) -> f64;
}

impl SpecValue for SystemSpec {
    fn value(&self) -> f64 {
        self.value
    }
}

impl SpecValue for FieldSpec {
    fn value(&self) -> f64 {
        self.value
    }
}

/// Permutation of `0..specs.len()` that orders the specs ascending by value.
///
/// The sort is stable, so equal values keep their original relative order.
/// The input itself is never reordered; panels index into it through the
/// returned permutation.
pub fn sort_system_specs_indexes<S: SpecValue>(specs: &[S]) -> Vec<usize> {
    let mut indexes: Vec<usize> = (0..specs.len()).collect();
    indexes.sort_by(|&a, &b| specs[a].value().total_cmp(&specs[b].value()));
    indexes
}
