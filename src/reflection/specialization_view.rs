use std::fmt;
use std::sync::Arc;

use crate::{Error, RawValue, Result, SpecializationState};

/// Reflected state of one specialization of a dispatch node.
///
/// Obtained from [`find_by_name`](crate::find_by_name) or as an element of a
/// [`Snapshot`](crate::Snapshot). A view is a frozen copy: it is not updated
/// when the node keeps executing and holds no reference back to the node.
///
/// # Instances
///
/// Each instance is one polymorphic inline-cache entry of the specialization
/// together with the guard values it captured. An active specialization that
/// caches nothing is reported as a single instance with no cached data, an
/// inactive one without cached data has no instances.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpecializationView {
    method_name: Arc<str>,
    state: SpecializationState,
    cached_data: Box<[Box<[RawValue]>]>,
}

impl SpecializationView {
    pub(crate) fn new(
        method_name: Arc<str>,
        state: SpecializationState,
        cached_data: Vec<Box<[RawValue]>>,
    ) -> Self {
        Self {
            method_name,
            state,
            cached_data: cached_data.into_boxed_slice(),
        }
    }

    /// Method name of the specialization.
    ///
    /// Not necessarily unique within a node.
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    pub fn state(&self) -> SpecializationState {
        self.state
    }

    /// Returns `true` if the specialization was active when the snapshot was taken.
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Returns `true` if the specialization was excluded when the snapshot was taken.
    pub fn is_excluded(&self) -> bool {
        self.state.is_excluded()
    }

    /// Number of active instances of this specialization.
    pub fn instances(&self) -> usize {
        self.cached_data.len()
    }

    /// Cached guard values of the instance at `index`, in capture order.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] unless `index < self.instances()`.
    pub fn cached_data(&self, index: usize) -> Result<&[RawValue]> {
        self.cached_data
            .get(index)
            .map(|values| &values[..])
            .ok_or(Error::IndexOutOfRange {
                index,
                instances: self.cached_data.len(),
            })
    }

    /// Iterates over the cached data of every instance.
    pub fn cached_instances(&self) -> impl ExactSizeIterator<Item = &[RawValue]> {
        self.cached_data.iter().map(|values| &values[..])
    }
}

impl fmt::Display for SpecializationView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] x{}",
            self.method_name,
            self.state,
            self.cached_data.len()
        )
    }
}
