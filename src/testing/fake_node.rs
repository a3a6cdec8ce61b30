use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::{Introspectable, Node, RawValue};

use super::reflection_data;

/// An introspectable node whose reflection data is set by the test.
///
/// The data can be replaced while other threads take snapshots, which is
/// how a dispatch node behaves when it keeps specializing during
/// introspection.
#[derive(Debug)]
pub struct FakeNode {
    data: Mutex<RawValue>,
    fetches: AtomicUsize,
}

impl FakeNode {
    pub fn new(data: RawValue) -> Self {
        Self {
            data: Mutex::new(data),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Creates a node from raw records, see [`RecordBuilder`](super::RecordBuilder).
    pub fn with_records(records: impl IntoIterator<Item = RawValue>) -> Self {
        Self::new(reflection_data(records))
    }

    /// Replaces the reflection data returned by subsequent fetches.
    pub fn set_data(&self, data: RawValue) {
        *self.data.lock().unwrap_or_else(PoisonError::into_inner) = data;
    }

    /// Mutates the reflection data in place.
    pub fn update(&self, f: impl FnOnce(&mut RawValue)) {
        f(&mut self.data.lock().unwrap_or_else(PoisonError::into_inner));
    }

    /// Number of times the reflection data was fetched.
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }
}

impl Node for FakeNode {
    fn as_introspectable(&self) -> Option<&dyn Introspectable> {
        Some(self)
    }
}

impl Introspectable for FakeNode {
    fn reflection_data(&self) -> RawValue {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        self.data
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// A node without the introspection capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainNode;

impl Node for PlainNode {}
