use std::ops::Deref;
use std::sync::Arc;

use super::SpecializationView;

/// Point-in-time view of every specialization declared by a node.
///
/// Preserves the declaration order of the node, which is also the order used
/// to break ties between specializations sharing a method name.
///
/// A snapshot is immutable and cheap to clone; clones share the same
/// storage and can be handed to other threads freely. Two snapshots taken
/// from an unchanged node compare equal but never share storage.
///
/// # Example
///
/// ```ignore
/// let snapshot = dispatch_reflection::list_all(&node)?;
/// for s in &snapshot {
///     println!("{}: active={} excluded={} instances={}",
///         s.method_name(),
///         s.is_active(),
///         s.is_excluded(),
///         s.instances(),
///     );
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Snapshot {
    specializations: Arc<[SpecializationView]>,
}

impl Snapshot {
    pub(crate) fn new(specializations: Vec<SpecializationView>) -> Self {
        Self {
            specializations: specializations.into(),
        }
    }

    /// Returns the first specialization with the given method name.
    pub fn find(&self, method_name: &str) -> Option<&SpecializationView> {
        self.specializations
            .iter()
            .find(|s| s.method_name() == method_name)
    }

    pub fn as_slice(&self) -> &[SpecializationView] {
        &self.specializations
    }

    /// Returns `true` if both snapshots share the same storage, i.e. one is a
    /// clone of the other.
    pub fn ptr_eq(&self, other: &Snapshot) -> bool {
        Arc::ptr_eq(&self.specializations, &other.specializations)
    }

    /// Renders the snapshot as a JSON array.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Deref for Snapshot {
    type Target = [SpecializationView];

    fn deref(&self) -> &Self::Target {
        &self.specializations
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a SpecializationView;
    type IntoIter = std::slice::Iter<'a, SpecializationView>;

    fn into_iter(self) -> Self::IntoIter {
        self.specializations.iter()
    }
}
