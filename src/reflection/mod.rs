//! Snapshots of the specialization state of dispatch nodes.
//!
//! # Overview
//!
//! A dispatch node keeps compact, continuously changing state about its
//! specializations: which ones are active, which were excluded for good, and
//! what each polymorphic cache instance captured. This module fetches that
//! state through the [`Introspectable`](crate::Introspectable) capability,
//! validates it and returns immutable views:
//!
//! - [`find_by_name`] reflects the first specialization with a method name
//! - [`list_all`] reflects every specialization as a [`Snapshot`]
//!
//! The returned views are copies. They do not change when the node keeps
//! executing; call again for fresh data.
//!
//! # Example
//!
//! ```ignore
//! use dispatch_reflection::{find_by_name, is_introspectable, list_all};
//!
//! if is_introspectable(&node) {
//!     let snapshot = list_all(&node)?;
//!     println!("{} specializations", snapshot.len());
//!
//!     if let Some(s) = find_by_name(&node, "doInt")? {
//!         for i in 0..s.instances() {
//!             println!("instance {i}: {:?}", s.cached_data(i)?);
//!         }
//!     }
//! }
//! ```

mod decoder;
mod reflector;
mod snapshot;
mod specialization_view;

pub use reflector::Reflector;
pub use snapshot::Snapshot;
pub use specialization_view::SpecializationView;

use crate::{Node, Result};

/// Reflects the first specialization of `node` with the given method name,
/// using the default [`Config`](crate::Config).
///
/// See [`Reflector::find_by_name`].
pub fn find_by_name(node: &dyn Node, method_name: &str) -> Result<Option<SpecializationView>> {
    Reflector::default().find_by_name(node, method_name)
}

/// Reflects all specializations of `node`, using the default
/// [`Config`](crate::Config).
///
/// See [`Reflector::list_all`].
pub fn list_all(node: &dyn Node) -> Result<Snapshot> {
    Reflector::default().list_all(node)
}
