//! Helpers for testing introspection of dispatch nodes.
//!
//! Enable with the `testing` feature:
//!
//! ```toml
//! [dev-dependencies]
//! dispatch-reflection = { version = "0.1", features = ["testing"] }
//! ```
//!
//! # Example
//!
//! ```ignore
//! use dispatch_reflection::testing::{FakeNode, RecordBuilder};
//!
//! let node = FakeNode::with_records([
//!     RecordBuilder::new("doInt").active().instance([RawValue::from(1)]).build(),
//!     RecordBuilder::new("doGeneric").excluded().build(),
//! ]);
//!
//! let snapshot = dispatch_reflection::list_all(&node)?;
//! assert_eq!(snapshot.len(), 2);
//! ```

mod fake_node;
mod record_builder;

pub use fake_node::{FakeNode, PlainNode};
pub use record_builder::{RecordBuilder, reflection_data};
