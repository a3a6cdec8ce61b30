//! Dispatch Reflection - read-only introspection of specializing nodes
//!
//! Adaptive interpreters rewrite their dispatch nodes as they observe operand
//! shapes, switching between specializations and growing polymorphic inline
//! caches. This crate takes a point-in-time snapshot of that state from any
//! node implementing [`Introspectable`] and presents it as validated,
//! immutable [`SpecializationView`]s.
//!
//! See `demos/inline_cache.rs`.

mod config;
mod error;
mod node;
mod raw_value;
mod reflection;
mod state;

#[cfg(feature = "testing")]
pub mod testing;

pub use config::Config;
pub use error::{Corruption, Error};
pub use node::{INTROSPECTABLE, Introspectable, Node, is_introspectable};
pub use raw_value::RawValue;
pub use reflection::{Reflector, Snapshot, SpecializationView, find_by_name, list_all};
pub use state::SpecializationState;

pub type Result<T = ()> = std::result::Result<T, Error>;
