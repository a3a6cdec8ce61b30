use crate::RawValue;

/// Name of the capability a node must expose to be introspected.
///
/// Reported in [`Error::NotIntrospectable`](crate::Error::NotIntrospectable).
pub const INTROSPECTABLE: &str = "Introspectable";

/// A node of an adaptive execution graph.
///
/// Nodes opt into introspection by overriding [`Node::as_introspectable`].
/// The default implementation reports no capability, so plain nodes need an
/// empty `impl Node for MyNode {}` only.
pub trait Node {
    /// Returns the introspection capability of this node, if it has one.
    fn as_introspectable(&self) -> Option<&dyn Introspectable> {
        None
    }
}

/// Capability of a dispatch node to expose its specialization state.
///
/// Usually implemented by generated code. [`reflection_data`] must return a
/// freshly built container on every call:
///
/// ```text
/// Tuple[
///     Tuple[ Text(method_name), Byte(state), Null | List[ List[value, ..], .. ] ],
///     ..
/// ]
/// ```
///
/// The state byte carries the active flag in bit 0 and the excluded flag in
/// bit 1. The node is free to keep executing on other threads while the
/// container is built; it only has to make sure the container it returns is
/// structurally complete.
///
/// [`reflection_data`]: Introspectable::reflection_data
pub trait Introspectable {
    fn reflection_data(&self) -> RawValue;
}

/// Returns `true` if the given node exposes the [`Introspectable`] capability.
///
/// Never fails and has no side effects; use it to avoid
/// [`Error::NotIntrospectable`](crate::Error::NotIntrospectable) from the
/// query functions.
pub fn is_introspectable(node: &dyn Node) -> bool {
    node.as_introspectable().is_some()
}
