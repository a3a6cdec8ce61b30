use crate::{Config, Node, Result};

use super::decoder::decode;
use super::{Snapshot, SpecializationView};

/// Handle for querying the specialization state of dispatch nodes.
///
/// Holds the decode [`Config`]; every query takes a fresh snapshot of the
/// node. Queries are not meant for hot paths: each call fetches, validates
/// and copies the full reflection data of the node.
///
/// # Example
///
/// ```ignore
/// let reflector = Reflector::new(Config::default().with_require_specializations(true));
///
/// if reflector.is_introspectable(&node) {
///     for s in &reflector.list_all(&node)? {
///         println!("{s}");
///     }
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Reflector {
    config: Config,
}

impl Reflector {
    pub fn new(config: Config) -> Self {
        if !config.is_default() {
            tracing::debug!(?config, "reflector configured");
        }
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns `true` if the node exposes the introspection capability.
    pub fn is_introspectable(&self, node: &dyn Node) -> bool {
        crate::is_introspectable(node)
    }

    /// Reflects the first specialization declared with the given method name.
    ///
    /// Returns `Ok(None)` if the node declares no such specialization. The
    /// whole reflection data is validated even when the match is found early.
    ///
    /// # Errors
    ///
    /// - [`Error::NotIntrospectable`](crate::Error::NotIntrospectable) if the node lacks the capability.
    /// - [`Error::CorruptState`](crate::Error::CorruptState) if the reflection data is malformed.
    pub fn find_by_name(
        &self,
        node: &dyn Node,
        method_name: &str,
    ) -> Result<Option<SpecializationView>> {
        let views = decode(node, &self.config)?;
        Ok(views.into_iter().find(|s| s.method_name() == method_name))
    }

    /// Reflects all declared specializations in declaration order.
    ///
    /// # Errors
    ///
    /// Same as [`Reflector::find_by_name`].
    pub fn list_all(&self, node: &dyn Node) -> Result<Snapshot> {
        decode(node, &self.config).map(Snapshot::new)
    }
}
