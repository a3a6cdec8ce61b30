/// Decode configuration for a [`Reflector`](crate::Reflector).
///
/// The defaults accept everything a well-behaved generated node produces.
/// Tighten them when testing a code generator against its own output.
///
/// # Examples
///
/// ```rust
/// use dispatch_reflection::Config;
///
/// let config = Config::default()
///     .with_require_specializations(true) // an empty node is a defect
///     .with_allow_extra_fields(false);    // records must have exactly 3 fields
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Reject a reflection container holding no records.
    /// A node that opts into introspection is expected to declare at least
    /// one specialization.
    /// Default: false
    pub require_specializations: bool,

    /// Accept records with more than the 3 known fields. Extra trailing
    /// fields are ignored.
    /// Default: true
    pub allow_extra_fields: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            require_specializations: false,
            allow_extra_fields: true,
        }
    }
}

impl Config {
    /// Fail with [`Corruption::NoSpecializations`](crate::Corruption::NoSpecializations)
    /// when a node reports an empty container.
    pub fn with_require_specializations(mut self, require: bool) -> Self {
        self.require_specializations = require;
        self
    }

    /// Control whether records longer than 3 fields are accepted.
    ///
    /// When disabled, such records fail with
    /// [`Corruption::TooManyFields`](crate::Corruption::TooManyFields).
    pub fn with_allow_extra_fields(mut self, allow: bool) -> Self {
        self.allow_extra_fields = allow;
        self
    }

    pub(crate) fn is_default(&self) -> bool {
        *self == Config::default()
    }
}
