#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Provided node is not introspectable. Implement `{capability}` to make a node introspectable.")]
    NotIntrospectable { capability: &'static str },

    #[error("Invalid reflection data: {0}")]
    CorruptState(#[from] Corruption),

    #[error("Invalid specialization instance index {index}, specialization has {instances} instance(s)")]
    IndexOutOfRange { index: usize, instances: usize },
}

/// Describes which part of a node's raw reflection data failed validation.
///
/// `record` and `instance` are zero-based positions in the raw container,
/// `found` is the [`RawValue::type_name`](crate::RawValue::type_name) of the
/// offending value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Corruption {
    #[error("expected a tuple of specialization records, found {found}")]
    ContainerNotTuple { found: &'static str },

    #[error("record {record}: expected a tuple, found {found}")]
    RecordNotTuple { record: usize, found: &'static str },

    #[error("record {record}: expected at least 3 fields, found {found}")]
    TooFewFields { record: usize, found: usize },

    #[error("record {record}: expected exactly 3 fields, found {found}")]
    TooManyFields { record: usize, found: usize },

    #[error("record {record}: method name must be text, found {found}")]
    NameNotText { record: usize, found: &'static str },

    #[error("record {record}: state must be a byte, found {found}")]
    StateNotByte { record: usize, found: &'static str },

    #[error("record {record}: cached instances must be a list or null, found {found}")]
    CacheNotList { record: usize, found: &'static str },

    #[error("record {record}, instance {instance}: cached data must be a list, found {found}")]
    InstanceNotList {
        record: usize,
        instance: usize,
        found: &'static str,
    },

    #[error("node declares no specializations")]
    NoSpecializations,
}
