use crate::{RawValue, SpecializationState};

/// Builds one raw specialization record the way generated node code emits it.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    method_name: String,
    state: u8,
    cache: Option<Vec<RawValue>>,
    extra_fields: Vec<RawValue>,
}

impl RecordBuilder {
    pub fn new(method_name: impl Into<String>) -> Self {
        Self {
            method_name: method_name.into(),
            state: 0,
            cache: None,
            extra_fields: Vec::new(),
        }
    }

    /// Sets the active bit.
    pub fn active(mut self) -> Self {
        self.state |= SpecializationState::ACTIVE_BIT;
        self
    }

    /// Sets the excluded bit.
    pub fn excluded(mut self) -> Self {
        self.state |= SpecializationState::EXCLUDED_BIT;
        self
    }

    /// Replaces the whole state byte, reserved bits included.
    pub fn state_bits(mut self, bits: u8) -> Self {
        self.state = bits;
        self
    }

    /// Appends a cached instance holding the given captured values.
    pub fn instance(mut self, values: impl IntoIterator<Item = RawValue>) -> Self {
        self.cache
            .get_or_insert_with(Vec::new)
            .push(RawValue::list(values));
        self
    }

    /// Emits an empty list instead of `Null` when no instance was added.
    pub fn empty_cache(mut self) -> Self {
        self.cache.get_or_insert_with(Vec::new);
        self
    }

    /// Appends a trailing field beyond the three known ones.
    pub fn extra_field(mut self, value: RawValue) -> Self {
        self.extra_fields.push(value);
        self
    }

    pub fn build(self) -> RawValue {
        let cache = match self.cache {
            Some(instances) => RawValue::List(instances),
            None => RawValue::Null,
        };
        let mut fields = vec![
            RawValue::from(self.method_name),
            RawValue::Byte(self.state),
            cache,
        ];
        fields.extend(self.extra_fields);
        RawValue::Tuple(fields)
    }
}

/// Wraps records into the outer reflection container.
pub fn reflection_data(records: impl IntoIterator<Item = RawValue>) -> RawValue {
    RawValue::tuple(records)
}
