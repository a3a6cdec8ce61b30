use crate::node::INTROSPECTABLE;
use crate::{Config, Corruption, Error, Node, RawValue, Result, SpecializationState};

use super::SpecializationView;

/// Fields read from each raw record: method name, state byte, cached instances.
const RECORD_FIELDS: usize = 3;

/// Fetches the raw reflection container of `node` and turns it into views.
///
/// The container is validated in a single pass. Any malformed record fails
/// the whole decode; there is no partial result.
pub(crate) fn decode(node: &dyn Node, config: &Config) -> Result<Vec<SpecializationView>> {
    let introspectable = node.as_introspectable().ok_or(Error::NotIntrospectable {
        capability: INTROSPECTABLE,
    })?;

    let records = match introspectable.reflection_data() {
        RawValue::Tuple(records) => records,
        other => {
            return Err(Corruption::ContainerNotTuple {
                found: other.type_name(),
            }
            .into());
        }
    };

    if records.is_empty() && config.require_specializations {
        return Err(Corruption::NoSpecializations.into());
    }

    let views = records
        .into_iter()
        .enumerate()
        .map(|(index, raw)| decode_record(index, raw, config))
        .collect::<Result<Vec<_>>>()?;

    tracing::trace!(specializations = views.len(), "decoded specialization snapshot");
    Ok(views)
}

fn decode_record(record: usize, raw: RawValue, config: &Config) -> Result<SpecializationView> {
    let mut fields = match raw {
        RawValue::Tuple(fields) => fields,
        other => {
            return Err(Corruption::RecordNotTuple {
                record,
                found: other.type_name(),
            }
            .into());
        }
    };

    let found = fields.len();
    if found < RECORD_FIELDS {
        return Err(Corruption::TooFewFields { record, found }.into());
    }
    if found > RECORD_FIELDS && !config.allow_extra_fields {
        return Err(Corruption::TooManyFields { record, found }.into());
    }
    fields.truncate(RECORD_FIELDS);
    let [name, state, cache]: [RawValue; RECORD_FIELDS] = fields
        .try_into()
        .map_err(|_| Corruption::TooFewFields { record, found })?;

    let method_name = match name {
        RawValue::Text(name) => name,
        other => {
            return Err(Corruption::NameNotText {
                record,
                found: other.type_name(),
            }
            .into());
        }
    };

    let state = match state {
        RawValue::Byte(bits) => SpecializationState::from_bits(bits),
        other => {
            return Err(Corruption::StateNotByte {
                record,
                found: other.type_name(),
            }
            .into());
        }
    };

    let instances = decode_instances(record, cache)?;
    Ok(SpecializationView::new(
        method_name,
        state,
        normalize(state, instances),
    ))
}

fn decode_instances(record: usize, cache: RawValue) -> Result<Vec<Box<[RawValue]>>> {
    let instances = match cache {
        RawValue::Null => return Ok(Vec::new()),
        RawValue::List(instances) => instances,
        other => {
            return Err(Corruption::CacheNotList {
                record,
                found: other.type_name(),
            }
            .into());
        }
    };

    instances
        .into_iter()
        .enumerate()
        .map(|(instance, raw)| match raw {
            RawValue::List(values) => Ok(values.into_boxed_slice()),
            other => Err(Error::from(Corruption::InstanceNotList {
                record,
                instance,
                found: other.type_name(),
            })),
        })
        .collect()
}

/// An active specialization without cached data still has one live dispatch
/// path, reported as a single instance with no values.
fn normalize(state: SpecializationState, instances: Vec<Box<[RawValue]>>) -> Vec<Box<[RawValue]>> {
    if instances.is_empty() && state.is_active() {
        vec![Box::default()]
    } else {
        instances
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Introspectable;

    struct Fixed(RawValue);

    impl Node for Fixed {
        fn as_introspectable(&self) -> Option<&dyn Introspectable> {
            Some(self)
        }
    }

    impl Introspectable for Fixed {
        fn reflection_data(&self) -> RawValue {
            self.0.clone()
        }
    }

    struct Plain;
    impl Node for Plain {}

    fn record(name: &str, state: u8, cache: RawValue) -> RawValue {
        RawValue::tuple([RawValue::from(name), RawValue::Byte(state), cache])
    }

    fn decode_default(data: RawValue) -> Result<Vec<SpecializationView>> {
        decode(&Fixed(data), &Config::default())
    }

    fn corruption(data: RawValue) -> Corruption {
        match decode_default(data) {
            Err(Error::CorruptState(c)) => c,
            other => panic!("expected corrupt state, got {other:?}"),
        }
    }

    #[test]
    fn views_are_shareable_across_threads() {
        fn is_send_sync<T: Send + Sync>() {}
        is_send_sync::<SpecializationView>();
    }

    #[test]
    fn node_without_capability_is_rejected() {
        let err = decode(&Plain, &Config::default()).unwrap_err();
        assert_eq!(
            err,
            Error::NotIntrospectable {
                capability: INTROSPECTABLE
            }
        );
    }

    #[test]
    fn active_without_cache_is_one_empty_instance() {
        let views = decode_default(RawValue::tuple([record("doInt", 0b01, RawValue::Null)])).unwrap();
        assert_eq!(views[0].instances(), 1);
        assert!(views[0].cached_data(0).unwrap().is_empty());
    }

    #[test]
    fn active_with_empty_cache_list_is_one_empty_instance() {
        let views =
            decode_default(RawValue::tuple([record("doInt", 0b01, RawValue::list([]))])).unwrap();
        assert_eq!(views[0].instances(), 1);
    }

    #[test]
    fn inactive_without_cache_has_no_instances() {
        let views = decode_default(RawValue::tuple([
            record("doInt", 0b00, RawValue::Null),
            record("doLong", 0b10, RawValue::list([])),
        ]))
        .unwrap();
        assert_eq!(views[0].instances(), 0);
        assert_eq!(views[1].instances(), 0);
        assert!(views[1].is_excluded());
        assert!(!views[1].is_active());
    }

    #[test]
    fn extra_fields_are_ignored_by_default() {
        let data = RawValue::tuple([RawValue::tuple([
            RawValue::from("doInt"),
            RawValue::Byte(1),
            RawValue::Null,
            RawValue::from("trailing"),
        ])]);
        assert_eq!(decode_default(data.clone()).unwrap().len(), 1);

        let strict = Config::default().with_allow_extra_fields(false);
        assert_eq!(
            decode(&Fixed(data), &strict).unwrap_err(),
            Error::CorruptState(Corruption::TooManyFields {
                record: 0,
                found: 4
            })
        );
    }

    #[test]
    fn empty_container_is_accepted_unless_required() {
        assert!(decode_default(RawValue::tuple([])).unwrap().is_empty());

        let strict = Config::default().with_require_specializations(true);
        assert_eq!(
            decode(&Fixed(RawValue::tuple([])), &strict).unwrap_err(),
            Error::CorruptState(Corruption::NoSpecializations)
        );
    }

    #[test]
    fn outer_container_must_be_a_tuple() {
        assert_eq!(
            corruption(RawValue::list([record("doInt", 1, RawValue::Null)])),
            Corruption::ContainerNotTuple { found: "list" }
        );
        assert_eq!(
            corruption(RawValue::Null),
            Corruption::ContainerNotTuple { found: "null" }
        );
    }

    #[test]
    fn each_field_is_type_checked() {
        let ok = record("ok", 1, RawValue::Null);

        assert_eq!(
            corruption(RawValue::tuple([ok, RawValue::from("doInt")])),
            Corruption::RecordNotTuple {
                record: 1,
                found: "text"
            }
        );
        assert_eq!(
            corruption(RawValue::tuple([RawValue::tuple([
                RawValue::from("doInt"),
                RawValue::Byte(1)
            ])])),
            Corruption::TooFewFields {
                record: 0,
                found: 2
            }
        );
        assert_eq!(
            corruption(RawValue::tuple([RawValue::tuple([
                RawValue::from(7),
                RawValue::Byte(1),
                RawValue::Null
            ])])),
            Corruption::NameNotText {
                record: 0,
                found: "int"
            }
        );
        assert_eq!(
            corruption(RawValue::tuple([RawValue::tuple([
                RawValue::from("doInt"),
                RawValue::from(1),
                RawValue::Null
            ])])),
            Corruption::StateNotByte {
                record: 0,
                found: "int"
            }
        );
        assert_eq!(
            corruption(RawValue::tuple([record("doInt", 1, RawValue::from(false))])),
            Corruption::CacheNotList {
                record: 0,
                found: "bool"
            }
        );
        assert_eq!(
            corruption(RawValue::tuple([record(
                "doInt",
                1,
                RawValue::list([RawValue::list([]), RawValue::tuple([])])
            )])),
            Corruption::InstanceNotList {
                record: 0,
                instance: 1,
                found: "tuple"
            }
        );
    }
}
