//! An adaptive `+` node that specializes on operand kinds and grows a small
//! polymorphic inline cache, reflected after every step.

use dispatch_reflection::{Introspectable, Node, RawValue, SpecializationState, list_all};

const CACHE_LIMIT: usize = 2;

#[derive(Debug, Clone)]
enum Operand {
    Int(i64),
    Double(f64),
    Text(String),
}

impl Operand {
    fn kind(&self) -> &'static str {
        match self {
            Operand::Int(_) => "int",
            Operand::Double(_) => "double",
            Operand::Text(_) => "text",
        }
    }

    fn render(&self) -> String {
        match self {
            Operand::Int(i) => i.to_string(),
            Operand::Double(d) => d.to_string(),
            Operand::Text(s) => s.clone(),
        }
    }
}

#[derive(Default)]
struct AddNode {
    int_active: bool,
    cached_kinds: Vec<(&'static str, &'static str)>,
    cache_excluded: bool,
    generic_active: bool,
}

impl AddNode {
    fn execute(&mut self, left: &Operand, right: &Operand) -> Operand {
        if let (Operand::Int(a), Operand::Int(b)) = (left, right) {
            if let Some(sum) = a.checked_add(*b) {
                self.int_active = true;
                return Operand::Int(sum);
            }
        }

        let kinds = (left.kind(), right.kind());
        if !self.cache_excluded && !self.cached_kinds.contains(&kinds) {
            if self.cached_kinds.len() < CACHE_LIMIT {
                self.cached_kinds.push(kinds);
            } else {
                self.cache_excluded = true;
                self.cached_kinds.clear();
                self.generic_active = true;
            }
        }
        generic_add(left, right)
    }
}

fn generic_add(left: &Operand, right: &Operand) -> Operand {
    match (left, right) {
        (Operand::Int(a), Operand::Int(b)) => Operand::Double(*a as f64 + *b as f64),
        (Operand::Int(a), Operand::Double(b)) => Operand::Double(*a as f64 + b),
        (Operand::Double(a), Operand::Int(b)) => Operand::Double(a + *b as f64),
        (Operand::Double(a), Operand::Double(b)) => Operand::Double(a + b),
        _ => Operand::Text(left.render() + &right.render()),
    }
}

fn record(name: &str, state: SpecializationState, cache: RawValue) -> RawValue {
    RawValue::tuple([RawValue::from(name), RawValue::Byte(state.bits()), cache])
}

impl Node for AddNode {
    fn as_introspectable(&self) -> Option<&dyn Introspectable> {
        Some(self)
    }
}

impl Introspectable for AddNode {
    fn reflection_data(&self) -> RawValue {
        let cache = if self.cached_kinds.is_empty() {
            RawValue::Null
        } else {
            RawValue::list(
                self.cached_kinds
                    .iter()
                    .map(|(l, r)| RawValue::list([RawValue::from(*l), RawValue::from(*r)])),
            )
        };
        let cached_active = !self.cached_kinds.is_empty();

        RawValue::tuple([
            record("doInt", SpecializationState::new(self.int_active, false), RawValue::Null),
            record(
                "doCachedKinds",
                SpecializationState::new(cached_active, self.cache_excluded),
                cache,
            ),
            record("doGeneric", SpecializationState::new(self.generic_active, false), RawValue::Null),
        ])
    }
}

fn main() -> dispatch_reflection::Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut node = AddNode::default();
    let steps = [
        (Operand::Int(1), Operand::Int(2)),
        (Operand::Int(1), Operand::Double(0.5)),
        (Operand::Text("a".into()), Operand::Int(1)),
        (Operand::Int(3), Operand::Double(1.5)),
        (Operand::Double(2.0), Operand::Text("b".into())),
    ];

    for (left, right) in &steps {
        let result = node.execute(left, right);
        println!("{} + {} = {}", left.render(), right.render(), result.render());

        for s in &list_all(&node)? {
            println!("  {s}");
            for (i, values) in s.cached_instances().enumerate() {
                if !values.is_empty() {
                    println!("    #{i}: {}", RawValue::list(values.to_vec()));
                }
            }
        }
    }
    Ok(())
}
