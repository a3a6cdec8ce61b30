use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Untyped value emitted by the generated reflection code of a dispatch node.
///
/// The outer reflection container and every specialization record are
/// [`Tuple`](RawValue::Tuple)s. Variable-length sequences, such as the cached
/// instances of a specialization, are [`List`](RawValue::List)s. Captured
/// guard values may be any variant, including [`Opaque`](RawValue::Opaque)
/// host objects.
///
/// Nothing about a `RawValue` is trusted: the decoder validates every shape
/// before turning it into a [`SpecializationView`](crate::SpecializationView).
#[derive(Clone)]
pub enum RawValue {
    Null,
    Bool(bool),
    Byte(u8),
    Int(i64),
    Float(f64),
    Text(Arc<str>),
    /// Fixed-shape record.
    Tuple(Vec<RawValue>),
    /// Variable-length sequence.
    List(Vec<RawValue>),
    /// Host object captured by a cache guard. Compared by identity.
    Opaque(Arc<dyn Any + Send + Sync>),
}

impl RawValue {
    pub fn text(s: impl Into<Arc<str>>) -> Self {
        RawValue::Text(s.into())
    }

    pub fn tuple(items: impl IntoIterator<Item = RawValue>) -> Self {
        RawValue::Tuple(items.into_iter().collect())
    }

    pub fn list(items: impl IntoIterator<Item = RawValue>) -> Self {
        RawValue::List(items.into_iter().collect())
    }

    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        RawValue::Opaque(Arc::new(value))
    }

    /// Short name of the variant, used in validation diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Bool(_) => "bool",
            RawValue::Byte(_) => "byte",
            RawValue::Int(_) => "int",
            RawValue::Float(_) => "float",
            RawValue::Text(_) => "text",
            RawValue::Tuple(_) => "tuple",
            RawValue::List(_) => "list",
            RawValue::Opaque(_) => "opaque",
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            RawValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_byte(&self) -> Option<u8> {
        match self {
            RawValue::Byte(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            RawValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            RawValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[RawValue]> {
        match self {
            RawValue::Tuple(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[RawValue]> {
        match self {
            RawValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Downcasts an opaque host object to a concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            RawValue::Opaque(obj) => obj.downcast_ref::<T>(),
            _ => None,
        }
    }
}

/// Structural equality. Floats compare by bit pattern so that a snapshot
/// holding `NaN` still equals a re-decoded copy of itself, opaque objects
/// compare by pointer identity.
impl PartialEq for RawValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RawValue::Null, RawValue::Null) => true,
            (RawValue::Bool(a), RawValue::Bool(b)) => a == b,
            (RawValue::Byte(a), RawValue::Byte(b)) => a == b,
            (RawValue::Int(a), RawValue::Int(b)) => a == b,
            (RawValue::Float(a), RawValue::Float(b)) => a.to_bits() == b.to_bits(),
            (RawValue::Text(a), RawValue::Text(b)) => a == b,
            (RawValue::Tuple(a), RawValue::Tuple(b)) => a == b,
            (RawValue::List(a), RawValue::List(b)) => a == b,
            (RawValue::Opaque(a), RawValue::Opaque(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Null => write!(f, "Null"),
            RawValue::Bool(b) => write!(f, "Bool({b})"),
            RawValue::Byte(b) => write!(f, "Byte({b:#010b})"),
            RawValue::Int(i) => write!(f, "Int({i})"),
            RawValue::Float(x) => write!(f, "Float({x})"),
            RawValue::Text(s) => write!(f, "Text({s:?})"),
            RawValue::Tuple(items) => f.debug_tuple("Tuple").field(items).finish(),
            RawValue::List(items) => f.debug_tuple("List").field(items).finish(),
            RawValue::Opaque(obj) => write!(f, "Opaque({:p})", Arc::as_ptr(obj)),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Null => write!(f, "null"),
            RawValue::Bool(b) => write!(f, "{b}"),
            RawValue::Byte(b) => write!(f, "{b}"),
            RawValue::Int(i) => write!(f, "{i}"),
            RawValue::Float(x) => write!(f, "{x}"),
            RawValue::Text(s) => write!(f, "{s:?}"),
            RawValue::Tuple(items) => write_seq(f, "(", items, ")"),
            RawValue::List(items) => write_seq(f, "[", items, "]"),
            RawValue::Opaque(_) => write!(f, "<opaque>"),
        }
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, open: &str, items: &[RawValue], close: &str) -> fmt::Result {
    f.write_str(open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str(close)
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

impl From<u8> for RawValue {
    fn from(b: u8) -> Self {
        RawValue::Byte(b)
    }
}

impl From<i32> for RawValue {
    fn from(i: i32) -> Self {
        RawValue::Int(i64::from(i))
    }
}

impl From<i64> for RawValue {
    fn from(i: i64) -> Self {
        RawValue::Int(i)
    }
}

impl From<f64> for RawValue {
    fn from(x: f64) -> Self {
        RawValue::Float(x)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(Arc::from(s))
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(Arc::from(s))
    }
}

impl From<Arc<str>> for RawValue {
    fn from(s: Arc<str>) -> Self {
        RawValue::Text(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RawValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;

        match self {
            RawValue::Null => serializer.serialize_unit(),
            RawValue::Bool(b) => serializer.serialize_bool(*b),
            RawValue::Byte(b) => serializer.serialize_u8(*b),
            RawValue::Int(i) => serializer.serialize_i64(*i),
            RawValue::Float(x) => serializer.serialize_f64(*x),
            RawValue::Text(s) => serializer.serialize_str(s),
            RawValue::Tuple(items) | RawValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            RawValue::Opaque(_) => serializer.serialize_str("<opaque>"),
        }
    }
}
