use serde::Serialize;

use crate::{ByteArray, IntArray, List, LongArray, NamedTag, Tag};

/// Value is a complete NBT value. It owns its data. Compounds and Lists are
/// recursively decoded, and compounds keep their members in the order they
/// appeared in the input.
///
/// ```
/// # use nbtcodec::{NamedTag, Value, Tag};
/// let value = Value::Compound(vec![NamedTag::int("DataVersion", 3465)]);
///
/// assert_eq!(value.tag(), Tag::Compound);
/// match value.get("DataVersion") {
///     Some(Value::Int(ver)) => println!("Version: {}", ver),
///     _ => {}
/// }
/// ```
#[derive(Serialize, Debug, Clone, PartialEq)]
pub enum Value {
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(ByteArray),
    String(String),
    List(List),
    Compound(Vec<NamedTag>),
    IntArray(IntArray),
    LongArray(LongArray),
}

impl Value {
    /// The tag identifying this kind of value on the wire.
    pub fn tag(&self) -> Tag {
        match self {
            Value::End => Tag::End,
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
            Value::IntArray(_) => Tag::IntArray,
            Value::LongArray(_) => Tag::LongArray,
        }
    }

    /// Value of the first compound member called `name`. `None` if this is
    /// not a compound or there is no such member.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Compound(members) => members
                .iter()
                .find(|m| m.name() == Some(name))
                .map(NamedTag::value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(v) => Some(v as i64),
            Value::Short(v) => Some(v as i64),
            Value::Int(v) => Some(v as i64),
            Value::Long(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Value {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(match u.arbitrary::<Tag>()? {
            // End only appears as a bare root tag, never as a value in a tree.
            Tag::End => return Err(arbitrary::Error::IncorrectFormat),
            Tag::Byte => Value::Byte(u.arbitrary()?),
            Tag::Short => Value::Short(u.arbitrary()?),
            Tag::Int => Value::Int(u.arbitrary()?),
            Tag::Long => Value::Long(u.arbitrary()?),
            Tag::Float => Value::Float(u.arbitrary()?),
            Tag::Double => Value::Double(u.arbitrary()?),
            Tag::ByteArray => Value::ByteArray(u.arbitrary()?),
            Tag::String => Value::String(u.arbitrary()?),
            Tag::List => Value::List(u.arbitrary()?),
            Tag::Compound => Value::Compound(u.arbitrary()?),
            Tag::IntArray => Value::IntArray(u.arbitrary()?),
            Tag::LongArray => Value::LongArray(u.arbitrary()?),
        })
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Value {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
        impl From<&$type> for Value {
            fn from(val: &$type) -> Self {
                Self::$variant(val.to_owned()$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(u8, Byte, as i8);
from!(i16, Short);
from!(u16, Short, as i16);
from!(i32, Int);
from!(u32, Int, as i32);
from!(i64, Long);
from!(u64, Long, as i64);
from!(f32, Float);
from!(f64, Double);
from!(String, String);
from!(&str, String, .to_owned());
from!(ByteArray, ByteArray);
from!(IntArray, IntArray);
from!(LongArray, LongArray);
from!(List, List);

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}

impl From<Vec<NamedTag>> for Value {
    fn from(members: Vec<NamedTag>) -> Self {
        Self::Compound(members)
    }
}
