use serde::Serialize;

use crate::{
    de::Decoder,
    error::{Error, Result},
    input::Slice,
    ByteArray, DeOpts, IntArray, List, LongArray, Tag, Value,
};

/// A [`Value`] with an optional name. Compound members and the root of an NBT
/// document are named tags. List elements are not named, so they are plain
/// values.
///
/// An empty name is the same as no name: both are written as a zero length
/// string. End tags never carry a name, since a bare End is written as a
/// single byte.
///
/// ```
/// # use nbtcodec::{NamedTag, Tag};
/// let tag = NamedTag::short("Health", 20);
///
/// assert_eq!(tag.name(), Some("Health"));
/// assert_eq!(tag.tag(), Tag::Short);
/// assert_eq!(tag.as_short(), Some(20));
/// assert_eq!(tag.as_int(), None);
/// ```
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NamedTag {
    name: Option<String>,
    value: Value,
}

impl NamedTag {
    pub fn new(name: Option<String>, value: Value) -> Self {
        let name = match value {
            Value::End => None,
            _ => name.filter(|n| !n.is_empty()),
        };

        Self { name, value }
    }

    /// Decode `payload` as the value of a `tag`, for example the 2 bytes of a
    /// Short. Fails if the payload does not decode as that tag or if any bytes
    /// are left over.
    ///
    /// ```
    /// # use nbtcodec::{NamedTag, Tag};
    /// let tag = NamedTag::from_payload(Some("Age".into()), Tag::Short, &[0x01, 0x00]).unwrap();
    /// assert_eq!(tag.as_short(), Some(256));
    ///
    /// assert!(NamedTag::from_payload(None, Tag::Short, &[0x01, 0x00, 0x00]).is_err());
    /// ```
    pub fn from_payload(name: Option<String>, tag: Tag, payload: &[u8]) -> Result<Self> {
        let mut input = Slice::new(payload);
        let value = Decoder::new(DeOpts::default()).decode_value(&mut input, tag)?;

        if !input.is_empty() {
            return Err(Error::trailing_data(input.remaining()));
        }

        Ok(Self::new(name, value))
    }

    /// The bare End tag. Decoding an NBT document that starts with End gives
    /// this.
    pub fn end() -> Self {
        Self {
            name: None,
            value: Value::End,
        }
    }

    pub fn byte(name: impl Into<String>, value: i8) -> Self {
        Self::named(name, Value::Byte(value))
    }

    pub fn unsigned_byte(name: impl Into<String>, value: u8) -> Self {
        Self::named(name, Value::Byte(value as i8))
    }

    pub fn short(name: impl Into<String>, value: i16) -> Self {
        Self::named(name, Value::Short(value))
    }

    pub fn unsigned_short(name: impl Into<String>, value: u16) -> Self {
        Self::named(name, Value::Short(value as i16))
    }

    pub fn int(name: impl Into<String>, value: i32) -> Self {
        Self::named(name, Value::Int(value))
    }

    pub fn unsigned_int(name: impl Into<String>, value: u32) -> Self {
        Self::named(name, Value::Int(value as i32))
    }

    pub fn long(name: impl Into<String>, value: i64) -> Self {
        Self::named(name, Value::Long(value))
    }

    pub fn unsigned_long(name: impl Into<String>, value: u64) -> Self {
        Self::named(name, Value::Long(value as i64))
    }

    pub fn float(name: impl Into<String>, value: f32) -> Self {
        Self::named(name, Value::Float(value))
    }

    pub fn double(name: impl Into<String>, value: f64) -> Self {
        Self::named(name, Value::Double(value))
    }

    pub fn byte_array(name: impl Into<String>, value: impl Into<ByteArray>) -> Self {
        Self::named(name, Value::ByteArray(value.into()))
    }

    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::named(name, Value::String(value.into()))
    }

    pub fn list(name: impl Into<String>, value: List) -> Self {
        Self::named(name, Value::List(value))
    }

    /// A compound holding `members` in the given order. End tags terminate a
    /// compound on the wire rather than being members of it, so any in
    /// `members` are dropped.
    pub fn compound(name: impl Into<String>, members: Vec<NamedTag>) -> Self {
        let members = members
            .into_iter()
            .filter(|m| m.tag() != Tag::End)
            .collect();
        Self::named(name, Value::Compound(members))
    }

    pub fn int_array(name: impl Into<String>, value: impl Into<IntArray>) -> Self {
        Self::named(name, Value::IntArray(value.into()))
    }

    pub fn long_array(name: impl Into<String>, value: impl Into<LongArray>) -> Self {
        Self::named(name, Value::LongArray(value.into()))
    }

    fn named(name: impl Into<String>, value: Value) -> Self {
        Self::new(Some(name.into()), value)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn tag(&self) -> Tag {
        self.value.tag()
    }

    /// The same value under a different name.
    pub fn with_name(self, name: Option<String>) -> Self {
        Self::new(name, self.value)
    }

    pub fn into_parts(self) -> (Option<String>, Value) {
        (self.name, self.value)
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// First member of this compound called `name`.
    pub fn get(&self, name: &str) -> Option<&NamedTag> {
        self.as_compound()?
            .iter()
            .find(|member| member.name() == Some(name))
    }

    pub fn as_byte(&self) -> Option<i8> {
        match self.value {
            Value::Byte(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_unsigned_byte(&self) -> Option<u8> {
        self.as_byte().map(|v| v as u8)
    }

    pub fn as_short(&self) -> Option<i16> {
        match self.value {
            Value::Short(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_unsigned_short(&self) -> Option<u16> {
        self.as_short().map(|v| v as u16)
    }

    pub fn as_int(&self) -> Option<i32> {
        match self.value {
            Value::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_unsigned_int(&self) -> Option<u32> {
        self.as_int().map(|v| v as u32)
    }

    pub fn as_long(&self) -> Option<i64> {
        match self.value {
            Value::Long(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_unsigned_long(&self) -> Option<u64> {
        self.as_long().map(|v| v as u64)
    }

    pub fn as_float(&self) -> Option<f32> {
        match self.value {
            Value::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self.value {
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_byte_array(&self) -> Option<&ByteArray> {
        match &self.value {
            Value::ByteArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.value.as_str()
    }

    pub fn as_list(&self) -> Option<&List> {
        match &self.value {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&[NamedTag]> {
        match &self.value {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int_array(&self) -> Option<&IntArray> {
        match &self.value {
            Value::IntArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_long_array(&self) -> Option<&LongArray> {
        match &self.value {
            Value::LongArray(v) => Some(v),
            _ => None,
        }
    }
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for NamedTag {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let name: Option<String> = u.arbitrary()?;
        let value: Value = u.arbitrary()?;
        Ok(Self::new(name, value))
    }
}
