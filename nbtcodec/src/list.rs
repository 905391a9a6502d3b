use std::ops::Deref;

use serde::Serialize;

use crate::{
    error::{Error, Result},
    Tag, Value,
};

/// NBT `List`: values that all share one tag. The element tag is kept even
/// for empty lists so that they encode back to the same bytes.
///
/// A `List` can only be built through constructors that check every element,
/// so a list holding mixed tags cannot exist.
///
/// ```
/// # use nbtcodec::{List, Tag, Value};
/// let list = List::new(Tag::Float, vec![Value::Float(1.1), Value::Float(1.2)]).unwrap();
/// assert_eq!(list.element_tag(), Tag::Float);
///
/// assert!(List::new(Tag::Int, vec![Value::Short(1)]).is_err());
/// ```
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct List {
    element: Tag,
    items: Vec<Value>,
}

impl List {
    /// Create a list, checking that every value has the `element` tag. A list
    /// of `End` must be empty.
    pub fn new(element: Tag, items: Vec<Value>) -> Result<Self> {
        if element == Tag::End && !items.is_empty() {
            return Err(Error::invalid_element(Tag::End, Tag::End));
        }

        if let Some(bad) = items.iter().find(|v| v.tag() != element) {
            return Err(Error::invalid_element(element, bad.tag()));
        }

        Ok(Self { element, items })
    }

    /// An empty list that remembers its element tag.
    pub fn empty(element: Tag) -> Self {
        Self {
            element,
            items: Vec::new(),
        }
    }

    /// Create a list taking the element tag from the first value. An empty
    /// vector gives an empty list of `End`, which is how Minecraft writes
    /// empty lists.
    pub fn from_values(items: Vec<Value>) -> Result<Self> {
        let element = items.first().map(Value::tag).unwrap_or(Tag::End);
        Self::new(element, items)
    }

    pub fn element_tag(&self) -> Tag {
        self.element
    }

    pub fn into_inner(self) -> Vec<Value> {
        self.items
    }

    /// Used by the decoder, which has already checked every element.
    pub(crate) fn from_checked(element: Tag, items: Vec<Value>) -> Self {
        Self { element, items }
    }
}

impl Deref for List {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(feature = "arbitrary1")]
fn het_list<'a, T, F>(u: &mut arbitrary::Unstructured<'a>, f: F) -> arbitrary::Result<Vec<Value>>
where
    F: FnMut(T) -> Value,
    T: arbitrary::Arbitrary<'a>,
{
    Ok(u.arbitrary_iter::<T>()?
        .collect::<arbitrary::Result<Vec<_>>>()?
        .into_iter()
        .map(f)
        .collect())
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for List {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let element = u.arbitrary::<Tag>()?;
        let items = match element {
            Tag::End => vec![],
            Tag::Byte => het_list(u, Value::Byte)?,
            Tag::Short => het_list(u, Value::Short)?,
            Tag::Int => het_list(u, Value::Int)?,
            Tag::Long => het_list(u, Value::Long)?,
            Tag::Float => het_list(u, Value::Float)?,
            Tag::Double => het_list(u, Value::Double)?,
            Tag::ByteArray => het_list(u, Value::ByteArray)?,
            Tag::String => het_list(u, Value::String)?,
            Tag::List => het_list(u, Value::List)?,
            Tag::Compound => het_list(u, Value::Compound)?,
            Tag::IntArray => het_list(u, Value::IntArray)?,
            Tag::LongArray => het_list(u, Value::LongArray)?,
        };

        Ok(Self { element, items })
    }
}
