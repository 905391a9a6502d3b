use std::ops::Deref;

use serde::Serialize;

/// NBT `ByteArray`, a length-prefixed sequence of signed bytes.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
#[serde(transparent)]
pub struct ByteArray {
    data: Vec<i8>,
}

impl ByteArray {
    pub fn new(data: Vec<i8>) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> Vec<i8> {
        self.data
    }

    /// The bytes reinterpreted as unsigned.
    pub fn to_unsigned(&self) -> Vec<u8> {
        self.data.iter().map(|b| *b as u8).collect()
    }
}

impl Deref for ByteArray {
    type Target = Vec<i8>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl From<Vec<i8>> for ByteArray {
    fn from(data: Vec<i8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for ByteArray {
    fn from(data: &[u8]) -> Self {
        Self::new(data.iter().map(|b| *b as i8).collect())
    }
}

/// NBT `IntArray`, a length-prefixed sequence of big-endian i32.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
#[serde(transparent)]
pub struct IntArray {
    data: Vec<i32>,
}

impl IntArray {
    pub fn new(data: Vec<i32>) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> Vec<i32> {
        self.data
    }
}

impl Deref for IntArray {
    type Target = Vec<i32>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl From<Vec<i32>> for IntArray {
    fn from(data: Vec<i32>) -> Self {
        Self::new(data)
    }
}

/// NBT `LongArray`, a length-prefixed sequence of big-endian i64.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
#[serde(transparent)]
pub struct LongArray {
    data: Vec<i64>,
}

impl LongArray {
    pub fn new(data: Vec<i64>) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> Vec<i64> {
        self.data
    }
}

impl Deref for LongArray {
    type Target = Vec<i64>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl From<Vec<i64>> for LongArray {
    fn from(data: Vec<i64>) -> Self {
        Self::new(data)
    }
}
