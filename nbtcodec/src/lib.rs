//! nbtcodec decodes and encodes NBT (Named Binary Tag) data, the big-endian
//! binary tree format used by *Minecraft: Java Edition* to store world data,
//! player inventories and more.
//!
//! * To decode bytes into a tree, see [`from_bytes`].
//! * To encode a tree back to bytes, see [`to_bytes`].
//! * The tree itself is made of [`NamedTag`] and [`Value`].
//! * For NBT array types see [`ByteArray`], [`IntArray`], and [`LongArray`].
//! * Compressed input is handled by a [`Compression`] codec, GZip by default.
//!
//! ```toml
//! [dependencies]
//! nbtcodec = "0.1"
//! ```
//!
//! # Quick example
//!
//! ```
//! use nbtcodec::{from_bytes, to_bytes, NamedTag, Value};
//! # use nbtcodec::error::Result;
//! # fn main() -> Result<()> {
//! let level = NamedTag::compound(
//!     "Data",
//!     vec![
//!         NamedTag::int("DataVersion", 3465),
//!         NamedTag::string("LevelName", "My World"),
//!     ],
//! );
//!
//! // Player and level dat files are GZip compressed.
//! let bytes = to_bytes(&level, true)?;
//! let decoded = from_bytes(&bytes)?;
//!
//! assert_eq!(decoded, level);
//! assert_eq!(decoded.get("DataVersion").and_then(NamedTag::as_int), Some(3465));
//! assert_eq!(decoded.value().get("LevelName"), Some(&Value::String("My World".into())));
//! # Ok(())
//! # }
//! ```
//!
//! # Depth limit
//!
//! Lists and compounds are decoded recursively. To keep adversarial input
//! from exhausting the stack, nesting is limited to [`DEFAULT_MAX_DEPTH`]
//! levels unless configured otherwise with [`DeOpts`].

use serde::Serialize;

pub mod compression;
pub mod de;
pub mod error;
pub mod ser;

mod arrays;
mod input;
mod list;
mod named;
mod value;

pub use arrays::*;
pub use compression::{Compression, Gzip, Uncompressed, Zlib};
pub use de::{from_bytes, from_bytes_with_compression, from_bytes_with_opts};
pub use list::List;
pub use named::NamedTag;
pub use ser::{to_bytes, to_bytes_with_compression, to_writer};
pub use value::Value;

#[cfg(test)]
mod test;

/// Lists and compounds nested deeper than this fail to decode by default, and
/// always fail to encode. Decoding and encoding recurse once per level, and
/// this many levels fit a 2 MiB thread stack in debug builds.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// An NBT tag. This does not carry the value or the name of the data.
#[derive(Serialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of other values, all elements have the same tag.
    List = 9,
    /// Represents a struct-like structure of named tags.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
    /// Represents as array of Long (i64).
    LongArray = 12,
}

// Crates exist to generate this code for us, but would add to our compile
// times, so we instead write it out manually, the tags will very rarely change
// so isn't a massive burden.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}

/// Options for customizing decoding.
///
/// ```
/// # use nbtcodec::{from_bytes_with_opts, DeOpts};
/// let input = [10u8, 0, 0, 0];
/// let tag = from_bytes_with_opts(&input, DeOpts::new().max_depth(16).max_seq_len(1024));
/// assert!(tag.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeOpts {
    pub(crate) max_depth: usize,
    pub(crate) max_seq_len: usize,
}

impl DeOpts {
    pub fn new() -> Self {
        Default::default()
    }

    /// Maximum number of nested lists and compounds. The root counts as the
    /// first level.
    ///
    /// Encoding is always limited to [`DEFAULT_MAX_DEPTH`], so a tree decoded
    /// with a higher limit may fail to encode again. A higher limit also needs
    /// a thread with a larger stack.
    pub fn max_depth(mut self, value: usize) -> Self {
        self.max_depth = value;
        self
    }

    /// Maximum number of elements a single list or array may declare. Guards
    /// against allocating huge amounts of memory for untrusted input.
    pub fn max_seq_len(mut self, value: usize) -> Self {
        self.max_seq_len = value;
        self
    }
}

impl Default for DeOpts {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_seq_len: usize::MAX,
        }
    }
}
