//! Decoding NBT bytes into a [`NamedTag`] tree.
//!
//! Decoding dispatches on the one byte type id of each tag and recurses into
//! lists and compounds. Every error aborts the whole decode, there is no
//! partially decoded tree.
//!
//! ```
//! use nbtcodec::{from_bytes, Tag};
//! # use nbtcodec::error::Result;
//! # fn main() -> Result<()> {
//! let input = [
//!     0x0a, 0x00, 0x04, b'r', b'o', b'o', b't', // compound called "root"
//!     0x01, 0x00, 0x01, b'b', 0x7f,             // byte called "b", 127
//!     0x00,                                     // end of compound
//! ];
//!
//! let root = from_bytes(&input)?;
//! assert_eq!(root.name(), Some("root"));
//! assert_eq!(root.tag(), Tag::Compound);
//! assert_eq!(root.get("b").and_then(|b| b.as_byte()), Some(127));
//! # Ok(())
//! # }
//! ```
//!
//! Input that looks compressed is decompressed first. [`from_bytes`] handles
//! GZip, other codecs can be given to [`from_bytes_with_compression`].
use std::borrow::Cow;

use log::debug;

use crate::{
    compression::{Compression, Gzip},
    error::{Error, Result},
    input::Slice,
    ByteArray, DeOpts, IntArray, List, LongArray, NamedTag, Tag, Value,
};

/// Decode an NBT document, decompressing it first if it is GZip compressed.
pub fn from_bytes(input: &[u8]) -> Result<NamedTag> {
    from_bytes_with_opts(input, DeOpts::default())
}

/// Decode an NBT document with the given options, decompressing it first if
/// it is GZip compressed.
pub fn from_bytes_with_opts(input: &[u8], opts: DeOpts) -> Result<NamedTag> {
    from_bytes_with_compression(input, &Gzip, opts)
}

/// Decode an NBT document, using `compression` to detect and decompress
/// compressed input.
///
/// ```
/// # use nbtcodec::{from_bytes_with_compression, to_bytes_with_compression, DeOpts, NamedTag, Zlib};
/// let tag = NamedTag::compound("", vec![NamedTag::long("LastUpdate", 1024)]);
/// let bytes = to_bytes_with_compression(&tag, &Zlib).unwrap();
///
/// let decoded = from_bytes_with_compression(&bytes, &Zlib, DeOpts::new()).unwrap();
/// assert_eq!(decoded, tag);
/// ```
pub fn from_bytes_with_compression(
    input: &[u8],
    compression: &dyn Compression,
    opts: DeOpts,
) -> Result<NamedTag> {
    let data = if compression.is_compressed(input) {
        let inflated = compression
            .decompress(input)
            .map_err(Error::cannot_decompress)?;
        debug!(
            "decompressed {} bytes of input to {} bytes",
            input.len(),
            inflated.len()
        );
        Cow::Owned(inflated)
    } else {
        Cow::Borrowed(input)
    };

    let mut input = Slice::new(&data);
    let tag = Decoder::new(opts).decode_root(&mut input)?;

    if !input.is_empty() {
        debug!("ignoring {} bytes after the root tag", input.remaining());
    }

    Ok(tag)
}

/// Recursive decoder over a [`Slice`]. Tracks how deeply lists and compounds
/// are nested so that it can refuse input nested beyond `DeOpts::max_depth`.
pub(crate) struct Decoder {
    opts: DeOpts,
    depth: usize,
}

impl Decoder {
    pub fn new(opts: DeOpts) -> Self {
        Self { opts, depth: 0 }
    }

    /// The root of a document: a type id, a name and a payload. A document
    /// that is just an End tag decodes to a bare End.
    pub fn decode_root(&mut self, input: &mut Slice) -> Result<NamedTag> {
        let tag = input.consume_tag()?;
        if tag == Tag::End {
            return Ok(NamedTag::end());
        }

        self.decode_named(input, tag)
    }

    /// Everything after the type id of a named tag.
    fn decode_named(&mut self, input: &mut Slice, tag: Tag) -> Result<NamedTag> {
        let name = input.consume_str()?;
        let value = self.decode_value(input, tag)?;
        Ok(NamedTag::new(Some(name), value))
    }

    pub fn decode_value(&mut self, input: &mut Slice, tag: Tag) -> Result<Value> {
        Ok(match tag {
            Tag::End => Value::End,
            Tag::Byte => Value::Byte(input.consume_i8()?),
            Tag::Short => Value::Short(input.consume_i16()?),
            Tag::Int => Value::Int(input.consume_i32()?),
            Tag::Long => Value::Long(input.consume_i64()?),
            Tag::Float => Value::Float(input.consume_f32()?),
            Tag::Double => Value::Double(input.consume_f64()?),
            Tag::String => Value::String(input.consume_str()?),
            Tag::ByteArray => {
                let len = self.consume_array_len(input, std::mem::size_of::<i8>())?;
                let bytes = input.consume(len)?;
                Value::ByteArray(ByteArray::from(bytes))
            }
            Tag::IntArray => {
                let len = self.consume_array_len(input, std::mem::size_of::<i32>())?;
                let mut data = Vec::with_capacity(len);
                for _ in 0..len {
                    data.push(input.consume_i32()?);
                }
                Value::IntArray(IntArray::new(data))
            }
            Tag::LongArray => {
                let len = self.consume_array_len(input, std::mem::size_of::<i64>())?;
                let mut data = Vec::with_capacity(len);
                for _ in 0..len {
                    data.push(input.consume_i64()?);
                }
                Value::LongArray(LongArray::new(data))
            }
            Tag::List => Value::List(self.nested(|de| de.decode_list(input))?),
            Tag::Compound => Value::Compound(self.nested(|de| de.decode_compound(input))?),
        })
    }

    fn decode_list(&mut self, input: &mut Slice) -> Result<List> {
        let element = input.consume_tag()?;
        let len = self.consume_seq_len(input)?;

        // End tags have no payload, so a list of them can only be empty.
        if element == Tag::End && len != 0 {
            return Err(Error::invalid_element(Tag::End, Tag::End));
        }

        // Every element takes at least a byte, so the remaining input bounds
        // the allocation regardless of the declared length. Elements carry no
        // type id of their own, so each is decoded as the declared tag.
        let mut items = Vec::with_capacity(len.min(input.remaining()));
        for _ in 0..len {
            items.push(self.decode_value(input, element)?);
        }

        Ok(List::from_checked(element, items))
    }

    fn decode_compound(&mut self, input: &mut Slice) -> Result<Vec<NamedTag>> {
        let mut members = vec![];

        loop {
            if input.peek_tag()? == Tag::End {
                input.consume_byte()?;
                break;
            }

            let tag = input.consume_tag()?;
            members.push(self.decode_named(input, tag)?);
        }

        Ok(members)
    }

    /// Length of a fixed width array. Fails early if the input is too short
    /// to hold it, before anything is allocated.
    fn consume_array_len(&self, input: &mut Slice, width: usize) -> Result<usize> {
        let len = self.consume_seq_len(input)?;
        match len.checked_mul(width) {
            Some(size) if size <= input.remaining() => Ok(len),
            _ => Err(Error::no_data()),
        }
    }

    fn consume_seq_len(&self, input: &mut Slice) -> Result<usize> {
        let len = input.consume_len()?;
        if len > self.opts.max_seq_len {
            return Err(Error::seq_too_long(len));
        }
        Ok(len)
    }

    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= self.opts.max_depth {
            return Err(Error::depth_exceeded(self.opts.max_depth));
        }

        self.depth += 1;
        let res = f(self);
        self.depth -= 1;
        res
    }
}
