//! Encoding a [`NamedTag`] tree into NBT bytes.
//!
//! Encoding mirrors decoding: a type id, a length-prefixed name and the
//! payload, with all numbers big-endian. Compression, if wanted, is applied
//! once to the complete output.
//!
//! ```
//! # use nbtcodec::{to_bytes, NamedTag};
//! let tag = NamedTag::compound("", vec![]);
//! let bytes = to_bytes(&tag, false).unwrap();
//!
//! assert_eq!(bytes, [0x0a, 0x00, 0x00, 0x00]);
//! ```
use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};
use log::debug;

use crate::{
    compression::{Compression, Gzip},
    error::{Error, Result},
    NamedTag, Tag, Value, DEFAULT_MAX_DEPTH,
};

/// Encode `tag` as an NBT document, GZip compressing it if `compress` is set.
pub fn to_bytes(tag: &NamedTag, compress: bool) -> Result<Vec<u8>> {
    if compress {
        to_bytes_with_compression(tag, &Gzip)
    } else {
        let mut out = vec![];
        to_writer(&mut out, tag)?;
        Ok(out)
    }
}

/// Encode `tag` as an NBT document and compress it with `compression`.
pub fn to_bytes_with_compression(tag: &NamedTag, compression: &dyn Compression) -> Result<Vec<u8>> {
    let mut raw = vec![];
    to_writer(&mut raw, tag)?;

    let out = compression.compress(&raw).map_err(Error::cannot_compress)?;
    debug!("compressed {} bytes of nbt to {} bytes", raw.len(), out.len());
    Ok(out)
}

/// Encode `tag` as an uncompressed NBT document into `writer`.
pub fn to_writer<W: Write>(mut writer: W, tag: &NamedTag) -> Result<()> {
    Encoder::new(&mut writer).encode_root(tag)
}

pub(crate) trait WriteNbt: Write {
    fn write_tag(&mut self, tag: Tag) -> Result<()> {
        self.write_u8(tag as u8)?;
        Ok(())
    }

    /// A u16 count of UTF-8 bytes followed by the bytes.
    fn write_size_prefixed_str(&mut self, s: &str) -> Result<()> {
        let len = u16::try_from(s.len()).map_err(|_| Error::string_too_long(s.len()))?;
        self.write_u16::<BigEndian>(len)?;
        self.write_all(s.as_bytes())?;
        Ok(())
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        let len = i32::try_from(len).map_err(|_| Error::length_too_large(len))?;
        self.write_i32::<BigEndian>(len)?;
        Ok(())
    }
}

impl<T> WriteNbt for T where T: Write {}

struct Encoder<W> {
    writer: W,
    depth: usize,
}

impl<W: Write> Encoder<W> {
    fn new(writer: W) -> Self {
        Self { writer, depth: 0 }
    }

    fn encode_root(&mut self, tag: &NamedTag) -> Result<()> {
        // A bare End has no name on the wire.
        if tag.tag() == Tag::End {
            return self.writer.write_tag(Tag::End);
        }

        self.encode_named(tag)
    }

    fn encode_named(&mut self, tag: &NamedTag) -> Result<()> {
        self.writer.write_tag(tag.tag())?;
        self.writer.write_size_prefixed_str(tag.name().unwrap_or(""))?;
        self.encode_value(tag.value())
    }

    fn encode_value(&mut self, value: &Value) -> Result<()> {
        let w = &mut self.writer;
        match value {
            Value::End => {}
            Value::Byte(v) => w.write_i8(*v)?,
            Value::Short(v) => w.write_i16::<BigEndian>(*v)?,
            Value::Int(v) => w.write_i32::<BigEndian>(*v)?,
            Value::Long(v) => w.write_i64::<BigEndian>(*v)?,
            Value::Float(v) => w.write_f32::<BigEndian>(*v)?,
            Value::Double(v) => w.write_f64::<BigEndian>(*v)?,
            Value::String(v) => w.write_size_prefixed_str(v)?,
            Value::ByteArray(v) => {
                w.write_len(v.len())?;
                for b in v.iter() {
                    w.write_i8(*b)?;
                }
            }
            Value::IntArray(v) => {
                w.write_len(v.len())?;
                for i in v.iter() {
                    w.write_i32::<BigEndian>(*i)?;
                }
            }
            Value::LongArray(v) => {
                w.write_len(v.len())?;
                for l in v.iter() {
                    w.write_i64::<BigEndian>(*l)?;
                }
            }
            Value::List(list) => self.nested(|enc| {
                enc.writer.write_tag(list.element_tag())?;
                enc.writer.write_len(list.len())?;
                for item in list {
                    enc.encode_value(item)?;
                }
                Ok(())
            })?,
            Value::Compound(members) => self.nested(|enc| {
                for member in members {
                    // An End member would terminate the compound early.
                    if member.tag() == Tag::End {
                        return Err(Error::end_in_compound());
                    }
                    enc.encode_named(member)?;
                }
                enc.writer.write_tag(Tag::End)
            })?,
        }

        Ok(())
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self) -> Result<()>) -> Result<()> {
        if self.depth >= DEFAULT_MAX_DEPTH {
            return Err(Error::encode_depth_exceeded(DEFAULT_MAX_DEPTH));
        }

        self.depth += 1;
        let res = f(self);
        self.depth -= 1;
        res
    }
}
