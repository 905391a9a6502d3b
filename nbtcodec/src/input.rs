use byteorder::{BigEndian, ReadBytesExt};

use crate::{
    error::{Error, Result},
    Tag,
};

/// Cursor over an in-memory NBT buffer. Every read is all-or-nothing: if
/// there is not enough input the cursor is left where it was.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Slice<'de> {
    data: &'de [u8],
}

impl<'de> Slice<'de> {
    pub fn new(data: &'de [u8]) -> Self {
        Self { data }
    }

    pub fn remaining(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn consume(&mut self, n: usize) -> Result<&'de [u8]> {
        if n <= self.data.len() {
            let (ret, rest) = self.data.split_at(n);
            self.data = rest;
            Ok(ret)
        } else {
            Err(Error::no_data())
        }
    }

    /// Run `read` against a copy of the cursor, leaving this one untouched.
    pub fn peek<T>(&self, read: impl FnOnce(&mut Slice<'de>) -> Result<T>) -> Result<T> {
        let mut copy = *self;
        read(&mut copy)
    }

    pub fn peek_byte(&self) -> Result<u8> {
        self.peek(|s| s.consume_byte())
    }

    pub fn peek_tag(&self) -> Result<Tag> {
        self.peek(|s| s.consume_tag())
    }

    pub fn consume_byte(&mut self) -> Result<u8> {
        Ok(self.consume(1)?[0])
    }

    pub fn consume_i8(&mut self) -> Result<i8> {
        Ok(self.consume_byte()? as i8)
    }

    pub fn consume_tag(&mut self) -> Result<Tag> {
        let tag = self.peek_byte()?;
        let tag = Tag::try_from(tag).map_err(|_| Error::unknown_tag(tag))?;
        self.consume(1)?;
        Ok(tag)
    }

    pub fn consume_u16(&mut self) -> Result<u16> {
        let mut bs = self.consume(std::mem::size_of::<u16>())?;
        Ok(bs.read_u16::<BigEndian>()?)
    }

    pub fn consume_i16(&mut self) -> Result<i16> {
        let mut bs = self.consume(std::mem::size_of::<i16>())?;
        Ok(bs.read_i16::<BigEndian>()?)
    }

    pub fn consume_i32(&mut self) -> Result<i32> {
        let mut bs = self.consume(std::mem::size_of::<i32>())?;
        Ok(bs.read_i32::<BigEndian>()?)
    }

    pub fn consume_i64(&mut self) -> Result<i64> {
        let mut bs = self.consume(std::mem::size_of::<i64>())?;
        Ok(bs.read_i64::<BigEndian>()?)
    }

    pub fn consume_f32(&mut self) -> Result<f32> {
        let mut bs = self.consume(std::mem::size_of::<f32>())?;
        Ok(bs.read_f32::<BigEndian>()?)
    }

    pub fn consume_f64(&mut self) -> Result<f64> {
        let mut bs = self.consume(std::mem::size_of::<f64>())?;
        Ok(bs.read_f64::<BigEndian>()?)
    }

    /// A u16 byte length followed by that many bytes of UTF-8. The length
    /// counts bytes, not characters.
    pub fn consume_str(&mut self) -> Result<String> {
        let (s, rest) = {
            let mut copy = *self;
            let len = copy.consume_u16()? as usize;
            let bytes = copy.consume(len)?;
            let s = std::str::from_utf8(bytes).map_err(|_| Error::nonunicode(bytes))?;
            (s.to_owned(), copy)
        };
        *self = rest;
        Ok(s)
    }

    /// An i32 element count, rejected if negative.
    pub fn consume_len(&mut self) -> Result<usize> {
        let len = self.peek(|s| s.consume_i32())?;
        let len = usize::try_from(len).map_err(|_| Error::negative_length(len))?;
        self.consume(std::mem::size_of::<i32>())?;
        Ok(len)
    }
}
