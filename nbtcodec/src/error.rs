//! Contains the Error and Result type used by the decoder and encoder.
use std::fmt::Display;

use crate::Tag;

/// Various errors that can occur while decoding or encoding NBT.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Input ended before a value or a length-prefixed field was complete.
    NoData,

    /// A type id outside of the 13 known tags was found.
    UnknownTag(u8),

    /// The input was structurally invalid NBT.
    BadDecode(DecodeError),

    /// Lists and compounds were nested deeper than allowed. Contains the limit.
    DepthExceeded(usize),

    /// The tree could not be represented as NBT.
    BadEncode(EncodeError),

    /// Failure writing to the underlying writer.
    Io,
}

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DecodeError {
    /// Input looked compressed but could not be inflated.
    CannotDecompress,

    /// A list element did not have the list's element type.
    InvalidArrayElementType { expected: Tag, found: Tag },

    /// A string was not valid UTF-8. Contains the offending bytes.
    Nonunicode(Vec<u8>),

    /// An array or list had a negative length.
    NegativeLength(i32),

    /// A payload had bytes left over after decoding. Contains the number.
    TrailingData(usize),

    /// An array or list was longer than the configured maximum.
    SeqTooLong(usize),
}

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EncodeError {
    /// Strings and names are limited to `u16::MAX` bytes of UTF-8.
    StringTooLong(usize),

    /// Arrays and lists are limited to `i32::MAX` elements.
    LengthTooLarge(usize),

    /// The compression codec failed.
    CannotCompress,

    /// The tree was nested deeper than allowed. Contains the limit.
    DepthExceeded(usize),

    /// A compound held an End member. End only terminates a compound.
    EndInCompound,
}

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self.kind, ErrorKind::NoData)
    }

    pub fn is_bad_decode(&self) -> bool {
        matches!(self.kind, ErrorKind::BadDecode(_))
    }

    pub(crate) fn no_data() -> Self {
        Self {
            msg: "no data: unexpectedly ran out of input".to_owned(),
            kind: ErrorKind::NoData,
        }
    }

    pub(crate) fn unknown_tag(tag: u8) -> Self {
        Self {
            msg: format!("unknown nbt tag id: {}", tag),
            kind: ErrorKind::UnknownTag(tag),
        }
    }

    pub(crate) fn cannot_decompress(e: impl Display) -> Self {
        Self {
            msg: format!("input appeared compressed but could not be decompressed: {}", e),
            kind: ErrorKind::BadDecode(DecodeError::CannotDecompress),
        }
    }

    pub(crate) fn invalid_element(expected: Tag, found: Tag) -> Self {
        Self {
            msg: format!(
                "invalid list element: expected {:?}, found {:?}",
                expected, found
            ),
            kind: ErrorKind::BadDecode(DecodeError::InvalidArrayElementType { expected, found }),
        }
    }

    pub(crate) fn nonunicode(data: &[u8]) -> Self {
        Self {
            msg: format!(
                "invalid nbt string: nonunicode: {}",
                String::from_utf8_lossy(data)
            ),
            kind: ErrorKind::BadDecode(DecodeError::Nonunicode(data.to_vec())),
        }
    }

    pub(crate) fn negative_length(len: i32) -> Self {
        Self {
            msg: format!("invalid length: {} is negative", len),
            kind: ErrorKind::BadDecode(DecodeError::NegativeLength(len)),
        }
    }

    pub(crate) fn trailing_data(n: usize) -> Self {
        Self {
            msg: format!("payload had {} trailing bytes", n),
            kind: ErrorKind::BadDecode(DecodeError::TrailingData(n)),
        }
    }

    pub(crate) fn seq_too_long(len: usize) -> Self {
        Self {
            msg: format!("sequence of length {} exceeds the maximum", len),
            kind: ErrorKind::BadDecode(DecodeError::SeqTooLong(len)),
        }
    }

    pub(crate) fn depth_exceeded(limit: usize) -> Self {
        Self {
            msg: format!("nesting deeper than {} levels", limit),
            kind: ErrorKind::DepthExceeded(limit),
        }
    }

    pub(crate) fn string_too_long(len: usize) -> Self {
        Self {
            msg: format!("string of {} bytes is too long for nbt", len),
            kind: ErrorKind::BadEncode(EncodeError::StringTooLong(len)),
        }
    }

    pub(crate) fn length_too_large(len: usize) -> Self {
        Self {
            msg: format!("length {} too large for nbt", len),
            kind: ErrorKind::BadEncode(EncodeError::LengthTooLarge(len)),
        }
    }

    pub(crate) fn cannot_compress(e: impl Display) -> Self {
        Self {
            msg: format!("could not compress output: {}", e),
            kind: ErrorKind::BadEncode(EncodeError::CannotCompress),
        }
    }

    pub(crate) fn end_in_compound() -> Self {
        Self {
            msg: "compound contains an end tag as a member".to_owned(),
            kind: ErrorKind::BadEncode(EncodeError::EndInCompound),
        }
    }

    pub(crate) fn encode_depth_exceeded(limit: usize) -> Self {
        Self {
            msg: format!("cannot encode nesting deeper than {} levels", limit),
            kind: ErrorKind::BadEncode(EncodeError::DepthExceeded(limit)),
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Error::no_data(),
            _ => Self {
                msg: format!("io error: {}", e),
                kind: ErrorKind::Io,
            },
        }
    }
}
