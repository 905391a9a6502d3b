//! Compression codecs applied around a whole NBT document.
//!
//! NBT itself is never compressed per tag. Files such as `level.dat` and
//! player data are GZip compressed as a whole, and chunks inside region files
//! are usually Zlib compressed. The codec only ever calls the three methods of
//! [`Compression`], once on the way in and once on the way out.

use std::io::{self, Read, Write};

use flate2::read::{GzDecoder, ZlibDecoder};
use flate2::write::{GzEncoder, ZlibEncoder};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// A whole-buffer compression codec.
pub trait Compression {
    /// Whether `data` looks like it was produced by this codec.
    fn is_compressed(&self, data: &[u8]) -> bool;

    fn decompress(&self, data: &[u8]) -> io::Result<Vec<u8>>;

    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>>;
}

/// GZip, as used by `level.dat` and player `.dat` files. Detected by its magic
/// bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gzip;

impl Compression for Gzip {
    fn is_compressed(&self, data: &[u8]) -> bool {
        data.starts_with(&GZIP_MAGIC)
    }

    fn decompress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        let mut out = vec![];
        GzDecoder::new(data).read_to_end(&mut out)?;
        Ok(out)
    }

    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        let mut encoder = GzEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(data)?;
        encoder.finish()
    }
}

/// Zlib, as used for chunks stored in region files.
///
/// Detected by the two byte header: deflate with a 32K window (`0x78`), and a
/// check byte making the header a multiple of 31. Uncompressed NBT never
/// starts like this since `0x78` is not a valid tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zlib;

impl Compression for Zlib {
    fn is_compressed(&self, data: &[u8]) -> bool {
        match data {
            [cmf, flg, ..] => *cmf == 0x78 && (u16::from(*cmf) << 8 | u16::from(*flg)) % 31 == 0,
            _ => false,
        }
    }

    fn decompress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        let mut out = vec![];
        ZlibDecoder::new(data).read_to_end(&mut out)?;
        Ok(out)
    }

    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        let mut encoder = ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(data)?;
        encoder.finish()
    }
}

/// No compression. Nothing is ever detected as compressed and data passes
/// through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uncompressed;

impl Compression for Uncompressed {
    fn is_compressed(&self, _data: &[u8]) -> bool {
        false
    }

    fn decompress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        Ok(data.to_vec())
    }

    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        Ok(data.to_vec())
    }
}
