//! # Bytepress LZ77
//!
//! Dictionary coder over a bounded backward-reference window.
//!
//! Encoding walks a cursor over the input, greedily finding the longest
//! match for the remaining bytes inside a trailing window of up to
//! [`WINDOW_SIZE`] bytes and emitting `(offset, length, literal)` tokens;
//! tokens are persisted as fixed 4-byte records. Decoding replays tokens
//! by copying previously decoded bytes and appending each literal.
//!
//! ## Example
//!
//! ```rust
//! let original = b"to be or not to be, that is the question";
//! let compressed = bytepress_lz77::compress(original).unwrap();
//! let decompressed = bytepress_lz77::decompress(&compressed).unwrap();
//! assert_eq!(decompressed, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod decoder;
mod encoder;
mod record;

use std::path::Path;

use bytepress_core::error::Result;
use bytepress_core::{Codec, read_file, write_file_atomic};

pub use decoder::decode;
pub use encoder::{MAX_MATCH_LENGTH, WINDOW_SIZE, encode};
pub use record::{
    LENGTH_SIZE, OFFSET_SIZE, RECORD_SIZE, Token, parse_records, record_count, serialize_tokens,
};

/// Compress a buffer into the fixed-width record format.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    Ok(serialize_tokens(&encode(input)))
}

/// Decompress a record stream produced by [`compress`].
///
/// Fails with a bad-format error when the length is not a multiple of
/// [`RECORD_SIZE`] and with a corrupt-data error on invalid
/// back-references.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let tokens = parse_records(data)?;
    decode(&tokens)
}

/// Compress `src` into `dst`.
///
/// Reads the whole source file, compresses it in memory, and writes the
/// result atomically: on failure nothing is left at `dst`.
pub fn compress_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<()> {
    let input = read_file(src)?;
    let output = compress(&input)?;
    write_file_atomic(dst, &output)
}

/// Decompress `src` into `dst`, atomically as [`compress_file`].
pub fn decompress_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<()> {
    let input = read_file(src)?;
    let output = decompress(&input)?;
    write_file_atomic(dst, &output)
}

/// [`Codec`] implementation for the LZ77 coder.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lz77Codec;

impl Codec for Lz77Codec {
    fn name(&self) -> &'static str {
        "lz77"
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        compress(input)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        decompress(input)
    }
}
