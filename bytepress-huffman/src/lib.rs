//! # Bytepress Huffman
//!
//! Statistical (entropy) coder built on a binary prefix tree.
//!
//! Encoding counts byte frequencies, builds a Huffman tree with a
//! deterministic tie-break, derives a prefix-free byte-to-bits codebook,
//! and serializes codebook plus payload into a self-describing container.
//! Decoding parses the embedded codebook into a binary trie and replays
//! the payload bits.
//!
//! ## Example
//!
//! ```rust
//! let original = b"so much huffman, such entropy";
//! let compressed = bytepress_huffman::compress(original).unwrap();
//! let decompressed = bytepress_huffman::decompress(&compressed).unwrap();
//! assert_eq!(decompressed, original);
//! ```
//!
//! ## Degenerate inputs
//!
//! - Empty input encodes to a header-only container that decodes back to
//!   an empty buffer.
//! - An input with a single distinct byte value would naturally get the
//!   empty code (the root is a leaf); the lone byte is instead assigned
//!   the fixed 1-bit code `0` so the payload stays self-delimiting.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod codebook;
mod container;
mod tree;

use std::path::Path;

use bytepress_core::error::Result;
use bytepress_core::{Codec, MsbBitReader, read_file, write_file_atomic};

use codebook::Codebook;

/// Compress a buffer into the Huffman container format.
///
/// Deterministic: repeated calls on the same input produce byte-identical
/// containers.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    let freqs = tree::count_frequencies(input);
    let codebook = match tree::build_tree(&freqs) {
        Some(root) => Codebook::from_tree(&root),
        None => Codebook::new_empty(),
    };
    Ok(container::build(&codebook, input))
}

/// Decompress a container produced by [`compress`].
///
/// Fails with a bad-format error when the file is shorter than its header
/// or its declared bit lengths, and with a corrupt-data error when the
/// codebook is malformed, a bit path matches no code, or the payload ends
/// in the middle of a code.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let (header, packed) = container::parse(data)?;
    let mut reader = MsbBitReader::new(packed);
    let trie = container::parse_codebook(&mut reader, header.codebook_bits)?;
    trie.decode_payload(&mut reader, header.data_bits)
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

/// Summary of a Huffman container, for inspection tooling.
#[derive(Debug, Clone, Copy)]
pub struct ContainerInfo {
    /// Length in bits of the serialized codebook block.
    pub codebook_bits: u32,
    /// Length in bits of the encoded payload.
    pub data_bits: u64,
    /// Number of distinct byte values in the codebook.
    pub distinct_symbols: usize,
}

/// Inspect a container without decoding its payload.
pub fn container_info(data: &[u8]) -> Result<ContainerInfo> {
    let (header, packed) = container::parse(data)?;
    let mut reader = MsbBitReader::new(packed);
    let trie = container::parse_codebook(&mut reader, header.codebook_bits)?;
    Ok(ContainerInfo {
        codebook_bits: header.codebook_bits,
        data_bits: header.data_bits,
        distinct_symbols: trie.symbol_count(),
    })
}

/// [`Codec`] implementation for the Huffman coder.
#[derive(Debug, Default, Clone, Copy)]
pub struct HuffmanCodec;

impl Codec for HuffmanCodec {
    fn name(&self) -> &'static str {
        "huffman"
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        compress(input)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        decompress(input)
    }
}
