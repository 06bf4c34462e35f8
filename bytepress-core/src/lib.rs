//! # Bytepress Core
//!
//! Core components for the Bytepress compression library.
//!
//! This crate provides the building blocks shared by both codecs:
//!
//! - [`bitstream`]: MSB-first bit-level I/O for variable-length codes
//! - [`fileio`]: whole-file reading and atomic writing
//! - [`codec`]: the whole-buffer compress/decompress trait
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! Bytepress is a small layered stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ CLI                                         │
//! │     bytepress compress/decompress/info      │
//! ├─────────────────────────────────────────────┤
//! │ Codecs                                      │
//! │     bytepress-huffman, bytepress-lz77       │
//! ├─────────────────────────────────────────────┤
//! │ Core (this crate)                           │
//! │     MsbBitReader/MsbBitWriter, file I/O     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use bytepress_core::bitstream::{MsbBitReader, MsbBitWriter};
//!
//! let mut writer = MsbBitWriter::new();
//! writer.write_bits(0b101, 3);
//! writer.write_bits(0b1100, 4);
//! let data = writer.into_vec();
//!
//! let mut reader = MsbBitReader::new(&data);
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(4).unwrap(), 0b1100);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod codec;
pub mod error;
pub mod fileio;

// Re-exports for convenience
pub use bitstream::{MsbBitReader, MsbBitWriter};
pub use codec::Codec;
pub use error::{BytepressError, Result};
pub use fileio::{read_file, write_file_atomic};
