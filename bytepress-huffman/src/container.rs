//! The on-disk Huffman container format.
//!
//! ```text
//! [4 bytes LE u32] codebook_bit_length
//! [8 bytes LE u64] data_bit_length
//! [codebook bits][payload bits]   packed MSB-first, zero-padded
//! ```
//!
//! The codebook block is a concatenation of entries, one per distinct
//! byte in ascending byte order: `[8 bits value][8 bits code length L]
//! [L bits code]`. The two length fields are positional, not sentinel
//! delimited: the decoder reads exactly `codebook_bit_length` bits of
//! entries and then exactly `data_bit_length` bits of payload, ignoring
//! any padding bits after that.

use bytepress_core::error::{BytepressError, Result};
use bytepress_core::{MsbBitReader, MsbBitWriter};

use crate::codebook::{Code, Codebook, DecodeTrie};

/// Fixed header size: 4-byte codebook length plus 8-byte payload length.
pub(crate) const HEADER_SIZE: usize = 12;

/// Parsed container header.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Header {
    pub(crate) codebook_bits: u32,
    pub(crate) data_bits: u64,
}

/// Append `code` MSB-first to the bit stream.
fn write_code(bits: &mut MsbBitWriter, code: Code) {
    if code.len > 32 {
        bits.write_bits((code.bits >> 32) as u32, code.len - 32);
        bits.write_bits(code.bits as u32, 32);
    } else {
        bits.write_bits(code.bits as u32, code.len);
    }
}

/// Serialize the codebook and the encoded payload into a container.
pub(crate) fn build(codebook: &Codebook, input: &[u8]) -> Vec<u8> {
    let mut bits = MsbBitWriter::new();

    for (byte, code) in codebook.iter() {
        bits.write_bits(byte as u32, 8);
        bits.write_bits(code.len as u32, 8);
        write_code(&mut bits, code);
    }
    let codebook_bits = bits.bits_written();

    for &byte in input {
        let code = codebook
            .get(byte)
            .expect("codebook covers every byte of the encoded input");
        write_code(&mut bits, code);
    }
    let data_bits = bits.bits_written() - codebook_bits;

    let packed = bits.into_vec();
    let mut out = Vec::with_capacity(HEADER_SIZE + packed.len());
    out.extend_from_slice(&(codebook_bits as u32).to_le_bytes());
    out.extend_from_slice(&data_bits.to_le_bytes());
    out.extend_from_slice(&packed);
    out
}

/// Validate the fixed header and split off the packed bit region.
pub(crate) fn parse(data: &[u8]) -> Result<(Header, &[u8])> {
    if data.len() < HEADER_SIZE {
        return Err(BytepressError::bad_format(format!(
            "file is {} bytes, shorter than the {HEADER_SIZE}-byte header",
            data.len()
        )));
    }

    let codebook_bits = u32::from_le_bytes(data[0..4].try_into().expect("slice is 4 bytes"));
    let data_bits = u64::from_le_bytes(data[4..12].try_into().expect("slice is 8 bytes"));
    let packed = &data[HEADER_SIZE..];

    let available_bits = packed.len() as u64 * 8;
    let declared_bits = (codebook_bits as u64)
        .checked_add(data_bits)
        .ok_or_else(|| BytepressError::bad_format("declared bit lengths overflow"))?;
    if declared_bits > available_bits {
        return Err(BytepressError::bad_format(format!(
            "header declares {declared_bits} bits but only {available_bits} are present"
        )));
    }

    Ok((
        Header {
            codebook_bits,
            data_bits,
        },
        packed,
    ))
}

/// Read exactly `codebook_bits` bits of codebook entries into a trie.
///
/// The reader must be positioned at the start of the packed region.
pub(crate) fn parse_codebook(
    reader: &mut MsbBitReader<'_>,
    codebook_bits: u32,
) -> Result<DecodeTrie> {
    let mut trie = DecodeTrie::new();
    let end = codebook_bits as u64;

    while reader.bits_read() < end {
        let position = reader.bits_read();
        if end - position < 16 {
            return Err(BytepressError::corrupt(
                position,
                "codebook entry extends past the declared codebook length",
            ));
        }
        let byte = reader.read_bits(8)? as u8;
        let len = reader.read_bits(8)? as u8;
        if u64::from(len) > end - reader.bits_read() {
            return Err(BytepressError::corrupt(
                position,
                format!("code for byte {byte} extends past the declared codebook length"),
            ));
        }
        let mut path = Vec::with_capacity(len as usize);
        for _ in 0..len {
            path.push(reader.read_bit()?);
        }
        trie.insert(byte, &path, position)?;
    }

    Ok(trie)
}
