//! Token type and fixed-width record framing.
//!
//! The container is a flat concatenation of 4-byte records:
//! `[2 bytes LE offset][1 byte length][1 byte literal]`. There is no
//! header; a file whose length is not a multiple of the record size is
//! rejected outright rather than silently truncated.

use bytepress_core::error::{BytepressError, Result};

/// Serialized width of the offset field in bytes.
pub const OFFSET_SIZE: usize = 2;

/// Serialized width of the length field in bytes.
pub const LENGTH_SIZE: usize = 1;

/// Total width of one serialized token record.
pub const RECORD_SIZE: usize = OFFSET_SIZE + LENGTH_SIZE + 1;

/// One LZ77 token: copy `length` bytes starting `offset` bytes back,
/// then append `literal`.
///
/// `offset == 0` and `length == 0` together mean "no match, literal
/// only". The literal is always present, which is what guarantees the
/// encoder advances on every token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Distance backward from the write position to the match start.
    pub offset: u16,
    /// Number of bytes to copy.
    pub length: u8,
    /// Raw byte emitted after the (possibly empty) match.
    pub literal: u8,
}

impl Token {
    /// A token carrying no back-reference.
    pub fn literal_only(literal: u8) -> Self {
        Self {
            offset: 0,
            length: 0,
            literal,
        }
    }

    fn to_record(self) -> [u8; RECORD_SIZE] {
        let [off_lo, off_hi] = self.offset.to_le_bytes();
        [off_lo, off_hi, self.length, self.literal]
    }

    fn from_record(record: &[u8]) -> Self {
        Self {
            offset: u16::from_le_bytes([record[0], record[1]]),
            length: record[2],
            literal: record[3],
        }
    }
}

/// Serialize tokens as a flat run of fixed-width records.
pub fn serialize_tokens(tokens: &[Token]) -> Vec<u8> {
    let mut out = Vec::with_capacity(tokens.len() * RECORD_SIZE);
    for token in tokens {
        out.extend_from_slice(&token.to_record());
    }
    out
}

/// Number of records in a serialized token stream.
///
/// Fails with a bad-format error if the length is not a multiple of
/// [`RECORD_SIZE`].
pub fn record_count(data: &[u8]) -> Result<usize> {
    if data.len() % RECORD_SIZE != 0 {
        return Err(BytepressError::bad_format(format!(
            "file length {} is not a multiple of the {RECORD_SIZE}-byte record size",
            data.len()
        )));
    }
    Ok(data.len() / RECORD_SIZE)
}

/// Parse a serialized token stream back into tokens.
pub fn parse_records(data: &[u8]) -> Result<Vec<Token>> {
    let count = record_count(data)?;
    let mut tokens = Vec::with_capacity(count);
    for record in data.chunks_exact(RECORD_SIZE) {
        tokens.push(Token::from_record(record));
    }
    Ok(tokens)
}
