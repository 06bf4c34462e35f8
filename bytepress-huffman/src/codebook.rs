//! Codebook derivation and the decode-side code trie.
//!
//! Encoding maps each byte through a flat `[Option<Code>; 256]` table.
//! Decoding never materializes code values: the serialized codebook is
//! rebuilt into a binary trie and the payload is replayed one bit at a
//! time, which keeps decode O(1) per bit regardless of code length.

use bytepress_core::error::{BytepressError, Result};
use bytepress_core::MsbBitReader;

use crate::tree::{HuffNode, NodeKind};

/// A variable-length prefix code, MSB-first in the low `len` bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Code {
    pub(crate) bits: u64,
    pub(crate) len: u8,
}

/// Byte-to-code mapping derived from a Huffman tree.
///
/// Only byte values present in the encoded input carry a code. The set of
/// codes is prefix-free: every code is the path from the tree root to a
/// distinct leaf.
#[derive(Debug)]
pub(crate) struct Codebook {
    codes: [Option<Code>; 256],
}

impl Codebook {
    /// A codebook with no entries (empty input).
    pub(crate) fn new_empty() -> Self {
        Self { codes: [None; 256] }
    }

    /// Derive the codebook by walking the tree depth-first.
    ///
    /// The walk uses an explicit stack rather than recursion; `0` is
    /// appended entering the zero child and `1` entering the one child.
    /// A tree consisting of a single leaf yields the fixed 1-bit code `0`
    /// for its byte, so the degenerate single-symbol alphabet still
    /// decodes unambiguously.
    pub(crate) fn from_tree(root: &HuffNode) -> Self {
        let mut codes = [None; 256];
        let mut stack: Vec<(&HuffNode, u64, u8)> = vec![(root, 0, 0)];

        while let Some((node, bits, len)) = stack.pop() {
            match &node.kind {
                NodeKind::Leaf(byte) => {
                    let code = if len == 0 {
                        Code { bits: 0, len: 1 }
                    } else {
                        Code { bits, len }
                    };
                    codes[*byte as usize] = Some(code);
                }
                NodeKind::Internal { zero, one } => {
                    debug_assert!(len < 64, "code length exceeds 64 bits");
                    stack.push((one.as_ref(), (bits << 1) | 1, len + 1));
                    stack.push((zero.as_ref(), bits << 1, len + 1));
                }
            }
        }

        Self { codes }
    }

    /// Look up the code for a byte value.
    pub(crate) fn get(&self, byte: u8) -> Option<Code> {
        self.codes[byte as usize]
    }

    /// Iterate entries in ascending byte order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(byte, code)| code.map(|c| (byte as u8, c)))
    }
}

/// Binary trie built from a serialized codebook, used for decoding.
#[derive(Debug)]
pub(crate) struct DecodeTrie {
    nodes: Vec<TrieNode>,
}

#[derive(Debug, Default)]
struct TrieNode {
    children: [Option<u32>; 2],
    symbol: Option<u8>,
}

impl DecodeTrie {
    /// An empty trie containing only the root.
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    /// Insert the code `path` for `byte`.
    ///
    /// Rejects entries that violate prefix-freeness (a code equal to,
    /// prefixed by, or prefixing an existing one) and zero-length codes;
    /// `position` is the bit offset of the entry, used in error reports.
    pub(crate) fn insert(&mut self, byte: u8, path: &[bool], position: u64) -> Result<()> {
        if path.is_empty() {
            return Err(BytepressError::corrupt(
                position,
                format!("zero-length code for byte {byte}"),
            ));
        }

        let mut node = 0usize;
        for &bit in path {
            if self.nodes[node].symbol.is_some() {
                return Err(BytepressError::corrupt(
                    position,
                    format!("code for byte {byte} is prefixed by another code"),
                ));
            }
            let slot = bit as usize;
            node = match self.nodes[node].children[slot] {
                Some(child) => child as usize,
                None => {
                    let child = self.nodes.len() as u32;
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children[slot] = Some(child);
                    child as usize
                }
            };
        }

        let end = &mut self.nodes[node];
        if end.symbol.is_some() || end.children.iter().any(Option::is_some) {
            return Err(BytepressError::corrupt(
                position,
                format!("code for byte {byte} duplicates or prefixes another code"),
            ));
        }
        end.symbol = Some(byte);
        Ok(())
    }

    /// Number of symbols stored in the trie.
    pub(crate) fn symbol_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.symbol.is_some()).count()
    }

    /// Replay exactly `data_bits` payload bits, emitting a byte at every
    /// leaf and returning to the root.
    ///
    /// Fails with a corrupt-data error if a bit path leaves the trie or
    /// the payload ends in the middle of a code.
    pub(crate) fn decode_payload(
        &self,
        reader: &mut MsbBitReader<'_>,
        data_bits: u64,
    ) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let mut node = 0usize;

        for _ in 0..data_bits {
            let position = reader.bits_read();
            let bit = reader.read_bit()?;
            node = match self.nodes[node].children[bit as usize] {
                Some(child) => child as usize,
                None => {
                    return Err(BytepressError::corrupt(
                        position,
                        "bit sequence matches no code in the codebook",
                    ));
                }
            };
            if let Some(byte) = self.nodes[node].symbol {
                out.push(byte);
                node = 0;
            }
        }

        if node != 0 {
            return Err(BytepressError::corrupt(
                reader.bits_read(),
                "payload ends in the middle of a code",
            ));
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{build_tree, count_frequencies};

    fn codebook_for(input: &[u8]) -> Codebook {
        let root = build_tree(&count_frequencies(input)).expect("nonempty input");
        Codebook::from_tree(&root)
    }

    fn is_prefix(a: Code, b: Code) -> bool {
        a.len <= b.len && (b.bits >> (b.len - a.len)) == a.bits
    }

    #[test]
    fn test_single_leaf_gets_one_bit_code() {
        let book = codebook_for(b"AAAA");
        assert_eq!(book.iter().count(), 1);
        assert_eq!(book.get(b'A'), Some(Code { bits: 0, len: 1 }));
    }

    #[test]
    fn test_two_symbol_codes() {
        let book = codebook_for(b"AB");
        assert_eq!(book.get(b'A'), Some(Code { bits: 0, len: 1 }));
        assert_eq!(book.get(b'B'), Some(Code { bits: 1, len: 1 }));
    }

    #[test]
    fn test_frequent_symbol_gets_shortest_code() {
        // a:3 n:2 b:1 -> a must sit closest to the root
        let book = codebook_for(b"banana");
        let a = book.get(b'a').unwrap();
        let b = book.get(b'b').unwrap();
        let n = book.get(b'n').unwrap();
        assert_eq!(a.len, 1);
        assert_eq!(b.len, 2);
        assert_eq!(n.len, 2);
    }

    #[test]
    fn test_codebook_is_prefix_free() {
        let book = codebook_for(b"abracadabra, the quick brown fox");
        let codes: Vec<(u8, Code)> = book.iter().collect();
        assert!(codes.len() >= 2);
        for (i, &(_, a)) in codes.iter().enumerate() {
            for &(_, b) in codes.iter().skip(i + 1) {
                assert!(!is_prefix(a, b), "{a:?} is a prefix of {b:?}");
                assert!(!is_prefix(b, a), "{b:?} is a prefix of {a:?}");
            }
        }
    }

    #[test]
    fn test_all_256_symbols_covered() {
        let input: Vec<u8> = (0..=255u8).collect();
        let book = codebook_for(&input);
        assert_eq!(book.iter().count(), 256);
        // 256 equal weights make a perfectly balanced tree
        for (_, code) in book.iter() {
            assert_eq!(code.len, 8);
        }
    }

    #[test]
    fn test_trie_rejects_prefix_violation() {
        let mut trie = DecodeTrie::new();
        trie.insert(b'a', &[false], 0).unwrap();
        // "0" already maps to 'a', so "00" is prefixed by it
        let err = trie.insert(b'b', &[false, false], 17).unwrap_err();
        assert!(err.to_string().contains("prefixed"));
    }

    #[test]
    fn test_trie_rejects_duplicate_code() {
        let mut trie = DecodeTrie::new();
        trie.insert(b'a', &[true, false], 0).unwrap();
        assert!(trie.insert(b'b', &[true, false], 18).is_err());
        // an existing code prefixing the new entry's ancestor is also out
        assert!(trie.insert(b'c', &[true], 36).is_err());
    }

    #[test]
    fn test_trie_rejects_zero_length_code() {
        let mut trie = DecodeTrie::new();
        assert!(trie.insert(b'a', &[], 0).is_err());
    }
}
