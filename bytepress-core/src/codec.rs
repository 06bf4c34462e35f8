//! The whole-buffer compression trait.

use crate::error::Result;

/// A symmetric whole-buffer compressor.
///
/// Each codec transforms a complete in-memory byte buffer into its
/// container format and back. Implementations are stateless and reentrant:
/// every call owns its intermediate structures and releases them on return.
pub trait Codec {
    /// Human-readable codec name (used in CLI reporting).
    fn name(&self) -> &'static str;

    /// Compress `input` into the codec's container format.
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Decompress a container produced by [`Codec::compress`].
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>>;
}
