//! Inclusion proof type and its hex/byte codecs.
//!
//! An [`AirdropProof`] is the ordered sequence of sibling digests needed to
//! recompute the root from a claim's leaf hash. Because siblings are merged
//! with sorted-pair hashing, the proof carries no positional metadata: a
//! bare digest sequence is the whole wire format.

use bincode::{Decode, Encode};

use crate::{
    AirdropTreeError,
    hash::{Digest, decode_digest},
};

/// An inclusion proof for a single claim.
///
/// Siblings are ordered from the leaf level up to just below the root. The
/// field is `pub(crate)` so external proofs enter only through
/// [`from_hex`](AirdropProof::from_hex) or
/// [`decode_from_slice`](AirdropProof::decode_from_slice), which validate
/// digest shape.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct AirdropProof {
    pub(crate) siblings: Vec<Digest>,
}

impl AirdropProof {
    pub(crate) fn new(siblings: Vec<Digest>) -> Self {
        AirdropProof { siblings }
    }

    /// The sibling digests, leaf level first.
    pub fn siblings(&self) -> &[Digest] {
        &self.siblings
    }

    /// Number of sibling digests in the proof path.
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    /// Whether the proof path is empty (a single-claim tree).
    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// The proof path as lowercase hex strings without a `0x` prefix.
    pub fn to_hex(&self) -> Vec<String> {
        self.siblings.iter().map(hex::encode).collect()
    }

    /// Decode a proof path from hex strings.
    ///
    /// Returns [`AirdropTreeError::MalformedProof`] if any element is not
    /// valid hex or does not decode to exactly 32 bytes.
    pub fn from_hex<S: AsRef<str>>(proof_hex: &[S]) -> Result<Self, AirdropTreeError> {
        let siblings = proof_hex
            .iter()
            .map(|item| decode_digest(item.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(AirdropProof { siblings })
    }

    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, AirdropTreeError> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_no_limit();
        bincode::encode_to_vec(self, config)
            .map_err(|e| AirdropTreeError::MalformedProof(format!("encode error: {}", e)))
    }

    /// Decode from bytes using bincode.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self, AirdropTreeError> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<{ 1024 * 1024 }>(); // 1 MiB limit
        let (proof, _): (Self, _) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| AirdropTreeError::MalformedProof(format!("decode error: {}", e)))?;
        Ok(proof)
    }
}
