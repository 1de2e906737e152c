use crate::AirdropTreeError;

/// A 32-byte Blake3 digest.
pub type Digest = [u8; 32];

/// Compute the leaf digest for a claim:
/// `blake3(address_bytes ++ amount_bytes)`.
///
/// One hash over the UTF-8 concatenation; the fields are not hashed
/// separately and there is no length framing between them.
pub(crate) fn leaf_hash(address: &str, amount: &str) -> Digest {
    let mut hasher = blake3::Hasher::new();
    hasher.update(address.as_bytes());
    hasher.update(amount.as_bytes());
    *hasher.finalize().as_bytes()
}

/// Sorted-pair merge: `blake3(min(a, b) ++ max(a, b))`.
///
/// The pair is ordered byte-lexicographically before hashing, so the result
/// is independent of which sibling sat left or right in the tree.
pub(crate) fn merge_sorted(a: &Digest, b: &Digest) -> Digest {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut input = [0u8; 64];
    input[..32].copy_from_slice(lo);
    input[32..].copy_from_slice(hi);
    *blake3::hash(&input).as_bytes()
}

/// Decode a lowercase unprefixed hex string into a 32-byte digest.
pub(crate) fn decode_digest(hex_digest: &str) -> Result<Digest, AirdropTreeError> {
    let bytes = hex::decode(hex_digest)
        .map_err(|e| AirdropTreeError::MalformedProof(format!("invalid hex digest: {}", e)))?;
    Digest::try_from(bytes.as_slice()).map_err(|_| {
        AirdropTreeError::MalformedProof(format!("digest must be 32 bytes, got {}", bytes.len()))
    })
}
