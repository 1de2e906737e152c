//! Proof verification.
//!
//! Pure functions — no tree or storage required. The root is recomputed by
//! folding the proof path over the claim's leaf hash and compared to the
//! expected root.

use crate::{
    AirdropTreeError, Claim,
    hash::{Digest, decode_digest, merge_sorted},
    proof::AirdropProof,
};

impl AirdropProof {
    /// Verify this proof for a claim against an expected root.
    ///
    /// Folds `acc = blake3(min(acc, sibling) ++ max(acc, sibling))` starting
    /// from the claim's leaf hash. Sorted-pair hashing makes the fold
    /// symmetric in left/right, so no positional metadata is needed.
    ///
    /// A well-formed proof that fails to match returns `false`, never an
    /// error.
    pub fn verify(&self, claim: &Claim, expected_root: &Digest) -> bool {
        let mut acc = claim.leaf_hash();
        for sibling in self.siblings() {
            acc = merge_sorted(&acc, sibling);
        }
        acc == *expected_root
    }
}

/// Verify a hex-encoded proof for a claim against a hex-encoded root.
///
/// Returns [`AirdropTreeError::MalformedProof`] if the root or any proof
/// element fails to decode into a 32-byte digest; a structurally valid proof
/// that merely fails to match yields `Ok(false)`.
pub fn verify_hex<S: AsRef<str>>(
    proof_hex: &[S],
    claim: &Claim,
    root_hex: &str,
) -> Result<bool, AirdropTreeError> {
    let proof = AirdropProof::from_hex(proof_hex)?;
    let root = decode_digest(root_hex)?;
    Ok(proof.verify(claim, &root))
}
