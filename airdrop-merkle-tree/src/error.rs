use thiserror::Error;

/// Errors from airdrop merkle tree operations.
#[derive(Debug, Error)]
pub enum AirdropTreeError {
    /// Tried to build a tree over zero claims; such a tree has no
    /// well-defined root.
    #[error("cannot build a merkle tree from an empty claim set")]
    EmptyClaimSet,
    /// The claim's recomputed leaf hash is absent from the committed set.
    /// Signals a caller bug (address/amount must match the committed claim
    /// byte-exactly), not a transient failure.
    #[error("claim not found in the committed set: address {address}, amount {amount}")]
    ClaimNotFound {
        /// Address of the claim that failed to match.
        address: String,
        /// Amount of the claim that failed to match.
        amount: String,
    },
    /// A proof or root element is not a valid 32-byte digest. Distinct from
    /// a well-formed proof that merely fails verification, which is reported
    /// as `false`, not as an error.
    #[error("malformed proof: {0}")]
    MalformedProof(String),
}
