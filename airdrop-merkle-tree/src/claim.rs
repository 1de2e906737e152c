use serde::{Deserialize, Serialize};

use crate::hash::{self, Digest};

/// A single airdrop entitlement: the claiming address and the amount it is
/// owed.
///
/// `amount` is a decimal string and stays one: it is hashed as its raw UTF-8
/// bytes and never parsed as a number, so amounts beyond machine-integer
/// precision survive byte-exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Recipient address, hashed as its raw UTF-8 bytes.
    pub address: String,
    /// Amount owed, as a decimal string.
    pub amount: String,
}

impl Claim {
    /// Create a claim from an address and a decimal amount string.
    pub fn new(address: impl Into<String>, amount: impl Into<String>) -> Self {
        Claim {
            address: address.into(),
            amount: amount.into(),
        }
    }

    /// The leaf digest committing to this claim:
    /// `blake3(address_bytes ++ amount_bytes)`.
    pub fn leaf_hash(&self) -> Digest {
        hash::leaf_hash(&self.address, &self.amount)
    }
}
