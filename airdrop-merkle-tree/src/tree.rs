use std::mem;

use crate::{
    AirdropTreeError, Claim,
    hash::{Digest, merge_sorted},
    proof::AirdropProof,
};

/// A merkle tree committing to a fixed, ordered list of airdrop claims.
///
/// Levels are stored as an arena: level 0 holds the leaf digests in the
/// original claim order, each subsequent level is built by pairing adjacent
/// nodes positionally, and the top level holds exactly one digest, the
/// root. A level with an odd node count carries its lone trailing node up
/// unchanged rather than pairing it with a copy of itself.
///
/// The tree is immutable once built; a changed claim list requires a full
/// rebuild and produces a different root. Proof generation and verification
/// never mutate it, so a built tree is safe to share across concurrent
/// readers.
#[derive(Debug, Clone)]
pub struct MerkleAirdropTree {
    /// Level 0 = leaves in claim order; the last level holds exactly one
    /// digest.
    levels: Vec<Vec<Digest>>,
}

impl MerkleAirdropTree {
    /// Build a tree over a non-empty ordered claim list.
    ///
    /// Leaves are hashed in claim order and pairing is positional, so
    /// reordering the input can change which leaves pair up at level 0 and
    /// therefore the root; sorted-pair hashing only removes left/right
    /// ambiguity within a pair.
    ///
    /// Returns [`AirdropTreeError::EmptyClaimSet`] for an empty input.
    pub fn build(claims: &[Claim]) -> Result<Self, AirdropTreeError> {
        if claims.is_empty() {
            return Err(AirdropTreeError::EmptyClaimSet);
        }

        let mut levels: Vec<Vec<Digest>> = Vec::new();
        let mut current: Vec<Digest> = claims.iter().map(Claim::leaf_hash).collect();
        while current.len() > 1 {
            let next = parent_level(&current);
            levels.push(mem::replace(&mut current, next));
        }
        levels.push(current);

        Ok(MerkleAirdropTree { levels })
    }

    /// The root digest committing to the entire claim set.
    pub fn root(&self) -> Digest {
        // `build` guarantees the last level holds exactly one digest.
        self.levels[self.levels.len() - 1][0]
    }

    /// The root as a lowercase hex string without a `0x` prefix.
    pub fn root_hex(&self) -> String {
        hex::encode(self.root())
    }

    /// Number of leaves (claims) committed to.
    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of levels, leaves included. A single-claim tree has height 1.
    pub fn height(&self) -> usize {
        self.levels.len()
    }

    /// Generate the inclusion proof for a claim.
    ///
    /// The claim's leaf hash is recomputed and located by exact digest match
    /// among the stored leaves; when the same claim appears more than once,
    /// the first matching leaf is proved. The proof holds the sibling digest
    /// at each level from the leaves up to just below the root; a carried
    /// lone node has no sibling and contributes nothing at its level.
    ///
    /// Returns [`AirdropTreeError::ClaimNotFound`] if no leaf matches.
    pub fn proof(&self, claim: &Claim) -> Result<AirdropProof, AirdropTreeError> {
        let leaf = claim.leaf_hash();
        let mut index = self.levels[0]
            .iter()
            .position(|candidate| *candidate == leaf)
            .ok_or_else(|| AirdropTreeError::ClaimNotFound {
                address: claim.address.clone(),
                amount: claim.amount.clone(),
            })?;

        let mut siblings = Vec::with_capacity(self.levels.len() - 1);
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = index ^ 1;
            if sibling < level.len() {
                siblings.push(level[sibling]);
            }
            index /= 2;
        }
        Ok(AirdropProof::new(siblings))
    }

    /// The inclusion proof for a claim as lowercase unprefixed hex strings.
    pub fn proof_hex(&self, claim: &Claim) -> Result<Vec<String>, AirdropTreeError> {
        Ok(self.proof(claim)?.to_hex())
    }

    /// Check a proof for a claim against this tree's own root.
    pub fn verify(&self, proof: &AirdropProof, claim: &Claim) -> bool {
        proof.verify(claim, &self.root())
    }
}

/// Build the parent level from a level of digests.
///
/// Adjacent nodes are paired by position and merged with sorted-pair
/// hashing; an odd trailing node is carried up unchanged.
fn parent_level(level: &[Digest]) -> Vec<Digest> {
    level
        .chunks(2)
        .map(|pair| match pair {
            [left, right] => merge_sorted(left, right),
            [lone] => *lone,
            _ => unreachable!("chunks(2) yields one or two digests"),
        })
        .collect()
}
