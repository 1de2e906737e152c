//! Merkle airdrop tree — a root commitment over a fixed claim list with
//! per-claim inclusion proofs.
//!
//! Given an ordered list of `(address, amount)` claims,
//! [`MerkleAirdropTree`] builds a binary hash tree and exposes:
//!
//! - a single root digest committing to the whole claim set
//!   ([`MerkleAirdropTree::root`]),
//! - a sibling-path inclusion proof per claim
//!   ([`MerkleAirdropTree::proof`]),
//! - storage-free verification of a proof against a root
//!   ([`AirdropProof::verify`]).
//!
//! # Hash scheme
//!
//! All digests are 32-byte Blake3:
//!
//! - Leaves: `blake3(address_bytes ++ amount_bytes)`, one hash over the
//!   UTF-8 concatenation; the fields are not hashed separately.
//! - Internal nodes: `blake3(min(left, right) ++ max(left, right))`, with
//!   siblings sorted by byte value before concatenation, so verification
//!   needs no left/right metadata.
//! - A level with an odd node count carries its lone trailing node up to
//!   the next level unchanged (no self-pairing, no duplication).
//!
//! Proofs interoperate only with verifiers using Blake3 and this exact
//! sorted-pair/carry-up convention. Roots and proofs cross the API boundary
//! as lowercase hex strings without a `0x` prefix.
//!
//! # Format caveats
//!
//! Three properties of the scheme are fixed for wire compatibility and
//! pinned by tests:
//!
//! - Level-0 pairing is positional: reordering the claim list can change
//!   which leaves pair up and therefore the root. Sorted-pair hashing only
//!   removes left/right ambiguity *within* a pair.
//! - Proofs carry no leaf index, keeping the wire format a bare digest
//!   sequence at the cost of structural ambiguity when the same claim
//!   appears twice; proof generation resolves duplicates to the first
//!   matching leaf.
//! - Leaf and internal hashes share a single domain (no 0x00/0x01 tags).

#![warn(missing_docs)]

mod claim;
mod error;
pub(crate) mod hash;
mod proof;
mod tree;
mod verify;


pub use claim::Claim;
pub use error::AirdropTreeError;
pub use hash::Digest;
pub use proof::AirdropProof;
pub use tree::MerkleAirdropTree;
pub use verify::verify_hex;
