//! simdex: a permuted, blocked near-duplicate index over 64-bit Simhash
//! fingerprints.
//!
//! Given a set of 64-bit Simhash fingerprints, answer two questions fast:
//! is this exact fingerprint present, and is there a fingerprint within
//! Hamming distance `d` of this one. The second question is the one a plain
//! `HashSet`/`BTreeSet` can't answer without scanning everything; this
//! crate exploits the pigeonhole principle (split the word into `d+1`
//! blocks — two fingerprints within distance `d` must agree on at least one
//! block) to turn it into a handful of prefix-range scans instead.
//!
//! See [`fingerprint`] for building fingerprints from weighted features, and
//! [`index::NearDupIndex`] for the index itself.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod common;
pub mod fingerprint;
pub mod index;
mod io;

pub use common::{Result, SketchError};
pub use fingerprint::{hamming_distance, is_near_dup, Mixer};
pub use index::NearDupIndex;
