// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Seed material and the shuffle permutation source.
use blake2::{Blake2s, Digest, digest};
use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// The hasher used to key the shuffle.
type SeedHasher = Blake2s<digest::consts::U32>;

/// Client and server seed material for a verifiable shuffle.
///
/// A shuffle keyed by a seed pair is reproducible: a client that knows both
/// seeds can re-derive the full permutation and check every card a deck
/// reports against it. Components not supplied by the caller are filled with
/// randomly generated hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPair {
    client: String,
    server: String,
}

impl SeedPair {
    /// Creates a seed pair, generating random components for any not given.
    pub fn new(client: Option<String>, server: Option<String>) -> Self {
        Self {
            client: client.unwrap_or_else(random_seed),
            server: server.unwrap_or_else(random_seed),
        }
    }

    /// The client seed.
    pub fn client(&self) -> &str {
        &self.client
    }

    /// The server seed.
    pub fn server(&self) -> &str {
        &self.server
    }
}

impl Default for SeedPair {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Generates a random 32 hex digits seed string.
fn random_seed() -> String {
    let mut bytes = [0u8; 16];
    rand::rng().fill(&mut bytes[..]);
    bytes
        .iter()
        .fold(String::with_capacity(32), |mut output, b| {
            output.push_str(&format!("{b:02x}"));
            output
        })
}

/// Source of the shuffle order a deck is built from.
///
/// An implementation must return every integer in `[min, max]` exactly once.
/// The deck trusts this contract, how the order is generated or proven fair
/// is up to the implementation.
pub trait PermutationSource {
    /// Returns the integers of `[min, max]`, each exactly once, in shuffle
    /// order.
    fn permutation(&self, seeds: &SeedPair, min: i32, max: i32) -> Vec<i32>;
}

/// A deterministic Fisher-Yates shuffle keyed by the seed pair.
///
/// The seed pair is hashed into the RNG seed, so the same pair always
/// produces the same permutation and a shuffle can be audited once the seeds
/// are revealed.
#[derive(Debug, Default, Clone, Copy)]
pub struct SeededShuffle;

impl PermutationSource for SeededShuffle {
    fn permutation(&self, seeds: &SeedPair, min: i32, max: i32) -> Vec<i32> {
        let mut hasher = SeedHasher::new();
        hasher.update(seeds.client().as_bytes());
        hasher.update(b":");
        hasher.update(seeds.server().as_bytes());

        let mut rng = StdRng::from_seed(hasher.finalize().into());
        let mut codes = (min..=max).collect::<Vec<_>>();
        codes.shuffle(&mut rng);
        codes
    }
}
