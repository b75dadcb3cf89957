// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fairdeck provably verifiable deck and hand types.
//!
//! This crate defines a card [Deck] shuffled by a seed-keyed permutation and
//! dealt across three disjoint pools:
//!
//! ```
//! # use fairdeck_cards::{Deck, DeckOptions, SeedPair};
//! let seeds = SeedPair::new(Some("client seed".into()), Some("server seed".into()));
//! let mut deck = Deck::new(seeds, DeckOptions::default()).unwrap();
//!
//! let card = deck.deal().unwrap();
//! assert_eq!(deck.remaining().len(), 51);
//! assert_eq!(deck.dealt(), &[card][..]);
//! ```
//!
//! and a [Hand] that accumulates dealt cards, locks against further edits,
//! and scores a fixed-weight total:
//!
//! ```
//! # use fairdeck_cards::{Card, Hand, HandOps, Rank, Suit};
//! let mut hand = Hand::new();
//! hand.add_card(Card::new(Rank::Ten, Suit::Hearts));
//! hand.add_card(Card::new(Rank::Ace, Suit::Spades));
//! hand.lock();
//!
//! assert_eq!(hand.sum(), 21);
//!
//! // A locked hand silently refuses edits until reset.
//! assert_eq!(hand.add_card(Card::new(Rank::Four, Suit::Clubs)), 2);
//! assert_eq!(hand.reset(), 2);
//! ```
//!
//! The shuffle order comes from a [PermutationSource]; the bundled
//! [SeededShuffle] derives it deterministically from the client and server
//! seeds, so the [codes](Deck::cards) a deck reports can be audited once the
//! seeds are revealed.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod cards;
mod deck;
mod error;
mod hand;
mod shuffle;

pub use cards::{Card, CardCode, Rank, Suit};
pub use deck::{Deck, DeckOptions};
pub use error::DeckError;
pub use hand::{Hand, HandOps};
pub use shuffle::{PermutationSource, SeedPair, SeededShuffle};
