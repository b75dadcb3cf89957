// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A deck partitioned into remaining, dealt, and burnt pools.
use crate::cards::{Card, CardCode};
use crate::error::DeckError;
use crate::shuffle::{PermutationSource, SeedPair, SeededShuffle};

/// Options controlling a deck's composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckOptions {
    /// Number of 52-card sub-decks, at least 1.
    pub deck_count: u32,
    /// Reserve the joker code range.
    pub jokers: bool,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            deck_count: 1,
            jokers: false,
        }
    }
}

/// A deck of cards in verifiable shuffle order.
///
/// A deck owns the full code permutation and partitions its decoded cards
/// into three pools: remaining, dealt, and burnt. Cards only move from the
/// head of remaining into one of the other two, never back and never between
/// them, so at any point the pools are disjoint and together cover the whole
/// permutation. There is no reshuffle, a fresh round starts from a fresh
/// deck.
///
/// A deck is owned and mutated by a single controlling caller; sharing one
/// across tasks requires external serialization.
#[derive(Debug, Clone)]
pub struct Deck {
    seeds: SeedPair,
    codes: Vec<CardCode>,
    shuffled: Vec<Card>,
    next: usize,
    dealt: Vec<Card>,
    burnt: Vec<Card>,
}

impl Deck {
    /// The number of cards in a sub-deck.
    pub const SUB_DECK_SIZE: usize = 52;

    /// Creates a deck shuffled by the default seeded source.
    pub fn new(seeds: SeedPair, options: DeckOptions) -> Result<Self, DeckError> {
        Self::with_source(&SeededShuffle, seeds, options)
    }

    /// Creates a deck shuffled by the given permutation source.
    pub fn with_source<S>(
        source: &S,
        seeds: SeedPair,
        options: DeckOptions,
    ) -> Result<Self, DeckError>
    where
        S: PermutationSource,
    {
        if options.deck_count < 1 {
            return Err(DeckError::InvalidDeckCount(options.deck_count));
        }

        let (min, max) = CardCode::bounds(options.deck_count, options.jokers);
        let codes = source
            .permutation(&seeds, min, max)
            .into_iter()
            .map(CardCode::new)
            .collect::<Vec<_>>();
        debug_assert_eq!(codes.len(), (max - min + 1) as usize);

        let shuffled = codes
            .iter()
            .map(|code| code.decode(options.deck_count, options.jokers))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            seeds,
            codes,
            shuffled,
            next: 0,
            dealt: Vec::new(),
            burnt: Vec::new(),
        })
    }

    /// Deals the next card, or `None` when the deck is exhausted.
    pub fn deal(&mut self) -> Option<Card> {
        let card = *self.shuffled.get(self.next)?;
        self.next += 1;
        self.dealt.push(card);
        Some(card)
    }

    /// Burns the next card without exposing it to play, or `None` when the
    /// deck is exhausted.
    pub fn burn(&mut self) -> Option<Card> {
        let card = *self.shuffled.get(self.next)?;
        self.next += 1;
        self.burnt.push(card);
        Some(card)
    }

    /// The full code permutation as received from the source, for external
    /// verification.
    pub fn cards(&self) -> &[CardCode] {
        &self.codes
    }

    /// The seed pair the shuffle was keyed by.
    pub fn seeds(&self) -> &SeedPair {
        &self.seeds
    }

    /// The cards not yet dealt or burnt, next card out first.
    pub fn remaining(&self) -> &[Card] {
        &self.shuffled[self.next..]
    }

    /// The dealt cards in removal order.
    pub fn dealt(&self) -> &[Card] {
        &self.dealt
    }

    /// The burnt cards in removal order.
    pub fn burnt(&self) -> &[Card] {
        &self.burnt
    }

    /// Total number of cards in the deck across all pools.
    pub fn size(&self) -> usize {
        self.shuffled.len()
    }
}
