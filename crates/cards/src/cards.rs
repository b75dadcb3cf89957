// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card identity types and the shuffle code codec.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DeckError;

/// Standard ranks in codec order.
const RANKS: [Rank; 13] = [
    Rank::Deuce,
    Rank::Trey,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
    /// Joker, only dealt from decks built with the joker range.
    Joker,
}

impl Rank {
    /// Returns the thirteen standard ranks in codec order.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        RANKS.into_iter()
    }

    /// The fixed point weight of this rank.
    ///
    /// Numeric ranks count face value, court cards count 10, and an ace
    /// always counts 11. A joker counts 0: joker scoring is game-specific
    /// and no rule is assumed here.
    pub fn value(&self) -> u32 {
        match self {
            Rank::Deuce => 2,
            Rank::Trey => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
            Rank::Joker => 0,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            Rank::Joker => '*',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit.
    Spades = 0,
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
    /// No suit, only valid for jokers.
    None,
}

impl Suit {
    /// Returns the four suits in codec order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs].into_iter()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::None => '-',
        };

        write!(f, "{suit}")
    }
}

/// A raw shuffle code identifying a card drawn from the permutation range.
///
/// Codes are the unit the shuffle source emits and the unit kept for
/// provenance: a deck stores its permutation verbatim so a client can
/// re-derive it from the seed pair and audit every card dealt. Standard
/// cards occupy `[0, 52 * deck_count - 1]`; decks built with jokers reserve
/// the negative range `[-2 * deck_count, -1]` for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardCode(i32);

impl CardCode {
    /// Creates a code from a raw integer.
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// The raw integer value.
    pub const fn value(&self) -> i32 {
        self.0
    }

    /// Inclusive code bounds for a deck of `deck_count` sub-decks.
    pub fn bounds(deck_count: u32, jokers: bool) -> (i32, i32) {
        let min = if jokers { -2 * deck_count as i32 } else { 0 };
        (min, 52 * deck_count as i32 - 1)
    }

    /// Decodes this code into a [Card] for a deck of `deck_count` sub-decks.
    ///
    /// Decoding is pure: the same code for the same deck shape always yields
    /// the same identity. Every 52-code block decodes to a full correctly
    /// suited run, with the suit cycle repeating every four sub-decks. Any
    /// code in the reserved negative range decodes to a joker, all jokers
    /// are interchangeable.
    pub fn decode(self, deck_count: u32, jokers: bool) -> Result<Card, DeckError> {
        let (min, max) = Self::bounds(deck_count, jokers);
        if self.0 < min || self.0 > max {
            return Err(DeckError::InvalidCardCode { code: self.0, min, max });
        }

        if self.0 < 0 {
            return Ok(Card {
                code: self,
                rank: Rank::Joker,
                suit: Suit::None,
            });
        }

        let rank = RANKS[(self.0 % 13) as usize];
        let suit = match (self.0 / 13) % 4 {
            0 => Suit::Spades,
            1 => Suit::Hearts,
            2 => Suit::Diamonds,
            _ => Suit::Clubs,
        };

        Ok(Card {
            code: self,
            rank,
            suit,
        })
    }
}

impl fmt::Display for CardCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A playing card.
///
/// A card pairs its identity with the raw code it was decoded from. The code
/// is kept verbatim so hands and pools can be audited against the shuffle
/// that produced them. Cards are immutable values, a deck or hand only ever
/// moves them around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    code: CardCode,
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a card from a rank and suit outside any deck context.
    ///
    /// The card carries the canonical first-block code for its identity, a
    /// joker gets code `-1` and its suit forced to [Suit::None]. Code
    /// provenance is only meaningful for cards dealt from a deck.
    ///
    /// Panics when a standard rank is paired with [Suit::None].
    pub fn new(rank: Rank, suit: Suit) -> Card {
        if rank == Rank::Joker {
            return Card {
                code: CardCode::new(-1),
                rank,
                suit: Suit::None,
            };
        }

        let suit_index = match suit {
            Suit::Spades => 0,
            Suit::Hearts => 1,
            Suit::Diamonds => 2,
            Suit::Clubs => 3,
            Suit::None => panic!("Suit::None is only valid for jokers"),
        };

        Card {
            code: CardCode::new(suit_index * 13 + rank as i32),
            rank,
            suit,
        }
    }

    /// The raw code this card was constructed from.
    pub const fn code(&self) -> CardCode {
        self.code
    }

    /// The card rank.
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// The card suit.
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// The card point weight, see [Rank::value].
    pub fn value(&self) -> u32 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rank == Rank::Joker {
            write!(f, "Jk")
        } else {
            write!(f, "{}{}", self.rank, self.suit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn codec_coverage() {
        let mut identities = HashSet::default();
        for code in 0..52 {
            let card = CardCode::new(code).decode(1, false).unwrap();
            assert_eq!(card.code().value(), code);
            identities.insert((card.rank(), card.suit()));
        }

        // Every code maps to a distinct (rank, suit) pair.
        assert_eq!(identities.len(), 52);
    }

    #[test]
    fn codec_is_pure() {
        for code in [-2, 0, 17, 51] {
            let first = CardCode::new(code).decode(1, true).unwrap();
            let second = CardCode::new(code).decode(1, true).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn multi_deck_blocks_are_stable() {
        for code in 0..52 {
            let first = CardCode::new(code).decode(2, false).unwrap();
            let second = CardCode::new(code + 52).decode(2, false).unwrap();
            assert_eq!(first.rank(), second.rank());
            assert_eq!(first.suit(), second.suit());
            assert_ne!(first.code(), second.code());
        }
    }

    #[test]
    fn suit_cycle() {
        let suit_at = |code, count| CardCode::new(code).decode(count, false).unwrap().suit();

        assert_eq!(suit_at(0, 1), Suit::Spades);
        assert_eq!(suit_at(13, 1), Suit::Hearts);
        assert_eq!(suit_at(26, 1), Suit::Diamonds);
        assert_eq!(suit_at(39, 1), Suit::Clubs);

        // The cycle restarts on the next sub-deck.
        assert_eq!(suit_at(52, 2), Suit::Spades);
        assert_eq!(suit_at(103, 2), Suit::Clubs);
    }

    #[test]
    fn joker_range() {
        for code in -4..0 {
            let card = CardCode::new(code).decode(2, true).unwrap();
            assert_eq!(card.rank(), Rank::Joker);
            assert_eq!(card.suit(), Suit::None);
            assert_eq!(card.value(), 0);
        }
    }

    #[test]
    fn out_of_range_codes() {
        assert_eq!(
            CardCode::new(52).decode(1, false),
            Err(DeckError::InvalidCardCode {
                code: 52,
                min: 0,
                max: 51
            })
        );

        // Negative codes are only valid when jokers are reserved.
        assert!(CardCode::new(-1).decode(1, false).is_err());
        assert!(CardCode::new(-5).decode(2, true).is_err());
        assert!(CardCode::new(104).decode(2, true).is_err());
    }

    #[test]
    fn point_values() {
        assert_eq!(Card::new(Rank::Deuce, Suit::Spades).value(), 2);
        assert_eq!(Card::new(Rank::Nine, Suit::Hearts).value(), 9);
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).value(), 10);
        assert_eq!(Card::new(Rank::Jack, Suit::Diamonds).value(), 10);
        assert_eq!(Card::new(Rank::Queen, Suit::Clubs).value(), 10);
        assert_eq!(Card::new(Rank::King, Suit::Spades).value(), 10);
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).value(), 11);
    }

    #[test]
    fn canonical_codes_round_trip() {
        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                let card = Card::new(rank, suit);
                let decoded = card.code().decode(1, false).unwrap();
                assert_eq!(decoded.rank(), rank);
                assert_eq!(decoded.suit(), suit);
            }
        }
    }

    #[test]
    fn display_format() {
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "AS");
        assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).to_string(), "TD");
        assert_eq!(Card::new(Rank::Deuce, Suit::Clubs).to_string(), "2C");
        assert_eq!(Card::new(Rank::Joker, Suit::None).to_string(), "Jk");
    }
}
