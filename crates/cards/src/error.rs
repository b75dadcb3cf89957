// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deck and codec error types.
use thiserror::Error;

/// Errors raised by deck construction and card decoding.
///
/// These are contract violations surfaced to the integrator immediately,
/// nothing in this crate retries or recovers them. Running out of cards or
/// indexing past the end of a hand is normal play and reported as `None`
/// instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DeckError {
    /// A deck was requested with fewer than one sub-deck.
    #[error("deck count must be at least 1, got {0}")]
    InvalidDeckCount(u32),
    /// A code outside the valid shuffle range reached the codec.
    #[error("card code {code} is outside the valid range [{min}, {max}]")]
    InvalidCardCode {
        /// The offending raw code.
        code: i32,
        /// The lowest valid code for the deck shape.
        min: i32,
        /// The highest valid code for the deck shape.
        max: i32,
    },
}
