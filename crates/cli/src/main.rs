// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fairdeck demo dealer.
//!
//! Shuffles a deck from the given seeds, burns a card, deals a round of
//! hands, and prints the seeds and shuffle codes for verification.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::info;

use fairdeck_cards::{Deck, DeckOptions, Hand, HandOps, SeedPair};

#[derive(Debug, Parser)]
struct Cli {
    /// The client seed for the shuffle, generated when omitted.
    #[clap(long)]
    client_seed: Option<String>,
    /// The server seed for the shuffle, generated when omitted.
    #[clap(long)]
    server_seed: Option<String>,
    /// Number of 52-card sub-decks.
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=8))]
    decks: u32,
    /// Include jokers.
    #[clap(long)]
    jokers: bool,
    /// Number of hands to deal.
    #[clap(long, short = 'n', default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=8))]
    hands: u8,
    /// Cards dealt to each hand.
    #[clap(long, short, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=11))]
    cards: u8,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let seeds = SeedPair::new(cli.client_seed, cli.server_seed);
    let options = DeckOptions {
        deck_count: cli.decks,
        jokers: cli.jokers,
    };

    let mut deck = Deck::new(seeds, options)?;
    info!("shuffled {} cards", deck.size());

    // Burn the top card before dealing.
    if let Some(card) = deck.burn() {
        info!("burnt {card}");
    }

    let mut hands = vec![Hand::new(); cli.hands as usize];
    for _ in 0..cli.cards {
        for hand in &mut hands {
            if let Some(card) = deck.deal() {
                hand.add_card(card);
            }
        }
    }

    for (n, hand) in hands.iter_mut().enumerate() {
        hand.lock();

        let cards = hand
            .cards()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        println!("hand {}: {cards}  (total {})", n + 1, hand.sum());
    }

    println!("client seed: {}", deck.seeds().client());
    println!("server seed: {}", deck.seeds().server());

    let codes = deck
        .cards()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    println!("shuffle codes: {codes}");

    Ok(())
}
