//! Shared proptest strategies for property and scenario tests.

use std::sync::Once;

use proptest::prelude::*;
use tractor_core::card::{Card, JokerRank, Rank, Suit};
use tractor_core::trump::TrumpInfo;

static TRACING_INIT: Once = Once::new();

/// Installs a `tracing_subscriber` `fmt` layer gated on `RUST_LOG`, once per
/// test binary. Call at the top of any `#[test]` that wants
/// `tracing::debug!`/`trace!` output visible when chasing a proptest shrink
/// failure — nothing is printed unless `RUST_LOG` is set, so this is a no-op
/// in a normal `cargo test` run.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Hearts),
        Just(Suit::Diamonds),
        Just(Suit::Clubs),
        Just(Suit::Spades),
    ]
}

pub fn rank() -> impl Strategy<Value = Rank> {
    prop_oneof![
        Just(Rank::Three),
        Just(Rank::Four),
        Just(Rank::Five),
        Just(Rank::Six),
        Just(Rank::Seven),
        Just(Rank::Eight),
        Just(Rank::Nine),
        Just(Rank::Ten),
        Just(Rank::Jack),
        Just(Rank::Queen),
        Just(Rank::King),
        Just(Rank::Ace),
        Just(Rank::Two),
    ]
}

pub fn deck_index() -> impl Strategy<Value = u8> {
    0u8..2u8
}

/// Any card, suited or joker, with an arbitrary (possibly nonsensical, for
/// a two-deck game) deck index.
pub fn any_card() -> impl Strategy<Value = Card> {
    prop_oneof![
        (suit(), rank(), deck_index()).prop_map(|(s, r, d)| Card::suited(s, r, d)),
        deck_index().prop_map(|d| Card::joker(JokerRank::Small, d)),
        deck_index().prop_map(|d| Card::joker(JokerRank::Big, d)),
    ]
}

/// A card guaranteed to be suited (no jokers) — useful wherever a test
/// needs `.suit()`/`.rank()` to be `Some`.
pub fn suited_card() -> impl Strategy<Value = Card> {
    (suit(), rank(), deck_index()).prop_map(|(s, r, d)| Card::suited(s, r, d))
}

pub fn trump_info() -> impl Strategy<Value = TrumpInfo> {
    (rank(), proptest::option::of(suit())).prop_map(|(r, s)| TrumpInfo::new(r, s))
}

/// A small hand of distinct-instance suited cards, every one the same suit
/// — handy for building a player's holdings in one non-trump suit.
pub fn suited_hand(suit: Suit, max_len: usize) -> impl Strategy<Value = Vec<Card>> {
    proptest::collection::vec((rank(), deck_index()), 0..=max_len)
        .prop_map(move |pairs| pairs.into_iter().map(|(r, d)| Card::suited(suit, r, d)).collect())
}
