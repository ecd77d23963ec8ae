//! Trump identity and the card hierarchy it induces.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::{Card, CardKind, JokerRank, Rank, Suit, RANK_SEQUENCE};

/// The round's trump rank and (optional) trump suit.
///
/// `trump_suit` is `None` when the declarer chose not to declare a suit ("no
/// trump suit" / skipped): only trump-rank cards and jokers are trump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrumpInfo {
    pub trump_rank: Rank,
    pub trump_suit: Option<Suit>,
}

impl TrumpInfo {
    pub fn new(trump_rank: Rank, trump_suit: Option<Suit>) -> Self {
        TrumpInfo {
            trump_rank,
            trump_suit,
        }
    }

    /// Whether `card` belongs to the trump class.
    pub fn is_trump(&self, card: Card) -> bool {
        match card.kind {
            CardKind::Joker(_) => true,
            CardKind::Suited(suit, rank) => {
                rank == self.trump_rank || self.trump_suit == Some(suit)
            }
        }
    }
}

/// Which class a card belongs to: one of the three (or four, if no trump
/// suit is declared) plain suits, or the trump class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Class {
    Suit(Suit),
    Trump,
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Class::Suit(s) => write!(f, "{s}"),
            Class::Trump => write!(f, "trump"),
        }
    }
}

/// The class a card belongs to under `trump`. Total over every card.
pub fn class_of(card: Card, trump: &TrumpInfo) -> Class {
    if trump.is_trump(card) {
        Class::Trump
    } else {
        Class::Suit(card.suit().expect("non-trump card is always suited"))
    }
}

/// The five trump levels plus "not trump", highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TrumpLevel {
    NonTrump,
    /// L1: trump-suit non-rank cards, ordered by rank.
    TrumpSuitCard,
    /// L2: trump rank in an off-suit. All L2 cards are mutually equal,
    /// regardless of which off-suit they come from.
    OffSuitRank,
    /// L3: trump rank in the trump suit.
    TrumpSuitRank,
    SmallJoker,
    BigJoker,
}

/// `getTrumpLevel`: a total function from every card to exactly one level.
pub fn trump_level(card: Card, trump: &TrumpInfo) -> TrumpLevel {
    match card.kind {
        CardKind::Joker(JokerRank::Big) => TrumpLevel::BigJoker,
        CardKind::Joker(JokerRank::Small) => TrumpLevel::SmallJoker,
        CardKind::Suited(suit, rank) if rank == trump.trump_rank => {
            if trump.trump_suit == Some(suit) {
                TrumpLevel::TrumpSuitRank
            } else {
                TrumpLevel::OffSuitRank
            }
        }
        CardKind::Suited(suit, _) if trump.trump_suit == Some(suit) => TrumpLevel::TrumpSuitCard,
        CardKind::Suited(..) => TrumpLevel::NonTrump,
    }
}

/// Position of `kind` within its class's tractor-adjacency chain (higher is
/// stronger / later). `None` means this kind never participates in a
/// tractor: it either isn't in `class`, or it sits at a level the published
/// adjacency table excludes (trump rank in an off-suit, L2, is isolated: its
/// four physical copies are mutually `Equal`, not ordered, so there is no
/// "consecutive" relation to build a tractor out of).
///
/// This is the adjacency table SPEC_FULL.md §4 (C2) publishes:
/// `BigJoker -> SmallJoker -> (trumpSuit, trumpRank) -> [A..3 of the trump
/// suit, trump rank removed]`, and for a plain suit, the natural sequence
/// with the trump rank removed.
pub fn tractor_position(kind: CardKind, class: Class, trump: &TrumpInfo) -> Option<i32> {
    match (kind, class) {
        (CardKind::Joker(JokerRank::Big), Class::Trump) => Some(1_000),
        (CardKind::Joker(JokerRank::Small), Class::Trump) => Some(999),
        (CardKind::Suited(suit, rank), Class::Trump) if rank == trump.trump_rank => {
            if trump.trump_suit == Some(suit) {
                Some(998)
            } else {
                None
            }
        }
        (CardKind::Suited(suit, rank), Class::Trump) if trump.trump_suit == Some(suit) => {
            Some(900 + non_trump_rank_index(rank, trump.trump_rank) as i32)
        }
        (CardKind::Suited(suit, rank), Class::Suit(s))
            if suit == s && rank != trump.trump_rank && trump.trump_suit != Some(suit) =>
        {
            Some(non_trump_rank_index(rank, trump.trump_rank) as i32)
        }
        _ => None,
    }
}

/// Index of `rank` within the 13-rank sequence with `trump_rank` removed.
/// Adjacent indices correspond to tractor-adjacent ranks.
fn non_trump_rank_index(rank: Rank, trump_rank: Rank) -> usize {
    RANK_SEQUENCE
        .iter()
        .filter(|r| **r != trump_rank)
        .position(|r| *r == rank)
        .expect("rank present in sequence and not the trump rank")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::JokerRank;

    const TRUMP: TrumpInfo = TrumpInfo {
        trump_rank: Rank::Two,
        trump_suit: Some(Suit::Hearts),
    };

    #[test]
    fn every_card_has_exactly_one_level() {
        // The trump/non-trump partition is exact: every card is trump
        // exactly when its level isn't NonTrump.
        for suit in Suit::ALL {
            for rank in RANK_SEQUENCE {
                let card = Card::suited(suit, rank, 0);
                let level = trump_level(card, &TRUMP);
                let is_trump = TRUMP.is_trump(card);
                assert_eq!(is_trump, level != TrumpLevel::NonTrump);
            }
        }
        assert_eq!(
            trump_level(Card::joker(JokerRank::Big, 0), &TRUMP),
            TrumpLevel::BigJoker
        );
        assert_eq!(
            trump_level(Card::joker(JokerRank::Small, 0), &TRUMP),
            TrumpLevel::SmallJoker
        );
    }

    #[test]
    fn skipped_trump_suit_still_classifies_rank_cards_and_jokers() {
        let trump = TrumpInfo::new(Rank::Two, None);
        let two_of_spades = Card::suited(Suit::Spades, Rank::Two, 0);
        assert!(trump.is_trump(two_of_spades));
        assert_eq!(trump_level(two_of_spades, &trump), TrumpLevel::OffSuitRank);
        let three_of_spades = Card::suited(Suit::Spades, Rank::Three, 0);
        assert!(!trump.is_trump(three_of_spades));
    }

    #[test]
    fn off_suit_rank_is_isolated_from_tractors() {
        let off_suit_rank = CardKind::Suited(Suit::Spades, Rank::Two);
        assert_eq!(tractor_position(off_suit_rank, Class::Trump, &TRUMP), None);
    }

    #[test]
    fn trump_suit_rank_borders_small_joker() {
        let small_joker_pos =
            tractor_position(CardKind::Joker(JokerRank::Small), Class::Trump, &TRUMP).unwrap();
        let trump_rank_pos =
            tractor_position(CardKind::Suited(Suit::Hearts, Rank::Two), Class::Trump, &TRUMP)
                .unwrap();
        assert_eq!(small_joker_pos - trump_rank_pos, 1);
    }
}
