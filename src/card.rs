//! Card identity, suits, ranks and point values.

use std::collections::HashSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::ContractViolation;

/// The four suits of a standard pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Suit::Hearts => "H",
            Suit::Diamonds => "D",
            Suit::Clubs => "C",
            Suit::Spades => "S",
        };
        write!(f, "{s}")
    }
}

/// A card rank, 3 through 2, in the natural non-trump sequence.
///
/// The sequence `Three < Four < ... < King < Ace < Two` is the order used for
/// tractor adjacency within a non-trump suit (with the round's trump rank
/// removed from the sequence). `Two` sits above `Ace`: it is the conventional
/// top rank of a suit once the trump rank itself has been pulled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rank {
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
}

/// The full rank sequence, lowest to highest, used for non-trump adjacency.
pub const RANK_SEQUENCE: [Rank; 13] = [
    Rank::Three,
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
    Rank::Two,
];

impl Rank {
    /// Index of this rank within [`RANK_SEQUENCE`].
    pub fn sequence_index(self) -> usize {
        RANK_SEQUENCE
            .iter()
            .position(|r| *r == self)
            .expect("RANK_SEQUENCE is exhaustive over Rank")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
        };
        write!(f, "{s}")
    }
}

/// Which of the two jokers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum JokerRank {
    Small,
    Big,
}

/// The suit-and-rank or joker identity of a card, ignoring which physical
/// copy it is: two cards with equal `CardKind` form a legal pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CardKind {
    Suited(Suit, Rank),
    Joker(JokerRank),
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardKind::Suited(suit, rank) => write!(f, "{rank}{suit}"),
            CardKind::Joker(JokerRank::Small) => write!(f, "SJ"),
            CardKind::Joker(JokerRank::Big) => write!(f, "BJ"),
        }
    }
}

/// A concrete physical card: its kind plus which of the (by default two)
/// deck copies it is. Equality on `Card` identifies one specific piece of
/// cardboard, as distinct from `CardKind`'s "which rank/suit" identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Card {
    pub kind: CardKind,
    pub deck_index: u8,
}

impl Card {
    pub fn suited(suit: Suit, rank: Rank, deck_index: u8) -> Self {
        Card {
            kind: CardKind::Suited(suit, rank),
            deck_index,
        }
    }

    pub fn joker(which: JokerRank, deck_index: u8) -> Self {
        Card {
            kind: CardKind::Joker(which),
            deck_index,
        }
    }

    /// The `commonId`: the kind shared by every physical copy of this card.
    pub fn common_id(&self) -> CardKind {
        self.kind
    }

    pub fn suit(&self) -> Option<Suit> {
        match self.kind {
            CardKind::Suited(suit, _) => Some(suit),
            CardKind::Joker(_) => None,
        }
    }

    pub fn rank(&self) -> Option<Rank> {
        match self.kind {
            CardKind::Suited(_, rank) => Some(rank),
            CardKind::Joker(_) => None,
        }
    }

    /// Point value: 5 -> 5, 10 -> 10, K -> 10, everything else 0.
    pub fn points(&self) -> u8 {
        match self.kind {
            CardKind::Suited(_, Rank::Five) => 5,
            CardKind::Suited(_, Rank::Ten) => 10,
            CardKind::Suited(_, Rank::King) => 10,
            _ => 0,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind, self.deck_index)
    }
}

/// Checks the invariant from spec §3: "each physical card in the round has
/// a unique `instanceId`". Returns [`ContractViolation::MalformedCard`] the
/// moment the same `Card` (kind + deck copy) turns up twice in `cards` —
/// two distinct deck copies of the same kind are fine, the same copy
/// listed twice is a caller bug (e.g. a card double-counted between a hand
/// and the played-cards memory passed alongside it).
pub fn validate_unique(cards: &[Card]) -> Result<(), ContractViolation> {
    let mut seen = HashSet::with_capacity(cards.len());
    for card in cards {
        if !seen.insert(*card) {
            return Err(ContractViolation::MalformedCard);
        }
    }
    Ok(())
}
