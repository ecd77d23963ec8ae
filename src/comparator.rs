//! C3: pairwise card comparison under a trump context.

use std::cmp::Ordering;

use crate::card::Card;
use crate::errors::ContractViolation;
use crate::trump::{trump_level, TrumpInfo, TrumpLevel};

/// `compare(a, b, trumpInfo)`: orders two cards under `trump`.
///
/// # Errors
/// Returns [`ContractViolation::InvalidComparison`] if `a` and `b` are both
/// non-trump and in different suits — there is no total order across
/// non-trump suits, and callers needing a trick-context decision must go
/// through [`crate::trick::evaluate_trick_play`] instead.
pub fn compare(a: Card, b: Card, trump: &TrumpInfo) -> Result<Ordering, ContractViolation> {
    let a_trump = trump.is_trump(a);
    let b_trump = trump.is_trump(b);

    match (a_trump, b_trump) {
        (true, false) => Ok(Ordering::Greater),
        (false, true) => Ok(Ordering::Less),
        (true, true) => Ok(compare_trump_levels(a, b, trump)),
        (false, false) => {
            let (a_suit, b_suit) = (
                a.suit().expect("non-trump card is suited"),
                b.suit().expect("non-trump card is suited"),
            );
            if a_suit != b_suit {
                return Err(ContractViolation::InvalidComparison);
            }
            Ok(a.rank()
                .expect("suited card has a rank")
                .sequence_index()
                .cmp(&b.rank().expect("suited card has a rank").sequence_index()))
        }
    }
}

fn compare_trump_levels(a: Card, b: Card, trump: &TrumpInfo) -> Ordering {
    let (la, lb) = (trump_level(a, trump), trump_level(b, trump));
    match la.cmp(&lb) {
        Ordering::Equal => {
            // Same level. L1 (trump-suit non-rank cards) compares by rank;
            // every other trump level (L2 off-suit rank pairs, L3 trump-rank
            // pair, L4, L5) is internally Equal per
            if la == TrumpLevel::TrumpSuitCard {
                a.rank()
                    .expect("trump-suit card has a rank")
                    .sequence_index()
                    .cmp(&b.rank().expect("trump-suit card has a rank").sequence_index())
            } else {
                Ordering::Equal
            }
        }
        other => other,
    }
}
