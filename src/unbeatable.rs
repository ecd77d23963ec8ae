//! C5: the unbeatability oracle.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::card::{Card, CardKind, RANK_SEQUENCE};
use crate::combo::{identify_combos, Combo};
use crate::comparator::compare;
use crate::config::Config;
use crate::trump::{Class, TrumpInfo};

/// `isComboUnbeatable`: given the cards already accounted for (played cards,
/// the asking player's own hand, and — only for the round starter — the
/// visible kitty), decide whether `combo` can still be beaten by a combo of
/// the same type drawn from the unseen remainder of `suit`.
///
/// Always `false` for the trump class: trump-class unbeatability is not
/// computed (step 1 — conservative by design).
///
/// The accounting is asymmetric by design:
/// - a *single* is only safe once every higher-ranked physical copy is
///   individually accounted for (`instanceId`-level);
/// - a *pair* or *tractor* rung is safe the moment **either** copy of the
///   relevant rank has been seen anywhere, because that alone breaks any
///   opposing pair of that rank (`commonId`-level).
pub fn is_combo_unbeatable(
    combo: &Combo,
    class: Class,
    played_cards: &[Card],
    own_hand: &[Card],
    trump: &TrumpInfo,
    visible_kitty: &[Card],
    config: &Config,
) -> bool {
    let Class::Suit(suit) = class else {
        return false;
    };

    let accounted_instances: HashSet<Card> = played_cards
        .iter()
        .chain(own_hand)
        .chain(visible_kitty)
        .copied()
        .collect();
    let accounted_kinds: HashSet<CardKind> =
        accounted_instances.iter().map(Card::common_id).collect();

    let full_suit = full_suit_complement(suit, trump, config.decks);

    let unseen: Vec<Card> = if matches!(combo, Combo::Single(_)) {
        full_suit
            .into_iter()
            .filter(|c| !accounted_instances.contains(c))
            .collect()
    } else {
        full_suit
            .into_iter()
            .filter(|c| !accounted_kinds.contains(&c.common_id()))
            .collect()
    };

    let needed_type = combo.combo_type();
    let candidates = identify_combos(&unseen, trump, config);

    !candidates
        .iter()
        .any(|candidate| candidate.combo_type() == needed_type && beats(candidate, combo, trump))
}

fn beats(candidate: &Combo, combo: &Combo, trump: &TrumpInfo) -> bool {
    if let (Combo::Tractor(cp), Combo::Tractor(op)) = (candidate, combo) {
        if cp.len() < op.len() {
            return false;
        }
    }
    compare(candidate.representative(), combo.representative(), trump) == Ok(Ordering::Greater)
}

/// Every card that can belong to `suit`: every rank in [`RANK_SEQUENCE`]
/// except the trump rank, at `decks` deck-copies each.
fn full_suit_complement(
    suit: crate::card::Suit,
    trump: &TrumpInfo,
    decks: u8,
) -> Vec<Card> {
    RANK_SEQUENCE
        .iter()
        .filter(|r| **r != trump.trump_rank)
        .flat_map(|rank| (0..decks).map(move |deck_index| Card::suited(suit, *rank, deck_index)))
        .collect()
}
