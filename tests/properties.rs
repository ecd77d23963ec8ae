//! Property-based tests over the card/combo/comparison core, run across
//! randomly generated trump contexts and hands rather than fixed examples.

mod support;

use std::cmp::Ordering;

use proptest::prelude::*;
use tractor_core::combo::{classify, decompose, identify_combos, ComboType};
use tractor_core::comparator::compare;
use tractor_core::leading::validate_leading_multi_combo;
use tractor_core::play::is_valid_play;
use tractor_core::trick::{evaluate_trick_play, Trick};
use tractor_core::trump::{class_of, trump_level, TrumpLevel};
use tractor_core::Config;

proptest! {
    /// `compare` never contradicts itself: a card always compares `Equal`
    /// to itself, and ordering one way is the exact reverse the other way.
    #[test]
    fn compare_is_antisymmetric_and_reflexive(
        trump in support::trump_info(),
        a in support::any_card(),
        b in support::any_card(),
    ) {
        if let (Ok(ab), Ok(ba)) = (compare(a, b, &trump), compare(b, a, &trump)) {
            prop_assert_eq!(ab.reverse(), ba);
        }
        prop_assert_eq!(compare(a, a, &trump), Ok(Ordering::Equal));
    }

    /// Every card belongs to exactly one trump level, and that level is
    /// `NonTrump` exactly when the card isn't trump.
    #[test]
    fn trump_level_partitions_every_card(
        trump in support::trump_info(),
        card in support::any_card(),
    ) {
        let level = trump_level(card, &trump);
        prop_assert_eq!(trump.is_trump(card), level != TrumpLevel::NonTrump);
        prop_assert_eq!(trump.is_trump(card), class_of(card, &trump) == tractor_core::Class::Trump);
    }

    /// `decompose` always accounts for every card exactly once: nothing is
    /// dropped, nothing is duplicated.
    #[test]
    fn decompose_is_a_complete_non_overlapping_cover(
        trump in support::trump_info(),
        hand in proptest::collection::vec(support::any_card(), 0..12),
    ) {
        support::init_tracing();
        tracing::trace!(?trump, ?hand, "decomposing hand");
        let combos = decompose(&hand, &trump, &Config::DEFAULT);
        tracing::debug!(?combos, "decomposition result");
        let mut covered: Vec<_> = combos.iter().flat_map(|c| c.cards()).collect();
        let mut expected = hand.clone();
        covered.sort_by_key(|c| format!("{c}"));
        expected.sort_by_key(|c| format!("{c}"));
        prop_assert_eq!(covered, expected);
    }

    /// Anything `decompose` emits as a Pair or Tractor, `classify` agrees is
    /// exactly that type when handed just those cards back.
    #[test]
    fn decomposed_combos_round_trip_through_classify(
        trump in support::trump_info(),
        hand in proptest::collection::vec(support::any_card(), 0..12),
    ) {
        for combo in decompose(&hand, &trump, &Config::DEFAULT) {
            let cards = combo.cards();
            prop_assert_eq!(classify(&cards, &trump, &Config::DEFAULT), combo.combo_type());
        }
    }

    /// A trump follow is never itself a `ComboTypeMismatch` against a
    /// multi-combo lead's type check (the uniform type-match rule only
    /// applies to non-multi leads).
    #[test]
    fn void_follow_of_a_single_lead_with_matching_trump_count_is_type_legal(
        trump in support::trump_info(),
        led_suit in support::suit(),
        led_rank in support::rank(),
        hand in proptest::collection::vec(support::any_card(), 1..6),
    ) {
        prop_assume!(!trump.is_trump(tractor_core::card::Card::suited(led_suit, led_rank, 0)));
        let lead_card = tractor_core::card::Card::suited(led_suit, led_rank, 0);
        let mut trick = Trick::new(trump);
        trick.record_play(0, vec![lead_card], true);

        prop_assume!(hand.iter().all(|c| class_of(*c, &trump) != class_of(lead_card, &trump)));
        prop_assume!(!hand.is_empty());
        let play = vec![hand[0]];
        let result = evaluate_trick_play(&play, &trick, &trump, &hand, &Config::DEFAULT);
        // A void player's single-card throw is always type-legal (it may
        // still fail suit-following, but never on combo-type grounds).
        prop_assert_ne!(result.reason, Some(tractor_core::Reason::ComboTypeMismatch));
    }

    /// A play built entirely from cards outside the hand offered is always
    /// rejected for provenance, regardless of trump context or lead shape.
    #[test]
    fn foreign_cards_are_never_a_valid_play(
        trump in support::trump_info(),
        lead in proptest::collection::vec(support::any_card(), 1..4),
        hand in proptest::collection::vec(support::any_card(), 0..4),
        foreign in support::any_card(),
    ) {
        prop_assume!(!hand.contains(&foreign) && !lead.is_empty());
        let play = vec![foreign];
        let verdict = is_valid_play(&play, &hand, &lead, &trump, &Config::DEFAULT);
        prop_assert!(!verdict.valid);
    }

    /// Leading cards that include any trump card are never accepted as a
    /// multi-combo lead: a multi-combo lead must be a single non-trump
    /// suit.
    #[test]
    fn a_multi_combo_lead_containing_trump_is_always_rejected(
        trump in support::trump_info(),
        suit in support::suit(),
        rank in support::rank(),
    ) {
        let plain = tractor_core::card::Card::suited(suit, rank, 0);
        prop_assume!(!trump.is_trump(plain));
        let cards = vec![plain, tractor_core::card::Card::joker(tractor_core::card::JokerRank::Small, 0)];
        let verdict = validate_leading_multi_combo(&cards, &trump, &[], &[], &[], &[], &Config::DEFAULT);
        prop_assert!(!verdict.valid);
    }

    /// `identifyCombos` never returns fewer combos than a clean
    /// decomposition of the same cards, since every decomposed combo is
    /// itself a valid (overlapping-allowed) combo.
    #[test]
    fn identify_combos_is_at_least_as_rich_as_decompose(
        trump in support::trump_info(),
        hand in proptest::collection::vec(support::any_card(), 0..8),
    ) {
        support::init_tracing();
        let decomposed = decompose(&hand, &trump, &Config::DEFAULT);
        let identified = identify_combos(&hand, &trump, &Config::DEFAULT);
        tracing::debug!(
            decomposed = decomposed.len(),
            identified = identified.len(),
            "combo counts"
        );
        prop_assert!(identified.len() >= decomposed.iter().filter(|c| c.combo_type() != ComboType::Invalid).count());
    }
}
