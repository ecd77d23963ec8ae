//! C7: the following-play validator.

use std::collections::HashMap;

use crate::card::Card;
use crate::combo::{decompose, Combo};
use crate::config::{Config, FollowRule};
use crate::errors::Reason;
use crate::multicombo::{get_multi_combo_structure, matches_required_components, MultiComboStructure};
use crate::trump::{class_of, Class, TrumpInfo};

/// Outcome of [`is_valid_play`], carrying a reason when `valid` is `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayVerdict {
    pub valid: bool,
    pub reason: Option<Reason>,
}

impl PlayVerdict {
    fn ok() -> Self {
        PlayVerdict {
            valid: true,
            reason: None,
        }
    }

    fn fail(reason: Reason) -> Self {
        PlayVerdict {
            valid: false,
            reason: Some(reason),
        }
    }
}

/// `isValidPlay`: is `play`, drawn from `hand`, a legal
/// response to `lead`? `lead` is the trick's first play; this function does
/// not itself validate leads (a lone lead is always structurally legal, a
/// multi-combo lead goes through [`crate::leading::validate_leading_multi_combo`]
/// first).
///
/// Rule order:
/// 1. provenance — every played card must come from `hand`.
/// 2. count — `play.len() == lead.len()`.
/// 3. suit-following — a player holding `>= play.len()` cards of the led
///    class must play entirely within it; a player holding fewer must play
///    every one of them and fill the rest freely (the exhaustion rule).
/// 4/5/6. structure — when not short of the led class, the player must use
///    the strongest pair/tractor structure they could have formed, if the
///    lead required one; a player who could never meet it is unconstrained.
///    Once a player is short of the led class, `config.follow_rule` decides
///    whether the structure requirement still binds against their whole
///    hand ([`FollowRule::Strict`]) or is waived entirely
///    ([`FollowRule::RelaxedWhenVoid`]).
pub fn is_valid_play(
    play: &[Card],
    hand: &[Card],
    lead: &[Card],
    trump: &TrumpInfo,
    config: &Config,
) -> PlayVerdict {
    if !hand_contains(hand, play) {
        return PlayVerdict::fail(Reason::CardNotInHand);
    }

    if lead.is_empty() {
        return match single_class(play, trump) {
            Some(_) => PlayVerdict::ok(),
            None => PlayVerdict::fail(Reason::NotSingleNonTrumpSuit),
        };
    }

    if play.len() != lead.len() {
        return PlayVerdict::fail(Reason::WrongCount);
    }

    let led_class = class_of(lead[0], trump);
    let n_hand = hand.iter().filter(|c| class_of(**c, trump) == led_class).count();
    let n_play_class = play.iter().filter(|c| class_of(**c, trump) == led_class).count();

    if n_hand >= play.len() {
        if n_play_class != play.len() {
            return PlayVerdict::fail(Reason::NotFollowingSuit);
        }
    } else if n_play_class != n_hand {
        return PlayVerdict::fail(Reason::NotFollowingSuit);
    }

    if n_hand < play.len() {
        // Void or short: every led-class card in hand has been spent.
        // `RelaxedWhenVoid` waives the structure requirement outright; under
        // `Strict` it still binds, but against the best structure the whole
        // hand can offer rather than just the (now exhausted) led class.
        if config.follow_rule == FollowRule::RelaxedWhenVoid {
            return PlayVerdict::ok();
        }
        return check_structure(play, hand, lead, led_class, trump, config);
    }

    check_structure(play, &hand_in_class(hand, led_class, trump), lead, led_class, trump, config)
}

fn hand_in_class(hand: &[Card], led_class: Class, trump: &TrumpInfo) -> Vec<Card> {
    hand.iter()
        .copied()
        .filter(|c| class_of(*c, trump) == led_class)
        .collect()
}

fn check_structure(
    play: &[Card],
    achievable_from: &[Card],
    lead: &[Card],
    led_class: Class,
    trump: &TrumpInfo,
    config: &Config,
) -> PlayVerdict {
    let lead_combos = decompose(lead, trump, config);
    let required = get_multi_combo_structure(&lead_combos, led_class, true);

    let achievable = best_structure_within(achievable_from, play.len(), led_class, trump, config);

    if matches_required_components(&achievable, &required) {
        let play_combos = decompose(play, trump, config);
        let play_structure = get_multi_combo_structure(&play_combos, led_class, false);
        if !matches_required_components(&play_structure, &required) {
            return PlayVerdict::fail(Reason::StructureMismatch);
        }
    }

    PlayVerdict::ok()
}

fn hand_contains(hand: &[Card], play: &[Card]) -> bool {
    let mut available: HashMap<Card, usize> = HashMap::new();
    for card in hand {
        *available.entry(*card).or_insert(0) += 1;
    }
    for card in play {
        match available.get_mut(card) {
            Some(n) if *n > 0 => *n -= 1,
            _ => return false,
        }
    }
    true
}

fn single_class(cards: &[Card], trump: &TrumpInfo) -> Option<Class> {
    let mut classes = cards.iter().map(|c| class_of(*c, trump));
    let first = classes.next()?;
    classes.all(|c| c == first).then_some(first)
}

/// The strongest structure obtainable from any `k`-card subset of `cards`:
/// the greedy decomposition, taken longest-tractor-first, split down to fit
/// within `k` cards when the full combo would overshoot.
fn best_structure_within(
    cards: &[Card],
    k: usize,
    class: Class,
    trump: &TrumpInfo,
    config: &Config,
) -> MultiComboStructure {
    let mut combos = decompose(cards, trump, config);
    combos.sort_by_key(|c| std::cmp::Reverse(strength_key(c)));

    let mut chosen: Vec<Combo> = vec![];
    let mut remaining = k;

    for combo in combos {
        if remaining == 0 {
            break;
        }
        let len = combo.len();
        if len <= remaining {
            remaining -= len;
            chosen.push(combo);
            continue;
        }
        match combo {
            Combo::Tractor(pairs) => {
                let usable_pairs = remaining / 2;
                if usable_pairs >= 2 {
                    chosen.push(Combo::Tractor(pairs[..usable_pairs].to_vec()));
                    remaining -= usable_pairs * 2;
                } else if usable_pairs == 1 {
                    let (a, b) = pairs[0];
                    chosen.push(Combo::Pair(a, b));
                    remaining -= 2;
                } else if remaining == 1 {
                    chosen.push(Combo::Single(pairs[0].0));
                    remaining -= 1;
                }
            }
            Combo::Pair(a, _) => {
                if remaining >= 1 {
                    chosen.push(Combo::Single(a));
                    remaining -= 1;
                }
            }
            Combo::Single(_) => unreachable!("a single always fits when remaining >= 1"),
        }
    }

    get_multi_combo_structure(&chosen, class, false)
}

fn strength_key(combo: &Combo) -> (u8, usize) {
    match combo {
        Combo::Tractor(pairs) => (2, pairs.len()),
        Combo::Pair(..) => (1, 0),
        Combo::Single(_) => (0, 0),
    }
}
