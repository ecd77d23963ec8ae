//! Trick state and C8: the trick-play evaluator.

use std::cmp::Ordering;

use crate::card::Card;
use crate::combo::{classify, decompose, Combo, ComboType};
use crate::comparator::compare;
use crate::config::Config;
use crate::errors::Reason;
use crate::leading::PlayerId;
use crate::multicombo::analyse_components;
use crate::play::is_valid_play;
use crate::trump::TrumpInfo;

/// One player's contribution to a trick, in the order it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedCards {
    pub player: PlayerId,
    pub cards: Vec<Card>,
}

/// Where a trick stands relative to its four plays. Dealing, bidding and the
/// turn order that advances a trick from one state to the next are out of
/// scope — this only describes the shape of `plays`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrickState {
    Open,
    Led,
    Contested,
    Complete,
}

/// An append-only record of the cards played to one trick, plus which play
/// currently wins it. Nothing here enforces turn order or seat rotation;
/// callers append plays as they happen and are told, via
/// [`evaluate_trick_play`], whether a given play takes over the lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trick {
    trump: TrumpInfo,
    plays: Vec<PlayedCards>,
    winning_index: Option<usize>,
}

impl Trick {
    pub fn new(trump: TrumpInfo) -> Self {
        Trick {
            trump,
            plays: vec![],
            winning_index: None,
        }
    }

    pub fn trump(&self) -> &TrumpInfo {
        &self.trump
    }

    pub fn state(&self) -> TrickState {
        match self.plays.len() {
            0 => TrickState::Open,
            1 => TrickState::Led,
            2 | 3 => TrickState::Contested,
            _ => TrickState::Complete,
        }
    }

    pub fn lead(&self) -> Option<&PlayedCards> {
        self.plays.first()
    }

    pub fn winning_play(&self) -> Option<&PlayedCards> {
        self.winning_index.and_then(|i| self.plays.get(i))
    }

    pub fn winning_player_id(&self) -> Option<PlayerId> {
        self.winning_play().map(|p| p.player)
    }

    pub fn plays(&self) -> &[PlayedCards] {
        &self.plays
    }

    /// Records a play. `becomes_winner` is the caller's own decision — in
    /// practice the `canBeat` field of [`evaluate_trick_play`]'s result —
    /// since determining whether a play actually wins depends on who's
    /// offering it and is not this type's job to compute itself.
    pub fn record_play(&mut self, player: PlayerId, cards: Vec<Card>, becomes_winner: bool) {
        self.plays.push(PlayedCards { player, cards });
        if becomes_winner || self.winning_index.is_none() {
            self.winning_index = Some(self.plays.len() - 1);
        }
    }

    /// Sum of point cards (5s, 10s, kings) across every play so far.
    pub fn points(&self) -> u32 {
        self.plays
            .iter()
            .flat_map(|p| p.cards.iter())
            .map(|c| c.points() as u32)
            .sum()
    }
}

/// Outcome of [`evaluate_trick_play`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrickPlayResult {
    pub can_beat: bool,
    pub is_legal: bool,
    /// A coarse strength signal for callers that want a single scalar: 75
    /// when the play takes the trick, 50 when it ties the current winner's
    /// position without overtaking it, 25 otherwise (illegal plays always
    /// score 25).
    pub strength: u8,
    pub reason: Option<Reason>,
}

/// `evaluateTrickPlay`: is `play` legal against `trick`, and
/// if so, does it beat whoever is currently winning?
///
/// 1. Determine the lead's combo type (Single/Pair/Tractor/MultiCombo) and
///    the play's own strict combo type.
/// 2. If the lead isn't a multi-combo and the types differ, the play is
///    illegal outright (unless it's a void player throwing trump, handled
///    uniformly by step 3's delegation to C7).
/// 3. Delegate suit-following and structural legality to
///    [`is_valid_play`] (C7).
/// 4. If legal, compare against the current winner: trump beats non-trump,
///    same non-trump suit compares by rank (C3), and a trump follow against
///    a multi-combo lead compares under the lead's dominant required combo
///    type (tractor > pair > single priority).
pub fn evaluate_trick_play(
    play: &[Card],
    trick: &Trick,
    trump: &TrumpInfo,
    hand: &[Card],
    config: &Config,
) -> TrickPlayResult {
    let Some(lead) = trick.lead() else {
        return TrickPlayResult {
            can_beat: false,
            is_legal: false,
            strength: 25,
            reason: Some(Reason::TrickNotStarted),
        };
    };

    let lead_type = lead_combo_type(&lead.cards, trump, config);
    let proposed_type = classify(play, trump, config);

    if lead_type != ComboType::MultiCombo && proposed_type != ComboType::Invalid && proposed_type != lead_type {
        let is_void_trump_overtake = play.iter().all(|c| trump.is_trump(*c))
            && !lead.cards.iter().all(|c| trump.is_trump(*c));
        if !is_void_trump_overtake {
            return TrickPlayResult {
                can_beat: false,
                is_legal: false,
                strength: 25,
                reason: Some(Reason::ComboTypeMismatch),
            };
        }
    }

    let verdict = is_valid_play(play, hand, &lead.cards, trump, config);
    if !verdict.valid {
        return TrickPlayResult {
            can_beat: false,
            is_legal: false,
            strength: 25,
            reason: verdict.reason,
        };
    }

    let winner = trick.winning_play().unwrap_or(lead);
    let ordering = decide_ordering(play, &winner.cards, lead_type, &lead.cards, trump, config);

    let (can_beat, strength) = match ordering {
        Some(Ordering::Greater) => (true, 75),
        Some(Ordering::Equal) => (false, 50),
        _ => (false, 25),
    };

    TrickPlayResult {
        can_beat,
        is_legal: true,
        strength,
        reason: None,
    }
}

fn lead_combo_type(cards: &[Card], trump: &TrumpInfo, config: &Config) -> ComboType {
    let direct = classify(cards, trump, config);
    if direct != ComboType::Invalid {
        return direct;
    }
    match analyse_components(cards, trump, config) {
        Ok(combos) if combos.len() >= 2 => ComboType::MultiCombo,
        _ => ComboType::Invalid,
    }
}

fn decide_ordering(
    play: &[Card],
    winner: &[Card],
    lead_type: ComboType,
    lead: &[Card],
    trump: &TrumpInfo,
    config: &Config,
) -> Option<Ordering> {
    if lead_type == ComboType::MultiCombo {
        let play_is_trump = play.iter().any(|c| trump.is_trump(*c));
        if !play_is_trump {
            // A same-suit follow can never overtake a multi-combo lead.
            return Some(Ordering::Less);
        }
        let winner_is_trump = winner.iter().any(|c| trump.is_trump(*c));
        if !winner_is_trump {
            return Some(Ordering::Greater);
        }
        let required_type = dominant_required_type(&decompose(lead, trump, config));
        let play_card = best_card_for_type(play, required_type, trump, config);
        let winner_card = best_card_for_type(winner, required_type, trump, config);
        return compare(play_card, winner_card, trump).ok();
    }

    let play_is_trump = play.iter().any(|c| trump.is_trump(*c));
    let winner_is_trump = winner.iter().any(|c| trump.is_trump(*c));
    match (play_is_trump, winner_is_trump) {
        (true, false) => Some(Ordering::Greater),
        (false, true) => Some(Ordering::Less),
        _ => {
            let play_card = strongest_card(play, trump)?;
            let winner_card = strongest_card(winner, trump)?;
            compare(play_card, winner_card, trump).ok()
        }
    }
}

fn dominant_required_type(combos: &[Combo]) -> ComboType {
    if combos.iter().any(|c| matches!(c, Combo::Tractor(_))) {
        ComboType::Tractor
    } else if combos.iter().any(|c| matches!(c, Combo::Pair(..))) {
        ComboType::Pair
    } else {
        ComboType::Single
    }
}

/// The strongest card `cards` can offer at comparison type `ty`: the top
/// rung of a tractor stands in for a pair or a single, a pair's card stands
/// in for a single, and so on — "a higher combo type may supply a lower
/// one".
fn best_card_for_type(cards: &[Card], ty: ComboType, trump: &TrumpInfo, config: &Config) -> Card {
    let combos = decompose(cards, trump, config);
    let mut best: Option<Card> = None;
    for combo in &combos {
        let candidate = match (ty, combo) {
            (ComboType::Tractor, Combo::Tractor(pairs)) => Some(pairs.last().unwrap().0),
            (ComboType::Pair, Combo::Tractor(pairs)) => Some(pairs.last().unwrap().0),
            (ComboType::Pair, Combo::Pair(a, _)) => Some(*a),
            (ComboType::Single, _) => Some(combo.representative()),
            _ => None,
        };
        if let Some(candidate) = candidate {
            best = Some(match best {
                None => candidate,
                Some(current) => {
                    if compare(candidate, current, trump) == Ok(Ordering::Greater) {
                        candidate
                    } else {
                        current
                    }
                }
            });
        }
    }
    best.unwrap_or(cards[0])
}

/// The strongest card in a homogeneous-class card set (every card the same
/// non-trump suit, or every card trump) — always comparable pairwise.
fn strongest_card(cards: &[Card], trump: &TrumpInfo) -> Option<Card> {
    cards
        .iter()
        .copied()
        .reduce(|a, b| if compare(a, b, trump) == Ok(Ordering::Greater) { a } else { b })
}
