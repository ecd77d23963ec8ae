//! C6: the leading-multi-combo validator.

use crate::card::Card;
use crate::combo::Combo;
use crate::config::Config;
use crate::errors::Reason;
use crate::multicombo::analyse_components;
use crate::trump::{class_of, Class, TrumpInfo};
use crate::unbeatable::is_combo_unbeatable;

/// Seat index of a player around the table. Dealing, bidding, and the
/// rotation between seats are out of scope; this core only
/// needs seats as opaque identifiers to report who is void or who holds a
/// beatable component.
pub type PlayerId = u8;

/// Which opponents are known void in the led suit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoidStatus {
    pub all_opponents_void: bool,
    pub void_players: Vec<PlayerId>,
}

/// Which of the lead's components can still be beaten from the unseen
/// remainder of the suit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnbeatableStatus {
    pub all_unbeatable: bool,
    pub beatable_components: Vec<Combo>,
}

/// Outcome of [`validate_leading_multi_combo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadVerdict {
    pub valid: bool,
    pub reasons: Vec<Reason>,
    pub void_status: VoidStatus,
    pub unbeatable_status: UnbeatableStatus,
}

/// `validateLeadingMultiCombo`. A leading multi-combo is
/// legal iff:
/// 1. every card belongs to the same non-trump suit (no trump allowed);
/// 2. the cards decompose into at least two non-overlapping components
///    (C2/C4) — a bare single or pair is not a multi-combo lead at all;
/// 3. either every other player is already known void in that suit, or
///    every component is individually unbeatable (C5) given what's already
///    been played, the leader's own remaining hand, and the visible kitty.
///
/// `void_players` is supplied by the caller (out of scope here: tracking
/// who has shown out of a suit over the course of a round).
#[allow(clippy::too_many_arguments)]
pub fn validate_leading_multi_combo(
    cards: &[Card],
    trump: &TrumpInfo,
    void_players: &[PlayerId],
    played_cards: &[Card],
    own_hand: &[Card],
    visible_kitty: &[Card],
    config: &Config,
) -> LeadVerdict {
    let mut reasons = vec![];

    let class = match single_non_trump_class(cards, trump) {
        Some(class) => class,
        None => {
            reasons.push(Reason::NotSingleNonTrumpSuit);
            return LeadVerdict {
                valid: false,
                reasons,
                void_status: VoidStatus {
                    all_opponents_void: false,
                    void_players: void_players.to_vec(),
                },
                unbeatable_status: UnbeatableStatus {
                    all_unbeatable: false,
                    beatable_components: vec![],
                },
            };
        }
    };

    let components = analyse_components(cards, trump, config).unwrap_or_default();
    if components.len() < 2 {
        reasons.push(Reason::TooFewComponents);
    }

    let all_opponents_void = void_players.len() >= 3;
    let void_status = VoidStatus {
        all_opponents_void,
        void_players: void_players.to_vec(),
    };

    let beatable_components: Vec<Combo> = components
        .iter()
        .filter(|combo| {
            !is_combo_unbeatable(combo, class, played_cards, own_hand, trump, visible_kitty, config)
        })
        .cloned()
        .collect();
    let all_unbeatable = beatable_components.is_empty();
    let unbeatable_status = UnbeatableStatus {
        all_unbeatable,
        beatable_components,
    };

    if !all_opponents_void && !all_unbeatable {
        reasons.push(Reason::NotVoidOrUnbeatable);
    }

    LeadVerdict {
        valid: reasons.is_empty(),
        reasons,
        void_status,
        unbeatable_status,
    }
}

fn single_non_trump_class(cards: &[Card], trump: &TrumpInfo) -> Option<Class> {
    if cards.is_empty() {
        return None;
    }
    let mut classes = cards.iter().map(|c| class_of(*c, trump));
    let first = classes.next()?;
    if matches!(first, Class::Trump) || !classes.all(|c| c == first) {
        return None;
    }
    Some(first)
}
