//! C4: structural analysis of a card set within a single class.

use crate::card::{validate_unique, Card};
use crate::combo::{decompose, Combo};
use crate::config::Config;
use crate::errors::ContractViolation;
use crate::trump::{class_of, Class, TrumpInfo};

/// Summary of a card set belonging to a single class. Adopts
/// the `total_pairs` representation (tractor pairs plus standalone pairs);
/// `singles` is derived, not stored, as `total_length - 2 * total_pairs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiComboStructure {
    pub class: Class,
    pub total_length: usize,
    pub total_pairs: usize,
    pub tractors: usize,
    /// Length, in pairs, of each tractor component.
    pub tractor_sizes: Vec<usize>,
    pub is_leading: bool,
}

impl MultiComboStructure {
    pub fn singles(&self) -> usize {
        self.total_length - 2 * self.total_pairs
    }

    pub fn longest_tractor(&self) -> usize {
        self.tractor_sizes.iter().copied().max().unwrap_or(0)
    }
}

/// `analyseComponents`: `decompose(cards, trump, config)` after verifying every
/// card belongs to the same class.
///
/// # Errors
/// Returns [`ContractViolation::MalformedCard`] if the same physical card
/// (kind + deck copy) appears twice in `cards`, and
/// [`ContractViolation::MixedClassMultiCombo`] if `cards` is empty or spans
/// more than one class.
pub fn analyse_components(
    cards: &[Card],
    trump: &TrumpInfo,
    config: &Config,
) -> Result<Vec<Combo>, ContractViolation> {
    validate_unique(cards)?;
    single_class(cards, trump)?;
    Ok(decompose(cards, trump, config))
}

fn single_class(cards: &[Card], trump: &TrumpInfo) -> Result<Class, ContractViolation> {
    let mut classes = cards.iter().map(|c| class_of(*c, trump));
    let first = classes.next().ok_or(ContractViolation::MixedClassMultiCombo)?;
    if classes.all(|c| c == first) {
        Ok(first)
    } else {
        Err(ContractViolation::MixedClassMultiCombo)
    }
}

/// `getMultiComboStructure`: aggregates a combo decomposition into a
/// [`MultiComboStructure`].
pub fn get_multi_combo_structure(
    combos: &[Combo],
    class: Class,
    is_leading: bool,
) -> MultiComboStructure {
    let total_length = combos.iter().map(Combo::len).sum();
    let tractor_sizes: Vec<usize> = combos
        .iter()
        .filter_map(|c| match c {
            Combo::Tractor(pairs) => Some(pairs.len()),
            _ => None,
        })
        .collect();
    let tractor_pairs: usize = tractor_sizes.iter().sum();
    let standalone_pairs = combos.iter().filter(|c| matches!(c, Combo::Pair(..))).count();
    MultiComboStructure {
        class,
        total_length,
        total_pairs: tractor_pairs + standalone_pairs,
        tractors: tractor_sizes.len(),
        tractor_sizes,
        is_leading,
    }
}

/// `matchesRequiredComponents`: can a following play with structure
/// `following` satisfy a lead requiring `required`? Strictly-stronger
/// structures may satisfy a weaker requirement (a tractor can cover a pair
/// requirement, a pair can cover a single), never the reverse.
pub fn matches_required_components(
    following: &MultiComboStructure,
    required: &MultiComboStructure,
) -> bool {
    following.total_length == required.total_length
        && following.total_pairs >= required.total_pairs
        && following.tractors >= required.tractors
        && following.tractor_sizes.iter().sum::<usize>() >= required.tractor_sizes.iter().sum()
        && following.longest_tractor() >= required.longest_tractor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    const TRUMP: TrumpInfo = TrumpInfo {
        trump_rank: Rank::Two,
        trump_suit: Some(Suit::Hearts),
    };

    fn c(suit: Suit, rank: Rank, idx: u8) -> Card {
        Card::suited(suit, rank, idx)
    }

    #[test]
    fn mixed_class_is_rejected() {
        let cards = vec![c(Suit::Clubs, Rank::Three, 0), c(Suit::Spades, Rank::Four, 0)];
        assert_eq!(
            analyse_components(&cards, &TRUMP, &Config::DEFAULT),
            Err(ContractViolation::MixedClassMultiCombo)
        );
    }

    #[test]
    fn duplicate_physical_card_is_malformed() {
        let jack = c(Suit::Clubs, Rank::Jack, 0);
        let cards = vec![jack, jack];
        assert_eq!(
            analyse_components(&cards, &TRUMP, &Config::DEFAULT),
            Err(ContractViolation::MalformedCard)
        );
    }

    #[test]
    fn structure_matches_is_reflexive() {
        // P5
        let cards = vec![
            c(Suit::Clubs, Rank::Ace, 0),
            c(Suit::Clubs, Rank::Ace, 1),
            c(Suit::Clubs, Rank::Queen, 0),
        ];
        let combos = analyse_components(&cards, &TRUMP, &Config::DEFAULT).unwrap();
        let structure = get_multi_combo_structure(&combos, Class::Suit(Suit::Clubs), true);
        // A structure always satisfies its own requirement.
        assert!(matches_required_components(&structure, &structure));
    }

    #[test]
    fn stronger_structure_satisfies_weaker_requirement() {
        // Required: one pair plus two singles (length 4, structurally weak).
        let required_cards = vec![
            c(Suit::Clubs, Rank::Queen, 0),
            c(Suit::Clubs, Rank::Queen, 1),
            c(Suit::Clubs, Rank::Nine, 0),
            c(Suit::Clubs, Rank::Jack, 0),
        ];
        let required = get_multi_combo_structure(
            &analyse_components(&required_cards, &TRUMP, &Config::DEFAULT).unwrap(),
            Class::Suit(Suit::Clubs),
            true,
        );
        // Following: a 2-pair tractor of the same total length (a strictly
        // stronger structure) should satisfy the weaker pair requirement.
        let following_cards = vec![
            c(Suit::Clubs, Rank::King, 0),
            c(Suit::Clubs, Rank::King, 1),
            c(Suit::Clubs, Rank::Ace, 0),
            c(Suit::Clubs, Rank::Ace, 1),
        ];
        let following = get_multi_combo_structure(
            &analyse_components(&following_cards, &TRUMP, &Config::DEFAULT).unwrap(),
            Class::Suit(Suit::Clubs),
            false,
        );
        assert!(matches_required_components(&following, &required));
        // But the reverse does not hold: the weaker structure cannot cover
        // the stronger one's tractor requirement.
        assert!(!matches_required_components(&required, &following));
    }
}
