//! Card comparison, combo recognition, legality, and trick-resolution for
//! Tractor (Sheng Ji / Tuo La Ji).
//!
//! This crate answers one question at a time: given a trump context, is
//! this a legal combo, does this follow legally, and which play is winning?
//! It does not deal cards, run bidding, track score across rounds, drive a
//! game loop, or talk to a network — those live in whatever embeds this
//! crate.
//!
//! ```
//! use tractor_core::card::{Card, Rank, Suit};
//! use tractor_core::comparator::compare;
//! use tractor_core::trump::TrumpInfo;
//!
//! let trump = TrumpInfo::new(Rank::Two, Some(Suit::Hearts));
//! let ace_of_spades = Card::suited(Suit::Spades, Rank::Ace, 0);
//! let three_of_hearts = Card::suited(Suit::Hearts, Rank::Three, 0);
//! assert!(compare(three_of_hearts, ace_of_spades, &trump).unwrap().is_gt());
//! ```

pub mod card;
pub mod combo;
pub mod comparator;
pub mod config;
pub mod errors;
pub mod leading;
pub mod multicombo;
pub mod play;
pub mod trick;
pub mod trump;
pub mod unbeatable;

pub use card::{Card, CardKind, JokerRank, Rank, Suit};
pub use combo::{Combo, ComboType};
pub use comparator::compare;
pub use config::{Config, FollowRule};
pub use errors::{ContractViolation, Reason};
pub use leading::{validate_leading_multi_combo, LeadVerdict, PlayerId};
pub use multicombo::{analyse_components, matches_required_components, MultiComboStructure};
pub use play::{is_valid_play, PlayVerdict};
pub use trick::{evaluate_trick_play, PlayedCards, Trick, TrickPlayResult, TrickState};
pub use trump::{class_of, trump_level, Class, TrumpInfo, TrumpLevel};
pub use unbeatable::is_combo_unbeatable;
