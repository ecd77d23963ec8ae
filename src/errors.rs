//! Error taxonomy: contract violations are fatal caller bugs;
//! everything else is a non-fatal, structured rule verdict returned as data
//! by the affected operation (see [`crate::play::PlayVerdict`],
//! [`crate::leading::LeadVerdict`], [`crate::trick::TrickPlayResult`]).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Preconditions the core refuses to paper over. These signal a caller bug
/// and are not meant to be recovered from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ContractViolation {
    /// `compare` was asked to order two non-trump cards of different suits.
    /// There is no total order across non-trump suits; route the decision
    /// through `evaluate_trick_play` instead.
    #[error("cannot compare non-trump cards of different suits")]
    InvalidComparison,
    /// A multi-combo analysis was handed cards spanning more than one class
    /// (more than one non-trump suit, or a mix of trump and non-trump).
    #[error("cards span more than one class")]
    MixedClassMultiCombo,
    /// A card set violated a global uniqueness invariant (the same
    /// `instanceId` appearing twice). Rust's type system rules out unknown
    /// ranks/suits, so this variant exists only for the duplicate-instance
    /// case; constructing the card universe is the caller's responsibility
    /// (out of scope here).
    #[error("duplicate card instance")]
    MalformedCard,
}

/// Non-fatal rule-verdict reason codes. These ride along on the
/// plain-data verdicts returned by [`crate::play`], [`crate::leading`] and
/// [`crate::trick`] — they are never raised as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Reason {
    /// A played card is not present in the hand offered.
    CardNotInHand,
    /// The play has a different number of cards than the lead.
    WrongCount,
    /// The play doesn't use up the led class the way suit-following requires.
    NotFollowingSuit,
    /// The play's structure doesn't match (or exceed) what the lead
    /// requires, given what the player actually holds in the led class.
    StructureMismatch,
    /// A non-multi lead's combo type and the follow's combo type differ, and
    /// the follow isn't a void-and-trump overtake.
    ComboTypeMismatch,
    /// A multi-combo lead's cards span more than one non-trump suit, or
    /// include a trump card.
    NotSingleNonTrumpSuit,
    /// A multi-combo lead decomposed into fewer than two components.
    TooFewComponents,
    /// Neither "all opponents void in the suit" nor "every component
    /// unbeatable" holds.
    NotVoidOrUnbeatable,
    /// There is no lead yet to follow.
    TrickNotStarted,
}
