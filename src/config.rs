//! Compile-time configuration knobs.

/// How a follow handles being short of the lead's required structure in the
/// led class (spec.md §6's `followRule: {strict, relaxed-when-void} =
/// strict`). Both values still obey §4.6 rule 3's hard suit-following
/// requirement — a player must spend every led-class card they hold before
/// touching another class — the knob only governs what happens to the
/// *structure* requirement once a player is short or fully void.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowRule {
    /// Once a player is short of the led class, the structure requirement
    /// still binds against whatever their *whole hand* could best offer —
    /// including trump — not just their led-class holdings. A player
    /// sitting on a matching trump pair cannot dodge a pair requirement by
    /// throwing two unrelated trump singles instead.
    Strict,
    /// The bare exhaustion rule: once a player has spent every led-class
    /// card they hold, the remainder of the play is unconstrained, win or
    /// lose, with no further structure check against the rest of the hand.
    RelaxedWhenVoid,
}

/// The small set of parameters a caller can vary. There is no file or CLI
/// surface for this — it is plain data passed in by the embedding
/// application, constructed the same way as any other value rather than
/// parsed from a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub decks: u8,
    pub tractor_min_pairs: usize,
    pub follow_rule: FollowRule,
}

impl Config {
    pub const DEFAULT: Config = Config {
        decks: 2,
        tractor_min_pairs: 2,
        follow_rule: FollowRule::Strict,
    };
}

impl Default for Config {
    fn default() -> Self {
        Config::DEFAULT
    }
}
