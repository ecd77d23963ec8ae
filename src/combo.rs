//! C2: combo detection (single/pair/tractor) and non-overlapping
//! decomposition of a card set.

use std::collections::HashMap;

use crate::card::{Card, CardKind};
use crate::config::Config;
use crate::trump::{class_of, tractor_position, Class, TrumpInfo};

/// The shape of a combo, or of an arbitrary card set evaluated against the
/// combo rules. `classify` only ever returns `Single`, `Pair`, `Tractor` or
/// `Invalid`; `MultiCombo` is produced by the leading-combo
/// and trick-evaluation layers once they have inspected a [`Combo`]
/// decomposition themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboType {
    Single,
    Pair,
    Tractor,
    MultiCombo,
    Invalid,
}

/// A single non-overlapping unit: one card, a matching pair, or a run of
/// consecutive pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Combo {
    Single(Card),
    Pair(Card, Card),
    /// `pairs.len() >= 2`, each entry a matched pair of one tractor "rung".
    /// Rungs are stored lowest-to-highest in tractor-adjacency order.
    Tractor(Vec<(Card, Card)>),
}

impl Combo {
    pub fn combo_type(&self) -> ComboType {
        match self {
            Combo::Single(_) => ComboType::Single,
            Combo::Pair(..) => ComboType::Pair,
            Combo::Tractor(_) => ComboType::Tractor,
        }
    }

    pub fn cards(&self) -> Vec<Card> {
        match self {
            Combo::Single(c) => vec![*c],
            Combo::Pair(a, b) => vec![*a, *b],
            Combo::Tractor(pairs) => pairs.iter().flat_map(|(a, b)| [*a, *b]).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Combo::Single(_) => 1,
            Combo::Pair(..) => 2,
            Combo::Tractor(pairs) => pairs.len() * 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of tractor rungs (0 for Single/Pair, >= 2 for a Tractor).
    pub fn tractor_len(&self) -> usize {
        match self {
            Combo::Tractor(pairs) => pairs.len(),
            _ => 0,
        }
    }

    /// One representative card, used when only a strength comparison is
    /// needed (e.g. picking "the highest single out of a pair").
    pub fn representative(&self) -> Card {
        match self {
            Combo::Single(c) => *c,
            Combo::Pair(a, _) => *a,
            Combo::Tractor(pairs) => pairs.last().expect("tractor has at least one rung").0,
        }
    }
}

/// `classify`: strict single-combo classifier. Returns `Single`/`Pair`/
/// `Tractor` only when `cards` is *exactly* that; otherwise `Invalid`.
pub fn classify(cards: &[Card], trump: &TrumpInfo, config: &Config) -> ComboType {
    match cards.len() {
        0 => ComboType::Invalid,
        1 => ComboType::Single,
        2 => {
            if cards[0].common_id() == cards[1].common_id() && cards[0] != cards[1] {
                ComboType::Pair
            } else {
                ComboType::Invalid
            }
        }
        n if n % 2 == 0 && n >= 4 => {
            if is_tractor(cards, trump, config) {
                ComboType::Tractor
            } else {
                ComboType::Invalid
            }
        }
        _ => ComboType::Invalid,
    }
}

fn is_tractor(cards: &[Card], trump: &TrumpInfo, config: &Config) -> bool {
    let counts = count_by_kind(cards);
    if counts.values().any(|cs| cs.len() != 2) {
        return false;
    }
    let kinds: Vec<CardKind> = counts.keys().copied().collect();
    let Some(class) = single_class(&kinds, trump) else {
        return false;
    };
    let mut positions: Vec<i32> = match kinds
        .iter()
        .map(|k| tractor_position(*k, class, trump))
        .collect::<Option<Vec<_>>>()
    {
        Some(p) => p,
        None => return false,
    };
    positions.sort_unstable();
    positions.len() >= config.tractor_min_pairs
        && positions.windows(2).all(|w| w[1] - w[0] == 1)
}

fn single_class(kinds: &[CardKind], trump: &TrumpInfo) -> Option<Class> {
    let mut classes = kinds.iter().map(|k| {
        let card = Card {
            kind: *k,
            deck_index: 0,
        };
        class_of(card, trump)
    });
    let first = classes.next()?;
    if classes.all(|c| c == first) {
        Some(first)
    } else {
        None
    }
}

fn count_by_kind(cards: &[Card]) -> HashMap<CardKind, Vec<Card>> {
    let mut counts: HashMap<CardKind, Vec<Card>> = HashMap::new();
    for card in cards {
        counts.entry(card.common_id()).or_default().push(*card);
    }
    counts
}

/// A maximal chain of tractor-adjacent kinds, each with at least 2
/// physical copies present, found while searching `available`.
struct TractorRun {
    class: Class,
    /// kinds in ascending adjacency-position order
    members: Vec<CardKind>,
}

/// All maximal adjacency runs across all classes present in `available`, of
/// at least `config.tractor_min_pairs` kinds, restricted to kinds with at
/// least 2 available copies.
fn find_tractor_runs(
    available: &HashMap<CardKind, Vec<Card>>,
    trump: &TrumpInfo,
    config: &Config,
) -> Vec<TractorRun> {
    let mut by_class: HashMap<Class, Vec<(i32, CardKind)>> = HashMap::new();
    for (kind, cards) in available {
        if cards.len() < 2 {
            continue;
        }
        let card = Card {
            kind: *kind,
            deck_index: 0,
        };
        let class = class_of(card, trump);
        if let Some(pos) = tractor_position(*kind, class, trump) {
            by_class.entry(class).or_default().push((pos, *kind));
        }
    }

    let mut runs = vec![];
    for (class, mut entries) in by_class {
        entries.sort_by_key(|(pos, _)| *pos);
        let mut current: Vec<CardKind> = vec![];
        let mut last_pos: Option<i32> = None;
        for (pos, kind) in entries {
            match last_pos {
                Some(p) if pos == p + 1 => current.push(kind),
                _ => {
                    flush_run(&mut runs, class, &mut current, config.tractor_min_pairs);
                    current.push(kind);
                }
            }
            last_pos = Some(pos);
        }
        flush_run(&mut runs, class, &mut current, config.tractor_min_pairs);
    }
    runs
}

fn flush_run(runs: &mut Vec<TractorRun>, class: Class, current: &mut Vec<CardKind>, min_pairs: usize) {
    if current.len() >= min_pairs {
        runs.push(TractorRun {
            class,
            members: current.clone(),
        });
    }
    current.clear();
}

/// `identifyCombos`: every sub-multiset of `cards` that forms a Single,
/// Pair, or Tractor. Unlike `decompose`, combos here may overlap each other.
pub fn identify_combos(cards: &[Card], trump: &TrumpInfo, config: &Config) -> Vec<Combo> {
    let counts = count_by_kind(cards);
    let mut combos = vec![];

    for card in cards {
        combos.push(Combo::Single(*card));
    }

    for group in counts.values() {
        if group.len() >= 2 {
            combos.push(Combo::Pair(group[0], group[1]));
        }
    }

    for run in find_tractor_runs(&counts, trump, config) {
        // every contiguous sub-run of at least `tractor_min_pairs` kinds is
        // itself a valid tractor
        for start in 0..run.members.len() {
            for end in (start + config.tractor_min_pairs - 1)..run.members.len() {
                let pairs: Vec<(Card, Card)> = run.members[start..=end]
                    .iter()
                    .map(|kind| {
                        let group = &counts[kind];
                        (group[0], group[1])
                    })
                    .collect();
                combos.push(Combo::Tractor(pairs));
            }
        }
    }

    combos
}

/// `decompose`: a greedy, non-overlapping cover of every card in `cards`,
/// preferring Tractor over Pair over Single, and longer over shorter within
/// a priority tier. If the greedy cover cannot consume a card by any other
/// means it falls back to treating it as a Single — the documented policy
/// from which this algorithm satisfies structurally since
/// every leftover card always qualifies as its own Single.
pub fn decompose(cards: &[Card], trump: &TrumpInfo, config: &Config) -> Vec<Combo> {
    let mut available = count_by_kind(cards);
    let mut result = vec![];

    loop {
        let mut runs = find_tractor_runs(&available, trump, config);
        // longest first; ties broken by lowest adjacency position for
        // determinism.
        runs.sort_by(|a, b| b.members.len().cmp(&a.members.len()));
        let Some(run) = runs.into_iter().next() else {
            break;
        };
        let pairs: Vec<(Card, Card)> = run
            .members
            .iter()
            .map(|kind| take_n(&mut available, *kind, 2))
            .collect();
        result.push(Combo::Tractor(pairs));
    }

    // remaining pairs
    let pair_kinds: Vec<CardKind> = available
        .iter()
        .filter(|(_, cs)| cs.len() >= 2)
        .map(|(k, _)| *k)
        .collect();
    for kind in pair_kinds {
        while available.get(&kind).map(|cs| cs.len()).unwrap_or(0) >= 2 {
            let pair = take_n(&mut available, kind, 2);
            result.push(Combo::Pair(pair.0, pair.1));
        }
    }

    // remaining singles
    let mut leftover: Vec<Card> = available.into_values().flatten().collect();
    leftover.sort_by_key(|c| format!("{c}"));
    for card in leftover {
        result.push(Combo::Single(card));
    }

    result
}

fn take_n(available: &mut HashMap<CardKind, Vec<Card>>, kind: CardKind, n: usize) -> (Card, Card) {
    let group = available.get_mut(&kind).expect("kind present");
    debug_assert!(group.len() >= n);
    let a = group.remove(0);
    let b = group.remove(0);
    (a, b)
}
