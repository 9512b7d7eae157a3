//! Life-like rule variants and next-state table generation.

use std::str::FromStr;

use super::error::EngineError;

/// Named Life-like transition rules. Each rule is a pair of
/// neighbor-count sets: a survival set that applies when the cell is
/// currently alive, and a birth set that applies regardless of current
/// state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    Life,
    HighLife,
    Seeds,
    Replicator,
    B25S4,
    Life34,
    Diamoeba,
    TwoByTwo,
    DayAndNight,
    Morley,
    Anneal,
    Famine,
    Gems,
    Fredkin,
    DotLife,
}

impl Rule {
    pub const ALL: [Rule; 15] = [
        Rule::Life,
        Rule::HighLife,
        Rule::Seeds,
        Rule::Replicator,
        Rule::B25S4,
        Rule::Life34,
        Rule::Diamoeba,
        Rule::TwoByTwo,
        Rule::DayAndNight,
        Rule::Morley,
        Rule::Anneal,
        Rule::Famine,
        Rule::Gems,
        Rule::Fredkin,
        Rule::DotLife,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Rule::Life => "life",
            Rule::HighLife => "highlife",
            Rule::Seeds => "seeds",
            Rule::Replicator => "replicator",
            Rule::B25S4 => "b25/s4",
            Rule::Life34 => "34life",
            Rule::Diamoeba => "diamoeba",
            Rule::TwoByTwo => "2x2",
            Rule::DayAndNight => "day&night",
            Rule::Morley => "morley",
            Rule::Anneal => "anneal",
            Rule::Famine => "famine",
            Rule::Gems => "gems",
            Rule::Fredkin => "fredkin",
            Rule::DotLife => "dotlife",
        }
    }

    /// Neighbor counts that keep a live cell alive.
    pub fn survival(&self) -> &'static [u8] {
        match self {
            Rule::Life => &[2, 3],
            Rule::HighLife => &[2, 3],
            Rule::Seeds => &[],
            Rule::Replicator => &[1, 3, 5, 7],
            Rule::B25S4 => &[4],
            Rule::Life34 => &[3, 4],
            Rule::Diamoeba => &[5, 6, 7, 8],
            Rule::TwoByTwo => &[1, 2, 5],
            Rule::DayAndNight => &[3, 4, 6, 7, 8],
            Rule::Morley => &[2, 4, 5],
            Rule::Anneal => &[3, 5, 6, 7, 8],
            Rule::Famine => &[1, 2, 8],
            Rule::Gems => &[4, 5, 6, 8],
            Rule::Fredkin => &[0, 2, 4, 6, 8],
            Rule::DotLife => &[0, 2, 3],
        }
    }

    /// Neighbor counts that make any cell alive next generation,
    /// regardless of its current state.
    pub fn birth(&self) -> &'static [u8] {
        match self {
            Rule::Life => &[3],
            Rule::HighLife => &[3, 6],
            Rule::Seeds => &[2],
            Rule::Replicator => &[1, 3, 5, 7],
            Rule::B25S4 => &[2, 5],
            Rule::Life34 => &[3, 4],
            Rule::Diamoeba => &[3, 5, 6, 7, 8],
            Rule::TwoByTwo => &[3, 6],
            Rule::DayAndNight => &[3, 6, 7, 8],
            Rule::Morley => &[3, 6, 8],
            Rule::Anneal => &[4, 6, 7, 8],
            Rule::Famine => &[3, 6, 8],
            Rule::Gems => &[3, 4, 5, 7],
            Rule::Fredkin => &[1, 3, 5, 7],
            Rule::DotLife => &[3],
        }
    }
}

impl FromStr for Rule {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        Rule::ALL
            .iter()
            .copied()
            .find(|rule| rule.name() == lowered)
            .ok_or_else(|| EngineError::UnknownRule {
                name: s.to_string(),
            })
    }
}

/// Precomputed next-state lookup over (current state, neighbor count).
#[derive(Clone, Debug)]
pub struct RuleTable {
    next: [[u8; 9]; 2],
}

impl RuleTable {
    pub fn new(rule: Rule) -> Self {
        let mut next = [[0u8; 9]; 2];
        for count in 0..=8u8 {
            let born = rule.birth().contains(&count);
            let survives = rule.survival().contains(&count);
            next[0][count as usize] = u8::from(born);
            // A birth count makes the cell alive even when the survival
            // set misses it.
            next[1][count as usize] = u8::from(survives || born);
        }
        Self { next }
    }

    #[inline(always)]
    pub fn lookup(&self, alive: u8, neighbors: u8) -> u8 {
        self.next[alive as usize][neighbors as usize]
    }
}
