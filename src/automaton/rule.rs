//! Life-like birth/survival rules.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Birth and survival neighbor counts, stored as bitmasks over 0..=8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rule {
    birth: u16,
    survive: u16,
}

impl Rule {
    /// Conway's Game of Life, B3/S23.
    pub const CONWAY: Rule = Rule {
        birth: 1 << 3,
        survive: (1 << 2) | (1 << 3),
    };

    /// Build a rule from the neighbor counts that cause birth and survival.
    /// Counts above 8 are ignored.
    pub fn new(birth: &[u8], survive: &[u8]) -> Self {
        let mask = |counts: &[u8]| {
            counts
                .iter()
                .filter(|&&c| c <= 8)
                .fold(0u16, |acc, &c| acc | (1 << c))
        };
        Rule {
            birth: mask(birth),
            survive: mask(survive),
        }
    }

    /// Parse `B…/S…` notation, e.g. `B3/S23` or `b36/s23`.
    pub fn parse(notation: &str) -> Result<Self, SimError> {
        let invalid = || SimError::InvalidRule(notation.to_string());
        let upper = notation.trim().to_ascii_uppercase();
        let (b, s) = upper.split_once('/').ok_or_else(invalid)?;
        let b = b.strip_prefix('B').ok_or_else(invalid)?;
        let s = s.strip_prefix('S').ok_or_else(invalid)?;

        let digits = |part: &str| -> Result<u16, SimError> {
            part.chars().try_fold(0u16, |acc, ch| match ch.to_digit(10) {
                Some(d) if d <= 8 => Ok(acc | (1 << d)),
                _ => Err(invalid()),
            })
        };

        Ok(Rule {
            birth: digits(b)?,
            survive: digits(s)?,
        })
    }

    #[inline]
    pub fn is_birth(&self, neighbors: u8) -> bool {
        neighbors <= 8 && self.birth & (1 << neighbors) != 0
    }

    #[inline]
    pub fn is_survival(&self, neighbors: u8) -> bool {
        neighbors <= 8 && self.survive & (1 << neighbors) != 0
    }

    /// Next state of a cell given its current state and live neighbor count.
    #[inline]
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        if alive {
            self.is_survival(neighbors)
        } else {
            self.is_birth(neighbors)
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Rule::CONWAY
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for c in 0..=8u8 {
            if self.is_birth(c) {
                write!(f, "{c}")?;
            }
        }
        write!(f, "/S")?;
        for c in 0..=8u8 {
            if self.is_survival(c) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for Rule {
    type Error = SimError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rule::parse(&value)
    }
}

impl From<Rule> for String {
    fn from(rule: Rule) -> Self {
        rule.to_string()
    }
}
