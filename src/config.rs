//! Run parameters for both simulation families.
//!
//! Parameters are plain data: they derive serde so a host can keep them in a
//! JSON file, and they are immutable for the lifetime of a run.

use serde::{Deserialize, Serialize};

use crate::automaton::Rule;
use crate::error::{check_dimension, Result, SimError};

/// Value of a live automaton cell.
pub const ON: u8 = 255;

/// Value of a dead automaton cell.
pub const OFF: u8 = 0;

/// Chance that a randomly initialized automaton cell starts ON.
pub const DEFAULT_ON_PROBABILITY: f64 = 0.2;

/// Default nonlinearity amplitude of the phase-field model.
pub const DEFAULT_AA: f64 = 1.3;

fn default_on_probability() -> f64 {
    DEFAULT_ON_PROBABILITY
}

fn default_aa() -> f64 {
    DEFAULT_AA
}

/// Initial condition for a phase-field run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldProfile {
    /// Small noise centered on zero, within [-0.1, 0.1).
    #[default]
    Symmetric,
    /// Noise shifted off-critical, within [-0.4, -0.2).
    Offset,
    /// Near-zero noise with a single unit seed in the middle cell.
    CenterSeed,
}

impl FieldProfile {
    /// Map a C-side profile id (0, 1, 2) onto a profile.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(FieldProfile::Symmetric),
            1 => Some(FieldProfile::Offset),
            2 => Some(FieldProfile::CenterSeed),
            _ => None,
        }
    }
}

/// Which phase-field update a run applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dynamics {
    #[default]
    NonConserved,
    Conserved,
}

/// Coefficients consumed by the phase-field steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseParameters {
    /// Nonlinearity amplitude (`AA`).
    pub aa: f64,
    /// Coupling coefficient (`d`).
    pub d: f64,
}

impl PhaseParameters {
    pub fn new(aa: f64, d: f64) -> Self {
        Self { aa, d }
    }
}

/// Parameters of a phase-field run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    pub n: usize,
    pub nstep: usize,
    pub d: f64,
    #[serde(default = "default_aa")]
    pub aa: f64,
    #[serde(default)]
    pub dynamics: Dynamics,
    #[serde(default)]
    pub profile: FieldProfile,
    #[serde(default)]
    pub seed: Option<u64>,
    /// Worker threads for the step pool; `None` lets the runner pick one.
    #[serde(default)]
    pub threads: Option<usize>,
}

impl SimulationParameters {
    pub fn new(n: usize, nstep: usize, d: f64) -> Self {
        Self {
            n,
            nstep,
            d,
            aa: DEFAULT_AA,
            dynamics: Dynamics::default(),
            profile: FieldProfile::default(),
            seed: None,
            threads: None,
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(text)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        check_dimension(self.n)?;
        if !self.d.is_finite() || !self.aa.is_finite() {
            return Err(SimError::InvalidParameter(format!(
                "coefficients must be finite (aa = {}, d = {})",
                self.aa, self.d
            )));
        }
        Ok(())
    }

    pub fn phase(&self) -> PhaseParameters {
        PhaseParameters::new(self.aa, self.d)
    }
}

/// Parameters of an automaton run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeParameters {
    pub n: usize,
    pub nstep: usize,
    #[serde(default = "default_on_probability")]
    pub on_probability: f64,
    #[serde(default)]
    pub rule: Rule,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub threads: Option<usize>,
}

impl LifeParameters {
    pub fn new(n: usize, nstep: usize) -> Self {
        Self {
            n,
            nstep,
            on_probability: DEFAULT_ON_PROBABILITY,
            rule: Rule::default(),
            seed: None,
            threads: None,
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(text)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        check_dimension(self.n)?;
        check_probability(self.on_probability)
    }
}

pub(crate) fn check_probability(p: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(SimError::InvalidParameter(format!(
            "ON probability must be within [0, 1], got {p}"
        )));
    }
    Ok(())
}
