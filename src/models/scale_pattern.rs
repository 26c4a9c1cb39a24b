//! Scale patterns: the W/H/3 step language
//!
//! A pattern is a sequence of steps that together span exactly one octave
//! (12 half steps). Pattern strings use `H` for a half step, `W` for a whole
//! step and `3` for an augmented second.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::str::FromStr;

use crate::errors::{NotationError, Result};

pub const OCTAVE_HALF_STEPS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum Step {
    Half = 1,
    Whole = 2,
    AugmentedSecond = 3,
}

impl Step {
    pub fn from_char(c: char) -> Result<Step> {
        match c {
            'H' => Ok(Step::Half),
            'W' => Ok(Step::Whole),
            '3' => Ok(Step::AugmentedSecond),
            other => Err(NotationError::InvalidPatternStep(other)),
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Step::Half => 'H',
            Step::Whole => 'W',
            Step::AugmentedSecond => '3',
        }
    }

    pub fn half_steps(&self) -> u8 {
        *self as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScalePattern {
    steps: Vec<Step>,
}

impl ScalePattern {
    /// Build a pattern from typed steps, checking that it spans one octave
    pub fn new(steps: Vec<Step>) -> Result<Self> {
        let half_steps: u32 = steps.iter().map(|s| s.half_steps() as u32).sum();
        if half_steps != OCTAVE_HALF_STEPS {
            return Err(NotationError::InvalidScaleSize {
                pattern: steps.iter().map(Step::as_char).collect(),
                half_steps,
            });
        }
        Ok(Self { steps })
    }

    pub fn parse(pattern: &str) -> Result<Self> {
        let steps = pattern
            .chars()
            .map(Step::from_char)
            .collect::<Result<Vec<_>>>()?;
        Self::new(steps)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps, i.e. distinct notes per octave
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Raw half-step counts, as compared against a player's guess
    pub fn half_steps(&self) -> Vec<u8> {
        self.steps.iter().map(Step::half_steps).collect()
    }
}

impl fmt::Display for ScalePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            write!(f, "{}", step.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for ScalePattern {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self> {
        ScalePattern::parse(s)
    }
}

impl TryFrom<String> for ScalePattern {
    type Error = NotationError;

    fn try_from(value: String) -> Result<Self> {
        ScalePattern::parse(&value)
    }
}

impl From<ScalePattern> for String {
    fn from(pattern: ScalePattern) -> String {
        pattern.to_string()
    }
}
