pub mod assets;
pub mod catalog;
pub mod chart;
pub mod engine;
pub mod questions;
pub mod session;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use session::Screen;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    /// Unknown question id, unknown choice or a malformed question bank.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The type table has no record for the code. Only reachable through a broken table.
    #[error("unknown type code '{0}'")]
    UnknownType(String),
    #[error("cannot {action} while on the {from} screen")]
    InvalidTransition { from: Screen, action: &'static str },
}

/// One of the four bipolar traits a question measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum Axis {
    I,
    II,
    III,
    IV,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::I, Axis::II, Axis::III, Axis::IV];

    pub fn index(self) -> usize {
        match self {
            Axis::I => 0,
            Axis::II => 1,
            Axis::III => 2,
            Axis::IV => 3,
        }
    }

    /// Letter pair for the axis, `(tally >= 0, tally < 0)`.
    pub fn letters(self) -> (char, char) {
        match self {
            Axis::I => ('M', 'C'),
            Axis::II => ('F', 'E'),
            Axis::III => ('S', 'W'),
            Axis::IV => ('P', 'L'),
        }
    }

    /// Ties resolve to the first letter of the pair.
    pub fn letter(self, tally: i32) -> char {
        let (positive, negative) = self.letters();
        if tally >= 0 {
            positive
        } else {
            negative
        }
    }

    pub fn chart_label(self) -> &'static str {
        match self {
            Axis::I => "物量(Mini)",
            Axis::II => "機能(Func)",
            Axis::III => "モダン(Sharp)",
            Axis::IV => "幾帳面(Perf)",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::I => "I",
            Axis::II => "II",
            Axis::III => "III",
            Axis::IV => "IV",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Choice {
    A,
    B,
}

impl Choice {
    pub fn delta(self) -> i32 {
        match self {
            Choice::A => 1,
            Choice::B => -1,
        }
    }
}

impl FromStr for Choice {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Choice::A),
            "B" | "b" => Ok(Choice::B),
            other => Err(QuizError::InvalidInput(format!(
                "choice must be A or B, got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub a: &'static str,
    pub b: &'static str,
}

impl Options {
    /// Maps a pressed button label back to the choice it stands for.
    pub fn choice_for(&self, label: &str) -> Option<Choice> {
        if label == self.a {
            Some(Choice::A)
        } else if label == self.b {
            Some(Choice::B)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    pub axis: Axis,
    pub options: Options,
}

/// Answers given so far, keyed by question id.
///
/// Only the engine inserts into it, so every key is a known question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnswerSet {
    answers: BTreeMap<u32, Choice>,
}

impl AnswerSet {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn get(&self, question_id: u32) -> Option<Choice> {
        self.answers.get(&question_id).copied()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, Choice)> + '_ {
        self.answers.iter().map(|(id, choice)| (*id, *choice))
    }

    pub(crate) fn set(&mut self, question_id: u32, choice: Choice) {
        self.answers.insert(question_id, choice);
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }
}

/// Per-axis tallies. Each answered question moves its axis by exactly one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisScores {
    tallies: [i32; 4],
}

impl AxisScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, axis: Axis) -> i32 {
        self.tallies[axis.index()]
    }

    pub fn add(&mut self, axis: Axis, delta: i32) {
        self.tallies[axis.index()] += delta;
    }
}

impl From<[i32; 4]> for AxisScores {
    fn from(tallies: [i32; 4]) -> Self {
        Self { tallies }
    }
}
