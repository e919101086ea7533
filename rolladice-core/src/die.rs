//! Die faces and the side-count keyed die table.
//!
//! Only the six-sided die is populated. The table stays keyed by side-count
//! so another die can be added by adding a row.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side-count of the die that ships with the app.
pub const DEFAULT_SIDES: u8 = 6;

/// One face of a six-sided die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DieFace {
    #[default]
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
}

/// Pip layout of a face on a 3x3 grid, row by row.
pub type PipGrid = [[bool; 3]; 3];

const X: bool = true;
const O: bool = false;

impl DieFace {
    pub fn value(&self) -> u8 {
        match self {
            DieFace::One => 1,
            DieFace::Two => 2,
            DieFace::Three => 3,
            DieFace::Four => 4,
            DieFace::Five => 5,
            DieFace::Six => 6,
        }
    }

    pub fn from_value(value: u8) -> Option<DieFace> {
        match value {
            1 => Some(DieFace::One),
            2 => Some(DieFace::Two),
            3 => Some(DieFace::Three),
            4 => Some(DieFace::Four),
            5 => Some(DieFace::Five),
            6 => Some(DieFace::Six),
            _ => None,
        }
    }

    /// The face "image": which of the nine pip slots are filled.
    pub fn pips(&self) -> PipGrid {
        match self {
            DieFace::One => [[O, O, O], [O, X, O], [O, O, O]],
            DieFace::Two => [[X, O, O], [O, O, O], [O, O, X]],
            DieFace::Three => [[X, O, O], [O, X, O], [O, O, X]],
            DieFace::Four => [[X, O, X], [O, O, O], [X, O, X]],
            DieFace::Five => [[X, O, X], [O, X, O], [X, O, X]],
            DieFace::Six => [[X, O, X], [X, O, X], [X, O, X]],
        }
    }
}

impl fmt::Display for DieFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A populated row of the die table.
#[derive(Debug, Clone, Copy)]
pub struct DieConfig {
    pub sides: u8,
    pub faces: &'static [DieFace],
}

const D6_FACES: [DieFace; 6] = [
    DieFace::One,
    DieFace::Two,
    DieFace::Three,
    DieFace::Four,
    DieFace::Five,
    DieFace::Six,
];

/// Die table keyed by side-count.
pub const DIE_TABLE: &[DieConfig] = &[DieConfig {
    sides: 6,
    faces: &D6_FACES,
}];

impl DieConfig {
    /// Look up the row for a side-count.
    pub fn for_sides(sides: u8) -> Option<&'static DieConfig> {
        DIE_TABLE.iter().find(|config| config.sides == sides)
    }

    /// The default six-sided die.
    pub fn standard() -> &'static DieConfig {
        &DIE_TABLE[0]
    }

    /// Face shown for a rolled value, 1-indexed.
    pub fn face(&self, value: u8) -> Option<DieFace> {
        let index = usize::from(value).checked_sub(1)?;
        self.faces.get(index).copied()
    }

    /// Uniform draw in `1..=sides`.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        rng.gen_range(1..=self.sides)
    }
}
