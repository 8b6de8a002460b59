use crate::errors::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four approaches into the intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// Fixed scan order. Earlier entries win ties during selection.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

impl Direction {
    /// Position of this direction in `DIRECTIONS`.
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        }
    }

    /// Single-letter label used by the signal visualization.
    pub fn initial(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = InputError;

    // Exact match only: "north" or " North" are not directions.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DIRECTIONS
            .iter()
            .copied()
            .find(|d| d.name() == s)
            .ok_or_else(|| InputError::InvalidDirection(s.to_string()))
    }
}
