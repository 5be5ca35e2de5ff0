use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// A cell on the board. `(0, 0)` is the bottom left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point one cell away in the given direction. This does not check the board bounds
    pub fn step(&self, m: Move) -> Self {
        let (dx, dy) = m.as_offset();

        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn neighbors(&self) -> [Point; 4] {
        Move::all().map(|m| self.step(m))
    }

    pub fn is_adjacent(&self, other: &Point) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }

    pub fn in_bounds(&self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.x < width && self.y >= 0 && self.y < height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    pub const fn all() -> [Move; 4] {
        [Move::Up, Move::Down, Move::Left, Move::Right]
    }

    fn as_offset(&self) -> (i32, i32) {
        match self {
            Move::Up => (0, 1),
            Move::Down => (0, -1),
            Move::Left => (-1, 0),
            Move::Right => (1, 0),
        }
    }

    /// The direction of a single step from `from` to `to`, if they are neighbors
    pub fn between(from: &Point, to: &Point) -> Option<Move> {
        Move::all().into_iter().find(|m| &from.step(*m) == to)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        };

        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid move: {0}")]
pub struct ParseMoveError(String);

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Move::Up),
            "down" => Ok(Move::Down),
            "left" => Ok(Move::Left),
            "right" => Ok(Move::Right),
            _ => Err(ParseMoveError(s.to_owned())),
        }
    }
}

impl Serialize for Move {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Move {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
