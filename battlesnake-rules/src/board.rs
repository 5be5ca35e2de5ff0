use std::{collections::VecDeque, fmt::Display};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::point::{Move, Point};

/// Why a snake was removed from play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EliminationCause {
    #[serde(rename = "out-of-health")]
    OutOfHealth,
    #[serde(rename = "wall-collision")]
    WallCollision,
    #[serde(rename = "snake-self-collision")]
    SelfCollision,
    #[serde(rename = "snake-collision")]
    BodyCollision,
    #[serde(rename = "head-collision")]
    HeadToHeadCollision,
}

impl Display for EliminationCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EliminationCause::OutOfHealth => "out-of-health",
            EliminationCause::WallCollision => "wall-collision",
            EliminationCause::SelfCollision => "snake-self-collision",
            EliminationCause::BodyCollision => "snake-collision",
            EliminationCause::HeadToHeadCollision => "head-collision",
        };

        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Elimination {
    pub cause: EliminationCause,
    /// The snake that caused the elimination, for collisions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snake {
    pub id: String,
    /// Head first
    pub body: VecDeque<Point>,
    pub health: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elimination: Option<Elimination>,
}

impl Snake {
    pub fn new(id: &str, body: impl IntoIterator<Item = Point>, health: i32) -> Self {
        Self {
            id: id.to_owned(),
            body: body.into_iter().collect(),
            health,
            elimination: None,
        }
    }

    /// Panics on an empty body. Boards returned by a ruleset never contain one
    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn is_eliminated(&self) -> bool {
        self.elimination.is_some()
    }

    /// The direction the snake last moved in.
    ///
    /// Snakes without a distinct neck (a single segment, or stacked at the start of the game) are
    /// treated as heading `Up`
    pub fn heading(&self) -> Move {
        match (self.body.get(0), self.body.get(1)) {
            (Some(head), Some(neck)) => Move::between(neck, head).unwrap_or(Move::Up),
            _ => Move::Up,
        }
    }
}

/// One snapshot of the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    #[serde(default)]
    pub turn: i32,
    pub width: i32,
    pub height: i32,
    /// Order matters, it is the tie-break order when several snakes conflict
    #[serde(default)]
    pub snakes: Vec<Snake>,
    #[serde(default)]
    pub food: Vec<Point>,
    #[serde(default)]
    pub hazards: Vec<Point>,
}

impl BoardState {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            turn: 0,
            width,
            height,
            snakes: vec![],
            food: vec![],
            hazards: vec![],
        }
    }

    pub fn living_snakes(&self) -> impl Iterator<Item = &Snake> {
        self.snakes.iter().filter(|s| !s.is_eliminated())
    }

    pub fn snake(&self, id: &str) -> Option<&Snake> {
        self.snakes.iter().find(|s| s.id == id)
    }

    /// Is any living snake's body on this point
    pub fn is_occupied(&self, p: &Point) -> bool {
        self.living_snakes().any(|s| s.body.contains(p))
    }

    pub fn is_hazard(&self, p: &Point) -> bool {
        self.hazards.contains(p)
    }

    /// All cells without a living snake or food, in x-major order
    pub fn unoccupied_points(&self) -> Vec<Point> {
        (0..self.width)
            .cartesian_product(0..self.height)
            .map(|(x, y)| Point::new(x, y))
            .filter(|p| !self.is_occupied(p) && !self.food.contains(p))
            .collect()
    }
}

impl Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Turn {} ({}x{})", self.turn, self.width, self.height)?;

        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let p = Point::new(x, y);

                let snake = self
                    .snakes
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| !s.is_eliminated())
                    .find(|(_, s)| s.body.contains(&p));

                let c = match snake {
                    Some((_, s)) if s.head() == p => 'H',
                    Some((i, _)) => std::char::from_digit((i % 10) as u32, 10).unwrap_or('S'),
                    None if self.food.contains(&p) => '*',
                    None if self.is_hazard(&p) => '~',
                    None => '.',
                };

                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
