//! The royale variant: the standard game, plus a hazard border that closes in from the edges.
//!
//! Every `shrink_every_n_turns` turns one more row or column on a random edge becomes a hazard.
//! The edge is picked from the seed and the turn of the shrink, so the hazards for any turn can be
//! recomputed from scratch at any time and always come out the same.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::{
    board::BoardState,
    error::RulesetError,
    moves::SnakeMove,
    point::Point,
    rng::{PcgRandom, SeededRandom},
    ruleset::Ruleset,
    standard::StandardRuleset,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoyaleRuleset<R = PcgRandom> {
    /// Handles everything but the shrinking. Its `hazard_damage_per_turn` is the royale damage
    pub standard: StandardRuleset,
    pub seed: u64,
    /// The turn being resolved into. The caller moves this forward each turn
    pub turn: i32,
    pub shrink_every_n_turns: i32,
    pub random: R,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Left,
    Right,
    Bottom,
    Top,
}

impl Edge {
    fn from_draw(draw: u32) -> Self {
        match draw {
            0 => Edge::Left,
            1 => Edge::Right,
            2 => Edge::Bottom,
            _ => Edge::Top,
        }
    }
}

/// The part of the board that is still safe. Empty once `min > max` on either axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SafeArea {
    min_x: i32,
    max_x: i32,
    min_y: i32,
    max_y: i32,
}

impl SafeArea {
    fn new(width: i32, height: i32) -> Self {
        Self {
            min_x: 0,
            max_x: width - 1,
            min_y: 0,
            max_y: height - 1,
        }
    }

    fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    fn consume(&mut self, edge: Edge) {
        match edge {
            Edge::Left => self.min_x += 1,
            Edge::Right => self.max_x -= 1,
            Edge::Bottom => self.min_y += 1,
            Edge::Top => self.max_y -= 1,
        }
    }

    fn contains(&self, p: &Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

impl<R: SeededRandom> RoyaleRuleset<R> {
    fn validate(&self) -> Result<(), RulesetError> {
        if self.shrink_every_n_turns < 1 {
            return Err(RulesetError::ShrinkTooFrequent);
        }

        if self.standard.hazard_damage_per_turn <= 0 {
            return Err(RulesetError::NonPositiveHazardDamage);
        }

        Ok(())
    }

    /// Adds every cell that should be hazardous by `turn` to the board.
    ///
    /// Cells already in the hazard list are left alone, so calling this again for the same turn
    /// (or any earlier turn) changes nothing
    pub fn populate_hazards(&self, board: &mut BoardState, turn: i32) -> Result<(), RulesetError> {
        if self.shrink_every_n_turns < 1 {
            return Err(RulesetError::ShrinkTooFrequent);
        }

        if turn < self.shrink_every_n_turns {
            return Ok(());
        }

        let safe = self.safe_area(board.width, board.height, turn);

        let mut existing: FxHashSet<Point> = board.hazards.iter().copied().collect();
        for x in 0..board.width {
            for y in 0..board.height {
                let p = Point::new(x, y);

                if !safe.contains(&p) && existing.insert(p) {
                    board.hazards.push(p);
                }
            }
        }

        Ok(())
    }

    fn safe_area(&self, width: i32, height: i32, turn: i32) -> SafeArea {
        let mut safe = SafeArea::new(width, height);
        let shrinks = turn / self.shrink_every_n_turns;

        for shrink in 1..=shrinks {
            if safe.is_empty() {
                break;
            }

            let shrink_turn = shrink * self.shrink_every_n_turns;
            let edge = Edge::from_draw(self.random.next_in_range(self.seed, shrink_turn as u64, 4));
            safe.consume(edge);

            debug!(shrink_turn, ?edge, "royale border shrank");
        }

        safe
    }
}

impl<R: SeededRandom> Ruleset for RoyaleRuleset<R> {
    fn name(&self) -> &'static str {
        "royale"
    }

    #[tracing::instrument(level = "trace", skip_all, fields(ruleset = "royale", turn = self.turn))]
    fn create_next_board_state(
        &self,
        board: &BoardState,
        moves: &[SnakeMove],
    ) -> Result<BoardState, RulesetError> {
        self.validate()?;

        // Damage uses the incoming hazards, the border only grows after everyone has moved
        let mut next = self.standard.create_next_board_state(board, moves)?;
        self.populate_hazards(&mut next, self.turn)?;

        Ok(next)
    }
}
