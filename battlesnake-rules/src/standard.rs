use tracing::{debug, trace};

use crate::{
    board::{BoardState, Elimination, EliminationCause, Snake},
    error::RulesetError,
    moves::SnakeMove,
    point::Point,
    rng::{PcgRandom, SeededStream},
    ruleset::Ruleset,
};

pub const DEFAULT_MAX_HEALTH: i32 = 100;

/// The base game: move, lose health, eat, and eliminate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardRuleset {
    /// Percent chance (0-100) of a new food appearing on a turn that already has `minimum_food`
    pub food_spawn_chance: u32,
    pub minimum_food: u32,
    /// Extra health lost by a snake whose head ends the move on a hazard
    pub hazard_damage_per_turn: i32,
    pub max_health: i32,
    /// Only used to place new food
    pub seed: u64,
}

impl Default for StandardRuleset {
    fn default() -> Self {
        Self {
            food_spawn_chance: 0,
            minimum_food: 0,
            hazard_damage_per_turn: 0,
            max_health: DEFAULT_MAX_HEALTH,
            seed: 0,
        }
    }
}

impl Ruleset for StandardRuleset {
    fn name(&self) -> &'static str {
        "standard"
    }

    #[tracing::instrument(level = "trace", skip_all, fields(ruleset = "standard", turn = board.turn))]
    fn create_next_board_state(
        &self,
        board: &BoardState,
        moves: &[SnakeMove],
    ) -> Result<BoardState, RulesetError> {
        if let Some(s) = board.living_snakes().find(|s| s.is_empty()) {
            return Err(RulesetError::ZeroLengthSnake(s.id.clone()));
        }

        let mut next = board.clone();

        self.move_snakes(&mut next, moves);
        self.reduce_health(&mut next, &board.hazards);
        self.feed_snakes(&mut next);
        self.eliminate_snakes(&mut next);

        next.turn = board.turn + 1;
        self.maybe_spawn_food(&mut next);

        Ok(next)
    }
}

impl StandardRuleset {
    fn move_snakes(&self, board: &mut BoardState, moves: &[SnakeMove]) {
        for snake in board.snakes.iter_mut().filter(|s| !s.is_eliminated()) {
            let chosen = moves
                .iter()
                .find(|m| m.id == snake.id)
                .and_then(|m| m.r#move);
            let m = chosen.unwrap_or_else(|| snake.heading());

            trace!(snake = %snake.id, direction = %m, defaulted = chosen.is_none(), "moving snake");

            let new_head = snake.head().step(m);
            snake.body.push_front(new_head);
            snake.body.pop_back();
        }
    }

    fn reduce_health(&self, board: &mut BoardState, hazards: &[Point]) {
        for snake in board.snakes.iter_mut().filter(|s| !s.is_eliminated()) {
            snake.health -= 1;

            if self.hazard_damage_per_turn > 0 && hazards.contains(&snake.head()) {
                snake.health -= self.hazard_damage_per_turn;
            }

            snake.health = snake.health.max(0);
        }
    }

    fn feed_snakes(&self, board: &mut BoardState) {
        let mut eaten = vec![];

        for snake in board.snakes.iter_mut().filter(|s| !s.is_eliminated()) {
            let head = snake.head();

            if board.food.contains(&head) {
                snake.health = self.max_health;
                if let Some(tail) = snake.body.back().copied() {
                    snake.body.push_back(tail);
                }

                if !eaten.contains(&head) {
                    eaten.push(head);
                }
            }
        }

        board.food.retain(|f| !eaten.contains(f));
    }

    fn eliminate_snakes(&self, board: &mut BoardState) {
        let (width, height) = (board.width, board.height);

        for snake in board.snakes.iter_mut().filter(|s| !s.is_eliminated()) {
            let cause = if snake.health <= 0 {
                Some(EliminationCause::OutOfHealth)
            } else if !snake.head().in_bounds(width, height) {
                Some(EliminationCause::WallCollision)
            } else {
                None
            };

            if let Some(cause) = cause {
                debug!(snake = %snake.id, %cause, "snake eliminated");
                snake.elimination = Some(Elimination { cause, by: None });
            }
        }

        // Collisions are only checked between snakes still standing, and are all decided before
        // any of them is applied
        let collisions: Vec<(usize, Elimination)> = board
            .snakes
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_eliminated())
            .filter_map(|(i, s)| collision_for(s, &board.snakes).map(|e| (i, e)))
            .collect();

        for (i, elimination) in collisions {
            let snake = &mut board.snakes[i];
            debug!(
                snake = %snake.id,
                cause = %elimination.cause,
                by = ?elimination.by,
                "snake eliminated"
            );
            snake.elimination = Some(elimination);
        }
    }

    fn maybe_spawn_food(&self, board: &mut BoardState) {
        let random = PcgRandom;
        let mut stream = SeededStream::new(&random, self.seed, board.turn as u64);

        let current = board.food.len() as u32;
        let to_spawn = if current < self.minimum_food {
            self.minimum_food - current
        } else if self.food_spawn_chance > 0 && stream.next_in_range(100) < self.food_spawn_chance
        {
            1
        } else {
            0
        };

        for _ in 0..to_spawn {
            let free = board.unoccupied_points();
            if free.is_empty() {
                break;
            }

            let chosen = free[stream.next_in_range(free.len() as u32) as usize];
            trace!(food = ?chosen, "spawning food");
            board.food.push(chosen);
        }
    }
}

fn collision_for(snake: &Snake, snakes: &[Snake]) -> Option<Elimination> {
    let head = snake.head();
    let others = || {
        snakes
            .iter()
            .filter(|o| !o.is_eliminated() && o.id != snake.id)
    };

    if snake.body.iter().skip(1).any(|p| p == &head) {
        return Some(Elimination {
            cause: EliminationCause::SelfCollision,
            by: None,
        });
    }

    if let Some(other) = others().find(|o| o.body.iter().skip(1).any(|p| p == &head)) {
        return Some(Elimination {
            cause: EliminationCause::BodyCollision,
            by: Some(other.id.clone()),
        });
    }

    if let Some(other) = others().find(|o| o.head() == head && o.len() >= snake.len()) {
        return Some(Elimination {
            cause: EliminationCause::HeadToHeadCollision,
            by: Some(other.id.clone()),
        });
    }

    None
}
