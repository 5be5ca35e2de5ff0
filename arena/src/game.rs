use battlesnake_rules::{BoardState, Move, Point, RulesetConfig, RulesetError, Snake, SnakeMove};
use color_eyre::eyre::{eyre, Report, Result};
use itertools::Itertools;
use rand::{
    prelude::{IteratorRandom, SliceRandom},
    rngs::StdRng,
    Rng,
};
use tracing::debug;

fn random_square_for_head(rng: &mut StdRng, b: &BoardState) -> Option<Point> {
    (0..b.width)
        .cartesian_product(0..b.height)
        .map(|(x, y)| Point::new(x, y))
        .filter(|p| !b.is_occupied(p))
        .choose(rng)
}

fn random_snake(rng: &mut StdRng, id: &str, b: &BoardState) -> Option<Snake> {
    let length: usize = rng.gen_range(1..=5);
    let head = random_square_for_head(rng, b)?;

    let mut body = vec![head];

    while body.len() < length {
        let Some(tail) = body.last().copied() else {
            break;
        };

        if let Some(next_body) = tail
            .neighbors()
            .into_iter()
            .filter(|p| p.in_bounds(b.width, b.height))
            .filter(|p| !body.contains(p) && !b.is_occupied(p))
            .choose(rng)
        {
            body.push(next_body);
        } else {
            break;
        }
    }

    Some(Snake::new(id, body, 100))
}

/// A board with snakes and food scattered at random. There may be fewer snakes than asked for
/// when the board is too crowded
pub fn random_game(rng: &mut StdRng, width: i32, height: i32, snakes: usize) -> BoardState {
    let mut board = BoardState::new(width, height);

    for i in 0..snakes {
        if let Some(s) = random_snake(rng, &format!("snake-{}", i), &board) {
            board.snakes.push(s);
        } else {
            break;
        }
    }

    let food_count = rng.gen_range(0..=snakes);
    let free = board.unoccupied_points();
    board.food = free.into_iter().choose_multiple(rng, food_count);

    board
}

/// A random move for each living snake that avoids walls and bodies when it can
pub fn random_reasonable_moves(rng: &mut StdRng, board: &BoardState) -> Vec<SnakeMove> {
    board
        .living_snakes()
        .map(|snake| {
            let head = snake.head();
            let reasonable = Move::all()
                .into_iter()
                .filter(|m| {
                    let target = head.step(*m);

                    target.in_bounds(board.width, board.height)
                        && !board.living_snakes().any(|other| {
                            let without_tail = other.len().saturating_sub(1);
                            other.body.iter().take(without_tail).contains(&target)
                        })
                })
                .collect_vec();

            let m = reasonable
                .choose(rng)
                .copied()
                .unwrap_or_else(|| Move::all()[rng.gen_range(0..4)]);

            SnakeMove::new(&snake.id, m)
        })
        .collect()
}

/// Configuration errors point at the ruleset settings, anything else at the board being played
pub fn ruleset_report(err: RulesetError) -> Report {
    if err.is_configuration() {
        eyre!("Ruleset is misconfigured, check its name and settings: {err}")
    } else {
        eyre!("Board could not be advanced: {err}")
    }
}

/// Plays `board` until the game ends or `max_turns` is reached, returning every board along the
/// way, starting with the one passed in
pub fn play_game(
    config: &RulesetConfig,
    board: BoardState,
    rng: &mut StdRng,
    max_turns: i32,
) -> Result<Vec<BoardState>> {
    let mut history = vec![board];

    loop {
        let Some(current) = history.last() else {
            break;
        };

        let ruleset = config.build(current.turn + 1).map_err(ruleset_report)?;
        if ruleset.is_game_over(current) || current.turn >= max_turns {
            break;
        }

        let moves = random_reasonable_moves(rng, current);
        let next = ruleset
            .create_next_board_state(current, &moves)
            .map_err(ruleset_report)?;

        debug!(
            turn = next.turn,
            living = next.living_snakes().count(),
            hazards = next.hazards.len(),
            "resolved turn"
        );

        history.push(next);
    }

    Ok(history)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_random_game_is_valid() {
        let mut rng = StdRng::seed_from_u64(3);
        let board = random_game(&mut rng, 11, 11, 4);

        assert_eq!(board.snakes.len(), 4);
        for snake in &board.snakes {
            assert!(!snake.body.is_empty());
            assert!(snake.body.iter().all(|p| p.in_bounds(11, 11)));
        }
        assert!(board.food.iter().all(|f| !board.is_occupied(f)));
    }

    #[test]
    fn test_play_game_ends() {
        let mut rng = StdRng::seed_from_u64(8);
        let board = random_game(&mut rng, 7, 7, 2);
        let config = RulesetConfig::new("royale", 8);

        let history = play_game(&config, board, &mut rng, 1000).unwrap();

        let last = history.last().unwrap();
        assert!(last.living_snakes().count() <= 1 || last.turn == 1000);
    }

    #[test]
    fn test_misconfigured_ruleset_is_reported_as_such() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut board = BoardState::new(7, 7);
        board.snakes.push(Snake::new("one", [Point::new(1, 1), Point::new(1, 0)], 100));
        board.snakes.push(Snake::new("two", [Point::new(5, 5), Point::new(5, 4)], 100));
        let mut config = RulesetConfig::new("royale", 8);
        config.settings.royale.shrink_every_n_turns = 0;

        let err = play_game(&config, board, &mut rng, 10).unwrap_err();
        assert!(err.to_string().starts_with("Ruleset is misconfigured"));

        let unknown = play_game(
            &RulesetConfig::new("wrapped", 8),
            BoardState::new(7, 7),
            &mut rng,
            10,
        )
        .unwrap_err();
        assert!(unknown.to_string().contains("unknown ruleset: wrapped"));
    }

    #[test]
    fn test_bad_board_is_reported_as_such() {
        let report = ruleset_report(RulesetError::ZeroLengthSnake("one".to_owned()));

        assert_eq!(
            report.to_string(),
            "Board could not be advanced: snake one is length zero"
        );
    }
}
