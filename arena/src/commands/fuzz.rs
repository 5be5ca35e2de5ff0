use battlesnake_rules::{BoardState, RulesetConfig};
use color_eyre::eyre::{eyre, Result};
use itertools::Itertools;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;

use crate::game::{play_game, random_game};

#[derive(clap::Args, Debug)]
pub struct Fuzz {
    /// Number of games to play. Runs until an error when not specified
    #[clap(short, long, value_parser)]
    games: Option<usize>,

    /// Ruleset to fuzz
    #[clap(long, value_parser, default_value = "royale")]
    ruleset: String,

    /// Seed for choosing the games. Picked at random if not specified
    #[clap(short, long, value_parser)]
    seed: Option<u64>,
}

impl Fuzz {
    pub fn run(self) -> Result<()> {
        let seed = self.seed.unwrap_or_else(|| rand::thread_rng().gen());
        info!(seed, "fuzzing");

        let mut seeds = StdRng::seed_from_u64(seed);
        let mut rounds = 0;

        loop {
            if self.games.map_or(false, |g| rounds >= g) {
                break;
            }

            let game_seed: u64 = seeds.gen();
            let turns = fuzz_one(&self.ruleset, game_seed)?;

            rounds += 1;
            if rounds % 1_000 == 0 {
                info!(rounds, last_game_turns = turns, "still fuzzing");
            }
        }

        info!(rounds, "all games held up");
        Ok(())
    }
}

/// Plays the same seeded game twice and checks both runs agree and every board is sound
fn fuzz_one(ruleset: &str, game_seed: u64) -> Result<i32> {
    let mut rng = StdRng::seed_from_u64(game_seed);
    let size = rng.gen_range(3..=19);
    let snakes = rng.gen_range(1..=8);
    let board = random_game(&mut rng, size, size, snakes);

    let mut config = RulesetConfig::new(ruleset, game_seed);
    config.settings.royale.shrink_every_n_turns = rng.gen_range(1..=30);

    let first = play_game(&config, board.clone(), &mut StdRng::seed_from_u64(game_seed), 2_000)?;
    let second = play_game(&config, board, &mut StdRng::seed_from_u64(game_seed), 2_000)?;

    if first != second {
        return Err(eyre!("Game {game_seed} did not replay identically"));
    }

    for (before, after) in first.iter().tuple_windows() {
        check_board(after).map_err(|e| eyre!("Game {game_seed}, turn {}: {e}", after.turn))?;

        if let Some(h) = before.hazards.iter().find(|h| !after.hazards.contains(h)) {
            return Err(eyre!(
                "Game {game_seed}, turn {}: hazard {h:?} disappeared",
                after.turn
            ));
        }
    }

    Ok(first.last().map_or(0, |b| b.turn))
}

fn check_board(board: &BoardState) -> Result<(), String> {
    for snake in &board.snakes {
        if snake.body.is_empty() {
            return Err(format!("snake {} has no body", snake.id));
        }

        if snake.health < 0 || snake.health > 100 {
            return Err(format!("snake {} has health {}", snake.id, snake.health));
        }

        let disconnected = snake
            .body
            .iter()
            .tuple_windows()
            .any(|(a, b)| a != b && !a.is_adjacent(b));
        if disconnected {
            return Err(format!("snake {} has a broken body", snake.id));
        }
    }

    let shared_head = board
        .living_snakes()
        .map(|s| s.head())
        .duplicates()
        .next();
    if let Some(head) = shared_head {
        return Err(format!("two living snakes share the head {head:?}"));
    }

    if board.food.iter().duplicates().next().is_some() {
        return Err("duplicate food".to_owned());
    }

    if board.hazards.iter().duplicates().next().is_some() {
        return Err("duplicate hazards".to_owned());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a_few_games() {
        for seed in 0..20 {
            fuzz_one("royale", seed).unwrap();
            fuzz_one("standard", seed).unwrap();
        }
    }
}
