use battlesnake_rules::RulesetConfig;
use color_eyre::eyre::{eyre, Result};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use crate::game::{play_game, random_game};

#[derive(clap::Args, Debug)]
pub struct Play {
    /// Ruleset to play with
    #[clap(long, value_parser, default_value = "royale")]
    ruleset: String,

    /// Seed for the ruleset and the random players
    #[clap(short, long, value_parser, default_value_t = 0)]
    seed: u64,

    #[clap(long, value_parser, default_value_t = 11)]
    width: i32,

    #[clap(long, value_parser, default_value_t = 11)]
    height: i32,

    /// Number of snakes to start with
    #[clap(long, value_parser, default_value_t = 4)]
    snakes: usize,

    /// Give up after this many turns
    #[clap(long, value_parser, default_value_t = 1000)]
    max_turns: i32,

    /// Turns between royale shrinks. Uses the standard setting if not specified
    #[clap(long, value_parser)]
    shrink_every_n_turns: Option<i32>,

    /// Print every board, not just the last one
    #[clap(long, action, default_value = "false")]
    print_boards: bool,
}

impl Play {
    pub fn run(self) -> Result<()> {
        let mut config = RulesetConfig::new(&self.ruleset, self.seed);
        if let Some(n) = self.shrink_every_n_turns {
            config.settings.royale.shrink_every_n_turns = n;
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let board = random_game(&mut rng, self.width, self.height, self.snakes);

        let history = play_game(&config, board, &mut rng, self.max_turns)?;

        if self.print_boards {
            for board in &history {
                println!("{board}");
            }
        }

        let last = history.last().ok_or(eyre!("No boards were played"))?;
        if !self.print_boards {
            println!("{last}");
        }

        for snake in &last.snakes {
            match &snake.elimination {
                Some(e) => println!(
                    "{}: {} ({}) length {}",
                    snake.id,
                    e.cause,
                    e.by.as_deref().unwrap_or("-"),
                    snake.len()
                ),
                None => println!("{}: survived, length {}", snake.id, snake.len()),
            }
        }

        let winner = last.living_snakes().next().map(|s| s.id.clone());
        info!(turns = last.turn, winner = ?winner, "game finished");

        Ok(())
    }
}
