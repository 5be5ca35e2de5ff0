use std::{fs::File, io::BufReader, path::PathBuf};

use battlesnake_rules::{BoardState, RulesetConfig, SnakeMove};
use color_eyre::eyre::{Result, WrapErr};

use crate::game::ruleset_report;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct SimulateRequest {
    ruleset: RulesetConfig,
    board: BoardState,
    #[serde(default)]
    moves: Vec<SnakeMove>,
}

#[derive(clap::Args, Debug)]
pub struct Simulate {
    /// JSON file with the ruleset, the board and this turn's moves
    #[clap(short, long, value_parser)]
    request: PathBuf,

    /// Print the board as a grid instead of JSON
    #[clap(long, action, default_value = "false")]
    grid: bool,
}

impl Simulate {
    pub fn run(self) -> Result<()> {
        let file = File::open(&self.request)
            .wrap_err_with(|| format!("Could not open {}", self.request.display()))?;
        let request: SimulateRequest =
            serde_json::from_reader(BufReader::new(file)).wrap_err("Invalid simulate request")?;

        let ruleset = request
            .ruleset
            .build(request.board.turn + 1)
            .map_err(ruleset_report)?;
        let next = ruleset
            .create_next_board_state(&request.board, &request.moves)
            .map_err(ruleset_report)?;

        info!(
            ruleset = ruleset.name(),
            turn = next.turn,
            game_over = ruleset.is_game_over(&next),
            "simulated turn"
        );

        if self.grid {
            print!("{next}");
        } else {
            println!("{}", serde_json::to_string_pretty(&next)?);
        }

        Ok(())
    }
}
