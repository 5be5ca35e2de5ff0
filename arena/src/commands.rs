pub mod fuzz;
pub mod play;
pub mod simulate;

use fuzz::Fuzz;
use play::Play;
use simulate::Simulate;

use clap::Subcommand;
use color_eyre::eyre::Result;

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Resolve a single turn from a request file and print the next board
    Simulate(Simulate),
    /// Play out a whole seeded game between random players
    Play(Play),
    /// Play many random games, checking the rules never break their own invariants
    Fuzz(Fuzz),
}

impl Command {
    pub fn run(self) -> Result<()> {
        match self {
            Command::Simulate(s) => s.run()?,
            Command::Play(p) => p.run()?,
            Command::Fuzz(f) => f.run()?,
        }

        Ok(())
    }
}
