use crate::{board::BoardState, error::RulesetError, moves::SnakeMove};

pub type BoxedRuleset = Box<dyn Ruleset + Send + Sync>;

/// The surface a game server drives every turn.
///
/// Implementations are immutable configuration. `create_next_board_state` must only depend on its
/// arguments and that configuration, and must never modify the board it is given
pub trait Ruleset {
    fn name(&self) -> &'static str;

    fn create_next_board_state(
        &self,
        board: &BoardState,
        moves: &[SnakeMove],
    ) -> Result<BoardState, RulesetError>;

    /// The game is over once at most one snake is still playing
    fn is_game_over(&self, board: &BoardState) -> bool {
        board.living_snakes().count() <= 1
    }
}
