//! Game-termination detection: checkmate, stalemate, check, or an
//! ordinary in-progress position.

use crate::board::Board;
use crate::legality::{in_check, legal_moves};

/// The current status of the game from the perspective of the side
/// to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Check,
    Checkmate,
    Stalemate,
}

/// Determines `board`'s status for the side to move.
///
/// There is no draw detection (repetition, 50-move, insufficient
/// material) in this engine's scope -- absent those, `status` never
/// returns anything but the four variants above.
pub fn status(board: &mut Board) -> GameStatus {
    let color = board.side_to_move();
    let has_moves = !legal_moves(board, color).is_empty();
    let checked = in_check(board, color);
    match (has_moves, checked) {
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::InProgress,
        (false, true) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
    }
}
