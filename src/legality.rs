//! Filters pseudo-legal moves down to legal ones by probing king
//! safety with an apply/unmake round-trip on the live board.

use crate::basetypes::Color;
use crate::board::Board;
use crate::chess_move::Move;
use crate::movegen::{is_attacked, pseudo_legal_moves};

/// Returns every legal move for `color` in the current position.
///
/// For each pseudo-legal candidate, the move is played on `board`,
/// the own king's safety is checked, and the move is taken back --
/// so by the time this returns, `board` is exactly as it was on
/// entry.
pub fn legal_moves(board: &mut Board, color: Color) -> Vec<Move> {
    let mut legal = Vec::new();
    for m in pseudo_legal_moves(board, color) {
        board.apply(&m);
        let king = board.king_coord(color);
        let leaves_king_attacked = is_attacked(board, king, color.opposite());
        board.unmake(&m);
        if !leaves_king_attacked {
            legal.push(m);
        }
    }
    legal
}

/// Whether `color`'s king is currently attacked.
pub fn in_check(board: &Board, color: Color) -> bool {
    is_attacked(board, board.king_coord(color), color.opposite())
}
