//! Defines what information a move must carry for the board to be
//! able to both play it and exactly undo it later.

use crate::basetypes::{Piece, PieceKind};
use crate::coords::Coord;

/// A single move: where a piece starts, where it ends up, and enough
/// information to undo it without the board having to diff itself.
///
/// Unlike a from/to pair alone, `captured` and `promotion` are stored
/// on the move record itself (derivable from the position at apply
/// time, but frozen here), so `Board::unmake` can restore the exact
/// pre-move state without re-deriving anything from the move's
/// destination square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
    pub captured: Option<Piece>,
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// A plain, non-capturing, non-promoting move.
    #[inline]
    pub fn quiet(from: Coord, to: Coord) -> Move {
        Move {
            from,
            to,
            captured: None,
            promotion: None,
        }
    }

    /// A capturing move.
    #[inline]
    pub fn capture(from: Coord, to: Coord, captured: Piece) -> Move {
        Move {
            from,
            to,
            captured: Some(captured),
            promotion: None,
        }
    }

    /// Whether this move captures a piece.
    #[inline]
    pub fn is_capture(self) -> bool {
        self.captured.is_some()
    }
}
