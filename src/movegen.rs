//! Pseudo-legal move generation for all six piece kinds, and the
//! attack query the legality filter and evaluator build on.
//!
//! "Pseudo-legal" means the move obeys the piece's movement geometry
//! and occupancy rules but may leave its own king in check -- king
//! safety is the legality filter's job (`crate::legality`), not this
//! module's, so that a beta cutoff in the search can skip the king
//! safety check on moves that are never actually explored.

use crate::basetypes::{Color, PieceKind};
use crate::board::Board;
use crate::chess_move::Move;
use crate::coords::{all_coords, Coord, DIAGONAL_DIRECTIONS, KNIGHT_OFFSETS, ORTHOGONAL_DIRECTIONS};

/// The non-capturing, forward-only step a pawn of `color` can make.
fn pawn_forward(color: Color) -> (i32, i32) {
    match color {
        Color::White => (0, -1),
        Color::Black => (0, 1),
    }
}

/// The two vertex-neighbor steps a pawn of `color` captures along.
fn pawn_captures(color: Color) -> [(i32, i32); 2] {
    match color {
        Color::White => [(1, -1), (-1, 0)],
        Color::Black => [(-1, 1), (1, 0)],
    }
}

/// The single-cell promotion rank a pawn of `color` promotes on.
fn promotion_rank(color: Color) -> i32 {
    match color {
        Color::White => -5,
        Color::Black => 5,
    }
}

/// Generates every pseudo-legal move for `color` in the current
/// position.
///
/// All generated moves with pieces other than the king are guaranteed
/// legal with respect to occupancy; king moves may still walk into
/// check, which `crate::legality::legal_moves` filters out.
pub fn pseudo_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for &from in all_coords() {
        if let Some(piece) = board.piece_at(from) {
            if piece.color != color {
                continue;
            }
            match piece.kind {
                PieceKind::Pawn => generate_pawn_moves(board, from, color, &mut moves),
                PieceKind::Knight => {
                    generate_stepping_moves(board, from, color, &KNIGHT_OFFSETS, &mut moves)
                }
                PieceKind::Bishop => {
                    generate_sliding_moves(board, from, color, &DIAGONAL_DIRECTIONS, &mut moves)
                }
                PieceKind::Rook => {
                    generate_sliding_moves(board, from, color, &ORTHOGONAL_DIRECTIONS, &mut moves)
                }
                PieceKind::Queen => {
                    generate_sliding_moves(board, from, color, &DIAGONAL_DIRECTIONS, &mut moves);
                    generate_sliding_moves(board, from, color, &ORTHOGONAL_DIRECTIONS, &mut moves);
                }
                PieceKind::King => generate_king_moves(board, from, color, &mut moves),
            }
        }
    }
    moves
}

fn generate_pawn_moves(board: &Board, from: Coord, color: Color, moves: &mut Vec<Move>) {
    let promo_rank = promotion_rank(color);

    if let Some(to) = from.add(pawn_forward(color)) {
        if board.piece_at(to).is_none() {
            push_pawn_move(from, to, None, promo_rank, moves);
        }
    }

    for offset in pawn_captures(color) {
        if let Some(to) = from.add(offset) {
            if let Some(target) = board.piece_at(to) {
                if target.color != color {
                    push_pawn_move(from, to, Some(target), promo_rank, moves);
                }
            }
        }
    }
}

fn push_pawn_move(
    from: Coord,
    to: Coord,
    captured: Option<crate::basetypes::Piece>,
    promo_rank: i32,
    moves: &mut Vec<Move>,
) {
    let promotion = if to.r == promo_rank {
        Some(PieceKind::Queen)
    } else {
        None
    };
    moves.push(Move {
        from,
        to,
        captured,
        promotion,
    });
}

fn generate_stepping_moves(
    board: &Board,
    from: Coord,
    color: Color,
    offsets: &[(i32, i32)],
    moves: &mut Vec<Move>,
) {
    for &offset in offsets {
        if let Some(to) = from.add(offset) {
            match board.piece_at(to) {
                None => moves.push(Move::quiet(from, to)),
                Some(target) if target.color != color => {
                    moves.push(Move::capture(from, to, target))
                }
                Some(_) => {}
            }
        }
    }
}

/// The king steps one cell along any orthogonal or diagonal direction,
/// via `Coord::neighbors_ortho`/`neighbors_diag` rather than a raw
/// offset table, since a king's single step is exactly the named
/// Coordinates-component operation.
fn generate_king_moves(board: &Board, from: Coord, color: Color, moves: &mut Vec<Move>) {
    let neighbors = from.neighbors_ortho().into_iter().chain(from.neighbors_diag());
    for to in neighbors.flatten() {
        match board.piece_at(to) {
            None => moves.push(Move::quiet(from, to)),
            Some(target) if target.color != color => moves.push(Move::capture(from, to, target)),
            Some(_) => {}
        }
    }
}

fn generate_sliding_moves(
    board: &Board,
    from: Coord,
    color: Color,
    directions: &[(i32, i32)],
    moves: &mut Vec<Move>,
) {
    for &dir in directions {
        let mut current = from;
        while let Some(to) = current.add(dir) {
            match board.piece_at(to) {
                None => {
                    moves.push(Move::quiet(from, to));
                    current = to;
                }
                Some(target) => {
                    if target.color != color {
                        moves.push(Move::capture(from, to, target));
                    }
                    break;
                }
            }
        }
    }
}

/// Whether any piece of `by_color` attacks `target`.
///
/// Pawn *captures* count as attacks even against an empty square;
/// pawn *forward* moves never do, since they cannot capture.
pub fn is_attacked(board: &Board, target: Coord, by_color: Color) -> bool {
    for &from in all_coords() {
        let piece = match board.piece_at(from) {
            Some(p) if p.color == by_color => p,
            _ => continue,
        };
        let attacks = match piece.kind {
            PieceKind::Pawn => pawn_captures(by_color).iter().any(|&d| from.add(d) == Some(target)),
            PieceKind::Knight => KNIGHT_OFFSETS.iter().any(|&d| from.add(d) == Some(target)),
            PieceKind::King => from
                .neighbors_ortho()
                .into_iter()
                .chain(from.neighbors_diag())
                .flatten()
                .any(|c| c == target),
            PieceKind::Bishop => ray_reaches(board, from, &DIAGONAL_DIRECTIONS, target),
            PieceKind::Rook => ray_reaches(board, from, &ORTHOGONAL_DIRECTIONS, target),
            PieceKind::Queen => {
                ray_reaches(board, from, &DIAGONAL_DIRECTIONS, target)
                    || ray_reaches(board, from, &ORTHOGONAL_DIRECTIONS, target)
            }
        };
        if attacks {
            return true;
        }
    }
    false
}

/// Whether a slider standing on `from` reaches `target` along one of
/// `directions`, stopping at (but including) the first occupied cell.
fn ray_reaches(board: &Board, from: Coord, directions: &[(i32, i32)], target: Coord) -> bool {
    for &dir in directions {
        let mut current = from;
        while let Some(to) = current.add(dir) {
            if to == target {
                return true;
            }
            if board.piece_at(to).is_some() {
                break;
            }
            current = to;
        }
    }
    false
}
