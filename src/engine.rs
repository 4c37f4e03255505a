//! The public facade: a small stateful wrapper around `Board` that a
//! caller (CLI, GUI, test harness) drives one move at a time, without
//! reaching into the rules engine's internals.

use crate::basetypes::Color;
use crate::board::Board;
use crate::chess_move::Move;
use crate::coords::Coord;
use crate::legality::legal_moves;
use crate::search::{best_move, SearchConfig, SearchOutcome};
use crate::terminal::{status, GameStatus};

/// Drives a single game: holds the position, knows which side the
/// search plays, and exposes legal moves, user move application, and
/// AI replies.
pub struct Engine {
    board: Board,
    engine_color: Color,
    search_config: SearchConfig,
}

impl Engine {
    /// Creates a new game from the initial position, with the search
    /// playing `engine_color`.
    pub fn new(engine_color: Color) -> Engine {
        Engine {
            board: Board::initial_position(),
            engine_color,
            search_config: SearchConfig::default(),
        }
    }

    /// Creates a new game with a custom search configuration.
    pub fn with_config(engine_color: Color, search_config: SearchConfig) -> Engine {
        Engine {
            board: Board::initial_position(),
            engine_color,
            search_config,
        }
    }

    /// The current position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move next.
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// The side the search plays.
    pub fn engine_color(&self) -> Color {
        self.engine_color
    }

    /// Every legal move available to the side to move.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let color = self.board.side_to_move();
        legal_moves(&mut self.board, color)
    }

    /// Every destination the piece on `from` may legally move to.
    ///
    /// This is the only move surface a UI is meant to drive: it must
    /// only ever issue moves that came back from this call, per the
    /// UI contract (§6 of the base spec).
    pub fn legal_moves_from(&mut self, from: Coord) -> Vec<Coord> {
        self.legal_moves()
            .into_iter()
            .filter(|m| m.from == from)
            .map(|m| m.to)
            .collect()
    }

    /// Attempts to play `m` for the side to move.
    ///
    /// Returns `true` and applies the move if it is legal; returns
    /// `false` and leaves the position untouched otherwise. Illegality
    /// is not an error -- it is an expected outcome of letting an
    /// external caller propose arbitrary moves.
    pub fn try_user_move(&mut self, m: Move) -> bool {
        let legal = self.legal_moves();
        match legal.into_iter().find(|candidate| *candidate == m) {
            Some(candidate) => {
                self.board.apply(&candidate);
                true
            }
            None => false,
        }
    }

    /// Searches for the engine's next move in the current position.
    ///
    /// This does *not* apply the move -- the caller decides whether
    /// and when to play it (for instance, after showing it to a user
    /// for confirmation), via `try_user_move`.
    ///
    /// Returns an empty outcome (`best_move: None`) without running the
    /// search at all when it is not the engine's turn, or when the
    /// game has already ended -- both per §4.8 of the base spec.
    pub fn ai_reply(&mut self) -> SearchOutcome {
        if self.board.side_to_move() != self.engine_color
            || matches!(self.status(), GameStatus::Checkmate | GameStatus::Stalemate)
        {
            return SearchOutcome {
                best_move: None,
                nodes: 0,
            };
        }
        best_move(&mut self.board, &self.search_config)
    }

    /// The current game status for the side to move.
    pub fn status(&mut self) -> GameStatus {
        status(&mut self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_engine_starts_at_the_initial_position() {
        let engine = Engine::new(Color::Black);
        assert_eq!(engine.side_to_move(), Color::White);
        assert_eq!(engine.engine_color(), Color::Black);
    }

    #[test]
    fn illegal_user_move_is_rejected_without_changing_the_position() {
        let mut engine = Engine::new(Color::Black);
        let before = *engine.board();
        let bogus = Move::quiet(crate::coords::Coord::new(0, 0), crate::coords::Coord::new(0, -1));
        assert!(!engine.try_user_move(bogus));
        assert_eq!(*engine.board(), before);
    }

    #[test]
    fn legal_user_move_is_applied_and_flips_the_side_to_move() {
        let mut engine = Engine::new(Color::Black);
        let m = engine.legal_moves()[0];
        assert!(engine.try_user_move(m));
        assert_eq!(engine.side_to_move(), Color::Black);
    }

    #[test]
    fn ai_reply_is_empty_when_it_is_not_the_engines_turn() {
        let mut engine = Engine::new(Color::Black);
        assert_eq!(engine.side_to_move(), Color::White);
        let outcome = engine.ai_reply();
        assert!(outcome.best_move.is_none());
        assert_eq!(outcome.nodes, 0);
    }

    #[test]
    fn legal_moves_from_filters_by_source_square() {
        let mut engine = Engine::new(Color::White);
        let dests = engine.legal_moves_from(crate::coords::Coord::new(2, 3));
        assert!(dests.contains(&crate::coords::Coord::new(0, 2)));
    }

    #[test]
    fn ai_reply_does_not_mutate_the_board() {
        let mut engine = Engine::with_config(
            Color::White,
            SearchConfig {
                max_depth: 2,
                time_limit: std::time::Duration::from_secs(5),
                quiescence_max_depth: 2,
            },
        );
        let before = *engine.board();
        let outcome = engine.ai_reply();
        assert!(outcome.best_move.is_some());
        assert_eq!(*engine.board(), before);
    }
}
