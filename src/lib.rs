//! A rules engine and alpha-beta search for Glinski's hexagonal chess.
//!
//! The board is the 91-cell hexagon Glinski designed in 1949: axial
//! coordinates `(q, r)` with `max(|q|, |r|, |q + r|) <= 5`, six piece
//! kinds, and the usual goal of checkmating the opposing king.
//!
//! This crate is rules and search only -- no rendering, no persistence,
//! no network protocol. A caller drives a game through [`Engine`].

#[macro_use]
extern crate lazy_static;

pub mod basetypes;
pub mod board;
pub mod chess_move;
pub mod coords;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod legality;
pub mod movegen;
pub mod search;
pub mod terminal;

pub use basetypes::{Color, Piece, PieceKind};
pub use board::Board;
pub use chess_move::Move;
pub use coords::Coord;
pub use engine::Engine;
pub use error::{EngineError, EngineResult};
pub use evaluator::evaluate;
pub use search::{SearchConfig, SearchOutcome};
pub use terminal::GameStatus;
