//! Error types surfaced at the edges of the engine.
//!
//! Internally the engine never panics during normal play. The only
//! fallible operation reported through `EngineError` is setup:
//! `Board::get`/`Board::place` reject an off-board coordinate before
//! touching any state. Illegal moves and game-over are both expected,
//! frequent outcomes of normal play rather than exceptional ones, so
//! the facade reports them as `bool`/`Option` instead (`try_user_move`
//! returns `false`; `ai_reply` returns no move once the game has
//! ended) -- they are not `EngineError` variants.

use thiserror::Error;

/// Errors that can occur at the edges of the engine.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// A coordinate failed the on-board predicate.
    #[error("coordinate ({q}, {r}) is not on the board")]
    OffBoard { q: i32, r: i32 },
}

/// Result type alias used at the engine's fallible boundaries.
pub type EngineResult<T> = Result<T, EngineError>;
