//! Core error types

use thiserror::Error;

/// Failure to turn a spoken request into a board command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The tokens do not form any shape the command grammar supports.
    /// This is an internal invariant violation, never a user mistake.
    #[error("Unrecognized command shape: {0:?}")]
    Unrecognized(String),

    /// "Take the last moved piece" with no move history to look at.
    #[error("There is no previous move to take.")]
    NoPreviousMove,
}

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid FEN: {0}")]
    InvalidFen(String),

    #[error("Illegal move: {0}")]
    IllegalMove(String),
}
