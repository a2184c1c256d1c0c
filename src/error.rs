//! Error types for the board core
//!
//! Provides custom error types for board state access, piece identity
//! parsing, and move application. Illegal moves are not errors: the
//! validator reports them as a normal `Ok(false)` result.

use thiserror::Error;

/// Errors that can occur in the board core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A piece identity token does not encode a recognized color and type
    #[error("piece identity '{id}' does not encode a recognized color and type")]
    InvalidIdentity { id: String },

    /// A square index falls outside the 64-square board
    #[error("square index {index} is outside the board (0..=63)")]
    OutOfRangeSquare { index: u8 },

    /// File/rank coordinates fall outside the 8x8 board
    #[error("coordinates ({x}, {y}) are off the board")]
    OutOfRangeCoords { x: u8, y: u8 },

    /// The piece is captured or was never placed on this board
    #[error("piece '{id}' is not on the board")]
    PieceNotOnBoard { id: String },
}

/// Result type alias for board operations
pub type BoardResult<T> = Result<T, BoardError>;
