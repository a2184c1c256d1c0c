//! Type definitions and utilities for board squares and piece identity
//!
//! Provides newtype patterns and parsing helpers for chess-specific types
//! to improve type safety and code clarity.
//!
//! # Architecture
//!
//! - `Square` addresses one of the 64 board cells by index (`y * 8 + x`,
//!   file-major within each rank); a constructed `Square` is always valid.
//! - `PieceId` is the opaque, game-lifetime-unique token naming one physical
//!   piece (e.g. `"white_pawn_3"`). Color and type are derived from the
//!   token, never stored separately.

use std::fmt;

use crate::error::{BoardError, BoardResult};

/// The two sides of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    /// The opposing color
    pub fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }
}

/// The six piece classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Board square addressed by index in `[0, 63]`
///
/// The index encodes file `x` and rank `y` (both `0..=7`) as `y * 8 + x`.
/// White's home ranks sit at `y = 6` and `y = 7`, Black's at `y = 0` and
/// `y = 1`, so White pawns advance toward decreasing `y`.
///
/// # Examples
///
/// ```rust
/// use chessboard_core::Square;
///
/// let e4 = Square::from_coords(4, 4).unwrap();
/// assert_eq!(e4.index(), 36);
/// assert_eq!(e4.coords(), (4, 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a square from a raw board index
    ///
    /// Indices above 63 are rejected rather than clamped.
    pub fn from_index(index: u8) -> BoardResult<Self> {
        if index > 63 {
            return Err(BoardError::OutOfRangeSquare { index });
        }
        Ok(Square(index))
    }

    /// Create a square from file (`x`) and rank (`y`) coordinates
    pub fn from_coords(x: u8, y: u8) -> BoardResult<Self> {
        if x > 7 || y > 7 {
            return Err(BoardError::OutOfRangeCoords { x, y });
        }
        Ok(Square(y * 8 + x))
    }

    /// The raw board index (0-63)
    pub fn index(self) -> u8 {
        self.0
    }

    /// The file coordinate (0-7)
    pub fn x(self) -> u8 {
        self.0 % 8
    }

    /// The rank coordinate (0-7)
    pub fn y(self) -> u8 {
        self.0 / 8
    }

    /// Both coordinates as `(x, y)`
    pub fn coords(self) -> (u8, u8) {
        (self.x(), self.y())
    }
}

impl fmt::Display for Square {
    /// Algebraic notation: file 'a'..='h', rank 1..=8 counted from White's
    /// back rank at `y = 7`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.x()) as char, 8 - self.y())
    }
}

/// Opaque identity token for one physical piece
///
/// The token is unique per piece for the whole game and immutable. Its first
/// two `_`-separated segments encode color and type; any trailing segments
/// (usually an ordinal) only serve uniqueness.
///
/// # Examples
///
/// ```rust
/// use chessboard_core::{PieceColor, PieceId, PieceType};
///
/// let id = PieceId::from("white_pawn_3");
/// assert_eq!(id.color().unwrap(), PieceColor::White);
/// assert_eq!(id.piece_type().unwrap(), PieceType::Pawn);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PieceId(String);

impl PieceId {
    pub fn new(id: impl Into<String>) -> Self {
        PieceId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The piece's color, derived from the identity token
    pub fn color(&self) -> BoardResult<PieceColor> {
        match self.0.split('_').next() {
            Some("white") => Ok(PieceColor::White),
            Some("black") => Ok(PieceColor::Black),
            _ => Err(BoardError::InvalidIdentity { id: self.0.clone() }),
        }
    }

    /// The piece's type, derived from the identity token
    pub fn piece_type(&self) -> BoardResult<PieceType> {
        match self.0.split('_').nth(1) {
            Some("pawn") => Ok(PieceType::Pawn),
            Some("knight") => Ok(PieceType::Knight),
            Some("bishop") => Ok(PieceType::Bishop),
            Some("rook") => Ok(PieceType::Rook),
            Some("queen") => Ok(PieceType::Queen),
            Some("king") => Ok(PieceType::King),
            _ => Err(BoardError::InvalidIdentity { id: self.0.clone() }),
        }
    }
}

impl From<&str> for PieceId {
    fn from(id: &str) -> Self {
        PieceId(id.to_owned())
    }
}

impl From<String> for PieceId {
    fn from(id: String) -> Self {
        PieceId(id)
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_coordinate_round_trip() {
        //! Verifies the coordinate inverse law over every board square
        for index in 0u8..64 {
            let square = Square::from_index(index).unwrap();
            let (x, y) = square.coords();
            assert_eq!(
                Square::from_coords(x, y).unwrap(),
                square,
                "coords should round-trip for index {index}"
            );
        }
    }

    #[test]
    fn test_square_index_encoding() {
        //! Index is file-major within each rank: y * 8 + x
        assert_eq!(Square::from_coords(0, 0).unwrap().index(), 0);
        assert_eq!(Square::from_coords(7, 0).unwrap().index(), 7);
        assert_eq!(Square::from_coords(0, 1).unwrap().index(), 8);
        assert_eq!(Square::from_coords(7, 7).unwrap().index(), 63);
    }

    #[test]
    fn test_square_rejects_out_of_range() {
        assert_eq!(
            Square::from_index(64),
            Err(BoardError::OutOfRangeSquare { index: 64 })
        );
        assert_eq!(
            Square::from_coords(8, 0),
            Err(BoardError::OutOfRangeCoords { x: 8, y: 0 })
        );
        assert_eq!(
            Square::from_coords(0, 8),
            Err(BoardError::OutOfRangeCoords { x: 0, y: 8 })
        );
    }

    #[test]
    fn test_square_display_is_algebraic() {
        //! y = 7 is White's back rank, printed as rank 1
        assert_eq!(Square::from_coords(4, 4).unwrap().to_string(), "e4");
        assert_eq!(Square::from_coords(0, 7).unwrap().to_string(), "a1");
        assert_eq!(Square::from_coords(7, 0).unwrap().to_string(), "h8");
    }

    #[test]
    fn test_piece_id_parses_color_and_type() {
        let id = PieceId::from("black_knight_1");
        assert_eq!(id.color().unwrap(), PieceColor::Black);
        assert_eq!(id.piece_type().unwrap(), PieceType::Knight);

        // The ordinal suffix is optional for decoding.
        let id = PieceId::from("white_queen");
        assert_eq!(id.color().unwrap(), PieceColor::White);
        assert_eq!(id.piece_type().unwrap(), PieceType::Queen);
    }

    #[test]
    fn test_piece_id_rejects_unrecognized_tokens() {
        for bad in ["", "white", "purple_pawn_0", "white_dragon_0", "pawn_white_0"] {
            let id = PieceId::from(bad);
            let failed = id.color().is_err() || id.piece_type().is_err();
            assert!(failed, "'{bad}' should not decode to a color and type");
        }
    }

    #[test]
    fn test_color_opposite() {
        assert_eq!(PieceColor::White.opposite(), PieceColor::Black);
        assert_eq!(PieceColor::Black.opposite(), PieceColor::White);
    }
}
