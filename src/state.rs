//! Board state representation: occupancy and turn tracking
//!
//! `BoardState` is the single source of truth for where every piece stands
//! and whose turn it is. It exposes read access and whole-value replacement;
//! all game mutation flows through the store in `crate::store`.
//!
//! # Occupancy
//!
//! Every piece that has ever existed stays a key in the occupancy map for
//! the lifetime of the game. A captured piece maps to `None` instead of
//! being removed, so iteration over live pieces filters out `None`.

use std::collections::HashMap;

use crate::error::{BoardError, BoardResult};
use crate::types::{PieceColor, PieceId, Square};

/// Mapping from piece identity to current square (`None` once captured)
pub type Occupancy = HashMap<PieceId, Option<Square>>;

/// Back-rank piece names across files 0..=7, with uniqueness ordinals
const BACK_RANK: [&str; 8] = [
    "rook_0", "knight_0", "bishop_0", "queen_0", "king_0", "bishop_1", "knight_1", "rook_1",
];

/// The state of the board for move validation and display queries
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    occupancy: Occupancy,
    turn: PieceColor,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::standard_start()
    }
}

impl BoardState {
    /// The standard starting position: 32 pieces, White to move
    ///
    /// White's back rank sits at `y = 7` with pawns at `y = 6`; Black
    /// mirrors at `y = 0` and `y = 1`.
    pub fn standard_start() -> Self {
        let mut occupancy = Occupancy::new();
        for (color, back_rank, pawn_rank) in [("white", 7u8, 6u8), ("black", 0, 1)] {
            for x in 0..8u8 {
                let pawn = PieceId::new(format!("{color}_pawn_{x}"));
                let square = Square::from_coords(x, pawn_rank).expect("starting square");
                occupancy.insert(pawn, Some(square));

                let piece = PieceId::new(format!("{color}_{}", BACK_RANK[x as usize]));
                let square = Square::from_coords(x, back_rank).expect("starting square");
                occupancy.insert(piece, Some(square));
            }
        }
        BoardState {
            occupancy,
            turn: PieceColor::White,
        }
    }

    /// An empty board, for setup and tests
    pub fn empty(turn: PieceColor) -> Self {
        BoardState {
            occupancy: Occupancy::new(),
            turn,
        }
    }

    /// Current placements; captured pieces carry `None`
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// Whose move it is
    pub fn turn(&self) -> PieceColor {
        self.turn
    }

    /// Replace the entire occupancy map
    pub fn set_occupancy(&mut self, occupancy: Occupancy) {
        self.occupancy = occupancy;
    }

    /// Replace the turn
    pub fn set_turn(&mut self, turn: PieceColor) {
        self.turn = turn;
    }

    /// Place one piece (or mark it captured with `None`)
    pub fn place(&mut self, id: PieceId, square: Option<Square>) {
        self.occupancy.insert(id, square);
    }

    /// The square a piece currently stands on
    ///
    /// Errors with `PieceNotOnBoard` if the piece is captured or was never
    /// placed on this board.
    pub fn square_of(&self, id: &PieceId) -> BoardResult<Square> {
        match self.occupancy.get(id) {
            Some(Some(square)) => Ok(*square),
            _ => Err(BoardError::PieceNotOnBoard {
                id: id.as_str().to_owned(),
            }),
        }
    }

    /// Whether no live piece stands on the given square
    pub fn is_empty(&self, square: Square) -> bool {
        !self
            .occupancy
            .values()
            .any(|placement| *placement == Some(square))
    }

    /// The identity of the live piece on the given square, if any
    pub fn piece_at(&self, square: Square) -> Option<&PieceId> {
        self.occupancy
            .iter()
            .find(|(_, placement)| **placement == Some(square))
            .map(|(id, _)| id)
    }

    /// The color of the live piece on the given square, if any
    ///
    /// Propagates `InvalidIdentity` when the occupant's token is malformed.
    pub fn color_at(&self, square: Square) -> BoardResult<Option<PieceColor>> {
        match self.piece_at(square) {
            Some(id) => Ok(Some(id.color()?)),
            None => Ok(None),
        }
    }
}
