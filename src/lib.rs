//! Rule-validation and state-mutation core for a two-player chess board
//!
//! Given the current arrangement of pieces and whose turn it is, this crate
//! decides whether a proposed move is structurally legal for the moving
//! piece and, when a move is committed, updates the board (including
//! captures) and advances the turn. Rendering, drag-and-drop input, and
//! component lifecycle live outside this crate; a view layer registers a
//! change listener on the store and re-reads state after each commit.
//!
//! # Architecture
//!
//! - `types` - Squares, colors, piece types, and piece identity parsing
//! - `error` - `BoardError` / `BoardResult` for caller bugs (illegal moves
//!   are a normal `Ok(false)`, not an error)
//! - `state` - `BoardState`: occupancy and turn, the single source of truth
//! - `rules` - Pure move validation, never mutates, never consults the turn
//! - `store` - `BoardStore`: commits commands, resolves captures, toggles
//!   the turn, and fans out change notifications
//!
//! # Example
//!
//! ```rust
//! use chessboard_core::{BoardStore, PieceColor, PieceId, Square};
//!
//! # fn main() -> chessboard_core::BoardResult<()> {
//! let mut store = BoardStore::new();
//! let pawn = PieceId::from("white_pawn_4");
//! let e4 = Square::from_coords(4, 4)?;
//!
//! if store.can_move(&pawn, e4)? {
//!     store.apply_move(&pawn, e4)?;
//! }
//! assert_eq!(store.turn(), PieceColor::Black);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod rules;
pub mod state;
pub mod store;
pub mod types;

pub use error::{BoardError, BoardResult};
pub use rules::can_move;
pub use state::{BoardState, Occupancy};
pub use store::{BoardCommand, BoardStore, ListenerId};
pub use types::{PieceColor, PieceId, PieceType, Square};
