//! Move validation rules - pure functions over board state
//!
//! Decides whether a proposed move is structurally legal for the moving
//! piece given current occupancy. Validation never mutates state and never
//! consults the turn; committing a move is the store's job.
//!
//! # Module Structure
//!
//! - `piece_moves` - Movement rules for each piece type

pub mod piece_moves;


// Re-export the validation entry point
pub use piece_moves::can_move;
