//! Chess piece movement rules
//!
//! Contains the rules for how each piece can move. Pure functions with no
//! side effects - easy to test.
//!
//! Only pawn, knight, and rook movement is validated geometrically. Bishop,
//! queen, and king accept any destination that survives the own-piece
//! collision guard; adding their real geometry is a deliberate non-goal of
//! this crate's scope.

use tracing::trace;

use crate::error::BoardResult;
use crate::state::BoardState;
use crate::types::{PieceColor, PieceId, PieceType, Square};

/// Check whether `mover` may move to `destination` on the given board
///
/// Illegal moves are the normal `Ok(false)` outcome. Errors are reserved
/// for caller bugs: a mover identity that does not decode
/// (`InvalidIdentity`) or a mover that is captured or unknown
/// (`PieceNotOnBoard`).
pub fn can_move(state: &BoardState, mover: &PieceId, destination: Square) -> BoardResult<bool> {
    let color = mover.color()?;
    let piece_type = mover.piece_type()?;
    let from = state.square_of(mover)?;

    trace!(piece = mover.as_str(), %from, %destination, "validating move");

    // Can't move to any square occupied by your own pieces. This also
    // rejects a move onto the mover's own square.
    if state.color_at(destination)? == Some(color) {
        return Ok(false);
    }

    match piece_type {
        PieceType::Pawn => pawn_move(state, color, from, destination),
        PieceType::Knight => Ok(knight_move(from, destination)),
        PieceType::Rook => rook_move(state, color, from, destination),
        PieceType::Bishop | PieceType::Queen | PieceType::King => Ok(true),
    }
}

/// Pawn movement
///
/// White advances toward decreasing `y`, Black toward increasing `y`. From
/// the starting rank an advance of one or two ranks on the same file is
/// accepted without consulting occupancy. Otherwise a single straight step
/// requires an empty destination and a single diagonal step requires an
/// opposing piece to capture.
fn pawn_move(state: &BoardState, color: PieceColor, from: Square, to: Square) -> BoardResult<bool> {
    let (x, y) = (from.x() as i8, from.y() as i8);
    let (to_x, to_y) = (to.x() as i8, to.y() as i8);
    let (direction, start_rank) = match color {
        PieceColor::White => (-1i8, 6i8),
        PieceColor::Black => (1i8, 1i8),
    };

    // Opening advance of one or two ranks on the same file.
    if y == start_rank && to_x == x && (to_y == y + direction || to_y == y + 2 * direction) {
        return Ok(true);
    }

    if to_y != y + direction {
        return Ok(false);
    }

    if to_x == x {
        // Straight ahead, onto an empty square only.
        return Ok(state.is_empty(to));
    }

    if (to_x - x).abs() == 1 {
        // Diagonal steps are capture-only.
        return Ok(matches!(state.color_at(to)?, Some(occupant) if occupant != color));
    }

    Ok(false)
}

/// Knight movement: file/rank deltas of {2, 1} in either order
fn knight_move(from: Square, to: Square) -> bool {
    let dx = (to.x() as i8 - from.x() as i8).abs();
    let dy = (to.y() as i8 - from.y() as i8).abs();
    (dx == 2 && dy == 1) || (dx == 1 && dy == 2)
}

/// Rook movement along a shared file or rank
///
/// The first piece encountered between mover and destination blocks the
/// move regardless of its color; occupancy past the destination is
/// irrelevant. A clear path ends on an empty square or an opposing piece.
fn rook_move(state: &BoardState, color: PieceColor, from: Square, to: Square) -> BoardResult<bool> {
    if from.x() != to.x() && from.y() != to.y() {
        return Ok(false);
    }

    let dx = (to.x() as i8 - from.x() as i8).signum();
    let dy = (to.y() as i8 - from.y() as i8).signum();
    let mut x = from.x() as i8 + dx;
    let mut y = from.y() as i8 + dy;
    while (x, y) != (to.x() as i8, to.y() as i8) {
        let step = Square::from_coords(x as u8, y as u8)?;
        if !state.is_empty(step) {
            return Ok(false);
        }
        x += dx;
        y += dy;
    }

    match state.color_at(to)? {
        None => Ok(true),
        Some(occupant) => Ok(occupant != color),
    }
}
