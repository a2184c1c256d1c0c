//! Board store: command application, capture resolution, and turn engine
//!
//! `BoardStore` owns a `BoardState` and is the only writer to it. Callers
//! validate candidate moves with [`BoardStore::can_move`], then commit them
//! with [`BoardStore::apply_move`] (or through the [`BoardCommand`] sum
//! type); the store resolves captures, toggles the turn, and notifies
//! registered change listeners exactly once per committed mutation.
//!
//! # Concurrency
//!
//! Single-writer, single-threaded semantics. All operations are synchronous
//! and bounded; listeners run before the mutating call returns. Callers that
//! need concurrency must serialize access externally, and must not
//! interleave another mutation between their `can_move` check and the
//! matching `apply_move`.

use tracing::debug;

use crate::error::BoardResult;
use crate::rules;
use crate::state::{BoardState, Occupancy};
use crate::types::{PieceColor, PieceId, Square};

/// The two mutations the store accepts
///
/// There is deliberately no generic "any action" entry point: a command is
/// either a whole-board replacement (setup, reset) or one piece move.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardCommand {
    /// Overwrite occupancy and turn wholesale
    ReplaceBoard {
        occupancy: Occupancy,
        turn: PieceColor,
    },
    /// Move one piece, capturing whatever opposing piece holds the square
    MovePiece { id: PieceId, destination: Square },
}

/// Handle identifying one registered change listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type ChangeListener = Box<dyn FnMut()>;

/// Owner of the board state and its change-notification fan-out
pub struct BoardStore {
    state: BoardState,
    listeners: Vec<(ListenerId, ChangeListener)>,
    next_listener_id: u64,
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardStore {
    /// A store holding the standard starting position
    pub fn new() -> Self {
        Self::with_state(BoardState::standard_start())
    }

    /// A store holding an arbitrary prepared state
    pub fn with_state(state: BoardState) -> Self {
        BoardStore {
            state,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// Read access to the owned state
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Current placements; captured pieces carry `None`
    pub fn occupancy(&self) -> &Occupancy {
        self.state.occupancy()
    }

    /// Whose move it is
    pub fn turn(&self) -> PieceColor {
        self.state.turn()
    }

    /// Validate a candidate move against the owned state
    ///
    /// Never mutates; see [`rules::can_move`] for the legality contract.
    pub fn can_move(&self, mover: &PieceId, destination: Square) -> BoardResult<bool> {
        rules::can_move(&self.state, mover, destination)
    }

    /// Apply one command
    pub fn dispatch(&mut self, command: BoardCommand) -> BoardResult<()> {
        match command {
            BoardCommand::ReplaceBoard { occupancy, turn } => self.replace_board(occupancy, turn),
            BoardCommand::MovePiece { id, destination } => self.apply_move(&id, destination),
        }
    }

    /// Commit a move: resolve captures, place the mover, toggle the turn
    ///
    /// The caller is expected to have consulted [`BoardStore::can_move`];
    /// this method does not re-check per-piece legality. Arguments are
    /// validated before any state is touched, so a failure leaves the board
    /// unchanged and fires no notification.
    pub fn apply_move(&mut self, mover: &PieceId, destination: Square) -> BoardResult<()> {
        let mover_color = mover.color()?;
        let from = self.state.square_of(mover)?;

        // Every opposing occupant of the destination is captured. Collect
        // first so a malformed occupant id fails before mutation.
        let mut captured = Vec::new();
        for (id, placement) in self.state.occupancy() {
            if *placement == Some(destination) && id.color()? != mover_color {
                captured.push(id.clone());
            }
        }

        for id in &captured {
            self.state.place(id.clone(), None);
        }
        self.state.place(mover.clone(), Some(destination));
        let next = self.state.turn().opposite();
        self.state.set_turn(next);

        debug!(
            piece = mover.as_str(),
            %from,
            to = %destination,
            captured = captured.len(),
            turn = ?next,
            "move applied"
        );
        self.emit_change();
        Ok(())
    }

    /// Overwrite occupancy and turn wholesale, for setup and reset
    ///
    /// Every identity in the new occupancy must decode to a color and
    /// type; the check runs before the overwrite so a failure leaves the
    /// previous board intact.
    pub fn replace_board(&mut self, occupancy: Occupancy, turn: PieceColor) -> BoardResult<()> {
        for id in occupancy.keys() {
            id.color()?;
            id.piece_type()?;
        }

        self.state.set_occupancy(occupancy);
        self.state.set_turn(turn);

        debug!(pieces = self.state.occupancy().len(), turn = ?turn, "board replaced");
        self.emit_change();
        Ok(())
    }

    /// Register a callback invoked after every committed mutation
    pub fn add_change_listener(&mut self, listener: impl FnMut() + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a previously registered callback
    ///
    /// Returns `false` if the id was never registered or already removed.
    pub fn remove_change_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Invoke every listener once; delivery order is unspecified
    fn emit_change(&mut self) {
        for (_, listener) in &mut self.listeners {
            listener();
        }
    }
}
