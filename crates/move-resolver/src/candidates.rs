//! Candidate/reject classification for ordinary (non-castling) moves.

use shakmaty::{Bitboard, Chess, Position, Role, Square};
use tracing::debug;

use crate::board;
use crate::command::{Candidate, Outcome, ResolveCommand};
use crate::feasibility::{blocking_squares, is_possible_move};
use crate::game::Game;
use crate::squares::SquareSpec;

/// A considered move that is not legal, with the reasons it could fail.
/// The fields are independent; several can hold at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedMove {
    pub from: Square,
    pub to: Square,
    /// Kind of the piece on `from`, if any
    pub role: Option<Role>,
    /// The piece could make this move on an otherwise empty board
    pub possible: bool,
    /// `to` is occupied, regardless of legality
    pub captures: bool,
    /// Occupied squares in the way, plus `to` if it holds a friendly piece
    pub blocking: Bitboard,
    /// `to` is attacked by the opponent; stands in for "king left in check"
    pub still_in_check: bool,
    /// The piece on `from` is pinned to its king
    pub absolute_pin: bool,
}

impl RejectedMove {
    /// Diagnose the move `from` → `to` on the current board.
    pub fn diagnose(pos: &Chess, from: Square, to: Square) -> Self {
        let board = pos.board();
        let piece = board.piece_at(from);

        Self {
            from,
            to,
            role: piece.map(|p| p.role),
            possible: piece.is_some_and(|p| is_possible_move(p, from, to)),
            captures: board.piece_at(to).is_some(),
            blocking: blocking_squares(board, from, to),
            still_in_check: board::is_attacked_by(board, !pos.turn(), to),
            absolute_pin: piece.is_some_and(|p| board::pin_ray(board, p.color, from).is_some()),
        }
    }

    pub fn is_blocked(&self) -> bool {
        self.blocking.any()
    }
}

/// Move a piece matching `from_where` to a square matching `to_where`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveCommand {
    pub from_where: SquareSpec,
    pub to_where: SquareSpec,
    /// A capture was asked for ("takes")
    pub captures: bool,
    pub promotion: Option<Role>,
}

impl MoveCommand {
    pub fn new(
        from_where: SquareSpec,
        to_where: SquareSpec,
        captures: bool,
        promotion: Option<Role>,
    ) -> Self {
        Self {
            from_where,
            to_where,
            captures,
            promotion,
        }
    }
}

impl ResolveCommand for MoveCommand {
    type Reject = RejectedMove;

    fn resolve(&self, game: &Game) -> Outcome<RejectedMove> {
        let pos = game.position();
        let board = pos.board();
        // Only squares holding a piece of the side to move can be origins
        let from_squares = self.from_where.find_squares(board) & board.by_color(pos.turn());
        let to_squares = self.to_where.find_squares(board);

        let mut outcome = Outcome::default();

        for from in from_squares {
            for to in to_squares {
                match board::find_move(pos, from, to, self.promotion) {
                    // Legal, but not the capture that was asked for: not a
                    // candidate and nothing to diagnose either
                    Some(mv) if self.captures && !mv.is_capture() => {
                        debug!(%from, %to, "Dropping legal non-capture for a capture command");
                    }
                    Some(mv) => outcome.candidates.push(Candidate::new(pos, mv)),
                    None => outcome.rejects.push(RejectedMove::diagnose(pos, from, to)),
                }
            }
        }

        debug!(
            candidates = outcome.candidates.len(),
            rejects = outcome.rejects.len(),
            "Resolved move command"
        );
        outcome
    }
}
