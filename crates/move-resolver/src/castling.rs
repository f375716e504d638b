//! Castling commands and why a castle was not possible.

use shakmaty::{attacks, Bitboard, CastlingSide, Chess, Color, File, Position, Rank, Square};
use tracing::debug;

use crate::board;
use crate::command::{Candidate, Outcome, ResolveCommand};
use crate::feasibility::blocking_squares;
use crate::game::Game;

/// A castle that could not be played, for one side.
///
/// The path and attack fields are only evaluated when the right to castle
/// still exists; otherwise they stay empty/false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedCastle {
    pub side: CastlingSide,
    /// Neither the king nor this rook has moved
    pub right_to_castle: bool,
    /// Occupied squares the king or rook would have to pass
    pub blocking: Bitboard,
    pub in_check: bool,
    /// The square the king passes over is attacked
    pub through_check: bool,
    /// The square the king lands on is attacked
    pub into_check: bool,
}

impl RejectedCastle {
    pub fn diagnose(pos: &Chess, side: CastlingSide) -> Self {
        let turn = pos.turn();
        let board = pos.board();

        let mut reject = Self {
            side,
            right_to_castle: pos.castles().has(turn, side),
            blocking: Bitboard::EMPTY,
            in_check: pos.is_check(),
            through_check: false,
            into_check: false,
        };

        if reject.right_to_castle {
            let path = CastlePath::new(turn, side);

            let mut blocking = blocking_squares(board, path.king, path.through);
            // Any occupant of the landing square blocks, whatever its color
            if board.piece_at(path.to).is_some() {
                blocking.add(path.to);
            }
            blocking |= attacks::between(path.king, path.rook) & board.occupied();

            reject.blocking = blocking;
            reject.through_check = board::is_attacked_by(board, !turn, path.through);
            reject.into_check = board::is_attacked_by(board, !turn, path.to);
        }

        reject
    }

    pub fn is_blocked(&self) -> bool {
        self.blocking.any()
    }
}

/// King start, transit and landing squares plus the rook's start square.
struct CastlePath {
    king: Square,
    through: Square,
    to: Square,
    rook: Square,
}

impl CastlePath {
    fn new(color: Color, side: CastlingSide) -> Self {
        let rank = match color {
            Color::White => Rank::First,
            Color::Black => Rank::Eighth,
        };
        let (through, to, rook) = match side {
            CastlingSide::KingSide => (File::F, File::G, File::H),
            CastlingSide::QueenSide => (File::D, File::C, File::A),
        };

        Self {
            king: Square::from_coords(File::E, rank),
            through: Square::from_coords(through, rank),
            to: Square::from_coords(to, rank),
            rook: Square::from_coords(rook, rank),
        }
    }
}

/// Castle on `side`, or on whichever side works when no side was named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastleCommand {
    pub side: Option<CastlingSide>,
}

impl CastleCommand {
    pub fn new(side: Option<CastlingSide>) -> Self {
        Self { side }
    }

    fn sides(&self) -> Vec<CastlingSide> {
        match self.side {
            Some(side) => vec![side],
            None => vec![CastlingSide::KingSide, CastlingSide::QueenSide],
        }
    }
}

impl ResolveCommand for CastleCommand {
    type Reject = RejectedCastle;

    fn resolve(&self, game: &Game) -> Outcome<RejectedCastle> {
        let pos = game.position();
        let mut outcome = Outcome::default();

        for side in self.sides() {
            match board::find_castle(pos, side) {
                Some(mv) => outcome.candidates.push(Candidate::new(pos, mv)),
                None => {
                    let reject = RejectedCastle::diagnose(pos, side);
                    debug!(?side, ?reject, "Castle rejected");
                    outcome.rejects.push(reject);
                }
            }
        }

        outcome
    }
}
