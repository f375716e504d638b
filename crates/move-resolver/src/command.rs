//! Board commands: a parsed request resolved into legal candidate moves and
//! diagnosed rejects.

use shakmaty::{san::SanPlus, Chess, Move};

use crate::candidates::{MoveCommand, RejectedMove};
use crate::castling::{CastleCommand, RejectedCastle};
use crate::game::Game;

/// A legal move fully matching a command. SAN is rendered when the move is
/// found so it can be spoken later, after the board has moved on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub mv: Move,
    pub san: SanPlus,
}

impl Candidate {
    pub fn new(pos: &Chess, mv: Move) -> Self {
        let san = SanPlus::from_move(pos.clone(), mv);
        Self { mv, san }
    }
}

/// Candidates and rejects produced by resolving one command.
#[derive(Debug, Clone)]
pub struct Outcome<R> {
    pub candidates: Vec<Candidate>,
    pub rejects: Vec<R>,
}

impl<R> Default for Outcome<R> {
    fn default() -> Self {
        Self {
            candidates: Vec::new(),
            rejects: Vec::new(),
        }
    }
}

/// A command shape that can be checked against the board.
pub trait ResolveCommand {
    type Reject;

    /// Consider every move matching the command; legal ones become
    /// candidates, the rest rejects with the reasons they failed.
    fn resolve(&self, game: &Game) -> Outcome<Self::Reject>;
}

#[derive(Debug, Clone)]
pub enum BoardCommand {
    Move {
        command: MoveCommand,
        outcome: Outcome<RejectedMove>,
    },
    Castle {
        command: CastleCommand,
        outcome: Outcome<RejectedCastle>,
    },
}

impl BoardCommand {
    pub fn resolve_move(command: MoveCommand, game: &Game) -> Self {
        let outcome = command.resolve(game);
        BoardCommand::Move { command, outcome }
    }

    pub fn resolve_castle(command: CastleCommand, game: &Game) -> Self {
        let outcome = command.resolve(game);
        BoardCommand::Castle { command, outcome }
    }

    pub fn candidates(&self) -> &[Candidate] {
        match self {
            BoardCommand::Move { outcome, .. } => &outcome.candidates,
            BoardCommand::Castle { outcome, .. } => &outcome.candidates,
        }
    }

    pub fn reject_count(&self) -> usize {
        match self {
            BoardCommand::Move { outcome, .. } => outcome.rejects.len(),
            BoardCommand::Castle { outcome, .. } => outcome.rejects.len(),
        }
    }

    pub fn has_rejects(&self) -> bool {
        self.reject_count() > 0
    }

    /// The move to play, if exactly one legal move matched.
    pub fn unique_candidate(&self) -> Option<&Candidate> {
        match self.candidates() {
            [only] => Some(only),
            _ => None,
        }
    }
}
