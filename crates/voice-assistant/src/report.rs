//! JSON report of a resolved command, for transcripts and debugging.

use move_resolver::squares::role_name;
use move_resolver::{BoardCommand, RejectedCastle, RejectedMove};
use serde::Serialize;
use shakmaty::{Bitboard, CastlingSide};

use crate::error::AssistantError;

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommandReport {
    Move {
        utterance: String,
        candidates: Vec<String>,
        rejects: Vec<MoveRejectReport>,
    },
    Castle {
        utterance: String,
        candidates: Vec<String>,
        rejects: Vec<CastleRejectReport>,
    },
}

#[derive(Debug, Serialize)]
pub struct MoveRejectReport {
    pub from: String,
    pub to: String,
    pub piece: Option<&'static str>,
    pub possible: bool,
    pub captures: bool,
    pub blocking: Vec<String>,
    pub still_in_check: bool,
    pub absolute_pin: bool,
}

#[derive(Debug, Serialize)]
pub struct CastleRejectReport {
    pub side: &'static str,
    pub right_to_castle: bool,
    pub blocking: Vec<String>,
    pub in_check: bool,
    pub through_check: bool,
    pub into_check: bool,
}

fn square_names(squares: Bitboard) -> Vec<String> {
    squares.into_iter().map(|sq| sq.to_string()).collect()
}

impl From<&RejectedMove> for MoveRejectReport {
    fn from(r: &RejectedMove) -> Self {
        Self {
            from: r.from.to_string(),
            to: r.to.to_string(),
            piece: r.role.map(role_name),
            possible: r.possible,
            captures: r.captures,
            blocking: square_names(r.blocking),
            still_in_check: r.still_in_check,
            absolute_pin: r.absolute_pin,
        }
    }
}

impl From<&RejectedCastle> for CastleRejectReport {
    fn from(r: &RejectedCastle) -> Self {
        Self {
            side: match r.side {
                CastlingSide::KingSide => "kingside",
                CastlingSide::QueenSide => "queenside",
            },
            right_to_castle: r.right_to_castle,
            blocking: square_names(r.blocking),
            in_check: r.in_check,
            through_check: r.through_check,
            into_check: r.into_check,
        }
    }
}

impl CommandReport {
    pub fn new(utterance: &str, command: &BoardCommand) -> Self {
        let candidates = command.candidates().iter().map(|c| c.san.to_string()).collect();
        let utterance = utterance.to_string();

        match command {
            BoardCommand::Move { outcome, .. } => CommandReport::Move {
                utterance,
                candidates,
                rejects: outcome.rejects.iter().map(MoveRejectReport::from).collect(),
            },
            BoardCommand::Castle { outcome, .. } => CommandReport::Castle {
                utterance,
                candidates,
                rejects: outcome.rejects.iter().map(CastleRejectReport::from).collect(),
            },
        }
    }

    pub fn to_json(&self) -> Result<String, AssistantError> {
        Ok(serde_json::to_string(self)?)
    }
}
