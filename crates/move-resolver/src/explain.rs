//! Spoken feedback: moves read out as words, and the reasons a command
//! matched no legal move.

use shakmaty::san::{San, SanPlus, Suffix};
use shakmaty::CastlingSide;

use crate::candidates::{MoveCommand, RejectedMove};
use crate::castling::RejectedCastle;
use crate::command::{BoardCommand, Candidate};
use crate::squares::role_name;

pub const AMBIGUOUS: &str = "That command is ambiguous. Could you be more specific?";
pub const NO_MATCH: &str = "No move matches that command.";
pub const CANNOT_MOVE_LIKE_THAT: &str = "The piece you're trying to move cannot move like that.";

pub const NON_CAPTURES: &str = "The following moves are non-captures:";
pub const BLOCKED: &str = "The following moves are blocked by pieces:";
pub const LEAVES_CHECK: &str = "The following moves leave your king in check:";
pub const PINNED: &str = "The following moves cannot be made because the piece is pinned to the king:";

pub const NO_CASTLING_RIGHTS: &str = "You have already moved your king or rook.";
pub const CASTLE_BLOCKED: &str = "The path between your king and rook is not clear of pieces.";
pub const CASTLE_IN_CHECK: &str = "Your king is still in check.";
pub const CASTLE_THROUGH_CHECK: &str = "You're attempting to castle through check.";
pub const CASTLE_INTO_CHECK: &str = "You're attempting to castle into check.";

/// Read a move out the way it is written in SAN, with symbols as words:
/// "Nxf3+" becomes "knight takes f3 check".
pub fn spoken_move(san: &SanPlus) -> String {
    if let San::Castle(side) = san.san {
        let castles = match side {
            CastlingSide::KingSide => "Kingside castles",
            CastlingSide::QueenSide => "Queenside castles",
        };
        return match san.suffix {
            Some(Suffix::Check) => format!("{castles}, check."),
            Some(Suffix::Checkmate) => format!("{castles}, checkmate."),
            None => format!("{castles}."),
        };
    }

    let chars: Vec<char> = san.to_string().chars().collect();
    let mut words = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let word = match c {
            'N' => "knight".to_string(),
            'B' => "bishop".to_string(),
            'R' => "rook".to_string(),
            'Q' => "queen".to_string(),
            'K' => "king".to_string(),
            'x' => "takes".to_string(),
            '=' => "equals".to_string(),
            '+' => "check".to_string(),
            '#' => "checkmate".to_string(),
            // A file followed by a rank is one square
            'a'..='h' if chars.get(i + 1).is_some_and(|r| r.is_ascii_digit()) => {
                i += 1;
                format!("{c}{}", chars[i])
            }
            other => other.to_string(),
        };
        words.push(word);
        i += 1;
    }

    words.join(" ")
}

fn describe_reject(reject: &RejectedMove) -> String {
    let piece = reject.role.map_or("piece", role_name);
    format!("the {piece} on {} to {}", reject.from, reject.to)
}

/// Explain a resolved command: the move itself if there is exactly one,
/// a request to be more specific if there are several, otherwise why
/// nothing matched.
pub fn explain(command: &BoardCommand) -> Vec<String> {
    match command.candidates() {
        [] => {}
        [only] => return vec![spoken_move(&only.san)],
        _ => return vec![AMBIGUOUS.to_string()],
    }

    match command {
        BoardCommand::Move { command, outcome } => explain_no_moves(command, &outcome.rejects),
        BoardCommand::Castle { outcome, .. } => explain_no_castle(&outcome.rejects),
    }
}

/// Every legal move that fully matched, spoken one per line.
pub fn list_candidates(candidates: &[Candidate]) -> Vec<String> {
    candidates.iter().map(|c| spoken_move(&c.san)).collect()
}

/// Reasons no ordinary move matched.
///
/// Only capture commands get the per-reason breakdown; any other command
/// whose rejects include a geometrically possible move gets nothing.
pub fn explain_no_moves(command: &MoveCommand, rejects: &[RejectedMove]) -> Vec<String> {
    if rejects.is_empty() {
        return vec![NO_MATCH.to_string()];
    }
    if !rejects.iter().any(|r| r.possible) {
        return vec![CANNOT_MOVE_LIKE_THAT.to_string()];
    }
    if !command.captures {
        return Vec::new();
    }

    let reasons: [(&str, fn(&RejectedMove) -> bool); 4] = [
        (NON_CAPTURES, |r| !r.captures),
        (BLOCKED, RejectedMove::is_blocked),
        (LEAVES_CHECK, |r| r.still_in_check),
        (PINNED, |r| r.absolute_pin),
    ];

    reasons
        .iter()
        .filter_map(|(intro, applies)| {
            let moves: Vec<String> = rejects
                .iter()
                .filter(|r| applies(r))
                .map(describe_reject)
                .collect();
            (!moves.is_empty()).then(|| format!("{intro} {}.", moves.join(", ")))
        })
        .collect()
}

/// The single most important reason neither requested castle was possible.
pub fn explain_no_castle(rejects: &[RejectedCastle]) -> Vec<String> {
    let reasons: [(&str, fn(&RejectedCastle) -> bool); 5] = [
        (NO_CASTLING_RIGHTS, |r| !r.right_to_castle),
        (CASTLE_BLOCKED, RejectedCastle::is_blocked),
        (CASTLE_IN_CHECK, |r| r.in_check),
        (CASTLE_THROUGH_CHECK, |r| r.through_check),
        (CASTLE_INTO_CHECK, |r| r.into_check),
    ];

    if rejects.is_empty() {
        return vec![NO_MATCH.to_string()];
    }

    reasons
        .iter()
        .find(|(_, applies)| rejects.iter().any(applies))
        .map(|(sentence, _)| vec![sentence.to_string()])
        .unwrap_or_default()
}
