//! Spoken command parser.
//!
//! Scans the words of an utterance left to right into at most two square
//! specifications plus capture, promotion and castling intent, then builds
//! and resolves the matching board command.

use std::sync::LazyLock;

use regex::Regex;
use shakmaty::{CastlingSide, Color, Role};
use tracing::debug;

use crate::board;
use crate::candidates::MoveCommand;
use crate::castling::CastleCommand;
use crate::command::BoardCommand;
use crate::error::ParseError;
use crate::game::Game;
use crate::squares::{file_from_word, rank_from_word, role_from_word, SquareSpec};

const CASTLE_WORDS: &[&str] = &["castle", "castles", "castling"];
const CAPTURE_WORDS: &[&str] = &["takes", "take", "captures", "capture"];
const PROMOTE_WORDS: &[&str] = &["promote", "promotes", "equals"];
const KINGSIDE_WORDS: &[&str] = &["king", "kingside", "short"];
const QUEENSIDE_WORDS: &[&str] = &["queen", "queenside", "long"];
const FILLER_WORD: &str = "on";

/// A command never names more than an origin and a destination.
const MAX_GROUPS: usize = 2;

static NON_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s]+").expect("valid regex"));
static SQUARE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-h])([1-8])").expect("valid regex"));

/// What a spoken request asks for.
#[derive(Debug, Clone)]
pub enum Request {
    Command(BoardCommand),
    /// "why": elaborate on the previous command
    Why,
}

/// Lower-case, drop punctuation and split compact squares ("e4" -> "e 4").
pub fn tokenize(utterance: &str) -> Vec<String> {
    let lowered = utterance.to_lowercase();
    let words = NON_WORD_RE.replace_all(&lowered, " ");
    let split = SQUARE_RE.replace_all(&words, " $1 $2 ");
    split.split_whitespace().map(str::to_string).collect()
}

fn is_square_word(token: &str) -> bool {
    role_from_word(token).is_some() || file_from_word(token).is_some() || rank_from_word(token).is_some()
}

fn contains_any(tokens: &[String], words: &[&str]) -> bool {
    tokens.iter().any(|t| words.contains(&t.as_str()))
}

/// Group adjacent words into square specifications.
///
/// A group takes a piece (only as its first word), then a file, then a rank;
/// "on" is skipped. A word that cannot extend the current group closes it.
/// If that word is not itself a piece, file or rank it is dropped ("to").
/// Each new group describes the other side's square, so the color flips.
pub fn square_groups(tokens: &[String], turn: Color) -> Vec<SquareSpec> {
    let mut groups = Vec::with_capacity(MAX_GROUPS);
    let mut color = turn;
    let mut i = 0;

    while i < tokens.len() && groups.len() < MAX_GROUPS {
        let mut spec = SquareSpec::new(color);

        while let Some(token) = tokens.get(i) {
            let token = token.as_str();
            match (role_from_word(token), file_from_word(token), rank_from_word(token)) {
                (Some(role), _, _) if spec.is_empty() => spec.role = Some(role),
                _ if token == FILLER_WORD => {}
                (_, Some(file), _) if spec.file.is_none() && spec.rank.is_none() => {
                    spec.file = Some(file)
                }
                (_, _, Some(rank)) if spec.rank.is_none() => spec.rank = Some(rank),
                _ => {
                    if !is_square_word(token) {
                        i += 1;
                    }
                    break;
                }
            }
            i += 1;
        }

        if !spec.is_empty() {
            groups.push(spec);
        }
        color = !color;
    }

    groups
}

/// Parse an utterance and resolve it against the game.
pub fn parse_request(utterance: &str, game: &Game) -> Result<Request, ParseError> {
    let tokens = tokenize(utterance);
    parse_tokens(&tokens, game)
}

pub fn parse_tokens(tokens: &[String], game: &Game) -> Result<Request, ParseError> {
    if let [only] = tokens {
        if only == "why" {
            return Ok(Request::Why);
        }
    }

    if contains_any(tokens, CASTLE_WORDS) {
        let side = if contains_any(tokens, KINGSIDE_WORDS) {
            Some(CastlingSide::KingSide)
        } else if contains_any(tokens, QUEENSIDE_WORDS) {
            Some(CastlingSide::QueenSide)
        } else {
            None
        };
        debug!(?side, "Parsed castle command");
        let command = BoardCommand::resolve_castle(CastleCommand::new(side), game);
        return Ok(Request::Command(command));
    }

    let captures = contains_any(tokens, CAPTURE_WORDS);

    // The promotion piece is always the last word, never part of a square
    let (square_tokens, promotion) = match tokens.split_last() {
        Some((last, rest)) if contains_any(tokens, PROMOTE_WORDS) => (rest, role_from_word(last)),
        _ => (tokens, None),
    };

    let groups = square_groups(square_tokens, game.turn());
    debug!(?groups, captures, ?promotion, "Parsed square groups");

    let command = interpret(tokens, &groups, captures, promotion, game)?;

    Ok(Request::Command(BoardCommand::resolve_move(command, game)))
}

fn interpret(
    tokens: &[String],
    groups: &[SquareSpec],
    captures: bool,
    promotion: Option<Role>,
    game: &Game,
) -> Result<MoveCommand, ParseError> {
    let turn = game.turn();

    match groups {
        [from_where, to_where] => Ok(MoveCommand::new(*from_where, *to_where, captures, promotion)),
        // Algebraic shorthand ("knight f3", "e4"): the one group is the
        // destination, the origin is any piece of that kind
        [single] if single.file.is_some() && single.rank.is_some() => {
            let from_where = SquareSpec::new(turn).with_role(single.role.unwrap_or(Role::Pawn));
            let to_where = SquareSpec {
                color: !turn,
                role: None,
                ..*single
            };
            Ok(MoveCommand::new(from_where, to_where, captures, promotion))
        }
        [taker] if captures => take_last(*taker, game, promotion),
        [] if captures => take_last(SquareSpec::new(turn), game, promotion),
        _ => Err(ParseError::Unrecognized(tokens.join(" "))),
    }
}

/// Take the piece the opponent moved last.
fn take_last(taker: SquareSpec, game: &Game, promotion: Option<Role>) -> Result<MoveCommand, ParseError> {
    let last = game.last_move().ok_or(ParseError::NoPreviousMove)?;
    let takee = SquareSpec::at(game.turn(), board::destination(last));
    Ok(MoveCommand::new(taker, takee, true, promotion))
}
