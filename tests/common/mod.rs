#![allow(dead_code)]

use move_resolver::{parse_request, BoardCommand, Game, ParseError, Request};

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Build a game from FEN, panicking on bad test data.
pub fn game(fen: &str) -> Game {
    Game::from_fen(fen).unwrap_or_else(|e| panic!("invalid FEN {fen}: {e}"))
}

/// Parse an utterance that must come out as a board command.
pub fn command(game: &Game, utterance: &str) -> BoardCommand {
    match parse_request(utterance, game) {
        Ok(Request::Command(command)) => command,
        Ok(Request::Why) => panic!("{utterance:?} parsed as an inquiry"),
        Err(e) => panic!("{utterance:?} failed to parse: {e}"),
    }
}

pub fn parse_error(game: &Game, utterance: &str) -> ParseError {
    match parse_request(utterance, game) {
        Err(e) => e,
        Ok(request) => panic!("{utterance:?} unexpectedly parsed: {request:?}"),
    }
}

/// Play the unique candidate of an utterance, returning its SAN.
pub fn play(game: &mut Game, utterance: &str) -> String {
    let command = command(game, utterance);
    let candidate = command
        .unique_candidate()
        .unwrap_or_else(|| panic!("{utterance:?} has {} candidates", command.candidates().len()));
    let san = candidate.san.to_string();
    game.push(&candidate.mv).unwrap();
    san
}

pub fn hypotheses(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
