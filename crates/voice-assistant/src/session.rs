//! One player's voice-control session: picks a transcription hypothesis,
//! plays or refuses the command, and answers "why".

use move_resolver::explain::{self, spoken_move};
use move_resolver::{parse_request, BoardCommand, Game, ParseError, Request};
use shakmaty::san::SanPlus;
use tracing::{debug, info, warn};

use crate::error::AssistantError;
use crate::speech::Speaker;

pub const NOT_UNDERSTOOD: &str = "I'm sorry, I didn't get that.";
pub const NOTHING_TO_EXPLAIN: &str = "There is nothing to explain yet.";
pub const CANNOT_SAY_MORE: &str = "I can't say more about that command.";

/// What the session did with an utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The single matching move was played
    Executed(SanPlus),
    Ambiguous,
    /// Nothing legal matched; the rejects are kept for "why"
    Rejected,
    Explained(Vec<String>),
    NotUnderstood,
}

pub struct Session<S: Speaker> {
    game: Game,
    speaker: S,
    last_command: Option<BoardCommand>,
    last_utterance: Option<String>,
}

impl<S: Speaker> Session<S> {
    pub fn new(game: Game, speaker: S) -> Self {
        Self {
            game,
            speaker,
            last_command: None,
            last_utterance: None,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn speaker(&self) -> &S {
        &self.speaker
    }

    /// The last command acted on, with the utterance it came from.
    pub fn last_command(&self) -> Option<(&str, &BoardCommand)> {
        match (&self.last_utterance, &self.last_command) {
            (Some(utterance), Some(command)) => Some((utterance, command)),
            _ => None,
        }
    }

    /// Handle ranked hypotheses for one utterance, best first.
    ///
    /// The first hypothesis with a legal match wins, then the first that at
    /// least produced rejects. "why" is answered as soon as it is reached.
    pub fn handle_utterance(&mut self, hypotheses: &[String]) -> Result<Response, AssistantError> {
        let mut fallback: Option<(&str, BoardCommand)> = None;
        let mut no_previous_move = false;

        for utterance in hypotheses {
            match parse_request(utterance, &self.game) {
                Ok(Request::Why) => return self.explain_last(),
                Ok(Request::Command(command)) if !command.candidates().is_empty() => {
                    return self.act(utterance, command);
                }
                Ok(Request::Command(command)) => {
                    debug!(%utterance, rejects = command.reject_count(), "No legal match");
                    if fallback.is_none() && command.has_rejects() {
                        fallback = Some((utterance.as_str(), command));
                    }
                }
                Err(ParseError::NoPreviousMove) => no_previous_move = true,
                Err(err) => warn!(%utterance, %err, "Skipping hypothesis"),
            }
        }

        if let Some((utterance, command)) = fallback {
            return self.act(utterance, command);
        }

        if no_previous_move {
            self.say(&ParseError::NoPreviousMove.to_string())?;
        } else {
            self.say(NOT_UNDERSTOOD)?;
        }
        Ok(Response::NotUnderstood)
    }

    fn act(&mut self, utterance: &str, command: BoardCommand) -> Result<Response, AssistantError> {
        let response = match command.candidates() {
            [only] => {
                self.game.push(&only.mv)?;
                info!(%utterance, san = %only.san, "Played move");
                self.say(&spoken_move(&only.san))?;
                Response::Executed(only.san.clone())
            }
            [] => {
                info!(%utterance, rejects = command.reject_count(), "Command rejected");
                self.say(&format!("The command {utterance} does not match any legal moves."))?;
                Response::Rejected
            }
            candidates => {
                info!(%utterance, candidates = candidates.len(), "Command ambiguous");
                self.say(&format!(
                    "The command {utterance} is ambiguous. Could you be more specific?"
                ))?;
                Response::Ambiguous
            }
        };

        self.last_command = Some(command);
        self.last_utterance = Some(utterance.to_string());
        Ok(response)
    }

    fn explain_last(&mut self) -> Result<Response, AssistantError> {
        let sentences = match self.last_command() {
            None => vec![NOTHING_TO_EXPLAIN.to_string()],
            Some((utterance, command)) if !command.candidates().is_empty() => {
                let mut sentences = vec![format!("Legal moves fully matching {utterance} include:")];
                sentences.extend(explain::list_candidates(command.candidates()));
                sentences
            }
            Some((_, command)) => {
                let sentences = explain::explain(command);
                if sentences.is_empty() {
                    vec![CANNOT_SAY_MORE.to_string()]
                } else {
                    sentences
                }
            }
        };

        for sentence in &sentences {
            self.say(sentence)?;
        }
        Ok(Response::Explained(sentences))
    }

    fn say(&mut self, text: &str) -> Result<(), AssistantError> {
        self.speaker.say(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::RecordingSpeaker;
    use move_resolver::explain::{CASTLE_BLOCKED, PINNED};

    fn session(fen: Option<&str>) -> Session<RecordingSpeaker> {
        let game = match fen {
            Some(fen) => Game::from_fen(fen).unwrap(),
            None => Game::new(),
        };
        Session::new(game, RecordingSpeaker::default())
    }

    fn hyps(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_plays_unique_move() {
        let mut session = session(None);
        let response = session.handle_utterance(&hyps(&["knight to f3"])).unwrap();

        assert_eq!(response, Response::Executed("Nf3".parse().unwrap()));
        assert_eq!(session.speaker().spoken, vec!["knight f3"]);
        assert_eq!(session.game().history().len(), 1);
    }

    #[test]
    fn test_first_hypothesis_with_candidates_wins() {
        let mut session = session(None);
        let response = session
            .handle_utterance(&hyps(&["night to", "knight to e5", "knight to c3"]))
            .unwrap();

        assert_eq!(response, Response::Executed("Nc3".parse().unwrap()));
        let (utterance, _) = session.last_command().unwrap();
        assert_eq!(utterance, "knight to c3");
    }

    #[test]
    fn test_falls_back_to_first_rejected() {
        let mut session = session(None);
        let response = session
            .handle_utterance(&hyps(&["knight", "knight to e5", "bishop to e5"]))
            .unwrap();

        assert_eq!(response, Response::Rejected);
        assert_eq!(
            session.speaker().spoken,
            vec!["The command knight to e5 does not match any legal moves."]
        );
        assert!(session.game().history().is_empty());
    }

    #[test]
    fn test_ambiguous_leaves_board() {
        let mut session = session(Some("4k3/8/8/8/8/2N3N1/8/4K3 w - - 0 1"));
        let response = session.handle_utterance(&hyps(&["knight e4"])).unwrap();

        assert_eq!(response, Response::Ambiguous);
        assert!(session.game().history().is_empty());

        let response = session.handle_utterance(&hyps(&["why"])).unwrap();
        match response {
            Response::Explained(sentences) => {
                assert_eq!(sentences[0], "Legal moves fully matching knight e4 include:");
                assert_eq!(sentences.len(), 3);
                assert!(sentences.contains(&"knight c e4".to_string()));
                assert!(sentences.contains(&"knight g e4".to_string()));
            }
            other => panic!("expected explanation, got {other:?}"),
        }
    }

    #[test]
    fn test_not_understood() {
        let mut session = session(None);
        let response = session.handle_utterance(&hyps(&["hello there", "knight"])).unwrap();
        assert_eq!(response, Response::NotUnderstood);
        assert_eq!(session.speaker().spoken, vec![NOT_UNDERSTOOD]);
    }

    #[test]
    fn test_takes_without_history() {
        let mut session = session(None);
        let response = session.handle_utterance(&hyps(&["takes"])).unwrap();
        assert_eq!(response, Response::NotUnderstood);
        assert_eq!(session.speaker().spoken, vec![ParseError::NoPreviousMove.to_string()]);
    }

    #[test]
    fn test_why_before_anything() {
        let mut session = session(None);
        session.handle_utterance(&hyps(&["why"])).unwrap();
        assert_eq!(session.speaker().spoken, vec![NOTHING_TO_EXPLAIN]);
    }

    #[test]
    fn test_why_after_rejected_castle() {
        let mut session = session(None);
        assert_eq!(session.handle_utterance(&hyps(&["castle"])).unwrap(), Response::Rejected);
        assert_eq!(
            session.handle_utterance(&hyps(&["why"])).unwrap(),
            Response::Explained(vec![CASTLE_BLOCKED.to_string()])
        );
    }

    #[test]
    fn test_why_after_pinned_capture() {
        let mut session = session(Some("k3r3/8/8/8/8/2p5/4N3/4K3 w - - 0 1"));
        session.handle_utterance(&hyps(&["knight takes c3"])).unwrap();
        session.handle_utterance(&hyps(&["why"])).unwrap();
        assert_eq!(
            session.speaker().spoken.last().unwrap(),
            &format!("{PINNED} the knight on e2 to c3.")
        );
    }

    #[test]
    fn test_why_after_quiet_reject() {
        let mut session = session(None);
        session.handle_utterance(&hyps(&["rook to a3"])).unwrap();
        session.handle_utterance(&hyps(&["why"])).unwrap();
        assert_eq!(session.speaker().spoken.last().unwrap(), CANNOT_SAY_MORE);
    }

    #[test]
    fn test_take_last_moved_piece() {
        let mut session = session(None);
        session.handle_utterance(&hyps(&["e4"])).unwrap();
        session.handle_utterance(&hyps(&["d5"])).unwrap();
        let response = session.handle_utterance(&hyps(&["takes"])).unwrap();

        assert_eq!(response, Response::Executed("exd5".parse().unwrap()));
        assert_eq!(session.speaker().spoken.last().unwrap(), "e takes d5");
    }
}
