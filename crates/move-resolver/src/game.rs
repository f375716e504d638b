//! The board resource: a shakmaty position plus the moves played on it.
//! shakmaty keeps no history, so the last move is tracked here.

use shakmaty::{fen::Fen, CastlingMode, Chess, Color, Move, Position};

use crate::error::GameError;

#[derive(Debug, Clone, Default)]
pub struct Game {
    position: Chess,
    history: Vec<Move>,
}

impl Game {
    /// Standard starting position, no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set up a game from a FEN string. History starts empty.
    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        let fen: Fen = fen
            .trim()
            .parse()
            .map_err(|e| GameError::InvalidFen(format!("{fen}: {e}")))?;
        let position: Chess = fen
            .into_position(CastlingMode::Standard)
            .map_err(|e| GameError::InvalidFen(e.to_string()))?;

        Ok(Self {
            position,
            history: Vec::new(),
        })
    }

    pub fn position(&self) -> &Chess {
        &self.position
    }

    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Play a move on the board. This is the only mutation of the game state.
    pub fn push(&mut self, mv: &Move) -> Result<(), GameError> {
        if !self.position.is_legal(*mv) {
            return Err(GameError::IllegalMove(format!("{mv:?}")));
        }
        self.position.play_unchecked(*mv);
        self.history.push(*mv);
        Ok(())
    }
}
