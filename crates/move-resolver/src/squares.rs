//! Square specifications: the partial "which square" descriptions heard in a
//! spoken command, and their resolution to concrete board squares.

use shakmaty::{Bitboard, Board, Color, File, Rank, Role, Square};

pub const PIECE_WORDS: [(&str, Role); 6] = [
    ("pawn", Role::Pawn),
    ("knight", Role::Knight),
    ("bishop", Role::Bishop),
    ("rook", Role::Rook),
    ("queen", Role::Queen),
    ("king", Role::King),
];

pub const FILE_WORDS: [(&str, File); 8] = [
    ("a", File::A),
    ("b", File::B),
    ("c", File::C),
    ("d", File::D),
    ("e", File::E),
    ("f", File::F),
    ("g", File::G),
    ("h", File::H),
];

// Digits come from compact squares split by the tokenizer
pub const RANK_WORDS: [(&str, Rank); 16] = [
    ("1", Rank::First),
    ("2", Rank::Second),
    ("3", Rank::Third),
    ("4", Rank::Fourth),
    ("5", Rank::Fifth),
    ("6", Rank::Sixth),
    ("7", Rank::Seventh),
    ("8", Rank::Eighth),
    ("one", Rank::First),
    ("two", Rank::Second),
    ("three", Rank::Third),
    ("four", Rank::Fourth),
    ("five", Rank::Fifth),
    ("six", Rank::Sixth),
    ("seven", Rank::Seventh),
    ("eight", Rank::Eighth),
];

pub fn role_from_word(word: &str) -> Option<Role> {
    PIECE_WORDS.iter().find(|(w, _)| *w == word).map(|(_, role)| *role)
}

pub fn file_from_word(word: &str) -> Option<File> {
    FILE_WORDS.iter().find(|(w, _)| *w == word).map(|(_, file)| *file)
}

pub fn rank_from_word(word: &str) -> Option<Rank> {
    RANK_WORDS.iter().find(|(w, _)| *w == word).map(|(_, rank)| *rank)
}

/// Spoken name of a piece kind.
pub fn role_name(role: Role) -> &'static str {
    PIECE_WORDS
        .iter()
        .find(|(_, r)| *r == role)
        .map(|(word, _)| *word)
        .unwrap_or("piece")
}

/// A partial description of a set of squares.
///
/// `color` is always present; it only filters when a piece kind is named
/// (or a bare file implies a pawn). A specification with no piece, file or
/// rank is empty and matches every square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareSpec {
    pub color: Color,
    pub role: Option<Role>,
    pub file: Option<File>,
    pub rank: Option<Rank>,
}

impl SquareSpec {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            role: None,
            file: None,
            rank: None,
        }
    }

    /// Exactly one square, by file and rank.
    pub fn at(color: Color, square: Square) -> Self {
        Self {
            file: Some(square.file()),
            rank: Some(square.rank()),
            ..Self::new(color)
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.role.is_none() && self.file.is_none() && self.rank.is_none()
    }

    /// Find the squares on `board` matching every attribute that is set.
    ///
    /// A bare file is taken to mean a pawn of `color` on that file, since a
    /// spoken "e takes" is a pawn capture and not "anything on the e-file".
    pub fn find_squares(&self, board: &Board) -> Bitboard {
        let file_squares = self.file.map_or(Bitboard::FULL, Bitboard::from_file);

        if self.file.is_some() && self.role.is_none() && self.rank.is_none() {
            let pawns = board.by_color(self.color) & board.by_role(Role::Pawn);
            return pawns & file_squares;
        }

        let piece_squares = self
            .role
            .map_or(Bitboard::FULL, |role| board.by_color(self.color) & board.by_role(role));
        let rank_squares = self.rank.map_or(Bitboard::FULL, Bitboard::from_rank);

        piece_squares & file_squares & rank_squares
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use shakmaty::Position;

    #[test]
    fn test_empty_spec_matches_whole_board() {
        let game = Game::new();
        let spec = SquareSpec::new(Color::White);
        assert!(spec.is_empty());
        assert_eq!(spec.find_squares(game.position().board()).count(), 64);
    }

    #[test]
    fn test_piece_spec_filters_by_color() {
        let game = Game::new();
        let board = game.position().board();

        let white_knights = SquareSpec::new(Color::White).with_role(Role::Knight);
        let squares: Vec<Square> = white_knights.find_squares(board).into_iter().collect();
        assert_eq!(squares, vec![Square::B1, Square::G1]);

        let black_king = SquareSpec::new(Color::Black).with_role(Role::King);
        assert_eq!(
            black_king.find_squares(board).into_iter().collect::<Vec<_>>(),
            vec![Square::E8]
        );
    }

    #[test]
    fn test_bare_file_means_pawn() {
        let game = Game::from_fen("3k4/8/8/8/8/4R3/4P3/4K3 w - - 0 1").unwrap();
        let spec = SquareSpec {
            file: Some(File::E),
            ..SquareSpec::new(Color::White)
        };
        let squares: Vec<Square> = spec.find_squares(game.position().board()).into_iter().collect();
        assert_eq!(squares, vec![Square::E2]);
    }

    #[test]
    fn test_file_and_rank_ignore_occupancy() {
        let game = Game::new();
        let spec = SquareSpec::at(Color::Black, Square::F3);
        let squares: Vec<Square> = spec.find_squares(game.position().board()).into_iter().collect();
        assert_eq!(squares, vec![Square::F3]);

        let rank_only = SquareSpec {
            rank: Some(Rank::Fourth),
            ..SquareSpec::new(Color::White)
        };
        assert_eq!(rank_only.find_squares(game.position().board()).count(), 8);
    }

    #[test]
    fn test_unmatched_spec_is_empty_set() {
        let game = Game::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let spec = SquareSpec::new(Color::White).with_role(Role::Queen);
        assert!(spec.find_squares(game.position().board()).is_empty());
    }

    #[test]
    fn test_words() {
        assert_eq!(role_from_word("knight"), Some(Role::Knight));
        assert_eq!(file_from_word("h"), Some(File::H));
        assert_eq!(rank_from_word("three"), Some(Rank::Third));
        assert_eq!(rank_from_word("3"), Some(Rank::Third));
        assert_eq!(rank_from_word("nine"), None);
        assert_eq!(role_name(Role::Bishop), "bishop");
    }
}
