//! Rules-engine queries the resolver needs that shakmaty does not answer
//! in a single call: legal-move lookup by squares, attack and pin tests,
//! and parsing of the two castling notations.

use shakmaty::{
    attacks, san::San, Bitboard, Board, CastlingSide, Chess, Color, File, Move, Position, Rank,
    Role, Square,
};

/// Square the moving piece ends up on. shakmaty encodes castling as
/// king-takes-rook, so the king's real destination is derived here.
pub fn destination(mv: &Move) -> Square {
    match mv {
        Move::Castle { king, rook } => {
            let file = if rook.file() > king.file() { File::G } else { File::C };
            Square::from_coords(file, king.rank())
        }
        _ => mv.to(),
    }
}

/// Find the legal move from `from` to `to` with the given promotion.
///
/// A pawn reaching the back rank with no promotion requested promotes to a
/// queen. Castling is found by the king's origin and destination squares.
pub fn find_move(pos: &Chess, from: Square, to: Square, promotion: Option<Role>) -> Option<Move> {
    let promotion = promotion.or_else(|| {
        let pawn_on_origin = pos.board().piece_at(from).map(|p| p.role) == Some(Role::Pawn);
        let back_rank = matches!(to.rank(), Rank::First | Rank::Eighth);
        (pawn_on_origin && back_rank).then_some(Role::Queen)
    });

    pos.legal_moves().into_iter().find(|mv| {
        mv.from() == Some(from) && destination(mv) == to && mv.promotion() == promotion
    })
}

/// Parse "O-O" or "O-O-O" against the position. None if not legal.
pub fn find_castle(pos: &Chess, side: CastlingSide) -> Option<Move> {
    let notation = match side {
        CastlingSide::KingSide => "O-O",
        CastlingSide::QueenSide => "O-O-O",
    };
    let san: San = notation.parse().ok()?;
    san.to_move(pos).ok()
}

/// Is `square` attacked by any piece of `attacker` with the current occupancy?
pub fn is_attacked_by(board: &Board, attacker: Color, square: Square) -> bool {
    board.attacks_to(square, attacker, board.occupied()).any()
}

/// Get the pin ray for the piece of `color` on `square`: the full line
/// through its king and the pinning slider, or None if not pinned.
pub fn pin_ray(board: &Board, color: Color, square: Square) -> Option<Bitboard> {
    let king = board.king_of(color)?;

    // Not on a line with the king (or the king itself): can't be pinned
    let line = attacks::ray(king, square);
    if line.is_empty() || king == square {
        return None;
    }

    let file_diff = (king.file() as i32 - square.file() as i32).abs();
    let rank_diff = (king.rank() as i32 - square.rank() as i32).abs();
    let is_diagonal = file_diff == rank_diff;

    let sliders = if is_diagonal {
        board.by_role(Role::Bishop) | board.by_role(Role::Queen)
    } else {
        board.by_role(Role::Rook) | board.by_role(Role::Queen)
    };
    let pinners = sliders & board.by_color(!color) & line;

    for pinner in pinners {
        // Exactly one piece between king and pinner, and it is ours
        let blockers = attacks::between(king, pinner) & board.occupied();
        if blockers.count() == 1 && blockers.contains(square) {
            return Some(line);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;

    #[test]
    fn test_find_move_standard() {
        let game = Game::new();
        let mv = find_move(game.position(), Square::E2, Square::E4, None).unwrap();
        assert_eq!(mv.role(), Role::Pawn);
        assert!(find_move(game.position(), Square::E2, Square::E5, None).is_none());
        // Promotion requested on a non-promoting move
        assert!(find_move(game.position(), Square::E2, Square::E4, Some(Role::Queen)).is_none());
    }

    #[test]
    fn test_find_move_defaults_to_queen_promotion() {
        let game = Game::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let mv = find_move(game.position(), Square::A7, Square::A8, None).unwrap();
        assert_eq!(mv.promotion(), Some(Role::Queen));

        let knight = find_move(game.position(), Square::A7, Square::A8, Some(Role::Knight)).unwrap();
        assert_eq!(knight.promotion(), Some(Role::Knight));
    }

    #[test]
    fn test_find_move_castles_by_king_squares() {
        let game = Game::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
        let mv = find_move(game.position(), Square::E1, Square::G1, None).unwrap();
        assert!(mv.is_castle());
        assert_eq!(destination(&mv), Square::G1);
        assert_eq!(find_castle(game.position(), CastlingSide::KingSide), Some(mv));
        assert!(find_castle(game.position(), CastlingSide::QueenSide).is_none());
    }

    #[test]
    fn test_pin_ray() {
        // White knight on e2 pinned by the rook on e8
        let game = Game::from_fen("k3r3/8/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
        let board = game.position().board();
        let ray = pin_ray(board, Color::White, Square::E2).unwrap();
        assert!(ray.contains(Square::E8));
        assert!(pin_ray(board, Color::White, Square::E1).is_none());

        // A second blocker breaks the pin
        let game = Game::from_fen("k3r3/8/8/4p3/8/8/4N3/4K3 w - - 0 1").unwrap();
        assert!(pin_ray(game.position().board(), Color::White, Square::E2).is_none());
    }

    #[test]
    fn test_is_attacked_by() {
        let game = Game::new();
        let board = game.position().board();
        assert!(is_attacked_by(board, Color::White, Square::F3));
        assert!(!is_attacked_by(board, Color::Black, Square::F3));
        assert!(is_attacked_by(board, Color::Black, Square::F6));
    }
}
