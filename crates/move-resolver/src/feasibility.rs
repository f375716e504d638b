//! Geometric feasibility of a move and the pieces standing in its way.

use shakmaty::{attacks, Bitboard, Board, Color, Piece, Rank, Role, Square};

/// Could `piece` get from `from` to `to` in one move on an otherwise empty board?
///
/// Pawns move differently from how they capture, so their reach is the
/// forward push (two squares from the home rank) plus the capture diagonals.
/// Every other piece is placed alone on an empty board and asked what it attacks.
pub fn is_possible_move(piece: Piece, from: Square, to: Square) -> bool {
    if piece.role == Role::Pawn {
        return pawn_reach(piece.color, from).contains(to);
    }

    let mut empty = Board::empty();
    empty.set_piece_at(from, piece);
    empty.attacks_from(from).contains(to)
}

fn pawn_reach(color: Color, from: Square) -> Bitboard {
    let mut reach = attacks::pawn_attacks(color, from);

    let (step, home) = match color {
        Color::White => (1, Rank::Second),
        Color::Black => (-1, Rank::Seventh),
    };

    if let Some(one) = forward(from, step) {
        reach.add(one);
        if from.rank() == home {
            if let Some(two) = forward(from, 2 * step) {
                reach.add(two);
            }
        }
    }

    reach
}

fn forward(from: Square, ranks: i32) -> Option<Square> {
    let rank = from.rank() as i32 + ranks;
    (0..8)
        .contains(&rank)
        .then(|| Square::from_coords(from.file(), Rank::new(rank as u32)))
}

/// Squares holding pieces that stop the piece on `from` reaching `to`.
///
/// Includes `to` itself when it holds a piece of the mover's color. Empty
/// when the move is not geometrically possible in the first place.
pub fn blocking_squares(board: &Board, from: Square, to: Square) -> Bitboard {
    let mut blocking = Bitboard::EMPTY;

    let Some(from_piece) = board.piece_at(from) else {
        return blocking;
    };
    if !is_possible_move(from_piece, from, to) {
        return blocking;
    }

    for square in attacks::between(from, to) {
        if board.piece_at(square).is_some() {
            blocking.add(square);
        }
    }

    if let Some(to_piece) = board.piece_at(to) {
        if to_piece.color == from_piece.color {
            blocking.add(to);
        }
    }

    blocking
}
