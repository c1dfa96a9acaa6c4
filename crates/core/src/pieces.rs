//! Pieces module - SRS rotation with wall kicks
//!
//! Implements the Super Rotation System kick search. Reference: https://tetris.wiki/SRS
//!
//! Kick data is stored in board coordinates, where y grows downward, so every vertical
//! offset is the negation of the value printed in the usual y-up tables.

use crate::board::Board;
use crate::game_state::Tetromino;
use crate::types::{PieceKind, Rotation};

/// SRS wall kick data
/// Each row holds five (dx, dy) candidates tried in order; the first is always (0, 0)
pub type KickTable = [[(i8, i8); 5]; 8];

/// Kick table shared by J, L, S, T, Z (and harmlessly by O)
///
/// Rows: N→E, E→N, E→S, S→E, S→W, W→S, W→N, N→W
pub const JLSTZ_KICKS: KickTable = [
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
];

/// I piece kick table
///
/// Rows: N→E, E→N, E→S, S→E, S→W, W→S, W→N, N→W
pub const I_KICKS: KickTable = [
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
];

/// Get kick table for a piece kind
pub fn get_kick_table(kind: PieceKind) -> &'static KickTable {
    match kind {
        PieceKind::I => &I_KICKS,
        _ => &JLSTZ_KICKS,
    }
}

/// Row of the kick table for rotating away from `from`.
///
/// Clockwise turns from orientation `n` land on even rows (`2n`), counter-clockwise turns
/// on the odd row just before them.
pub fn get_kick_index(from: Rotation, clockwise: bool) -> usize {
    let even = from.index() * 2;
    if clockwise {
        even
    } else {
        (even + 7) % 8
    }
}

/// Kick offset that makes the rotation legal, without applying it.
///
/// Returns `None` for a direction other than ±1 or when every candidate collides.
pub fn find_kick(board: &Board, piece: &Tetromino, direction: i32) -> Option<(i8, i8)> {
    let clockwise = match direction {
        1 => true,
        -1 => false,
        _ => return None,
    };

    let kicks = &get_kick_table(piece.kind)[get_kick_index(piece.rotation, clockwise)];
    kicks
        .iter()
        .copied()
        .find(|&(dx, dy)| !board.would_collide(piece, dx, dy, direction))
}

/// Try to rotate a piece with wall kicks (`direction` is +1 for right, -1 for left)
///
/// Candidates are tried in table order and the first legal one is committed. Returns
/// false and leaves the piece untouched when none fits.
pub fn try_rotate(board: &Board, piece: &mut Tetromino, direction: i32) -> bool {
    let Some((dx, dy)) = find_kick(board, piece, direction) else {
        return false;
    };

    piece.x += dx;
    piece.y += dy;
    piece.rotation = piece.rotation.turned(direction);
    true
}
