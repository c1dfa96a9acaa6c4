//! Board module - the playing field, collision detection and line clearing
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of the piece that
//! settled there. Storage is a flat row-major array.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).

use crate::game_state::Tetromino;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_none()
    }

    fn row(&self, y: usize) -> &[Cell] {
        let start = y * BOARD_WIDTH as usize;
        &self.cells[start..start + BOARD_WIDTH as usize]
    }

    /// Number of occupied cells in a row (0 for rows outside the board)
    pub fn row_fill_count(&self, y: usize) -> usize {
        if y >= BOARD_HEIGHT as usize {
            return 0;
        }
        self.row(y).iter().filter(|cell| cell.is_some()).count()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row_fill_count(y) >= BOARD_WIDTH as usize
    }

    /// Would `piece` collide after translating by `(dx, dy)` and turning `d_rotation`
    /// quarter turns (positive = clockwise)?
    ///
    /// A pose collides when any of its blocks lies outside the board or on an occupied
    /// cell. Purely hypothetical: neither the board nor the piece is modified. Offsets of
    /// any size are accepted; poses that leave the `i8` range simply collide.
    pub fn would_collide(&self, piece: &Tetromino, dx: i8, dy: i8, d_rotation: i32) -> bool {
        let rotation = piece.rotation.turned(d_rotation);
        let x = i16::from(piece.x) + i16::from(dx);
        let y = i16::from(piece.y) + i16::from(dy);

        piece.shape().cells(rotation).iter().any(|&(col, row)| {
            let cx = i8::try_from(x + i16::from(col));
            let cy = i8::try_from(y + i16::from(row));
            match (cx, cy) {
                (Ok(cx), Ok(cy)) => !self.is_valid(cx, cy),
                _ => true,
            }
        })
    }

    /// Remove the lowest contiguous span of full rows and drop everything above it.
    ///
    /// Two row pointers start at the bottom (`bottom = height-1`, `top = height-2`) and
    /// slide upward until `bottom` sits on a full row and `top` on the first non-full row
    /// above it. Returns the number of rows removed (0 when no span exists).
    /// A span that ends on row 0 has nothing above it and is left in place.
    pub fn clear_lines(&mut self) -> usize {
        let mut bottom = BOARD_HEIGHT as i32 - 1;
        let mut top = BOARD_HEIGHT as i32 - 2;
        let mut span_end = None;

        while top >= 0 && top < bottom {
            let top_full = self.is_row_full(top as usize);
            let bottom_full = self.is_row_full(bottom as usize);

            if !top_full && !bottom_full {
                top -= 1;
                bottom -= 1;
                continue;
            }

            if top_full {
                top -= 1;
                if !bottom_full {
                    bottom -= 1;
                }
            } else {
                span_end = Some(bottom);
                break;
            }
        }

        // Ran off the top while extending a span: every row in [0, bottom] is full.
        if span_end.is_none() && top < 0 && self.is_row_full(bottom as usize) {
            span_end = Some(bottom);
        }

        let Some(bottom) = span_end else {
            return 0;
        };
        if bottom == 0 {
            return 0;
        }

        let cleared = (bottom - top) as usize;
        let first_cleared = (top + 1) as usize;
        self.drop_rows(first_cleared, cleared);
        cleared
    }

    /// Move rows `[0, above)` down by `amount` rows and empty the exposed top rows.
    ///
    /// Overwrites the `amount` rows starting at `above`.
    fn drop_rows(&mut self, above: usize, amount: usize) {
        let width = BOARD_WIDTH as usize;

        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..above * width, amount * width);

        for cell in &mut self.cells[..amount * width] {
            *cell = None;
        }
    }

    /// Write every block of `piece` into the board
    /// Returns false (and leaves the board unchanged) if the pose collides
    pub fn lock_piece(&mut self, piece: &Tetromino) -> bool {
        if self.would_collide(piece, 0, 0, 0) {
            return false;
        }

        for &(col, row) in piece.cells() {
            self.set(piece.x + col, piece.y + row, Some(piece.kind));
        }

        true
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the board as identifiers (0 = empty, 1..=7 = piece kind)
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, value) in row.iter_mut().enumerate() {
                *value = self.cells[y * BOARD_WIDTH as usize + x].map_or(0, |kind| kind.id());
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, Rotation};

    fn fill_row(board: &mut Board, y: i8) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, Some(PieceKind::I));
        }
    }

    fn piece(kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> Tetromino {
        Tetromino {
            kind,
            rotation,
            x,
            y,
            lock_deadline_ms: None,
        }
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_would_collide_uses_offsets() {
        let mut board = Board::new();
        let t = piece(PieceKind::T, Rotation::North, 3, 10);

        assert!(!board.would_collide(&t, 0, 0, 0));
        // North T occupies (4,10) and (3..=5, 11); one row down touches (4, 12)
        board.set(4, 12, Some(PieceKind::O));
        assert!(board.would_collide(&t, 0, 1, 0));
        assert!(!board.would_collide(&t, 0, 0, 0));
    }

    #[test]
    fn test_would_collide_negative_rotation_wraps() {
        let board = Board::new();
        // At x=-1 only the East T (bitmap columns 1-2) stays inside the left wall.
        let t = piece(PieceKind::T, Rotation::North, -1, 5);
        assert!(board.would_collide(&t, 0, 0, 0));
        assert!(board.would_collide(&t, 0, 0, -1));
        assert!(!board.would_collide(&t, 0, 0, 1));
        assert!(!board.would_collide(&t, 0, 0, -3));
        assert!(!board.would_collide(&t, 0, 0, 5));
    }

    #[test]
    fn test_would_collide_extreme_offsets() {
        let board = Board::new();
        let t = piece(PieceKind::T, Rotation::North, 3, 0);

        assert!(board.would_collide(&t, 125, 0, 0));
        assert!(board.would_collide(&t, i8::MAX, i8::MAX, 0));
        assert!(board.would_collide(&t, i8::MIN, i8::MIN, 0));

        let corner = piece(PieceKind::T, Rotation::North, i8::MAX, i8::MIN);
        assert!(board.would_collide(&corner, i8::MAX, i8::MIN, 0));

        // huge rotation deltas still reduce to a quarter-turn count
        assert!(!board.would_collide(&t, 0, 0, i32::MAX));
        assert!(!board.would_collide(&t, 0, 0, i32::MIN));
    }

    #[test]
    fn test_clear_single_bottom_row() {
        let mut board = Board::new();
        fill_row(&mut board, 19);

        assert_eq!(board.clear_lines(), 1);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_clear_lines_compacts_rows_above() {
        let mut board = Board::new();
        fill_row(&mut board, 19);
        board.set(3, 18, Some(PieceKind::T));

        assert_eq!(board.clear_lines(), 1);
        assert_eq!(board.get(3, 19), Some(Some(PieceKind::T)));
        assert_eq!(board.row_fill_count(19), 1);
        for y in 0..19 {
            assert_eq!(board.row_fill_count(y), 0, "row {} should be empty", y);
        }
    }

    #[test]
    fn test_clear_lines_skips_gap_above_partial_row() {
        let mut board = Board::new();
        // row 19 partial, row 18 full, row 17 partial
        board.set(0, 19, Some(PieceKind::J));
        fill_row(&mut board, 18);
        board.set(5, 17, Some(PieceKind::L));

        assert_eq!(board.clear_lines(), 1);
        assert_eq!(board.get(0, 19), Some(Some(PieceKind::J)));
        assert_eq!(board.get(5, 18), Some(Some(PieceKind::L)));
        assert_eq!(board.row_fill_count(18), 1);
    }

    #[test]
    fn test_clear_lines_takes_lowest_span_only() {
        let mut board = Board::new();
        fill_row(&mut board, 19);
        board.set(2, 18, Some(PieceKind::S));
        fill_row(&mut board, 17);

        assert_eq!(board.clear_lines(), 1);
        // the upper full row is now at 18, the partial row at 19
        assert!(board.is_row_full(18));
        assert_eq!(board.get(2, 19), Some(Some(PieceKind::S)));

        assert_eq!(board.clear_lines(), 1);
        assert_eq!(board.get(2, 19), Some(Some(PieceKind::S)));
        assert_eq!(board.row_fill_count(18), 0);
        assert_eq!(board.clear_lines(), 0);
    }

    #[test]
    fn test_clear_more_than_four_rows() {
        let mut board = Board::new();
        for y in 14..20 {
            fill_row(&mut board, y);
        }
        board.set(7, 13, Some(PieceKind::Z));

        assert_eq!(board.clear_lines(), 6);
        assert_eq!(board.get(7, 19), Some(Some(PieceKind::Z)));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 1);
    }

    #[test]
    fn test_clear_span_reaching_top_row() {
        let mut board = Board::new();
        for y in 0..20 {
            fill_row(&mut board, y);
        }

        assert_eq!(board.clear_lines(), 20);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_full_top_row_alone_is_left_in_place() {
        let mut board = Board::new();
        fill_row(&mut board, 0);

        assert_eq!(board.clear_lines(), 0);
        assert!(board.is_row_full(0));
    }

    #[test]
    fn test_lock_piece_writes_kind() {
        let mut board = Board::new();
        let o = piece(PieceKind::O, Rotation::North, 3, 18);

        assert!(board.lock_piece(&o));
        for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
            assert_eq!(board.get(x, y), Some(Some(PieceKind::O)));
        }
        assert!(!board.lock_piece(&o));
    }

    #[test]
    fn test_write_u8_grid() {
        let mut board = Board::new();
        board.set(0, 0, Some(PieceKind::I));
        board.set(9, 19, Some(PieceKind::J));

        let mut grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        board.write_u8_grid(&mut grid);
        assert_eq!(grid[0][0], PieceKind::I.id());
        assert_eq!(grid[19][9], PieceKind::J.id());
        assert_eq!(grid[10][5], 0);
    }
}
