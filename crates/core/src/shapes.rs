//! Shape catalog - the seven tetrominoes and their four orientation bitmaps
//!
//! Every orientation is a 4x4 bitmap laid out per the Super Rotation System: the I piece
//! sits on row 1 when facing North, the O piece occupies columns 1-2, and the remaining
//! kinds live in the top-left 3x3 box. The table is built in a `const` context, so a
//! bitmap that does not contain exactly four blocks fails the build.

use crate::types::{PieceKind, Rotation};

/// Side length of every orientation bitmap
pub const SHAPE_SIZE: usize = 4;

/// Occupancy grid indexed `[row][col]`
pub type Bitmap = [[bool; SHAPE_SIZE]; SHAPE_SIZE];

/// Offset of a single mino relative to the bitmap's top-left cell, as `(col, row)`
pub type MinoOffset = (i8, i8);

/// The four mino offsets of one orientation
pub type PieceShape = [MinoOffset; 4];

/// Immutable catalog entry for one piece kind
#[derive(Debug, PartialEq, Eq)]
pub struct Shape {
    kind: PieceKind,
    bitmaps: [Bitmap; 4],
    offsets: [PieceShape; 4],
}

impl Shape {
    const fn new(kind: PieceKind, rows: [[&[u8; SHAPE_SIZE]; SHAPE_SIZE]; 4]) -> Self {
        let bitmaps = [
            parse_bitmap(rows[0]),
            parse_bitmap(rows[1]),
            parse_bitmap(rows[2]),
            parse_bitmap(rows[3]),
        ];
        let offsets = [
            bitmap_offsets(&bitmaps[0]),
            bitmap_offsets(&bitmaps[1]),
            bitmap_offsets(&bitmaps[2]),
            bitmap_offsets(&bitmaps[3]),
        ];
        Self {
            kind,
            bitmaps,
            offsets,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Occupancy bitmap for an orientation
    pub fn bitmap(&self, rotation: Rotation) -> &Bitmap {
        &self.bitmaps[rotation.index()]
    }

    /// Occupied `(col, row)` offsets for an orientation, in row-major order
    pub fn cells(&self, rotation: Rotation) -> &PieceShape {
        &self.offsets[rotation.index()]
    }
}

const fn parse_bitmap(rows: [&[u8; SHAPE_SIZE]; SHAPE_SIZE]) -> Bitmap {
    let mut bitmap = [[false; SHAPE_SIZE]; SHAPE_SIZE];
    let mut row = 0;
    while row < SHAPE_SIZE {
        let mut col = 0;
        while col < SHAPE_SIZE {
            bitmap[row][col] = match rows[row][col] {
                b'#' => true,
                b'.' => false,
                _ => panic!("shape bitmaps may only contain '#' and '.'"),
            };
            col += 1;
        }
        row += 1;
    }
    bitmap
}

const fn bitmap_offsets(bitmap: &Bitmap) -> PieceShape {
    let mut offsets = [(0i8, 0i8); 4];
    let mut count = 0;
    let mut row = 0;
    while row < SHAPE_SIZE {
        let mut col = 0;
        while col < SHAPE_SIZE {
            if bitmap[row][col] {
                if count == 4 {
                    panic!("shape bitmap has more than four blocks");
                }
                offsets[count] = (col as i8, row as i8);
                count += 1;
            }
            col += 1;
        }
        row += 1;
    }
    if count != 4 {
        panic!("shape bitmap has fewer than four blocks");
    }
    offsets
}

/// Catalog indexed by [`PieceKind::index`]
static SHAPES: [Shape; 7] = [
    Shape::new(
        PieceKind::I,
        [
            [b"....", b"####", b"....", b"...."],
            [b"..#.", b"..#.", b"..#.", b"..#."],
            [b"....", b"....", b"####", b"...."],
            [b".#..", b".#..", b".#..", b".#.."],
        ],
    ),
    Shape::new(
        PieceKind::O,
        [
            [b".##.", b".##.", b"....", b"...."],
            [b".##.", b".##.", b"....", b"...."],
            [b".##.", b".##.", b"....", b"...."],
            [b".##.", b".##.", b"....", b"...."],
        ],
    ),
    Shape::new(
        PieceKind::T,
        [
            [b".#..", b"###.", b"....", b"...."],
            [b".#..", b".##.", b".#..", b"...."],
            [b"....", b"###.", b".#..", b"...."],
            [b".#..", b"##..", b".#..", b"...."],
        ],
    ),
    Shape::new(
        PieceKind::Z,
        [
            [b"##..", b".##.", b"....", b"...."],
            [b"..#.", b".##.", b".#..", b"...."],
            [b"....", b"##..", b".##.", b"...."],
            [b".#..", b"##..", b"#...", b"...."],
        ],
    ),
    Shape::new(
        PieceKind::S,
        [
            [b".##.", b"##..", b"....", b"...."],
            [b".#..", b".##.", b"..#.", b"...."],
            [b"....", b".##.", b"##..", b"...."],
            [b"#...", b"##..", b".#..", b"...."],
        ],
    ),
    Shape::new(
        PieceKind::L,
        [
            [b"..#.", b"###.", b"....", b"...."],
            [b".#..", b".#..", b".##.", b"...."],
            [b"....", b"###.", b"#...", b"...."],
            [b"##..", b".#..", b".#..", b"...."],
        ],
    ),
    Shape::new(
        PieceKind::J,
        [
            [b"#...", b"###.", b"....", b"...."],
            [b".##.", b".#..", b".#..", b"...."],
            [b"....", b"###.", b"..#.", b"...."],
            [b".#..", b".#..", b"##..", b"...."],
        ],
    ),
];

/// Look up the shared catalog entry for a piece kind
pub fn shape_of(kind: PieceKind) -> &'static Shape {
    &SHAPES[kind.index()]
}

/// Get the mino offsets for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    *shape_of(kind).cells(rotation)
}
