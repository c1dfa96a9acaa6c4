//! Pieces module tests - shape catalog and SRS rotation

use blockfall::core::pieces::{find_kick, get_kick_table, try_rotate, I_KICKS, JLSTZ_KICKS};
use blockfall::core::{get_shape, Board, Tetromino};
use blockfall::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

fn piece(kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> Tetromino {
    Tetromino {
        kind,
        rotation,
        x,
        y,
        lock_deadline_ms: None,
    }
}

// ============== Shape Tests ==============

#[test]
fn test_i_piece_shapes() {
    let north = get_shape(PieceKind::I, Rotation::North);
    assert_eq!(north, [(0, 1), (1, 1), (2, 1), (3, 1)]);

    let east = get_shape(PieceKind::I, Rotation::East);
    assert_eq!(east, [(2, 0), (2, 1), (2, 2), (2, 3)]);

    let south = get_shape(PieceKind::I, Rotation::South);
    assert_eq!(south, [(0, 2), (1, 2), (2, 2), (3, 2)]);

    let west = get_shape(PieceKind::I, Rotation::West);
    assert_eq!(west, [(1, 0), (1, 1), (1, 2), (1, 3)]);
}

#[test]
fn test_o_piece_shapes() {
    // O piece is the same for all rotations
    let north = get_shape(PieceKind::O, Rotation::North);
    let east = get_shape(PieceKind::O, Rotation::East);
    let south = get_shape(PieceKind::O, Rotation::South);
    let west = get_shape(PieceKind::O, Rotation::West);

    assert_eq!(north, [(1, 0), (2, 0), (1, 1), (2, 1)]);
    assert_eq!(east, north);
    assert_eq!(south, north);
    assert_eq!(west, north);
}

#[test]
fn test_t_piece_shapes() {
    let north = get_shape(PieceKind::T, Rotation::North);
    assert_eq!(north, [(1, 0), (0, 1), (1, 1), (2, 1)]);

    let east = get_shape(PieceKind::T, Rotation::East);
    assert_eq!(east, [(1, 0), (1, 1), (2, 1), (1, 2)]);

    let south = get_shape(PieceKind::T, Rotation::South);
    assert_eq!(south, [(0, 1), (1, 1), (2, 1), (1, 2)]);

    let west = get_shape(PieceKind::T, Rotation::West);
    assert_eq!(west, [(1, 0), (0, 1), (1, 1), (1, 2)]);
}

#[test]
fn test_s_piece_shapes() {
    let north = get_shape(PieceKind::S, Rotation::North);
    assert_eq!(north, [(1, 0), (2, 0), (0, 1), (1, 1)]);

    let east = get_shape(PieceKind::S, Rotation::East);
    assert_eq!(east, [(1, 0), (1, 1), (2, 1), (2, 2)]);
}

#[test]
fn test_z_piece_shapes() {
    let north = get_shape(PieceKind::Z, Rotation::North);
    assert_eq!(north, [(0, 0), (1, 0), (1, 1), (2, 1)]);

    let east = get_shape(PieceKind::Z, Rotation::East);
    assert_eq!(east, [(2, 0), (1, 1), (2, 1), (1, 2)]);
}

#[test]
fn test_j_piece_shapes() {
    let north = get_shape(PieceKind::J, Rotation::North);
    assert_eq!(north, [(0, 0), (0, 1), (1, 1), (2, 1)]);

    let east = get_shape(PieceKind::J, Rotation::East);
    assert_eq!(east, [(1, 0), (2, 0), (1, 1), (1, 2)]);
}

#[test]
fn test_l_piece_shapes() {
    let north = get_shape(PieceKind::L, Rotation::North);
    assert_eq!(north, [(2, 0), (0, 1), (1, 1), (2, 1)]);

    let east = get_shape(PieceKind::L, Rotation::East);
    assert_eq!(east, [(1, 0), (1, 1), (1, 2), (2, 2)]);
}

#[test]
fn test_spawn_pose() {
    let t = Tetromino::new(PieceKind::T);
    assert_eq!((t.x, t.y, t.rotation), (3, 0, Rotation::North));

    // I sits one row higher so its blocks land on row 0
    let i = Tetromino::new(PieceKind::I);
    assert_eq!((i.x, i.y), (3, -1));
    for (_, row) in i.cells() {
        assert_eq!(i.y + row, 0);
    }
}

// ============== SRS Rotation Tests ==============

#[test]
fn test_t_rotation_success() {
    let board = Board::new();
    let mut t = piece(PieceKind::T, Rotation::North, 3, 0);

    assert!(try_rotate(&board, &mut t, 1));
    assert_eq!(t.rotation, Rotation::East);
    assert_eq!(*t.cells(), get_shape(PieceKind::T, Rotation::East));
    // Should succeed without kick on empty board
    assert_eq!((t.x, t.y), (3, 0));
}

#[test]
fn test_t_rotation_with_kick() {
    let mut board = Board::new();
    // East T at (3, 5) would cover (4, 5), (4, 6), (5, 6), (4, 7); block one of them
    board.set(4, 6, Some(PieceKind::Z));
    let mut t = piece(PieceKind::T, Rotation::North, 3, 5);

    // (-1, 0) still hits (4, 6); (-1, -1) is the first that fits
    assert_eq!(find_kick(&board, &t, 1), Some((-1, -1)));
    assert!(try_rotate(&board, &mut t, 1));
    assert_eq!((t.x, t.y, t.rotation), (2, 4, Rotation::East));
}

#[test]
fn test_t_kicks_off_left_wall() {
    let board = Board::new();
    // East T hugging the left wall; South needs column -1
    let mut t = piece(PieceKind::T, Rotation::East, -1, 5);

    assert!(try_rotate(&board, &mut t, 1));
    assert_eq!((t.x, t.y, t.rotation), (0, 5, Rotation::South));
}

#[test]
fn test_i_kicks_off_right_wall() {
    let board = Board::new();
    // East I in column 9; South spans bitmap columns 0-3
    let mut i = piece(PieceKind::I, Rotation::East, 7, 5);

    assert!(try_rotate(&board, &mut i, 1));
    assert_eq!((i.x, i.y, i.rotation), (6, 5, Rotation::South));
    assert!(i.is_valid(&board));
}

#[test]
fn test_t_rotation_failure() {
    let mut board = Board::new();
    let mut t = piece(PieceKind::T, Rotation::North, 3, 10);
    // Fill everything except the piece's own cells
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, Some(PieceKind::J));
        }
    }
    for &(col, row) in t.cells() {
        board.set(t.x + col, t.y + row, None);
    }
    let before = t;

    assert!(!try_rotate(&board, &mut t, 1));
    assert!(!try_rotate(&board, &mut t, -1));
    assert_eq!(t, before);
}

#[test]
fn test_o_rotation_no_kick() {
    let board = Board::new();
    let mut o = piece(PieceKind::O, Rotation::North, 3, 0);

    assert!(try_rotate(&board, &mut o, 1));
    assert_eq!(o.rotation, Rotation::East);
    assert_eq!((o.x, o.y), (3, 0));
    assert_eq!(*o.cells(), get_shape(PieceKind::O, Rotation::North));
}

#[test]
fn test_i_rotation_offsets() {
    let board = Board::new();
    let mut i = piece(PieceKind::I, Rotation::North, 3, 5);

    assert!(try_rotate(&board, &mut i, 1));
    assert_eq!(i.rotation, Rotation::East);
    assert_eq!(*i.cells(), get_shape(PieceKind::I, Rotation::East));
}

#[test]
fn test_ccw_rotation() {
    let board = Board::new();
    let mut t = piece(PieceKind::T, Rotation::North, 3, 5);

    assert!(try_rotate(&board, &mut t, -1));
    assert_eq!(t.rotation, Rotation::West);
    assert!(try_rotate(&board, &mut t, -1));
    assert_eq!(t.rotation, Rotation::South);
}

#[test]
fn test_rotation_is_deterministic() {
    let mut board = Board::new();
    board.set(4, 6, Some(PieceKind::Z));
    let t = piece(PieceKind::T, Rotation::North, 3, 5);

    let first = find_kick(&board, &t, 1);
    for _ in 0..10 {
        assert_eq!(find_kick(&board, &t, 1), first);
    }
}

#[test]
fn test_kick_table_consistency() {
    // JLSTZ and O share one table
    for kind in [
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
        PieceKind::O,
    ] {
        assert_eq!(get_kick_table(kind), &JLSTZ_KICKS);
    }

    assert_eq!(get_kick_table(PieceKind::I), &I_KICKS);
    assert_ne!(I_KICKS, JLSTZ_KICKS);
}

#[test]
fn test_kick_rows_mirror_their_reverse() {
    // Row 2k+1 undoes row 2k (e.g. E->N negates N->E)
    for table in [&JLSTZ_KICKS, &I_KICKS] {
        for (forward, back) in [(0, 1), (2, 3), (4, 5), (6, 7)] {
            for k in 0..5 {
                let (dx, dy) = table[forward][k];
                assert_eq!(table[back][k], (-dx, -dy));
            }
        }
    }
}

// ============== Shape Consistency Tests ==============

#[test]
fn test_shape_bounds_reasonable() {
    for kind in PieceKind::ALL {
        for rotation in [
            Rotation::North,
            Rotation::East,
            Rotation::South,
            Rotation::West,
        ] {
            let shape = get_shape(kind, rotation);
            for (x, y) in shape.iter() {
                assert!(*x >= 0 && *x <= 3, "Shape coordinate out of bounds");
                assert!(*y >= 0 && *y <= 3, "Shape coordinate out of bounds");
            }
        }
    }
}
