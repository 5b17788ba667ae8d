use super::{Adjacency, GridExt};

#[test]
fn test_rows() {
    let grid = b"abcd".as_grid(2);
    assert_eq!(grid.rows_len(), 2);
    assert_eq!(grid.columns_len(), 2);
    assert!(grid.rows().eq([&b"ab"[..], &b"cd"[..]]));
    assert_eq!(*grid.get(1, 1), b'd');
}

#[test]
fn test_partial_row_ignored() {
    let grid = b"abcde".as_grid(2);
    assert_eq!(grid.rows_len(), 2);
    assert!(grid.row(2).is_none());
}

#[test]
fn test_empty_grid() {
    let grid = b"".as_grid(0);
    assert_eq!(grid.rows_len(), 0);
    assert!(grid.row(0).is_none());
    assert_eq!(grid.neighbors(0, 0, &Adjacency::MOORE).count(), 0);
}

#[test]
fn test_neighbors_center() {
    let values = [0u8; 9];
    let grid = values.as_grid(3);
    let around = grid.neighbors(1, 1, &Adjacency::MOORE).collect::<Vec<_>>();

    assert_eq!(
        around,
        [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 2),
            (2, 0),
            (2, 1),
            (2, 2)
        ]
    );
}

#[test]
fn test_neighbors_clip_to_bounds() {
    let values = [0u8; 12];
    let grid = values.as_grid(4);

    let corner = grid.neighbors(2, 3, &Adjacency::MOORE).collect::<Vec<_>>();
    assert_eq!(corner, [(1, 2), (1, 3), (2, 2)]);

    // Last column must not wrap into the next row.
    let edge = grid.neighbors(0, 3, &Adjacency::MOORE).collect::<Vec<_>>();
    assert_eq!(edge, [(0, 2), (1, 2), (1, 3)]);
}

#[test]
fn test_custom_adjacency() {
    const CROSS: Adjacency = Adjacency::new(&[(-1, 0), (0, -1), (0, 1), (1, 0)]);

    let values = [0u8; 9];
    let grid = values.as_grid(3);
    let around = grid.neighbors(0, 1, &CROSS).collect::<Vec<_>>();
    assert_eq!(around, [(0, 0), (0, 2), (1, 1)]);
}

#[test]
#[should_panic = "missing row `3`, column `0`"]
fn test_get_out_of_bounds() {
    let values = [0u8; 9];
    values.as_grid(3).get(3, 0);
}
