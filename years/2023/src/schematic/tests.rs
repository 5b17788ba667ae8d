use lib::input::{ErrorKind, IStr, IStrError};
use lib::prelude::*;

use super::{Gear, Run, Schematic, SchematicError};

const SAMPLE: &[u8] = b"\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

fn schematic(data: &'static [u8]) -> Schematic {
    Schematic::parse(IStr::new(data)).unwrap()
}

#[test]
fn test_sample() {
    let s = schematic(SAMPLE);
    let scan = s.scan(&Adjacency::MOORE).unwrap();

    let parts = scan.part_numbers().map(|run| run.value).collect::<Vec<_>>();
    assert_eq!(parts, [467, 35, 633, 617, 592, 755, 664, 598]);
    assert_eq!(scan.part_sum().unwrap(), 4361);

    let gears = scan.gears().collect::<Vec<_>>();

    assert_eq!(
        gears,
        [
            Gear {
                row: 1,
                column: 3,
                parts: [467, 35]
            },
            Gear {
                row: 8,
                column: 5,
                parts: [755, 598]
            },
        ]
    );

    assert_eq!(scan.gear_ratio_sum().unwrap(), 467835);
}

#[test]
fn test_idempotent() {
    let s = schematic(SAMPLE);
    let a = s.scan(&Adjacency::MOORE).unwrap();
    let b = s.scan(&Adjacency::MOORE).unwrap();
    assert_eq!(a.runs(), b.runs());
    assert_eq!(a.part_sum().unwrap(), b.part_sum().unwrap());
    assert_eq!(a.gear_ratio_sum().unwrap(), b.gear_ratio_sum().unwrap());
}

#[test]
fn test_diagonal_adjacency() {
    // Both numbers touch the `*` through a diagonal.
    let s = schematic(b"467..\n...*.\n..35.\n");
    let scan = s.scan(&Adjacency::MOORE).unwrap();
    assert_eq!(scan.part_sum().unwrap(), 502);
    assert_eq!(scan.gear_ratio_sum().unwrap(), 467 * 35);
}

#[test]
fn test_not_adjacent() {
    let s = schematic(b"467...\n......\n...35*\n");
    let scan = s.scan(&Adjacency::MOORE).unwrap();
    assert_eq!(scan.part_numbers().map(|run| run.value).collect::<Vec<_>>(), [35]);
    assert_eq!(scan.gear_ratio_sum().unwrap(), 0);
}

#[test]
fn test_runs() {
    let s = schematic(b"12.3\n....\n");
    let scan = s.scan(&Adjacency::MOORE).unwrap();

    assert_eq!(
        scan.runs(),
        [
            Run {
                row: 0,
                columns: 0..2,
                value: 12,
                part: false
            },
            Run {
                row: 0,
                columns: 3..4,
                value: 3,
                part: false
            },
        ]
    );
}

#[test]
fn test_boundaries() {
    // Numbers in every corner, touching symbols across the edges of the grid.
    let s = schematic(b"1#.2\n....\n#..#\n3..4\n");
    let scan = s.scan(&Adjacency::MOORE).unwrap();
    assert_eq!(
        scan.part_numbers().map(|run| run.value).collect::<Vec<_>>(),
        [1, 3, 4]
    );

    // A number at the end of a row must not see the start of the next one.
    let s = schematic(b"..12\n#...\n");
    let scan = s.scan(&Adjacency::MOORE).unwrap();
    assert_eq!(scan.part_sum().unwrap(), 0);
}

#[test]
fn test_gear_runs_deduplicated_by_identity() {
    // The same run touching the gear through several cells counts once.
    let s = schematic(b"123\n.*.\n");
    let scan = s.scan(&Adjacency::MOORE).unwrap();
    assert_eq!(scan.gears().count(), 0);

    // Equal values in different positions are distinct parts.
    let s = schematic(b"2.2\n.*.\n");
    let scan = s.scan(&Adjacency::MOORE).unwrap();
    assert_eq!(scan.gear_ratio_sum().unwrap(), 4);
}

#[test]
fn test_gear_needs_exactly_two() {
    let s = schematic(b"1.1\n.*.\n..1\n");
    let scan = s.scan(&Adjacency::MOORE).unwrap();
    assert_eq!(scan.gears().count(), 0);
    assert_eq!(scan.part_sum().unwrap(), 3);

    let s = schematic(b"5..\n.*.\n...\n");
    let scan = s.scan(&Adjacency::MOORE).unwrap();
    assert_eq!(scan.gears().count(), 0);
}

#[test]
fn test_ragged_rows() {
    let error = Schematic::parse(IStr::new(b"...\n..\n")).unwrap_err();
    let error = error.downcast::<IStrError>().unwrap();
    assert_eq!(error.span(), 4..6);
    assert_eq!(error.to_string(), "expected row of width 3, but got 2");
}

fn schematic_error(error: &IStrError) -> Option<&SchematicError> {
    match error.kind() {
        ErrorKind::Any(error) => error.downcast_ref(),
        _ => None,
    }
}

#[test]
fn test_overflow() {
    let s = schematic(b"....\n123456789012345678901234567890*\n");
    let error = s.scan(&Adjacency::MOORE).unwrap_err();
    assert_eq!(schematic_error(&error), Some(&SchematicError::Overflow));
    assert_eq!(error.span(), 5..26);
    assert_eq!(error.to_string(), "number too large");
}

#[test]
fn test_part_sum_overflow() {
    let s = schematic(b"18446744073709551615*18446744073709551615\n");
    let scan = s.scan(&Adjacency::MOORE).unwrap();
    assert_eq!(scan.part_numbers().count(), 2);

    let error = scan.part_sum().unwrap_err();
    assert_eq!(schematic_error(&error), Some(&SchematicError::PartSumOverflow));
    // Points at the run which no longer fits.
    assert_eq!(error.span(), 21..41);
}

#[test]
fn test_gear_ratio_overflow() {
    let s = schematic(b"9999999999.9999999999\n..........*..........\n");
    let scan = s.scan(&Adjacency::MOORE).unwrap();

    let gears = scan.gears().collect::<Vec<_>>();
    assert_eq!(gears.len(), 1);
    assert_eq!(gears[0].ratio(), None);

    let error = scan.gear_ratio_sum().unwrap_err();
    assert_eq!(schematic_error(&error), Some(&SchematicError::RatioOverflow));
    assert_eq!(error.span(), 32..33);
}

#[test]
fn test_gear_ratio_sum_overflow() {
    // Two gears whose ratios fit on their own, but not once added up.
    let s = schematic(
        b"\
10000000000.1000000000
...........*..........
......................
10000000000.1000000000
...........*..........
",
    );

    let scan = s.scan(&Adjacency::MOORE).unwrap();
    assert_eq!(scan.part_sum().unwrap(), 22_000_000_000);

    let ratios = scan.gears().map(|gear| gear.ratio()).collect::<Vec<_>>();
    assert_eq!(ratios, [Some(10u64.pow(19)), Some(10u64.pow(19))]);

    let error = scan.gear_ratio_sum().unwrap_err();
    assert_eq!(schematic_error(&error), Some(&SchematicError::RatioSumOverflow));
    assert_eq!(error.span(), 103..104);
}

#[test]
fn test_empty() {
    let s = schematic(b"\n\n");
    let scan = s.scan(&Adjacency::MOORE).unwrap();
    assert!(scan.runs().is_empty());
    assert_eq!(scan.part_sum().unwrap(), 0);
    assert_eq!(scan.gear_ratio_sum().unwrap(), 0);
}
