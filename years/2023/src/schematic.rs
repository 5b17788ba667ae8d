//! Find part numbers and gears in an engine schematic.
//!
//! A part number is a horizontal run of digits with a symbol (anything but a
//! digit or `.`) in one of the cells surrounding any of its digits. A gear is
//! a `*` which is adjacent to exactly two distinct runs.

#[cfg(test)]
mod tests;

use core::ops::Range;

use lib::input::IStrError;
use lib::prelude::*;
use thiserror::Error;

/// The marker for a potential gear.
const GEAR: u8 = b'*';

#[derive(Debug, PartialEq, Eq, Error)]
pub enum SchematicError {
    #[error("expected row of width {expected}, but got {actual}")]
    Ragged { expected: usize, actual: usize },
    #[error("number too large")]
    Overflow,
    #[error("sum of part numbers too large")]
    PartSumOverflow,
    #[error("gear ratio too large")]
    RatioOverflow,
    #[error("sum of gear ratios too large")]
    RatioSumOverflow,
}

/// Test if the given cell is a symbol.
#[inline]
fn is_symbol(c: u8) -> bool {
    c != b'.' && !c.is_ascii_digit()
}

/// An engine schematic.
#[derive(Debug, Clone)]
pub struct Schematic {
    cells: Vec<u8>,
    columns: usize,
    /// Offset of each row in the input.
    starts: Vec<usize>,
}

impl Schematic {
    /// Load a schematic from the non-blank lines of `input`.
    ///
    /// All rows must be of the same width.
    pub fn parse(mut input: IStr) -> Result<Self> {
        let mut cells = Vec::new();
        let mut starts = Vec::new();
        let mut columns = None;

        while let Some(line) = input.try_filled_line::<IStr>()? {
            let expected = *columns.get_or_insert(line.len());

            if line.len() != expected {
                let error = SchematicError::Ragged {
                    expected,
                    actual: line.len(),
                };

                return Err(IStrError::any(line.span(), error).into());
            }

            cells.extend_from_slice(line.as_data());
            starts.push(line.index());
        }

        Ok(Self {
            cells,
            columns: columns.unwrap_or_default(),
            starts,
        })
    }

    /// Access the schematic as a grid.
    #[inline]
    pub fn grid(&self) -> Grid<'_, u8> {
        self.cells.as_grid(self.columns)
    }

    /// The span in the input covered by `columns` of the given row.
    fn span(&self, row: usize, columns: Range<usize>) -> Range<usize> {
        let start = self.starts.get(row).copied().unwrap_or_default();
        start.saturating_add(columns.start)..start.saturating_add(columns.end)
    }

    fn error(&self, row: usize, columns: Range<usize>, error: SchematicError) -> IStrError {
        IStrError::any(self.span(row, columns), error)
    }

    /// Find every run of digits in the schematic.
    pub fn scan(&self, adjacency: &Adjacency) -> Result<Scan<'_>, IStrError> {
        let grid = self.grid();
        let mut runs = Vec::new();
        let mut owners = vec![None; self.cells.len()];

        for (y, row) in grid.rows().enumerate() {
            let mut x = 0;

            while x < row.len() {
                if !row[x].is_ascii_digit() {
                    x += 1;
                    continue;
                }

                let s = x;
                let mut value = 0u64;

                while let Some(d) = row.get(x).filter(|d| d.is_ascii_digit()) {
                    value = value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(u64::from(d - b'0')))
                        .ok_or_else(|| self.error(y, s..x + 1, SchematicError::Overflow))?;

                    owners[y * self.columns + x] = Some(runs.len());
                    x += 1;
                }

                let part = (s..x).any(|x| {
                    grid.neighbors(y, x, adjacency)
                        .any(|(ny, nx)| is_symbol(*grid.get(ny, nx)))
                });

                runs.push(Run {
                    row: y,
                    columns: s..x,
                    value,
                    part,
                });
            }
        }

        log::debug!("found {} runs of digits", runs.len());

        Ok(Scan {
            schematic: self,
            grid,
            adjacency: *adjacency,
            runs,
            owners,
        })
    }
}

/// A horizontal run of digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub row: usize,
    pub columns: Range<usize>,
    pub value: u64,
    /// If the run is adjacent to a symbol.
    pub part: bool,
}

/// A gear and the two part numbers adjacent to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gear {
    pub row: usize,
    pub column: usize,
    pub parts: [u64; 2],
}

impl Gear {
    /// The product of the two parts, or `None` if it doesn't fit in a `u64`.
    #[inline]
    pub fn ratio(&self) -> Option<u64> {
        let [a, b] = self.parts;
        a.checked_mul(b)
    }
}

/// The result of [Schematic::scan].
#[derive(Debug)]
pub struct Scan<'a> {
    schematic: &'a Schematic,
    grid: Grid<'a, u8>,
    adjacency: Adjacency,
    runs: Vec<Run>,
    /// The run occupying each cell, if any.
    owners: Vec<Option<usize>>,
}

impl Scan<'_> {
    /// Every run of digits in row-major order.
    #[inline]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// The runs which are part numbers.
    pub fn part_numbers(&self) -> impl Iterator<Item = &Run> + '_ {
        self.runs.iter().filter(|run| run.part)
    }

    /// Sum of all part numbers.
    pub fn part_sum(&self) -> Result<u64, IStrError> {
        self.part_numbers().try_fold(0u64, |sum, run| {
            sum.checked_add(run.value).ok_or_else(|| {
                self.schematic
                    .error(run.row, run.columns.clone(), SchematicError::PartSumOverflow)
            })
        })
    }

    /// Find every gear, in row-major order.
    ///
    /// Runs are told apart by their position, so two runs with the same value
    /// count as two parts.
    pub fn gears(&self) -> impl Iterator<Item = Gear> + '_ {
        let columns = self.grid.columns_len();

        self.grid.rows().enumerate().flat_map(move |(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, c)| **c == GEAR)
                .filter_map(move |(x, _)| {
                    let mut adjacent = ArrayVec::<usize, 8>::new();

                    for (ny, nx) in self.grid.neighbors(y, x, &self.adjacency) {
                        let Some(index) = self.owners[ny * columns + nx] else {
                            continue;
                        };

                        if !adjacent.contains(&index) && adjacent.try_push(index).is_err() {
                            break;
                        }
                    }

                    let [a, b] = adjacent[..] else {
                        return None;
                    };

                    Some(Gear {
                        row: y,
                        column: x,
                        parts: [self.runs[a].value, self.runs[b].value],
                    })
                })
        })
    }

    /// Sum of all gear ratios.
    pub fn gear_ratio_sum(&self) -> Result<u64, IStrError> {
        self.gears().try_fold(0u64, |sum, gear| {
            let error = |error: SchematicError| {
                let at = gear.column..gear.column + 1;
                self.schematic.error(gear.row, at, error)
            };

            let ratio = gear
                .ratio()
                .ok_or_else(|| error(SchematicError::RatioOverflow))?;

            sum.checked_add(ratio)
                .ok_or_else(|| error(SchematicError::RatioSumOverflow))
        })
    }
}
