//! Two-dimensional views over slices.

#[cfg(test)]
mod tests;

use core::fmt;
use core::iter::FusedIterator;
use core::slice;

mod sealed {
    pub trait Sealed {}
    impl<T> Sealed for [T] {}
}

use self::sealed::Sealed;

pub trait GridExt<T>: Sealed {
    /// Convert type into a grid with rows of the given width.
    ///
    /// Trailing elements which do not fill up a whole row are not part of the
    /// grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let grid = b"123456".as_grid(3);
    /// assert_eq!(grid.rows_len(), 2);
    /// assert_eq!(grid.row(1), Some(&b"456"[..]));
    /// assert_eq!(grid.try_get(0, 3), None);
    /// ```
    fn as_grid(&self, columns: usize) -> Grid<'_, T>;
}

impl<T> GridExt<T> for [T] {
    #[inline]
    fn as_grid(&self, columns: usize) -> Grid<'_, T> {
        let rows = self.len().checked_div(columns).unwrap_or_default();

        Grid {
            data: self,
            rows,
            columns,
        }
    }
}

/// An immutable grid over a slice.
pub struct Grid<'a, T> {
    data: &'a [T],
    rows: usize,
    columns: usize,
}

impl<T> Clone for Grid<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Grid<'_, T> {}

impl<T> fmt::Debug for Grid<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

impl<'a, T> Grid<'a, T> {
    /// Get number of rows in the grid.
    #[inline]
    pub fn rows_len(&self) -> usize {
        self.rows
    }

    /// Get number of columns in the grid.
    #[inline]
    pub fn columns_len(&self) -> usize {
        self.columns
    }

    /// Access the specified row in the grid.
    #[inline]
    pub fn row(&self, row: usize) -> Option<&'a [T]> {
        if row >= self.rows {
            return None;
        }

        let start = row.checked_mul(self.columns)?;
        self.data.get(start..start.checked_add(self.columns)?)
    }

    /// Iterate over rows in the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let values = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    /// let grid = values.as_grid(4);
    /// assert!(grid.rows().flatten().copied().eq(1..=12));
    /// assert_eq!(grid.rows().nth(2), Some(&[9, 10, 11, 12][..]));
    /// ```
    #[inline]
    pub fn rows(&self) -> Rows<'a, T> {
        Rows { grid: *self, row: 0 }
    }

    /// Get the element at the given row and column.
    #[inline]
    #[track_caller]
    pub fn get(&self, row: usize, column: usize) -> &'a T {
        match self.try_get(row, column) {
            Some(value) => value,
            None => panic!("missing row `{row}`, column `{column}`"),
        }
    }

    /// Get the element at the given row and column.
    #[inline]
    pub fn try_get(&self, row: usize, column: usize) -> Option<&'a T> {
        self.row(row)?.get(column)
    }

    /// Iterate over the coordinates neighboring the given cell, as described
    /// by `adjacency`.
    ///
    /// Neighbors outside of the grid are skipped, coordinates never wrap
    /// around.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let grid = b"abcd".as_grid(2);
    /// let around = grid.neighbors(0, 0, &Adjacency::MOORE).collect::<Vec<_>>();
    /// assert_eq!(around, [(0, 1), (1, 0), (1, 1)]);
    /// ```
    #[inline]
    pub fn neighbors<'b>(
        &self,
        row: usize,
        column: usize,
        adjacency: &'b Adjacency,
    ) -> Neighbors<'b> {
        Neighbors {
            offsets: adjacency.offsets.iter(),
            row,
            column,
            rows: self.rows,
            columns: self.columns,
        }
    }
}

/// Iterator over rows, see [Grid::rows].
pub struct Rows<'a, T> {
    grid: Grid<'a, T>,
    row: usize,
}

impl<'a, T> Iterator for Rows<'a, T> {
    type Item = &'a [T];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let row = self.grid.row(self.row)?;
        self.row += 1;
        Some(row)
    }
}

impl<T> FusedIterator for Rows<'_, T> {}

/// A table of `(row, column)` offsets describing which cells neighbor each
/// other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacency {
    offsets: &'static [(isize, isize)],
}

impl Adjacency {
    /// All eight surrounding cells, including diagonals.
    pub const MOORE: Self = Self::new(&[
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ]);

    /// Construct a custom adjacency table.
    pub const fn new(offsets: &'static [(isize, isize)]) -> Self {
        Self { offsets }
    }
}

/// Iterator over neighboring coordinates, see [Grid::neighbors].
pub struct Neighbors<'a> {
    offsets: slice::Iter<'a, (isize, isize)>,
    row: usize,
    column: usize,
    rows: usize,
    columns: usize,
}

impl Iterator for Neighbors<'_> {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        for &(dr, dc) in self.offsets.by_ref() {
            let Some(row) = self.row.checked_add_signed(dr) else {
                continue;
            };

            let Some(column) = self.column.checked_add_signed(dc) else {
                continue;
            };

            if row < self.rows && column < self.columns {
                return Some((row, column));
            }
        }

        None
    }
}

impl FusedIterator for Neighbors<'_> {}
