//! Square occupancy lattices.
//!
//! A [`Lattice`] is the validated form of the N×N boolean buffer handed over by
//! a caller. Every constructor performs the boundary checks (rank, squareness,
//! buffer length, label width) so the labellers can assume a well-formed
//! row-major grid.

use crate::error::LatticeError;

/// Largest side whose cell count still fits in an `i32` label.
pub const MAX_SIDE: usize = 46_340;

/// Row-major N×N grid of site occupancy.
///
/// # Examples
/// ```
/// use percolate_core::Lattice;
///
/// let lattice = Lattice::from_rows(vec![
///     vec![true, false],
///     vec![false, true],
/// ])?;
/// assert_eq!(lattice.side(), 2);
/// assert_eq!(lattice.is_occupied(1, 1), Some(true));
/// assert_eq!(lattice.occupied_count(), 2);
/// # Ok::<(), percolate_core::LatticeError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Lattice {
    side: usize,
    cells: Vec<bool>,
}

impl Lattice {
    /// Wraps a row-major buffer of `side²` cells.
    ///
    /// # Errors
    /// Returns [`LatticeError::SideTooLarge`] when `side` exceeds [`MAX_SIDE`]
    /// and [`LatticeError::LengthMismatch`] when `cells.len() != side²`.
    ///
    /// # Examples
    /// ```
    /// use percolate_core::{Lattice, LatticeError};
    ///
    /// let err = Lattice::new(2, vec![true; 3]).expect_err("three cells cannot form 2×2");
    /// assert!(matches!(err, LatticeError::LengthMismatch { expected: 4, actual: 3, .. }));
    /// ```
    pub fn new(side: usize, cells: Vec<bool>) -> Result<Self, LatticeError> {
        let expected = cell_count(side)?;
        if cells.len() != expected {
            return Err(LatticeError::LengthMismatch {
                side,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { side, cells })
    }

    /// Builds a lattice from a buffer described by an explicit shape.
    ///
    /// This mirrors array-descriptor checks: the shape must have exactly two
    /// dimensions and both must be equal.
    ///
    /// # Errors
    /// Returns [`LatticeError::NotTwoDimensional`] or
    /// [`LatticeError::NotSquare`] for a bad shape, and the errors of
    /// [`Self::new`] otherwise.
    ///
    /// # Examples
    /// ```
    /// use percolate_core::{Lattice, LatticeError};
    ///
    /// let err = Lattice::from_shape(&[2, 3], vec![false; 6]).expect_err("2×3 is not square");
    /// assert_eq!(err.to_string(), "grid must be square (N×N); got 2×3");
    /// ```
    pub fn from_shape(shape: &[usize], cells: Vec<bool>) -> Result<Self, LatticeError> {
        let &[rows, columns] = shape else {
            return Err(LatticeError::NotTwoDimensional { rank: shape.len() });
        };
        if rows != columns {
            return Err(LatticeError::NotSquare { rows, columns });
        }
        Self::new(rows, cells)
    }

    /// Builds a lattice from nested rows.
    ///
    /// # Errors
    /// Returns [`LatticeError::NotSquare`] when any row's width differs from
    /// the number of rows, and [`LatticeError::SideTooLarge`] for oversized
    /// input.
    pub fn from_rows<R>(rows: Vec<R>) -> Result<Self, LatticeError>
    where
        R: AsRef<[bool]>,
    {
        let side = rows.len();
        let expected = cell_count(side)?;
        let mut cells = Vec::with_capacity(expected);
        for row in &rows {
            let row = row.as_ref();
            if row.len() != side {
                return Err(LatticeError::NotSquare {
                    rows: side,
                    columns: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self { side, cells })
    }

    pub(crate) fn from_trusted_parts(side: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), side * side);
        Self { side, cells }
    }

    /// Lattice of `side²` unoccupied sites.
    ///
    /// # Errors
    /// Returns [`LatticeError::SideTooLarge`] when `side` exceeds [`MAX_SIDE`].
    pub fn empty(side: usize) -> Result<Self, LatticeError> {
        Ok(Self {
            side,
            cells: vec![false; cell_count(side)?],
        })
    }

    /// Lattice of `side²` occupied sites.
    ///
    /// # Errors
    /// Returns [`LatticeError::SideTooLarge`] when `side` exceeds [`MAX_SIDE`].
    pub fn filled(side: usize) -> Result<Self, LatticeError> {
        Ok(Self {
            side,
            cells: vec![true; cell_count(side)?],
        })
    }

    /// Side length N.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of sites, N².
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` for the 0×0 lattice.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major occupancy buffer.
    #[must_use]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Consumes the lattice and returns its row-major buffer.
    #[must_use]
    pub fn into_cells(self) -> Vec<bool> {
        self.cells
    }

    /// Occupancy of the site at (`row`, `column`), or `None` outside the grid.
    #[must_use]
    pub fn is_occupied(&self, row: usize, column: usize) -> Option<bool> {
        if row >= self.side || column >= self.side {
            return None;
        }
        self.cells.get(row * self.side + column).copied()
    }

    /// Iterates over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // `chunks` rejects a zero chunk size; the 0×0 lattice has no rows anyway.
        self.cells.chunks(self.side.max(1))
    }

    /// Number of occupied sites.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Returns the transposed lattice.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            side: self.side,
            cells: transpose_cells(&self.cells, self.side),
        }
    }
}

/// Transposes a row-major square buffer.
pub(crate) fn transpose_cells<T: Copy>(cells: &[T], side: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(cells.len());
    for column in 0..side {
        out.extend(cells.iter().skip(column).step_by(side).copied());
    }
    out
}

/// Validates `side` against the label width and returns `side²`.
pub(crate) fn cell_count(side: usize) -> Result<usize, LatticeError> {
    if side > MAX_SIDE {
        return Err(LatticeError::SideTooLarge {
            side,
            max: MAX_SIDE,
        });
    }
    Ok(side * side)
}
