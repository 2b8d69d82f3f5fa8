//! A fixed-capacity cell mask over a rectangular grid.
//!
//! The mask is `no_std` friendly and avoids heap allocations. A `width × height`
//! grid is packed row-major into an unsigned integer `T`, so the number of
//! cells is bounded by `T`'s bit width. Dimensions are chosen at runtime, which
//! lets the same type back a 1 × 1 test board and the standard 10 × 10 sea.

use core::fmt;
use core::ops::{BitAnd, BitOr, Not};
use core::mem;
use num_traits::{PrimInt, Unsigned, Zero};
use thiserror::Error;

use crate::common::Location;

/// Errors returned by cell mask operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BitGridError {
    /// `width * height` exceeds the capacity of `T`.
    #[error("grid of {width}x{height} exceeds capacity of {capacity} cells")]
    SizeTooLarge {
        width: usize,
        height: usize,
        capacity: usize,
    },
    /// One of the dimensions is zero.
    #[error("grid dimensions must be non-zero")]
    EmptyGrid,
    /// Location lies outside `[0, height) × [0, width)`.
    #[error("location {0} is out of bounds")]
    OutOfBounds(Location),
}

/// A `width × height` set of cells stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    width: usize,
    height: usize,
    bits: T,
}

impl<T> BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of cells `T` can hold.
    pub const CAPACITY: usize = mem::size_of::<T>() * 8;

    /// Create an empty mask, checking the dimensions fit into `T`.
    pub fn try_new(width: usize, height: usize) -> Result<Self, BitGridError> {
        if width == 0 || height == 0 {
            return Err(BitGridError::EmptyGrid);
        }
        match width.checked_mul(height) {
            Some(cells) if cells <= Self::CAPACITY => Ok(BitGrid {
                width,
                height,
                bits: T::zero(),
            }),
            _ => Err(BitGridError::SizeTooLarge {
                width,
                height,
                capacity: Self::CAPACITY,
            }),
        }
    }

    /// An empty mask with the same dimensions as `self`.
    #[inline]
    pub fn empty_like(&self) -> Self {
        BitGrid {
            width: self.width,
            height: self.height,
            bits: T::zero(),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of set cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no cells are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Returns true when every cell of the grid is set.
    pub fn is_full(&self) -> bool {
        self.count_ones() == self.width * self.height
    }

    /// Whether `at` lies on the grid.
    #[inline]
    pub fn contains(&self, at: Location) -> bool {
        at.row() < self.height && at.column() < self.width
    }

    /// Gets the cell at `at`.
    pub fn get(&self, at: Location) -> Result<bool, BitGridError> {
        let idx = self.index(at)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Marks the cell at `at`.
    pub fn set(&mut self, at: Location) -> Result<(), BitGridError> {
        let idx = self.index(at)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    #[inline]
    fn index(&self, at: Location) -> Result<usize, BitGridError> {
        if self.contains(at) {
            Ok(at.row() * self.width + at.column())
        } else {
            Err(BitGridError::OutOfBounds(at))
        }
    }

    #[inline]
    fn mask(&self) -> T {
        let cells = self.width * self.height;
        if cells == Self::CAPACITY {
            !T::zero()
        } else {
            (T::one() << cells) - T::one()
        }
    }

    /// Iterator over the set cells, row-major.
    #[inline]
    pub fn iter_set(&self) -> SetCells<'_, T> {
        SetCells { grid: self, idx: 0 }
    }
}

impl<T> fmt::Debug for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitGrid {}x{}:", self.width, self.height)?;
        for r in 0..self.height {
            for c in 0..self.width {
                let set = ((self.bits >> (r * self.width + c)) & T::one()) != T::zero();
                write!(f, "{} ", if set { '■' } else { '□' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set cells of a [`BitGrid`].
#[derive(Clone, Copy)]
pub struct SetCells<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    grid: &'a BitGrid<T>,
    idx: usize,
}

impl<'a, T> Iterator for SetCells<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Location;

    fn next(&mut self) -> Option<Self::Item> {
        let cells = self.grid.width * self.grid.height;
        while self.idx < cells {
            let idx = self.idx;
            self.idx += 1;
            if ((self.grid.bits >> idx) & T::one()) != T::zero() {
                return Some(Location::new(idx / self.grid.width, idx % self.grid.width));
            }
        }
        None
    }
}

// Binary operators assume both operands share dimensions; the left-hand
// dimensions win.

impl<T> BitAnd for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        debug_assert_eq!((self.width, self.height), (rhs.width, rhs.height));
        BitGrid {
            bits: self.bits & rhs.bits,
            ..self
        }
    }
}

impl<T> BitOr for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        debug_assert_eq!((self.width, self.height), (rhs.width, rhs.height));
        BitGrid {
            bits: self.bits | rhs.bits,
            ..self
        }
    }
}

/// Inverts the mask within the grid bounds.
impl<T> Not for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        BitGrid {
            bits: !self.bits & self.mask(),
            ..self
        }
    }
}

/// Mask type used by boards and ships.
pub type Cells = BitGrid<u128>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_covers_exact_capacity() {
        let mut grid = BitGrid::<u16>::try_new(4, 4).unwrap();
        assert!((!grid).is_full());
        grid.set(Location::new(3, 3)).unwrap();
        assert_eq!((!grid).count_ones(), 15);
    }

    #[test]
    fn rectangular_indexing_is_row_major() {
        let mut grid = BitGrid::<u32>::try_new(5, 2).unwrap();
        grid.set(Location::new(1, 4)).unwrap();
        assert_eq!(grid.iter_set().collect::<Vec<_>>(), vec![Location::new(1, 4)]);
        assert_eq!(
            grid.get(Location::new(2, 0)),
            Err(BitGridError::OutOfBounds(Location::new(2, 0)))
        );
    }
}
