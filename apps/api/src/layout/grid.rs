//! Grid — fixed-size square character buffer that words are written onto.
//!
//! A cell is either empty (`None`) or holds exactly one uppercase letter. Once a
//! letter is written it never changes: `can_place` rejects any write that would
//! put a *different* letter into an occupied cell, while writing the *same*
//! letter is allowed (that is how two words share an intersection).

use std::fmt;

/// Side length used when no `GRID_SIZE` is configured.
pub const DEFAULT_GRID_SIZE: usize = 25;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Placement axis of a word. Words always read left-to-right or top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Cell holding letter `offset` of a word whose first letter sits at (`row`, `col`).
    fn cell_at(self, row: usize, col: usize, offset: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (row, col + offset),
            Orientation::Vertical => (row + offset, col),
        }
    }
}

/// A non-empty grid cell as reported by [`Grid::occupied_cells`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupiedCell {
    pub row: usize,
    pub col: usize,
    pub letter: char,
}

/// Square N×N letter matrix, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Operations
// ────────────────────────────────────────────────────────────────────────────

impl Grid {
    /// Creates an empty `size`×`size` grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Letter at (`row`, `col`), or `None` for an empty or out-of-range cell.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[self.index(row, col)]
    }

    /// Returns true when `word` fits at (`row`, `col`) in `orientation` without
    /// leaving the grid and without contradicting a letter already on it.
    ///
    /// Signed coordinates are accepted because intersection anchors can yield
    /// origins above or left of the grid; those simply do not fit.
    pub fn can_place(
        &self,
        word: &[char],
        row: isize,
        col: isize,
        orientation: Orientation,
    ) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.size || col >= self.size {
            return false;
        }

        let end = match orientation {
            Orientation::Horizontal => col + word.len(),
            Orientation::Vertical => row + word.len(),
        };
        if end > self.size {
            return false;
        }

        word.iter().enumerate().all(|(offset, &letter)| {
            let (r, c) = orientation.cell_at(row, col, offset);
            match self.cells[self.index(r, c)] {
                Some(existing) => existing == letter,
                None => true,
            }
        })
    }

    /// Writes every letter of `word` along `orientation`.
    ///
    /// The caller must have checked the position with [`Grid::can_place`]; no
    /// validation happens here.
    ///
    /// # Panics
    /// Panics if the word runs past the grid edge.
    pub fn place(&mut self, word: &[char], row: usize, col: usize, orientation: Orientation) {
        for (offset, &letter) in word.iter().enumerate() {
            let (r, c) = orientation.cell_at(row, col, offset);
            assert!(r < self.size && c < self.size, "placement leaves the grid");
            let idx = self.index(r, c);
            self.cells[idx] = Some(letter);
        }
    }

    /// Like [`Grid::place`], but letters that would land outside the grid are
    /// discarded instead of panicking. Only the seed word uses this, since it is
    /// written before any fit check.
    pub(crate) fn place_clipped(
        &mut self,
        word: &[char],
        row: usize,
        col: usize,
        orientation: Orientation,
    ) {
        for (offset, &letter) in word.iter().enumerate() {
            let (r, c) = orientation.cell_at(row, col, offset);
            if r >= self.size || c >= self.size {
                break;
            }
            let idx = self.index(r, c);
            self.cells[idx] = Some(letter);
        }
    }

    /// All non-empty cells in row-major scan order.
    pub fn occupied_cells(&self) -> Vec<OccupiedCell> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| {
                cell.map(|letter| OccupiedCell {
                    row: idx / self.size,
                    col: idx % self.size,
                    letter,
                })
            })
            .collect()
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// One string per row, `.` marking an empty cell.
    pub fn rows(&self) -> Vec<String> {
        (0..self.size)
            .map(|row| {
                (0..self.size)
                    .map(|col| self.get(row, col).unwrap_or(EMPTY_GLYPH))
                    .collect()
            })
            .collect()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }
}

const EMPTY_GLYPH: char = '.';

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
