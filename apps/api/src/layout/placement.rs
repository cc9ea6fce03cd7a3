//! Placement Engine — greedy, intersection-seeking word layout.
//!
//! # Algorithm
//! 1. The first word is written horizontally, centred on row `N / 2`.
//! 2. Every later word scans the occupied cells in row-major order. For each
//!    cell and each matching letter index `i` (ascending) it tries a vertical
//!    placement through the cell, then a horizontal one. The first fit wins.
//! 3. Words with no fitting intersection fall back to column 1 on the next free
//!    row of a cursor that starts at row 1 and moves forward by 2 after each
//!    fallback attempt, whether or not the word was placed.
//! 4. Words that fit nowhere are dropped. They stay in the word list; the grid
//!    simply carries no trace of them.
//!
//! The scan order is part of the output contract: changing it changes layouts.

use tracing::debug;

use crate::layout::grid::{Grid, Orientation};

/// Column every fallback placement starts in.
const FALLBACK_COLUMN: usize = 1;
/// Row the fallback cursor starts on.
const FALLBACK_FIRST_ROW: usize = 1;
/// Rows the cursor skips after each fallback attempt.
const FALLBACK_ROW_STEP: usize = 2;

/// Where and how a word was written onto the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

/// Builds a fresh `size`×`size` grid from an ordered, de-duplicated word list.
///
/// Pure and deterministic: the same list always yields the same grid.
pub fn build_layout(words: &[String], size: usize) -> Grid {
    let mut grid = Grid::new(size);

    let Some((first, rest)) = words.split_first() else {
        return grid;
    };

    let first: Vec<char> = first.chars().collect();
    let seed = seed_placement(first.len(), size);
    grid.place_clipped(&first, seed.row, seed.col, seed.orientation);

    let mut cursor = FallbackCursor::new();
    for word in rest {
        let letters: Vec<char> = word.chars().collect();

        if let Some(p) = find_intersection(&grid, &letters) {
            grid.place(&letters, p.row, p.col, p.orientation);
            continue;
        }

        match cursor.next_fit(&grid, &letters) {
            Some(p) => {
                debug!(word = %word, row = p.row, "no intersection, using fallback row");
                grid.place(&letters, p.row, p.col, p.orientation);
            }
            None => debug!(word = %word, "word does not fit anywhere, dropped from grid"),
        }
    }

    grid
}

/// Centred horizontal position for the first word.
fn seed_placement(len: usize, size: usize) -> Placement {
    Placement {
        row: size / 2,
        col: size.saturating_sub(len) / 2,
        orientation: Orientation::Horizontal,
    }
}

/// First placement of `word` that crosses an already occupied cell.
///
/// Outer loop: occupied cells, row-major. Inner loop: letter index ascending.
/// Vertical is tried before horizontal at every (cell, index) pair.
pub fn find_intersection(grid: &Grid, word: &[char]) -> Option<Placement> {
    for cell in grid.occupied_cells() {
        for (i, &letter) in word.iter().enumerate() {
            if letter != cell.letter {
                continue;
            }
            let (row, col) = (cell.row as isize, cell.col as isize);
            let offset = i as isize;

            if grid.can_place(word, row - offset, col, Orientation::Vertical) {
                return Some(Placement {
                    row: cell.row - i,
                    col: cell.col,
                    orientation: Orientation::Vertical,
                });
            }
            if grid.can_place(word, row, col - offset, Orientation::Horizontal) {
                return Some(Placement {
                    row: cell.row,
                    col: cell.col - i,
                    orientation: Orientation::Horizontal,
                });
            }
        }
    }
    None
}

/// Forward-only row cursor for non-intersecting placements.
#[derive(Debug)]
struct FallbackCursor {
    row: usize,
}

impl FallbackCursor {
    fn new() -> Self {
        Self {
            row: FALLBACK_FIRST_ROW,
        }
    }

    /// Advances to the first row at or after the cursor where `word` fits
    /// horizontally at the fallback column. The last row is never used.
    ///
    /// The cursor always moves on by `FALLBACK_ROW_STEP` afterwards, including
    /// when nothing fit.
    fn next_fit(&mut self, grid: &Grid, word: &[char]) -> Option<Placement> {
        let limit = grid.size().saturating_sub(1);
        while self.row < limit
            && !grid.can_place(
                word,
                self.row as isize,
                FALLBACK_COLUMN as isize,
                Orientation::Horizontal,
            )
        {
            self.row += 1;
        }

        let found = (self.row < limit).then_some(Placement {
            row: self.row,
            col: FALLBACK_COLUMN,
            orientation: Orientation::Horizontal,
        });
        self.row += FALLBACK_ROW_STEP;
        found
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::grid::DEFAULT_GRID_SIZE;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn read(grid: &Grid, row: usize, col: usize, len: usize, orientation: Orientation) -> String {
        (0..len)
            .map(|i| match orientation {
                Orientation::Horizontal => grid.get(row, col + i),
                Orientation::Vertical => grid.get(row + i, col),
            })
            .map(|c| c.unwrap_or('.'))
            .collect()
    }

    #[test]
    fn test_empty_list_yields_empty_grid() {
        let grid = build_layout(&[], DEFAULT_GRID_SIZE);
        assert_eq!(grid.size(), 25);
        assert_eq!(grid.filled_count(), 0);
    }

    #[test]
    fn test_first_word_is_centred_horizontally() {
        let grid = build_layout(&words(&["HOME"]), DEFAULT_GRID_SIZE);
        // row 25 / 2 = 12, col (25 - 4) / 2 = 10
        assert_eq!(read(&grid, 12, 10, 4, Orientation::Horizontal), "HOME");
        assert_eq!(grid.filled_count(), 4);
    }

    #[test]
    fn test_home_love_intersect_on_o() {
        let grid = build_layout(&words(&["HOME", "LOVE"]), DEFAULT_GRID_SIZE);
        assert_eq!(read(&grid, 12, 10, 4, Orientation::Horizontal), "HOME");
        // First anchor with a match is O at (12, 11); LOVE[1] == 'O' → vertical from (11, 11).
        assert_eq!(read(&grid, 11, 11, 4, Orientation::Vertical), "LOVE");
        assert_eq!(grid.filled_count(), 7, "the shared O is counted once");
    }

    #[test]
    fn test_horizontal_tried_when_vertical_blocked() {
        // Anchor on the bottom row: a vertical word through it would leave the grid.
        let mut grid = Grid::new(5);
        grid.place(&['A'], 4, 2, Orientation::Horizontal);
        let p = find_intersection(&grid, &['A', 'X']).expect("horizontal fit exists");
        assert_eq!(
            p,
            Placement {
                row: 4,
                col: 2,
                orientation: Orientation::Horizontal
            }
        );
    }

    #[test]
    fn test_second_word_extends_seed_vertically() {
        // 3×3: seed AB at (1, 0). BC goes down through the B at (1, 1).
        let grid = build_layout(&words(&["AB", "BC"]), 3);
        assert_eq!(read(&grid, 1, 1, 2, Orientation::Vertical), "BC");
    }

    #[test]
    fn test_find_intersection_prefers_vertical() {
        let mut grid = Grid::new(9);
        grid.place(&['C', 'A', 'T'], 4, 3, Orientation::Horizontal);
        let p = find_intersection(&grid, &['A', 'X']).expect("intersection exists");
        assert_eq!(
            p,
            Placement {
                row: 4,
                col: 4,
                orientation: Orientation::Vertical
            }
        );
    }

    #[test]
    fn test_find_intersection_uses_first_anchor_in_scan_order() {
        let mut grid = Grid::new(9);
        grid.place(&['E', 'E'], 2, 2, Orientation::Horizontal);
        // Both E cells match; the first in row-major order is (2, 2).
        let p = find_intersection(&grid, &['E', 'N', 'D']).expect("intersection exists");
        assert_eq!((p.row, p.col, p.orientation), (2, 2, Orientation::Vertical));
    }

    #[test]
    fn test_find_intersection_tries_lowest_letter_index_first() {
        let mut grid = Grid::new(9);
        grid.place(&['O'], 4, 4, Orientation::Horizontal);
        // "OXO": index 0 matches first → vertical from (4, 4).
        let p = find_intersection(&grid, &['O', 'X', 'O']).expect("intersection exists");
        assert_eq!((p.row, p.col), (4, 4));
    }

    #[test]
    fn test_find_intersection_none_without_shared_letters() {
        let mut grid = Grid::new(9);
        grid.place(&['A', 'B'], 0, 0, Orientation::Horizontal);
        assert_eq!(find_intersection(&grid, &['X', 'Y']), None);
    }

    #[test]
    fn test_fallback_uses_row_one_column_one() {
        let grid = build_layout(&words(&["HOME", "XYZ"]), DEFAULT_GRID_SIZE);
        assert_eq!(read(&grid, 1, 1, 3, Orientation::Horizontal), "XYZ");
        assert_eq!(read(&grid, 12, 10, 4, Orientation::Horizontal), "HOME");
    }

    #[test]
    fn test_fallback_cursor_steps_by_two() {
        let grid = build_layout(&words(&["HOME", "XYZ", "QJ"]), DEFAULT_GRID_SIZE);
        assert_eq!(read(&grid, 1, 1, 3, Orientation::Horizontal), "XYZ");
        assert_eq!(read(&grid, 3, 1, 2, Orientation::Horizontal), "QJ");
    }

    #[test]
    fn test_fallback_skips_conflicting_rows() {
        // 7×7: seed AB at (3, 2). XY → row 1, cursor 3. QZ at (3, 1) would
        // overwrite the A at (3, 2), so it lands on row 4.
        let grid = build_layout(&words(&["AB", "XY", "QZ"]), 7);
        assert_eq!(read(&grid, 3, 2, 2, Orientation::Horizontal), "AB");
        assert_eq!(read(&grid, 1, 1, 2, Orientation::Horizontal), "XY");
        assert_eq!(read(&grid, 4, 1, 2, Orientation::Horizontal), "QZ");
    }

    #[test]
    fn test_cursor_advances_even_when_word_is_dropped() {
        // The long word exhausts the cursor, so XY is dropped although row 1 is free.
        let grid = build_layout(&words(&["AB", "CDEFGHIJ", "XY"]), 7);
        assert_eq!(grid.filled_count(), 2);
        assert_eq!(read(&grid, 3, 2, 2, Orientation::Horizontal), "AB");
    }

    #[test]
    fn test_word_longer_than_grid_is_dropped() {
        let grid = build_layout(&words(&["ABC", "ABCDEFG"]), 5);
        assert_eq!(grid.filled_count(), 3);
        assert_eq!(read(&grid, 2, 1, 3, Orientation::Horizontal), "ABC");
    }

    #[test]
    fn test_oversized_first_word_is_clipped() {
        let grid = build_layout(&words(&["ABCDEFG"]), 5);
        assert_eq!(read(&grid, 2, 0, 5, Orientation::Horizontal), "ABCDE");
    }

    #[test]
    fn test_layout_is_deterministic() {
        let list = words(&["EXPLORE", "CREATE", "ADVENTURE", "RELAX", "HAPPY"]);
        let a = build_layout(&list, DEFAULT_GRID_SIZE);
        let b = build_layout(&list, DEFAULT_GRID_SIZE);
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_word_written_reads_back_intact() {
        let list = words(&["EXPLORE", "CREATE", "ADVENTURE", "RELAX", "HAPPY", "GLÜCK"]);
        let mut grid = Grid::new(DEFAULT_GRID_SIZE);

        // Replay the engine step by step and check each written word.
        let first: Vec<char> = list[0].chars().collect();
        let seed = seed_placement(first.len(), DEFAULT_GRID_SIZE);
        grid.place_clipped(&first, seed.row, seed.col, seed.orientation);
        let mut cursor = FallbackCursor::new();
        for word in &list[1..] {
            let letters: Vec<char> = word.chars().collect();
            let before = grid.clone();
            let placement = find_intersection(&grid, &letters).or_else(|| cursor.next_fit(&grid, &letters));
            if let Some(p) = placement {
                grid.place(&letters, p.row, p.col, p.orientation);
                assert_eq!(read(&grid, p.row, p.col, letters.len(), p.orientation), *word);
                // No previously written letter changed.
                for cell in before.occupied_cells() {
                    assert_eq!(grid.get(cell.row, cell.col), Some(cell.letter));
                }
            }
        }
        assert_eq!(grid, build_layout(&list, DEFAULT_GRID_SIZE));
    }
}
