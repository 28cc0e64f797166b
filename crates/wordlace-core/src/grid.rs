//! Square letter grids.

use std::{
    fmt::{self, Display, Write as _},
    ops::Index,
    str::FromStr,
};

use crate::{CellCoord, MAX_GRID_SIZE};

/// A `size × size` grid of uppercase ASCII letters, with empty cells.
///
/// During generation cells start empty and are filled as words are placed; a
/// finished [`Puzzle`](crate::Puzzle) always holds a fully filled grid.
///
/// The text form has one line per row, letters `A`-`Z` for filled cells and `.`
/// for empty ones.
///
/// # Examples
///
/// ```
/// use wordlace_core::{CellCoord, LetterGrid};
///
/// let mut grid = LetterGrid::new(3);
/// grid.set(CellCoord::new(1, 2), b'Q');
/// assert_eq!(grid.get(CellCoord::new(1, 2)), Some(b'Q'));
/// assert_eq!(grid.to_string(), "...\n..Q\n...");
///
/// let parsed: LetterGrid = "CAT\nA..\nT..".parse().unwrap();
/// assert_eq!(parsed.get(CellCoord::new(2, 0)), Some(b'T'));
/// assert!(!parsed.is_filled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LetterGrid {
    size: u8,
    cells: Vec<Option<u8>>,
}

impl LetterGrid {
    /// Creates an empty grid.
    #[must_use]
    pub fn new(size: u8) -> Self {
        let len = usize::from(size) * usize::from(size);
        Self {
            size,
            cells: vec![None; len],
        }
    }

    /// Side length of the grid.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    fn offset(&self, coord: CellCoord) -> Option<usize> {
        coord
            .is_within(self.size)
            .then(|| usize::from(coord.row) * usize::from(self.size) + usize::from(coord.col))
    }

    /// Returns the letter at `coord`, or `None` for empty or out-of-grid cells.
    #[must_use]
    pub fn get(&self, coord: CellCoord) -> Option<u8> {
        self.offset(coord).and_then(|i| self.cells[i])
    }

    /// Writes `letter` at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the grid or `letter` is not an uppercase ASCII
    /// letter.
    pub fn set(&mut self, coord: CellCoord, letter: u8) {
        assert!(letter.is_ascii_uppercase(), "invalid letter: {letter:#04x}");
        let Some(i) = self.offset(coord) else {
            panic!("{coord} is outside a {0}x{0} grid", self.size);
        };
        self.cells[i] = Some(letter);
    }

    /// Returns `true` if every cell holds a letter.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the coordinates of all empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        CellCoord::all(self.size).filter(|&coord| self.get(coord).is_none())
    }

    /// Returns the letters of `cells`, or `None` if any of them is empty.
    #[must_use]
    pub fn word_at(&self, cells: &[CellCoord]) -> Option<String> {
        cells
            .iter()
            .map(|&coord| self.get(coord).map(char::from))
            .collect()
    }

    /// Iterates over the rows, each as a slice of cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<u8>]> {
        self.cells.chunks(usize::from(self.size).max(1))
    }
}

impl Index<CellCoord> for LetterGrid {
    type Output = Option<u8>;

    fn index(&self, coord: CellCoord) -> &Self::Output {
        match self.offset(coord) {
            Some(i) => &self.cells[i],
            None => panic!("{coord} is outside a {0}x{0} grid", self.size),
        }
    }
}

impl Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            for cell in row {
                f.write_char(cell.map_or('.', char::from))?;
            }
        }
        Ok(())
    }
}

/// Error returned when parsing a [`LetterGrid`] fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseLetterGridError {
    /// The text contains no rows.
    #[display("grid text is empty")]
    Empty,
    /// There are more rows than the largest supported grid.
    #[display("grid has {rows} rows, at most {MAX_GRID_SIZE} are supported")]
    TooLarge {
        /// Number of rows found.
        rows: usize,
    },
    /// A row's length differs from the number of rows.
    #[display("row {row} has {len} cells, expected {expected}")]
    NotSquare {
        /// 0-indexed row.
        row: usize,
        /// Cells found in the row.
        len: usize,
        /// Number of rows, which every row must match.
        expected: usize,
    },
    /// A cell is neither a letter nor `.`.
    #[display("invalid cell character {ch:?} in row {row}")]
    InvalidChar {
        /// 0-indexed row.
        row: usize,
        /// Offending character.
        ch: char,
    },
}

impl FromStr for LetterGrid {
    type Err = ParseLetterGridError;

    /// Parses the text form, ignoring blank lines and surrounding whitespace.
    ///
    /// Lowercase letters are accepted and upper-cased.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(ParseLetterGridError::Empty);
        }
        let size = u8::try_from(rows.len())
            .ok()
            .filter(|&size| size <= MAX_GRID_SIZE)
            .ok_or(ParseLetterGridError::TooLarge { rows: rows.len() })?;

        let mut grid = Self::new(size);
        for (row, line) in (0..size).zip(&rows) {
            let len = line.chars().count();
            if len != rows.len() {
                return Err(ParseLetterGridError::NotSquare {
                    row: usize::from(row),
                    len,
                    expected: rows.len(),
                });
            }
            for (col, ch) in (0..size).zip(line.chars()) {
                if ch == '.' {
                    continue;
                }
                let letter = u8::try_from(ch)
                    .ok()
                    .filter(u8::is_ascii_alphabetic)
                    .ok_or(ParseLetterGridError::InvalidChar {
                        row: usize::from(row),
                        ch,
                    })?;
                grid.set(CellCoord::new(row, col), letter.to_ascii_uppercase());
            }
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = LetterGrid::new(4);
        assert_eq!(grid.size(), 4);
        assert!(!grid.is_filled());
        assert_eq!(grid.empty_cells().count(), 16);
        assert_eq!(grid.get(CellCoord::new(4, 0)), None);
    }

    #[test]
    fn test_set_and_fill() {
        let mut grid = LetterGrid::new(2);
        for (i, coord) in CellCoord::all(2).enumerate() {
            grid.set(coord, b"WORD"[i]);
        }
        assert!(grid.is_filled());
        assert_eq!(grid[CellCoord::new(1, 0)], Some(b'R'));
        assert_eq!(grid.to_string(), "WO\nRD");
        assert_eq!(
            grid.word_at(&[CellCoord::new(0, 0), CellCoord::new(1, 1)]),
            Some("WD".to_owned())
        );
    }

    #[test]
    #[should_panic(expected = "outside a 2x2 grid")]
    fn test_set_out_of_grid_panics() {
        LetterGrid::new(2).set(CellCoord::new(0, 2), b'A');
    }

    #[test]
    #[should_panic(expected = "invalid letter")]
    fn test_set_non_letter_panics() {
        LetterGrid::new(2).set(CellCoord::new(0, 0), b'1');
    }

    #[test]
    fn test_parse_round_trip() {
        let text = "AB.\n.CD\nE.F";
        let grid: LetterGrid = text.parse().unwrap();
        assert_eq!(grid.to_string(), text);
        let lower: LetterGrid = "  ab.\n .cd\n\n e.f  ".parse().unwrap();
        assert_eq!(lower, grid);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<LetterGrid>(), Err(ParseLetterGridError::Empty));
        assert_eq!(
            "AB\nC".parse::<LetterGrid>(),
            Err(ParseLetterGridError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            })
        );
        assert_eq!(
            "A1\nCD".parse::<LetterGrid>(),
            Err(ParseLetterGridError::InvalidChar { row: 0, ch: '1' })
        );
        let too_large = vec![".".repeat(27); 27].join("\n");
        assert_eq!(
            too_large.parse::<LetterGrid>(),
            Err(ParseLetterGridError::TooLarge { rows: 27 })
        );
    }
}
