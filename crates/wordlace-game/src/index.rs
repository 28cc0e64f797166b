use std::{
    collections::HashMap,
    fmt::{self, Display, Write as _},
};

use wordlace_core::{CellCoord, Placement};

/// Order-sensitive key of a cell path, in the form `"r,c|r,c|..."`.
///
/// # Examples
///
/// ```
/// use wordlace_core::CellCoord;
/// use wordlace_game::PathKey;
///
/// let key = PathKey::new(&[CellCoord::new(0, 1), CellCoord::new(1, 2)]);
/// assert_eq!(key.as_str(), "0,1|1,2");
/// let cells = [CellCoord::new(0, 1), CellCoord::new(1, 2)];
/// assert_eq!(PathKey::reversed(&cells).as_str(), "1,2|0,1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathKey(String);

impl PathKey {
    /// Builds the key of `cells` in the given order.
    #[must_use]
    pub fn new(cells: &[CellCoord]) -> Self {
        Self::from_cells(cells.iter().copied())
    }

    /// Builds the key of `cells` traversed from last to first.
    #[must_use]
    pub fn reversed(cells: &[CellCoord]) -> Self {
        Self::from_cells(cells.iter().rev().copied())
    }

    fn from_cells(cells: impl Iterator<Item = CellCoord>) -> Self {
        let mut key = String::new();
        for (i, cell) in cells.enumerate() {
            if i > 0 {
                key.push('|');
            }
            // Writing to a `String` cannot fail.
            let _ = write!(key, "{},{}", cell.row, cell.col);
        }
        Self(key)
    }

    /// The serialised key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lookup from cell paths to the placements they spell.
///
/// Each placement is reachable from its cells in writing order and in reverse,
/// so a word is matched whichever end a drag starts from. The index is built
/// once per puzzle and never modified.
///
/// # Examples
///
/// ```
/// use wordlace_core::{CellCoord, Direction, Placement};
/// use wordlace_game::PlacementIndex;
///
/// let placements = [Placement::from_line("CAT", CellCoord::new(0, 0), Direction::RIGHT).unwrap()];
/// let index = PlacementIndex::new(&placements);
///
/// let forward = [CellCoord::new(0, 0), CellCoord::new(0, 1), CellCoord::new(0, 2)];
/// let backward = [CellCoord::new(0, 2), CellCoord::new(0, 1), CellCoord::new(0, 0)];
/// assert_eq!(index.lookup(&forward), Some(0));
/// assert_eq!(index.lookup(&backward), Some(0));
/// assert_eq!(index.lookup(&forward[..2]), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlacementIndex {
    paths: HashMap<PathKey, usize>,
    placements: usize,
}

impl PlacementIndex {
    /// Indexes `placements`; lookups return positions in this slice.
    #[must_use]
    pub fn new(placements: &[Placement]) -> Self {
        let mut paths = HashMap::with_capacity(placements.len() * 2);
        for (i, placement) in placements.iter().enumerate() {
            paths.entry(PathKey::new(placement.cells())).or_insert(i);
            paths.entry(PathKey::reversed(placement.cells())).or_insert(i);
        }
        Self {
            paths,
            placements: placements.len(),
        }
    }

    /// Returns the index of the placement spelled by `path`, in either direction.
    #[must_use]
    pub fn lookup(&self, path: &[CellCoord]) -> Option<usize> {
        self.lookup_key(&PathKey::new(path))
    }

    /// Returns the index of the placement with the given path key.
    #[must_use]
    pub fn lookup_key(&self, key: &PathKey) -> Option<usize> {
        self.paths.get(key).copied()
    }

    /// Number of indexed placements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placements
    }

    /// Returns `true` if no placements are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements == 0
    }
}

#[cfg(test)]
mod tests {
    use wordlace_core::Direction;

    use super::*;

    fn placements() -> Vec<Placement> {
        vec![
            Placement::from_line("SUN", CellCoord::new(0, 0), Direction::DOWN_RIGHT).unwrap(),
            Placement::from_line("NAP", CellCoord::new(2, 2), Direction::LEFT).unwrap(),
            Placement::from_line("ABA", CellCoord::new(3, 0), Direction::RIGHT).unwrap(),
        ]
    }

    #[test]
    fn test_lookup_both_directions() {
        let placements = placements();
        let index = PlacementIndex::new(&placements);
        assert_eq!(index.len(), 3);
        for (i, placement) in placements.iter().enumerate() {
            let mut reversed = placement.cells().to_vec();
            reversed.reverse();
            assert_eq!(index.lookup(placement.cells()), Some(i));
            assert_eq!(index.lookup(&reversed), Some(i));
        }
    }

    #[test]
    fn test_crossing_words_share_cells_but_not_keys() {
        let placements = placements();
        let index = PlacementIndex::new(&placements);
        // SUN and NAP share the cell (2, 2).
        assert_eq!(
            index.lookup(&[CellCoord::new(2, 2), CellCoord::new(2, 1)]),
            None
        );
        assert_eq!(index.lookup(&[CellCoord::new(2, 2)]), None);
        assert_eq!(index.lookup(&[]), None);
    }

    #[test]
    fn test_empty_index() {
        let index = PlacementIndex::new(&[]);
        assert!(index.is_empty());
        assert_eq!(index.lookup(&[CellCoord::new(0, 0)]), None);
    }

    #[test]
    fn test_path_key_format() {
        let cells = [CellCoord::new(10, 2), CellCoord::new(9, 3)];
        assert_eq!(PathKey::new(&cells).to_string(), "10,2|9,3");
        assert_eq!(PathKey::new(&[]).as_str(), "");
    }
}
