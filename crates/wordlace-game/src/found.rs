/// Placements found so far, in the order they were found.
///
/// Append-only while a puzzle is being played; cleared when the puzzle is
/// restarted or replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoundWords {
    order: Vec<usize>,
    found: Vec<bool>,
}

impl FoundWords {
    /// Creates an empty set for a puzzle with `placements` placements.
    #[must_use]
    pub fn new(placements: usize) -> Self {
        Self {
            order: Vec::with_capacity(placements),
            found: vec![false; placements],
        }
    }

    /// Records `placement` as found.
    ///
    /// Returns `false` if it was already found or is not a placement of this
    /// puzzle.
    pub fn insert(&mut self, placement: usize) -> bool {
        match self.found.get_mut(placement) {
            Some(found @ false) => {
                *found = true;
                self.order.push(placement);
                true
            }
            _ => false,
        }
    }

    /// Returns `true` if `placement` has been found.
    #[must_use]
    pub fn contains(&self, placement: usize) -> bool {
        self.found.get(placement).copied().unwrap_or(false)
    }

    /// Number of found placements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if nothing has been found yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns `true` if every placement has been found.
    ///
    /// A puzzle without placements is never complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.found.is_empty() && self.order.len() == self.found.len()
    }

    /// Placement indices in the order they were found.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    /// Forgets everything found so far.
    pub fn clear(&mut self) {
        self.order.clear();
        self.found.fill(false);
    }
}
