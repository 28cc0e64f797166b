//! Normalising raw word input.
//!
//! Puzzle words come from free-form spelling lists, so each entry is reduced to
//! its uppercase ASCII letters before placement. The original text is kept as a
//! label for display.

use std::ops::Index;

/// Shortest normalised word accepted into a [`WordList`].
///
/// A single letter cannot be selected, since a selection needs at least two
/// cells.
pub const MIN_WORD_LEN: usize = 2;

/// Reduces a raw string to its placeable form.
///
/// Surrounding whitespace is trimmed, every character outside `A`-`Z`/`a`-`z` is
/// dropped, and the rest is upper-cased. Returns `None` if nothing remains.
///
/// # Examples
///
/// ```
/// use wordlace_core::word::normalize;
///
/// assert_eq!(normalize("  ice-cream! "), Some("ICECREAM".to_owned()));
/// assert_eq!(normalize("don't"), Some("DONT".to_owned()));
/// assert_eq!(normalize(" 42 "), None);
/// ```
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    let word: String = raw
        .trim()
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|ch| ch.to_ascii_uppercase())
        .collect();
    (!word.is_empty()).then_some(word)
}

/// A normalised word and the text it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordEntry {
    word: String,
    label: String,
}

impl WordEntry {
    /// The normalised word, as placed in the grid.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The trimmed input text, for display.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// An ordered list of distinct, normalised words.
///
/// Entries keep first-seen input order. Inputs that normalise to nothing, to a
/// word shorter than [`MIN_WORD_LEN`], or to a word already in the list are
/// skipped.
///
/// # Examples
///
/// ```
/// use wordlace_core::WordList;
///
/// let words = WordList::from_raw(["Cat", "dog", "CAT!", "a", "", "Dog house"]);
/// let normalized: Vec<_> = words.words().collect();
/// assert_eq!(normalized, ["CAT", "DOG", "DOGHOUSE"]);
/// assert_eq!(words.label_of("CAT"), Some("Cat"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WordList {
    entries: Vec<WordEntry>,
}

impl WordList {
    /// Builds a list from raw strings.
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for raw in raw {
            list.push(raw.as_ref());
        }
        list
    }

    /// Builds a list from free text, one word per line or comma-separated.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordlace_core::WordList;
    ///
    /// let words = WordList::parse("apple, pear\nplum\n\n");
    /// assert_eq!(words.len(), 3);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::from_raw(text.split([',', '\n']))
    }

    /// Adds a raw word, returning `true` if it produced a new entry.
    pub fn push(&mut self, raw: &str) -> bool {
        let Some(word) = normalize(raw) else {
            return false;
        };
        if word.len() < MIN_WORD_LEN || self.contains(&word) {
            return false;
        }
        self.entries.push(WordEntry {
            word,
            label: raw.trim().to_owned(),
        });
        true
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no playable words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries in input order.
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Iterates over the normalised words in input order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(WordEntry::word)
    }

    /// Returns `true` if `word` (already normalised) is in the list.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.iter().any(|entry| entry.word == word)
    }

    /// Returns the display label for a normalised word.
    #[must_use]
    pub fn label_of(&self, word: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.word == word)
            .map(WordEntry::label)
    }
}

impl Index<usize> for WordList {
    type Output = WordEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a WordEntry;
    type IntoIter = std::slice::Iter<'a, WordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
