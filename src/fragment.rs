//! Bounded stream fragments.
//!
//! A [`Fragment`] is a cheap, copyable cursor over a borrowed slice of
//! characters. It never mutates the underlying storage; advancing a fragment
//! only moves its own window forward. Every parser in the crate receives one
//! by value, so a failed parse leaves the caller's fragment untouched.

/// A forward-only view over a contiguous run of characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    chars: &'a [char],
}

impl<'a> Fragment<'a> {
    /// Create a fragment covering all of `chars`.
    pub fn new(chars: &'a [char]) -> Self {
        Self { chars }
    }

    /// True if at least one element remains.
    pub fn has_next(&self) -> bool {
        !self.chars.is_empty()
    }

    /// Return the next element without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.chars.first().copied()
    }

    /// Number of elements remaining.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The remaining elements as a slice.
    pub fn as_slice(&self) -> &'a [char] {
        self.chars
    }

    /// Truncate to at most the first `n` elements ("bounded sub-stream").
    pub fn limit(self, n: usize) -> Self {
        Self {
            chars: &self.chars[..n.min(self.chars.len())],
        }
    }

    /// Skip `n` elements, saturating at the end.
    pub fn advance(self, n: usize) -> Self {
        Self {
            chars: &self.chars[n.min(self.chars.len())..],
        }
    }

    /// True if the fragment begins with `prefix`.
    pub fn starts_with(&self, prefix: &[char]) -> bool {
        self.chars.starts_with(prefix)
    }

    /// Copy the remaining elements into an owned string.
    pub fn to_text(&self) -> String {
        self.chars.iter().collect()
    }
}

impl Iterator for Fragment<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let (&first, rest) = self.chars.split_first()?;
        self.chars = rest;
        Some(first)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.chars.len(), Some(self.chars.len()))
    }
}

impl ExactSizeIterator for Fragment<'_> {}
