//! Extraction patterns: literal text interleaved with jokers.

use std::str::Chars;

/// The joker used when none is given explicitly.
pub const DEFAULT_JOKER: char = '$';

/// An extraction pattern and the joker character it uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern<'p> {
    text: &'p str,
    joker: char,
}

impl<'p> Pattern<'p> {
    pub fn new(text: &'p str) -> Self {
        Self::with_joker(text, DEFAULT_JOKER)
    }

    pub fn with_joker(text: &'p str, joker: char) -> Self {
        Self { text, joker }
    }

    pub fn text(&self) -> &'p str {
        self.text
    }

    pub fn joker(&self) -> char {
        self.joker
    }

    /// Number of jokers in the pattern.
    pub fn joker_count(&self) -> usize {
        self.iter().filter(|&c| c == self.joker).count()
    }

    pub fn iter(&self) -> PatternIter<'p> {
        PatternIter {
            chars: self.text.chars(),
        }
    }
}

impl<'p> From<&'p str> for Pattern<'p> {
    fn from(text: &'p str) -> Self {
        Self::new(text)
    }
}

/// Plain character iterator over a pattern.
///
/// Jokers are yielded like any other character; the driver compares them by
/// identity.
#[derive(Debug, Clone)]
pub struct PatternIter<'p> {
    chars: Chars<'p>,
}

impl Iterator for PatternIter<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        self.chars.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_default_jokers() {
        assert_eq!(Pattern::new("j'ai $ ans et $!").joker_count(), 2);
        assert_eq!(Pattern::new("plain").joker_count(), 0);
    }

    #[test]
    fn custom_joker_is_not_dollar() {
        let p = Pattern::with_joker("cost $%", '%');
        assert_eq!(p.joker(), '%');
        assert_eq!(p.joker_count(), 1);
    }

    #[test]
    fn iterator_yields_jokers_verbatim() {
        let p = Pattern::new("a$b");
        assert_eq!(p.iter().collect::<String>(), "a$b");
        assert_eq!(p.iter().filter(|&c| c == p.joker()).count(), 1);
    }
}
