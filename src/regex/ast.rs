//! Parsed form of a regex-subset expression.

use super::match_rc::MatchRc;

/// Maximum bound used when the `max` field is left empty.
pub const UNBOUNDED: usize = usize::MAX;

/// One alternative of a class list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassMember {
    /// `'text'`: matches the exact text, consuming its length.
    Literal(Vec<char>),
    /// `a-z`: matches one character in `first..=last`.
    Interval { first: char, last: char },
}

impl ClassMember {
    pub fn literal(text: &str) -> Self {
        ClassMember::Literal(text.chars().collect())
    }

    pub fn interval(first: char, last: char) -> Self {
        ClassMember::Interval { first, last }
    }
}

impl std::fmt::Display for ClassMember {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassMember::Literal(text) => {
                f.write_str("'")?;
                for &c in text {
                    if c == '\'' || c == '\\' {
                        f.write_str("\\")?;
                    }
                    write!(f, "{c}")?;
                }
                f.write_str("'")
            }
            ClassMember::Interval { first, last } => write!(f, "{first}-{last}"),
        }
    }
}

/// A class list repeated between `min` and `max` times, both inclusive.
///
/// `min <= max` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regex {
    members: Vec<ClassMember>,
    min: usize,
    max: usize,
}

impl Regex {
    pub fn new(members: Vec<ClassMember>, min: usize, max: usize) -> Result<Self, MatchRc> {
        if min > max {
            return Err(MatchRc::MinMoreMax);
        }
        Ok(Self { members, min, max })
    }

    pub fn members(&self) -> &[ClassMember] {
        &self.members
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn is_unbounded(&self) -> bool {
        self.max == UNBOUNDED
    }
}

impl std::fmt::Display for Regex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for member in &self.members {
            write!(f, "{member}")?;
        }
        write!(f, ":{}:", self.min)?;
        if !self.is_unbounded() {
            write!(f, "{}", self.max)?;
        }
        f.write_str("}")
    }
}
