//! Bounded regex subset.
//!
//! An expression is a class list repeated between two bounds:
//!
//! | Form               | Meaning                                         |
//! |--------------------|-------------------------------------------------|
//! | `{L:min:max}`      | between `min` and `max` repetitions of `L`      |
//! | `{L:min:}`         | at least `min` repetitions                      |
//! | `{L::max}`         | at most `max` repetitions                       |
//! | `'text'`           | class member: the exact text                    |
//! | `a-z`              | class member: one character in `a..=z`          |
//!
//! Members of a class list are written back to back with no separator. One
//! repetition is one member; members are tried in declaration order and the
//! first that matches is taken. Matching is greedy and anchored at the start
//! of the input; [`find`] scans forward explicitly.
//!
//! ```
//! use patex::regex::{MatchRc, search};
//!
//! assert_eq!(search("{a-z:1:3}", "abcDEF").map(|m| m.text), Ok("abc".to_string()));
//! assert_eq!(search("{a-z:3:1}", "abc"), Err(MatchRc::MinMoreMax));
//! ```

pub mod ast;
pub mod match_rc;
pub mod matcher;
pub mod member;
pub mod parser;

pub use ast::{ClassMember, Regex, UNBOUNDED};
pub use match_rc::MatchRc;
pub use matcher::Match;
pub use parser::parse;

use crate::fragment::Fragment;

impl Regex {
    /// Parse a `{members:min:max}` expression.
    pub fn parse(text: &str) -> Result<Regex, MatchRc> {
        parser::parse(text)
    }

    /// Match at the start of `input` only.
    pub fn match_at(&self, input: Fragment<'_>) -> Result<Match, MatchRc> {
        matcher::match_at(self, input)
    }

    /// Scan `input` forward for the first non-empty match.
    pub fn find(&self, input: Fragment<'_>) -> Result<Match, MatchRc> {
        matcher::find(self, input)
    }
}

/// Parse `pattern` and match it at the start of `input`.
pub fn search(pattern: &str, input: &str) -> Result<Match, MatchRc> {
    let regex = Regex::parse(pattern)?;
    let chars: Vec<char> = input.chars().collect();
    regex.match_at(Fragment::new(&chars))
}

/// Parse `pattern` and scan `input` for its first match.
pub fn find(pattern: &str, input: &str) -> Result<Match, MatchRc> {
    let regex = Regex::parse(pattern)?;
    let chars: Vec<char> = input.chars().collect();
    regex.find(Fragment::new(&chars))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_examples() {
        let m = search("{'aa':0:2}", "aaaaaabb").unwrap();
        assert_eq!((m.text.as_str(), m.len, m.offset), ("aaaa", 4, 0));
        assert_eq!(search("{a-z:1:3}", "abcDEF").map(|m| m.text), Ok("abc".into()));
    }

    #[test]
    fn search_errors() {
        assert_eq!(search("{a-z:1:3", "abc"), Err(MatchRc::RegexParsingError));
        assert_eq!(search("{a-z:2:1}", "abc"), Err(MatchRc::MinMoreMax));
        assert_eq!(search("{0-9:1:3}", "abc"), Err(MatchRc::DontMatch));
    }

    #[test]
    fn find_reports_offset() {
        let m = find("{0-9:1:}", "order 66").unwrap();
        assert_eq!((m.offset, m.text.as_str()), (6, "66"));
    }

    #[test]
    fn search_does_not_scan() {
        assert_eq!(search("{0-9:1:}", "order 66"), Err(MatchRc::DontMatch));
    }

    #[test]
    fn search_is_repeatable() {
        let first = search("{a-z'-':1:}", "well-known fact");
        assert_eq!(first, search("{a-z'-':1:}", "well-known fact"));
        assert_eq!(first.map(|m| m.text), Ok("well-known".into()));
    }
}
