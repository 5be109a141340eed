//! Greedy bounded-repetition matcher.
//!
//! All offsets and lengths are in characters.

use log::{debug, trace};

use crate::fragment::Fragment;

use super::ast::Regex;
use super::match_rc::MatchRc;
use super::member::first_member_len;

/// A successful regex-subset match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Start of the match relative to the searched fragment.
    pub offset: usize,
    /// The matched characters.
    pub text: String,
    /// Length of the match.
    pub len: usize,
    /// Number of class-list repetitions consumed.
    pub repetitions: usize,
}

impl Match {
    fn empty(offset: usize) -> Self {
        Self {
            offset,
            text: String::new(),
            len: 0,
            repetitions: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Match `regex` at the very start of `input`.
///
/// Takes the longest run of at most `max` repetitions and accepts it if it
/// holds at least `min`. Does not scan forward; see [`find`] for that.
pub fn match_at(regex: &Regex, input: Fragment<'_>) -> Result<Match, MatchRc> {
    if regex.min() == 0 && regex.max() == 0 {
        return Ok(Match::empty(0));
    }

    let mut cursor = input;
    let mut count = 0usize;
    while count < regex.max() {
        match first_member_len(regex.members(), cursor) {
            Some(n) => {
                cursor = cursor.advance(n);
                count += 1;
                if n == 0 {
                    // a zero-width member never fails, so every count up to
                    // max is reachable without consuming input
                    count = count.max(regex.min());
                    break;
                }
            }
            None => break,
        }
    }

    let len = input.len() - cursor.len();
    trace!("{regex}: {count} repetition(s), {len} char(s)");
    if count < regex.min() {
        return Err(MatchRc::DontMatch);
    }
    Ok(Match {
        offset: 0,
        text: input.limit(len).to_text(),
        len,
        repetitions: count,
    })
}

/// Scan `input` for the first offset where `regex` matches something.
///
/// Offsets whose match is empty are skipped; if no offset yields a
/// non-empty match, an empty match at offset 0 is returned when the regex
/// accepts zero repetitions.
pub fn find(regex: &Regex, input: Fragment<'_>) -> Result<Match, MatchRc> {
    for offset in 0..input.len() {
        match match_at(regex, input.advance(offset)) {
            Ok(m) if !m.is_empty() => {
                debug!("{regex}: found at offset {offset}");
                return Ok(Match { offset, ..m });
            }
            Ok(_) | Err(MatchRc::DontMatch) => {}
            Err(rc) => return Err(rc),
        }
    }
    // nothing non-empty anywhere: only the empty match at the start remains
    match_at(regex, input)
}
