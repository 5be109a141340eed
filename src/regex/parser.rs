//! Grammar parser for `{members:min:max}` expressions.
//!
//! The grammar is read with the extraction driver itself: class members and
//! class lists are [`Extractor`]s, and the three accepted shapes are plain
//! extraction patterns tried in order.

use log::debug;

use crate::driver::extract_from;
use crate::extractor::{Extractor, scan_quoted};
use crate::fragment::Fragment;
use crate::pattern::Pattern;
use crate::slot::Slot;

use super::ast::{ClassMember, Regex, UNBOUNDED};
use super::match_rc::MatchRc;

/// `'text'` class member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralMember(pub String);

impl Extractor for LiteralMember {
    fn probe(input: Fragment<'_>) -> usize {
        scan_quoted(input, '\'').map_or(0, |(n, _)| n)
    }

    fn to(input: Fragment<'_>) -> (usize, Option<Self>) {
        match scan_quoted(input, '\'') {
            Some((n, text)) => (n, Some(LiteralMember(text))),
            None => (0, None),
        }
    }
}

/// `first-last` class member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalMember {
    pub first: char,
    pub last: char,
}

impl Extractor for IntervalMember {
    fn probe(input: Fragment<'_>) -> usize {
        match input.as_slice() {
            [_, '-', _, ..] => 3,
            _ => 0,
        }
    }

    fn to(input: Fragment<'_>) -> (usize, Option<Self>) {
        match input.as_slice() {
            &[first, '-', last, ..] => (3, Some(IntervalMember { first, last })),
            _ => (0, None),
        }
    }
}

/// A maximal run of class members with no separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassList(pub Vec<ClassMember>);

/// Parse one member, trying the quoted literal before the interval.
fn class_member(input: Fragment<'_>) -> Option<(usize, ClassMember)> {
    if let (n, Some(LiteralMember(text))) = LiteralMember::to(input) {
        return Some((n, ClassMember::literal(&text)));
    }
    match IntervalMember::to(input) {
        (n, Some(IntervalMember { first, last })) => Some((n, ClassMember::interval(first, last))),
        _ => None,
    }
}

impl Extractor for ClassList {
    fn probe(input: Fragment<'_>) -> usize {
        Self::to(input).0
    }

    fn to(mut input: Fragment<'_>) -> (usize, Option<Self>) {
        let mut consumed = 0;
        let mut members = Vec::new();
        while let Some((n, member)) = class_member(input) {
            consumed += n;
            input = input.advance(n);
            members.push(member);
        }
        if members.is_empty() {
            (0, None)
        } else {
            (consumed, Some(ClassList(members)))
        }
    }
}

type Parsed = (Vec<ClassMember>, usize, usize);

/// `{list:min:max}`
fn explicit_bounds(input: Fragment<'_>) -> Option<Parsed> {
    let mut list: Option<ClassList> = None;
    let mut min: Option<usize> = None;
    let mut max: Option<usize> = None;
    let slots: &mut [&mut dyn Slot] = &mut [&mut list, &mut min, &mut max];
    if !extract_from(input, Pattern::new("{$:$:$}"), slots).is_ok() {
        return None;
    }
    Some((list?.0, min?, max?))
}

/// `{list:min:}`
fn open_max(input: Fragment<'_>) -> Option<Parsed> {
    let mut list: Option<ClassList> = None;
    let mut min: Option<usize> = None;
    let slots: &mut [&mut dyn Slot] = &mut [&mut list, &mut min];
    if !extract_from(input, Pattern::new("{$:$:}"), slots).is_ok() {
        return None;
    }
    Some((list?.0, min?, UNBOUNDED))
}

/// `{list::max}`
fn open_min(input: Fragment<'_>) -> Option<Parsed> {
    let mut list: Option<ClassList> = None;
    let mut max: Option<usize> = None;
    let slots: &mut [&mut dyn Slot] = &mut [&mut list, &mut max];
    if !extract_from(input, Pattern::new("{$::$}"), slots).is_ok() {
        return None;
    }
    Some((list?.0, 0, max?))
}

/// Parse a regex-subset expression from a fragment.
pub fn parse_from(input: Fragment<'_>) -> Result<Regex, MatchRc> {
    let (members, min, max) = explicit_bounds(input)
        .or_else(|| open_max(input))
        .or_else(|| open_min(input))
        .ok_or(MatchRc::RegexParsingError)?;
    debug!("regex: {} member(s), bounds {min}..={max}", members.len());
    Regex::new(members, min, max)
}

/// Parse a regex-subset expression such as `{a-z'_':1:8}`.
pub fn parse(text: &str) -> Result<Regex, MatchRc> {
    let chars: Vec<char> = text.chars().collect();
    parse_from(Fragment::new(&chars))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(s: &str) -> Regex {
        parse(s).expect("parse should succeed")
    }

    fn parse_err(s: &str) -> MatchRc {
        parse(s).expect_err("parse should fail")
    }

    // --- Members ---

    #[test]
    fn literal_member() {
        let rx = parse_ok("{'aa':0:2}");
        assert_eq!(rx.members(), &[ClassMember::literal("aa")]);
        assert_eq!((rx.min(), rx.max()), (0, 2));
    }

    #[test]
    fn interval_member() {
        let rx = parse_ok("{a-z:1:3}");
        assert_eq!(rx.members(), &[ClassMember::interval('a', 'z')]);
        assert_eq!((rx.min(), rx.max()), (1, 3));
    }

    #[test]
    fn mixed_members_keep_order() {
        let rx = parse_ok("{a-z'_'0-9:1:8}");
        assert_eq!(
            rx.members(),
            &[
                ClassMember::interval('a', 'z'),
                ClassMember::literal("_"),
                ClassMember::interval('0', '9'),
            ]
        );
    }

    #[test]
    fn escaped_quote_in_literal() {
        let rx = parse_ok(r"{'it\'s':1:1}");
        assert_eq!(rx.members(), &[ClassMember::literal("it's")]);
    }

    #[test]
    fn interval_extractor_needs_dash() {
        let input: Vec<char> = "a+z".chars().collect();
        assert_eq!(IntervalMember::to(Fragment::new(&input)), (0, None));
        assert_eq!(IntervalMember::probe(Fragment::new(&input)), 0);
    }

    #[test]
    fn class_list_stops_at_first_non_member() {
        let input: Vec<char> = "a-z'x':1".chars().collect();
        let (n, list) = ClassList::to(Fragment::new(&input));
        assert_eq!(n, 6);
        assert_eq!(list.map(|l| l.0.len()), Some(2));
    }

    // --- Bounds ---

    #[test]
    fn empty_max_is_unbounded() {
        let rx = parse_ok("{0-9:2:}");
        assert_eq!(rx.min(), 2);
        assert!(rx.is_unbounded());
    }

    #[test]
    fn empty_min_is_zero() {
        let rx = parse_ok("{0-9::4}");
        assert_eq!((rx.min(), rx.max()), (0, 4));
    }

    #[test]
    fn both_bounds_empty_is_rejected() {
        assert_eq!(parse_err("{0-9::}"), MatchRc::RegexParsingError);
    }

    #[test]
    fn display_round_trips() {
        for text in ["{'aa':0:2}", "{a-z'_':1:}", "{0-9:0:0}"] {
            assert_eq!(parse_ok(text).to_string(), text);
        }
    }

    // --- Errors ---

    #[test]
    fn min_more_max() {
        assert_eq!(parse_err("{a-z:5:2}"), MatchRc::MinMoreMax);
    }

    #[test]
    fn missing_braces() {
        assert_eq!(parse_err("a-z:1:2"), MatchRc::RegexParsingError);
        assert_eq!(parse_err("{a-z:1:2"), MatchRc::RegexParsingError);
    }

    #[test]
    fn empty_class_list() {
        assert_eq!(parse_err("{:1:2}"), MatchRc::RegexParsingError);
    }

    #[test]
    fn unclosed_literal() {
        assert_eq!(parse_err("{'aa:1:2}"), MatchRc::RegexParsingError);
    }

    #[test]
    fn trailing_text() {
        assert_eq!(parse_err("{a-z:1:2}x"), MatchRc::RegexParsingError);
    }
}
