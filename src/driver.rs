//! The extraction driver.
//!
//! Walks the pattern and the input in lockstep. Literal pattern characters
//! must equal the input character at the same position; each joker hands the
//! remaining input to the next slot's extractor. Matching is single-pass and
//! never backtracks across a literal.

use log::{debug, trace};

use crate::extract_rc::ExtractRc;
use crate::fragment::Fragment;
use crate::pattern::{Pattern, PatternIter};
use crate::slot::{DynSlot, Kind, Slot, Value};

/// Extract values from `input` into `slots` according to `pattern`.
///
/// ```
/// use patex::{ExtractRc, extract};
///
/// let mut age: Option<i32> = None;
/// let mut word: Option<String> = None;
/// let rc = extract(
///     "j'ai 12 ans et \"demi\"!",
///     "j'ai $ ans et $!",
///     &mut [&mut age, &mut word],
/// );
/// assert_eq!(rc, ExtractRc::Ok);
/// assert_eq!(age, Some(12));
/// assert_eq!(word.as_deref(), Some("demi"));
/// ```
pub fn extract(input: &str, pattern: &str, slots: &mut [&mut dyn Slot]) -> ExtractRc {
    let chars: Vec<char> = input.chars().collect();
    extract_from(Fragment::new(&chars), Pattern::new(pattern), slots)
}

/// Like [`extract`], over an existing fragment and with an explicit pattern.
///
/// On any outcome other than [`ExtractRc::Ok`] every slot is cleared.
pub fn extract_from(
    input: Fragment<'_>,
    pattern: Pattern<'_>,
    slots: &mut [&mut dyn Slot],
) -> ExtractRc {
    let rc = run(input, pattern, slots);
    if !rc.is_ok() {
        debug!("extract {:?}: {rc:?}", pattern.text());
        for slot in slots.iter_mut() {
            slot.clear();
        }
    }
    rc
}

/// Extract values whose kinds are only known at run time.
pub fn extract_kinds(input: &str, pattern: &str, kinds: &[Kind]) -> (ExtractRc, Vec<Option<Value>>) {
    let chars: Vec<char> = input.chars().collect();
    extract_kinds_from(Fragment::new(&chars), Pattern::new(pattern), kinds)
}

pub fn extract_kinds_from(
    input: Fragment<'_>,
    pattern: Pattern<'_>,
    kinds: &[Kind],
) -> (ExtractRc, Vec<Option<Value>>) {
    let mut slots: Vec<DynSlot> = kinds.iter().copied().map(DynSlot::new).collect();
    let mut refs: Vec<&mut dyn Slot> = slots.iter_mut().map(|s| s as &mut dyn Slot).collect();
    let rc = extract_from(input, pattern, &mut refs);
    let values = slots.into_iter().map(DynSlot::into_value).collect();
    (rc, values)
}

fn run(mut input: Fragment<'_>, pattern: Pattern<'_>, slots: &mut [&mut dyn Slot]) -> ExtractRc {
    let jokers = pattern.joker_count();
    if jokers < slots.len() {
        return ExtractRc::PatternMissingJoker;
    }
    if jokers > slots.len() {
        return ExtractRc::PatternTooManyJoker;
    }

    let mut literals = pattern.iter();
    for (index, slot) in slots.iter_mut().enumerate() {
        input = match match_literals(input, &mut literals, pattern.joker()) {
            Ok(rest) => rest,
            Err(rc) => return rc,
        };
        if input.is_empty() && !slot.is_tail() {
            return ExtractRc::EmptyInputTail;
        }
        let consumed = slot.fill(input);
        if consumed == 0 && !slot.is_tail() {
            debug!("slot {index} rejected input at {} remaining", input.len());
            return ExtractRc::ParsingFailed;
        }
        trace!("slot {index} consumed {consumed}");
        input = input.advance(consumed);
    }

    match match_literals(input, &mut literals, pattern.joker()) {
        Ok(rest) if rest.has_next() => ExtractRc::NotEmptyInputTail,
        Ok(_) => ExtractRc::Ok,
        Err(rc) => rc,
    }
}

/// Match literal pattern characters up to the next joker or the pattern end.
///
/// Jokers are consumed from `literals`; the returned fragment is the input
/// after the last matched literal.
fn match_literals<'a>(
    mut input: Fragment<'a>,
    literals: &mut PatternIter<'_>,
    joker: char,
) -> Result<Fragment<'a>, ExtractRc> {
    for expected in literals.by_ref() {
        if expected == joker {
            break;
        }
        match input.next() {
            Some(actual) if actual == expected => {}
            Some(_) => return Err(ExtractRc::MismatchInputPattern),
            None => return Err(ExtractRc::NotEmptyPatternTail),
        }
    }
    Ok(input)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn literal_pattern_matches_only_itself(s in "[a-z ]{0,12}", t in "[a-z ]{0,12}") {
            let rc = extract(&t, &s, &mut []);
            if s == t {
                prop_assert_eq!(rc, ExtractRc::Ok);
            } else {
                prop_assert!(matches!(
                    rc,
                    ExtractRc::MismatchInputPattern
                        | ExtractRc::NotEmptyInputTail
                        | ExtractRc::NotEmptyPatternTail
                ));
            }
        }

        #[test]
        fn unsigned_round_trips(n in any::<u32>()) {
            let mut slot: Option<u64> = None;
            let rc = extract(&format!("<{n}>"), "<$>", &mut [&mut slot]);
            prop_assert_eq!(rc, ExtractRc::Ok);
            prop_assert_eq!(slot, Some(u64::from(n)));
        }

        #[test]
        fn signed_round_trips(n in -1_000_000i64..1_000_000) {
            let mut slot: Option<i64> = None;
            prop_assert_eq!(extract(&n.to_string(), "$", &mut [&mut slot]), ExtractRc::Ok);
            prop_assert_eq!(slot, Some(n));
        }

        #[test]
        fn extraction_is_idempotent(input in "[a-z0-9 \"]{0,16}") {
            let first = extract_kinds(&input, "$ $", &[Kind::Unsigned, Kind::Tail]);
            let second = extract_kinds(&input, "$ $", &[Kind::Unsigned, Kind::Tail]);
            prop_assert_eq!(first, second);
        }
    }
}
