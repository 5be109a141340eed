//! Per-type parsers used by the extraction driver.
//!
//! Each parser is a pure function of the input prefix. `probe` reports how
//! many elements a value would consume without building it; `to` builds the
//! value. A consumed length of zero always means "no match".

use crate::fragment::Fragment;

/// A type that can be parsed from the front of a [`Fragment`].
pub trait Extractor: Sized {
    /// True for the "consume rest verbatim" sentinel.
    const IS_TAIL: bool = false;

    /// Number of elements a value of this type would consume, or 0.
    fn probe(input: Fragment<'_>) -> usize;

    /// Parse a value, returning the consumed length alongside it.
    fn to(input: Fragment<'_>) -> (usize, Option<Self>);
}

/// Probe `input` for `T`, then parse from the fragment bounded to that length.
///
/// The parser never sees elements past its probe length.
pub(crate) fn bounded<T: Extractor>(input: Fragment<'_>) -> (usize, Option<T>) {
    let n = T::probe(input);
    T::to(input.limit(n))
}

/// Captures every remaining input element verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tail(pub String);

impl Tail {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Tail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Extractor for Tail {
    const IS_TAIL: bool = true;

    fn probe(input: Fragment<'_>) -> usize {
        input.len()
    }

    fn to(input: Fragment<'_>) -> (usize, Option<Self>) {
        (input.len(), Some(Tail(input.to_text())))
    }
}

impl Extractor for char {
    fn probe(input: Fragment<'_>) -> usize {
        usize::from(input.has_next())
    }

    fn to(mut input: Fragment<'_>) -> (usize, Option<Self>) {
        match input.next() {
            Some(c) => (1, Some(c)),
            None => (0, None),
        }
    }
}

/// Scan a `delim`-quoted run at the front of `input`.
///
/// Returns the consumed length (both delimiters included) and the unescaped
/// content. A backslash takes the following element literally.
pub(crate) fn scan_quoted(mut input: Fragment<'_>, delim: char) -> Option<(usize, String)> {
    if input.next()? != delim {
        return None;
    }
    let mut consumed = 1;
    let mut text = String::new();
    while let Some(c) = input.next() {
        consumed += 1;
        if c == delim {
            return Some((consumed, text));
        }
        if c == '\\' {
            let escaped = input.next()?;
            consumed += 1;
            text.push(escaped);
        } else {
            text.push(c);
        }
    }
    None
}

impl Extractor for String {
    fn probe(input: Fragment<'_>) -> usize {
        scan_quoted(input, '"').map_or(0, |(n, _)| n)
    }

    fn to(input: Fragment<'_>) -> (usize, Option<Self>) {
        match scan_quoted(input, '"') {
            Some((n, text)) => (n, Some(text)),
            None => (0, None),
        }
    }
}

/// Length of the leading run of ASCII digits.
fn digit_run(input: Fragment<'_>) -> usize {
    input.take_while(char::is_ascii_digit).count()
}

/// Length of an optional `+`/`-` followed by at least one digit.
fn signed_run(input: Fragment<'_>) -> usize {
    let sign = usize::from(matches!(input.peek(), Some('+' | '-')));
    match digit_run(input.advance(sign)) {
        0 => 0,
        digits => sign + digits,
    }
}

macro_rules! unsigned_extractor {
    ($($t:ty),*) => {$(
        impl Extractor for $t {
            fn probe(input: Fragment<'_>) -> usize {
                digit_run(input)
            }

            fn to(input: Fragment<'_>) -> (usize, Option<Self>) {
                let n = digit_run(input);
                if n == 0 {
                    return (0, None);
                }
                let value = input.limit(n).fold(0 as $t, |acc, c| {
                    acc.wrapping_mul(10).wrapping_add((c as u8 - b'0') as $t)
                });
                (n, Some(value))
            }
        }
    )*};
}

macro_rules! signed_extractor {
    ($($t:ty),*) => {$(
        impl Extractor for $t {
            fn probe(input: Fragment<'_>) -> usize {
                signed_run(input)
            }

            fn to(input: Fragment<'_>) -> (usize, Option<Self>) {
                let n = signed_run(input);
                if n == 0 {
                    return (0, None);
                }
                let mut digits = input.limit(n);
                let negative = match digits.peek() {
                    Some('-') => {
                        digits.next();
                        true
                    }
                    Some('+') => {
                        digits.next();
                        false
                    }
                    _ => false,
                };
                let magnitude = digits.fold(0 as $t, |acc, c| {
                    acc.wrapping_mul(10).wrapping_add((c as u8 - b'0') as $t)
                });
                (n, Some(if negative { magnitude.wrapping_neg() } else { magnitude }))
            }
        }
    )*};
}

unsigned_extractor!(u8, u16, u32, u64, usize);
signed_extractor!(i8, i16, i32, i64, isize);

const TRUE: [char; 4] = ['t', 'r', 'u', 'e'];
const FALSE: [char; 5] = ['f', 'a', 'l', 's', 'e'];

impl Extractor for bool {
    fn probe(input: Fragment<'_>) -> usize {
        if input.starts_with(&TRUE) {
            TRUE.len()
        } else if input.starts_with(&FALSE) {
            FALSE.len()
        } else {
            0
        }
    }

    fn to(input: Fragment<'_>) -> (usize, Option<Self>) {
        match Self::probe(input) {
            4 => (4, Some(true)),
            5 => (5, Some(false)),
            _ => (0, None),
        }
    }
}
