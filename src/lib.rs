//! Pattern-driven typed extraction over character streams, and a bounded
//! regex subset built on top of it.
//!
//! A pattern is literal text with `$` jokers. Literals must match the input
//! exactly; every joker hands the remaining input to the parser of the next
//! requested type.
//!
//! # Example
//!
//! ```rust
//! use patex::{ExtractRc, Tail, extract, regex};
//!
//! let mut id: Option<u32> = None;
//! let mut flag: Option<bool> = None;
//! let mut rest: Option<Tail> = None;
//!
//! let rc = extract("id=42 ok=true; trailing", "id=$ ok=$;$", &mut [&mut id, &mut flag, &mut rest]);
//! assert_eq!(rc, ExtractRc::Ok);
//! assert_eq!(id, Some(42));
//! assert_eq!(flag, Some(true));
//! assert_eq!(rest.unwrap().as_str(), " trailing");
//!
//! let m = regex::search("{a-z'_':1:}", "snake_case!").unwrap();
//! assert_eq!(m.text, "snake_case");
//! ```

mod driver;
mod extract_rc;
mod extractor;
mod fragment;
mod pattern;
pub mod regex;
mod slot;

pub use driver::{extract, extract_from, extract_kinds, extract_kinds_from};
pub use extract_rc::ExtractRc;
pub use extractor::{Extractor, Tail};
pub use fragment::Fragment;
pub use pattern::{DEFAULT_JOKER, Pattern, PatternIter};
pub use slot::{DynSlot, Kind, Slot, Value};
