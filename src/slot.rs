//! Output slots filled by the extraction driver.
//!
//! Statically typed callers pass `Option<T>` slots directly. Callers that
//! only know the wanted types at run time describe them with [`Kind`] and
//! receive [`Value`]s.

use phf::{Map, phf_map};

use crate::extractor::{Extractor, Tail, bounded};
use crate::fragment::Fragment;

/// A destination for one extracted value.
pub trait Slot {
    /// Parse from the front of `input` and store the value.
    ///
    /// Returns the consumed length; 0 means no match and leaves the slot empty.
    fn fill(&mut self, input: Fragment<'_>) -> usize;

    /// Empty the slot.
    fn clear(&mut self);

    /// True if the slot swallows all remaining input.
    fn is_tail(&self) -> bool {
        false
    }
}

impl<T: Extractor> Slot for Option<T> {
    fn fill(&mut self, input: Fragment<'_>) -> usize {
        let (consumed, value) = bounded::<T>(input);
        *self = value;
        if self.is_some() { consumed } else { 0 }
    }

    fn clear(&mut self) {
        *self = None;
    }

    fn is_tail(&self) -> bool {
        T::IS_TAIL
    }
}

/// The closed set of value kinds known at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Char,
    Str,
    Unsigned,
    Signed,
    Bool,
    Tail,
}

/// Kind names accepted by [`Kind::from_name`].
static KIND_NAMES: Map<&'static str, Kind> = phf_map! {
    "bool" => Kind::Bool,
    "char" => Kind::Char,
    "i64" => Kind::Signed,
    "int" => Kind::Signed,
    "rest" => Kind::Tail,
    "str" => Kind::Str,
    "string" => Kind::Str,
    "tail" => Kind::Tail,
    "u64" => Kind::Unsigned,
    "uint" => Kind::Unsigned,
};

impl Kind {
    /// Look a kind up by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Kind> {
        KIND_NAMES.get(name.to_ascii_lowercase().as_str()).copied()
    }

    /// Every accepted kind name, aliases included.
    pub fn names() -> impl Iterator<Item = &'static str> {
        KIND_NAMES.keys().copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Kind::Char => "char",
            Kind::Str => "str",
            Kind::Unsigned => "uint",
            Kind::Signed => "int",
            Kind::Bool => "bool",
            Kind::Tail => "tail",
        }
    }
}

/// A value of one of the run-time kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Char(char),
    Str(String),
    Unsigned(u64),
    Signed(i64),
    Bool(bool),
    Tail(String),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Char(_) => Kind::Char,
            Value::Str(_) => Kind::Str,
            Value::Unsigned(_) => Kind::Unsigned,
            Value::Signed(_) => Kind::Signed,
            Value::Bool(_) => Kind::Bool,
            Value::Tail(_) => Kind::Tail,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Char(c) => write!(f, "{c:?}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Unsigned(n) => write!(f, "{n}"),
            Value::Signed(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Tail(s) => f.write_str(s),
        }
    }
}

/// A slot whose kind is chosen at run time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynSlot {
    kind: Kind,
    value: Option<Value>,
}

impl DynSlot {
    pub fn new(kind: Kind) -> Self {
        Self { kind, value: None }
    }

    pub fn into_value(self) -> Option<Value> {
        self.value
    }
}

/// Run extractor `T` and wrap its value.
fn fill_as<T: Extractor>(input: Fragment<'_>, wrap: fn(T) -> Value) -> (usize, Option<Value>) {
    match bounded::<T>(input) {
        (consumed, Some(v)) => (consumed, Some(wrap(v))),
        (_, None) => (0, None),
    }
}

impl Slot for DynSlot {
    fn fill(&mut self, input: Fragment<'_>) -> usize {
        let (consumed, value) = match self.kind {
            Kind::Char => fill_as::<char>(input, Value::Char),
            Kind::Str => fill_as::<String>(input, Value::Str),
            Kind::Unsigned => fill_as::<u64>(input, Value::Unsigned),
            Kind::Signed => fill_as::<i64>(input, Value::Signed),
            Kind::Bool => fill_as::<bool>(input, Value::Bool),
            Kind::Tail => fill_as::<Tail>(input, |t| Value::Tail(t.0)),
        };
        self.value = value;
        consumed
    }

    fn clear(&mut self) {
        self.value = None;
    }

    fn is_tail(&self) -> bool {
        self.kind == Kind::Tail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn kind_names_resolve() {
        assert_eq!(Kind::from_name("int"), Some(Kind::Signed));
        assert_eq!(Kind::from_name("UINT"), Some(Kind::Unsigned));
        assert_eq!(Kind::from_name("rest"), Some(Kind::Tail));
        assert_eq!(Kind::from_name("float"), None);
    }

    #[test]
    fn every_kind_round_trips_its_name() {
        for kind in [
            Kind::Char,
            Kind::Str,
            Kind::Unsigned,
            Kind::Signed,
            Kind::Bool,
            Kind::Tail,
        ] {
            assert_eq!(Kind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn typed_slot_fills_and_clears() {
        let input = frag("42 rest");
        let mut slot: Option<u32> = None;
        assert_eq!(slot.fill(Fragment::new(&input)), 2);
        assert_eq!(slot, Some(42));
        slot.clear();
        assert_eq!(slot, None);
    }

    #[test]
    fn fill_stops_at_probe_length() {
        let input = frag(r#""a" "b""#);
        let mut slot: Option<String> = None;
        assert_eq!(slot.fill(Fragment::new(&input)), 3);
        assert_eq!(slot.as_deref(), Some("a"));

        let mut slot = DynSlot::new(Kind::Bool);
        assert_eq!(slot.fill(Fragment::new(&frag("truefalse"))), 4);
        assert_eq!(slot.into_value(), Some(Value::Bool(true)));
    }

    #[test]
    fn kind_names_include_aliases() {
        let names: Vec<&str> = Kind::names().collect();
        assert_eq!(names.len(), 10);
        assert!(names.iter().all(|n| Kind::from_name(n).is_some()));
        assert!(names.contains(&"rest"));
    }

    #[test]
    fn typed_slot_reports_tail() {
        let slot: Option<Tail> = None;
        assert!(slot.is_tail());
        let slot: Option<char> = None;
        assert!(!slot.is_tail());
    }

    #[test]
    fn dyn_slot_parses_its_kind() {
        let input = frag("-12");
        let mut slot = DynSlot::new(Kind::Signed);
        assert_eq!(slot.fill(Fragment::new(&input)), 3);
        let value = slot.into_value();
        assert_eq!(value, Some(Value::Signed(-12)));
        assert_eq!(value.map(|v| v.kind()), Some(Kind::Signed));
    }

    #[test]
    fn dyn_slot_failure_stays_empty() {
        let input = frag("nope");
        let mut slot = DynSlot::new(Kind::Bool);
        assert_eq!(slot.fill(Fragment::new(&input)), 0);
        assert_eq!(slot.into_value(), None);
    }

    #[test]
    fn value_display() {
        assert_eq!(Value::Str("demi".into()).to_string(), "\"demi\"");
        assert_eq!(Value::Signed(-3).to_string(), "-3");
        assert_eq!(Value::Tail("as is".into()).to_string(), "as is");
    }
}
