/// Why a regex-subset search did not produce a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchRc {
    /// The input did not satisfy the bounded repetition.
    DontMatch,
    /// The `{members:min:max}` text could not be parsed.
    RegexParsingError,
    /// The minimum bound exceeds the maximum bound.
    MinMoreMax,
}

impl std::fmt::Display for MatchRc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DontMatch => write!(f, "Input does not match"),
            Self::RegexParsingError => write!(f, "Malformed regex, expected {{members:min:max}}"),
            Self::MinMoreMax => write!(f, "Regex minimum exceeds its maximum"),
        }
    }
}

impl std::error::Error for MatchRc {}
