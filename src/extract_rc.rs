/// The terminal outcome of one extraction call.
///
/// Exactly one code is produced per call; failures are never accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractRc {
    /// Every requested value was parsed and both input and pattern were consumed.
    Ok,
    /// A literal pattern character differed from the input.
    MismatchInputPattern,
    /// The extractor for the current slot did not recognise the input.
    ParsingFailed,
    /// Input ran out while a value was still required.
    EmptyInputTail,
    /// The pattern was exhausted but input remains.
    NotEmptyInputTail,
    /// The input was exhausted but literal pattern text remains.
    NotEmptyPatternTail,
    /// The pattern holds fewer jokers than there are slots.
    PatternMissingJoker,
    /// The pattern holds more jokers than there are slots.
    PatternTooManyJoker,
}

impl ExtractRc {
    pub fn is_ok(&self) -> bool {
        matches!(self, ExtractRc::Ok)
    }

    /// Convert into a `Result` so that callers can use `?`.
    pub fn into_result(self) -> Result<(), ExtractRc> {
        match self {
            ExtractRc::Ok => Ok(()),
            rc => Err(rc),
        }
    }
}

impl std::fmt::Display for ExtractRc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "Extraction succeeded"),
            Self::MismatchInputPattern => write!(f, "Input does not match pattern literal"),
            Self::ParsingFailed => write!(f, "Value could not be parsed from input"),
            Self::EmptyInputTail => write!(f, "Input ended before all values were extracted"),
            Self::NotEmptyInputTail => write!(f, "Unconsumed input after pattern end"),
            Self::NotEmptyPatternTail => write!(f, "Unmatched pattern text after input end"),
            Self::PatternMissingJoker => write!(f, "Pattern has fewer jokers than values"),
            Self::PatternTooManyJoker => write!(f, "Pattern has more jokers than values"),
        }
    }
}

impl std::error::Error for ExtractRc {}
