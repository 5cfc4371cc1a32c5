//! # Input Sanitization & Validation
//!
//! This module provides the validation filters used by the prompt loops in
//! [`crate::utils::Terminal`]. Filters (`Sanitize`) are applied to a trimmed
//! line of user input in order and short-circuit on the first failure,
//! returning a [`FilterError`] whose text doubles as the retry prompt.
//!
//! ## Features
//! - Non-empty line validation with [`Sanitize::NonEmpty`]
//! - Inclusive numeric range validation with [`Sanitize::IsBetween`]
//! - Whole-line regular expression matching with [`Sanitize::Matches`]
//! - Case-insensitive yes/no answers through [`YesNo`]
//!
//! ## Examples
//!
//! ### Restrict a line to a pattern
//! ```rust,no_run
//! use listkeeper_core::utils::{Pattern, Sanitize, Terminal};
//!
//! let mut terminal = Terminal::stdio();
//! let pattern = Pattern::new("[0-9]{4}").unwrap();
//! let pin = terminal
//!     .ask("Enter a 4 digit pin", &[Sanitize::NonEmpty, Sanitize::Matches(pattern)])
//!     .unwrap();
//! println!("Accepted: {}", pin);
//! ```
use regex::Regex;
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Represents a validation filter that can be applied to user input.
///
/// - `NonEmpty`: rejects lines that are empty once trimmed.
/// - `IsBetween`: ensures that a numeric input is within inclusive [`Bounds`].
/// - `Matches`: ensures that the whole input matches a [`Pattern`].
#[derive(Debug, Clone)]
pub enum Sanitize {
    NonEmpty,
    IsBetween(Bounds),
    Matches(Pattern),
}

/// Trait for input validation.
/// Any type that implements this can validate a string input and return
/// either `Ok(())` if the input is valid or a [`FilterError`] on failure.
trait Validate {
    fn validate(&self, input: &str) -> Result<(), FilterError>;
}

/// Represents why a piece of input was rejected.
///
/// The `Display` output is written back to the user as the retry prompt, so
/// every message reads as an instruction.
#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    #[error("Input cannot be empty. Please enter a value")]
    Empty,
    #[error("Invalid input. Please enter {0}")]
    Number(DesiredType),
    #[error("Input out of range. Please enter {} within the specified range {}", .0.kind(), .0)]
    Between(Bounds),
    #[error("Invalid input. Please enter a string matching the pattern: {0}")]
    Pattern(String),
    #[error("Invalid input. Please enter 'Y' for Yes or 'N' for No")]
    YesNo,
}

impl Sanitize {
    /// Executes all provided filters against the given answer.
    ///
    /// - Trims whitespace before validation.
    /// - Stops and returns the first error encountered.
    /// - Returns the cleaned string if all filters pass.
    pub(crate) fn execute(answer: &str, filters: &[Sanitize]) -> Result<String, FilterError> {
        let clean_answer = answer.trim();

        for filter in filters {
            filter.validate(clean_answer)?;
        }
        Ok(clean_answer.to_string())
    }
}

impl Validate for Sanitize {
    fn validate(&self, input: &str) -> Result<(), FilterError> {
        match self {
            Sanitize::NonEmpty => {
                if input.is_empty() {
                    Err(FilterError::Empty)
                } else {
                    Ok(())
                }
            }
            Sanitize::IsBetween(bounds) => bounds.check(input),
            Sanitize::Matches(pattern) => {
                if pattern.is_match(input) {
                    Ok(())
                } else {
                    Err(FilterError::Pattern(pattern.as_str().to_string()))
                }
            }
        }
    }
}

/// The numeric type a prompt expects, used to word error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesiredType {
    Int,
    Double,
}

impl Display for DesiredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int => write!(f, "an integer"),
            Self::Double => write!(f, "a double value"),
        }
    }
}

/// An inclusive `[min, max]` interval for integer or floating point input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bounds {
    Int(i64, i64),
    Double(f64, f64),
}

impl Bounds {
    pub fn kind(&self) -> DesiredType {
        match self {
            Self::Int(..) => DesiredType::Int,
            Self::Double(..) => DesiredType::Double,
        }
    }

    /// `true` when no value can fall inside the interval (`min > max`, or a NaN bound).
    pub fn is_empty(&self) -> bool {
        match *self {
            Self::Int(min, max) => min > max,
            Self::Double(min, max) => min.is_nan() || max.is_nan() || min > max,
        }
    }

    fn check(&self, input: &str) -> Result<(), FilterError> {
        let inside = match *self {
            Self::Int(min, max) => {
                let value: i64 = input
                    .parse()
                    .map_err(|_| FilterError::Number(DesiredType::Int))?;
                (min..=max).contains(&value)
            }
            Self::Double(min, max) => {
                let value: f64 = input
                    .parse()
                    .map_err(|_| FilterError::Number(DesiredType::Double))?;
                (min..=max).contains(&value)
            }
        };

        if inside {
            Ok(())
        } else {
            Err(FilterError::Between(*self))
        }
    }
}

impl Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(min, max) => write!(f, "[{} - {}]", min, max),
            // `{:?}` keeps the fraction on whole numbers: `[0.0 - 1.0]`
            Self::Double(min, max) => write!(f, "[{:?} - {:?}]", min, max),
        }
    }
}

/// A regular expression that must match an entire line.
///
/// The source pattern is kept verbatim for error messages; matching uses an
/// anchored copy so `"[AaQq]"` accepts `"q"` but not `"qq"`.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{})$", source))?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }
}

/// A confirmation answer, parsed from `Y` or `N` in any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl FromStr for YesNo {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "Y" => Ok(Self::Yes),
            "N" => Ok(Self::No),
            _ => Err(FilterError::YesNo),
        }
    }
}

impl From<YesNo> for bool {
    fn from(answer: YesNo) -> Self {
        answer == YesNo::Yes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_non_empty() {
        let filter = Sanitize::NonEmpty;
        assert!(filter.validate("milk").is_ok());
        assert_eq!(filter.validate(""), Err(FilterError::Empty));
    }

    #[test]
    fn test_sanitize_execute_trims_before_non_empty() {
        let res = Sanitize::execute("   \t", &[Sanitize::NonEmpty]);
        assert_eq!(res, Err(FilterError::Empty));

        let res = Sanitize::execute("  eggs \n", &[Sanitize::NonEmpty]);
        assert_eq!(res.unwrap(), "eggs");
    }

    #[test]
    fn test_sanitize_is_between_int() {
        let filter = Sanitize::IsBetween(Bounds::Int(10, 20));
        assert!(filter.validate("10").is_ok());
        assert!(filter.validate("15").is_ok());
        assert!(filter.validate("20").is_ok());
        assert_eq!(
            filter.validate("25"),
            Err(FilterError::Between(Bounds::Int(10, 20)))
        );
        assert_eq!(
            filter.validate("1.5"),
            Err(FilterError::Number(DesiredType::Int))
        );
    }

    #[test]
    fn test_sanitize_is_between_double() {
        let filter = Sanitize::IsBetween(Bounds::Double(0.0, 1.0));
        assert!(filter.validate("0.25").is_ok());
        assert!(filter.validate("1").is_ok());
        assert!(filter.validate("-0.1").is_err());
        assert!(filter.validate("NaN").is_err());
    }

    #[test]
    fn test_between_message_repeats_range() {
        let res = Sanitize::execute("9", &[Sanitize::IsBetween(Bounds::Int(1, 3))]);
        if let Err(e) = res {
            assert_eq!(
                format!("{}", e),
                "Input out of range. Please enter an integer within the specified range [1 - 3]"
            );
        } else {
            panic!("9 is outside [1 - 3]");
        }
    }

    #[test]
    fn test_bounds_display() {
        assert_eq!(Bounds::Int(1, 3).to_string(), "[1 - 3]");
        assert_eq!(Bounds::Double(0.0, 1.0).to_string(), "[0.0 - 1.0]");
        assert_eq!(Bounds::Double(-0.5, 2.25).to_string(), "[-0.5 - 2.25]");
    }

    #[test]
    fn test_bounds_is_empty() {
        assert!(!Bounds::Int(1, 1).is_empty());
        assert!(Bounds::Int(2, 1).is_empty());
        assert!(Bounds::Double(1.0, 0.5).is_empty());
        assert!(Bounds::Double(f64::NAN, 1.0).is_empty());
    }

    #[test]
    fn test_pattern_matches_whole_line_only() {
        let filter = Sanitize::Matches(Pattern::new("[AaDdPpQq]").unwrap());
        assert!(filter.validate("q").is_ok());
        assert!(filter.validate("A").is_ok());
        assert!(filter.validate("AB").is_err());
        assert!(filter.validate("x").is_err());
        assert!(filter.validate("").is_err());
    }

    #[test]
    fn test_pattern_alternation_stays_anchored() {
        let pattern = Pattern::new("yes|no").unwrap();
        assert!(pattern.is_match("yes"));
        assert!(pattern.is_match("no"));
        assert!(!pattern.is_match("yesno"));
        assert!(!pattern.is_match("nope"));
    }

    #[test]
    fn test_pattern_message_echoes_source() {
        let res = Sanitize::execute(
            "AB",
            &[Sanitize::Matches(Pattern::new("[AaDdPpQq]").unwrap())],
        );
        assert_eq!(
            res.unwrap_err().to_string(),
            "Invalid input. Please enter a string matching the pattern: [AaDdPpQq]"
        );
    }

    #[test]
    fn test_pattern_rejects_invalid_regex() {
        assert!(Pattern::new("[").is_err());
    }

    #[test]
    fn test_sanitize_execute_filters_fail_first() {
        let filters = vec![
            Sanitize::NonEmpty,
            Sanitize::Matches(Pattern::new("[0-9]+").unwrap()),
        ];
        assert_eq!(Sanitize::execute(" ", &filters), Err(FilterError::Empty));
        assert_eq!(
            Sanitize::execute("abc", &filters),
            Err(FilterError::Pattern("[0-9]+".to_string()))
        );
        assert_eq!(Sanitize::execute(" 42 ", &filters).unwrap(), "42");
    }

    #[test]
    fn test_yes_no_parse() {
        assert_eq!("y".parse::<YesNo>(), Ok(YesNo::Yes));
        assert_eq!(" Y ".parse::<YesNo>(), Ok(YesNo::Yes));
        assert_eq!("n".parse::<YesNo>(), Ok(YesNo::No));
        assert_eq!("N".parse::<YesNo>(), Ok(YesNo::No));
        assert_eq!("maybe".parse::<YesNo>(), Err(FilterError::YesNo));
        assert_eq!("yes".parse::<YesNo>(), Err(FilterError::YesNo));
        assert!(bool::from(YesNo::Yes));
        assert!(!bool::from(YesNo::No));
    }
}
