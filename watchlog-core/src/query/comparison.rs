//! Relational comparisons used by numeric filters.
//!
//! Operators arrive from the presentation layer or config files as raw tokens
//! (`">="`, `"!="`, ...). They are parsed once into [`ComparisonOperator`] at
//! the boundary so the filter pipeline never carries untyped strings.

use crate::error::{Result, WatchlogError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of relational operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ComparisonOperator {
    Equal,
    NotEqual,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
}

impl ComparisonOperator {
    pub fn all() -> &'static [ComparisonOperator] {
        use ComparisonOperator::*;
        &[Equal, Greater, GreaterOrEqual, Less, LessOrEqual, NotEqual]
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOperator::Equal => "=",
            ComparisonOperator::NotEqual => "!=",
            ComparisonOperator::Greater => ">",
            ComparisonOperator::GreaterOrEqual => ">=",
            ComparisonOperator::Less => "<",
            ComparisonOperator::LessOrEqual => "<=",
        }
    }

    /// `actual <op> threshold` under plain `f64` semantics.
    #[inline]
    pub fn compare(self, actual: f64, threshold: f64) -> bool {
        match self {
            ComparisonOperator::Equal => actual == threshold,
            ComparisonOperator::NotEqual => actual != threshold,
            ComparisonOperator::Greater => actual > threshold,
            ComparisonOperator::GreaterOrEqual => actual >= threshold,
            ComparisonOperator::Less => actual < threshold,
            ComparisonOperator::LessOrEqual => actual <= threshold,
        }
    }

    /// Like [`compare`](Self::compare), but a missing value never matches.
    #[inline]
    pub fn evaluate(self, actual: Option<f64>, threshold: f64) -> bool {
        actual.is_some_and(|value| self.compare(value, threshold))
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ComparisonOperator {
    type Err = WatchlogError;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|op| op.symbol() == token)
            .ok_or_else(|| WatchlogError::InvalidOperator(s.to_string()))
    }
}

impl TryFrom<String> for ComparisonOperator {
    type Error = WatchlogError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ComparisonOperator> for String {
    fn from(op: ComparisonOperator) -> Self {
        op.symbol().to_string()
    }
}

/// Evaluate a raw operator token against an optional value.
///
/// Fails with [`WatchlogError::InvalidOperator`] for unrecognized tokens; a
/// missing `actual` yields `false` for every valid operator.
pub fn evaluate(operator: &str, actual: Option<f64>, threshold: f64) -> Result<bool> {
    let op: ComparisonOperator = operator.parse()?;
    Ok(op.evaluate(actual, threshold))
}

/// Operator plus threshold for one numeric field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericCondition {
    pub operator: ComparisonOperator,
    pub threshold: f64,
}

impl NumericCondition {
    pub fn new(operator: ComparisonOperator, threshold: f64) -> Self {
        Self {
            operator,
            threshold,
        }
    }

    /// Build from a raw operator token.
    pub fn parse(operator: &str, threshold: f64) -> Result<Self> {
        Ok(Self::new(operator.parse()?, threshold))
    }

    #[inline]
    pub fn matches(&self, actual: Option<f64>) -> bool {
        self.operator.evaluate(actual, self.threshold)
    }
}

impl fmt::Display for NumericCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator, self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_six_tokens() {
        for op in ComparisonOperator::all() {
            assert_eq!(op.symbol().parse::<ComparisonOperator>().unwrap(), *op);
        }
        assert_eq!(" >= ".parse::<ComparisonOperator>().unwrap(), ComparisonOperator::GreaterOrEqual);
    }

    #[test]
    fn rejects_unknown_tokens() {
        for token in ["invalid", "==", "=>", "<>", ""] {
            let err = token.parse::<ComparisonOperator>().unwrap_err();
            assert_eq!(err, WatchlogError::InvalidOperator(token.to_string()));
        }
    }

    #[test]
    fn evaluate_rejects_invalid_operator() {
        assert!(matches!(
            evaluate("invalid", Some(5.0), 5.0),
            Err(WatchlogError::InvalidOperator(_))
        ));
    }

    #[test]
    fn evaluate_follows_real_number_semantics() {
        assert!(evaluate(">", Some(9.0), 8.5).unwrap());
        assert!(!evaluate("<", Some(9.0), 8.5).unwrap());
        assert!(evaluate("!=", Some(3.0), 8.0).unwrap());
        assert!(evaluate("<=", Some(12.0), 12.0).unwrap());
        assert!(evaluate("=", Some(24.0), 24.0).unwrap());
    }

    #[test]
    fn missing_value_never_matches() {
        for op in ComparisonOperator::all() {
            assert!(!op.evaluate(None, 0.0), "{op} matched a missing value");
        }
    }

    #[test]
    fn equal_operands_match_only_inclusive_operators() {
        for op in ComparisonOperator::all() {
            let expected = matches!(
                op,
                ComparisonOperator::Equal
                    | ComparisonOperator::GreaterOrEqual
                    | ComparisonOperator::LessOrEqual
            );
            assert_eq!(op.compare(7.5, 7.5), expected, "operator {op}");
        }
    }

    #[test]
    fn condition_serializes_operator_as_symbol() {
        let condition = NumericCondition::parse(">=", 8.5).unwrap();
        let json = serde_json::to_string(&condition).unwrap();
        assert_eq!(json, r#"{"operator":">=","threshold":8.5}"#);

        let back: NumericCondition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, condition);
        assert!(serde_json::from_str::<NumericCondition>(r#"{"operator":"~","threshold":1.0}"#).is_err());
    }
}
