//! Command-line numeric conditions such as `">= 8.5"` or `"<=50"`.

use anyhow::{Context, bail};

/// Split a condition into its operator token and threshold.
///
/// A bare number yields no operator, leaving the choice of default to the
/// filter request. The operator token itself is validated later, when the
/// request is converted into criteria.
pub fn split_condition(raw: &str) -> anyhow::Result<(Option<String>, f64)> {
    let raw = raw.trim();
    let split = raw
        .find(|c: char| !matches!(c, '<' | '>' | '=' | '!'))
        .unwrap_or(raw.len());
    let (operator, value) = raw.split_at(split);
    let value = value.trim();

    if value.is_empty() {
        bail!("condition {raw:?} has no value");
    }
    let threshold: f64 = value
        .parse()
        .with_context(|| format!("condition {raw:?}: {value:?} is not a number"))?;
    if !threshold.is_finite() {
        bail!("condition {raw:?}: threshold must be finite");
    }

    let operator = (!operator.is_empty()).then(|| operator.to_string());
    Ok((operator, threshold))
}

/// [`split_condition`] for an optional argument.
pub fn split_optional(raw: Option<&str>) -> anyhow::Result<(Option<String>, Option<f64>)> {
    match raw {
        Some(raw) => {
            let (operator, threshold) = split_condition(raw)?;
            Ok((operator, Some(threshold)))
        }
        None => Ok((None, None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_with_and_without_spaces() {
        assert_eq!(split_condition(">= 8.5").unwrap(), (Some(">=".into()), 8.5));
        assert_eq!(split_condition("<=50").unwrap(), (Some("<=".into()), 50.0));
        assert_eq!(split_condition("  != 12 ").unwrap(), (Some("!=".into()), 12.0));
    }

    #[test]
    fn bare_number_has_no_operator() {
        assert_eq!(split_condition("2010").unwrap(), (None, 2010.0));
        assert_eq!(split_condition("-1").unwrap(), (None, -1.0));
    }

    #[test]
    fn unknown_operator_token_is_passed_through() {
        assert_eq!(split_condition("=> 3").unwrap(), (Some("=>".into()), 3.0));
    }

    #[test]
    fn missing_or_bad_values_fail() {
        assert!(split_condition(">=").is_err());
        assert!(split_condition("> high").is_err());
        assert!(split_condition("> NaN").is_err());
    }

    #[test]
    fn absent_argument_is_empty() {
        assert_eq!(split_optional(None).unwrap(), (None, None));
    }
}
