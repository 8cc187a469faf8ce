//! Declarative field validation for intake form values.
//!
//! # Responsibility
//! - Check one field value against an optional rule set.
//! - Stay pure and infallible: the outcome is a plain boolean.
//!
//! # Invariants
//! - All applicable checks are ANDed; a rule with no constraints passes.
//! - Length and numeric bounds are exclusive: a string of exactly
//!   `min_length` chars fails, `max_length` accepts only strings *longer*
//!   than the bound, and a number equal to `min` or `max` fails.
//! - Length checks count `char`s, not bytes.

/// Value carried by one field rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Free-text field content.
    Text(String),
    /// Numeric field content, already parsed by the caller.
    Number(i64),
}

impl FieldValue {
    /// String form used by the `required` check.
    fn as_display_string(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => value.to_string(),
        }
    }
}

/// One field value plus its optional constraints.
///
/// Constraints that do not apply to the value kind are ignored:
/// `min_length`/`max_length` only ever inspect `Text`, `min`/`max` only
/// ever inspect `Number`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub value: FieldValue,
    /// Trimmed string form must be non-empty. Numbers always satisfy this.
    pub required: bool,
    /// Exclusive lower bound on the char count of a `Text` value.
    pub min_length: Option<usize>,
    /// Exclusive lower bound as well: only strings longer than the bound pass.
    pub max_length: Option<usize>,
    /// Exclusive lower bound on a `Number` value.
    pub min: Option<i64>,
    /// Exclusive upper bound on a `Number` value.
    pub max: Option<i64>,
}

impl FieldRule {
    /// Creates an unconstrained rule over a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::unconstrained(FieldValue::Text(value.into()))
    }

    /// Creates an unconstrained rule over a numeric value.
    pub fn number(value: i64) -> Self {
        Self::unconstrained(FieldValue::Number(value))
    }

    fn unconstrained(value: FieldValue) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }
}

/// Checks one rule; `true` when every applicable constraint holds.
pub fn validate(rule: &FieldRule) -> bool {
    let mut valid = true;

    if rule.required {
        valid = valid && !rule.value.as_display_string().trim().is_empty();
    }

    if let FieldValue::Text(value) = &rule.value {
        let chars = value.chars().count();
        if let Some(min_length) = rule.min_length {
            valid = valid && chars > min_length;
        }
        if let Some(max_length) = rule.max_length {
            valid = valid && chars > max_length;
        }
    }

    if let FieldValue::Number(value) = rule.value {
        if let Some(min) = rule.min {
            valid = valid && value > min;
        }
        if let Some(max) = rule.max {
            valid = valid && value < max;
        }
    }

    valid
}

#[cfg(test)]
mod tests {
    use super::{validate, FieldRule, FieldValue};

    #[test]
    fn unconstrained_rule_passes() {
        assert!(validate(&FieldRule::text("")));
        assert!(validate(&FieldRule::number(0)));
    }

    #[test]
    fn required_rejects_blank_text() {
        let mut rule = FieldRule::text("   ");
        rule.required = true;
        assert!(!validate(&rule));

        let mut rule = FieldRule::text("abc");
        rule.required = true;
        assert!(validate(&rule));
    }

    #[test]
    fn required_always_passes_for_numbers() {
        let mut rule = FieldRule::number(0);
        rule.required = true;
        assert!(validate(&rule));
    }

    #[test]
    fn min_length_bound_is_exclusive() {
        let mut rule = FieldRule::text("abcde");
        rule.min_length = Some(5);
        assert!(!validate(&rule));

        let mut rule = FieldRule::text("abcdef");
        rule.min_length = Some(5);
        assert!(validate(&rule));
    }

    #[test]
    fn max_length_accepts_only_longer_strings() {
        let mut rule = FieldRule::text("abc");
        rule.max_length = Some(5);
        assert!(!validate(&rule));

        let mut rule = FieldRule::text("abcdef");
        rule.max_length = Some(5);
        assert!(validate(&rule));
    }

    #[test]
    fn length_checks_count_chars_not_bytes() {
        // Five multi-byte chars: 15 bytes, 5 chars.
        let mut rule = FieldRule::text("あいうえお");
        rule.min_length = Some(5);
        assert!(!validate(&rule));
        rule.min_length = Some(4);
        assert!(validate(&rule));
    }

    #[test]
    fn numeric_bounds_exclude_boundary_values() {
        let mut rule = FieldRule::number(5);
        rule.min = Some(0);
        rule.max = Some(5);
        assert!(!validate(&rule));

        let mut rule = FieldRule::number(3);
        rule.min = Some(0);
        rule.max = Some(5);
        assert!(validate(&rule));

        let mut rule = FieldRule::number(0);
        rule.min = Some(0);
        assert!(!validate(&rule));
    }

    #[test]
    fn length_constraints_ignore_numeric_values() {
        let mut rule = FieldRule::number(7);
        rule.min_length = Some(100);
        assert!(validate(&rule));
    }

    #[test]
    fn numeric_constraints_ignore_text_values() {
        let mut rule = FieldRule::text("9");
        rule.min = Some(100);
        assert!(validate(&rule));
    }

    #[test]
    fn all_applicable_checks_are_anded() {
        let mut rule = FieldRule::text("abcdef");
        rule.required = true;
        rule.min_length = Some(5);
        assert!(validate(&rule));

        rule.min_length = Some(10);
        assert!(!validate(&rule));
    }

    #[test]
    fn field_value_display_string_covers_both_kinds() {
        assert_eq!(
            FieldValue::Text("x".to_string()).as_display_string(),
            "x".to_string()
        );
        assert_eq!(FieldValue::Number(42).as_display_string(), "42".to_string());
    }
}
