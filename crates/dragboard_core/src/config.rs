//! Intake validation policy.
//!
//! # Responsibility
//! - Hold the tunable bounds the intake form validates against.
//! - Build the concrete field rules consumed by the draft service.
//!
//! # Invariants
//! - `people_min <= people_max` after `sanitized()`.
//! - Bounds are interpreted exclusively by the validator; the accepted
//!   head-count range under the defaults is 1..=4.

use crate::validation::FieldRule;

/// Tunable validation bounds for project drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Exclusive lower bound on the description char count.
    pub description_min_length: usize,
    /// Exclusive lower bound on the assigned head count.
    pub people_min: i64,
    /// Exclusive upper bound on the assigned head count.
    pub people_max: i64,
}

impl ValidationPolicy {
    pub const DESCRIPTION_MIN_LENGTH: usize = 5;
    pub const PEOPLE_MIN: i64 = 0;
    pub const PEOPLE_MAX: i64 = 5;

    /// Returns a copy with an inverted people range repaired by swapping.
    pub fn sanitized(self) -> Self {
        if self.people_min > self.people_max {
            Self {
                people_min: self.people_max,
                people_max: self.people_min,
                ..self
            }
        } else {
            self
        }
    }

    /// Rule for the title field: required, otherwise unconstrained.
    pub fn title_rule(&self, title: &str) -> FieldRule {
        let mut rule = FieldRule::text(title);
        rule.required = true;
        rule
    }

    /// Rule for the description field: required plus the length bound.
    pub fn description_rule(&self, description: &str) -> FieldRule {
        let mut rule = FieldRule::text(description);
        rule.required = true;
        rule.min_length = Some(self.description_min_length);
        rule
    }

    /// Rule for the parsed head count: both numeric bounds.
    pub fn people_rule(&self, people: i64) -> FieldRule {
        let mut rule = FieldRule::number(people);
        rule.min = Some(self.people_min);
        rule.max = Some(self.people_max);
        rule
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            description_min_length: Self::DESCRIPTION_MIN_LENGTH,
            people_min: Self::PEOPLE_MIN,
            people_max: Self::PEOPLE_MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ValidationPolicy;
    use crate::validation::validate;

    #[test]
    fn default_policy_uses_documented_bounds() {
        let policy = ValidationPolicy::default();
        assert_eq!(policy.description_min_length, 5);
        assert_eq!(policy.people_min, 0);
        assert_eq!(policy.people_max, 5);
    }

    #[test]
    fn sanitized_repairs_inverted_people_range() {
        let policy = ValidationPolicy {
            people_min: 9,
            people_max: 2,
            ..ValidationPolicy::default()
        }
        .sanitized();
        assert_eq!(policy.people_min, 2);
        assert_eq!(policy.people_max, 9);
    }

    #[test]
    fn sanitized_keeps_ordered_range_unchanged() {
        let policy = ValidationPolicy::default().sanitized();
        assert_eq!(policy, ValidationPolicy::default());
    }

    #[test]
    fn built_rules_carry_policy_bounds() {
        let policy = ValidationPolicy::default();

        assert!(validate(&policy.title_rule("Learn Rust")));
        assert!(!validate(&policy.title_rule("   ")));

        assert!(validate(&policy.description_rule("long enough text")));
        assert!(!validate(&policy.description_rule("abcd")));

        assert!(validate(&policy.people_rule(3)));
        assert!(!validate(&policy.people_rule(5)));
        assert!(!validate(&policy.people_rule(0)));
    }
}
