//! The result of running checks: a validated value or accumulated violations.

use serde::Serialize;

use crate::violations::Violations;

/// Either a value that passed every check, or every message that failed.
///
/// Callers dispatch on the variant with `match`; helper methods exist for the
/// common projections. [`Outcome::zip`] is the accumulating combinator: two
/// invalid outcomes merge their violations instead of keeping only the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome<T> {
    /// Every check passed. Carries the (possibly transformed) value.
    Valid(T),
    /// At least one check failed.
    Invalid(Violations),
}

impl<T> Outcome<T> {
    /// Shorthand for an invalid outcome holding a single message.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(Violations::new(message))
    }

    /// Returns `true` when every check passed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` when at least one check failed.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Borrow the validated value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Borrow the accumulated violations, if any.
    #[must_use]
    pub const fn violations(&self) -> Option<&Violations> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(violations) => Some(violations),
        }
    }

    /// Transform the validated value. Violations pass through untouched.
    #[must_use]
    pub fn map<U, F>(self, transform: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Valid(value) => Outcome::Valid(transform(value)),
            Self::Invalid(violations) => Outcome::Invalid(violations),
        }
    }

    /// Pair two outcomes, accumulating violations from both sides.
    ///
    /// When both sides are invalid the result holds this outcome's messages
    /// followed by `other`'s.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::Outcome;
    ///
    /// let name: Outcome<String> = Outcome::invalid("Name must not be empty");
    /// let age: Outcome<u32> = Outcome::invalid("You must be at least 18 to buy beer");
    ///
    /// let both = name.zip(age);
    /// let messages = both.violations().map(|v| v.messages().to_vec());
    /// assert_eq!(
    ///     messages,
    ///     Some(vec![
    ///         "Name must not be empty".to_owned(),
    ///         "You must be at least 18 to buy beer".to_owned(),
    ///     ])
    /// );
    /// ```
    #[must_use]
    pub fn zip<U>(self, other: Outcome<U>) -> Outcome<(T, U)> {
        match (self, other) {
            (Self::Valid(left), Outcome::Valid(right)) => Outcome::Valid((left, right)),
            (Self::Invalid(mut left), Outcome::Invalid(right)) => {
                left.append(right);
                Outcome::Invalid(left)
            }
            (Self::Invalid(violations), Outcome::Valid(_))
            | (Self::Valid(_), Outcome::Invalid(violations)) => Outcome::Invalid(violations),
        }
    }

    /// Convert into a `Result` so the outcome composes with `?`.
    ///
    /// # Errors
    ///
    /// Returns the accumulated [`Violations`] when the outcome is invalid.
    pub fn into_result(self) -> Result<T, Violations> {
        self.into()
    }
}

impl<T> From<Outcome<T>> for Result<T, Violations> {
    fn from(value: Outcome<T>) -> Self {
        match value {
            Outcome::Valid(inner) => Ok(inner),
            Outcome::Invalid(violations) => Err(violations),
        }
    }
}

impl<T> From<Result<T, Violations>> for Outcome<T> {
    fn from(value: Result<T, Violations>) -> Self {
        match value {
            Ok(inner) => Self::Valid(inner),
            Err(violations) => Self::Invalid(violations),
        }
    }
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]
mod tests {
    //! Covers variant projections and the accumulating `zip`.

    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn messages<T>(outcome: &Outcome<T>) -> Vec<String> {
        outcome
            .violations()
            .map(|violations| violations.messages().to_vec())
            .unwrap_or_default()
    }

    #[rstest]
    #[case(Outcome::Valid(3), true)]
    #[case(Outcome::invalid("nope"), false)]
    fn reports_its_variant(#[case] outcome: Outcome<i32>, #[case] valid: bool) {
        assert_eq!(outcome.is_valid(), valid);
        assert_eq!(outcome.is_invalid(), !valid);
    }

    #[test]
    fn zip_of_two_valid_outcomes_pairs_values() {
        let paired = Outcome::Valid("Dennis").zip(Outcome::Valid(42_u32));
        assert_eq!(paired, Outcome::Valid(("Dennis", 42)));
    }

    #[test]
    fn zip_keeps_the_only_invalid_side() {
        let left: Outcome<u8> = Outcome::Valid(1);
        let paired = left.zip(Outcome::<u8>::invalid("right failed"));
        assert_eq!(messages(&paired), ["right failed"]);
    }

    #[test]
    fn zip_accumulates_left_then_right() {
        let mut left = Violations::new("a1");
        left.push("a2");
        let paired = Outcome::<u8>::Invalid(left).zip(Outcome::<u8>::invalid("b1"));

        assert_eq!(messages(&paired), ["a1", "a2", "b1"]);
    }

    #[test]
    fn map_is_skipped_for_invalid_outcomes() {
        let outcome: Outcome<u8> = Outcome::invalid("bad");
        let mapped = outcome.map(|_| -> u8 { panic!("map must not run on invalid outcomes") });
        assert_eq!(messages(&mapped), ["bad"]);
    }

    #[test]
    fn into_result_round_trips_through_result() {
        let outcome: Outcome<u8> = Outcome::invalid("bad");
        let result = outcome.clone().into_result();
        assert_eq!(Outcome::from(result), outcome);
    }

    #[test]
    fn serialises_with_lowercase_variant_tags() {
        let invalid: Outcome<u8> = Outcome::invalid("bad");
        let valid: Outcome<u8> = Outcome::Valid(7);

        assert_eq!(
            serde_json::to_value(&invalid).expect("serialisable"),
            json!({ "invalid": ["bad"] })
        );
        assert_eq!(
            serde_json::to_value(&valid).expect("serialisable"),
            json!({ "valid": 7 })
        );
    }
}
