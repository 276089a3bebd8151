//! Individual validation checks.
//!
//! A [`Check`] is a named, shareable rule over a value. Rules observe the value
//! and either pass or report violations. Transforms are the explicit exception:
//! they may hand a replacement value (for example, trimmed text) to the checks
//! that follow them.

use std::fmt;
use std::sync::Arc;

use tracing::warn;

use crate::fault::contain;
use crate::outcome::Outcome;
use crate::violations::Violations;

type RuleFn<T> = dyn Fn(&T) -> Result<(), Violations> + Send + Sync;
type TransformFn<T> = dyn Fn(&T) -> Outcome<T> + Send + Sync;

enum CheckKind<T> {
    Rule(Arc<RuleFn<T>>),
    Transform(Arc<TransformFn<T>>),
}

impl<T> Clone for CheckKind<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Rule(rule) => Self::Rule(Arc::clone(rule)),
            Self::Transform(transform) => Self::Transform(Arc::clone(transform)),
        }
    }
}

/// What evaluating one check against the current value produced.
#[derive(Debug)]
pub(crate) enum Step<T> {
    /// The check passed and the current value stands.
    Pass,
    /// A transform passed and supplied the value later checks observe.
    Replace(T),
    /// The check failed, or faulted while running.
    Fail(Violations),
}

/// A named validation rule over values of type `T`.
///
/// Checks are cheap to clone and safe to share between threads, so one set of
/// checks can back any number of concurrent validations.
///
/// # Examples
///
/// ```
/// use verdict::{Check, Outcome, run_single};
///
/// let checks = [Check::reject_if(
///     |name: &String| name.is_empty(),
///     "Name must not be empty",
/// )];
///
/// assert_eq!(
///     run_single(&checks, String::new()),
///     Outcome::invalid("Name must not be empty")
/// );
/// ```
pub struct Check<T> {
    name: Arc<str>,
    kind: CheckKind<T>,
}

impl<T> Check<T> {
    /// Build a rule from custom logic.
    ///
    /// The rule returns `Err` with one or more messages to fail. It never
    /// alters the value.
    #[must_use]
    pub fn rule<F>(name: impl Into<String>, rule: F) -> Self
    where
        F: Fn(&T) -> Result<(), Violations> + Send + Sync + 'static,
    {
        Self {
            name: Arc::from(name.into()),
            kind: CheckKind::Rule(Arc::new(rule)),
        }
    }

    /// Build a transform whose valid output replaces the value seen by later
    /// checks.
    ///
    /// When the transform reports violations the value is left as it was.
    #[must_use]
    pub fn transform<F>(name: impl Into<String>, transform: F) -> Self
    where
        F: Fn(&T) -> Outcome<T> + Send + Sync + 'static,
    {
        Self {
            name: Arc::from(name.into()),
            kind: CheckKind::Transform(Arc::new(transform)),
        }
    }

    /// Build a rule that fails with `message` whenever `predicate` is `true`.
    ///
    /// The predicate describes the condition to reject, not the one to
    /// accept: `|age: &u32| *age < 18` rejects minors. The message doubles as
    /// the check's name. [`lift_predicate`](crate::lift_predicate) is the
    /// free-function form and takes its arguments in the same order.
    #[must_use]
    pub fn reject_if<P>(predicate: P, message: impl Into<String>) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let text: Arc<str> = Arc::from(message.into());
        let reported = Arc::clone(&text);
        Self {
            name: text,
            kind: CheckKind::Rule(Arc::new(move |value: &T| {
                if predicate(value) {
                    Err(Violations::new(reported.as_ref()))
                } else {
                    Ok(())
                }
            })),
        }
    }

    /// The name used to identify this check in fault messages and logs.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` for checks built with [`Check::transform`].
    #[must_use]
    pub const fn is_transform(&self) -> bool {
        matches!(self.kind, CheckKind::Transform(_))
    }

    /// Evaluate the check, converting a panic into a single violation.
    pub(crate) fn apply(&self, value: &T) -> Step<T> {
        let attempt = contain(|| match &self.kind {
            CheckKind::Rule(rule) => match rule(value) {
                Ok(()) => Step::Pass,
                Err(violations) => Step::Fail(violations),
            },
            CheckKind::Transform(transform) => match transform(value) {
                Outcome::Valid(replacement) => Step::Replace(replacement),
                Outcome::Invalid(violations) => Step::Fail(violations),
            },
        });

        attempt.unwrap_or_else(|reason| {
            warn!(check = %self.name, %reason, "check faulted; recording it as a violation");
            Step::Fail(Violations::new(fault_message(&self.name)))
        })
    }
}

/// Message recorded for a check that faulted instead of returning.
#[must_use]
pub fn fault_message(check_name: &str) -> String {
    format!("check '{check_name}' failed unexpectedly")
}

impl<T> Clone for Check<T> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            kind: self.kind.clone(),
        }
    }
}

impl<T> fmt::Debug for Check<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_transform() { "transform" } else { "rule" };
        f.debug_struct("Check")
            .field("name", &self.name)
            .field("kind", &kind)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    //! Covers single-check evaluation, including fault containment.

    use rstest::rstest;

    use super::*;

    fn fail_messages<T>(step: Step<T>) -> Vec<String> {
        match step {
            Step::Fail(violations) => violations.into_messages(),
            Step::Pass | Step::Replace(_) => Vec::new(),
        }
    }

    #[rstest]
    #[case(17, true)]
    #[case(18, false)]
    #[case(42, false)]
    fn reject_if_fails_when_predicate_holds(#[case] age: u32, #[case] rejected: bool) {
        let check = Check::reject_if(
            |years: &u32| *years < 18,
            "You must be at least 18 to buy beer",
        );

        let messages = fail_messages(check.apply(&age));
        if rejected {
            assert_eq!(messages, ["You must be at least 18 to buy beer"]);
        } else {
            assert!(messages.is_empty(), "unexpected messages: {messages:?}");
        }
    }

    #[test]
    fn reject_if_names_the_check_after_its_message() {
        let check = Check::reject_if(|name: &String| name.is_empty(), "Name must not be empty");
        assert_eq!(check.name(), "Name must not be empty");
        assert!(!check.is_transform());
    }

    #[test]
    fn custom_rules_may_report_several_messages() {
        let check = Check::rule("bounds", |value: &i32| {
            let mut violations = Violations::new("first");
            if *value < 0 {
                violations.push("second");
            }
            Err(violations)
        });

        assert_eq!(fail_messages(check.apply(&-1)), ["first", "second"]);
    }

    #[test]
    fn transforms_supply_a_replacement() {
        let check = Check::transform("trim", |raw: &String| Outcome::Valid(raw.trim().to_owned()));

        assert!(check.is_transform());
        match check.apply(&"  Dennis ".to_owned()) {
            Step::Replace(trimmed) => assert_eq!(trimmed, "Dennis"),
            other => panic!("expected a replacement, got {other:?}"),
        }
    }

    #[test]
    fn panicking_rule_becomes_one_fault_violation() {
        let check = Check::rule("lookup", |_: &u8| -> Result<(), Violations> {
            panic!("field dereferenced while absent")
        });

        assert_eq!(
            fail_messages(check.apply(&0)),
            ["check 'lookup' failed unexpectedly"]
        );
    }

    #[test]
    fn clones_share_the_same_rule() {
        let check = Check::reject_if(|value: &u8| value & 1 == 1, "odd");
        let copy = check.clone();

        assert_eq!(copy.name(), check.name());
        assert_eq!(fail_messages(copy.apply(&3)), ["odd"]);
    }

    #[test]
    fn debug_output_names_the_kind() {
        let check = Check::transform("trim", |raw: &String| Outcome::Valid(raw.clone()));
        let rendered = format!("{check:?}");
        assert!(rendered.contains("trim"));
        assert!(rendered.contains("transform"));
    }
}
