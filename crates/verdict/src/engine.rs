//! Running checks against values and accumulating what they report.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::check::{Check, Step};
use crate::outcome::Outcome;
use crate::plan::{FieldSet, ValidationPlan};
use crate::violations::Violations;

/// Run every check against `input`, collecting all violations in check order.
///
/// No check short-circuits another: each one runs even after earlier failures.
/// Rules observe the original input unless an earlier transform succeeded, in
/// which case they observe that transform's output. A check that panics is
/// recorded as one violation naming the check, and evaluation continues.
///
/// An empty check list accepts every input.
///
/// A faulting check is caught with `std::panic::catch_unwind`, which leaves the
/// process panic hook in place. The default hook still prints the panic
/// message to stderr even though the fault is reported as a violation; install
/// a quieter hook with `std::panic::set_hook` if that output is unwanted.
///
/// # Examples
///
/// ```
/// use verdict::{Outcome, lift_predicate, run_single};
///
/// let checks = [
///     lift_predicate(|name: &String| name.is_empty(), "Name must not be empty"),
///     lift_predicate(
///         |name: &String| name.chars().count() > 7,
///         "Maximum length of 7 chars exceeded",
///     ),
/// ];
///
/// assert_eq!(
///     run_single(&checks, "Dennis".to_owned()),
///     Outcome::Valid("Dennis".to_owned())
/// );
/// ```
#[must_use]
pub fn run_single<T>(checks: &[Check<T>], input: T) -> Outcome<T> {
    let mut current = input;
    let mut messages = Vec::new();

    for check in checks {
        match check.apply(&current) {
            Step::Pass => {}
            Step::Replace(replacement) => current = replacement,
            Step::Fail(violations) => messages.extend(violations),
        }
    }

    trace!(
        checks = checks.len(),
        violations = messages.len(),
        "ran check sequence"
    );

    Violations::try_from(messages).map_or_else(|_| Outcome::Valid(current), Outcome::Invalid)
}

/// Run a plan's fields against their inputs and combine the results.
///
/// Every field is validated, in declaration order, even after an earlier field
/// fails. The combiner runs once when all fields pass and never otherwise.
#[must_use]
pub fn run_plan<F, R>(plan: &ValidationPlan<F, R>, inputs: F::Inputs) -> Outcome<R>
where
    F: FieldSet,
{
    plan.run(inputs)
}

/// Lift a reject predicate into a [`Check`].
///
/// This is the free-function form of [`Check::reject_if`], with the same
/// argument order.
///
/// The check fails with `[message]` when `predicate` returns `true` and
/// passes the value through unchanged otherwise.
#[must_use]
pub fn lift_predicate<T, P>(predicate: P, message: impl Into<String>) -> Check<T>
where
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    Check::reject_if(predicate, message)
}

/// The checks that apply to one named input of a plan.
pub struct Field<T> {
    name: Arc<str>,
    checks: Arc<[Check<T>]>,
}

impl<T> Field<T> {
    /// Declare a field and the checks run against its input, in order.
    #[must_use]
    pub fn new(name: impl Into<String>, checks: impl IntoIterator<Item = Check<T>>) -> Self {
        Self {
            name: Arc::from(name.into()),
            checks: checks.into_iter().collect(),
        }
    }

    /// The field's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field's checks in evaluation order.
    #[must_use]
    pub fn checks(&self) -> &[Check<T>] {
        &self.checks
    }

    /// Validate one input against this field's checks.
    #[must_use]
    pub fn run(&self, input: T) -> Outcome<T> {
        run_single(&self.checks, input)
    }
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            checks: Arc::clone(&self.checks),
        }
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("checks", &self.checks)
            .finish()
    }
}
