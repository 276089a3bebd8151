//! Accumulating validation: run every check, report every violation.
//!
//! Short-circuiting validation stops at the first problem, so a user fixing a
//! form learns about one mistake per round trip. This crate runs every check
//! against a value and every field of a plan, and returns the full, ordered
//! list of violations in one pass.
//!
//! # Overview
//!
//! - [`Check`] is a named rule over a value. [`lift_predicate`] turns a
//!   reject predicate into a check; [`Check::transform`] lets a check hand a
//!   normalised value to the checks after it.
//! - [`run_single`] runs a list of checks against one value.
//! - [`ValidationPlan`] groups per-field checks with a combining function;
//!   [`run_plan`] validates every field and combines the values only when all
//!   of them pass.
//! - [`Outcome`] is the result: a validated value or a non-empty
//!   [`Violations`] list.
//!
//! A check that panics is contained and recorded as a single violation naming
//! the check. Validation failure is always data, never an unwinding fault.
//!
//! # Example
//!
//! ```
//! use verdict::{Field, Outcome, ValidationPlan, lift_predicate, run_plan};
//!
//! let plan = ValidationPlan::new(
//!     (
//!         Field::new(
//!             "name",
//!             [
//!                 lift_predicate(|name: &String| name.is_empty(), "Name must not be empty"),
//!                 lift_predicate(
//!                     |name: &String| !name.chars().all(char::is_alphabetic),
//!                     "name must contain only letters",
//!                 ),
//!             ],
//!         ),
//!         Field::new(
//!             "age",
//!             [lift_predicate(|age: &u32| *age < 18, "You must be at least 18 to buy beer")],
//!         ),
//!     ),
//!     |(name, age)| format!("{name} ({age})"),
//! );
//!
//! let outcome = run_plan(&plan, (String::new(), 17));
//! let messages = outcome.into_result().expect_err("both fields fail").into_messages();
//! assert_eq!(
//!     messages,
//!     ["Name must not be empty", "You must be at least 18 to buy beer"]
//! );
//!
//! assert_eq!(
//!     run_plan(&plan, ("Dennis".to_owned(), 42)),
//!     Outcome::Valid("Dennis (42)".to_owned())
//! );
//! ```

mod check;
mod engine;
mod fault;
mod outcome;
mod plan;
mod violations;

pub use check::{Check, fault_message};
pub use engine::{Field, lift_predicate, run_plan, run_single};
pub use outcome::Outcome;
pub use plan::{COMBINER_FAULT_MESSAGE, FieldSet, ValidationPlan};
pub use violations::{EmptyViolationsError, Violations};
