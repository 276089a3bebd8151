//! Multi-field validation plans with applicative accumulation.
//!
//! A [`ValidationPlan`] pairs a tuple of [`Field`]s with a combining function.
//! Running it validates every field, concatenates the violations of those that
//! fail in declaration order, and calls the combiner only when all of them
//! pass. Plans hold no mutable state, so one plan can serve any number of
//! inputs and threads.

use std::fmt;
use std::sync::Arc;

use tracing::{trace, warn};

use crate::engine::Field;
use crate::fault::contain;
use crate::outcome::Outcome;

/// Message recorded when a plan's combiner faults instead of returning.
pub const COMBINER_FAULT_MESSAGE: &str = "plan combiner failed unexpectedly";

/// An ordered tuple of fields that can be validated together.
///
/// Implemented for tuples of one to six [`Field`]s. `Inputs` and `Values` are
/// the matching tuples of field types.
pub trait FieldSet {
    /// One input per field, in declaration order.
    type Inputs;
    /// One validated value per field, in declaration order.
    type Values;

    /// Validate every field, accumulating violations in declaration order.
    fn run_fields(&self, inputs: Self::Inputs) -> Outcome<Self::Values>;

    /// Field names in declaration order.
    fn field_names(&self) -> Vec<&str>;
}

// Each arm chains `Outcome::zip` from a unit seed, so the nested pattern
// flattens `((((), a), b), ...)` back into a plain tuple.
macro_rules! impl_field_set {
    ($(($ty:ident, $idx:tt, $input:ident, $value:ident)),+ => $nested:pat_param) => {
        impl<$($ty),+> FieldSet for ($(Field<$ty>,)+) {
            type Inputs = ($($ty,)+);
            type Values = ($($ty,)+);

            fn run_fields(&self, inputs: Self::Inputs) -> Outcome<Self::Values> {
                let ($($input,)+) = inputs;
                Outcome::Valid(())
                    $(.zip(self.$idx.run($input)))+
                    .map(|$nested| ($($value,)+))
            }

            fn field_names(&self) -> Vec<&str> {
                vec![$(self.$idx.name()),+]
            }
        }
    };
}

impl_field_set!((A, 0, a_input, a) => ((), a));
impl_field_set!((A, 0, a_input, a), (B, 1, b_input, b) => (((), a), b));
impl_field_set!(
    (A, 0, a_input, a), (B, 1, b_input, b), (C, 2, c_input, c)
    => ((((), a), b), c)
);
impl_field_set!(
    (A, 0, a_input, a), (B, 1, b_input, b), (C, 2, c_input, c), (D, 3, d_input, d)
    => (((((), a), b), c), d)
);
impl_field_set!(
    (A, 0, a_input, a), (B, 1, b_input, b), (C, 2, c_input, c), (D, 3, d_input, d),
    (E, 4, e_input, e)
    => ((((((), a), b), c), d), e)
);
impl_field_set!(
    (A, 0, a_input, a), (B, 1, b_input, b), (C, 2, c_input, c), (D, 3, d_input, d),
    (E, 4, e_input, e), (F, 5, f_input, f)
    => (((((((), a), b), c), d), e), f)
);

type Combiner<V, R> = dyn Fn(V) -> R + Send + Sync;

/// A reusable description of per-field checks and how to combine their values.
///
/// # Examples
///
/// ```
/// use verdict::{Field, Outcome, ValidationPlan, lift_predicate};
///
/// #[derive(Debug, PartialEq)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let plan = ValidationPlan::new(
///     (
///         Field::new(
///             "name",
///             [lift_predicate(|name: &String| name.is_empty(), "Name must not be empty")],
///         ),
///         Field::new(
///             "age",
///             [lift_predicate(|age: &u32| *age < 18, "You must be at least 18 to buy beer")],
///         ),
///     ),
///     |(name, age)| Person { name, age },
/// );
///
/// let rejected = plan.run((String::new(), 17));
/// assert_eq!(
///     rejected.violations().map(|v| v.count()),
///     Some(2)
/// );
///
/// let accepted = plan.run(("Dennis".to_owned(), 42));
/// assert_eq!(
///     accepted,
///     Outcome::Valid(Person { name: "Dennis".to_owned(), age: 42 })
/// );
/// ```
pub struct ValidationPlan<F, R>
where
    F: FieldSet,
{
    fields: F,
    combine: Arc<Combiner<F::Values, R>>,
}

impl<F, R> ValidationPlan<F, R>
where
    F: FieldSet,
{
    /// Build a plan from its fields and the function combining their values.
    #[must_use]
    pub fn new<C>(fields: F, combine: C) -> Self
    where
        C: Fn(F::Values) -> R + Send + Sync + 'static,
    {
        Self {
            fields,
            combine: Arc::new(combine),
        }
    }

    /// The plan's fields.
    #[must_use]
    pub const fn fields(&self) -> &F {
        &self.fields
    }

    /// Validate `inputs` field by field and combine them when all pass.
    ///
    /// A combiner that panics yields [`COMBINER_FAULT_MESSAGE`] as the only
    /// violation.
    #[must_use]
    pub fn run(&self, inputs: F::Inputs) -> Outcome<R> {
        match self.fields.run_fields(inputs) {
            Outcome::Valid(values) => self.combine_values(values),
            Outcome::Invalid(violations) => {
                trace!(
                    fields = ?self.fields.field_names(),
                    violations = violations.count(),
                    "plan rejected inputs"
                );
                Outcome::Invalid(violations)
            }
        }
    }

    fn combine_values(&self, values: F::Values) -> Outcome<R> {
        match contain(|| (self.combine)(values)) {
            Ok(combined) => Outcome::Valid(combined),
            Err(reason) => {
                warn!(
                    fields = ?self.fields.field_names(),
                    %reason,
                    "plan combiner faulted; recording it as a violation"
                );
                Outcome::invalid(COMBINER_FAULT_MESSAGE)
            }
        }
    }
}

impl<F, R> Clone for ValidationPlan<F, R>
where
    F: FieldSet + Clone,
{
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            combine: Arc::clone(&self.combine),
        }
    }
}

impl<F, R> fmt::Debug for ValidationPlan<F, R>
where
    F: FieldSet,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationPlan")
            .field("fields", &self.fields.field_names())
            .finish_non_exhaustive()
    }
}
