//! Person records and the rules a person must satisfy.
//!
//! # Validation Rules
//!
//! - Name: not empty, at most [`NAME_MAX_CHARS`] characters, letters only
//! - Age: at least [`MINIMUM_AGE`]
//!
//! Every rule runs on every registration, so callers see all broken rules at
//! once.

use verdict::{Check, Field, ValidationPlan, lift_predicate};

/// Maximum number of characters allowed in a name.
pub const NAME_MAX_CHARS: usize = 7;

/// Minimum age a person must have.
pub const MINIMUM_AGE: u32 = 18;

/// Reported when the name is empty.
pub const EMPTY_NAME_MESSAGE: &str = "Name must not be empty";

/// Reported when the name exceeds [`NAME_MAX_CHARS`].
pub const NAME_TOO_LONG_MESSAGE: &str = "Maximum length of 7 chars exceeded";

/// Reported when the name contains anything other than letters.
pub const NAME_NOT_LETTERS_MESSAGE: &str = "name must contain only letters";

/// Reported when the age is below [`MINIMUM_AGE`].
pub const UNDER_AGE_MESSAGE: &str = "You must be at least 18 to buy beer";

/// A person who passed validation.
///
/// Values are only produced by [`person_plan`], so every `Person` satisfies
/// the name and age rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    age: u32,
}

impl Person {
    /// The person's name, which also keys the directory.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The person's age in years.
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }
}

/// The fields a person plan validates: a name and an age.
pub type PersonFields = (Field<String>, Field<u32>);

/// A plan turning a raw name and age into a [`Person`].
pub type PersonPlan = ValidationPlan<PersonFields, Person>;

/// Checks applied to a person's name, in reporting order.
#[must_use]
pub fn name_checks() -> Vec<Check<String>> {
    vec![
        lift_predicate(|name: &String| name.is_empty(), EMPTY_NAME_MESSAGE),
        lift_predicate(
            |name: &String| name.chars().count() > NAME_MAX_CHARS,
            NAME_TOO_LONG_MESSAGE,
        ),
        lift_predicate(
            |name: &String| !name.chars().all(char::is_alphabetic),
            NAME_NOT_LETTERS_MESSAGE,
        ),
    ]
}

/// Checks applied to a person's age.
#[must_use]
pub fn age_checks() -> Vec<Check<u32>> {
    vec![lift_predicate(|age: &u32| *age < MINIMUM_AGE, UNDER_AGE_MESSAGE)]
}

/// Build the plan validating a name and an age into a [`Person`].
///
/// # Examples
///
/// ```
/// use person_directory::{EMPTY_NAME_MESSAGE, UNDER_AGE_MESSAGE, person_plan};
///
/// let plan = person_plan();
/// let rejected = plan.run((String::new(), 17)).into_result();
///
/// assert_eq!(
///     rejected.map_err(|violations| violations.into_messages()),
///     Err(vec![EMPTY_NAME_MESSAGE.to_owned(), UNDER_AGE_MESSAGE.to_owned()])
/// );
/// ```
#[must_use]
pub fn person_plan() -> PersonPlan {
    ValidationPlan::new(
        (
            Field::new("name", name_checks()),
            Field::new("age", age_checks()),
        ),
        |(name, age)| Person { name, age },
    )
}
