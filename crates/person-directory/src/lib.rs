//! Owned in-memory person lookup backed by accumulating validation.
//!
//! A [`PersonDirectory`] stores people keyed by name with insert-or-replace
//! semantics. People enter it only through [`PersonDirectory::register`], which
//! runs the name and age rules together and reports every broken rule at once.
//!
//! # Example
//!
//! ```
//! use person_directory::{NAME_NOT_LETTERS_MESSAGE, NAME_TOO_LONG_MESSAGE, PersonDirectory};
//!
//! let mut directory = PersonDirectory::new();
//!
//! let rejected = directory
//!     .register("Dennis42", 30)
//!     .into_result()
//!     .expect_err("name breaks two rules");
//! assert_eq!(
//!     rejected.into_messages(),
//!     [NAME_TOO_LONG_MESSAGE, NAME_NOT_LETTERS_MESSAGE]
//! );
//!
//! directory.register("Dennis", 42);
//! assert_eq!(directory.lookup("Dennis").map(|person| person.age()), Some(42));
//! ```

mod directory;
mod person;

pub use directory::PersonDirectory;
pub use person::{
    EMPTY_NAME_MESSAGE, MINIMUM_AGE, NAME_MAX_CHARS, NAME_NOT_LETTERS_MESSAGE,
    NAME_TOO_LONG_MESSAGE, Person, PersonFields, PersonPlan, UNDER_AGE_MESSAGE, age_checks,
    name_checks, person_plan,
};
