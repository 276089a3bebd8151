//! In-memory person lookup keyed by name.

use std::collections::HashMap;

use tracing::debug;
use verdict::Outcome;

use crate::person::{Person, PersonPlan, person_plan};

/// An owned map of validated people, keyed by name.
///
/// The directory is a plain value: callers own it and pass it by reference.
/// Registration validates through one shared [`PersonPlan`] built when the
/// directory is created.
#[derive(Debug)]
pub struct PersonDirectory {
    people: HashMap<String, Person>,
    plan: PersonPlan,
}

impl PersonDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            people: HashMap::new(),
            plan: person_plan(),
        }
    }

    /// Insert `person`, replacing any record with the same name.
    ///
    /// Returns the record that was replaced, if any.
    pub fn insert(&mut self, person: Person) -> Option<Person> {
        let key = person.name().to_owned();
        let replaced = self.people.insert(key, person);
        debug!(replaced = replaced.is_some(), "stored person record");
        replaced
    }

    /// Look up a person by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Person> {
        self.people.get(name)
    }

    /// Validate a raw name and age, storing the person when every rule passes.
    ///
    /// On success the outcome carries the record that was replaced, if any.
    /// On failure the directory is left untouched and the outcome carries every
    /// broken rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use person_directory::PersonDirectory;
    ///
    /// let mut directory = PersonDirectory::new();
    ///
    /// assert!(directory.register("Dennis", 42).is_valid());
    /// assert!(directory.register("Dennis42", 17).is_invalid());
    /// assert_eq!(directory.len(), 1);
    /// ```
    pub fn register(&mut self, name: impl Into<String>, age: u32) -> Outcome<Option<Person>> {
        match self.plan.run((name.into(), age)) {
            Outcome::Valid(person) => Outcome::Valid(self.insert(person)),
            Outcome::Invalid(violations) => {
                debug!(
                    violations = violations.count(),
                    "rejected person registration"
                );
                Outcome::Invalid(violations)
            }
        }
    }

    /// Number of stored people.
    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Returns `true` when nobody is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

impl Default for PersonDirectory {
    fn default() -> Self {
        Self::new()
    }
}
