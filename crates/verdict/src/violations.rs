//! Ordered, non-empty collections of violation messages.
//!
//! A [`Violations`] value is what an invalid outcome carries. It can never be
//! empty: the only infallible constructor takes a first message, and building
//! one from an arbitrary list reports [`EmptyViolationsError`] when the list
//! has nothing in it.

use std::slice;

use serde::Serialize;
use thiserror::Error;

/// Raised when a violation set would be built from zero messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a violation set requires at least one message")]
pub struct EmptyViolationsError;

/// Messages reported by failing checks, first-detected first.
///
/// Messages are never deduplicated: two checks reporting the same text both
/// appear. `Display` joins the messages with `"; "`, which keeps the type
/// usable as an error with `?` once an outcome is turned into a `Result`.
///
/// # Examples
///
/// ```
/// use verdict::Violations;
///
/// let mut violations = Violations::new("Name must not be empty");
/// violations.push("You must be at least 18 to buy beer");
///
/// assert_eq!(violations.count(), 2);
/// assert_eq!(
///     violations.to_string(),
///     "Name must not be empty; You must be at least 18 to buy beer"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Error)]
#[serde(transparent)]
#[error("{}", .0.join("; "))]
pub struct Violations(Vec<String>);

impl Violations {
    /// Start a violation set with its first message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(vec![message.into()])
    }

    /// Build a violation set from any sequence of messages.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyViolationsError`] when `messages` yields nothing.
    pub fn try_from_messages<I, S>(messages: I) -> Result<Self, EmptyViolationsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let collected: Vec<String> = messages.into_iter().map(Into::into).collect();
        Self::try_from(collected)
    }

    /// Append one message after those already present.
    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    /// Append every message from `other`, keeping its order.
    pub fn append(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Number of messages held. Always at least one.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.0.len()
    }

    /// Borrow the messages in detection order.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    /// Iterate over the messages in detection order.
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Consume the set, returning the underlying messages.
    #[must_use]
    pub fn into_messages(self) -> Vec<String> {
        self.0
    }
}

impl TryFrom<Vec<String>> for Violations {
    type Error = EmptyViolationsError;

    fn try_from(messages: Vec<String>) -> Result<Self, Self::Error> {
        if messages.is_empty() {
            return Err(EmptyViolationsError);
        }
        Ok(Self(messages))
    }
}

impl From<Violations> for Vec<String> {
    fn from(value: Violations) -> Self {
        value.0
    }
}

impl IntoIterator for Violations {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]
mod tests {
    //! Covers construction, ordering, and formatting of violation sets.

    use rstest::rstest;

    use super::*;

    #[test]
    fn empty_message_list_is_rejected() {
        let result = Violations::try_from(Vec::new());
        assert_eq!(result, Err(EmptyViolationsError));
    }

    #[test]
    fn empty_iterator_is_rejected() {
        let result = Violations::try_from_messages(std::iter::empty::<&str>());
        assert_eq!(result, Err(EmptyViolationsError));
    }

    #[test]
    fn empty_error_formats_correctly() {
        assert_eq!(
            EmptyViolationsError.to_string(),
            "a violation set requires at least one message"
        );
    }

    #[rstest]
    #[case(&["only"], 1)]
    #[case(&["first", "second"], 2)]
    #[case(&["same", "same", "same"], 3)]
    fn counts_every_message_without_deduplication(
        #[case] messages: &[&str],
        #[case] expected: usize,
    ) {
        let violations =
            Violations::try_from_messages(messages.iter().copied()).expect("non-empty input");
        assert_eq!(violations.count(), expected);
    }

    #[test]
    fn append_keeps_left_messages_first() {
        let mut left = Violations::new("a1");
        left.push("a2");
        left.append(Violations::new("b1"));

        assert_eq!(left.messages(), ["a1", "a2", "b1"]);
    }

    #[test]
    fn display_joins_with_semicolons() {
        let violations =
            Violations::try_from_messages(["too long", "not letters"]).expect("non-empty input");
        assert_eq!(violations.to_string(), "too long; not letters");
    }

    #[test]
    fn serialises_as_a_plain_array() {
        let violations =
            Violations::try_from_messages(["too long", "not letters"]).expect("non-empty input");
        let value = serde_json::to_value(&violations).expect("serialisable");
        assert_eq!(value, serde_json::json!(["too long", "not letters"]));
    }
}
