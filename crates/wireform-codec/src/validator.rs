//! Post-decode validators.
//!
//! A validator is a predicate plus the description a rejected input is
//! reported under. Validators compose by conjunction and attach to a
//! codec via [`crate::Codec::validated`]; they never alter encoding.

use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// A named predicate over decoded values.
pub struct Validator<T: ?Sized> {
    description: String,
    check: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized> Validator<T> {
    /// Build a validator from a description and a predicate.
    pub fn new(description: impl Into<String>, check: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self {
            description: description.into(),
            check: Arc::new(check),
        }
    }

    /// The description a rejection is reported under.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// True if `value` satisfies the predicate.
    pub fn accepts(&self, value: &T) -> bool {
        (self.check)(value)
    }

    /// Conjunction: accepts only what both validators accept.
    pub fn and(self, other: Self) -> Self
    where
        T: 'static,
    {
        let description = format!("{} and {}", self.description, other.description);
        let left = self.check;
        let right = other.check;
        Self {
            description,
            check: Arc::new(move |value: &T| left(value) && right(value)),
        }
    }
}

impl<T: AsRef<str> + ?Sized> Validator<T> {
    /// Accepts strings of at least `n` characters.
    pub fn min_length(n: usize) -> Self {
        Self::new(format!("length >= {n}"), move |value: &T| {
            value.as_ref().chars().count() >= n
        })
    }

    /// Accepts strings of at most `n` characters.
    pub fn max_length(n: usize) -> Self {
        Self::new(format!("length <= {n}"), move |value: &T| {
            value.as_ref().chars().count() <= n
        })
    }

    /// Accepts strings matching the regular expression.
    ///
    /// Compiling the pattern is setup-time configuration, so a bad
    /// pattern is an `Err` here rather than a decode-time outcome.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(pattern)?;
        Ok(Self::new(format!("matches /{pattern}/"), move |value: &T| {
            regex.is_match(value.as_ref())
        }))
    }
}

impl<T: PartialOrd + Copy + fmt::Display + Send + Sync + 'static> Validator<T> {
    /// Accepts values in the closed range `[min, max]`.
    pub fn in_range(min: T, max: T) -> Self {
        Self::new(format!("in [{min}, {max}]"), move |value: &T| {
            min <= *value && *value <= max
        })
    }
}

impl<T: ?Sized> Clone for Validator<T> {
    fn clone(&self) -> Self {
        Self {
            description: self.description.clone(),
            check: self.check.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
