#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::hash::{Hash, Hasher};

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl GenericError {
    /// Joins many errors with separator.
    pub fn join_many(errs: &[GenericError], separator: &str) -> String {
        errs.iter().map(|err| err.0.as_str()).collect::<Vec<_>>().join(separator)
    }

    /// Prepends a context description to the error message.
    pub fn context(self, description: &str) -> Self {
        Self(format!("{description}: '{}'", self.0))
    }
}

impl std::fmt::Display for GenericError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<Box<dyn std::error::Error>> for GenericError {
    fn from(value: Box<dyn std::error::Error>) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

impl From<serde_json::Error> for GenericError {
    fn from(value: serde_json::Error) -> Self {
        Self(value.to_string())
    }
}

impl From<image::ImageError> for GenericError {
    fn from(value: image::ImageError) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<Self> for GenericError {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for GenericError {}

impl Hash for GenericError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
