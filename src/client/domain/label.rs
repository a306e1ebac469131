//! Validated client label type.

use super::ClientDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Short string categorising a client instance (e.g. `discord`,
/// `mockconstructor`, `client_1718000000000`).
///
/// Labels are stored verbatim. Declared client types are never trimmed or
/// re-cased, so [`ClientLabel::new`] rejects only the empty string. Labels
/// derived from variant names are the exception: a variant named `Client`
/// normalises to the empty label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClientLabel(String);

impl ClientLabel {
    /// Creates a validated client label.
    ///
    /// # Errors
    ///
    /// Returns [`ClientDomainError::EmptyLabel`] when the value is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, ClientDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(ClientDomainError::EmptyLabel);
        }
        Ok(Self(raw))
    }

    /// Wraps a normalised variant name, which may be empty.
    pub(crate) const fn from_variant(normalized: String) -> Self {
        Self(normalized)
    }

    /// Joins a validated, non-empty prefix with a generated suffix.
    pub(crate) fn generated(prefix: &str, suffix: &str) -> Self {
        Self(format!("{prefix}{suffix}"))
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the label and returns the owned string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ClientLabel {
    type Error = ClientDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClientLabel> for String {
    fn from(label: ClientLabel) -> Self {
        label.0
    }
}

impl AsRef<str> for ClientLabel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ClientLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
