//! Resolution outcome types.

use super::{ClientKind, ClientLabel};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which resolution rule produced a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSource {
    /// The client declared its type.
    Declared,
    /// The label was derived from the client's variant name.
    Variant,
    /// The client carried no usable metadata; the label was generated.
    Fallback,
}

impl LabelSource {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Declared => "declared",
            Self::Variant => "variant",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for LabelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved label together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLabel {
    label: ClientLabel,
    source: LabelSource,
}

impl ResolvedLabel {
    /// Pairs a label with its source.
    #[must_use]
    pub const fn new(label: ClientLabel, source: LabelSource) -> Self {
        Self { label, source }
    }

    /// Returns the label.
    #[must_use]
    pub const fn label(&self) -> &ClientLabel {
        &self.label
    }

    /// Returns the rule that produced the label.
    #[must_use]
    pub const fn source(&self) -> LabelSource {
        self.source
    }

    /// Returns the platform kind the label maps to.
    ///
    /// Generated fallback labels always map to [`ClientKind::Custom`].
    #[must_use]
    pub fn kind(&self) -> ClientKind {
        ClientKind::from_label(&self.label)
    }

    /// Consumes the resolution and returns the label.
    #[must_use]
    pub fn into_label(self) -> ClientLabel {
        self.label
    }
}
