//! Platform kinds for first-class clients.

use super::ClientLabel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant for the platforms the runtime ships clients for.
///
/// First-class clients report their kind through
/// [`Client::client_type`](crate::client::ports::Client::client_type) so the
/// resolver never has to guess from type names. Integrations outside the
/// known set use [`ClientKind::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientKind {
    /// Discord bot client.
    Discord,
    /// Telegram bot client.
    Telegram,
    /// Twitter/X client.
    Twitter,
    /// Slack app client.
    Slack,
    /// Direct REST client.
    Direct,
    /// Any other integration, keyed by its label.
    Custom(String),
}

impl ClientKind {
    /// Returns the canonical label for the kind.
    ///
    /// Custom kinds return their label unchanged.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Discord => "discord",
            Self::Telegram => "telegram",
            Self::Twitter => "twitter",
            Self::Slack => "slack",
            Self::Direct => "direct",
            Self::Custom(label) => label.as_str(),
        }
    }

    /// Maps a resolved label onto a kind.
    ///
    /// Matching is exact: `"Discord"` is a custom kind, not
    /// [`ClientKind::Discord`].
    #[must_use]
    pub fn from_label(label: &ClientLabel) -> Self {
        match label.as_str() {
            "discord" => Self::Discord,
            "telegram" => Self::Telegram,
            "twitter" => Self::Twitter,
            "slack" => Self::Slack,
            "direct" => Self::Direct,
            other => Self::Custom(other.to_owned()),
        }
    }

    /// Returns `true` for kinds outside the built-in platform set.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for ClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
