//! Share target platforms.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a piece of content was shared to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// LinkedIn.
    Linkedin,
    /// Twitter / X.
    Twitter,
    /// Facebook.
    Facebook,
    /// WhatsApp.
    Whatsapp,
    /// Email (mailto link).
    Email,
    /// Link copied to the clipboard.
    Copy,
    /// The browser's native share sheet.
    Native,
}

impl Platform {
    /// Every accepted platform, in response order.
    pub const ALL: [Platform; 7] = [
        Platform::Linkedin,
        Platform::Twitter,
        Platform::Facebook,
        Platform::Whatsapp,
        Platform::Email,
        Platform::Copy,
        Platform::Native,
    ];

    /// Wire name of the platform.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linkedin => "linkedin",
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
            Self::Whatsapp => "whatsapp",
            Self::Email => "email",
            Self::Copy => "copy",
            Self::Native => "native",
        }
    }

    /// Membership test against the closed set of names. Exact, case-sensitive.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
