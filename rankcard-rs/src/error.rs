//! Error types for card configuration and rendering.

use rankcard_canvas::CanvasError;
use std::fmt;
use thiserror::Error;

/// A field that must be set before a card can be rendered.
///
/// Variants are declared in the order the validation gate checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RequiredField {
    Avatar,
    Rank,
    Level,
    CurrentXp,
    RequiredXp,
    Username,
    Discriminator,
}

impl RequiredField {
    /// All required fields in check order.
    pub const ALL: [RequiredField; 7] = [
        RequiredField::Avatar,
        RequiredField::Rank,
        RequiredField::Level,
        RequiredField::CurrentXp,
        RequiredField::RequiredXp,
        RequiredField::Username,
        RequiredField::Discriminator,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RequiredField::Avatar => "avatar",
            RequiredField::Rank => "rank",
            RequiredField::Level => "level",
            RequiredField::CurrentXp => "current xp",
            RequiredField::RequiredXp => "required xp",
            RequiredField::Username => "username",
            RequiredField::Discriminator => "discriminator",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum CardError {
    /// A required input was never set.
    #[error("Card {0} was not set")]
    MissingField(RequiredField),

    /// A URL passed to a setter did not parse; the field kept its previous value.
    #[error("Invalid {field} URL {url:?}: {source}")]
    InvalidUrl {
        field: &'static str,
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Loading an avatar or badge failed.
    #[error("Failed to fetch image {url}: {message}")]
    Fetch { url: String, message: String },

    /// Fetched bytes were not a supported image.
    #[error("Failed to decode image {url}: {message}")]
    Decode { url: String, message: String },

    #[error(transparent)]
    Canvas(#[from] CanvasError),
}
