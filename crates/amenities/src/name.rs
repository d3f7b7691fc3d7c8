use serde::{Deserialize, Serialize};
use serde_json::Value;

use hbnb_core::{DomainError, DomainResult, ValueObject};

/// Maximum length of an amenity name, in characters, after trimming.
pub const NAME_MAX_CHAR_COUNT: usize = 50;

/// A validated amenity name: trimmed, non-empty, at most
/// [`NAME_MAX_CHAR_COUNT`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AmenityName(String);

impl AmenityName {
    /// Trim `name` and check it against the length bounds.
    pub fn parse(name: &str) -> DomainResult<Self> {
        let name = trim_name(name);

        if name.is_empty() {
            return Err(DomainError::invalid_value("name is required"));
        }

        // Counted in chars, not bytes: "Café" is four characters.
        if name.chars().count() > NAME_MAX_CHAR_COUNT {
            return Err(DomainError::invalid_value(format!(
                "name must be at most {NAME_MAX_CHAR_COUNT} characters"
            )));
        }

        Ok(Self(name.to_owned()))
    }

    /// Like [`AmenityName::parse`], for input whose type is not known
    /// statically (e.g. a field of a JSON request body).
    pub fn from_value(value: &Value) -> DomainResult<Self> {
        match value {
            Value::String(name) => Self::parse(name),
            _ => Err(DomainError::invalid_type("name must be a string")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl ValueObject for AmenityName {}

impl AsRef<str> for AmenityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AmenityName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for AmenityName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AmenityName> for String {
    fn from(value: AmenityName) -> Self {
        value.0
    }
}

/// Strip surrounding whitespace, including the ASCII information separators
/// (U+001C..=U+001F) that `str::trim` keeps.
fn trim_name(name: &str) -> &str {
    name.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

/// Validate a candidate amenity name and return its canonical (trimmed) form.
pub fn validate_name(value: &Value) -> DomainResult<String> {
    AmenityName::from_value(value).map(AmenityName::into_inner)
}
