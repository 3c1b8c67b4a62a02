//! Name value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for contact names.
///
/// This ensures that names are validated at construction time. The name
/// doubles as the directory key, so an empty name is never representable.
///
/// # Example
///
/// ```
/// use vita_directory::domain::Name;
///
/// let name = Name::new("Bill").unwrap();
/// assert_eq!(name.as_str(), "Bill");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name, validating that it's not empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the provided name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        let name = Name::new("Bill").unwrap();
        assert_eq!(name.as_str(), "Bill");
    }

    #[test]
    fn test_name_rejects_empty() {
        assert!(Name::new("").is_err());
    }

    #[test]
    fn test_name_keeps_whitespace() {
        // A blank-but-nonempty name is accepted, matching the non-empty rule.
        let name = Name::new(" ").unwrap();
        assert_eq!(name.as_str(), " ");
    }

    #[test]
    fn test_name_display() {
        let name = Name::new("John Doe").unwrap();
        assert_eq!(format!("{}", name), "John Doe");
    }

    #[test]
    fn test_name_serialization() {
        let name = Name::new("Bill").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Bill\"");
    }

    #[test]
    fn test_name_deserialization_empty_fails() {
        let result: Result<Name, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
