use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::AddressError;

/// Longest accepted subject name, counted in characters.
pub const MAX_NAME_LEN: usize = 50;

/// Validated, canonical name of a subject.
///
/// Surrounding whitespace is trimmed; the trimmed text is what gets derived
/// and stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubjectName(String);

impl SubjectName {
    pub fn new(raw: &str) -> Result<Self, AddressError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(AddressError::InvalidIdentifier(
                "name is empty".to_owned(),
            ));
        }
        let len = name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(AddressError::InvalidIdentifier(format!(
                "name has {} characters, the limit is {}",
                len, MAX_NAME_LEN
            )));
        }
        if name.chars().any(char::is_control) {
            return Err(AddressError::InvalidIdentifier(
                "name contains control characters".to_owned(),
            ));
        }
        Ok(Self(name.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SubjectName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SubjectName {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for SubjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for SubjectName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SubjectName {
    fn deserialize<D>(deserializer: D) -> Result<SubjectName, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <String as Deserialize>::deserialize(deserializer)?;
        SubjectName::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::{SubjectName, MAX_NAME_LEN};
    use crate::address::AddressError;

    #[test]
    fn test_trims() {
        let name = SubjectName::new("  Jane Doe \n").unwrap();
        assert_eq!(name.as_str(), "Jane Doe");
        assert_eq!(name, SubjectName::new("Jane Doe").unwrap());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            SubjectName::new("   "),
            Err(AddressError::InvalidIdentifier(_))
        ));
        assert!(SubjectName::new("").is_err());
    }

    #[test]
    fn test_length_is_counted_in_characters() {
        let at_limit = "é".repeat(MAX_NAME_LEN);
        assert!(SubjectName::new(&at_limit).is_ok());
        let over = "a".repeat(MAX_NAME_LEN + 1);
        assert!(SubjectName::new(&over).is_err());
    }

    #[test]
    fn test_rejects_control_characters() {
        assert!(SubjectName::new("Jane\u{0}Doe").is_err());
        assert!(SubjectName::new("Jane\tDoe").is_err());
    }
}
