use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::{errors::ValidationError, natural_sort::natural_cmp};

/// A Cloud SDK release version: three dot separated runs of ASCII digits
///
/// Equality is exact string equality, so "01.0.0" and "1.0.0" are distinct.
/// Ordering is natural ordering; equal numbers with fewer leading zeros come first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SdkVersion(String);

impl SdkVersion {
    pub fn new(value: String) -> Result<Self, ValidationError> {
        let mut parts = 0;
        for part in value.split('.') {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ValidationError::MalformedSdkVersion(value));
            }
            parts += 1;
        }

        if parts != 3 {
            return Err(ValidationError::MalformedSdkVersion(value));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Ord for SdkVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        natural_cmp(&self.0, &other.0)
    }
}

impl PartialOrd for SdkVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for SdkVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for SdkVersion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl TryFrom<String> for SdkVersion {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SdkVersion> for String {
    fn from(version: SdkVersion) -> Self {
        version.0
    }
}
