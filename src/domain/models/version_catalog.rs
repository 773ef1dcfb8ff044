use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

use crate::domain::value_objects::SdkVersion;

// Greedy prefix: when a name carries several `-x.y.z` runs the last one wins.
static VERSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r".*-([0-9]+\.[0-9]+\.[0-9]+).*").expect("version pattern compiles")
});

/// Extract the SDK version embedded in an object name, if any
pub fn extract_version(name: &str) -> Option<SdkVersion> {
    let caps = VERSION_RE.captures(name)?;
    let version = caps.get(1)?;
    SdkVersion::new(version.as_str().to_string()).ok()
}

/// Deduplicated set of SDK versions, iterated in natural order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionCatalog {
    versions: BTreeSet<SdkVersion>,
}

impl VersionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from object names, skipping names without a version
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Self::new();
        for name in names {
            catalog.record(name.as_ref());
        }
        catalog
    }

    /// Record the version carried by `name`. Returns the version when the
    /// name had one, whether or not it was already known.
    pub fn record(&mut self, name: &str) -> Option<SdkVersion> {
        let version = extract_version(name)?;
        self.versions.insert(version.clone());
        Some(version)
    }

    pub fn contains(&self, version: &SdkVersion) -> bool {
        self.versions.contains(version)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SdkVersion> {
        self.versions.iter()
    }

    pub fn into_sorted_vec(self) -> Vec<SdkVersion> {
        self.versions.into_iter().collect()
    }
}

impl FromIterator<SdkVersion> for VersionCatalog {
    fn from_iter<T: IntoIterator<Item = SdkVersion>>(iter: T) -> Self {
        Self {
            versions: iter.into_iter().collect(),
        }
    }
}
