use std::{cmp::Ordering, str::FromStr};

use serde_with::{DeserializeFromStr, SerializeDisplay};
use tracing::{debug, trace};

use crate::{VersionError, component::parse_component, hash::hash_components};

/// A version made of any number of `.`-separated components, each in `0..=255`.
///
/// Trailing zero components are ignored for comparison and hashing, but the
/// original text is kept verbatim for display. `1.0`, `1.0.0` and `1.00` are
/// therefore equal while still rendering differently.
#[derive(Debug, Clone, DeserializeFromStr, SerializeDisplay)]
pub struct Version {
    original: String,
    components: Box<[u8]>,
}

impl Version {
    pub fn new(version: impl Into<String>) -> Result<Self, VersionError> {
        let original = version.into();
        match Self::parse_components(&original) {
            Ok(components) => Ok(Self {
                original,
                components,
            }),
            Err(err) => {
                debug!("Rejected version {original:?}: {err}");
                Err(err)
            }
        }
    }

    /// Build a version from already validated components, keeping `original` for display.
    pub(crate) fn from_parts(original: String, components: Vec<u8>) -> Self {
        let components = Self::canonicalize(&original, components);
        Self {
            original,
            components,
        }
    }

    fn parse_components(version: &str) -> Result<Box<[u8]>, VersionError> {
        let components = version
            .split('.')
            .map(parse_component)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::canonicalize(version, components))
    }

    fn canonicalize(version: &str, mut components: Vec<u8>) -> Box<[u8]> {
        let canonical_len = components
            .iter()
            .rposition(|&c| c != 0)
            .map_or(0, |last_nonzero| last_nonzero + 1);

        if canonical_len != components.len() {
            trace!(
                "Ignoring {} trailing zero component(s) of {version:?}",
                components.len() - canonical_len
            );
            components.truncate(canonical_len);
        }

        components.into_boxed_slice()
    }

    /// The components used for comparison, with trailing zeros removed.
    pub fn components(&self) -> &[u8] {
        &self.components
    }

    /// Is every component of this version zero, e.g. `0` or `0.0.0`?
    pub fn is_zero(&self) -> bool {
        self.components.is_empty()
    }

    /// The exact text this version was parsed from.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    pub fn into_string(self) -> String {
        self.original
    }

    /// A 32-bit polynomial hash of the canonical components.
    ///
    /// Stable across processes and platforms, unlike [`std::hash::Hash`] with a
    /// randomly seeded hasher. Equal versions always have equal hash codes.
    pub fn hash_code(&self) -> i32 {
        hash_components(self.components.iter().copied())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl Eq for Version {}

impl std::hash::Hash for Version {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.components.hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let prefix_len = self.components.len().min(other.components.len());

        for (a, b) in self.components[..prefix_len]
            .iter()
            .zip(&other.components[..prefix_len])
        {
            match a.cmp(b) {
                Ordering::Equal => continue,
                other => return other,
            }
        }

        // A shared prefix means the longer version has a deeper non-zero component.
        self.components.len().cmp(&other.components.len())
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.original)
    }
}

impl AsRef<str> for Version {
    fn as_ref(&self) -> &str {
        &self.original
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, VersionError> {
        Version::new(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Version::new(value)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Version::new(value)
    }
}
