use std::{cmp::Ordering, str::FromStr};

use serde_with::{DeserializeFromStr, SerializeDisplay};
use tracing::debug;

use crate::{Version, VersionError, component::parse_component, hash::hash_components};

/// A version made up of up to 3 components separated by `.` and an optional
/// final one preceded by `-`, e.g. `4.0.0-1`.
///
/// Missing components are zero, so `4`, `4.0` and `4.0.0-0` are all equal.
/// The original text is kept verbatim for display.
#[derive(Debug, Clone, DeserializeFromStr, SerializeDisplay)]
pub struct FixedVersion {
    original: String,
    major: u8,
    minor: u8,
    micro: u8,
    patch: u8,
}

impl FixedVersion {
    pub fn new(version: impl Into<String>) -> Result<Self, VersionError> {
        let original = version.into();
        match Self::parse_fields(&original) {
            Ok([major, minor, micro, patch]) => Ok(Self {
                original,
                major,
                minor,
                micro,
                patch,
            }),
            Err(err) => {
                debug!("Rejected fixed version {original:?}: {err}");
                Err(err)
            }
        }
    }

    fn parse_fields(version: &str) -> Result<[u8; 4], VersionError> {
        let mut segments = version.splitn(3, '.');

        let major = segments.next().map(parse_component).transpose()?.unwrap_or(0);
        let minor = segments.next().map(parse_component).transpose()?.unwrap_or(0);

        // Only the third segment may carry the `-patch` suffix.
        let (micro, patch) = match segments.next() {
            None => (0, 0),
            Some(tail) if tail.contains('.') => {
                return Err(VersionError::TooManyComponents {
                    version: version.to_string(),
                });
            }
            Some(tail) => match tail.split_once('-') {
                Some((micro, patch)) => (parse_component(micro)?, parse_component(patch)?),
                None => (parse_component(tail)?, 0),
            },
        };

        Ok([major, minor, micro, patch])
    }

    pub fn major(&self) -> u8 {
        self.major
    }

    pub fn minor(&self) -> u8 {
        self.minor
    }

    pub fn micro(&self) -> u8 {
        self.micro
    }

    pub fn patch(&self) -> u8 {
        self.patch
    }

    /// All four components in comparison order.
    pub fn components(&self) -> [u8; 4] {
        [self.major, self.minor, self.micro, self.patch]
    }

    /// The exact text this version was parsed from.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    pub fn into_string(self) -> String {
        self.original
    }

    /// The same polynomial hash as [`Version::hash_code`], folded over all four components.
    pub fn hash_code(&self) -> i32 {
        hash_components(self.components())
    }

    /// Convert into a variable-length [`Version`] that orders identically.
    ///
    /// The result displays as `major.minor.micro.patch`, since the dashed form
    /// is not valid variable-length input.
    pub fn to_version(&self) -> Version {
        let components = self.components();
        let original = components
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(".");
        Version::from_parts(original, components.to_vec())
    }
}

impl PartialEq for FixedVersion {
    fn eq(&self, other: &Self) -> bool {
        self.components() == other.components()
    }
}

impl Eq for FixedVersion {}

impl std::hash::Hash for FixedVersion {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.components().hash(state);
    }
}

impl PartialOrd for FixedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FixedVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.micro.cmp(&other.micro))
            .then_with(|| self.patch.cmp(&other.patch))
    }
}

impl std::fmt::Display for FixedVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.original)
    }
}

impl AsRef<str> for FixedVersion {
    fn as_ref(&self) -> &str {
        &self.original
    }
}

impl FromStr for FixedVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, VersionError> {
        FixedVersion::new(s)
    }
}

impl TryFrom<&str> for FixedVersion {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        FixedVersion::new(value)
    }
}

impl TryFrom<String> for FixedVersion {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        FixedVersion::new(value)
    }
}
