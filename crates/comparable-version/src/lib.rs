//! Compact, totally ordered version numbers whose components fit in a byte.
//!
//! [`Version`] accepts any number of `.`-separated components. [`FixedVersion`]
//! accepts the narrower `major.minor.micro-patch` shape. Both ignore trailing
//! zero components when comparing and hashing, and both display the exact text
//! they were parsed from.

mod component;
mod error;
mod fixed;
mod hash;
mod version;

pub use error::VersionError;
pub use fixed::FixedVersion;
pub use version::Version;
