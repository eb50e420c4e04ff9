/// Ways a version string can fail to parse.
///
/// Every variant carries the offending text so callers can surface it to users as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    #[error("Invalid version component {component:?}: {reason}")]
    InvalidComponent {
        component: String,
        reason: &'static str,
    },
    #[error("Version component {component:?} is negative, negative numbers are not supported")]
    NegativeValue { component: String },
    #[error("Version component {component:?} is too large, the maximum is 255")]
    ComponentTooLarge { component: String },
    #[error("Could not parse version {version:?}, no more than 3 dot-separated components are allowed")]
    TooManyComponents { version: String },
}

impl VersionError {
    /// The component or version text that was rejected.
    pub fn offending_text(&self) -> &str {
        match self {
            Self::InvalidComponent { component, .. }
            | Self::NegativeValue { component }
            | Self::ComponentTooLarge { component } => component,
            Self::TooManyComponents { version } => version,
        }
    }
}
