use std::num::IntErrorKind;

use crate::VersionError;

/// Parse one version component: ASCII decimal digits with a value in `0..=255`.
///
/// Signs and whitespace are rejected. A `-` followed by a non-zero number is
/// reported as [`VersionError::NegativeValue`] rather than as junk.
pub(crate) fn parse_component(component: &str) -> Result<u8, VersionError> {
    if component.is_empty() {
        return Err(invalid(component, "component is empty"));
    }

    if let Some(digits) = component.strip_prefix('-')
        && is_decimal(digits)
        && digits.bytes().any(|b| b != b'0')
    {
        return Err(VersionError::NegativeValue {
            component: component.to_string(),
        });
    }

    if component.starts_with(['+', '-']) {
        return Err(invalid(component, "signs are not allowed"));
    }

    if !is_decimal(component) {
        return Err(invalid(component, "expected decimal digits only"));
    }

    component.parse::<u8>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => VersionError::ComponentTooLarge {
            component: component.to_string(),
        },
        _ => invalid(component, "expected decimal digits only"),
    })
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn invalid(component: &str, reason: &'static str) -> VersionError {
    VersionError::InvalidComponent {
        component: component.to_string(),
        reason,
    }
}
