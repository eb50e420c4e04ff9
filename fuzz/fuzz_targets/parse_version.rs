#![no_main]

use comparable_version::{FixedVersion, Version};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(version) = Version::new(data) {
        assert_eq!(version.as_str(), data);
        assert!(version.cmp(&version).is_eq());
    }

    if let Ok(fixed) = FixedVersion::new(data) {
        assert_eq!(fixed.as_str(), data);
        let converted = fixed.to_version();
        assert_eq!(Version::new(converted.as_str()).ok(), Some(converted));
    }
});
