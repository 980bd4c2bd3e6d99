#![no_main]

use layered_config::{diff, merge, ConfigValue};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Split one input into a base and an override layer
        let (base, overrides) = content.split_once("\n---\n").unwrap_or((content, ""));
        let (Ok(base), Ok(overrides)) = (
            ConfigValue::parse_yaml(base),
            ConfigValue::parse_yaml(overrides),
        ) else {
            return;
        };

        // Merging, diffing and rendering should never panic
        let merged = merge(&base, &overrides);
        let _ = diff(&base, &merged);
        let _ = merged.to_yaml_string();
        let _ = merged.to_json();
    }
});
