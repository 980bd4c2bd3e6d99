//! Property tests for YAML layer parsing.

use layered_config::ConfigValue;
use proptest::prelude::*;

use crate::strategies::tree;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing arbitrary text never panics.
    #[test]
    fn property_parse_never_panics(content in ".{0,200}") {
        let _ = ConfigValue::parse_yaml(&content);
    }

    /// PROPERTY: rendered YAML parses back to an equal value.
    #[test]
    fn property_rendered_yaml_reparses(value in tree()) {
        let yaml = value.to_yaml_string().unwrap();
        let parsed = ConfigValue::parse_yaml(&yaml).unwrap();
        prop_assert_eq!(parsed, value);
    }
}
