#![no_main]

use layered_config::{ConfigValue, SchemaDocument, SchemaValidator};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and compiling arbitrary schemas should never panic
        if let Ok(schema) = SchemaDocument::parse(content) {
            if let Ok(validator) = SchemaValidator::compile(&schema) {
                let _ = validator.validate(&ConfigValue::empty_map());
            }
        }
    }
});
