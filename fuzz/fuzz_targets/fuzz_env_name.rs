#![no_main]

use layered_config::EnvName;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        // Accepted names can never escape envs/
        if let Ok(env) = EnvName::parse(name) {
            assert!(!env.as_str().contains('/'));
            assert!(!env.as_str().starts_with('.'));
        }
    }
});
