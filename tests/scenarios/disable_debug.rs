//! Scenario: an environment removes a default setting with a tombstone

use crate::common::*;

#[test]
fn scenario_null_removes_debug_flag() {
    let env = TestEnv::builder()
        .with_default("server:\n  port: 3000\n  debug: true\n")
        .with_env("local", "server:\n  debug: null\n")
        .build();

    let result = env.run(&["generate", "--env", "local"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(result.stdout, "server:\n  port: 3000\n");
    assert!(!result.stdout.contains("debug"));
}
