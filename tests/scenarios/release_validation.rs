//! Scenario: CI validates every environment before a release

use crate::common::*;

#[test]
fn scenario_one_bad_environment_fails_the_batch() {
    let env = TestEnv::builder()
        .with_default(DEFAULT_SERVER)
        .with_env("local", LOCAL_OVERRIDE)
        .with_env("staging", INVALID_PORT_OVERRIDE)
        .with_schema(SERVER_SCHEMA)
        .build();

    let result = env.run(&["validate"]);

    assert_failed_cleanly!(result);
    let lines: Vec<&str> = result.stdout.lines().collect();
    assert_eq!(lines[0], "✓ default: Valid");
    assert_eq!(lines[1], "✓ local: Valid");
    assert_eq!(lines[2], "✗ staging: Invalid");
    assert!(lines[3].trim_start().starts_with("/server/port:"), "{}", lines[3]);
}

#[test]
fn scenario_fixing_the_environment_passes() {
    let env = TestEnv::builder()
        .with_default(DEFAULT_SERVER)
        .with_env("staging", INVALID_PORT_OVERRIDE)
        .with_schema(SERVER_SCHEMA)
        .build();
    assert!(!env.run(&["validate"]).success);

    env.write_project_file("components/config/envs/staging/config.yaml", "server:\n  port: 8443\n");

    let result = env.run(&["validate"]);
    assert!(result.success, "stdout:\n{}", result.stdout);
}
