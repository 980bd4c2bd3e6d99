//! Scenario: adding a staging environment

use crate::common::*;

#[test]
fn scenario_add_env_without_scaffold_is_actionable() {
    let env = TestEnv::builder().without_envs_root().build();

    let result = env.run(&["add-env", "staging"]);

    assert_failed_cleanly!(result);
    assert_output_contains!(result, "components/config/envs");
    assert_output_contains!(result, "Fix:");
}

#[test]
fn scenario_new_environment_has_no_differences() {
    let env = TestEnv::builder().with_default(DEFAULT_SERVER).build();

    let added = env.run(&["add-env", "staging"]);
    assert!(added.success, "stderr:\n{}", added.stderr);
    assert_file_exists!(env, "components/config/envs/staging/config.yaml");

    let diff = env.run(&["diff", "default", "staging"]);

    assert!(diff.success, "stderr:\n{}", diff.stderr);
    assert_eq!(diff.stdout, "No differences between default and staging\n");
}
