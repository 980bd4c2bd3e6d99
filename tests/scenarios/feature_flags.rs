//! Scenario: an environment narrows the feature list

use crate::common::*;

#[test]
fn scenario_feature_list_is_replaced() {
    let env = TestEnv::builder()
        .with_default("features: [a, b]\n")
        .with_env("local", "features: [x]\n")
        .build();

    let result = env.run(&["generate", "--env", "local"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(result.stdout, "features:\n- x\n");
}
