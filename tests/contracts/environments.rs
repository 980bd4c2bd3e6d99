//! Environment contracts (ENV-001 through ENV-003)

use crate::common::*;

/// CONTRACT ENV-001: New environments merge to default
mod new_env_is_empty {
    use super::*;

    #[test]
    fn contract_added_env_generates_default() {
        let env = TestEnv::builder().with_default(DEFAULT_SERVER).build();

        assert!(env.run(&["add-env", "staging"]).success);
        let from_default = env.run(&["generate", "--env", "default"]);
        let from_staging = env.run(&["generate", "--env", "staging"]);

        assert!(from_staging.success, "stderr:\n{}", from_staging.stderr);
        assert_eq!(from_default.stdout, from_staging.stdout);
    }
}

/// CONTRACT ENV-002: Names are validated everywhere
mod names_validated {
    use super::*;

    #[test]
    fn contract_path_like_names_rejected() {
        let env = TestEnv::builder().with_default(DEFAULT_SERVER).build();

        for args in [
            &["generate", "--env", "../default"][..],
            &["validate", "--env", "Local"][..],
            &["diff", "default", "a/b"][..],
            &["add-env", ".hidden"][..],
        ] {
            let result = env.run(args);
            assert_failed_cleanly!(result);
            assert_output_contains!(result, "invalid environment name");
        }
    }
}

/// CONTRACT ENV-003: Existing environments are never overwritten
mod never_overwrite {
    use super::*;

    #[test]
    fn contract_add_env_twice_keeps_first() {
        let env = TestEnv::builder().with_default(DEFAULT_SERVER).build();

        assert!(env.run(&["add-env", "qa"]).success);
        env.write_project_file("components/config/envs/qa/config.yaml", "edited: true\n");

        let second = env.run(&["add-env", "qa"]);

        assert_failed_cleanly!(second);
        assert_eq!(
            env.read_project_file("components/config/envs/qa/config.yaml"),
            "edited: true\n"
        );
    }
}
