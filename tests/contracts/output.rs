//! Output contracts (OUT-001 through OUT-003)

use crate::common::*;

/// CONTRACT OUT-001: Failures never leave partial output on stdout
mod no_partial_output {
    use super::*;

    #[test]
    fn contract_failed_generate_prints_nothing_to_stdout() {
        let env = TestEnv::builder()
            .with_default(DEFAULT_SERVER)
            .with_env("local", INVALID_PORT_OVERRIDE)
            .with_schema(SERVER_SCHEMA)
            .build();

        let result = env.run(&["generate", "--env", "local", "--component", "features"]);

        assert_failed_cleanly!(result);
        assert!(result.stdout.is_empty(), "stdout:\n{}", result.stdout);
    }
}

/// CONTRACT OUT-002: Exit codes
///
/// 0 on success, 1 on any command failure, 2 on usage errors.
/// Differences in a diff are not a failure.
mod exit_codes {
    use super::*;

    #[test]
    fn contract_diff_with_differences_exits_zero() {
        let env = TestEnv::builder()
            .with_default(DEFAULT_SERVER)
            .with_env("local", LOCAL_OVERRIDE)
            .build();

        let result = env.run(&["diff", "default", "local"]);

        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn contract_invalid_validate_exits_one() {
        let env = TestEnv::builder()
            .with_default(DEFAULT_SERVER)
            .with_env("staging", INVALID_PORT_OVERRIDE)
            .with_schema(SERVER_SCHEMA)
            .build();

        let result = env.run(&["validate"]);

        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn contract_missing_argument_exits_two() {
        let env = TestEnv::builder().build();

        let result = env.run(&["generate"]);

        assert_eq!(result.exit_code, 2);
    }
}

/// CONTRACT OUT-003: `--json` always yields exactly one object
mod json_single_object {
    use super::*;

    #[test]
    fn contract_json_for_every_command() {
        let env = TestEnv::builder()
            .with_default(DEFAULT_SERVER)
            .with_env("local", LOCAL_OVERRIDE)
            .with_schema(SERVER_SCHEMA)
            .build();

        let invocations: [&[&str]; 6] = [
            &["--json", "generate", "--env", "local"],
            &["--json", "generate", "--env", "nope"],
            &["--json", "validate"],
            &["--json", "diff", "default", "local"],
            &["--json", "add-env", "qa"],
            &["--json", "add-env", "qa"],
        ];

        for args in invocations {
            let result = env.run(args);
            let value = result.json();
            assert!(value.is_object(), "{args:?}");
            let success = value["success"].as_bool().unwrap();
            assert_eq!(success, result.success, "{args:?}");
            if success {
                assert!(value.get("data").is_some(), "{args:?}");
            } else {
                assert!(
                    value.get("error").is_some() || value.get("data").is_some(),
                    "{args:?}"
                );
            }
        }
    }
}
