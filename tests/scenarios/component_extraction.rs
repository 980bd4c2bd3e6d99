//! Scenario: a service pulls only its own section for local development

use crate::common::*;

#[test]
fn scenario_local_database_override_for_server_component() {
    let env = TestEnv::builder()
        .with_default("server:\n  port: 3000\n  database:\n    host: db.internal\n    pool: 10\n")
        .with_env("local", "server:\n  database:\n    host: localhost\n")
        .build();

    let result = env.run(&["--json", "generate", "--env", "local", "--component", "server"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(
        result.json()["data"]["config"],
        serde_json::json!({"port": 3000, "database": {"host": "localhost", "pool": 10}})
    );

    let text = env.run(&["generate", "--env", "local", "--component", "server"]);
    assert_eq!(
        text.stdout,
        "port: 3000\ndatabase:\n  host: localhost\n  pool: 10\n"
    );
}
