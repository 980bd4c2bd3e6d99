//! Scenario: reviewing what differs between local and production

use crate::common::*;

#[test]
fn scenario_only_port_differs() {
    let env = TestEnv::builder()
        .with_default(DEFAULT_SERVER)
        .with_env("local", LOCAL_OVERRIDE)
        .with_env("production", PRODUCTION_OVERRIDE)
        .build();

    let result = env.run(&["--json", "diff", "local", "production"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let differences = result.json()["data"]["differences"].clone();
    assert_eq!(
        differences,
        serde_json::json!([
            {"path": "server.port", "kind": "changed", "before": 8080, "after": 80}
        ])
    );
}

#[test]
fn scenario_diff_is_symmetric_from_the_cli() {
    let env = TestEnv::builder()
        .with_default(DEFAULT_SERVER)
        .with_env("local", "extra: 1\nserver:\n  port: 1\n")
        .with_env("production", "features: null\n")
        .build();

    let forward = env.run(&["--json", "diff", "local", "production"]).json();
    let backward = env.run(&["--json", "diff", "production", "local"]).json();

    let kinds = |v: &serde_json::Value| {
        let mut pairs: Vec<(String, String)> = v["data"]["differences"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| {
                (
                    d["path"].as_str().unwrap().to_string(),
                    d["kind"].as_str().unwrap().to_string(),
                )
            })
            .collect();
        pairs.sort();
        pairs
    };

    let swapped: Vec<(String, String)> = kinds(&forward)
        .into_iter()
        .map(|(path, kind)| {
            let kind = match kind.as_str() {
                "added" => "removed".to_string(),
                "removed" => "added".to_string(),
                other => other.to_string(),
            };
            (path, kind)
        })
        .collect();
    assert_eq!(swapped, kinds(&backward));
}
