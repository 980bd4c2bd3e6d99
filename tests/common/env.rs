//! Test environment builder for isolated CLI testing.
//!
//! Provides `TestEnv` - a temp project with a `components/config/` tree,
//! plus helpers to run the `config` binary against it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as one JSON document
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap_or_else(|e| {
            panic!(
                "stdout is not a single JSON document: {}\nstdout:\n{}\nstderr:\n{}",
                e, self.stdout, self.stderr
            )
        })
    }
}

/// Isolated project with a config tree
pub struct TestEnv {
    /// Temporary project root (the `--config-dir`)
    pub project_root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Path of an environment's layer file
    pub fn layer_path(&self, env: &str) -> PathBuf {
        self.project_path(&format!("components/config/envs/{}/config.yaml", env))
    }

    /// Run with `--config-dir` pointing at the project
    pub fn run(&self, args: &[&str]) -> TestResult {
        let root = self.project_root.path().to_string_lossy().into_owned();
        let mut full = vec!["--config-dir", root.as_str()];
        full.extend_from_slice(args);
        self.run_from(&std::env::temp_dir(), &full, &[])
    }

    /// Run from the project root without `--config-dir`
    pub fn run_in_project(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args, &[])
    }

    /// Run from a specific directory with extra env vars.
    pub fn run_from(&self, cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env_remove("LAYERED_CONFIG_DIR")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .env("TERM", "xterm");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute config binary");
        output_to_result(output)
    }

    /// Write a file relative to the project root
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Read a file relative to the project root
    pub fn read_project_file(&self, relative_path: &str) -> String {
        std::fs::read_to_string(self.project_path(relative_path))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    default_layer: Option<String>,
    env_layers: Vec<(String, String)>,
    schema: Option<String>,
    create_envs_root: bool,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            default_layer: None,
            env_layers: Vec::new(),
            schema: None,
            create_envs_root: true,
        }
    }

    /// Content of `envs/default/config.yaml`
    pub fn with_default(mut self, yaml: &str) -> Self {
        self.default_layer = Some(yaml.to_string());
        self
    }

    /// Content of `envs/<name>/config.yaml`
    pub fn with_env(mut self, name: &str, yaml: &str) -> Self {
        self.env_layers.push((name.to_string(), yaml.to_string()));
        self
    }

    /// Content of `schemas/config.schema.json`
    pub fn with_schema(mut self, json: &str) -> Self {
        self.schema = Some(json.to_string());
        self
    }

    /// Do not create `components/config/envs/` at all
    pub fn without_envs_root(mut self) -> Self {
        self.create_envs_root = false;
        self
    }

    /// Build the TestEnv
    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            project_root: TempDir::new().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_config")),
        };

        if self.create_envs_root {
            std::fs::create_dir_all(env.project_path("components/config/envs"))
                .expect("Failed to create envs root");
        }
        if let Some(yaml) = &self.default_layer {
            env.write_project_file("components/config/envs/default/config.yaml", yaml);
        }
        for (name, yaml) in &self.env_layers {
            env.write_project_file(&format!("components/config/envs/{}/config.yaml", name), yaml);
        }
        if let Some(json) = &self.schema {
            env.write_project_file("components/config/schemas/config.schema.json", json);
        }

        env
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
