//! Output Rendering
//!
//! Every command produces one [`CommandOutcome`]; a single render step turns
//! it into text or a JSON envelope. Rendering returns strings so `main` owns
//! the actual writes to stdout and stderr.

use crossterm::style::{Color, Stylize};
use serde::Serialize;
use serde_json::{json, Value};

use crate::application::{
    AddEnvResult, DiffOutcome, EnvReport, GenerateResult, SchemaStatus, ValidateResult,
};
use crate::domain::entities::{DiffEntry, DiffKind};
use crate::domain::value_objects::ConfigValue;
use crate::error::ConfigError;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// A single JSON object for scripting
    Json,
}

/// Uniform result of any command
#[derive(Debug)]
pub enum CommandOutcome {
    Generate(GenerateResult),
    Validate(ValidateResult),
    Diff(DiffOutcome),
    AddEnv(AddEnvResult),
    Failed(ConfigError),
    /// A failure outside any command: bad arguments or broken plumbing
    Aborted { code: &'static str, message: String },
}

impl CommandOutcome {
    /// Exit status 0 or 1. A validate report with invalid environments is a
    /// failure; differences in a diff are not.
    pub fn is_success(&self) -> bool {
        match self {
            CommandOutcome::Validate(result) => result.is_success(),
            CommandOutcome::Failed(_) | CommandOutcome::Aborted { .. } => false,
            _ => true,
        }
    }

    /// Arguments clap rejected
    pub fn usage(message: impl Into<String>) -> Self {
        CommandOutcome::Aborted {
            code: "usage_error",
            message: message.into(),
        }
    }

    /// An error that escaped every command, e.g. an unreadable working directory
    pub fn internal(message: impl Into<String>) -> Self {
        CommandOutcome::Aborted {
            code: "internal_error",
            message: message.into(),
        }
    }
}

impl<T> From<Result<T, ConfigError>> for CommandOutcome
where
    T: Into<CommandOutcome>,
{
    fn from(result: Result<T, ConfigError>) -> Self {
        match result {
            Ok(value) => value.into(),
            Err(err) => CommandOutcome::Failed(err),
        }
    }
}

impl From<GenerateResult> for CommandOutcome {
    fn from(result: GenerateResult) -> Self {
        CommandOutcome::Generate(result)
    }
}

impl From<ValidateResult> for CommandOutcome {
    fn from(result: ValidateResult) -> Self {
        CommandOutcome::Validate(result)
    }
}

impl From<DiffOutcome> for CommandOutcome {
    fn from(result: DiffOutcome) -> Self {
        CommandOutcome::Diff(result)
    }
}

impl From<AddEnvResult> for CommandOutcome {
    fn from(result: AddEnvResult) -> Self {
        CommandOutcome::AddEnv(result)
    }
}

/// Rendered output, split by stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub stdout: String,
    pub stderr: String,
}

/// Trait for rendering command outcomes
pub trait OutcomeRenderer {
    fn render(&self, outcome: &CommandOutcome) -> Rendered;
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    warn: &'static str,
    arrow: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            warn: "⚠",
            arrow: "→",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            warn: "[WARN]",
            arrow: "->",
        }
    }
}

/// Text renderer
pub struct TextRenderer {
    /// Whether to use colors
    pub color: bool,
    /// Whether to use unicode
    pub unicode: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            color: false,
            unicode: true,
        }
    }
}

impl TextRenderer {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            format!("{}", text.with(color))
        } else {
            text.to_string()
        }
    }

    fn generate(&self, result: &GenerateResult) -> Rendered {
        let Some(output) = &result.output else {
            return Rendered {
                stdout: result.yaml.clone(),
                stderr: String::new(),
            };
        };

        let icons = self.icons();
        let mut out = String::new();
        let subject = match &result.component {
            Some(component) => format!("'{}' from '{}'", component, result.env),
            None => format!("'{}'", result.env),
        };
        out.push_str(&format!(
            "{} Generated {}\n",
            self.paint(icons.check, Color::Green),
            subject
        ));
        out.push_str(&format!("  {} {}\n", icons.arrow, output.display()));
        if let Some(schema) = &result.schema_output {
            out.push_str(&format!("  {} {}\n", icons.arrow, schema.display()));
        }
        if !result.schema_checked {
            out.push_str(&format!(
                "  {} no schema found, validation skipped\n",
                self.paint(icons.warn, Color::Yellow)
            ));
        }

        Rendered {
            stdout: out,
            stderr: String::new(),
        }
    }

    fn validate(&self, result: &ValidateResult) -> Rendered {
        let icons = self.icons();
        let mut out = String::new();

        if result.schema == SchemaStatus::Absent {
            out.push_str(&format!(
                "{} No schema found, validation skipped\n",
                self.paint(icons.warn, Color::Yellow)
            ));
        }

        for report in &result.environments {
            out.push_str(&self.env_report(report, &icons));
        }

        out.push('\n');
        out.push_str(&format!(
            "{} environment(s) checked, {} invalid\n",
            result.environments.len(),
            result.invalid_count()
        ));

        Rendered {
            stdout: out,
            stderr: String::new(),
        }
    }

    fn env_report(&self, report: &EnvReport, icons: &Icons) -> String {
        if report.valid {
            return format!(
                "{} {}: Valid\n",
                self.paint(icons.check, Color::Green),
                report.env
            );
        }

        let mut out = format!(
            "{} {}: Invalid\n",
            self.paint(icons.cross, Color::Red),
            report.env
        );
        if let Some(failure) = &report.error {
            out.push_str(&format!("    {}\n", failure.message));
        }
        for issue in &report.errors {
            out.push_str(&format!("    {}\n", issue));
        }
        out
    }

    fn diff(&self, outcome: &DiffOutcome) -> Rendered {
        if outcome.report.is_identical() {
            return Rendered {
                stdout: format!(
                    "No differences between {} and {}\n",
                    outcome.env1, outcome.env2
                ),
                stderr: String::new(),
            };
        }

        let mut out = format!(
            "Differences between {} and {} ({}):\n",
            outcome.env1,
            outcome.env2,
            outcome.report.summary()
        );
        for entry in &outcome.report.entries {
            out.push_str(&self.diff_line(entry));
            out.push('\n');
        }

        Rendered {
            stdout: out,
            stderr: String::new(),
        }
    }

    fn diff_line(&self, entry: &DiffEntry) -> String {
        let (line, color) = match entry.kind {
            DiffKind::Added => (
                format!("+ {}: {}", entry.path, display_value(entry.after.as_ref())),
                Color::Green,
            ),
            DiffKind::Removed => (
                format!("- {}: {}", entry.path, display_value(entry.before.as_ref())),
                Color::Red,
            ),
            DiffKind::Changed => (
                format!(
                    "~ {}: {} -> {}",
                    entry.path,
                    display_value(entry.before.as_ref()),
                    display_value(entry.after.as_ref())
                ),
                Color::Yellow,
            ),
        };
        self.paint(&line, color)
    }

    fn add_env(&self, result: &AddEnvResult) -> Rendered {
        let icons = self.icons();
        Rendered {
            stdout: format!(
                "{} Created environment '{}'\n  {} {}\n",
                self.paint(icons.check, Color::Green),
                result.env,
                icons.arrow,
                result.path.display()
            ),
            stderr: String::new(),
        }
    }

    fn error(&self, err: &ConfigError) -> Rendered {
        let icons = self.icons();
        let mut out = format!("{} {}\n", self.paint(icons.cross, Color::Red), err);

        if let ConfigError::SchemaValidation { issues, .. } = err {
            for issue in issues {
                out.push_str(&format!("    {}\n", issue));
            }
        }
        if let Some(help) = err.help() {
            out.push_str(&format!("  {} Fix: {}\n", icons.arrow, help));
        }

        Rendered {
            stdout: String::new(),
            stderr: out,
        }
    }

    fn aborted(&self, message: &str) -> Rendered {
        Rendered {
            stdout: String::new(),
            stderr: format!("{} {}\n", self.paint(self.icons().cross, Color::Red), message),
        }
    }
}

fn display_value(value: Option<&ConfigValue>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

impl OutcomeRenderer for TextRenderer {
    fn render(&self, outcome: &CommandOutcome) -> Rendered {
        match outcome {
            CommandOutcome::Generate(result) => self.generate(result),
            CommandOutcome::Validate(result) => self.validate(result),
            CommandOutcome::Diff(outcome) => self.diff(outcome),
            CommandOutcome::AddEnv(result) => self.add_env(result),
            CommandOutcome::Failed(err) => self.error(err),
            CommandOutcome::Aborted { message, .. } => self.aborted(message),
        }
    }
}

/// JSON renderer: `{"success": bool, "data": ...}` or `{"success": false, "error": {...}}`
pub struct JsonRenderer;

impl JsonRenderer {
    fn envelope(success: bool, data: &impl Serialize) -> Value {
        match serde_json::to_value(data) {
            Ok(data) => json!({ "success": success, "data": data }),
            Err(e) => json!({
                "success": false,
                "error": { "code": "render_error", "message": e.to_string() },
            }),
        }
    }

    fn error(err: &ConfigError) -> Value {
        let mut error = json!({
            "code": err.code(),
            "message": err.to_string(),
        });
        if let Some(help) = err.help() {
            error["help"] = json!(help);
        }
        match err {
            ConfigError::SchemaValidation { env, issues } => {
                error["env"] = json!(env);
                error["issues"] = json!(issues);
            }
            ConfigError::ComponentNotFound {
                component,
                available,
            } => {
                error["component"] = json!(component);
                error["available"] = json!(available);
            }
            ConfigError::LayerNotFound { env, path }
            | ConfigError::AlreadyExists { env, path } => {
                error["env"] = json!(env);
                error["path"] = json!(path);
            }
            ConfigError::YamlParse { path, .. }
            | ConfigError::SchemaParse { path, .. }
            | ConfigError::EnvsRootMissing { path }
            | ConfigError::Io { path, .. } => {
                error["path"] = json!(path);
            }
            ConfigError::InvalidName { name } => {
                error["name"] = json!(name);
            }
            ConfigError::Render { .. } => {}
        }
        json!({ "success": false, "error": error })
    }
}

impl OutcomeRenderer for JsonRenderer {
    fn render(&self, outcome: &CommandOutcome) -> Rendered {
        let success = outcome.is_success();
        let value = match outcome {
            CommandOutcome::Generate(result) => Self::envelope(success, result),
            CommandOutcome::Validate(result) => Self::envelope(success, result),
            CommandOutcome::Diff(outcome) => Self::envelope(success, outcome),
            CommandOutcome::AddEnv(result) => Self::envelope(success, result),
            CommandOutcome::Failed(err) => Self::error(err),
            CommandOutcome::Aborted { code, message } => json!({
                "success": false,
                "error": { "code": code, "message": message },
            }),
        };

        let mut stdout = serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string());
        stdout.push('\n');
        Rendered {
            stdout,
            stderr: String::new(),
        }
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, color: bool, unicode: bool) -> Box<dyn OutcomeRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { color, unicode }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
