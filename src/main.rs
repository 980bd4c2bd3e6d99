//! `config` - layered configuration CLI
//!
//! Usage: config [--json] [--config-dir <PATH>] <COMMAND>
//!
//! Commands:
//!   generate  Merge an environment onto default and print (or write) the YAML
//!   validate  Validate one or every environment against the schema
//!   diff      Show structural differences between two environments
//!   add-env   Create a new environment with an empty override layer

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use layered_config::application::{DiffOptions, GenerateOptions, ValidateOptions};
use layered_config::presentation::cli::{json_requested, usage_message};
use layered_config::presentation::terminal::detect_capabilities;
use layered_config::presentation::{
    create_renderer, factory, logging, Cli, CommandOutcome, Commands, OutcomeRenderer,
    OutputFormat, Rendered,
};

/// clap's exit status for argument errors
const USAGE_EXIT: u8 = 2;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version go to stdout as usual
        Err(e) if e.use_stderr() && json_requested(std::env::args_os()) => {
            emit(&render(OutputFormat::Json, &CommandOutcome::usage(usage_message(&e))));
            return ExitCode::from(USAGE_EXIT);
        }
        Err(e) => e.exit(),
    };
    logging::init(cli.verbose);

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    match run(cli, format) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            emit(&render(format, &CommandOutcome::internal(format!("{:#}", e))));
            ExitCode::FAILURE
        }
    }
}

fn render(format: OutputFormat, outcome: &CommandOutcome) -> Rendered {
    let caps = detect_capabilities();
    create_renderer(format, caps.supports_color, caps.supports_unicode).render(outcome)
}

/// Best-effort write for the paths where stdout itself may be the failure.
fn emit(rendered: &Rendered) {
    let _ = std::io::stdout().write_all(rendered.stdout.as_bytes());
    let _ = std::io::stderr().write_all(rendered.stderr.as_bytes());
}

/// Run one command; `Ok(false)` means the command reported a failure.
fn run(cli: Cli, format: OutputFormat) -> Result<bool> {
    let root = resolve_root(cli.config_dir)?;
    tracing::debug!(root = %root.display(), "using project root");

    let outcome = dispatch(&root, cli.command);
    let rendered = render(format, &outcome);

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.stdout.as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write to stdout")?;
    if !rendered.stderr.is_empty() {
        eprint!("{}", rendered.stderr);
    }

    Ok(outcome.is_success())
}

fn dispatch(root: &Path, command: Commands) -> CommandOutcome {
    match command {
        Commands::Generate {
            env,
            component,
            output,
        } => {
            let options = GenerateOptions::new(env)
                .with_component(component)
                .with_output(output);
            factory::create_generate_use_case(root)
                .execute(&options)
                .into()
        }
        Commands::Validate { env } => factory::create_validate_use_case(root)
            .execute(&ValidateOptions::new().with_env(env))
            .into(),
        Commands::Diff { env1, env2 } => factory::create_diff_use_case(root)
            .execute(&DiffOptions::new(env1, env2))
            .into(),
        Commands::AddEnv { name } => factory::create_add_env_use_case(root)
            .execute(&name)
            .into(),
    }
}

/// `--config-dir` (or `LAYERED_CONFIG_DIR`, handled by clap), else the working directory
fn resolve_root(config_dir: Option<PathBuf>) -> Result<PathBuf> {
    match config_dir {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().context("Failed to determine current directory"),
    }
}
