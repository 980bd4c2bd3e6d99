//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --config-dir, --verbose) are inherited by all subcommands
//! - `--config-dir` falls back to `LAYERED_CONFIG_DIR`, then the working directory

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Layered YAML configuration: merge, validate, extract and diff environments
#[derive(Parser, Debug)]
#[command(name = "config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print a single JSON object instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Project root containing components/config/
    #[arg(long, global = true, env = "LAYERED_CONFIG_DIR", value_name = "PATH")]
    pub config_dir: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge an environment onto default and print (or write) the YAML
    Generate {
        /// Environment to generate
        #[arg(long)]
        env: String,

        /// Only emit this top-level section, unwrapped
        #[arg(long)]
        component: Option<String>,

        /// Write the YAML to this file (plus a sibling .schema.json)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Validate one or every environment against the schema
    Validate {
        /// Only validate this environment
        #[arg(long)]
        env: Option<String>,
    },

    /// Show structural differences between two environments
    Diff {
        /// Left-hand environment
        env1: String,

        /// Right-hand environment
        env2: String,
    },

    /// Create a new environment with an empty override layer
    AddEnv {
        /// Environment name (lowercase letters, digits, '-')
        name: String,
    },
}

/// Whether `--json` was requested, looked up before clap has accepted the
/// arguments so that argument errors can still be reported as JSON.
pub fn json_requested<I, T>(args: I) -> bool
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .take_while(|arg| arg != "--")
        .any(|arg| arg == "--json")
}

/// First paragraph of a clap error on one line, without the `error: ` prefix
/// or the usage block.
pub fn usage_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let paragraph: Vec<&str> = rendered
        .lines()
        .take_while(|line| !line.trim().is_empty())
        .map(str::trim)
        .collect();
    let joined = paragraph.join(" ");
    joined
        .strip_prefix("error: ")
        .unwrap_or(&joined)
        .to_string()
}
