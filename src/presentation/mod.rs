//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command-line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `logging` - tracing subscriber on stderr
//! - `output` - Uniform command outcome and its renderers
//! - `terminal` - Color and unicode detection

pub mod cli;
pub mod factory;
pub mod logging;
pub mod output;
pub mod terminal;

pub use cli::{Cli, Commands};
pub use output::{create_renderer, CommandOutcome, OutcomeRenderer, OutputFormat, Rendered};
