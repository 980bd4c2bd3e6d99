//! Common test utilities for contract and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory plus helpers to run the `config` binary
//! - Assertion macros: `assert_output_contains!`, `assert_file_exists!`
//! - Fixtures: Reusable layer and schema constants

#![allow(dead_code)]

#[macro_use]
pub mod assertions;
pub mod env;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
