//! # CLI Module
//!
//! Argument parsing and dispatch for the `gs` binary. All real work happens in
//! [`crate::generator`]; this layer resolves the template root, the default
//! package name and the `--force` flag, then prints what was written.
//!
//! ## Commands
//!
//! ```bash
//! gs init myapp --module github.com/acme/myapp
//! gs create controller User
//! gs create feature Order --package github.com/acme/shop
//! gs create resource User     # keeps going past individual failures
//! ```
//!
//! Global options: `--templates <DIR>` (or `GS_TEMPLATES_DIR`), `--json`, `--verbose`.

mod commands;


pub use commands::{run, run_cli, Cli, Commands, CreateTarget};
