//! # gs-scaffold
//!
//! Scaffolding for Gin web applications, driven by plain text templates.
//!
//! ## Overview
//!
//! A single resource name such as `Order` is turned into every naming form a
//! Go source file needs (`Order`, `order`, `Orders`, `orders`), and those forms
//! are rendered into a fixed set of component templates or into a whole
//! project tree.
//!
//! ## Modules
//!
//! - **[`naming`]** - pure identifier derivation (`sanitize`, `pluralize`, ...)
//! - **[`generator`]** - template rendering, tree materialization, component
//!   generators and the feature/resource composers
//! - **[`config`]** - the explicit configuration value every generator receives
//! - **[`error`]** - the typed error returned by all library operations
//! - **[`logging`]** - `tracing` subscriber setup for the `gs` binary
//! - **[`cli`]** - argument parsing and command dispatch for the `gs` binary
//!
//! ## Template layout
//!
//! ```text
//! templates/
//! ├── component/<kind>/<kind>.go.tmpl   # kind ∈ controller, model, route, router,
//! │                                     #        service, test, example
//! └── project/                          # *.tmpl rendered, everything else copied
//! ```
//!
//! Templates use minijinja syntax: `type {{ Name }} struct {}`.

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod naming;

pub use config::GeneratorConfig;
pub use error::{ErrorKind, ScaffoldError};
pub use generator::{ComponentKind, GeneratedArtifact, Generator};
