//! # Generator Module
//!
//! Scaffolds Gin application sources from a directory of text templates.
//!
//! ## Overview
//!
//! ```text
//! raw name → naming::ResourceName → typed field record → render / materialize → files
//! ```
//!
//! - [`render_template`] renders one template to one new file
//! - [`materialize`] mirrors a whole template tree, rendering `*.tmpl` files
//!   and copying the rest
//! - [`Generator::generate`] drives one component kind through a descriptor table
//! - [`Generator::generate_feature`] runs six components fail-fast
//! - [`Generator::generate_resource`] runs four components collect-all
//! - [`Generator::init_project`] materializes the `project/` tree
//!
//! ## Overwrites
//!
//! Nothing is ever overwritten. An existing destination is reported as
//! [`ScaffoldError::Conflict`](crate::error::ScaffoldError::Conflict), and
//! files are created with exclusive-create so concurrent callers targeting the
//! same path cannot both succeed.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gs_scaffold::config::GeneratorConfig;
//! use gs_scaffold::generator::Generator;
//!
//! # fn main() -> Result<(), gs_scaffold::error::ScaffoldError> {
//! let generator = Generator::new(GeneratorConfig::new("templates"));
//! for artifact in generator.generate_feature("Order", "github.com/acme/shop")? {
//!     println!("{}", artifact.path.display());
//! }
//! # Ok(())
//! # }
//! ```

mod components;
mod context;
mod feature;
mod project;
mod render;
mod tree;

pub use components::{ComponentDescriptor, ComponentKind};
pub use context::{
    FieldMap, ModelContext, ProjectContext, ResourceContext, RouterContext, ServiceContext,
};
pub use feature::{ResourceReport, FEATURE_COMPONENTS, RESOURCE_COMPONENTS};
pub use project::{InitOptions, CURRENT_DIR};
pub use render::{render_template, ArtifactAction, GeneratedArtifact};
pub use tree::{materialize, materialize_staged, TemplateDescriptor, TEMPLATE_SUFFIX};

use crate::config::GeneratorConfig;

/// Entry point for every scaffolding operation.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Build a generator that resolves every path against `config`.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The configuration this generator was built with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}
