use std::fs;

use tracing::info;

use super::context::ProjectContext;
use super::render::GeneratedArtifact;
use super::tree::materialize;
use super::Generator;
use crate::error::{Result, ScaffoldError};
use crate::naming::is_valid_project_name;

/// Project name that targets the output root itself.
pub const CURRENT_DIR: &str = ".";

/// Knobs for [`Generator::init_project_with_options`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitOptions {
    /// Skip the "project directory already exists" check.
    ///
    /// Individual files inside the directory are still never overwritten.
    pub force: bool,
}

impl Generator {
    /// Scaffold a new project tree named `project_name`.
    ///
    /// `module_name` defaults to the project name when empty.
    pub fn init_project(
        &self,
        project_name: &str,
        module_name: &str,
    ) -> Result<Vec<GeneratedArtifact>> {
        self.init_project_with_options(project_name, module_name, &InitOptions::default())
    }

    /// # Errors
    ///
    /// - `Invalid` for an empty name or one with characters outside `[A-Za-z0-9_-]`
    /// - `Conflict` if the project directory exists and `force` is unset
    /// - `NotFound` if the `project/` template tree is missing
    /// - anything [`materialize`] reports
    pub fn init_project_with_options(
        &self,
        project_name: &str,
        module_name: &str,
        options: &InitOptions,
    ) -> Result<Vec<GeneratedArtifact>> {
        if project_name.is_empty() {
            return Err(ScaffoldError::invalid("project name must not be empty"));
        }
        let in_place = project_name == CURRENT_DIR;
        if !in_place && !is_valid_project_name(project_name) {
            return Err(ScaffoldError::invalid(format!(
                "project name {project_name:?} may only contain letters, digits, '_' and '-'"
            )));
        }

        let context = ProjectContext {
            name: project_name.to_string(),
            module: if module_name.is_empty() {
                project_name.to_string()
            } else {
                module_name.to_string()
            },
            version: self.config.version.clone(),
        };

        let project_dir = if in_place {
            self.config.output_root.clone()
        } else {
            self.config.output_root.join(project_name)
        };
        if !in_place && !options.force && project_dir.exists() {
            return Err(ScaffoldError::Conflict { path: project_dir });
        }

        let template_root = self.config.project_templates();
        if !template_root.is_dir() {
            return Err(ScaffoldError::NotFound {
                path: template_root,
            });
        }

        fs::create_dir_all(&project_dir).map_err(|e| ScaffoldError::io(&project_dir, e))?;
        let artifacts = materialize(&template_root, &project_dir, &context)?;
        info!(
            project = project_name,
            module = %context.module,
            files = artifacts.len(),
            "project initialized"
        );
        Ok(artifacts)
    }
}
