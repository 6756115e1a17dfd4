//! # Generator Configuration
//!
//! Every generator call receives a [`GeneratorConfig`] value; nothing is looked
//! up from globals at render time.
//!
//! ## Template root discovery
//!
//! [`GeneratorConfig::discover`] resolves the template root in this order:
//!
//! 1. `GS_TEMPLATES_DIR`
//! 2. `templates`, `../templates`, `../../templates` next to the executable
//! 3. `templates`, `../templates` under the working directory
//! 4. the relative path `templates`
//!
//! The expected layout is:
//!
//! ```text
//! templates/
//! ├── component/
//! │   ├── controller/controller.go.tmpl
//! │   ├── model/model.go.tmpl
//! │   └── ...one directory per component kind
//! └── project/
//!     └── ...any tree; *.tmpl files are rendered, the rest copied
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding template root discovery.
pub const TEMPLATES_DIR_ENV: &str = "GS_TEMPLATES_DIR";

/// Version written into new projects unless overridden.
pub const DEFAULT_PROJECT_VERSION: &str = "v0.1.0";

/// Package used when no `go.mod` is found.
pub const DEFAULT_PACKAGE: &str = "github.com/example/app";

/// Explicit settings handed to every [`Generator`](crate::generator::Generator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Root holding `component/` and `project/`
    pub templates_dir: PathBuf,
    /// Directory that component and project paths are resolved against
    pub output_root: PathBuf,
    /// Value of the `Version` field in project templates
    pub version: String,
}

impl GeneratorConfig {
    /// Config rooted at `templates_dir`, writing under `.` with the default version.
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
            output_root: PathBuf::from("."),
            version: DEFAULT_PROJECT_VERSION.to_string(),
        }
    }

    /// Resolve generated paths against `root` instead of `.`.
    pub fn with_output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = root.into();
        self
    }

    /// Override the `Version` field seen by project templates.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Build a config whose template root is found with the lookup order above.
    pub fn discover() -> Self {
        let exe_dir = env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf));
        let cwd = env::current_dir().ok();
        Self::new(discover_templates_dir(
            env::var_os(TEMPLATES_DIR_ENV).map(PathBuf::from),
            exe_dir.as_deref(),
            cwd.as_deref(),
        ))
    }

    /// `<templates>/component/<template>/<template>.go.tmpl`
    pub fn component_template(&self, template: &str) -> PathBuf {
        self.templates_dir
            .join("component")
            .join(template)
            .join(format!("{template}.go.tmpl"))
    }

    /// `<templates>/project`
    pub fn project_templates(&self) -> PathBuf {
        self.templates_dir.join("project")
    }
}

fn discover_templates_dir(
    from_env: Option<PathBuf>,
    exe_dir: Option<&Path>,
    cwd: Option<&Path>,
) -> PathBuf {
    if let Some(dir) = from_env.filter(|d| !d.as_os_str().is_empty()) {
        return dir;
    }

    let exe_candidates = exe_dir.into_iter().flat_map(|d| {
        [
            d.join("templates"),
            d.join("..").join("templates"),
            d.join("..").join("..").join("templates"),
        ]
    });
    let cwd_candidates = cwd
        .into_iter()
        .flat_map(|d| [d.join("templates"), d.join("..").join("templates")]);

    exe_candidates
        .chain(cwd_candidates)
        .find(|p| p.is_dir())
        .unwrap_or_else(|| PathBuf::from("templates"))
}

/// Package name for generated components, read from the `module` line of `dir/go.mod`.
pub fn default_package_name(dir: &Path) -> String {
    fs::read_to_string(dir.join("go.mod"))
        .ok()
        .and_then(|content| {
            content.lines().find_map(|line| {
                line.trim()
                    .strip_prefix("module ")
                    .map(|m| m.trim().to_string())
            })
        })
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_PACKAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_env_wins() {
        let dir = discover_templates_dir(Some(PathBuf::from("/opt/tpl")), None, None);
        assert_eq!(dir, PathBuf::from("/opt/tpl"));
    }

    #[test]
    fn test_exe_dir_before_cwd() {
        let exe = TempDir::new().unwrap();
        let cwd = TempDir::new().unwrap();
        fs::create_dir_all(exe.path().join("templates")).unwrap();
        fs::create_dir_all(cwd.path().join("templates")).unwrap();

        let dir = discover_templates_dir(None, Some(exe.path()), Some(cwd.path()));
        assert_eq!(dir, exe.path().join("templates"));
    }

    #[test]
    fn test_cwd_parent_and_fallback() {
        let root = TempDir::new().unwrap();
        let cwd = root.path().join("work");
        fs::create_dir_all(&cwd).unwrap();
        fs::create_dir_all(root.path().join("templates")).unwrap();

        let dir = discover_templates_dir(None, None, Some(&cwd));
        assert_eq!(dir, cwd.join("..").join("templates"));

        let bare = root.path().join("a").join("b");
        fs::create_dir_all(&bare).unwrap();
        let dir = discover_templates_dir(None, None, Some(&bare));
        assert_eq!(dir, PathBuf::from("templates"));
    }

    #[test]
    fn test_component_template_layout() {
        let config = GeneratorConfig::new("/t");
        assert_eq!(
            config.component_template("model"),
            PathBuf::from("/t/component/model/model.go.tmpl")
        );
        assert_eq!(config.project_templates(), PathBuf::from("/t/project"));
        assert_eq!(config.version, DEFAULT_PROJECT_VERSION);
    }

    #[test]
    fn test_default_package_name() {
        let dir = TempDir::new().unwrap();
        assert_eq!(default_package_name(dir.path()), DEFAULT_PACKAGE);

        fs::write(
            dir.path().join("go.mod"),
            "// comment\nmodule github.com/acme/shop\n\ngo 1.21\n",
        )
        .unwrap();
        assert_eq!(default_package_name(dir.path()), "github.com/acme/shop");
    }
}
