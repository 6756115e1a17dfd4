use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;
use tracing::{debug, info};

use super::context::FieldMap;
use crate::error::{Result, ScaffoldError};

/// How an artifact came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactAction {
    /// Rendered from a template
    Rendered,
    /// Copied byte for byte
    Copied,
}

/// A file written by a generator.
///
/// Generators never overwrite, so every artifact reported here did not exist
/// before the call that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArtifact {
    pub path: PathBuf,
    pub action: ArtifactAction,
}

/// Render one template file to one output file.
///
/// The template is rendered fully in memory before the destination is created,
/// and the destination is opened with exclusive-create, so a failure never leaves
/// a truncated file behind and two concurrent calls cannot both win.
///
/// # Errors
///
/// - `NotFound` if `template_path` does not exist
/// - `Conflict` if `output_path` already exists
/// - `Syntax` if the template fails to parse or references an unknown field
/// - `Io` for any other read, mkdir or write failure
pub fn render_template(
    template_path: &Path,
    output_path: &Path,
    context: &dyn FieldMap,
) -> Result<GeneratedArtifact> {
    let source = read_template(template_path)?;

    if output_path.exists() {
        return Err(ScaffoldError::Conflict {
            path: output_path.to_path_buf(),
        });
    }

    let rendered = render_source(template_path, &source, context)?;
    ensure_parent(output_path)?;
    write_new(output_path, rendered.as_bytes())?;

    info!(path = %output_path.display(), template = %template_path.display(), "generated file");
    Ok(GeneratedArtifact {
        path: output_path.to_path_buf(),
        action: ArtifactAction::Rendered,
    })
}

fn read_template(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ScaffoldError::NotFound {
            path: path.to_path_buf(),
        },
        io::ErrorKind::InvalidData => ScaffoldError::Syntax {
            path: path.to_path_buf(),
            source: minijinja::Error::new(
                minijinja::ErrorKind::SyntaxError,
                "template is not valid UTF-8",
            ),
        },
        _ => ScaffoldError::io(path, e),
    })
}

/// Render template `source` against `context`; `path` only labels errors.
pub(crate) fn render_source(path: &Path, source: &str, context: &dyn FieldMap) -> Result<String> {
    let syntax = |source: minijinja::Error| ScaffoldError::Syntax {
        path: path.to_path_buf(),
        source,
    };

    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);

    let fields = context.fields();
    debug!(template = %path.display(), fields = ?fields.keys().collect::<Vec<_>>(), "rendering");

    let tmpl = env.template_from_str(source).map_err(syntax)?;
    tmpl.render(&fields).map_err(syntax)
}

pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).map_err(|e| ScaffoldError::io(dir, e))
        }
        _ => Ok(()),
    }
}

/// Create `path` exclusively and write `bytes` into it.
///
/// If the write fails after the file was created, the partial file is removed.
pub(crate) fn write_new(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => ScaffoldError::Conflict {
                path: path.to_path_buf(),
            },
            _ => ScaffoldError::io(path, e),
        })?;

    if let Err(e) = file.write_all(bytes).and_then(|()| file.sync_all()) {
        drop(file);
        fs::remove_file(path).ok();
        return Err(ScaffoldError::io(path, e));
    }
    Ok(())
}
