//! Recursive expansion of a template directory into an output directory.
//!
//! Files whose name ends in [`TEMPLATE_SUFFIX`] are rendered with the suffix
//! stripped; all other files are copied verbatim. Entries are processed in
//! sorted order so repeated runs produce the same sequence of artifacts.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::context::FieldMap;
use super::render::{render_template, write_new, ArtifactAction, GeneratedArtifact};
use crate::error::{Result, ScaffoldError};

/// Reserved suffix marking a file as a template.
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// One file found in a template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDescriptor {
    /// Path relative to the template root
    pub relative: PathBuf,
    /// `true` when the file name carries [`TEMPLATE_SUFFIX`]
    pub is_template: bool,
}

impl TemplateDescriptor {
    fn from_relative(relative: PathBuf) -> Self {
        let is_template = relative
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(TEMPLATE_SUFFIX) && n.len() > TEMPLATE_SUFFIX.len());
        Self {
            relative,
            is_template,
        }
    }

    /// Relative output path: the template suffix removed, plain files unchanged.
    pub fn output_relative(&self) -> PathBuf {
        if !self.is_template {
            return self.relative.clone();
        }
        let name = self
            .relative
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.strip_suffix(TEMPLATE_SUFFIX))
            .unwrap_or_default();
        self.relative.with_file_name(name)
    }
}

/// Mirror `template_root` into `output_root`, rendering templates with `context`.
///
/// Stops at the first error. Files written before the failure stay on disk;
/// use [`materialize_staged`] when the whole tree must appear or nothing.
pub fn materialize(
    template_root: &Path,
    output_root: &Path,
    context: &dyn FieldMap,
) -> Result<Vec<GeneratedArtifact>> {
    if !template_root.is_dir() {
        return Err(ScaffoldError::NotFound {
            path: template_root.to_path_buf(),
        });
    }
    fs::create_dir_all(output_root).map_err(|e| ScaffoldError::io(output_root, e))?;

    let mut artifacts = Vec::new();
    walk(template_root, output_root, Path::new(""), context, &mut artifacts)?;
    Ok(artifacts)
}

fn walk(
    template_root: &Path,
    output_root: &Path,
    relative_dir: &Path,
    context: &dyn FieldMap,
    artifacts: &mut Vec<GeneratedArtifact>,
) -> Result<()> {
    let source_dir = template_root.join(relative_dir);
    for entry in sorted_entries(&source_dir)? {
        let relative = relative_dir.join(entry.file_name());
        let file_type = entry
            .file_type()
            .map_err(|e| ScaffoldError::io(entry.path(), e))?;

        if file_type.is_dir() {
            let out_dir = output_root.join(&relative);
            fs::create_dir_all(&out_dir).map_err(|e| ScaffoldError::io(&out_dir, e))?;
            debug!(dir = %out_dir.display(), "created directory");
            walk(template_root, output_root, &relative, context, artifacts)?;
            continue;
        }

        let descriptor = TemplateDescriptor::from_relative(relative);
        let source = template_root.join(&descriptor.relative);
        let target = output_root.join(descriptor.output_relative());
        let artifact = if descriptor.is_template {
            render_template(&source, &target, context)?
        } else {
            copy_new(&source, &target)?
        };
        artifacts.push(artifact);
    }
    Ok(())
}

fn sorted_entries(dir: &Path) -> Result<Vec<fs::DirEntry>> {
    let mut entries = fs::read_dir(dir)
        .map_err(|e| ScaffoldError::io(dir, e))?
        .collect::<io::Result<Vec<_>>>()
        .map_err(|e| ScaffoldError::io(dir, e))?;
    entries.sort_by_key(|e| e.file_name());
    Ok(entries)
}

fn copy_new(source: &Path, target: &Path) -> Result<GeneratedArtifact> {
    let bytes = fs::read(source).map_err(|e| ScaffoldError::io(source, e))?;
    write_new(target, &bytes)?;
    info!(path = %target.display(), "copied file");
    Ok(GeneratedArtifact {
        path: target.to_path_buf(),
        action: ArtifactAction::Copied,
    })
}

/// All-or-nothing variant of [`materialize`].
///
/// The tree is built in a temporary directory next to `output_root` and renamed
/// into place only once every file has been written. On failure `output_root`
/// is not created. Reported artifact paths are the final ones under `output_root`.
///
/// The existence check and the final rename are not atomic. If another process
/// creates a non-empty `output_root` in between, the rename fails with
/// `Conflict`; an empty directory created in that window is replaced.
pub fn materialize_staged(
    template_root: &Path,
    output_root: &Path,
    context: &dyn FieldMap,
) -> Result<Vec<GeneratedArtifact>> {
    if output_root.exists() {
        return Err(ScaffoldError::Conflict {
            path: output_root.to_path_buf(),
        });
    }
    let parent = match output_root.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent).map_err(|e| ScaffoldError::io(&parent, e))?;

    let mut builder = tempfile::Builder::new();
    builder.prefix(".gs-staging-");
    // Temp dirs default to 0700; ask for 0777 so the umask decides, as for create_dir.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o777));
    }
    let staging = builder
        .tempdir_in(&parent)
        .map_err(|e| ScaffoldError::io(&parent, e))?;

    let staged = materialize(template_root, staging.path(), context)?;

    let staging_path = staging.keep();
    if let Err(e) = fs::rename(&staging_path, output_root) {
        fs::remove_dir_all(&staging_path).ok();
        return Err(rename_error(output_root, e));
    }

    Ok(staged
        .into_iter()
        .map(|a| GeneratedArtifact {
            path: a
                .path
                .strip_prefix(&staging_path)
                .map(|rel| output_root.join(rel))
                .unwrap_or(a.path),
            action: a.action,
        })
        .collect())
}

/// A target that appeared after the pre-check is a conflict, not an I/O failure.
fn rename_error(output_root: &Path, e: io::Error) -> ScaffoldError {
    match e.kind() {
        io::ErrorKind::AlreadyExists | io::ErrorKind::DirectoryNotEmpty => {
            ScaffoldError::Conflict {
                path: output_root.to_path_buf(),
            }
        }
        _ => ScaffoldError::io(output_root, e),
    }
}
