//! # repovet-fix
//!
//! **Tier 1 (Remediation)**
//!
//! Template catalog and fix application for repovet compliance issues.
//!
//! ## What belongs here
//! * Canned remediation documents (contribution guide, security policy,
//!   changelog, default Dockerfile)
//! * Resolving a fixable issue to a target path and content
//! * Writing resolved content to disk, idempotently
//!
//! ## What does NOT belong here
//! * Deciding which issues exist (repovet-engine does that)
//! * Merging with existing file content (fixes overwrite, see [`apply_fix`])

mod templates;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use repovet_types::{FixKind, FixableIssue};

pub use templates::template_names;

/// Errors from fix resolution and application.
///
/// Unknown template keys and missing target paths are programmer errors:
/// the engine's own issue catalog never produces them.
#[derive(Debug, Error)]
pub enum FixError {
    #[error("no remediation template for '{0}'")]
    UnknownTemplate(String),

    #[error("fixable issue of kind '{0}' has no target path")]
    MissingTarget(FixKind),

    #[error("failed to write fix: {0}")]
    Io(#[from] std::io::Error),
}

/// A fixable issue resolved to concrete content at a concrete path.
#[derive(Debug, Clone)]
pub struct ResolvedFix {
    /// Target path, relative to the target root.
    pub path: PathBuf,
    pub content: &'static str,
}

/// Resolve a fixable issue to its remediation content and target path.
///
/// The resolver never guesses: a `CreateFile` issue whose template key is
/// absent from the catalog is an error, not a fallback.
pub fn resolve_fix(issue: &FixableIssue) -> Result<ResolvedFix, FixError> {
    let path = issue
        .file
        .clone()
        .ok_or(FixError::MissingTarget(issue.kind))?;

    let content = match issue.kind {
        FixKind::CreateFile => {
            let key = issue
                .template
                .as_deref()
                .ok_or_else(|| FixError::UnknownTemplate(path.display().to_string()))?;
            templates::file_template(key).ok_or_else(|| FixError::UnknownTemplate(key.to_string()))?
        }
        FixKind::CreateDockerfile => templates::TEMPLATE_DOCKERFILE,
    };

    Ok(ResolvedFix { path, content })
}

/// Apply a fixable issue under `root`, returning the path written.
///
/// Parent directories are created as needed. The write is unconditional:
/// re-applying the same issue yields byte-identical content (idempotent), but
/// any existing file at the target path is clobbered, not merged. Callers
/// should only pass issues for files confirmed absent at validation time, or
/// knowingly accept the overwrite.
pub fn apply_fix(root: &Path, issue: &FixableIssue) -> Result<PathBuf, FixError> {
    let resolved = resolve_fix(issue)?;
    let target = root.join(&resolved.path);

    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(&target, resolved.content)?;
    Ok(target)
}
