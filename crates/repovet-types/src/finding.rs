//! Findings and fixable issues.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// A single rule verdict: an error or a warning, depending on which report
/// list it lands in. Recommendations are plain strings and carry no
/// structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub message: String,

    pub category: Category,

    /// File the finding refers to, relative to the target root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Suggested remediation, shown to the user verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Finding {
    pub fn new(category: Category, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            category,
            file: None,
            suggestion: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// The closed set of mechanical remediations the fix pipeline understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FixKind {
    /// Write a canned document looked up by target filename.
    CreateFile,
    /// Write the minimal default container definition.
    CreateDockerfile,
}

impl std::fmt::Display for FixKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FixKind::CreateFile => write!(f, "create-file"),
            FixKind::CreateDockerfile => write!(f, "create-dockerfile"),
        }
    }
}

/// A missing or malformed artifact paired with a canned remediation.
///
/// Orthogonal to findings: a fixable issue may accompany an error, a warning,
/// or neither (an optional file's absence is a recommendation plus a fixable
/// issue, not an error).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixableIssue {
    #[serde(rename = "type")]
    pub kind: FixKind,

    /// Target path, relative to the target root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    pub description: String,

    /// Resolver lookup key. For `CreateFile` this is the target filename;
    /// `CreateDockerfile` needs none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl FixableIssue {
    /// A missing document remediated by its per-filename template.
    pub fn create_file(name: &str, description: impl Into<String>) -> Self {
        Self {
            kind: FixKind::CreateFile,
            file: Some(PathBuf::from(name)),
            description: description.into(),
            template: Some(name.to_string()),
        }
    }

    /// A missing container definition remediated by the default Dockerfile.
    pub fn create_dockerfile() -> Self {
        Self {
            kind: FixKind::CreateDockerfile,
            file: Some(PathBuf::from("Dockerfile")),
            description: "missing container definition".to_string(),
            template: None,
        }
    }
}
