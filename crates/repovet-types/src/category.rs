//! Category registry and per-category status.

use serde::{Deserialize, Serialize};

/// A named group of related rules.
///
/// The first five variants are the audited categories; `System` is reserved
/// for catastrophic failures (unreadable target root) and never appears in
/// the per-category status map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    CoreFiles,
    ContainerSetup,
    CiWorkflows,
    Documentation,
    Security,
    System,
}

impl Category {
    /// The categories a validation pass audits, in evaluation order.
    pub const AUDITED: [Category; 5] = [
        Category::CoreFiles,
        Category::ContainerSetup,
        Category::CiWorkflows,
        Category::Documentation,
        Category::Security,
    ];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Category::CoreFiles => "Core Files",
            Category::ContainerSetup => "Container Setup",
            Category::CiWorkflows => "CI Workflows",
            Category::Documentation => "Documentation",
            Category::Security => "Security",
            Category::System => "System",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Pass/fail state for one category within a single validation pass.
///
/// Monotonic: once `passed` flips to false it stays false, and the message
/// set at the first failure is never overwritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryStatus {
    pub passed: bool,
    pub message: String,
}

impl CategoryStatus {
    pub fn passed() -> Self {
        Self {
            passed: true,
            message: "passed".to_string(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }
}
