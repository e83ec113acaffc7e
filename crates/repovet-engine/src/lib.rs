//! # repovet-engine
//!
//! **Tier 2 (Rule Engine)**
//!
//! The repository compliance engine: runs five ordered rule categories over a
//! target directory and produces a [`ValidationReport`].
//!
//! ## What belongs here
//! * Category orchestration and short-circuit behavior
//! * Individual rules (existence probes, content shape checks, heuristics)
//! * The system-level degradation path for an unreadable target root
//!
//! ## What does NOT belong here
//! * Remediation content or disk writes (use repovet-fix)
//! * Output formatting or exit codes (the CLI owns those)
//!
//! ## Example
//! ```ignore
//! use repovet_engine::{ComplianceEngine, EngineConfig};
//!
//! let engine = ComplianceEngine::new(EngineConfig::default());
//! let report = engine.validate_repository(Path::new("."));
//! if !report.is_valid {
//!     for error in &report.errors {
//!         eprintln!("{}: {}", error.category, error.message);
//!     }
//! }
//! ```

mod container;
mod core_files;
mod docs;
mod probe;
mod security;
mod workflows;

use std::path::{Path, PathBuf};

use repovet_types::{Category, Finding, ValidationReport};

/// Caller-supplied configuration, immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Caller intends to run the fix loop after validation. Advisory for the
    /// engine itself; validation behaves identically either way.
    pub auto_fix: bool,

    /// Print per-category progress to stderr.
    pub verbose: bool,

    /// Reserved: external schema override for workflow shape checks. Carried
    /// through but not consulted by the current rule set.
    pub schema_file: Option<PathBuf>,
}

/// The compliance engine. Stateless between passes; each call to
/// [`validate_repository`](Self::validate_repository) builds a fresh report.
#[derive(Debug, Clone)]
pub struct ComplianceEngine {
    config: EngineConfig,
}

impl ComplianceEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate the repository rooted at `root`.
    ///
    /// Never fails for ordinary policy violations: every deviation is data in
    /// the returned report. A target root that cannot be read at all degrades
    /// to a single System-category error with every audited category marked
    /// failed.
    pub fn validate_repository(&self, root: &Path) -> ValidationReport {
        let mut report = ValidationReport::new();

        if let Err(err) = std::fs::read_dir(root) {
            report.add_error(
                Finding::new(
                    Category::System,
                    format!("cannot read target root {}: {err}", root.display()),
                )
                .with_suggestion("check that the path exists and is a readable directory"),
            );
            for category in Category::AUDITED {
                report.fail_category(category, "not checked: target root unreadable");
            }
            report.finalize();
            return report;
        }

        // Fixed order; ordering only affects where findings appear in the
        // report, never which findings are raised. A category that
        // short-circuits does not abort its siblings.
        self.trace(Category::CoreFiles);
        core_files::run(root, &mut report);
        self.trace(Category::ContainerSetup);
        container::run(root, &mut report);
        self.trace(Category::CiWorkflows);
        workflows::run(root, &mut report);
        self.trace(Category::Documentation);
        docs::run(root, &mut report);
        self.trace(Category::Security);
        security::run(root, &mut report);

        report.finalize();
        report
    }

    fn trace(&self, category: Category) {
        if self.config.verbose {
            eprintln!("checking {category}...");
        }
    }
}
