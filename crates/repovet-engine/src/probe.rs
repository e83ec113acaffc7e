//! Existence probing with check accounting.

use std::path::Path;

use repovet_types::ValidationReport;

/// Probe for a path under the root, counting the check. Every probe counts,
/// even repeated probes of the same path across rules.
pub(crate) fn exists(root: &Path, rel: &str, report: &mut ValidationReport) -> bool {
    report.tally_check();
    root.join(rel).exists()
}

/// Probe for a directory specifically.
pub(crate) fn dir_exists(root: &Path, rel: &str, report: &mut ValidationReport) -> bool {
    report.tally_check();
    root.join(rel).is_dir()
}
