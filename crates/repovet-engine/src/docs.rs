//! Documentation category: presence-only, never blocking.

use std::path::Path;

use repovet_types::ValidationReport;

pub(crate) fn run(root: &Path, report: &mut ValidationReport) {
    if !crate::probe::dir_exists(root, "docs", report) {
        report.recommend("consider adding a docs/ directory with project documentation");
    }
    if !crate::probe::dir_exists(root, "examples", report) {
        report.recommend("consider adding an examples/ directory with usage examples");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_directories_are_recommendations_only() {
        let dir = tempfile::tempdir().unwrap();
        let mut report = ValidationReport::new();
        run(dir.path(), &mut report);

        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
        assert_eq!(report.recommendations.len(), 2);
        assert!(report.categories[&repovet_types::Category::Documentation].passed);
    }

    #[test]
    fn present_directories_silence_recommendations() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("docs")).unwrap();
        std::fs::create_dir_all(dir.path().join("examples")).unwrap();

        let mut report = ValidationReport::new();
        run(dir.path(), &mut report);
        assert!(report.recommendations.is_empty());
        assert_eq!(report.files_checked, 2);
    }
}
