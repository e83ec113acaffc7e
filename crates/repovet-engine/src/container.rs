//! Container Setup category: Dockerfile presence and shape.

use std::fs;
use std::path::Path;

use repovet_types::{Category, Finding, FixableIssue, ValidationReport};

pub(crate) fn run(root: &Path, report: &mut ValidationReport) {
    if !crate::probe::exists(root, "Dockerfile", report) {
        report.add_error(
            Finding::new(Category::ContainerSetup, "missing container definition")
                .with_file("Dockerfile")
                .with_suggestion("add a Dockerfile, or apply the create-dockerfile fix"),
        );
        report.add_fixable(FixableIssue::create_dockerfile());
    } else if let Ok(content) = fs::read_to_string(root.join("Dockerfile")) {
        check_base_image(&content, report);
        check_superuser(&content, report);
    }

    if !crate::probe::exists(root, ".devcontainer/devcontainer.json", report) {
        report.recommend("consider adding .devcontainer/devcontainer.json for a reproducible dev environment");
    }
}

fn check_base_image(content: &str, report: &mut ValidationReport) {
    let has_from = content
        .lines()
        .any(|line| line.trim_start().to_ascii_uppercase().starts_with("FROM "));
    if !has_from {
        report.add_error(
            Finding::new(Category::ContainerSetup, "Dockerfile has no FROM directive")
                .with_file("Dockerfile")
                .with_suggestion("declare a base image, e.g. FROM debian:bookworm-slim"),
        );
    }
}

/// Best-effort textual heuristic, not a parse of the Dockerfile DSL: flag a
/// `USER root` that is not followed by a narrower USER directive. Approximate
/// in both directions, so it stays a warning.
fn check_superuser(content: &str, report: &mut ValidationReport) {
    let users: Vec<&str> = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim_start();
            if trimmed.to_ascii_uppercase().starts_with("USER ") {
                Some(trimmed[5..].trim())
            } else {
                None
            }
        })
        .collect();

    if let Some(last) = users.last()
        && (*last == "root" || *last == "0")
    {
        report.add_warning(
            Finding::new(
                Category::ContainerSetup,
                "Dockerfile leaves the container running as root",
            )
            .with_file("Dockerfile"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_on(dir: &tempfile::TempDir) -> ValidationReport {
        let mut report = ValidationReport::new();
        run(dir.path(), &mut report);
        report
    }

    fn write_dockerfile(dir: &tempfile::TempDir, content: &str) {
        fs::write(dir.path().join("Dockerfile"), content).unwrap();
    }

    // ── presence ──────────────────────────────────────────────────────
    #[test]
    fn missing_dockerfile_is_error_with_fixable() {
        let dir = tempfile::tempdir().unwrap();
        let report = run_on(&dir);

        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.fixable_issues.len(), 1);
        assert_eq!(
            report.fixable_issues[0].kind,
            repovet_types::FixKind::CreateDockerfile
        );
    }

    #[test]
    fn missing_from_is_error() {
        let dir = tempfile::tempdir().unwrap();
        write_dockerfile(&dir, "RUN echo hi\n");
        let report = run_on(&dir);
        assert!(report.errors.iter().any(|e| e.message.contains("FROM")));
    }

    #[test]
    fn lowercase_from_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        write_dockerfile(&dir, "from alpine:3\n");
        let report = run_on(&dir);
        assert!(report.errors.is_empty());
    }

    // ── superuser heuristic ───────────────────────────────────────────
    #[test]
    fn persistent_root_user_warns() {
        let dir = tempfile::tempdir().unwrap();
        write_dockerfile(&dir, "FROM alpine:3\nUSER root\nRUN apk add curl\n");
        let report = run_on(&dir);
        assert!(report.warnings.iter().any(|w| w.message.contains("root")));
    }

    #[test]
    fn root_followed_by_narrower_user_does_not_warn() {
        let dir = tempfile::tempdir().unwrap();
        write_dockerfile(
            &dir,
            "FROM alpine:3\nUSER root\nRUN apk add curl\nUSER app\n",
        );
        let report = run_on(&dir);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn numeric_uid_zero_counts_as_root() {
        let dir = tempfile::tempdir().unwrap();
        write_dockerfile(&dir, "FROM alpine:3\nUSER 0\n");
        let report = run_on(&dir);
        assert!(!report.warnings.is_empty());
    }

    #[test]
    fn no_user_directive_at_all_does_not_warn() {
        // Approximate by design: an image that never switches user inherits
        // the base image default, which this heuristic cannot see.
        let dir = tempfile::tempdir().unwrap();
        write_dockerfile(&dir, "FROM alpine:3\nRUN echo hi\n");
        let report = run_on(&dir);
        assert!(report.warnings.is_empty());
    }

    // ── devcontainer ──────────────────────────────────────────────────
    #[test]
    fn missing_devcontainer_is_recommendation_only() {
        let dir = tempfile::tempdir().unwrap();
        write_dockerfile(&dir, "FROM alpine:3\n");
        let report = run_on(&dir);
        assert!(report.errors.is_empty());
        assert!(report.recommendations.iter().any(|r| r.contains("devcontainer")));
    }

    #[test]
    fn present_devcontainer_silences_recommendation() {
        let dir = tempfile::tempdir().unwrap();
        write_dockerfile(&dir, "FROM alpine:3\n");
        fs::create_dir_all(dir.path().join(".devcontainer")).unwrap();
        fs::write(dir.path().join(".devcontainer/devcontainer.json"), "{}").unwrap();
        let report = run_on(&dir);
        assert!(report.recommendations.is_empty());
    }
}
