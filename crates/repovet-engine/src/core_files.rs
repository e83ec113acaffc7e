//! Core Files category: required and optional top-level documents.

use std::fs;
use std::path::Path;

use repovet_types::{Category, Finding, FixableIssue, ValidationReport};

/// Required files and the suggestion attached when one is missing.
const REQUIRED: [(&str, &str); 3] = [
    ("VERSION", "add a VERSION file containing the current semantic version"),
    ("README.md", "add a README.md describing the project"),
    ("LICENSE", "add a LICENSE file with the project license text"),
];

/// Optional files with canned templates. Absence is advisory, never blocking.
const OPTIONAL: [&str; 3] = ["CONTRIBUTING.md", "CHANGELOG.md", "SECURITY.md"];

const README_MIN_LEN: usize = 100;

pub(crate) fn run(root: &Path, report: &mut ValidationReport) {
    for (name, suggestion) in REQUIRED {
        if !crate::probe::exists(root, name, report) {
            report.add_error(
                Finding::new(Category::CoreFiles, format!("missing required file {name}"))
                    .with_file(name)
                    .with_suggestion(suggestion),
            );
        }
    }

    check_version_content(root, report);
    check_readme_content(root, report);

    for name in OPTIONAL {
        if !crate::probe::exists(root, name, report) {
            report.recommend(format!("consider adding {name}"));
            report.add_fixable(FixableIssue::create_file(
                name,
                format!("{name} is missing; a starter template is available"),
            ));
        }
    }
}

/// The version marker must hold a bare semantic version
/// (`MAJOR.MINOR.PATCH`, optionally with a fourth build component).
/// Violations are non-blocking.
fn check_version_content(root: &Path, report: &mut ValidationReport) {
    let path = root.join("VERSION");
    let Ok(content) = fs::read_to_string(&path) else {
        return; // absence already reported as an error
    };

    if !is_version_like(content.trim()) {
        report.add_warning(
            Finding::new(
                Category::CoreFiles,
                format!("VERSION content '{}' is not a semantic version", content.trim()),
            )
            .with_file("VERSION"),
        );
    }
}

/// Three or four dot-separated, all-digit components.
fn is_version_like(s: &str) -> bool {
    let parts: Vec<&str> = s.split('.').collect();
    if parts.len() != 3 && parts.len() != 4 {
        return false;
    }
    parts
        .iter()
        .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
}

/// Soft shape checks on the readme: minimum length and a heading marker.
fn check_readme_content(root: &Path, report: &mut ValidationReport) {
    let path = root.join("README.md");
    let Ok(content) = fs::read_to_string(&path) else {
        return;
    };

    if content.len() < README_MIN_LEN {
        report.add_warning(
            Finding::new(
                Category::CoreFiles,
                format!("README.md is very short ({} chars, minimum {README_MIN_LEN})", content.len()),
            )
            .with_file("README.md"),
        );
    }

    if !content.lines().any(|line| line.starts_with('#')) {
        report.add_warning(
            Finding::new(Category::CoreFiles, "README.md has no top-level heading")
                .with_file("README.md"),
        );
    }
}
