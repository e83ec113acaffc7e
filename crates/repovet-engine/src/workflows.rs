//! CI Workflows category: workflow directory, parseability, required keys.

use std::fs;
use std::path::{Path, PathBuf};

use repovet_types::{Category, Finding, ValidationReport};

const WORKFLOW_DIR: &str = ".github/workflows";

/// Advisory filename keywords for the "build and notify downstream" role.
const ROLE_KEYWORDS: [&str; 3] = ["notify", "build", "trigger"];

pub(crate) fn run(root: &Path, report: &mut ValidationReport) {
    if !crate::probe::dir_exists(root, WORKFLOW_DIR, report) {
        report.add_error(
            Finding::new(Category::CiWorkflows, "missing workflow directory")
                .with_file(WORKFLOW_DIR)
                .with_suggestion("create .github/workflows with at least one workflow file"),
        );
        return; // nothing else in this category can run
    }

    let files = workflow_files(&root.join(WORKFLOW_DIR));
    if files.is_empty() {
        report.add_error(
            Finding::new(Category::CiWorkflows, "workflow directory contains no workflow files")
                .with_file(WORKFLOW_DIR)
                .with_suggestion("add a .yml workflow file"),
        );
        return;
    }

    for file in &files {
        report.tally_check();
        check_workflow_file(root, file, report);
    }

    let has_role_name = files.iter().any(|f| {
        let name = f
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_lowercase();
        ROLE_KEYWORDS.iter().any(|kw| name.contains(kw))
    });
    if !has_role_name {
        report.add_warning(Finding::new(
            Category::CiWorkflows,
            "no workflow name suggests a build-and-notify role (expected one of: notify, build, trigger)",
        ));
    }
}

/// Workflow files under the directory, sorted by name for deterministic
/// finding order.
fn workflow_files(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && matches!(
                    p.extension().and_then(|e| e.to_str()),
                    Some("yml") | Some("yaml")
                )
        })
        .collect();
    files.sort();
    files
}

fn check_workflow_file(root: &Path, file: &Path, report: &mut ValidationReport) {
    let rel = file.strip_prefix(root).unwrap_or(file).to_path_buf();

    let content = match fs::read_to_string(file) {
        Ok(c) => c,
        Err(err) => {
            report.add_error(
                Finding::new(Category::CiWorkflows, format!("cannot read workflow file: {err}"))
                    .with_file(rel),
            );
            return;
        }
    };

    let doc: serde_yaml::Value = match serde_yaml::from_str(&content) {
        Ok(doc) => doc,
        Err(err) => {
            report.add_error(
                Finding::new(Category::CiWorkflows, format!("workflow is not valid YAML: {err}"))
                    .with_file(rel),
            );
            return;
        }
    };

    if !has_trigger_key(&doc) {
        report.add_error(
            Finding::new(Category::CiWorkflows, "workflow has no trigger ('on') declaration")
                .with_file(rel.clone())
                .with_suggestion("add an 'on:' section declaring when the workflow runs"),
        );
    }
    if !has_key(&doc, "jobs") {
        report.add_error(
            Finding::new(Category::CiWorkflows, "workflow has no jobs declaration")
                .with_file(rel)
                .with_suggestion("add a 'jobs:' section with at least one job"),
        );
    }
}

/// YAML 1.1 parsers resolve a bare `on` key to boolean true, so accept both
/// the string key and the boolean key.
fn has_trigger_key(doc: &serde_yaml::Value) -> bool {
    has_key(doc, "on")
        || doc
            .as_mapping()
            .is_some_and(|m| m.get(&serde_yaml::Value::Bool(true)).is_some())
}

fn has_key(doc: &serde_yaml::Value, key: &str) -> bool {
    doc.as_mapping()
        .is_some_and(|m| m.get(&serde_yaml::Value::String(key.to_string())).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_on(dir: &tempfile::TempDir) -> ValidationReport {
        let mut report = ValidationReport::new();
        run(dir.path(), &mut report);
        report
    }

    fn write_workflow(dir: &tempfile::TempDir, name: &str, content: &str) {
        let wf_dir = dir.path().join(WORKFLOW_DIR);
        fs::create_dir_all(&wf_dir).unwrap();
        fs::write(wf_dir.join(name), content).unwrap();
    }

    const GOOD_WORKFLOW: &str = "name: ci\n\"on\": push\njobs:\n  build:\n    runs-on: ubuntu-latest\n";

    // ── short-circuits ────────────────────────────────────────────────
    #[test]
    fn missing_directory_is_single_error() {
        let dir = tempfile::tempdir().unwrap();
        let report = run_on(&dir);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].message.contains("workflow directory"));
    }

    #[test]
    fn empty_directory_is_single_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join(WORKFLOW_DIR)).unwrap();
        let report = run_on(&dir);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].message.contains("no workflow files"));
    }

    #[test]
    fn non_yaml_files_do_not_count_as_workflows() {
        let dir = tempfile::tempdir().unwrap();
        write_workflow(&dir, "README.txt", "not a workflow");
        let report = run_on(&dir);
        assert!(report.errors[0].message.contains("no workflow files"));
    }

    // ── per-file checks ───────────────────────────────────────────────
    #[test]
    fn unparsable_workflow_is_error_scoped_to_file() {
        let dir = tempfile::tempdir().unwrap();
        write_workflow(&dir, "bad-build.yml", "on: [push\n  jobs: oops");
        write_workflow(&dir, "good-build.yml", GOOD_WORKFLOW);

        let report = run_on(&dir);
        // The sibling file is still processed and raises nothing.
        assert_eq!(report.errors.len(), 1);
        assert!(
            report.errors[0]
                .file
                .as_deref()
                .unwrap()
                .ends_with("bad-build.yml")
        );
    }

    #[test]
    fn missing_trigger_and_jobs_are_separate_errors() {
        let dir = tempfile::tempdir().unwrap();
        write_workflow(&dir, "build.yml", "name: just-a-name\n");
        let report = run_on(&dir);

        assert_eq!(report.errors.len(), 2);
        assert!(report.errors.iter().any(|e| e.message.contains("trigger")));
        assert!(report.errors.iter().any(|e| e.message.contains("jobs")));
    }

    #[test]
    fn yaml_11_boolean_on_key_is_accepted_as_trigger() {
        // A bare `on:` key resolved to boolean true must still count.
        let doc: serde_yaml::Value =
            serde_yaml::from_str("true:\n  push: {}\njobs: {}").unwrap();
        assert!(has_trigger_key(&doc));
        assert!(has_key(&doc, "jobs"));
    }

    #[test]
    fn complete_workflow_raises_nothing() {
        let dir = tempfile::tempdir().unwrap();
        write_workflow(&dir, "build-and-notify.yml", GOOD_WORKFLOW);
        let report = run_on(&dir);
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
    }

    // ── advisory naming ───────────────────────────────────────────────
    #[test]
    fn missing_role_keyword_is_warning_not_error() {
        let dir = tempfile::tempdir().unwrap();
        write_workflow(&dir, "deploy.yml", GOOD_WORKFLOW);
        let report = run_on(&dir);
        assert!(report.errors.is_empty());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].message.contains("build-and-notify"));
    }

    #[test]
    fn notify_keyword_satisfies_role_check() {
        let dir = tempfile::tempdir().unwrap();
        write_workflow(&dir, "release-notify.yaml", GOOD_WORKFLOW);
        let report = run_on(&dir);
        assert!(report.warnings.is_empty());
    }
}
