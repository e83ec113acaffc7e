//! Shared fixtures for CLI integration tests.

use std::fs;
use std::path::Path;

/// Lay down a repository that satisfies every required and optional check.
pub fn write_compliant_repo(root: &Path) {
    fs::write(root.join("VERSION"), "1.2.3\n").unwrap();
    fs::write(
        root.join("README.md"),
        format!("# fixture project\n\n{}\n", "content ".repeat(20)),
    )
    .unwrap();
    fs::write(root.join("LICENSE"), "MIT License\n").unwrap();
    fs::write(root.join("CONTRIBUTING.md"), "# Contributing\n").unwrap();
    fs::write(root.join("CHANGELOG.md"), "# Changelog\n").unwrap();
    fs::write(root.join("SECURITY.md"), "# Security Policy\n").unwrap();
    fs::write(
        root.join("Dockerfile"),
        "FROM debian:bookworm-slim\nRUN useradd appuser\nUSER appuser\n",
    )
    .unwrap();
    fs::create_dir_all(root.join(".github/workflows")).unwrap();
    fs::write(
        root.join(".github/workflows/build-and-notify.yml"),
        "name: build\n\"on\":\n  push:\n    branches: [main]\njobs:\n  build:\n    runs-on: ubuntu-latest\n    steps:\n      - uses: actions/checkout@v4\n",
    )
    .unwrap();
}
