//! Canned remediation documents, keyed by target filename.

pub(crate) const TEMPLATE_CONTRIBUTING: &str = r#"# Contributing

Thanks for taking the time to contribute!

## Getting started

1. Fork the repository and create a feature branch from `main`.
2. Make your change, with tests where behavior changes.
3. Keep commits focused; one logical change per commit.
4. Open a pull request describing what changed and why.

## Pull request checklist

- [ ] Tests pass locally
- [ ] New behavior is covered by tests
- [ ] Documentation updated where user-facing behavior changed
- [ ] CHANGELOG.md updated for notable changes

## Reporting issues

Open an issue with steps to reproduce, the expected behavior, and the actual
behavior. Include version information from the VERSION file.

## Code of conduct

Be respectful. Assume good intent. Harassment of any kind is not tolerated.
"#;

pub(crate) const TEMPLATE_SECURITY: &str = r#"# Security Policy

## Supported versions

Only the latest released version receives security fixes.

## Reporting a vulnerability

Please do NOT open a public issue for security problems.

Report vulnerabilities privately to the maintainers. Include:

- A description of the issue and its impact
- Steps to reproduce or a proof of concept
- Any suggested remediation, if known

You can expect an acknowledgement within 72 hours and a status update within
two weeks. Once a fix is released we will credit reporters who wish to be
named.

## Scope

Secrets committed to this repository, dependency vulnerabilities, and flaws
in published artifacts are all in scope.
"#;

pub(crate) const TEMPLATE_CHANGELOG: &str = r#"# Changelog

All notable changes to this project will be documented in this file.

The format is based on [Keep a Changelog](https://keepachangelog.com/en/1.1.0/),
and this project adheres to [Semantic Versioning](https://semver.org/spec/v2.0.0.html).

## [Unreleased]

### Added

- Initial changelog.
"#;

/// Minimal default container definition. Deliberately not customized: the
/// caller is expected to edit the base image and entrypoint for the project.
pub(crate) const TEMPLATE_DOCKERFILE: &str = r#"FROM debian:bookworm-slim

WORKDIR /app

COPY . .

# Drop privileges for the runtime process.
RUN useradd --create-home appuser
USER appuser

CMD ["/bin/sh"]
"#;

/// Look up the canned document for a target filename.
pub(crate) fn file_template(name: &str) -> Option<&'static str> {
    match name {
        "CONTRIBUTING.md" => Some(TEMPLATE_CONTRIBUTING),
        "SECURITY.md" => Some(TEMPLATE_SECURITY),
        "CHANGELOG.md" => Some(TEMPLATE_CHANGELOG),
        _ => None,
    }
}

/// Names of every built-in template, for CLI introspection.
pub fn template_names() -> &'static [&'static str] {
    &["CONTRIBUTING.md", "SECURITY.md", "CHANGELOG.md", "Dockerfile"]
}
