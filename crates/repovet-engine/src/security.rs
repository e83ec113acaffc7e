//! Security category: policy presence and committed-secret scan.

use std::path::Path;

use ignore::WalkBuilder;
use repovet_types::{Category, Finding, ValidationReport};

/// Filenames that should never be committed. Exact matches.
const SENSITIVE_NAMES: [&str; 4] = [".env", "id_rsa", "id_dsa", "credentials.json"];

/// Extensions that usually hold key material. Matches on extension.
const SENSITIVE_EXTENSIONS: [&str; 3] = ["pem", "p12", "key"];

pub(crate) fn run(root: &Path, report: &mut ValidationReport) {
    if !crate::probe::exists(root, "SECURITY.md", report) {
        report.add_warning(
            Finding::new(Category::Security, "no security policy (SECURITY.md) found")
                .with_file("SECURITY.md"),
        );
    }

    scan_sensitive_files(root, report);
}

/// Walk the tree looking for committed secret material. A match signals a
/// leaked credential, so it is an error, not a warning. The walk honors
/// gitignore rules, mirroring what would actually be committed.
fn scan_sensitive_files(root: &Path, report: &mut ValidationReport) {
    let mut builder = WalkBuilder::new(root);
    builder.hidden(false);
    builder.git_ignore(true);
    builder.git_exclude(true);
    // Honor .gitignore even when the target is not (yet) a git repository.
    builder.require_git(false);
    builder.follow_links(false);

    for entry in builder.build().flatten() {
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }
        let path = entry.path();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_lowercase();

        let by_name = SENSITIVE_NAMES.contains(&name.as_str());
        let by_extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| SENSITIVE_EXTENSIONS.contains(&e.to_lowercase().as_str()))
            .unwrap_or(false);

        if by_name || by_extension {
            let rel = path.strip_prefix(root).unwrap_or(path).to_path_buf();
            report.add_error(
                Finding::new(
                    Category::Security,
                    format!("potential secret committed: {}", rel.display()),
                )
                .with_file(rel)
                .with_suggestion("remove the file from the repository and rotate the credential"),
            );
        }
    }
}
