//! Report rendering for the terminal.

use anyhow::Result;
use repovet_types::ValidationReport;

/// Print a report in human-readable text form.
pub(crate) fn print_text_report(report: &ValidationReport) {
    if report.is_valid {
        println!(
            "Compliance PASSED ({} checks performed)",
            report.files_checked
        );
    } else {
        println!(
            "Compliance FAILED: {} error(s), {} warning(s)",
            report.errors.len(),
            report.warnings.len()
        );
    }

    println!();
    for (category, status) in &report.categories {
        let mark = if status.passed { "PASS" } else { "FAIL" };
        println!("  [{mark}] {category}: {}", status.message);
    }

    if !report.errors.is_empty() {
        println!("\nErrors:");
        for error in &report.errors {
            print_finding(error);
        }
    }
    if !report.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &report.warnings {
            print_finding(warning);
        }
    }
    if !report.recommendations.is_empty() {
        println!("\nRecommendations:");
        for rec in &report.recommendations {
            println!("  - {rec}");
        }
    }
    if !report.fixable_issues.is_empty() {
        println!("\nFixable issues (run `repovet fix` or `repovet check --fix`):");
        for issue in &report.fixable_issues {
            println!("  - [{}] {}", issue.kind, issue.description);
        }
    }
}

fn print_finding(finding: &repovet_types::Finding) {
    match &finding.file {
        Some(file) => println!("  - [{}] {} ({})", finding.category, finding.message, file.display()),
        None => println!("  - [{}] {}", finding.category, finding.message),
    }
    if let Some(suggestion) = &finding.suggestion {
        println!("        Suggestion: {suggestion}");
    }
}

/// Print a report as pretty JSON for machine consumers.
pub(crate) fn print_json_report(report: &ValidationReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}
