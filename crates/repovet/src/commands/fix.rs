//! Handler for the `repovet fix` command.

use anyhow::Result;
use repovet_engine::{ComplianceEngine, EngineConfig};

use crate::FixArgs;
use crate::output;

pub(crate) fn handle(args: FixArgs) -> Result<i32> {
    let engine = ComplianceEngine::new(EngineConfig {
        auto_fix: true,
        verbose: args.verbose,
        schema_file: None,
    });

    let report = engine.validate_repository(&args.path);
    if report.fixable_issues.is_empty() {
        println!("Nothing to fix.");
        return Ok(crate::exit_code(&report));
    }

    let mut applied = 0usize;
    for issue in &report.fixable_issues {
        match repovet_fix::apply_fix(&args.path, issue) {
            Ok(path) => {
                applied += 1;
                println!("fixed: {}", path.display());
            }
            Err(err) => eprintln!("fix failed ({}): {err}", issue.kind),
        }
    }
    println!(
        "Applied {applied} of {} fix(es), re-validating...",
        report.fixable_issues.len()
    );

    let after = engine.validate_repository(&args.path);
    output::print_text_report(&after);
    Ok(crate::exit_code(&after))
}
