//! Handler for the `repovet check` command.

use anyhow::Result;
use repovet_engine::{ComplianceEngine, EngineConfig};

use crate::output;
use crate::{CheckArgs, ReportFormat};

pub(crate) fn handle(args: CheckArgs) -> Result<i32> {
    let engine = ComplianceEngine::new(EngineConfig {
        auto_fix: args.fix,
        verbose: args.verbose,
        schema_file: args.schema.clone(),
    });

    let mut report = engine.validate_repository(&args.path);

    if args.fix && !report.fixable_issues.is_empty() {
        // Per-issue independent application: a failed write does not stop
        // the loop. Convergence comes from the re-validation afterwards.
        for issue in &report.fixable_issues {
            match repovet_fix::apply_fix(&args.path, issue) {
                Ok(path) => eprintln!("fixed: {}", path.display()),
                Err(err) => eprintln!("fix failed ({}): {err}", issue.kind),
            }
        }
        report = engine.validate_repository(&args.path);
    }

    match args.format {
        ReportFormat::Text => output::print_text_report(&report),
        ReportFormat::Json => output::print_json_report(&report)?,
    }

    Ok(crate::exit_code(&report))
}
