//! `crudgen check`: validate a project description without generating.

use serde::Serialize;
use tracing::instrument;

use crudgen_core::domain::{ProjectValidator, RelationPolicy, Severity, ValidationReport};

use crate::{
    cli::CheckArgs,
    commands::load_project,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct Issue {
    severity: String,
    message: String,
}

#[instrument(skip_all, fields(project = %args.project.display()))]
pub fn execute(args: CheckArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let project = load_project(&args.project)?;
    let policy = RelationPolicy::from_strict(args.strict || config.generation.strict_relations);

    let report = ProjectValidator::validate(&project, policy);
    show_report(&report, &output)?;

    let errors = report.errors().count();
    if errors > 0 {
        return Err(CliError::CheckFailed { errors });
    }

    output.success(&format!(
        "'{}' is valid: {} object(s), {} warning(s)",
        project.name,
        project.objects().len(),
        report.warnings().count(),
    ))?;
    Ok(())
}

fn show_report(report: &ValidationReport, output: &OutputManager) -> CliResult<()> {
    for issue in &report.issues {
        match issue.severity {
            Severity::Warning => output.warning(&issue.error.to_string())?,
            Severity::Error => output.error(&issue.error.to_string())?,
        }
    }

    let issues: Vec<Issue> = report
        .issues
        .iter()
        .map(|i| Issue {
            severity: i.severity.to_string(),
            message: i.error.to_string(),
        })
        .collect();
    output.json(&serde_json::json!({
        "valid": !report.has_errors(),
        "issues": issues,
    }))?;
    Ok(())
}
