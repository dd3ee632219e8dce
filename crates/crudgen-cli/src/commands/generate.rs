//! Implementation of the `crudgen generate` command.
//!
//! Responsibility: resolve paths and flags against config, pick adapters,
//! call the core generator service, and display results. No business logic
//! lives here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crudgen_adapters::{DirectoryBaseCode, EmbeddedBaseCode, LocalFilesystem};
use crudgen_core::{
    application::{GenerateOptions, GenerationReport, GeneratorService, ports::BaseCodeSource},
    domain::{FsEntry, GeneratedOutput, Project},
};

use crate::{
    cli::GenerateArgs,
    commands::load_project,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Machine-readable summary printed with `--output-format json`.
#[derive(Debug, Serialize)]
struct Summary<'a> {
    project: &'a str,
    output: &'a Path,
    dry_run: bool,
    files: Vec<String>,
    directories: usize,
    unresolved_relations: &'a [(String, String)],
    unclassified_fields: &'a [(String, String)],
}

/// Execute the `crudgen generate` command.
///
/// Dispatch sequence:
/// 1. Load the project description
/// 2. Resolve output directory, base code and relation policy
/// 3. Dry run: plan and list, or generate and write
/// 4. Report skipped relations and unclassified fields
#[instrument(skip_all, fields(project = %args.project.display()))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let progress = output.progress(3);
    progress.set_message("Loading project description");

    let project = load_project(&args.project)?;
    progress.inc(1);

    let output_root = resolve_output_dir(&args, &config, &project);
    let options = GenerateOptions::default()
        .strict(args.strict || config.generation.strict_relations)
        .force(args.force);
    let base_code = select_base_code(args.templates.as_deref(), &config);

    debug!(
        output = %output_root.display(),
        base = %base_code.describe(),
        policy = %options.policy,
        force = options.force,
        "Generation resolved"
    );

    let service = GeneratorService::new(base_code, Box::new(LocalFilesystem::new()));

    if args.dry_run {
        progress.set_message("Planning");
        let planned = service.plan(&project, &options)?;
        progress.finish_and_clear();
        return show_plan(&project, &output_root, &planned, &output);
    }

    progress.set_message("Generating");
    progress.inc(1);
    let report = service.generate(&project, &output_root, &options)?;
    progress.inc(1);
    progress.finish_and_clear();

    info!(run_id = %report.run_id, files = report.files_written, "Generation finished");
    show_report(&report, &output)
}

/// `--output`, then `generation.output_dir`, then `./<camelCaseName>`.
fn resolve_output_dir(args: &GenerateArgs, config: &AppConfig, project: &Project) -> PathBuf {
    args.output
        .clone()
        .or_else(|| config.generation.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from(project.camel_case_name()))
}

/// `--templates`, then `generation.templates_dir`, then the bundled base code.
fn select_base_code(templates: Option<&Path>, config: &AppConfig) -> Box<dyn BaseCodeSource> {
    match templates.or(config.generation.templates_dir.as_deref()) {
        Some(dir) => Box::new(DirectoryBaseCode::new(dir)),
        None => Box::new(EmbeddedBaseCode::new()),
    }
}

fn show_plan(
    project: &Project,
    root: &Path,
    planned: &GeneratedOutput,
    output: &OutputManager,
) -> CliResult<()> {
    let files: Vec<String> = planned.tree.files().map(|f| f.path.to_string()).collect();

    output.info(&format!(
        "Dry run: would create '{}' at {}",
        project.name,
        root.display(),
    ))?;
    for entry in planned.tree.entries() {
        match entry {
            FsEntry::Directory(dir) => output.detail(&format!("{}/", dir.path))?,
            FsEntry::File(file) => output.detail(&file.path.to_string())?,
        }
    }
    if root.exists() {
        output.warning(&format!(
            "{} already exists; generation would need --force",
            root.display()
        ))?;
    }
    warn_diagnostics(
        &planned.diagnostics.unresolved_relations,
        &planned.diagnostics.unclassified_fields,
        output,
    )?;

    output.json(&Summary {
        project: &project.name,
        output: root,
        dry_run: true,
        files,
        directories: planned.tree.directories().count(),
        unresolved_relations: &planned.diagnostics.unresolved_relations,
        unclassified_fields: &planned.diagnostics.unclassified_fields,
    })?;
    Ok(())
}

fn show_report(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    output.success(&format!(
        "Project '{}' generated: {} object(s), {} file(s) in {}",
        report.project,
        report.objects,
        report.files_written,
        report.output_root.display(),
    ))?;
    warn_diagnostics(
        &report.unresolved_relations,
        &report.unclassified_fields,
        output,
    )?;

    output.json(&Summary {
        project: &report.project,
        output: &report.output_root,
        dry_run: false,
        files: Vec::new(),
        directories: report.directories_created,
        unresolved_relations: &report.unresolved_relations,
        unclassified_fields: &report.unclassified_fields,
    })?;

    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  open {}/index.html", report.output_root.display()))?;
    Ok(())
}

fn warn_diagnostics(
    unresolved_relations: &[(String, String)],
    unclassified_fields: &[(String, String)],
    output: &OutputManager,
) -> CliResult<()> {
    for (object, foreign) in unresolved_relations {
        output.warning(&format!(
            "{object}: parent '{foreign}' is not declared; select omitted"
        ))?;
    }
    for (object, field) in unclassified_fields {
        output.warning(&format!(
            "{object}.{field}: no input form known for this field type; field omitted"
        ))?;
    }
    Ok(())
}
