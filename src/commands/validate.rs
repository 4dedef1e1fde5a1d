use crate::*;

/// Scans `cli.path` and prints the report. Returns the outcome so the caller
/// can pick an exit status.
pub fn handle_validate(cli: &Cli, config: &ScanConfig) -> anyhow::Result<Outcome> {
    let print_live = !cli.json && config.conflict_check == ConflictCheck::Incremental;
    let mut conflicts = Vec::new();

    let summary = validate_file(&cli.path, config, |ev| {
        if print_live {
            println!("{}", conflict_line(ev));
        }
        conflicts.push(ev.clone());
    })?;

    let report = ValidateReport {
        source: cli.path.to_string_lossy().to_string(),
        chain_selection: config.selection.describe(),
        chain_columns: summary.chain_columns,
        rows_scanned: summary.rows_scanned,
        status: summary.outcome.status().to_string(),
        conflicts,
        violations: violation_items(&summary.outcome.violations()),
    };
    let no_hierarchy = config.selection.insufficient_message();
    let outcome = summary.outcome;
    print_one(cli.json, report, |_| summary_lines(&outcome, &no_hierarchy))?;

    Ok(outcome)
}
