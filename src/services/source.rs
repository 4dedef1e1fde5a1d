use crate::domain::constants::FIRST_DATA_LINE;
use crate::domain::models::{ConflictEvent, Outcome, ScanConfig};
use crate::services::chain::chain_positions;
use crate::services::hierarchy::{HierarchyError, HierarchyScan, ScanSummary};
use anyhow::Context;
use std::io::Read;
use std::path::Path;

pub fn validate_file(
    path: &Path,
    config: &ScanConfig,
    on_conflict: impl FnMut(&ConflictEvent),
) -> anyhow::Result<ScanSummary> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    tracing::info!(path = %path.display(), selection = %config.selection.describe(), "scanning");
    validate_reader(file, config, on_conflict)
        .with_context(|| format!("failed to read {}", path.display()))
}

/// Runs one scan over CSV data. Rows may be ragged; only source-level read or
/// decode failures are returned as errors.
pub fn validate_reader<R: Read>(
    input: R,
    config: &ScanConfig,
    mut on_conflict: impl FnMut(&ConflictEvent),
) -> anyhow::Result<ScanSummary> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut scan = match HierarchyScan::new(&header, config) {
        Ok(scan) => scan,
        Err(HierarchyError::InsufficientChain { found, required }) => {
            tracing::warn!(found, required, "header does not define a hierarchy");
            let chain_columns = chain_positions(&header, &config.selection)
                .into_iter()
                .map(|i| header[i].clone())
                .collect();
            return Ok(ScanSummary {
                outcome: Outcome::NoHierarchy,
                chain_columns,
                rows_scanned: 0,
            });
        }
    };
    tracing::debug!(columns = ?scan.chain_columns(), "chain columns resolved");

    // Blank lines are skipped by the reader, so the record index is not the
    // file line; the record position is.
    let mut record = csv::StringRecord::new();
    let mut index = 0usize;
    while reader.read_record(&mut record)? {
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(FIRST_DATA_LINE + index);
        index += 1;
        let fields: Vec<&str> = record.iter().collect();
        for ev in scan.push_row(line, &fields) {
            on_conflict(&ev);
        }
    }

    let summary = scan.finish();
    tracing::info!(
        rows = summary.rows_scanned,
        status = summary.outcome.status(),
        "scan complete"
    );
    Ok(summary)
}
