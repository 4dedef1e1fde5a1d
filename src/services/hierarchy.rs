use crate::cli::Direction;
use crate::domain::constants::MIN_CHAIN_COLUMNS;
use crate::domain::models::{ConflictEvent, Outcome, ParentSets, ScanConfig};
use crate::services::chain::{chain_positions, extract_chain, links};
use std::collections::{BTreeSet, HashMap};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("found {found} chain column(s), at least {required} required")]
    InsufficientChain { found: usize, required: usize },
}

/// Every parent recorded for each child during one run.
#[derive(Debug, Default)]
pub struct ParentRegistry {
    parents: HashMap<String, BTreeSet<String>>,
}

impl ParentRegistry {
    /// Records `child -> parent`. Returns an event only when `parent` is new
    /// for a child that already had one.
    pub fn observe(&mut self, line: usize, child: &str, parent: &str) -> Option<ConflictEvent> {
        let known = self.parents.entry(child.to_string()).or_default();
        if known.is_empty() {
            known.insert(parent.to_string());
            return None;
        }
        if known.contains(parent) {
            return None;
        }
        let prior_parents: Vec<String> = known.iter().cloned().collect();
        known.insert(parent.to_string());
        Some(ConflictEvent {
            line,
            child: child.to_string(),
            prior_parents,
            new_parent: parent.to_string(),
        })
    }

    pub fn violations(&self) -> ParentSets {
        self.parents
            .iter()
            .filter(|(_, p)| p.len() > 1)
            .map(|(c, p)| (c.clone(), p.clone()))
            .collect()
    }
}

#[derive(Debug)]
pub struct ScanSummary {
    pub outcome: Outcome,
    pub chain_columns: Vec<String>,
    pub rows_scanned: usize,
}

/// State of a single validation pass. Feed rows in file order with
/// [`HierarchyScan::push_row`], then call [`HierarchyScan::finish`].
/// Line numbers come from the caller, which knows where each record sits in
/// the source.
#[derive(Debug)]
pub struct HierarchyScan {
    positions: Vec<usize>,
    chain_columns: Vec<String>,
    direction: Direction,
    registry: ParentRegistry,
    rows_scanned: usize,
}

impl HierarchyScan {
    pub fn new<S: AsRef<str>>(header: &[S], config: &ScanConfig) -> Result<Self, HierarchyError> {
        let positions = chain_positions(header, &config.selection);
        if positions.len() < MIN_CHAIN_COLUMNS {
            return Err(HierarchyError::InsufficientChain {
                found: positions.len(),
                required: MIN_CHAIN_COLUMNS,
            });
        }
        let chain_columns = positions
            .iter()
            .map(|&i| header[i].as_ref().to_string())
            .collect();
        Ok(Self {
            positions,
            chain_columns,
            direction: config.direction,
            registry: ParentRegistry::default(),
            rows_scanned: 0,
        })
    }

    pub fn chain_columns(&self) -> &[String] {
        &self.chain_columns
    }

    pub fn push_row<S: AsRef<str>>(&mut self, line: usize, row: &[S]) -> Vec<ConflictEvent> {
        self.rows_scanned += 1;

        let chain = extract_chain(row, &self.positions);
        let mut events = Vec::new();
        for (child, parent) in links(&chain, self.direction) {
            if let Some(ev) = self.registry.observe(line, child, parent) {
                tracing::debug!(
                    line,
                    child = %ev.child,
                    new_parent = %ev.new_parent,
                    "conflicting parent observed"
                );
                events.push(ev);
            }
        }
        events
    }

    pub fn finish(self) -> ScanSummary {
        let violations = self.registry.violations();
        let outcome = if violations.is_empty() {
            Outcome::Clean
        } else {
            Outcome::Violations(violations)
        };
        ScanSummary {
            outcome,
            chain_columns: self.chain_columns,
            rows_scanned: self.rows_scanned,
        }
    }
}
