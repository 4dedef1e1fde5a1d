use crate::cli::{ChainSelectionKind, ConflictCheck, Direction};
use crate::domain::constants::{DEFAULT_CHAIN_PREFIX, DEFAULT_DELIMITER, MIN_CHAIN_COLUMNS};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Child organization -> every distinct parent it was seen under.
pub type ParentSets = BTreeMap<String, BTreeSet<String>>;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainSelection {
    /// Header fields starting with the prefix, in header order.
    Prefix(String),
    /// Every header field after the first `n`.
    FixedOffset(usize),
}

impl ChainSelection {
    pub fn describe(&self) -> String {
        match self {
            ChainSelection::Prefix(p) => format!("prefix:{}", p),
            ChainSelection::FixedOffset(n) => format!("fixed-offset:{}", n),
        }
    }

    pub fn insufficient_message(&self) -> String {
        match self {
            ChainSelection::Prefix(p) => format!(
                "Not enough '{}' columns (at least {} required) found in the CSV header to define a hierarchy.",
                p, MIN_CHAIN_COLUMNS
            ),
            ChainSelection::FixedOffset(n) => format!(
                "Not enough columns after the first {} (at least {} required) found in the CSV header to define a hierarchy.",
                n, MIN_CHAIN_COLUMNS
            ),
        }
    }
}

impl Default for ChainSelection {
    fn default() -> Self {
        ChainSelection::Prefix(DEFAULT_CHAIN_PREFIX.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub selection: ChainSelection,
    pub direction: Direction,
    pub conflict_check: ConflictCheck,
    pub delimiter: u8,
    pub fail_on_violations: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            selection: ChainSelection::default(),
            direction: Direction::default(),
            conflict_check: ConflictCheck::default(),
            delimiter: DEFAULT_DELIMITER,
            fail_on_violations: false,
        }
    }
}

/// On-disk config (`config.toml`). Every key is optional; CLI flags win.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub chain_selection: Option<ChainSelectionKind>,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub skip_columns: Option<usize>,
    #[serde(default)]
    pub direction: Option<Direction>,
    #[serde(default)]
    pub conflict_check: Option<ConflictCheck>,
    #[serde(default)]
    pub delimiter: Option<char>,
    #[serde(default)]
    pub fail_on_violations: Option<bool>,
}

/// A child seen under a parent that differs from every parent recorded so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictEvent {
    pub line: usize,
    pub child: String,
    pub prior_parents: Vec<String>,
    pub new_parent: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    Violations(ParentSets),
    /// The header yields fewer chain columns than a hierarchy needs.
    NoHierarchy,
}

impl Outcome {
    pub fn status(&self) -> &'static str {
        match self {
            Outcome::Clean => "clean",
            Outcome::Violations(_) => "violations",
            Outcome::NoHierarchy => "no_hierarchy",
        }
    }

    pub fn violations(&self) -> ParentSets {
        match self {
            Outcome::Violations(v) => v.clone(),
            _ => ParentSets::new(),
        }
    }

    pub fn has_violations(&self) -> bool {
        matches!(self, Outcome::Violations(_))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ViolationItem {
    pub child: String,
    pub parents: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ValidateReport {
    pub source: String,
    pub chain_selection: String,
    pub chain_columns: Vec<String>,
    pub rows_scanned: usize,
    pub status: String,
    pub conflicts: Vec<ConflictEvent>,
    pub violations: Vec<ViolationItem>,
}
