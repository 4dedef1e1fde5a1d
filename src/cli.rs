use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "orgcheck",
    version,
    about = "Checks that no organization in a hierarchy CSV has more than one parent"
)]
pub struct Cli {
    #[arg(help = "Path to the hierarchy CSV file")]
    pub path: PathBuf,
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, help = "Config file (defaults to ~/.config/orgcheck/config.toml)")]
    pub config: Option<PathBuf>,
    #[arg(long, value_enum, help = "How chain columns are picked from the header")]
    pub chain_selection: Option<ChainSelectionKind>,
    #[arg(long, help = "Header prefix marking chain columns (prefix selection)")]
    pub prefix: Option<String>,
    #[arg(long, help = "Leading columns to skip (fixed-offset selection)")]
    pub skip_columns: Option<usize>,
    #[arg(long, value_enum, help = "Which end of the chain is the child")]
    pub direction: Option<Direction>,
    #[arg(long, value_enum, help = "Report conflicts while scanning or only at the end")]
    pub conflict_check: Option<ConflictCheck>,
    #[arg(long, help = "Field delimiter (single ASCII character)")]
    pub delimiter: Option<char>,
    #[arg(long, help = "Exit with status 1 when violations are found")]
    pub fail_on_violations: bool,
    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity (stderr)")]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ChainSelectionKind {
    Prefix,
    FixedOffset,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Position `i` is the child of position `i + 1`.
    #[default]
    ChildFirst,
    /// Position `i` is the parent of position `i + 1`.
    ParentFirst,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictCheck {
    #[default]
    Incremental,
    Final,
}
