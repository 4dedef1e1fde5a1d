pub const DEFAULT_CHAIN_PREFIX: &str = "org";
pub const DEFAULT_SKIP_COLUMNS: usize = 2;
pub const DEFAULT_DELIMITER: u8 = b',';

/// A hierarchy needs at least one child/parent link.
pub const MIN_CHAIN_COLUMNS: usize = 2;

/// Display number of the first data row; line 1 is the header.
pub const FIRST_DATA_LINE: usize = 2;

pub const CONFIG_RELATIVE_PATH: &str = ".config/orgcheck/config.toml";

pub const CLEAN_MESSAGE: &str =
    "No hierarchical violations found. Each org (child) has a single, consistent parent.";
pub const VIOLATIONS_HEADER: &str = "Violations:";
