use crate::cli::Direction;
use crate::domain::models::ChainSelection;

/// Header positions that make up the organization chain, in header order.
pub fn chain_positions<S: AsRef<str>>(header: &[S], selection: &ChainSelection) -> Vec<usize> {
    match selection {
        ChainSelection::Prefix(prefix) => header
            .iter()
            .enumerate()
            .filter(|(_, name)| name.as_ref().starts_with(prefix.as_str()))
            .map(|(i, _)| i)
            .collect(),
        ChainSelection::FixedOffset(skip) => (*skip..header.len()).collect(),
    }
}

/// Chain values of one row. Out-of-range and blank fields are `None`.
pub fn extract_chain<'a, S: AsRef<str>>(row: &'a [S], positions: &[usize]) -> Vec<Option<&'a str>> {
    positions
        .iter()
        .map(|&i| {
            row.get(i)
                .map(|v| v.as_ref())
                .filter(|v| !v.trim().is_empty())
        })
        .collect()
}

/// `(child, parent)` links between adjacent chain values where both are present.
pub fn links<'a>(chain: &[Option<&'a str>], direction: Direction) -> Vec<(&'a str, &'a str)> {
    chain
        .windows(2)
        .filter_map(|w| match (w[0], w[1]) {
            (Some(a), Some(b)) => Some(match direction {
                Direction::ChildFirst => (a, b),
                Direction::ParentFirst => (b, a),
            }),
            _ => None,
        })
        .collect()
}
