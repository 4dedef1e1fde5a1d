use crate::domain::constants::{CLEAN_MESSAGE, VIOLATIONS_HEADER};
use crate::domain::models::{ConflictEvent, JsonOut, Outcome, ParentSets, ViolationItem};
use serde::Serialize;

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    lines: impl Fn(&T) -> Vec<String>,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for line in lines(&data) {
            println!("{}", line);
        }
    }
    Ok(())
}

pub fn conflict_line(ev: &ConflictEvent) -> String {
    format!(
        "Violation on row {}: Org '{}' previously parented by '{}', now by '{}'.",
        ev.line,
        ev.child,
        ev.prior_parents.join("', '"),
        ev.new_parent
    )
}

pub fn violation_items(violations: &ParentSets) -> Vec<ViolationItem> {
    violations
        .iter()
        .map(|(child, parents)| ViolationItem {
            child: child.clone(),
            parents: parents.iter().cloned().collect(),
        })
        .collect()
}

/// Trailing report lines. `no_hierarchy` is the message for a header that
/// yields too few chain columns.
pub fn summary_lines(outcome: &Outcome, no_hierarchy: &str) -> Vec<String> {
    match outcome {
        Outcome::Clean => vec![CLEAN_MESSAGE.to_string()],
        Outcome::NoHierarchy => vec![no_hierarchy.to_string()],
        Outcome::Violations(v) => {
            let mut out = vec![String::new(), VIOLATIONS_HEADER.to_string()];
            for item in violation_items(v) {
                out.push(format!(
                    "- Org '{}' is reported as a child of multiple parents: {}",
                    item.child,
                    item.parents.join(", ")
                ));
            }
            out
        }
    }
}
