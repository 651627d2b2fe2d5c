//! The issue-set operations: listing, filtering, renumbering, and
//! consistency checks.
//!
//! All operations are synchronous functions over an in-memory [`Export`].
//! Mutating operations validate their arguments up front, so a failure never
//! leaves the record partially filtered.

use std::collections::{HashMap, HashSet};

use crate::cli::{Command, ListOrder};
use crate::domain::Export;
use crate::errors::EditorError;

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Human-readable report lines for stdout.
    Report(Vec<String>),
    /// The record was mutated and must be emitted as one JSON document.
    Document,
}

/// Apply one command to the export.
///
/// The clap [`Command`] enum is the dispatch table: unrecognized names are
/// rejected during argument parsing, before the export is ever read.
pub fn apply(command: &Command, export: &mut Export) -> Result<CommandOutput, EditorError> {
    match command {
        Command::List { order } => Ok(CommandOutput::Report(list(export, *order))),
        Command::Remove { ids } => {
            remove(export, ids)?;
            Ok(CommandOutput::Document)
        }
        Command::KeepOnly { ids } => {
            keep_only(export, ids)?;
            Ok(CommandOutput::Document)
        }
        Command::FindGap => Ok(CommandOutput::Report(find_gaps(export))),
        Command::FindDup => Ok(CommandOutput::Report(find_duplicates(export))),
        Command::FindHeadless => Ok(CommandOutput::Report(find_headless(export))),
        Command::Check => Ok(CommandOutput::Report(check(export))),
        Command::Reassign => {
            reassign(export);
            Ok(CommandOutput::Document)
        }
    }
}

/// One `#<id> <title>` line per issue, in record order, or ascending by id
/// when `sorted` is requested. Sorting is stable, so equal ids keep their
/// relative record order.
pub fn list(export: &Export, order: Option<ListOrder>) -> Vec<String> {
    let mut issues: Vec<_> = export.issues.iter().collect();
    if order == Some(ListOrder::Sorted) {
        issues.sort_by_key(|issue| issue.id);
    }
    issues
        .iter()
        .map(|issue| format!("#{} {}", issue.id, issue.title))
        .collect()
}

/// Parse filter arguments as decimal issue ids. Fails on the first
/// non-numeric argument, before any mutation happens.
fn parse_ids(raw: &[String]) -> Result<HashSet<u64>, EditorError> {
    raw.iter()
        .map(|arg| arg.parse::<u64>().map_err(|_| EditorError::invalid_id(arg)))
        .collect()
}

/// Drop every issue in `raw_ids`, and every comment and log referencing one.
///
/// Milestones, versions, meta, components and attachments are not related to
/// issue ids and pass through untouched.
pub fn remove(export: &mut Export, raw_ids: &[String]) -> Result<(), EditorError> {
    let ids = parse_ids(raw_ids)?;

    export.issues.retain(|issue| !ids.contains(&issue.id));
    export.comments.retain(|comment| !ids.contains(&comment.issue));
    export.logs.retain(|log| !ids.contains(&log.issue));
    Ok(())
}

/// The complementary filter to [`remove`]: keep only the issues in
/// `raw_ids`, and the comments and logs referencing them.
pub fn keep_only(export: &mut Export, raw_ids: &[String]) -> Result<(), EditorError> {
    let ids = parse_ids(raw_ids)?;

    export.issues.retain(|issue| ids.contains(&issue.id));
    export.comments.retain(|comment| ids.contains(&comment.issue));
    export.logs.retain(|log| ids.contains(&log.issue));
    Ok(())
}

/// Report every id missing from the issue numbering, one `#<id> missing.`
/// line each.
///
/// Keeps the original editor's shortcut: when the highest id equals the
/// issue count the numbering is assumed dense and nothing is reported. The
/// shortcut is a heuristic (it does not check the minimum), preserved for
/// behavioral fidelity.
pub fn find_gaps(export: &Export) -> Vec<String> {
    let ids = export.sorted_issue_ids();
    if ids.last().copied() == Some(ids.len() as u64) {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut prev = 0u64;
    for &id in &ids {
        for missing in prev + 1..id {
            lines.push(format!("#{} missing.", missing));
        }
        prev = id;
    }
    lines
}

/// Report every issue id that appears more than once, in order of first
/// appearance in the record.
pub fn find_duplicates(export: &Export) -> Vec<String> {
    let mut counts: HashMap<u64, usize> = HashMap::new();
    let mut first_seen: Vec<u64> = Vec::new();
    for issue in &export.issues {
        let count = counts.entry(issue.id).or_insert(0);
        if *count == 0 {
            first_seen.push(issue.id);
        }
        *count += 1;
    }

    first_seen
        .into_iter()
        .filter(|id| counts[id] > 1)
        .map(|id| format!("#{} appeared {} times.", id, counts[&id]))
        .collect()
}

/// Report every comment whose `issue` reference does not resolve, in
/// original comment order.
///
/// Logs are not checked: they carry no id of their own to report.
pub fn find_headless(export: &Export) -> Vec<String> {
    let ids: HashSet<u64> = export.issues.iter().map(|issue| issue.id).collect();
    export
        .comments
        .iter()
        .filter(|comment| !ids.contains(&comment.issue))
        .map(|comment| format!("Comment #{} is headless.", comment.id))
        .collect()
}

/// Run [`find_duplicates`], [`find_gaps`] and [`find_headless`] in that
/// order and concatenate their reports.
pub fn check(export: &Export) -> Vec<String> {
    let mut lines = find_duplicates(export);
    lines.extend(find_gaps(export));
    lines.extend(find_headless(export));
    lines
}

/// Renumber all issues densely from 1: each old id maps to its 1-based rank
/// in the ascending id order, and every comment and log reference is
/// rewritten through the same mapping. Sequence order is preserved.
///
/// A reference to a nonexistent issue has no entry in the mapping and is
/// left unchanged; `findheadless` exists to detect those beforehand.
pub fn reassign(export: &mut Export) {
    let mapping: HashMap<u64, u64> = export
        .sorted_issue_ids()
        .into_iter()
        .enumerate()
        .map(|(rank, old_id)| (old_id, rank as u64 + 1))
        .collect();

    for issue in &mut export.issues {
        if let Some(&new_id) = mapping.get(&issue.id) {
            issue.id = new_id;
        }
    }
    for comment in &mut export.comments {
        if let Some(&new_id) = mapping.get(&comment.issue) {
            comment.issue = new_id;
        }
    }
    for log in &mut export.logs {
        if let Some(&new_id) = mapping.get(&log.issue) {
            log.issue = new_id;
        }
    }
}
