//! Core domain types for a BitBucket issue-tracker export.
//!
//! An export file is one JSON object holding parallel ordered sequences:
//! issues, the comments and activity logs that reference them, and a handful
//! of collections (milestones, versions, meta, components, attachments) that
//! the editor carries through untouched. Only `id`, `title` and the `issue`
//! back-references are interpreted; everything else rides along verbatim in
//! flattened maps.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A tracked ticket with a numeric id and title.
///
/// Ids are expected to be unique across the export but that is never
/// enforced; `finddup` exists to detect violations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: u64,
    pub title: String,
    /// All other exported fields, preserved but not interpreted.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A remark attached to exactly one issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    /// Id of the issue this comment belongs to.
    pub issue: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An activity entry. Logs carry no id of their own; they reference an
/// issue directly even though they are logically tied to a comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Log {
    /// Id of the issue this log entry belongs to.
    pub issue: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The whole export record.
///
/// `issues`, `comments` and `logs` are required; the named passthrough
/// collections are optional and are serialized back only when present.
/// Anything else in the top-level object lands in `extra` unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Export {
    pub issues: Vec<Issue>,
    pub comments: Vec<Comment>,
    pub logs: Vec<Log>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestones: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versions: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Value>,
    // Open question in the source data format: attachments are carried
    // through untouched, never filtered alongside issues.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Export {
    /// All issue ids, ascending. Duplicates are kept.
    pub fn sorted_issue_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.issues.iter().map(|issue| issue.id).collect();
        ids.sort_unstable();
        ids
    }
}
