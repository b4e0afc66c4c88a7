//! Line scanner that finds `$name(args:` signatures and their doc-start lines.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static SIGNATURE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\$\w+)\s*\(args:").expect("valid signature regex"));

const DOC_OPEN: &str = "/**";
const DOC_CLOSE: &str = "*/";

/// An operator and the line its documentation link should point at.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OperationRecord {
    /// Operator symbol including the leading `$`.
    pub operator: String,
    /// 1-based line: the doc-start line when a block precedes the signature,
    /// otherwise the signature line.
    pub line: usize,
}

impl OperationRecord {
    /// Create a record.
    pub fn new(operator: impl Into<String>, line: usize) -> Self {
        Self {
            operator: operator.into(),
            line,
        }
    }
}

/// Extract every operator signature from `content`, sorted by operator then line.
///
/// Duplicated operators are kept as separate records.
pub fn extract(content: &str) -> Vec<OperationRecord> {
    let lines: Vec<&str> = content.lines().collect();
    let mut records = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let Some(captures) = SIGNATURE_PATTERN.captures(line) else {
            continue;
        };
        let operator = &captures[1];
        let line_number = find_doc_start(&lines[..index]).unwrap_or(index + 1);
        records.push(OperationRecord::new(operator, line_number));
    }

    records.sort();
    records
}

/// Walk `preceding` backward looking for the `/**` that opens an adjacent block.
///
/// Returns the 1-based number of the `/**` line. Any line containing `*` counts
/// as comment content, so `a * b` on the line above a signature is skipped over.
pub fn find_doc_start(preceding: &[&str]) -> Option<usize> {
    for (index, line) in preceding.iter().enumerate().rev() {
        if line.contains(DOC_OPEN) {
            return Some(index + 1);
        }
        if line.trim().is_empty() || line.contains(DOC_CLOSE) || line.contains('*') {
            continue;
        }
        break;
    }
    None
}
