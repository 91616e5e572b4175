//! Unified line-diff formatting for mismatch messages.

use similar::{ChangeTag, TextDiff};

/// Format a context-free unified diff between two rendered blocks.
///
/// Every line the diff algorithm emits is kept under a single `@@ @@`
/// hunk marker, prefixed with `+`, `-`, or a space. The output always
/// ends with a newline.
pub(crate) fn unified_diff(old: &str, new: &str, from_label: &str, to_label: &str) -> String {
    let diff = TextDiff::from_lines(old, new);

    let mut output = format!("--- {from_label}\n+++ {to_label}\n@@ @@\n");
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Equal => ' ',
            ChangeTag::Delete => '-',
            ChangeTag::Insert => '+',
        };
        output.push(sign);
        output.push_str(change.value());
        if !change.value().ends_with('\n') {
            output.push('\n');
        }
    }
    output
}
