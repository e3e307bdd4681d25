//! Line-level diff between two license texts.
//!
//! Uses the `similar` crate (Myers diff algorithm) to produce structured
//! hunks with context lines, plus a word-level similarity ratio. The merge
//! engine does not need this; it is used to report why two definitions were
//! kept apart.

use similar::{ChangeTag, TextDiff};

/// The result of diffing two license texts.
#[derive(Clone, Debug, PartialEq)]
pub struct LicenseDiff {
    /// The diff hunks.
    pub hunks: Vec<DiffHunk>,
    /// Word-level similarity in `0.0..=1.0`.
    pub similarity: f32,
}

impl LicenseDiff {
    /// Returns `true` if the two texts are identical.
    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty()
    }

    /// Total number of lines added across all hunks.
    pub fn additions(&self) -> usize {
        self.hunks
            .iter()
            .flat_map(|h| &h.lines)
            .filter(|l| matches!(l, DiffLine::Added(_)))
            .count()
    }

    /// Total number of lines removed across all hunks.
    pub fn deletions(&self) -> usize {
        self.hunks
            .iter()
            .flat_map(|h| &h.lines)
            .filter(|l| matches!(l, DiffLine::Removed(_)))
            .count()
    }
}

/// A contiguous region of changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffHunk {
    /// Line number in the first text where this hunk starts (1-based).
    pub old_start: usize,
    /// Line number in the second text where this hunk starts (1-based).
    pub new_start: usize,
    pub lines: Vec<DiffLine>,
}

/// A single line in a diff hunk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiffLine {
    Context(String),
    Added(String),
    Removed(String),
}

/// Compute a line-by-line diff from `old` to `new`.
pub fn diff_license_texts(old: &str, new: &str) -> LicenseDiff {
    if old == new {
        return LicenseDiff {
            hunks: Vec::new(),
            similarity: 1.0,
        };
    }

    let similarity = TextDiff::from_words(old, new).ratio();
    let text_diff = TextDiff::from_lines(old, new);

    let mut hunks = Vec::new();
    for group in text_diff.grouped_ops(3) {
        let Some(first) = group.first() else {
            continue;
        };
        let mut hunk = DiffHunk {
            old_start: first.old_range().start + 1,
            new_start: first.new_range().start + 1,
            lines: Vec::new(),
        };

        for op in &group {
            for change in text_diff.iter_changes(op) {
                let text = change.value().trim_end_matches('\n').to_string();
                hunk.lines.push(match change.tag() {
                    ChangeTag::Equal => DiffLine::Context(text),
                    ChangeTag::Delete => DiffLine::Removed(text),
                    ChangeTag::Insert => DiffLine::Added(text),
                });
            }
        }
        hunks.push(hunk);
    }

    LicenseDiff { hunks, similarity }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_texts_no_diff() {
        let diff = diff_license_texts("a\nb\n", "a\nb\n");
        assert!(diff.is_empty());
        assert_eq!(diff.similarity, 1.0);
    }

    #[test]
    fn modified_line_shows_remove_and_add() {
        let diff = diff_license_texts("you may copy\nno warranty\n", "you may not copy\nno warranty\n");
        assert!(!diff.is_empty());
        assert_eq!(diff.additions(), 1);
        assert_eq!(diff.deletions(), 1);
        assert!(diff.similarity > 0.5 && diff.similarity < 1.0);
    }

    #[test]
    fn context_lines_present() {
        let old = "a\nb\nc\nd\ne\nf\ng\n";
        let new = "a\nb\nc\nX\ne\nf\ng\n";
        let diff = diff_license_texts(old, new);
        let hunk = &diff.hunks[0];
        assert!(hunk.lines.iter().any(|l| matches!(l, DiffLine::Context(_))));
        assert_eq!(hunk.old_start, 1);
    }

    #[test]
    fn unrelated_texts_low_similarity() {
        let diff = diff_license_texts("alpha beta gamma", "one two three four");
        assert!(diff.similarity < 0.5);
    }
}
