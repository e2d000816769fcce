use serde::Serialize;
use similar::{Algorithm, ChangeTag, TextDiff};

use crate::diff_file::{Change, ChangeKind};

/// Lines longer than this are never compared character by character.
const MAX_INLINE_LEN: usize = 600;
const MIN_SIMILARITY: f32 = 0.3;

/// A run of text within one line, flagged when it differs from the paired line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub changed: bool,
}

fn push_segment(segments: &mut Vec<Segment>, text: &str, changed: bool) {
    match segments.last_mut() {
        Some(last) if last.changed == changed => last.text.push_str(text),
        _ => segments.push(Segment {
            text: text.to_string(),
            changed,
        }),
    }
}

/// Computes the segments of a removed line and its replacement.
/// Returns (segments of old text, segments of new text).
pub fn inline_segments(old_text: &str, new_text: &str) -> (Vec<Segment>, Vec<Segment>) {
    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_chars(old_text, new_text);

    let mut old_segments = Vec::new();
    let mut new_segments = Vec::new();

    for change in diff.iter_all_changes() {
        let value = change.value();
        match change.tag() {
            ChangeTag::Equal => {
                push_segment(&mut old_segments, value, false);
                push_segment(&mut new_segments, value, false);
            }
            ChangeTag::Delete => push_segment(&mut old_segments, value, true),
            ChangeTag::Insert => push_segment(&mut new_segments, value, true),
        }
    }

    (old_segments, new_segments)
}

fn should_do_inline(old: &str, new: &str) -> bool {
    old.len() <= MAX_INLINE_LEN && new.len() <= MAX_INLINE_LEN
}

/// Finds removed runs immediately followed by an added run of the same length
/// and computes segments for each pair. Lines without a partner get `None`.
pub fn pair_changes(changes: &[Change]) -> Vec<Option<Vec<Segment>>> {
    let mut result = vec![None; changes.len()];
    let mut i = 0;

    while i < changes.len() {
        if changes[i].kind() != ChangeKind::Removed {
            i += 1;
            continue;
        }

        let remove_start = i;
        let mut j = i;
        while j < changes.len() && changes[j].kind() == ChangeKind::Removed {
            j += 1;
        }
        let insert_start = j;
        while j < changes.len() && changes[j].kind() == ChangeKind::Added {
            j += 1;
        }

        let removed = &changes[remove_start..insert_start];
        let added = &changes[insert_start..j];

        if removed.len() == added.len() {
            let has_similar = removed.iter().zip(added).any(|(old, new)| {
                should_do_inline(old.content(), new.content())
                    && TextDiff::from_chars(old.content(), new.content()).ratio() > MIN_SIMILARITY
            });

            if has_similar {
                for (k, (old, new)) in removed.iter().zip(added).enumerate() {
                    if !should_do_inline(old.content(), new.content()) {
                        continue;
                    }
                    let (old_segments, new_segments) = inline_segments(old.content(), new.content());
                    result[remove_start + k] = Some(old_segments);
                    result[insert_start + k] = Some(new_segments);
                }
            }
        }

        i = j;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_inline_segments() {
        let (old, new) = inline_segments("foo bar baz", "foo qux baz");

        assert_eq!(joined(&old), "foo bar baz");
        assert_eq!(joined(&new), "foo qux baz");
        assert!(old.iter().filter(|s| s.changed).all(|s| "bar".contains(&s.text)));
        assert!(new.iter().filter(|s| s.changed).all(|s| "qux".contains(&s.text)));
        assert_eq!(old.first().map(|s| s.changed), Some(false));
        assert_eq!(old.last().map(|s| s.text.as_str()), Some(" baz"));
    }

    #[test]
    fn test_inline_segments_identical() {
        let (old, new) = inline_segments("same", "same");
        assert_eq!(old, vec![Segment { text: "same".into(), changed: false }]);
        assert_eq!(new, old);
    }

    #[test]
    fn test_pair_changes() {
        let changes = vec![
            Change::new_unchanged("ctx", 1, 1),
            Change::new_removed("let x = 1;", 2),
            Change::new_added("let x = 2;", 2),
            Change::new_added("extra", 3),
        ];
        let paired = pair_changes(&changes);

        // The added run is longer than the removed one, so nothing pairs.
        assert!(paired.iter().all(Option::is_none));

        let changes = vec![
            Change::new_removed("let x = 1;", 2),
            Change::new_added("let x = 2;", 2),
            Change::new_unchanged("ctx", 3, 3),
        ];
        let paired = pair_changes(&changes);
        assert!(paired[0].is_some());
        assert!(paired[1].is_some());
        assert!(paired[2].is_none());
    }

    #[test]
    fn test_pair_changes_dissimilar() {
        let changes = vec![
            Change::new_removed("abcdefgh", 1),
            Change::new_added("12345678", 1),
        ];
        assert!(pair_changes(&changes).iter().all(Option::is_none));
    }
}
