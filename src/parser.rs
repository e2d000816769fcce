use once_cell::sync::Lazy;
use regex::Regex;

use crate::diff_file::{Change, FileDiff, Hunk};
use crate::error::FormatError;

const OLD_FILE_MARKER: &str = "---";
const NEW_FILE_MARKER: &str = "+++";
const HUNK_MARKER: &str = "@@ ";

static HUNK_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@(.*)$")
        .expect("hunk header pattern is valid")
});

/// Parses a single file's unified diff.
///
/// The first two lines must be the `---`/`+++` headers. Everything after them
/// is read as hunks; lines that belong to no hunk are skipped.
pub fn parse_unified_diff(diff_text: &str) -> Result<FileDiff, FormatError> {
    let lines: Vec<&str> = diff_text.split('\n').collect();
    parse_lines(&lines, 0)
}

/// Parses a patch that may touch several files, such as `git diff` output.
///
/// A new file starts at every `--- ` line directly followed by a `+++ ` line.
/// Anything before the first such pair is ignored.
pub fn parse_patch_set(diff_text: &str) -> Result<Vec<FileDiff>, FormatError> {
    let lines: Vec<&str> = diff_text.split('\n').collect();
    if lines.len() < 2 {
        return Err(FormatError::NotEnoughLines);
    }

    let starts: Vec<usize> = lines
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0].starts_with("--- ") && pair[1].starts_with("+++ "))
        .map(|(i, _)| i)
        .collect();

    if starts.is_empty() {
        return Err(FormatError::MissingFileHeaders);
    }
    log::debug!("patch set contains {} file(s)", starts.len());

    let mut files = Vec::with_capacity(starts.len());
    for (n, &start) in starts.iter().enumerate() {
        let end = starts.get(n + 1).copied().unwrap_or(lines.len());
        files.push(parse_lines(&lines[start..end], start)?);
    }

    Ok(files)
}

/// `offset` is the index of `lines[0]` in the full input, for error reporting.
fn parse_lines(lines: &[&str], offset: usize) -> Result<FileDiff, FormatError> {
    if lines.len() < 2 {
        return Err(FormatError::NotEnoughLines);
    }

    if !lines[0].starts_with(OLD_FILE_MARKER) || !lines[1].starts_with(NEW_FILE_MARKER) {
        return Err(FormatError::MissingFileHeaders);
    }

    let old_file = lines[0].strip_prefix("--- ").unwrap_or(lines[0]);
    let new_file = lines[1].strip_prefix("+++ ").unwrap_or(lines[1]);
    let mut diff = FileDiff::new(old_file, new_file);

    let mut current_hunk: Option<Hunk> = None;
    let mut old_line_num = 0u32;
    let mut new_line_num = 0u32;

    for (i, line) in lines.iter().enumerate().skip(2) {
        if line.is_empty() {
            continue;
        }

        if line.starts_with(HUNK_MARKER) {
            if let Some(hunk) = current_hunk.take() {
                diff.hunks.push(hunk);
            }

            let hunk = parse_hunk_header(line, offset + i + 1)?;
            old_line_num = hunk.old_start;
            new_line_num = hunk.new_start;
            current_hunk = Some(hunk);
            continue;
        }

        let Some(hunk) = current_hunk.as_mut() else {
            continue;
        };

        if let Some(content) = line.strip_prefix(' ') {
            hunk.changes
                .push(Change::new_unchanged(content, old_line_num, new_line_num));
            old_line_num = old_line_num.saturating_add(1);
            new_line_num = new_line_num.saturating_add(1);
        } else if let Some(content) = line.strip_prefix('+') {
            hunk.changes.push(Change::new_added(content, new_line_num));
            new_line_num = new_line_num.saturating_add(1);
        } else if let Some(content) = line.strip_prefix('-') {
            hunk.changes.push(Change::new_removed(content, old_line_num));
            old_line_num = old_line_num.saturating_add(1);
        } else {
            // Includes "\ No newline at end of file".
            log::trace!("dropping line {}: {line:?}", offset + i + 1);
        }
    }

    if let Some(hunk) = current_hunk {
        diff.hunks.push(hunk);
    }

    log::debug!("parsed {} hunk(s) for {}", diff.hunks.len(), diff.new_file);
    Ok(diff)
}

/// Parses `@@ -A[,B] +C[,D] @@[context]`. Omitted counts default to 1.
fn parse_hunk_header(header: &str, line: usize) -> Result<Hunk, FormatError> {
    let captures = HUNK_HEADER
        .captures(header)
        .ok_or_else(|| FormatError::InvalidHunkHeader {
            line,
            header: header.to_string(),
        })?;

    let number = |index: usize| -> Result<Option<u32>, FormatError> {
        captures
            .get(index)
            .map(|m| {
                m.as_str().parse::<u32>().map_err(|_| FormatError::InvalidNumber {
                    line,
                    value: m.as_str().to_string(),
                })
            })
            .transpose()
    };

    // Groups 1 and 3 are mandatory in the pattern, so they are always present.
    let old_start = number(1)?.unwrap_or_default();
    let old_count = number(2)?.unwrap_or(1);
    let new_start = number(3)?.unwrap_or_default();
    let new_count = number(4)?.unwrap_or(1);
    let context = captures.get(5).map_or("", |m| m.as_str().trim());

    Ok(Hunk::new(old_start, old_count, new_start, new_count).with_context(context))
}
