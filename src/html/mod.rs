//! HTML rendering of parsed diffs.
//!
//! Parsed [`FileDiff`]s are projected into a small serializable view model,
//! rendered through a Handlebars template that HTML-escapes every field, and
//! compacted by a [`Minifier`].

pub mod minify;
pub mod template;

use handlebars::Handlebars;
use serde::Serialize;

use crate::diff_file::{ChangeKind, FileDiff};
use crate::diff_utils::{Segment, pair_changes};
use crate::error::RenderError;

pub use minify::{HtmlMinifier, Minifier, TEXT_HTML};

const TEMPLATE_NAME: &str = "diff";

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Shown in the page's `<title>`.
    pub title: String,
    /// Lines with more characters than this are hidden behind a button.
    pub large_content_threshold: usize,
    /// Highlight the changed characters of paired removed/added lines.
    pub intra_line: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "DIFF".to_string(),
            large_content_threshold: 4000,
            intra_line: false,
        }
    }
}

#[derive(Serialize)]
struct HtmlLine<'a> {
    id: String,
    line_number: u32,
    class: Option<&'static str>,
    content: &'a str,
    is_large: bool,
    char_count: usize,
    segments: Option<Vec<Segment>>,
}

#[derive(Serialize)]
struct HtmlHunk<'a> {
    header: String,
    lines: Vec<HtmlLine<'a>>,
}

#[derive(Serialize)]
struct HtmlDiff<'a> {
    file_name: &'a str,
    added_count: usize,
    removed_count: usize,
    hunks: Vec<HtmlHunk<'a>>,
}

#[derive(Serialize)]
struct HtmlData<'a> {
    title: &'a str,
    styles: &'static str,
    script: &'static str,
    diffs: Vec<HtmlDiff<'a>>,
}

pub struct HtmlRenderer {
    options: RenderOptions,
    template: String,
    minifier: Box<dyn Minifier>,
}

impl HtmlRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            template: template::HTML_TEMPLATE.to_string(),
            minifier: Box::new(HtmlMinifier::new()),
        }
    }

    pub fn with_minifier(mut self, minifier: impl Minifier + 'static) -> Self {
        self.minifier = Box::new(minifier);
        self
    }

    /// Replaces the page template. It receives the same data as the built-in
    /// one: `title`, `styles`, `script` and `diffs`.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub fn render(&self, diffs: &[FileDiff]) -> Result<String, RenderError> {
        let data = HtmlData {
            title: &self.options.title,
            styles: template::CSS_STYLES,
            script: template::TOGGLE_SCRIPT,
            diffs: self.build_diffs(diffs),
        };

        let mut hb = Handlebars::new();
        hb.set_strict_mode(true);
        hb.register_template_string(TEMPLATE_NAME, &self.template)?;
        let output = hb.render(TEMPLATE_NAME, &data)?;

        let minified = self.minifier.minify(TEXT_HTML, &output)?;
        log::debug!(
            "rendered {} file(s): {} bytes, {} after minification",
            diffs.len(),
            output.len(),
            minified.len()
        );

        Ok(minified)
    }

    fn build_diffs<'a>(&self, diffs: &'a [FileDiff]) -> Vec<HtmlDiff<'a>> {
        let mut next_id = 0usize;
        let mut html_diffs = Vec::with_capacity(diffs.len());

        for diff in diffs {
            let mut html_diff = HtmlDiff {
                file_name: &diff.new_file,
                added_count: 0,
                removed_count: 0,
                hunks: Vec::with_capacity(diff.hunks.len()),
            };

            for hunk in &diff.hunks {
                let mut segments = if self.options.intra_line {
                    pair_changes(&hunk.changes)
                } else {
                    Vec::new()
                };

                let mut lines = Vec::with_capacity(hunk.changes.len());
                for (i, change) in hunk.changes.iter().enumerate() {
                    match change.kind() {
                        ChangeKind::Added => html_diff.added_count += 1,
                        ChangeKind::Removed => html_diff.removed_count += 1,
                        ChangeKind::Unchanged => {}
                    }

                    let content = change.content();
                    let char_count = content.chars().count();
                    next_id += 1;

                    lines.push(HtmlLine {
                        id: format!("line-{next_id}"),
                        line_number: change.display_line(),
                        class: change.kind().css_class(),
                        content,
                        is_large: char_count > self.options.large_content_threshold,
                        char_count,
                        segments: segments.get_mut(i).and_then(Option::take),
                    });
                }

                html_diff.hunks.push(HtmlHunk {
                    header: hunk.to_string(),
                    lines,
                });
            }

            html_diffs.push(html_diff);
        }

        html_diffs
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

/// Renders `diffs` as one standalone HTML page with the default options.
pub fn generate_html(diffs: &[FileDiff]) -> Result<String, RenderError> {
    HtmlRenderer::default().render(diffs)
}
