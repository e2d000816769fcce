use minify_html::Cfg;

use crate::error::MinifyError;

pub const TEXT_HTML: &str = "text/html";

/// Removes insignificant whitespace from a rendered document.
pub trait Minifier {
    fn minify(&self, media_type: &str, input: &str) -> Result<String, MinifyError>;
}

/// `minify-html` backed compaction. Inline stylesheets are minified with the
/// document; inline scripts are left as written.
pub struct HtmlMinifier {
    cfg: Cfg,
}

impl HtmlMinifier {
    pub fn new() -> Self {
        let mut cfg = Cfg::new();
        cfg.minify_css = true;
        cfg.minify_js = false;
        cfg.keep_closing_tags = true;
        cfg.keep_html_and_head_opening_tags = true;
        Self { cfg }
    }
}

impl Default for HtmlMinifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Minifier for HtmlMinifier {
    fn minify(&self, media_type: &str, input: &str) -> Result<String, MinifyError> {
        if media_type != TEXT_HTML {
            return Err(MinifyError::UnsupportedMediaType(media_type.to_string()));
        }

        let output = minify_html::minify(input.as_bytes(), &self.cfg);
        String::from_utf8(output).map_err(|_| MinifyError::InvalidUtf8)
    }
}
