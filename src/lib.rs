pub mod diff_file;
pub mod diff_utils;
pub mod error;
pub mod git;
pub mod html;
pub mod parser;


pub use diff_file::{Change, ChangeKind, FileDiff, Hunk};
pub use error::{FormatError, MinifyError, RenderError};
pub use html::{HtmlRenderer, RenderOptions, generate_html};
pub use parser::{parse_patch_set, parse_unified_diff};
