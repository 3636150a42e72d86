//! Context assembly
//!
//! Fetched excerpts are labeled with their search position and source URL, joined
//! in fetch order and cut to a global character budget before they reach the
//! language model.

use crate::extract::truncate_chars;

/// Appended after a hard cut of the assembled context
pub const TRUNCATION_MARKER: &str = "\n\n[...truncated...]";

const EXCERPT_SEPARATOR: &str = "\n\n";

/// Visible text of one successfully fetched page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageExcerpt {
    /// 1-based position of the page in the search results
    pub position: usize,
    pub url: String,
    pub text: String,
}

impl PageExcerpt {
    pub fn new(position: usize, url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            position,
            url: url.into(),
            text: text.into(),
        }
    }

    fn label(&self) -> String {
        format!("--- Page {}: {} ---", self.position, self.url)
    }
}

/// The labeled, capped context handed to the summarizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledContext {
    text: String,
    truncated: bool,
}

impl AssembledContext {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the total cap forced a cut
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

/// Join `excerpts` into one labeled context.
///
/// Each excerpt keeps at most `per_page_cap` characters of text. If the joined
/// result exceeds `total_cap` characters it is cut there and
/// [`TRUNCATION_MARKER`] is appended. Returns `None` when there is nothing to
/// assemble.
pub fn assemble(
    excerpts: &[PageExcerpt],
    per_page_cap: usize,
    total_cap: usize,
) -> Option<AssembledContext> {
    if excerpts.is_empty() {
        return None;
    }

    let joined = excerpts
        .iter()
        .map(|excerpt| {
            format!(
                "{}\n{}",
                excerpt.label(),
                truncate_chars(&excerpt.text, per_page_cap)
            )
        })
        .collect::<Vec<_>>()
        .join(EXCERPT_SEPARATOR);

    let cut = truncate_chars(&joined, total_cap);
    if cut.len() == joined.len() {
        return Some(AssembledContext {
            text: joined,
            truncated: false,
        });
    }

    let mut text = String::with_capacity(cut.len() + TRUNCATION_MARKER.len());
    text.push_str(cut);
    text.push_str(TRUNCATION_MARKER);

    Some(AssembledContext {
        text,
        truncated: true,
    })
}
