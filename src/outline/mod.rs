//! Post outline generation
//!
//! Headings inside the post content get an identifier derived from their markup and a matching
//! link in the sidebar outline. See [`build_outline_and_notices`] for the page-ready entry point.

pub mod builder;
pub mod config;
pub mod entry;
pub mod identifier;
pub mod report;

pub use builder::{HEADING_THRESHOLD, OutlineBuilder};
pub use config::{OptOutPolicy, OutlineOptions};
pub use entry::OutlineEntry;
pub use identifier::generate_id;
pub use report::{OutlineOutcome, PageReport};

use crate::error::Result;
use crate::notice::ensure_comment_notice;
use crate::surface::RenderingSurface;

/// Fixed selectors of the blog page template
pub mod selectors {
    /// Sidebar outline container
    pub const OUTLINE_CONTAINER: &str = "div#outline";
    /// List receiving the outline entries
    pub const OUTLINE_LIST: &str = "div#outline ul";
    /// Marker a post uses to opt out of the outline
    pub const NO_OUTLINE_MARKER: &str = "span.no-outline";
    /// Headings listed in the outline
    pub const POST_HEADINGS: &str = "article.post div.content h2";
    /// Placeholder filled by the comment widget
    pub const COMMENT_PLACEHOLDER: &str = "#disqus_thread";
}

/// Run the page-ready pass with default options: build the outline, then check the comment
/// placeholder.
pub fn build_outline_and_notices<S: RenderingSurface>(surface: &mut S) -> Result<PageReport> {
    build_outline_and_notices_with(surface, &OutlineOptions::default())
}

/// Run the page-ready pass with explicit options
pub fn build_outline_and_notices_with<S: RenderingSurface>(
    surface: &mut S,
    options: &OutlineOptions,
) -> Result<PageReport> {
    let outline = OutlineBuilder::new(options.clone()).build(surface)?;
    let comment_notice = ensure_comment_notice(surface)?;
    Ok(PageReport {
        outline,
        comment_notice,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Selector;

    #[test]
    fn test_selectors_parse() {
        for source in [
            selectors::OUTLINE_CONTAINER,
            selectors::OUTLINE_LIST,
            selectors::NO_OUTLINE_MARKER,
            selectors::POST_HEADINGS,
            selectors::COMMENT_PLACEHOLDER,
        ] {
            assert!(Selector::parse(source).is_ok(), "{} should parse", source);
        }
    }
}
