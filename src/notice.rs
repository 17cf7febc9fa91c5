//! Fallback notice for an empty comment widget.
//!
//! The third-party widget fills its placeholder from an async script. When tracking protection
//! blocks that script the placeholder stays empty, so an empty placeholder at page-ready gets a
//! short explanation. A widget that is merely slow also gets the notice; the check runs once and
//! does not wait.

use crate::dom::{ElementNode, Selector};
use crate::error::Result;
use crate::outline::selectors;
use crate::surface::RenderingSurface;

/// Class of the inserted paragraph
pub const NOTICE_CLASS: &str = "comment-error-message";

/// Text of the inserted paragraph
pub const NOTICE_TEXT: &str =
    "Your browser settings(Tracking Protection) are maybe blocking the comment section !";

/// The paragraph appended to an empty placeholder
pub fn notice_paragraph() -> ElementNode {
    ElementNode::new("p")
        .with_attribute("class", NOTICE_CLASS)
        .with_text(NOTICE_TEXT)
}

/// Append the notice to the comment placeholder when it has no child elements.
///
/// Only the first `#disqus_thread` is checked, as an id lookup would. Returns whether a notice
/// was inserted. A page without a placeholder is left alone.
pub fn ensure_comment_notice<S: RenderingSurface>(surface: &mut S) -> Result<bool> {
    let Some(placeholder) =
        surface.query_first(&Selector::parse(selectors::COMMENT_PLACEHOLDER)?)?
    else {
        return Ok(false);
    };

    if surface.child_count(&placeholder)? > 0 {
        return Ok(false);
    }

    surface.append_child(&placeholder, notice_paragraph())?;
    log::info!("Comment widget placeholder is empty, inserted fallback notice");
    Ok(true)
}
