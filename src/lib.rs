//! # post-outline
//!
//! Builds the sidebar table of contents for blog post pages and a fallback notice for comment
//! widgets blocked by tracking protection.
//!
//! ## What it does
//!
//! Once the page is ready, every `h2` inside `article.post div.content` gets an `id` derived from
//! its markup (spaces become hyphens) and a matching `<li><a href="#id">…</a></li>` is appended to
//! `div#outline ul`. The outline is revealed only when the post has more than four such headings.
//! Separately, an empty `#disqus_thread` placeholder gets a short paragraph explaining that the
//! comments were probably blocked.
//!
//! ## Stored pages
//!
//! ```rust
//! use post_outline::{DomTree, ElementNode, build_outline_and_notices};
//!
//! # fn main() -> post_outline::Result<()> {
//! let mut content = ElementNode::new("div").with_attribute("class", "content");
//! for title in ["Intro", "Getting Started", "Usage", "API", "FAQ"] {
//!     content.add_child(ElementNode::new("h2").with_text(title));
//! }
//! let article = ElementNode::new("article")
//!     .with_attribute("class", "post")
//!     .with_children(vec![content]);
//! let outline = ElementNode::new("div")
//!     .with_attribute("id", "outline")
//!     .with_visibility(false)
//!     .with_children(vec![ElementNode::new("ul")]);
//!
//! let mut page = DomTree::new(ElementNode::new("body").with_children(vec![outline, article]));
//! let report = build_outline_and_notices(&mut page)?;
//!
//! assert_eq!(report.outline.entries()[1].target_id, "Getting-Started");
//! # Ok(())
//! # }
//! ```
//!
//! ## Live pages
//!
//! ```rust,no_run
//! use post_outline::{BrowserSession, LaunchOptions, OutlineOptions};
//!
//! # fn main() -> post_outline::Result<()> {
//! let session = BrowserSession::launch(LaunchOptions::default())?;
//! let report = session.outline_page("https://blog.example.com/post", &OutlineOptions::default())?;
//! println!("{}", report.to_json()?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`dom`]: page document model, selectors, and the in-memory surface
//! - [`surface`]: the [`RenderingSurface`] trait the pass runs against
//! - [`outline`]: identifier derivation, outline assembly, reports
//! - [`notice`]: comment fallback notice
//! - [`browser`]: Chrome session and the tab-backed surface
//! - [`error`]: Error types and result aliases

pub mod browser;
pub mod dom;
pub mod error;
pub mod notice;
pub mod outline;
pub mod surface;

pub use browser::{BrowserSession, ConnectionOptions, LaunchOptions, TabNode, TabSurface};
pub use dom::{DomTree, ElementNode, NodePath, Selector, load_page};
pub use error::{OutlineError, Result};
pub use notice::ensure_comment_notice;
pub use outline::{
    OptOutPolicy, OutlineBuilder, OutlineEntry, OutlineOptions, OutlineOutcome, PageReport,
    build_outline_and_notices, build_outline_and_notices_with, generate_id,
};
pub use surface::RenderingSurface;
