//! The rendering surface the outline builder works against.
//!
//! Page structure is never looked up through ambient globals: callers hand a surface to
//! [`crate::build_outline_and_notices`], which keeps the builder testable against an in-memory
//! [`crate::DomTree`] and runnable against a live tab through [`crate::TabSurface`].

use crate::dom::{ElementNode, Selector};
use crate::error::Result;
use std::fmt::Debug;

/// Structural query and mutation interface of a rendered page
pub trait RenderingSurface {
    /// Handle to an element on this surface
    type Node: Clone + Debug;

    /// Every element matching `selector`, in document order
    fn query_all(&self, selector: &Selector) -> Result<Vec<Self::Node>>;

    /// Inner markup of an element, tags included
    fn inner_html(&self, node: &Self::Node) -> Result<String>;

    /// Set or overwrite an attribute
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str) -> Result<()>;

    /// Append `child` as the last child of `parent`
    fn append_child(&mut self, parent: &Self::Node, child: ElementNode) -> Result<()>;

    /// Show or hide an element
    fn set_visible(&mut self, node: &Self::Node, visible: bool) -> Result<()>;

    /// Number of child elements (text is not counted)
    fn child_count(&self, node: &Self::Node) -> Result<usize>;

    /// First element matching `selector`, if any
    fn query_first(&self, selector: &Selector) -> Result<Option<Self::Node>> {
        Ok(self.query_all(selector)?.into_iter().next())
    }

    /// Whether anything matches `selector`
    fn exists(&self, selector: &Selector) -> Result<bool> {
        Ok(!self.query_all(selector)?.is_empty())
    }
}
