//! Page document model
//!
//! This module provides an owned representation of a rendered page:
//! - ElementNode: a page element with ordered attributes and inner markup
//! - Selector: the CSS selector subset used to locate outline parts
//! - DomTree: a whole page, usable as an in-memory rendering surface

pub mod element;
pub mod selector;
pub mod tree;

pub use element::ElementNode;
pub use selector::{Combinator, Compound, Selector};
pub use tree::{DomTree, NodePath};

use crate::error::{OutlineError, Result};
use std::path::Path;

/// Load a page document stored as JSON on disk
pub fn load_page(path: impl AsRef<Path>) -> Result<DomTree> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| {
        OutlineError::PageParseFailed(format!("Failed to read {}: {}", path.display(), e))
    })?;
    DomTree::from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_node_export() {
        let element = ElementNode::new("h2");
        assert_eq!(element.tag_name, "h2");
    }

    #[test]
    fn test_dom_tree_export() {
        let tree = DomTree::new(ElementNode::new("body"));
        assert_eq!(tree.root.tag_name, "body");
    }

    #[test]
    fn test_load_page_missing_file() {
        let err = load_page("/nonexistent/page.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/page.json"));
    }
}
