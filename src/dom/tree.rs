use crate::dom::element::ElementNode;
use crate::dom::selector::Selector;
use crate::error::{OutlineError, Result};
use crate::surface::RenderingSurface;
use std::fmt;

/// Location of an element as child indices from the root.
///
/// Appending children never shifts existing indices, so paths stay valid for the whole
/// outline pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// Path of the root element
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Path of the `index`-th child of this element
    pub fn child(&self, index: usize) -> Self {
        let mut path = self.0.clone();
        path.push(index);
        Self(path)
    }

    /// Nesting depth (0 for the root)
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for index in &self.0 {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}

/// An owned page document usable as a rendering surface
#[derive(Debug, Clone, PartialEq)]
pub struct DomTree {
    /// Root element of the page
    pub root: ElementNode,
}

impl DomTree {
    /// Create a tree from its root element
    pub fn new(root: ElementNode) -> Self {
        Self { root }
    }

    /// Load a page stored as a JSON element tree
    pub fn from_json(json: &str) -> Result<Self> {
        let root: ElementNode = serde_json::from_str(json)
            .map_err(|e| OutlineError::PageParseFailed(format!("Failed to parse page JSON: {}", e)))?;
        Ok(Self::new(root))
    }

    /// Convert the page to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.root)
            .map_err(|e| OutlineError::PageParseFailed(format!("Failed to serialize page to JSON: {}", e)))
    }

    /// Serialize the page as HTML
    pub fn to_html(&self) -> String {
        self.root.to_html()
    }

    /// Resolve a path to its element
    pub fn node(&self, path: &NodePath) -> Option<&ElementNode> {
        path.0
            .iter()
            .try_fold(&self.root, |node, &index| node.children.get(index))
    }

    fn node_mut(&mut self, path: &NodePath) -> Result<&mut ElementNode> {
        let mut node = &mut self.root;
        for &index in &path.0 {
            node = node
                .children
                .get_mut(index)
                .ok_or_else(|| OutlineError::NodeNotFound(path.to_string()))?;
        }
        Ok(node)
    }

    fn resolve(&self, path: &NodePath) -> Result<&ElementNode> {
        self.node(path)
            .ok_or_else(|| OutlineError::NodeNotFound(path.to_string()))
    }

    /// Count total elements in the tree
    pub fn count_elements(&self) -> usize {
        Self::count_elements_recursive(&self.root)
    }

    fn count_elements_recursive(node: &ElementNode) -> usize {
        1 + node
            .children
            .iter()
            .map(Self::count_elements_recursive)
            .sum::<usize>()
    }

    /// Pre-order walk collecting the paths of matching elements
    fn collect_matches<'a>(
        node: &'a ElementNode,
        path: NodePath,
        chain: &mut Vec<&'a ElementNode>,
        selector: &Selector,
        matches: &mut Vec<NodePath>,
    ) {
        chain.push(node);
        if selector.matches(chain) {
            matches.push(path.clone());
        }
        for (i, child) in node.children.iter().enumerate() {
            Self::collect_matches(child, path.child(i), chain, selector, matches);
        }
        chain.pop();
    }
}

impl RenderingSurface for DomTree {
    type Node = NodePath;

    fn query_all(&self, selector: &Selector) -> Result<Vec<NodePath>> {
        let mut matches = Vec::new();
        let mut chain = Vec::new();
        Self::collect_matches(&self.root, NodePath::root(), &mut chain, selector, &mut matches);
        Ok(matches)
    }

    fn inner_html(&self, node: &NodePath) -> Result<String> {
        Ok(self.resolve(node)?.inner_html())
    }

    fn set_attribute(&mut self, node: &NodePath, name: &str, value: &str) -> Result<()> {
        self.node_mut(node)?.add_attribute(name, value);
        Ok(())
    }

    fn append_child(&mut self, parent: &NodePath, child: ElementNode) -> Result<()> {
        self.node_mut(parent)?.add_child(child);
        Ok(())
    }

    fn set_visible(&mut self, node: &NodePath, visible: bool) -> Result<()> {
        let element = self.node_mut(node)?;
        element.is_visible = visible;
        if visible {
            element.attributes.shift_remove("hidden");
            element.clear_display_none();
        }
        Ok(())
    }

    fn child_count(&self, node: &NodePath) -> Result<usize> {
        Ok(self.resolve(node)?.child_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_tree() -> DomTree {
        let mut root = ElementNode::new("body");

        let mut aside = ElementNode::new("aside");
        let mut outline = ElementNode::new("div")
            .with_attribute("id", "outline")
            .with_visibility(false);
        outline.add_child(ElementNode::new("ul"));
        aside.add_child(outline);

        let mut article = ElementNode::new("article").with_attribute("class", "post");
        let mut content = ElementNode::new("div").with_attribute("class", "content");
        content.add_child(ElementNode::new("h2").with_text("First"));
        content.add_child(ElementNode::new("p").with_text("Body"));
        content.add_child(ElementNode::new("h2").with_text("Second <em>part</em>"));
        article.add_child(content);

        root.add_child(aside);
        root.add_child(article);

        DomTree::new(root)
    }

    #[test]
    fn test_dom_tree_creation() {
        let tree = create_test_tree();
        assert_eq!(tree.root.tag_name, "body");
        assert_eq!(tree.root.children.len(), 2);
    }

    #[test]
    fn test_count_elements() {
        // body, aside, div#outline, ul, article, div.content, h2, p, h2
        assert_eq!(create_test_tree().count_elements(), 9);
    }

    #[test]
    fn test_query_all_document_order() {
        let tree = create_test_tree();
        let selector = Selector::parse("article.post div.content h2").unwrap();

        let headings = tree.query_all(&selector).unwrap();
        assert_eq!(headings, vec![NodePath(vec![1, 0, 0]), NodePath(vec![1, 0, 2])]);
        assert_eq!(tree.inner_html(&headings[1]).unwrap(), "Second <em>part</em>");
    }

    #[test]
    fn test_query_includes_root() {
        let tree = create_test_tree();
        let found = tree.query_all(&Selector::parse("body").unwrap()).unwrap();
        assert_eq!(found, vec![NodePath::root()]);
    }

    #[test]
    fn test_query_first_and_exists() {
        let tree = create_test_tree();
        let list = Selector::parse("div#outline ul").unwrap();
        let marker = Selector::parse("span.no-outline").unwrap();

        assert_eq!(tree.query_first(&list).unwrap(), Some(NodePath(vec![0, 0, 0])));
        assert!(tree.exists(&list).unwrap());
        assert!(!tree.exists(&marker).unwrap());
    }

    #[test]
    fn test_mutations() {
        let mut tree = create_test_tree();
        let outline = NodePath(vec![0, 0]);
        let list = outline.child(0);

        tree.append_child(&list, ElementNode::new("li").with_text("entry")).unwrap();
        tree.set_visible(&outline, true).unwrap();
        tree.set_attribute(&NodePath(vec![1, 0, 0]), "id", "First").unwrap();

        assert_eq!(tree.child_count(&list).unwrap(), 1);
        assert!(tree.node(&outline).unwrap().is_visible);
        assert_eq!(
            tree.node(&NodePath(vec![1, 0, 0])).unwrap().id(),
            Some(&"First".to_string())
        );
    }

    #[test]
    fn test_stale_path() {
        let mut tree = create_test_tree();
        let missing = NodePath(vec![5, 1]);

        assert!(tree.node(&missing).is_none());
        assert!(matches!(
            tree.set_attribute(&missing, "id", "x"),
            Err(OutlineError::NodeNotFound(path)) if path == "/5/1"
        ));
        assert!(tree.child_count(&missing).is_err());
    }

    #[test]
    fn test_json_round_trip_preserves_page() {
        let tree = create_test_tree();
        let json = tree.to_json().unwrap();
        assert!(json.contains("\"tag_name\": \"article\""));
        assert!(json.contains("\"is_visible\": false"));

        let loaded = DomTree::from_json(&json).unwrap();
        assert_eq!(loaded, tree);
    }

    #[test]
    fn test_from_json_error() {
        let err = DomTree::from_json("{\"children\": []}").unwrap_err();
        assert!(matches!(err, OutlineError::PageParseFailed(_)));
    }

    #[test]
    fn test_node_path_display() {
        assert_eq!(NodePath::root().to_string(), "/");
        assert_eq!(NodePath::root().child(2).child(0).to_string(), "/2/0");
        assert_eq!(NodePath::root().child(2).depth(), 1);
    }
}
