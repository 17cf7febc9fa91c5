use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Elements serialized without a closing tag
const VOID_TAGS: [&str; 8] = ["area", "br", "col", "hr", "img", "input", "link", "meta"];

/// Represents a page element
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct ElementNode {
    /// HTML tag name (e.g., "div", "h2", "ul")
    pub tag_name: String,

    /// Element attributes in source order (e.g., id, class, href)
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, String>,

    /// Inner markup rendered verbatim ahead of the children.
    /// May contain inline tags such as `<code>`; it is not escaped on output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,

    /// Child elements
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementNode>,

    /// Whether the element is shown
    #[serde(default = "default_visible")]
    pub is_visible: bool,
}

fn default_visible() -> bool {
    true
}

impl ElementNode {
    /// Create a new, visible ElementNode
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: IndexMap::new(),
            text_content: None,
            children: Vec::new(),
            is_visible: true,
        }
    }

    /// Builder method: set a single attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_attribute(key, value);
        self
    }

    /// Builder method: set inner markup
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_content = Some(text.into());
        self
    }

    /// Builder method: set children
    pub fn with_children(mut self, children: Vec<ElementNode>) -> Self {
        self.children = children;
        self
    }

    /// Builder method: set visibility
    pub fn with_visibility(mut self, visible: bool) -> Self {
        self.is_visible = visible;
        self
    }

    /// Add or overwrite an attribute, keeping its original position when it already exists
    pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Add a child element
    pub fn add_child(&mut self, child: ElementNode) {
        self.children.push(child);
    }

    /// Get attribute value by key
    pub fn get_attribute(&self, key: &str) -> Option<&String> {
        self.attributes.get(key)
    }

    /// Check if element has a specific class
    pub fn has_class(&self, class_name: &str) -> bool {
        self.attributes
            .get("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class_name))
    }

    /// Get element ID
    pub fn id(&self) -> Option<&String> {
        self.attributes.get("id")
    }

    /// Check if element is a specific tag
    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag_name.eq_ignore_ascii_case(tag)
    }

    /// Drop `display: none` from the inline style, removing the attribute if nothing is left
    pub fn clear_display_none(&mut self) {
        let Some(style) = self.attributes.get("style") else {
            return;
        };

        let kept: Vec<&str> = style
            .split(';')
            .map(str::trim)
            .filter(|decl| !decl.is_empty())
            .filter(|decl| {
                let mut parts = decl.splitn(2, ':');
                let property = parts.next().unwrap_or("").trim();
                let value = parts.next().unwrap_or("").trim();
                !(property.eq_ignore_ascii_case("display") && value.eq_ignore_ascii_case("none"))
            })
            .collect();

        if kept.is_empty() {
            self.attributes.shift_remove("style");
        } else {
            let joined = kept.join("; ");
            self.add_attribute("style", joined);
        }
    }

    /// Number of child elements
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Inner markup: the verbatim text followed by each child's serialized markup
    pub fn inner_html(&self) -> String {
        let mut html = self.text_content.clone().unwrap_or_default();
        for child in &self.children {
            child.write_html(&mut html);
        }
        html
    }

    /// Serialize this element and its subtree as HTML
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        self.write_html(&mut html);
        html
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag_name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape_attribute(value));
            out.push('"');
        }
        if !self.is_visible && !self.attributes.contains_key("hidden") {
            out.push_str(" hidden");
        }
        out.push('>');

        if VOID_TAGS.iter().any(|&tag| self.is_tag(tag)) {
            return;
        }

        out.push_str(&self.inner_html());
        out.push_str("</");
        out.push_str(&self.tag_name);
        out.push('>');
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
