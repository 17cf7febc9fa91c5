use crate::dom::ElementNode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One link of the outline, derived from a single heading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct OutlineEntry {
    /// Heading inner markup, shown as the link content
    pub display_text: String,

    /// Identifier written onto the heading and used as the link fragment
    pub target_id: String,
}

impl OutlineEntry {
    pub fn new(display_text: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self {
            display_text: display_text.into(),
            target_id: target_id.into(),
        }
    }

    /// Link address, e.g. `#Getting-Started`
    pub fn href(&self) -> String {
        format!("#{}", self.target_id)
    }

    /// `<li><a href="#target">display</a></li>`
    pub fn to_list_item(&self) -> ElementNode {
        let link = ElementNode::new("a")
            .with_attribute("href", self.href())
            .with_text(self.display_text.clone());
        ElementNode::new("li").with_children(vec![link])
    }
}
