use crate::dom::{ElementNode, Selector};
use crate::error::{OutlineError, Result};
use crate::surface::RenderingSurface;
use headless_chrome::Tab;
use serde_json::Value;
use std::sync::Arc;

/// Handle to an element of a live tab: the n-th match of a selector.
///
/// Handles are resolved again on every call, so they stay valid as long as the set of elements
/// matching `selector` does not change in front of `position`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabNode {
    pub selector: String,
    pub position: usize,
}

/// Rendering surface backed by a Chrome tab.
///
/// Each operation is a single `Runtime.evaluate`; arguments are embedded as JSON literals.
pub struct TabSurface {
    tab: Arc<Tab>,
}

impl TabSurface {
    pub fn new(tab: Arc<Tab>) -> Self {
        Self { tab }
    }

    /// Serialize the current document as HTML
    pub fn document_html(&self) -> Result<String> {
        let value = self.evaluate("document.documentElement.outerHTML")?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| OutlineError::EvaluationFailed("outerHTML was not a string".to_string()))
    }

    fn evaluate(&self, script: &str) -> Result<Value> {
        let result = self
            .tab
            .evaluate(script, false)
            .map_err(|e| OutlineError::EvaluationFailed(e.to_string()))?;
        Ok(result.value.unwrap_or(Value::Null))
    }

    /// Run `body` with `el` bound to the node; a missing node is an error
    fn evaluate_on(&self, node: &TabNode, body: &str) -> Result<Value> {
        let script = format!(
            "(function() {{ const el = document.querySelectorAll({})[{}]; if (!el) return null; {} }})()",
            js_string(&node.selector),
            node.position,
            body
        );
        match self.evaluate(&script)? {
            Value::Null => Err(OutlineError::NodeNotFound(format!(
                "{} [{}]",
                node.selector, node.position
            ))),
            value => Ok(value),
        }
    }
}

fn js_string(value: &str) -> String {
    Value::String(value.to_string()).to_string()
}

impl RenderingSurface for TabSurface {
    type Node = TabNode;

    fn query_all(&self, selector: &Selector) -> Result<Vec<TabNode>> {
        let script = format!(
            "document.querySelectorAll({}).length",
            js_string(selector.as_str())
        );
        let count = self.evaluate(&script)?.as_u64().ok_or_else(|| {
            OutlineError::EvaluationFailed(format!("No match count for '{}'", selector))
        })?;

        Ok((0..count as usize)
            .map(|position| TabNode {
                selector: selector.as_str().to_string(),
                position,
            })
            .collect())
    }

    fn inner_html(&self, node: &TabNode) -> Result<String> {
        let value = self.evaluate_on(node, "return el.innerHTML;")?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| OutlineError::EvaluationFailed("innerHTML was not a string".to_string()))
    }

    fn set_attribute(&mut self, node: &TabNode, name: &str, value: &str) -> Result<()> {
        let body = format!(
            "el.setAttribute({}, {}); return true;",
            js_string(name),
            js_string(value)
        );
        self.evaluate_on(node, &body)?;
        Ok(())
    }

    fn append_child(&mut self, parent: &TabNode, child: ElementNode) -> Result<()> {
        let body = format!(
            "el.insertAdjacentHTML('beforeend', {}); return true;",
            js_string(&child.to_html())
        );
        self.evaluate_on(parent, &body)?;
        Ok(())
    }

    fn set_visible(&mut self, node: &TabNode, visible: bool) -> Result<()> {
        let body = if visible {
            "el.hidden = false; el.style.display = ''; \
             if (getComputedStyle(el).display === 'none') el.style.display = 'block'; \
             return true;"
        } else {
            "el.style.display = 'none'; return true;"
        };
        self.evaluate_on(node, body)?;
        Ok(())
    }

    fn child_count(&self, node: &TabNode) -> Result<usize> {
        let value = self.evaluate_on(node, "return el.children.length;")?;
        value
            .as_u64()
            .map(|count| count as usize)
            .ok_or_else(|| OutlineError::EvaluationFailed("children.length was not a number".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escapes() {
        assert_eq!(js_string("div#outline ul"), "\"div#outline ul\"");
        assert_eq!(
            js_string("<a href=\"#x\">it's</a>\n"),
            "\"<a href=\\\"#x\\\">it's</a>\\n\""
        );
    }

    #[test]
    fn test_tab_node_equality() {
        let a = TabNode {
            selector: "h2".to_string(),
            position: 1,
        };
        assert_eq!(a.clone(), a);
    }
}
