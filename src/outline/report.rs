use crate::dom::ElementNode;
use crate::error::{OutlineError, Result};
use crate::outline::entry::OutlineEntry;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What the outline pass did on a page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutlineOutcome {
    /// Headings were tagged and the outline revealed
    Built { entries: Vec<OutlineEntry> },
    /// No outline container on the page
    MissingContainer,
    /// The page carries the opt-out marker
    OptedOut,
    /// Not enough headings for an outline
    TooFewHeadings { count: usize },
}

impl OutlineOutcome {
    /// Entries appended by this pass (empty unless built)
    pub fn entries(&self) -> &[OutlineEntry] {
        match self {
            OutlineOutcome::Built { entries } => entries,
            _ => &[],
        }
    }

    pub fn is_built(&self) -> bool {
        matches!(self, OutlineOutcome::Built { .. })
    }
}

/// Result of one page-ready pass
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct PageReport {
    pub outline: OutlineOutcome,

    /// Whether the comment fallback notice was inserted
    pub comment_notice: bool,
}

impl PageReport {
    /// Render the built outline as a Markdown list
    pub fn outline_markdown(&self) -> Option<String> {
        let entries = self.outline.entries();
        if !self.outline.is_built() {
            return None;
        }

        let list = ElementNode::new("ul")
            .with_children(entries.iter().map(OutlineEntry::to_list_item).collect());
        Some(html2md::parse_html(&list.to_html()))
    }

    /// Convert the report to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| OutlineError::PageParseFailed(format!("Failed to serialize report: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built_report() -> PageReport {
        PageReport {
            outline: OutlineOutcome::Built {
                entries: vec![
                    OutlineEntry::new("Getting Started", "Getting-Started"),
                    OutlineEntry::new("FAQ", "FAQ"),
                ],
            },
            comment_notice: false,
        }
    }

    #[test]
    fn test_entries() {
        assert_eq!(built_report().outline.entries().len(), 2);
        assert!(OutlineOutcome::OptedOut.entries().is_empty());
        assert!(!OutlineOutcome::MissingContainer.is_built());
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_value(OutlineOutcome::TooFewHeadings { count: 3 }).unwrap();
        assert_eq!(json, serde_json::json!({"status": "too_few_headings", "count": 3}));

        let json = serde_json::to_value(OutlineOutcome::MissingContainer).unwrap();
        assert_eq!(json, serde_json::json!({"status": "missing_container"}));
    }

    #[test]
    fn test_report_to_json() {
        let json = built_report().to_json().unwrap();
        assert!(json.contains("\"status\": \"built\""));
        assert!(json.contains("\"target_id\": \"Getting-Started\""));
        assert!(json.contains("\"comment_notice\": false"));
    }

    #[test]
    fn test_outline_markdown() {
        let markdown = built_report().outline_markdown().unwrap();
        assert!(markdown.contains("Getting Started"));
        assert!(markdown.contains("#Getting-Started"));
        assert!(markdown.contains("FAQ"));
    }

    #[test]
    fn test_outline_markdown_not_built() {
        let report = PageReport {
            outline: OutlineOutcome::TooFewHeadings { count: 4 },
            comment_notice: true,
        };
        assert!(report.outline_markdown().is_none());
    }
}
