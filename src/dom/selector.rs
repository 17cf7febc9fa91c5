use crate::dom::element::ElementNode;
use crate::error::{OutlineError, Result};
use std::fmt;
use std::str::FromStr;

/// How a compound selector relates to the one before it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// `a b`: any ancestor
    Descendant,
    /// `a > b`: direct parent
    Child,
}

/// A run of simple selectors applying to one element, e.g. `div#outline.sidebar`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compound {
    /// Tag name, `None` for `*` or when omitted
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl Compound {
    /// Check whether an element satisfies every part of this compound
    pub fn matches(&self, node: &ElementNode) -> bool {
        if let Some(tag) = &self.tag {
            if !node.is_tag(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if node.id() != Some(id) {
                return false;
            }
        }
        self.classes.iter().all(|class| node.has_class(class))
    }

    fn is_empty(&self) -> bool {
        self.tag.is_none() && self.id.is_none() && self.classes.is_empty()
    }
}

/// Parsed CSS selector.
///
/// Supports the subset page templates need: type, `*`, `#id` and `.class` selectors joined by
/// descendant (whitespace) or child (`>`) combinators. The source string is kept so that
/// browser-backed surfaces can hand it to `querySelectorAll` untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    /// Compounds left to right; the combinator of the first entry is unused
    parts: Vec<(Combinator, Compound)>,
}

impl Selector {
    /// Parse a selector string
    pub fn parse(source: &str) -> Result<Self> {
        let invalid = |reason: String| OutlineError::InvalidSelector {
            selector: source.to_string(),
            reason,
        };

        let mut parts: Vec<(Combinator, Compound)> = Vec::new();
        let mut current = Compound::default();
        let mut pending = Combinator::Descendant;
        let mut saw_universal = false;
        let mut chars = source.trim().chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                c if c.is_whitespace() || c == '>' => {
                    if !current.is_empty() || saw_universal {
                        parts.push((pending, std::mem::take(&mut current)));
                        saw_universal = false;
                        pending = Combinator::Descendant;
                    }
                    if c == '>' {
                        if parts.is_empty() || pending == Combinator::Child {
                            return Err(invalid("dangling '>' combinator".to_string()));
                        }
                        pending = Combinator::Child;
                    }
                }
                '#' | '.' => {
                    let name = read_identifier(&mut chars);
                    if name.is_empty() {
                        return Err(invalid(format!("expected a name after '{}'", ch)));
                    }
                    if ch == '#' {
                        current.id = Some(name);
                    } else {
                        current.classes.push(name);
                    }
                }
                '*' => {
                    if !current.is_empty() || saw_universal {
                        return Err(invalid("'*' must start a compound selector".to_string()));
                    }
                    saw_universal = true;
                }
                c if is_identifier_char(c) => {
                    if !current.is_empty() || saw_universal {
                        return Err(invalid(format!("unexpected tag name start '{}'", c)));
                    }
                    let mut name = c.to_string();
                    name.push_str(&read_identifier(&mut chars));
                    current.tag = Some(name.to_ascii_lowercase());
                }
                other => return Err(invalid(format!("unsupported character '{}'", other))),
            }
        }

        if !current.is_empty() || saw_universal {
            parts.push((pending, current));
        } else if pending == Combinator::Child {
            return Err(invalid("dangling '>' combinator".to_string()));
        }

        if parts.is_empty() {
            return Err(invalid("empty selector".to_string()));
        }

        Ok(Self {
            source: source.trim().to_string(),
            parts,
        })
    }

    /// The selector text as written
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Number of compound selectors
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Always false for a parsed selector; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Check whether the last element of `chain` matches.
    ///
    /// `chain` runs from the document root down to the candidate element.
    pub fn matches(&self, chain: &[&ElementNode]) -> bool {
        !chain.is_empty() && self.match_from(self.parts.len() - 1, chain)
    }

    fn match_from(&self, part: usize, chain: &[&ElementNode]) -> bool {
        let Some((node, ancestors)) = chain.split_last() else {
            return false;
        };
        let (combinator, compound) = &self.parts[part];
        if !compound.matches(node) {
            return false;
        }
        if part == 0 {
            return true;
        }

        match combinator {
            Combinator::Child => self.match_from(part - 1, ancestors),
            Combinator::Descendant => (1..=ancestors.len())
                .rev()
                .any(|end| self.match_from(part - 1, &ancestors[..end])),
        }
    }
}

impl FromStr for Selector {
    type Err = OutlineError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn read_identifier(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut name = String::new();
    while let Some(&c) = chars.peek() {
        if !is_identifier_char(c) {
            break;
        }
        name.push(c);
        chars.next();
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_chain() -> (ElementNode, ElementNode, ElementNode, ElementNode) {
        let body = ElementNode::new("body");
        let article = ElementNode::new("article").with_attribute("class", "post");
        let content = ElementNode::new("div").with_attribute("class", "content");
        let heading = ElementNode::new("h2").with_text("Intro");
        (body, article, content, heading)
    }

    #[test]
    fn test_parse_compound() {
        let selector = Selector::parse("div#outline.sidebar.left").unwrap();
        assert_eq!(selector.len(), 1);
        let (_, compound) = &selector.parts[0];
        assert_eq!(compound.tag.as_deref(), Some("div"));
        assert_eq!(compound.id.as_deref(), Some("outline"));
        assert_eq!(compound.classes, vec!["sidebar", "left"]);
    }

    #[test]
    fn test_parse_combinators() {
        let selector = Selector::parse("article.post  div.content > h2").unwrap();
        assert_eq!(selector.len(), 3);
        assert_eq!(selector.parts[1].0, Combinator::Descendant);
        assert_eq!(selector.parts[2].0, Combinator::Child);
        assert_eq!(selector.as_str(), "article.post  div.content > h2");
    }

    #[test]
    fn test_parse_errors() {
        assert!(Selector::parse("").is_err());
        assert!(Selector::parse("   ").is_err());
        assert!(Selector::parse("a[href]").is_err());
        assert!(Selector::parse("> h2").is_err());
        assert!(Selector::parse("div >").is_err());
        assert!(Selector::parse("div > > h2").is_err());
        assert!(Selector::parse("div#").is_err());
        assert!(Selector::parse("h2:first-child").is_err());
    }

    #[test]
    fn test_from_str() {
        let selector: Selector = "#disqus_thread".parse().unwrap();
        assert_eq!(selector.to_string(), "#disqus_thread");
    }

    #[test]
    fn test_descendant_match() {
        let (body, article, content, heading) = post_chain();
        let selector = Selector::parse("article.post div.content h2").unwrap();

        assert!(selector.matches(&[&body, &article, &content, &heading]));
        assert!(!selector.matches(&[&body, &content, &heading]));
        assert!(!selector.matches(&[&body, &article, &heading]));
    }

    #[test]
    fn test_descendant_skips_intermediate_ancestors() {
        let (body, article, content, heading) = post_chain();
        let section = ElementNode::new("section");
        let selector = Selector::parse("article.post h2").unwrap();

        assert!(selector.matches(&[&body, &article, &section, &content, &heading]));
    }

    #[test]
    fn test_child_match() {
        let (body, article, content, heading) = post_chain();
        let selector = Selector::parse("div.content > h2").unwrap();
        assert!(selector.matches(&[&body, &article, &content, &heading]));

        let wrapper = ElementNode::new("div");
        assert!(!selector.matches(&[&body, &article, &content, &wrapper, &heading]));
    }

    #[test]
    fn test_universal_and_id() {
        let thread = ElementNode::new("div").with_attribute("id", "disqus_thread");
        assert!(Selector::parse("#disqus_thread").unwrap().matches(&[&thread]));
        assert!(Selector::parse("*").unwrap().matches(&[&thread]));
        assert!(!Selector::parse("span#disqus_thread").unwrap().matches(&[&thread]));
    }

    #[test]
    fn test_empty_chain() {
        let selector = Selector::parse("h2").unwrap();
        assert!(!selector.matches(&[]));
    }
}
