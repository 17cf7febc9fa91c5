/// Derive a heading's fragment identifier from its inner markup.
///
/// Every literal space becomes a hyphen and nothing else changes: case, punctuation and any
/// inline tags are kept as they are, and equal inputs give equal identifiers.
pub fn generate_id(content: &str) -> String {
    content.replace(' ', "-")
}
