use std::path::Path;

/// Turn a command-line page target into a URL.
///
/// Existing local files become `file://` URLs, anything with a scheme passes through, and a bare
/// host gets `https://` (or `http://` for localhost).
pub fn normalize_target(target: &str) -> String {
    let trimmed = target.trim();

    if trimmed.contains("://")
        || trimmed.starts_with("data:")
        || trimmed.starts_with("about:")
    {
        return trimmed.to_string();
    }

    let path = Path::new(trimmed);
    if path.exists() {
        let absolute = path
            .canonicalize()
            .unwrap_or_else(|_| path.to_path_buf());
        return format!("file://{}", absolute.display());
    }

    if trimmed.starts_with("localhost") || trimmed.starts_with("127.0.0.1") {
        return format!("http://{}", trimmed);
    }

    format!("https://{}", trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_passthrough() {
        assert_eq!(normalize_target("https://blog.example.com/post"), "https://blog.example.com/post");
        assert_eq!(normalize_target("file:///tmp/post.html"), "file:///tmp/post.html");
        assert_eq!(normalize_target("about:blank"), "about:blank");
        assert_eq!(
            normalize_target("data:text/html,<h2>Hi</h2>"),
            "data:text/html,<h2>Hi</h2>"
        );
    }

    #[test]
    fn test_bare_hosts() {
        assert_eq!(normalize_target("blog.example.com/post"), "https://blog.example.com/post");
        assert_eq!(normalize_target("  blog.example.com  "), "https://blog.example.com");
        assert_eq!(normalize_target("localhost:4000/post"), "http://localhost:4000/post");
        assert_eq!(normalize_target("127.0.0.1:8080"), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_local_file() {
        let manifest = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
        let url = normalize_target(manifest);
        assert!(url.starts_with("file://"));
        assert!(url.ends_with("Cargo.toml"));
    }
}
