//! Language tag derivation from file extensions.

/// Derive the editor language tag for a file name. Unknown extensions map
/// to `plaintext`.
pub fn language_for(filename: &str) -> &'static str {
    let extension = filename
        .rsplit('.')
        .next()
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "js" | "jsx" => "javascript",
        "ts" | "tsx" => "typescript",
        "py" => "python",
        "rs" => "rust",
        "cpp" => "cpp",
        "c" | "h" => "c",
        "cs" => "csharp",
        "html" => "html",
        "css" => "css",
        "json" => "json",
        "md" => "markdown",
        _ => "plaintext",
    }
}
