//! Restricts the CLI to source files that can contain JSX-like markup.

use anyhow::{Result, bail};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::Path;

static SUPPORTED_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut set = HashSet::new();
    set.extend(["js", "jsx", "ts", "tsx", "mjs", "cjs", "mdx"]);
    set
});

/// Returns true when `path` has a supported extension (case-insensitive).
pub fn is_supported_source(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Fails for unsupported inputs unless `force` is set.
pub fn ensure_supported(path: &Path, force: bool) -> Result<()> {
    if force || is_supported_source(path) {
        return Ok(());
    }
    bail!(
        "'{}' is not a supported source file (expected .js, .jsx, .ts, .tsx, .mjs, .cjs or .mdx). Use --force to process it anyway.",
        path.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_jsx_like_sources() {
        for name in ["App.tsx", "a.jsx", "b.JS", "c.ts", "d.mjs", "e.mdx"] {
            assert!(is_supported_source(Path::new(name)), "{name} should be supported");
        }
    }

    #[test]
    fn rejects_other_files_unless_forced() {
        assert!(!is_supported_source(Path::new("style.css")));
        assert!(!is_supported_source(Path::new("Makefile")));
        assert!(ensure_supported(Path::new("index.html"), false).is_err());
        assert!(ensure_supported(Path::new("index.html"), true).is_ok());
    }
}
