// File: classprefix-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot use of the engine without a host UI.
//!
//! Both functions return the input unchanged (as a fresh `String`) when no class
//! list applied. Hosts that need to tell the two cases apart, or want the pattern
//! warnings, should build a [`PrefixEngine`] and call `rewrite` directly.

use anyhow::Result;

use crate::config::PrefixConfig;
use crate::engine::RewriteEngine;
use crate::engines::prefix_engine::PrefixEngine;
use crate::tokens::Direction;

/// Adds `config.prefix` to every class token found in `text`.
pub fn add_prefix(text: &str, config: &PrefixConfig) -> Result<String> {
    rewrite_with(text, config, Direction::Add)
}

/// Strips `config.prefix` from every class token found in `text`.
/// The skip list is not consulted.
pub fn remove_prefix(text: &str, config: &PrefixConfig) -> Result<String> {
    rewrite_with(text, config, Direction::Remove)
}

fn rewrite_with(text: &str, config: &PrefixConfig, direction: Direction) -> Result<String> {
    let engine = PrefixEngine::new(config.clone())?;
    Ok(engine.rewrite(text, direction).into_text(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_add_then_remove_round_trips() -> Result<()> {
        let config = PrefixConfig::default();
        let input = r#"<div className="a b"><p className={cn('c', x && "d")} /></div>"#;

        let added = add_prefix(input, &config)?;
        assert_eq!(added, r#"<div className="app-a app-b"><p className={cn('app-c', x && "app-d")} /></div>"#);
        assert_eq!(remove_prefix(&added, &config)?, input);
        Ok(())
    }

    #[test]
    fn test_unchanged_input_is_returned_verbatim() -> Result<()> {
        let input = "const x = 1;\n";
        assert_eq!(add_prefix(input, &PrefixConfig::default())?, input);
        Ok(())
    }
}
