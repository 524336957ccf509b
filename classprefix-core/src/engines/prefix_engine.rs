// classprefix-core/src/engines/prefix_engine.rs
//! A `RewriteEngine` that adds or strips a prefix on class tokens.
//!
//! A run makes two passes over the buffer, the second over the output of the first:
//!
//! 1. Direct values: `className="a b"`, `className='a b'` and `` className=`a b` ``.
//!    Wildcard attributes (`*ClassName`) join this pass when adding.
//! 2. Expression values: for every matched `name={`, the matching `}` is located
//!    and every quoted string inside the block is rewritten. Template literals
//!    inside the block are left alone.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::collections::HashSet;

use crate::config::PrefixConfig;
use crate::engine::RewriteEngine;
use crate::matchers::{build_attribute_matcher, AttributeMatcher, MatcherDefaults, PatternWarning};
use crate::rewrite_report::{log_class_list_debug, RewriteOutcome, RewriteReport, RewriteSummary};
use crate::scanner::{matching_close, rewrite_quoted_strings};
use crate::tokens::{changed_tokens, rewrite_class_list, Direction};

const VALUE_GROUPS: [&str; 3] = ["dq", "sq", "bt"];

#[derive(Debug)]
pub struct PrefixEngine {
    config: PrefixConfig,
    skip: HashSet<String>,
    matcher: AttributeMatcher,
}

impl PrefixEngine {
    pub fn new(config: PrefixConfig) -> Result<Self> {
        Self::with_defaults(config, MatcherDefaults::default())
    }

    pub fn with_defaults(config: PrefixConfig, defaults: MatcherDefaults) -> Result<Self> {
        config.validate().context("Invalid prefix configuration")?;
        let matcher = build_attribute_matcher(&config, &defaults)
            .context("Failed to compile attribute patterns for PrefixEngine")?;

        for warning in matcher.warnings() {
            warn!("{}", warning);
        }

        Ok(Self {
            skip: config.skip_set(),
            config,
            matcher,
        })
    }

    pub fn matcher(&self) -> &AttributeMatcher {
        &self.matcher
    }

    fn rewrite_list(&self, list: &str, direction: Direction, summary: &mut RewriteSummary) -> String {
        let rewritten = rewrite_class_list(list, &self.config.prefix, &self.skip, direction);
        summary.tokens_changed += changed_tokens(list, &rewritten);
        rewritten
    }

    fn direct_value_pass(&self, content: &str, direction: Direction, summary: &mut RewriteSummary) -> String {
        let mut text = content.to_string();

        for regex in self.matcher.direct_value_regexes(direction) {
            let mut out = String::with_capacity(text.len());
            let mut last_end = 0usize;
            let mut search_from = 0usize;

            // The closing quote of one value may serve as the name boundary of the next.
            while let Some(caps) = regex.captures_at(&text, search_from) {
                let whole = caps.get(0).map_or(search_from, |m| m.end());
                search_from = whole.saturating_sub(1).max(search_from + 1);
                let Some(value) = VALUE_GROUPS.iter().find_map(|name| caps.name(name)) else {
                    continue;
                };
                let rewritten = self.rewrite_list(value.as_str(), direction, summary);
                if rewritten != value.as_str() {
                    summary.direct_values += 1;
                    log_class_list_debug("Direct", value.as_str(), &rewritten);
                }
                out.push_str(&text[last_end..value.start()]);
                out.push_str(&rewritten);
                last_end = value.end();
            }

            out.push_str(&text[last_end..]);
            text = out;
        }

        text
    }

    fn expression_pass(&self, content: &str, direction: Direction, summary: &mut RewriteSummary) -> String {
        let opener = self.matcher.expression_opener();
        let mut out = String::with_capacity(content.len());
        let mut cursor = 0usize;

        while let Some(found) = opener.find_at(content, cursor) {
            let open = found.end() - 1;
            out.push_str(&content[cursor..=open]);

            let Some(close) = matching_close(content, open) else {
                debug!("No matching '}}' for expression opened at byte {}; leaving it untouched.", open);
                summary.unbalanced_skipped += 1;
                cursor = open + 1;
                continue;
            };

            let body = &content[open + 1..close];
            let rewritten = rewrite_quoted_strings(body, |value, _quote| {
                summary.strings_visited += 1;
                self.rewrite_list(value, direction, summary)
            });
            if rewritten != body {
                summary.expression_values += 1;
                log_class_list_debug("Expression", body, &rewritten);
            }
            out.push_str(&rewritten);
            cursor = close;
        }

        out.push_str(&content[cursor..]);
        out
    }
}

impl RewriteEngine for PrefixEngine {
    fn rewrite(&self, content: &str, direction: Direction) -> RewriteReport {
        let mut summary = RewriteSummary::default();

        let direct = self.direct_value_pass(content, direction, &mut summary);
        let output = self.expression_pass(&direct, direction, &mut summary);

        let outcome = if output == content {
            debug!("No applicable class names found ({:?}).", direction);
            RewriteOutcome::Unchanged
        } else {
            info!(
                "Rewrote {} direct and {} expression class values ({} tokens, {:?}).",
                summary.direct_values, summary.expression_values, summary.tokens_changed, direction
            );
            RewriteOutcome::Rewritten(output)
        };

        RewriteReport {
            outcome,
            summary,
            warnings: self.matcher.warnings().to_vec(),
        }
    }

    fn config(&self) -> &PrefixConfig {
        &self.config
    }

    fn pattern_warnings(&self) -> &[PatternWarning] {
        self.matcher.warnings()
    }
}
