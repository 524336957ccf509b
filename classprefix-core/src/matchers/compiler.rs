//! compiler.rs - Builds the attribute-name matcher set from a `PrefixConfig`.
//!
//! Every configured attribute source (the fixed default name, wildcard templates,
//! raw regex fragments) is reduced to a regex fragment. Fragments are deduplicated
//! and joined into one alternation that drives both the direct-value search
//! (`name="..."`) and the expression-value search (`name={`).
//!
//! A bad user fragment never aborts the run: it is dropped and reported as a
//! [`PatternWarning`].
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use regex::{Regex, RegexBuilder};
use std::collections::HashSet;
use std::fmt;

use crate::config::{PrefixConfig, MAX_PATTERN_LENGTH};
use crate::errors::PrefixError;
use crate::tokens::Direction;

/// The attribute that is always matched, whatever the configuration says.
pub const DEFAULT_ATTRIBUTE: &str = "className";

/// Wildcard templates used when the configuration lists none.
pub const DEFAULT_WILDCARD_PATTERNS: &[&str] = &["*ClassName"];

/// What `*` expands to inside a wildcard template.
const WILDCARD_EXPANSION: &str = r"[\w$-]*";

/// An attribute name must not continue a longer identifier.
const NAME_BOUNDARY: &str = r"(?:^|[^\w$-])";

/// Upper bound for the compiled size of any single regex.
const COMPILED_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Defaults handed to the builder by its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherDefaults {
    pub attribute: String,
    pub wildcard_patterns: Vec<String>,
}

impl Default for MatcherDefaults {
    fn default() -> Self {
        Self {
            attribute: DEFAULT_ATTRIBUTE.to_string(),
            wildcard_patterns: DEFAULT_WILDCARD_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// A non-fatal problem with one configured attribute pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternWarning {
    pub pattern: String,
    pub reason: String,
}

impl fmt::Display for PatternWarning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid attribute pattern '{}': {}", self.pattern, self.reason)
    }
}

/// The compiled matcher set for one engine.
#[derive(Debug)]
pub struct AttributeMatcher {
    fragments: Vec<String>,
    expression_opener: Regex,
    default_direct: Regex,
    wildcard_direct: Option<Regex>,
    warnings: Vec<PatternWarning>,
}

impl AttributeMatcher {
    /// The deduplicated fragments, default attribute first.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// The joined alternation, e.g. `(?:className|[\w$-]*ClassName)`.
    pub fn alternation(&self) -> String {
        alternation_of(&self.fragments)
    }

    /// Matches `name = {`; the match ends just after the brace.
    pub fn expression_opener(&self) -> &Regex {
        &self.expression_opener
    }

    /// Regexes for the direct-value pass, in application order.
    ///
    /// Each exposes the value through one of the named groups `dq`, `sq` or `bt`.
    /// Wildcard attributes only take part when adding.
    pub fn direct_value_regexes(&self, direction: Direction) -> Vec<&Regex> {
        let mut regexes = vec![&self.default_direct];
        if direction.is_adding() {
            regexes.extend(self.wildcard_direct.as_ref());
        }
        regexes
    }

    /// Problems found while compiling user patterns.
    pub fn warnings(&self) -> &[PatternWarning] {
        &self.warnings
    }
}

/// Converts a wildcard template such as `*ClassName` into a regex fragment.
pub fn wildcard_to_fragment(template: &str) -> String {
    template
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(WILDCARD_EXPANSION)
}

/// Compiles the attribute matcher set for `config`.
pub fn build_attribute_matcher(
    config: &PrefixConfig,
    defaults: &MatcherDefaults,
) -> Result<AttributeMatcher, PrefixError> {
    let mut warnings = Vec::new();
    let default_fragment = regex::escape(&defaults.attribute);

    let custom_fragments = if config.use_regex {
        debug!("Compiling {} regex attribute patterns.", config.custom_regex_patterns.len());
        regex_fragments(&config.custom_regex_patterns, &mut warnings)
    } else {
        let templates = if config.custom_patterns.is_empty() {
            debug!("No wildcard patterns configured; using defaults {:?}", defaults.wildcard_patterns);
            &defaults.wildcard_patterns
        } else {
            &config.custom_patterns
        };
        wildcard_fragments(templates, &mut warnings)
    };

    let mut fragments = vec![default_fragment.clone()];
    fragments.extend(custom_fragments.iter().cloned());
    let fragments = dedupe(fragments);

    let (fragments, expression_opener) = match compile(&expression_opener_source(&fragments)) {
        Ok(regex) => (fragments, regex),
        Err(e) => {
            warn!("Combined attribute pattern failed to compile, falling back to '{}': {}", defaults.attribute, e);
            warnings.push(PatternWarning {
                pattern: alternation_of(&fragments),
                reason: e.to_string(),
            });
            let fallback = vec![default_fragment.clone()];
            let regex = compile(&expression_opener_source(&fallback))
                .map_err(|e| PrefixError::PatternCompilationError(defaults.attribute.clone(), e))?;
            (fallback, regex)
        }
    };

    let default_direct = compile(&direct_value_source(std::slice::from_ref(&default_fragment)))
        .map_err(|e| PrefixError::PatternCompilationError(defaults.attribute.clone(), e))?;

    let wildcard_direct = if config.use_regex || custom_fragments.is_empty() {
        None
    } else {
        let wildcard_only = dedupe(custom_fragments);
        match compile(&direct_value_source(&wildcard_only)) {
            Ok(regex) => Some(regex),
            Err(e) => {
                warnings.push(PatternWarning {
                    pattern: alternation_of(&wildcard_only),
                    reason: e.to_string(),
                });
                None
            }
        }
    };

    debug!("Attribute alternation: {}", alternation_of(&fragments));

    Ok(AttributeMatcher {
        fragments,
        expression_opener,
        default_direct,
        wildcard_direct,
        warnings,
    })
}

fn wildcard_fragments(templates: &[String], warnings: &mut Vec<PatternWarning>) -> Vec<String> {
    let mut fragments = Vec::new();
    for template in templates {
        if template.is_empty() {
            warnings.push(PatternWarning {
                pattern: template.clone(),
                reason: "empty pattern would match every attribute".to_string(),
            });
            continue;
        }
        if let Some(warning) = length_warning(template) {
            warnings.push(warning);
            continue;
        }
        fragments.push(wildcard_to_fragment(template));
    }
    fragments
}

fn regex_fragments(patterns: &[String], warnings: &mut Vec<PatternWarning>) -> Vec<String> {
    let mut fragments = Vec::new();
    for pattern in patterns {
        if let Some(warning) = length_warning(pattern) {
            warnings.push(warning);
            continue;
        }
        match compile(pattern) {
            Ok(_) => fragments.push(pattern.clone()),
            Err(e) => {
                warn!("Dropping attribute pattern '{}': {}", pattern, e);
                warnings.push(PatternWarning {
                    pattern: pattern.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }
    fragments
}

fn length_warning(pattern: &str) -> Option<PatternWarning> {
    (pattern.len() > MAX_PATTERN_LENGTH).then(|| PatternWarning {
        pattern: pattern.to_string(),
        reason: PrefixError::PatternLengthExceeded(
            pattern.to_string(),
            pattern.len(),
            MAX_PATTERN_LENGTH,
        )
        .to_string(),
    })
}

fn dedupe(fragments: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    fragments.into_iter().filter(|f| seen.insert(f.clone())).collect()
}

fn alternation_of(fragments: &[String]) -> String {
    format!("(?:{})", fragments.join("|"))
}

fn expression_opener_source(fragments: &[String]) -> String {
    format!(r"{NAME_BOUNDARY}{}\s*=\s*\{{", alternation_of(fragments))
}

fn direct_value_source(fragments: &[String]) -> String {
    format!(
        r#"{NAME_BOUNDARY}{}\s*=\s*(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)'|`(?P<bt>[^`]*)`)"#,
        alternation_of(fragments)
    )
}

fn compile(source: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(source).size_limit(COMPILED_SIZE_LIMIT).build()
}
