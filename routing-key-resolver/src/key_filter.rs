//! Filter engine narrowing a raw extracted value to its matched substring.

use regex::Regex;

use crate::key_resolver::KeyResolverBuildError;

/// Compiled routing-key filter expression.
///
/// Compiled once when the owning resolver is constructed, then applied by
/// matching the pattern anywhere against the candidate value. A match narrows
/// the candidate to the matched substring itself, not a capture group and not
/// the full raw value.
#[derive(Clone, Debug)]
pub(crate) struct KeyFilter {
    pattern: Regex,
}

impl KeyFilter {
    /// Compiles a filter expression, failing on a malformed pattern.
    pub(crate) fn compile(filter: &str) -> Result<Self, KeyResolverBuildError> {
        match Regex::new(filter) {
            Ok(pattern) => Ok(Self { pattern }),
            Err(source) => Err(KeyResolverBuildError::InvalidFilter {
                filter: filter.to_string(),
                source,
            }),
        }
    }

    /// Returns the substring matched by the filter, or `None` when the
    /// candidate does not match.
    pub(crate) fn matched_fragment<'a>(&self, raw: &'a str) -> Option<&'a str> {
        self.pattern.find(raw).map(|found| found.as_str())
    }
}

/// Applies an optional filter to an optional raw candidate.
///
/// An absent candidate stays absent, an absent filter passes the candidate
/// through unchanged, and a non-matching filter discards the candidate. No
/// trimming or case-folding is performed.
pub(crate) fn apply(filter: Option<&KeyFilter>, raw: Option<&str>) -> Option<String> {
    let raw = raw?;

    match filter {
        Some(filter) => filter.matched_fragment(raw).map(str::to_string),
        None => Some(raw.to_string()),
    }
}
