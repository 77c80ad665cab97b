//! Ordered, precompiled rewrite rules applied to raw feed strings.
//!
//! A rule table is built once at process start and reused for every string.
//! Rules run in declaration order; later rules see the text produced by
//! earlier ones, so the order is part of each table's contract.

use regex::{NoExpand, Regex};

/// Where a rule's matcher is allowed to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Only at token boundaries: the match must be flanked by non-alphanumeric
    /// context or the string's edges. "ST" must not rewrite inside "STATION".
    Token,
    /// Anywhere the pattern itself matches. The pattern carries its own
    /// anchors if it needs them.
    Anywhere,
}

/// A single (pattern, replacement, boundary-policy) rewrite, compiled once.
pub struct RewriteRule {
    matcher: Regex,
    replacement: String,
}

impl RewriteRule {
    pub fn new(pattern: &str, replacement: &str, policy: BoundaryPolicy) -> Self {
        let wrapped = match policy {
            BoundaryPolicy::Token => format!(r"(?i)\b(?:{pattern})\b"),
            BoundaryPolicy::Anywhere => format!(r"(?i){pattern}"),
        };
        RewriteRule {
            matcher: Regex::new(&wrapped).unwrap(),
            replacement: replacement.to_string(),
        }
    }

    /// Whole-token rule: `pattern` may be an alternation of tokens.
    pub fn token(pattern: &str, replacement: &str) -> Self {
        Self::new(pattern, replacement, BoundaryPolicy::Token)
    }

    pub fn anywhere(pattern: &str, replacement: &str) -> Self {
        Self::new(pattern, replacement, BoundaryPolicy::Anywhere)
    }

    pub fn apply(&self, input: &str) -> String {
        // Replacements are literal text, never capture templates
        self.matcher
            .replace_all(input, NoExpand(&self.replacement))
            .into_owned()
    }
}

/// An ordered, immutable set of rewrite rules.
pub struct RuleTable {
    rules: Vec<RewriteRule>,
}

impl RuleTable {
    pub fn new(rules: Vec<RewriteRule>) -> Self {
        RuleTable { rules }
    }

    /// Runs every rule over `input` in declaration order.
    pub fn apply(&self, input: &str) -> String {
        self.rules
            .iter()
            .fold(input.to_string(), |text, rule| rule.apply(&text))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_rule_respects_boundaries() {
        let rule = RewriteRule::token("ST", "Street");
        assert_eq!(rule.apply("4 ST SW"), "4 Street SW");
        assert_eq!(rule.apply("CHINOOK STATION"), "CHINOOK STATION");
        assert_eq!(rule.apply("WESTBROOK"), "WESTBROOK");
    }

    #[test]
    fn token_rule_is_case_insensitive() {
        let rule = RewriteRule::token("AV|AVE", "Avenue");
        assert_eq!(rule.apply("16 av"), "16 Avenue");
        assert_eq!(rule.apply("16 Ave"), "16 Avenue");
    }

    #[test]
    fn consecutive_tokens_both_rewrite() {
        let table = RuleTable::new(vec![
            RewriteRule::token("AV", "Avenue"),
            RewriteRule::token("RD", "Road"),
        ]);
        // Boundaries are zero-width, so adjacent tokens cannot mask each other
        assert_eq!(table.apply("AV RD"), "Avenue Road");
    }

    #[test]
    fn rules_run_in_declaration_order() {
        let table = RuleTable::new(vec![
            RewriteRule::token("CTR", "Center"),
            RewriteRule::token("Center", "CENTER TWICE"),
        ]);
        assert_eq!(table.apply("LEISURE CTR"), "LEISURE CENTER TWICE");
    }
}
