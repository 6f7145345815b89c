//! Pass 3: Semicolon and empty rule cleanup

use once_cell::sync::Lazy;
use regex::Regex;

static SEMICOLONS_BEFORE_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r";+\}").unwrap());

/// A selector (or at-rule prelude) followed by an empty block.
static EMPTY_RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\}\{]+\{\}").unwrap());

static SEMICOLON_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r";;+").unwrap());

/// Drop semicolons directly before a closing brace: `a{b:c;}` → `a{b:c}`.
pub fn remove_unnecessary_semicolons(css: &str) -> String {
    SEMICOLONS_BEFORE_CLOSE.replace_all(css, "}").into_owned()
}

/// Delete rules whose block is empty: `a{}b{c:d}` → `b{c:d}`.
pub fn remove_empty_rules(css: &str) -> String {
    EMPTY_RULE.replace_all(css, "").into_owned()
}

/// Collapse runs of semicolons into one.
pub fn condense_semicolons(css: &str) -> String {
    SEMICOLON_RUN.replace_all(css, ";").into_owned()
}
