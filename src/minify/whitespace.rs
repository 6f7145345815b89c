//! Pass 2: Whitespace handling
//!
//! Collapses whitespace runs and removes whitespace around punctuation where
//! CSS does not need it.
//!
//! # Safety Rules
//!
//! - `p :link` keeps its space (descendant pseudo-class selector)
//! - `calc(100% - 10px)` keeps its inner spacing (required around `+`/`-`)
//! - `and (min-width:...)` keeps the space after `and` in media queries

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::warn;

use super::placeholder::Placeholders;
use super::FIXED_POINT_LIMIT;

/// Only ASCII whitespace counts; `\u{a0}` and friends are content.
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[[:space:]]+").unwrap());

/// A selector that contains colons, running from a rule boundary to the `{`.
static PSEUDO_CLASS_SELECTOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^|\})(([^\{:])+:)+([^\{]*\{)").unwrap());

static CALC_EXPRESSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"calc\(([0-9a-zA-Z*%/[:space:]+\-]*)\)").unwrap());

static SPACE_BEFORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[[:space:]]([!{};:>+()\],])").unwrap());

static SPACE_AFTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([!{}:;>+(\[,])[[:space:]]+").unwrap());

static CHARSET_ANYWHERE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^(.*)(@charset "[^"]*";)"#).unwrap());

static LEADING_CHARSETS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([[:space:]]*@charset [^;]+;[[:space:]]*)+").unwrap());

static MEDIA_AND: Lazy<Regex> = Lazy::new(|| Regex::new(r"\band\(").unwrap());

/// Collapse every run of whitespace, newlines included, to a single space.
pub fn condense_whitespace(css: &str) -> String {
    WHITESPACE_RUN.replace_all(css, " ").into_owned()
}

/// Remove whitespace that CSS does not need.
///
/// Pseudo-class colons and `calc()` bodies are hidden behind placeholders
/// while the blanket rules run, then restored.
pub fn remove_unnecessary_whitespace(css: &str) -> String {
    let mut colons = Placeholders::for_text(css);
    let css = protect_pseudo_class_colons(css, &mut colons);

    let mut calcs = Placeholders::for_text(&css);
    let css = protect_calc(&css, &mut calcs);

    let css = SPACE_BEFORE.replace_all(&css, "${1}");
    let css = hoist_charset(&css);

    // `and(` is invalid in media queries; put the space back
    let css = MEDIA_AND.replace_all(&css, "and (");

    let css = colons.restore(&css);
    let css = SPACE_AFTER.replace_all(&css, "${1}");

    calcs.restore(&css)
}

// ============================================================================
// Protected constructs
// ============================================================================

/// Swap colons inside selectors for a marker so `p :link` survives.
///
/// Repeats until no selector with a bare colon remains. Hiding colons never
/// creates a match earlier in the text, so each search resumes after the
/// previous selector.
fn protect_pseudo_class_colons(css: &str, colons: &mut Placeholders) -> String {
    let marker = colons.protect("COLON", ":");
    let mut output = String::with_capacity(css.len());
    let mut search_from = 0;

    for _ in 0..FIXED_POINT_LIMIT {
        let Some(found) = PSEUDO_CLASS_SELECTOR.find_at(css, search_from) else {
            output.push_str(&css[search_from..]);
            return output;
        };
        output.push_str(&css[search_from..found.start()]);
        output.push_str(&found.as_str().replace(':', &marker));
        search_from = found.end();
    }

    warn!(
        limit = FIXED_POINT_LIMIT,
        "Pseudo-class colon protection did not settle"
    );
    output.push_str(&css[search_from..]);
    output
}

/// Swap each `calc(...)` expression for its own numbered marker.
fn protect_calc(css: &str, calcs: &mut Placeholders) -> String {
    CALC_EXPRESSION
        .replace_all(css, |caps: &Captures<'_>| calcs.protect("CALC", &caps[0]))
        .into_owned()
}

// ============================================================================
// @charset handling
// ============================================================================

/// Move a `@charset` rule to the front and keep only one leading rule.
///
/// Only the rule captured by the single greedy match is moved; further
/// `@charset` rules elsewhere in the document are left where they are.
fn hoist_charset(css: &str) -> String {
    let css = CHARSET_ANYWHERE.replace(css, "${2}${1}");
    LEADING_CHARSETS.replace(&css, "${1}").into_owned()
}
