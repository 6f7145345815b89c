//! Pass 4: Numeric condensing
//!
//! Shortens numeric values without changing what they mean:
//! - `0px` → `0` (unit dropped on zero lengths)
//! - `margin:0 0 0 0;` → `margin:0;`
//! - `0.5em` → `.5em`

use once_cell::sync::Lazy;
use regex::Regex;

static ZERO_WITH_UNIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([[:space:]:])(0)(px|em|%|in|cm|mm|pc|pt|ex)").unwrap());

static LEADING_ZERO_FLOAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(:|[[:space:]])0+\.([0-9]+)").unwrap());

/// Zero shorthands in priority order, longest first.
const ZERO_SHORTHANDS: &[&str] = &[":0 0 0 0;", ":0 0 0;", ":0 0;"];

/// `background-position` needs two components, so it is put back.
const BACKGROUND_POSITION_COLLAPSED: &str = "background-position:0;";
const BACKGROUND_POSITION_ZERO: &str = "background-position:0 0;";

/// Replace `0px`, `0em`, `0%`, etc. with `0`.
pub fn condense_zero_units(css: &str) -> String {
    ZERO_WITH_UNIT.replace_all(css, "${1}${2}").into_owned()
}

/// Replace `:0 0 0 0;`, `:0 0 0;` and `:0 0;` with `:0;`.
pub fn condense_multidimensional_zeros(css: &str) -> String {
    let mut result = css.to_string();
    for shorthand in ZERO_SHORTHANDS {
        result = result.replace(shorthand, ":0;");
    }
    result.replace(BACKGROUND_POSITION_COLLAPSED, BACKGROUND_POSITION_ZERO)
}

/// Drop leading zeros before a decimal point: `0.6` → `.6`.
pub fn condense_floating_points(css: &str) -> String {
    LEADING_ZERO_FLOAT.replace_all(css, "${1}.${2}").into_owned()
}
