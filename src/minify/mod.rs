//! CSS minification
//!
//! Compresses CSS source text by rewriting it, without building a syntax
//! tree. Every pass is a total function from text to text; malformed input
//! degrades to best-effort output instead of failing.
//!
//! # Architecture
//!
//! The minification pipeline runs these passes in a fixed order:
//! 1. **Comment removal** - Strip `/* */` blocks (banners and IE Mac hack kept)
//! 2. **Whitespace condensing** - Collapse whitespace runs to one space
//! 3. **Whitespace removal** - Drop spaces CSS does not need
//! 4. **Rule cleanup** - Redundant semicolons and empty rules
//! 5. **Numeric condensing** - Zero units, zero shorthands, leading zeros
//! 6. **Color condensing** - `rgb()` to hex, `#aabbcc` to `#abc`
//! 7. **Line wrapping** - Optional, only when a width is requested
//!
//! # Safety Rules
//!
//! - `p :link` keeps its space (descendant pseudo-class)
//! - `calc()` keeps its inner spacing
//! - The box model hack string `"\"}\""` is hidden from every pass
//! - `background-position:0 0` keeps both components

mod colors;
mod comments;
mod numbers;
mod placeholder;
mod rules;
mod whitespace;
mod wrap;

pub use colors::{condense_hex_colors, normalize_rgb_colors_to_hex};
pub use comments::remove_comments;
pub use numbers::{condense_floating_points, condense_multidimensional_zeros, condense_zero_units};
pub use placeholder::Placeholders;
pub use rules::{condense_semicolons, remove_empty_rules, remove_unnecessary_semicolons};
pub use whitespace::{condense_whitespace, remove_unnecessary_whitespace};
pub use wrap::wrap_css_lines;

use tracing::debug;

/// Upper bound on iterations of any "repeat until nothing matches" loop.
pub const FIXED_POINT_LIMIT: usize = 100_000;

/// The quoted string used by the box model hack.
///
/// See <http://tantek.com/CSS/Examples/boxmodelhack.html>.
const BOX_MODEL_HACK: &str = r#""\"}\"""#;

/// Options for a minification run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinifyOptions {
    /// Wrap output to approximately this many characters per line.
    pub wrap: Option<usize>,
}

impl MinifyOptions {
    /// Options that wrap output at `width` characters.
    pub fn wrapped(width: usize) -> Self {
        Self { wrap: Some(width) }
    }
}

/// Minify a stylesheet, optionally wrapping lines at `wrap` characters.
///
/// # Example
/// ```
/// use cssmin::minify;
/// let output = minify("a {\n  color: #ffffff;\n  margin: 0px;\n}", None);
/// assert_eq!(output, "a{color:#fff;margin:0}");
/// ```
pub fn minify(css: &str, wrap: Option<usize>) -> String {
    exec(css, &MinifyOptions { wrap })
}

/// Run the full minification pipeline with the given options.
pub fn exec(css: &str, options: &MinifyOptions) -> String {
    let input_len = css.len();

    let css = pass("remove_comments", css, remove_comments);
    let css = pass("condense_whitespace", &css, condense_whitespace);

    let mut hacks = Placeholders::for_text(&css);
    let css = if css.contains(BOX_MODEL_HACK) {
        let marker = hacks.protect("BMH", BOX_MODEL_HACK);
        css.replace(BOX_MODEL_HACK, &marker)
    } else {
        css
    };

    let css = pass("remove_unnecessary_whitespace", &css, remove_unnecessary_whitespace);
    let css = pass("remove_unnecessary_semicolons", &css, remove_unnecessary_semicolons);
    let css = pass("remove_empty_rules", &css, remove_empty_rules);
    let css = pass("condense_zero_units", &css, condense_zero_units);
    let css = pass("condense_multidimensional_zeros", &css, condense_multidimensional_zeros);
    let css = pass("condense_floating_points", &css, condense_floating_points);
    let css = pass("normalize_rgb_colors_to_hex", &css, normalize_rgb_colors_to_hex);
    let css = pass("condense_hex_colors", &css, condense_hex_colors);

    let css = match options.wrap {
        Some(width) => pass("wrap_css_lines", &css, |css| wrap_css_lines(css, width)),
        None => css,
    };

    let css = hacks.restore(&css);
    let css = pass("condense_semicolons", &css, condense_semicolons);
    let output = css.trim_matches(is_css_whitespace).to_string();

    debug!(
        input_bytes = input_len,
        output_bytes = output.len(),
        "Minified stylesheet"
    );
    output
}

/// ASCII whitespace, matching `[[:space:]]` in the pass patterns.
fn is_css_whitespace(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\u{b}'
}

/// Run one pass and log how much it changed the document.
fn pass(name: &str, css: &str, f: impl FnOnce(&str) -> String) -> String {
    let before = css.len();
    let result = f(css);
    debug!(pass = name, before, after = result.len(), "Applied pass");
    result
}
