//! Pass 5: Color condensing
//!
//! Rewrites colors into their shortest hex form:
//! - `rgb(51,102,153)` → `#336699`
//! - `#AABBCC` → `#ABC`

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static RGB_FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"rgb[[:space:]]*\([[:space:]]*([0-9,[:space:]]+)[[:space:]]*\)").unwrap()
});

/// A six digit hex color preceded by something other than a quote, `=` or
/// whitespace, so attribute selector values like `[x="#aabbcc"]` are skipped.
static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"([^"'=[:space:]])([[:space:]]*)#([0-9a-fA-F])([0-9a-fA-F])([0-9a-fA-F])([0-9a-fA-F])([0-9a-fA-F])([0-9a-fA-F])"#,
    )
    .unwrap()
});

/// Convert `rgb(r,g,b)` to `#rrggbb`.
///
/// Arguments that are not exactly three integers in `0..=255` leave the
/// `rgb(...)` text untouched.
pub fn normalize_rgb_colors_to_hex(css: &str) -> String {
    RGB_FUNCTION
        .replace_all(css, |caps: &Captures<'_>| {
            parse_rgb_channels(&caps[1])
                .map(|[r, g, b]| format!("#{:02x}{:02x}{:02x}", r, g, b))
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Shorten colors from `#AABBCC` to `#ABC` where each digit pair repeats.
///
/// The original case of the kept digits is preserved. Matches do not
/// overlap, so the search for the next color resumes after the previous one.
pub fn condense_hex_colors(css: &str) -> String {
    HEX_COLOR
        .replace_all(css, |caps: &Captures<'_>| {
            shorten_hex(caps).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// The shortened form of a matched color, if every digit pair repeats.
fn shorten_hex(caps: &Captures<'_>) -> Option<String> {
    let digit = |i: usize| caps.get(i).map_or("", |m| m.as_str());

    let first = format!("{}{}{}", digit(3), digit(5), digit(7));
    let second = format!("{}{}{}", digit(4), digit(6), digit(8));
    if !first.eq_ignore_ascii_case(&second) {
        return None;
    }

    Some(format!("{}{}#{}", digit(1), digit(2), first))
}

/// Parse `"r, g, b"` into three channel bytes.
fn parse_rgb_channels(args: &str) -> Option<[u8; 3]> {
    let mut channels = args.split(',').map(|part| part.trim().parse::<u8>());
    let r = channels.next()?.ok()?;
    let g = channels.next()?.ok()?;
    let b = channels.next()?.ok()?;
    if channels.next().is_some() {
        return None;
    }
    Some([r, g, b])
}
