//! Unit tests for the individual minification passes

use cssmin::minify::{
    condense_floating_points, condense_hex_colors, condense_multidimensional_zeros,
    condense_semicolons, condense_whitespace, condense_zero_units, normalize_rgb_colors_to_hex,
    remove_comments, remove_empty_rules, remove_unnecessary_semicolons,
    remove_unnecessary_whitespace, wrap_css_lines, Placeholders,
};

// ============================================================================
// Comments
// ============================================================================

#[test]
fn test_comment_drop_and_keep() {
    assert_eq!(remove_comments("a{}/* drop */b{}"), "a{}b{}");
    assert_eq!(remove_comments("/*! keep */a{}"), "/*! keep */a{}");
}

#[test]
fn test_unterminated_comment_drops_rest_of_document() {
    assert_eq!(remove_comments("a{}/*unterminated"), "a{}");
    assert_eq!(remove_comments("a{}/*b{color:red}"), "a{}");
}

#[test]
fn test_comment_opener_inside_string_starts_comment() {
    // Strings are not tokenized: the comment runs to the next `*/`
    assert_eq!(
        remove_comments("a{content:\"/*\"}b{c:d}/**/"),
        "a{content:\""
    );
}

// ============================================================================
// Whitespace
// ============================================================================

#[test]
fn test_condense_whitespace_includes_newlines_and_tabs() {
    assert_eq!(condense_whitespace("a\r\n\t{ }"), "a { }");
}

#[test]
fn test_pseudo_class_spacing_preserved() {
    assert_eq!(
        remove_unnecessary_whitespace("p :link{color:red}"),
        "p :link{color:red}"
    );
    assert_eq!(
        remove_unnecessary_whitespace("p:link{color:red}"),
        "p:link{color:red}"
    );
}

#[test]
fn test_calc_spacing_preserved() {
    assert_eq!(
        remove_unnecessary_whitespace("a{width: calc(100% - 10px);}"),
        "a{width:calc(100% - 10px);}"
    );
}

#[test]
fn test_space_before_important_removed() {
    assert_eq!(
        remove_unnecessary_whitespace("a{color:red !important}"),
        "a{color:red!important}"
    );
}

#[test]
fn test_attribute_selector_brackets() {
    assert_eq!(
        remove_unnecessary_whitespace("a[ href ]{b:c}"),
        "a[href]{b:c}"
    );
}

// ============================================================================
// Rules and semicolons
// ============================================================================

#[test]
fn test_semicolon_cleanup() {
    assert_eq!(remove_unnecessary_semicolons("a{color:red;;}"), "a{color:red}");
    assert_eq!(remove_empty_rules("a{}b{color:red}"), "b{color:red}");
    assert_eq!(condense_semicolons("a;;;b"), "a;b");
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_zero_unit_rules() {
    assert_eq!(condense_zero_units("margin:0px"), "margin:0");
    assert_eq!(condense_multidimensional_zeros("margin:0 0 0 0;"), "margin:0;");
    assert_eq!(
        condense_multidimensional_zeros("background-position:0 0;"),
        "background-position:0 0;"
    );
}

#[test]
fn test_float_condensing_leaves_unit() {
    assert_eq!(condense_floating_points("margin:0.5em;"), "margin:.5em;");
    assert_eq!(condense_zero_units("margin:0.5em;"), "margin:0.5em;");
}

// ============================================================================
// Colors
// ============================================================================

#[test]
fn test_color_condensing() {
    assert_eq!(normalize_rgb_colors_to_hex("rgb(255, 0, 17)"), "#ff0011");
    assert_eq!(condense_hex_colors("a{color:#aabbcc}"), "a{color:#abc}");
    assert_eq!(condense_hex_colors("a{color:#aabbcd}"), "a{color:#aabbcd}");
}

#[test]
fn test_invalid_rgb_untouched() {
    assert_eq!(
        normalize_rgb_colors_to_hex("a{color:rgb(256,1,1)}"),
        "a{color:rgb(256,1,1)}"
    );
}

// ============================================================================
// Wrapping
// ============================================================================

#[test]
fn test_wrap_lines_stay_near_width() {
    let css = "a{color:red}b{color:blue}c{margin:0}d{padding:0}e{top:0}";
    let wrapped = wrap_css_lines(css, 20);

    for line in wrapped.lines() {
        assert!(line.ends_with('}'), "line split mid-rule: {}", line);
    }
    // Joining the lines gives back the original document
    assert_eq!(wrapped.replace('\n', ""), css);
}

// ============================================================================
// Placeholders
// ============================================================================

#[test]
fn test_placeholders_round_trip_through_blanket_rules() {
    let css = "a{width:calc(1px + 2px)}";
    let mut table = Placeholders::for_text(css);
    let marker = table.protect("CALC", "calc(1px + 2px)");
    let hidden = css.replace("calc(1px + 2px)", &marker);

    let squeezed = hidden.replace(' ', "");
    assert_eq!(table.restore(&squeezed), css);
}
