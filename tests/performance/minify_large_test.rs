//! Performance tests for minifying large stylesheets.
//!
//! Every pass is a linear regex sweep or a bounded scan, so a multi-megabyte
//! stylesheet has to finish in seconds, even in debug builds.
//!
//! Run with: `cargo test --test performance`

use std::time::Instant;

use cssmin::minify;

/// Generate a stylesheet that touches every pass: comments, pseudo-classes,
/// zero units, floats, rgb and hex colors, calc and empty rules.
fn generate_stylesheet(target_bytes: usize) -> String {
    let rules = [
        "/* section comment */\n",
        "/*! preserved banner */\n",
        ".nav-{i} a:hover, .nav-{i} a :focus {\n    color: rgb(51, 102, 153);\n}\n",
        ".box-{i} {\n    margin: 0px 0px 0px 0px;\n    padding: 0.5em 0em;\n}\n",
        "#id-{i} > li + li {\n    background: #FFFFFF url(img/{i}.png) no-repeat;\n    background-position: 0 0;\n}\n",
        ".col-{i} {\n    width: calc(100% - {i}px);\n    opacity: 0.75;;\n}\n",
        ".unused-{i} { }\n",
        "@media screen and (max-width: {i}px) {\n    .m-{i} { border-color: #aabbcc; }\n}\n",
    ];

    let mut css = String::with_capacity(target_bytes + 256);
    let mut i = 0;
    while css.len() < target_bytes {
        let rule = rules[i % rules.len()];
        css.push_str(&rule.replace("{i}", &i.to_string()));
        i += 1;
    }
    css
}

// ========================================================================
// Large Stylesheet Tests
// ========================================================================

/// Test: 2MB stylesheet minifies in under 30 seconds
#[test]
fn minify_large_stylesheet_completes() {
    let css = generate_stylesheet(2 * 1024 * 1024);

    let start = Instant::now();
    let output = minify(&css, None);
    let duration = start.elapsed();

    println!(
        "Minified {} bytes to {} bytes in {:.2}s",
        css.len(),
        output.len(),
        duration.as_secs_f64()
    );

    assert!(
        duration.as_secs() < 30,
        "Minification took too long: {:.2}s",
        duration.as_secs_f64()
    );
    assert!(output.len() < css.len(), "Output should be smaller than input");
}

/// Test: Output of a large stylesheet keeps the expected rewrites
#[test]
fn minify_large_stylesheet_output_is_condensed() {
    let css = generate_stylesheet(512 * 1024);
    let output = minify(&css, None);

    assert!(!output.contains("section comment"));
    assert!(output.contains("/*!preserved banner */"));
    assert!(!output.contains("rgb("));
    assert!(!output.contains(".unused-"));
    assert!(!output.contains(";;"));
    assert!(output.contains("calc(100% - "));
    assert!(output.contains("background-position:0 0"));
    assert!(!output.contains('\n'));
}

/// Test: Wrapping a large stylesheet keeps lines close to the width
#[test]
fn minify_large_stylesheet_with_wrap() {
    let css = generate_stylesheet(1024 * 1024);

    let start = Instant::now();
    let output = minify(&css, Some(500));
    let duration = start.elapsed();

    assert!(
        duration.as_secs() < 30,
        "Wrapped minification took too long: {:.2}s",
        duration.as_secs_f64()
    );

    let lines: Vec<&str> = output.lines().collect();
    assert!(lines.len() > 1, "Large output should span several lines");
    for line in &lines[..lines.len() - 1] {
        assert!(line.ends_with('}'), "Line must end after a rule");
    }
}
