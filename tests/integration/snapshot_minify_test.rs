//! Minified output snapshot tests
//!
//! Pins the exact bytes produced for small but realistic stylesheets.

use cssmin::minify;

const RESET: &str = r#"
/*! reset.css | MIT */
html, body {
    padding: 0px 0px 0px 0px;
    margin: 0px;
}

/* Links */
a:hover , a :focus {
    color: rgb(51, 102, 153);
    background: #FFFFFF;
}

.box {
    width: calc(100% - 2 * 10px);
    opacity: 0.75;
    background-position: 0 0;
}

.unused { }
"#;

#[test]
fn snapshot_reset_stylesheet() {
    let output = minify(RESET, None);
    insta::assert_snapshot!(output, @"/*!reset.css | MIT */ html,body{padding:0;margin:0}a:hover,a :focus{color:#369;background:#FFF}.box{width:calc(100% - 2 * 10px);opacity:.75;background-position:0 0}");
}

#[test]
fn snapshot_reset_stylesheet_wrapped() {
    let output = minify(RESET, Some(40));
    insta::assert_snapshot!(output, @r"
    /*!reset.css | MIT */ html,body{padding:0;margin:0}
    a:hover,a :focus{color:#369;background:#FFF}
    .box{width:calc(100% - 2 * 10px);opacity:.75;background-position:0 0}
    ");
}
