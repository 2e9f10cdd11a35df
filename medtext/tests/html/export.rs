//! Export tests for HTML format (markup → HTML)

use insta::assert_snapshot;
use medtext::format::Format;
use medtext::formats::html::{BodyStyle, HtmlFormat};
use medtext::formats::markup::decode;
use medtext::model::EscapeCatalog;
use medtext::FormattedText;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

fn markup_to_html(source: &str, style: BodyStyle) -> String {
    let doc = decode(source, EscapeCatalog::standard()).unwrap();
    HtmlFormat::new(style).serialize(&doc).unwrap()
}

fn body_of(html: &str) -> String {
    static BODY_REGEX: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r#"(?s)<body style="[^"]*">\n(.*)  </body>"#)
            .expect("valid regex for extracting the body")
    });
    BODY_REGEX
        .captures(html)
        .and_then(|captures| captures.get(1))
        .map(|body| body.as_str().to_string())
        .unwrap_or_default()
}

#[test]
fn test_report_page() {
    let html = markup_to_html("\\H\\REPORT\\N\\~Name:  Smith~", BodyStyle::Fixed);
    assert_snapshot!(html, @r#"
<html>
  <head>
  </head>
  <body style="font-family: 'Courier New'; font-size: 10pt; background-color: #FFF; color: #000;">
    <b>REPORT</b>
    <br />
    Name:&nbsp;&nbsp;Smith
    <br />
  </body>
</html>
"#);
}

#[test]
fn test_empty_document_page() {
    let html = markup_to_html("", BodyStyle::Proportional);
    assert_snapshot!(html, @r#"
<html>
  <head>
  </head>
  <body style="font-family: Arial; font-size: 10pt; background-color: #FFF; color: #000;">
  </body>
</html>
"#);
}

#[test]
fn test_highlight_closes_on_normal() {
    let html = markup_to_html("\\H\\X\\N\\", BodyStyle::Fixed);
    assert_eq!(body_of(&html), "    <b>X</b>\n");
}

#[test]
fn test_local_combinations_nest_tags() {
    let html = markup_to_html("\\ZHIU\\all\\N\\ rest", BodyStyle::Fixed);
    assert_eq!(body_of(&html), "    <b><i><u>all</u></i></b> rest\n");
}

#[test]
fn test_text_is_escaped() {
    let html = markup_to_html("a < b & c > d", BodyStyle::Fixed);
    assert_eq!(body_of(&html), "    a &lt; b &amp; c &gt; d\n");
}

#[test]
fn test_blank_lines_repeat_breaks() {
    let html = markup_to_html("one~~two", BodyStyle::Fixed);
    assert_eq!(
        body_of(&html),
        "    one\n    <br />\n    <br />\n    two\n"
    );
}

#[test]
fn test_style_option() {
    let doc = decode("x", EscapeCatalog::standard()).unwrap();
    let mut options = HashMap::new();
    options.insert("style".to_string(), "proportional".to_string());

    let html = HtmlFormat::default()
        .serialize_with_options(&doc, &options)
        .unwrap();
    assert!(html.contains("<body style=\"font-family: Arial;"));

    options.insert("style".to_string(), "gothic".to_string());
    assert!(HtmlFormat::default()
        .serialize_with_options(&doc, &options)
        .is_err());
}

#[test]
fn test_formatted_text_to_html() {
    let text = FormattedText::new("\\H\\X\\N\\");
    assert_eq!(
        text.to_html(BodyStyle::Fixed).unwrap(),
        markup_to_html("\\H\\X\\N\\", BodyStyle::Fixed)
    );
}
