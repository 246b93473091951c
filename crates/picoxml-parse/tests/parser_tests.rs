//! Integration tests for tree construction, error handling, and rendering.

use picoxml_dom::XmlNode;
use picoxml_parse::{ParseError, XmlParser};

fn parse(markup: &str) -> XmlParser {
    let mut parser = XmlParser::new();
    parser.feed(markup).expect("markup should parse");
    parser
}

#[test]
fn builds_the_documented_example_tree() {
    let parser = parse("<a x=\"1\"><b/>hi</a>");
    assert!(parser.is_finished());

    let root = parser.root_element().expect("root element");
    assert_eq!(root.name(), "a");
    assert_eq!(root.attribute("x"), Some("1"));
    assert_eq!(root.children().len(), 2);

    let mut children = root.children().iter();
    let first = children.next().expect("first child");
    let XmlNode::Element(b) = first else {
        panic!("expected element child, got {first:?}");
    };
    assert_eq!(b.name(), "b");
    assert!(b.children().is_empty());

    let second = children.next().expect("second child");
    let XmlNode::Text(text) = second else {
        panic!("expected text child, got {second:?}");
    };
    assert_eq!(text.text(), "hi");
}

#[test]
fn render_normalizes_self_closing_tags() {
    let parser = parse("<a x=\"1\"><b/>hi</a>");
    assert_eq!(parser.render(), "<a x=\"1\"><b></b>hi</a>");
}

#[test]
fn whitespace_between_tags_is_dropped_but_text_whitespace_survives() {
    let parser = parse("<top>\t<foo> TEXT</foo>But  not  here</top>");
    assert_eq!(parser.render(), "<top><foo>TEXT</foo>But  not  here</top>");
}

#[test]
fn incremental_renders_auto_close_open_elements() {
    let mut parser = XmlParser::new();

    parser.feed("<foo><bar><baz>Bar").unwrap();
    assert!(!parser.is_finished());
    assert_eq!(parser.render(), "<foo><bar><baz>Bar</baz></bar></foo>");

    parser.feed("Text</baz>").unwrap();
    assert!(!parser.is_finished());
    assert_eq!(parser.render(), "<foo><bar><baz>BarText</baz></bar></foo>");

    parser.feed("</bar>Some other text</fo").unwrap();
    assert!(!parser.is_finished());
    assert_eq!(
        parser.render(),
        "<foo><bar><baz>BarText</baz></bar>Some other text</foo>"
    );

    parser.feed("o>").unwrap();
    assert!(parser.is_finished());
    assert_eq!(
        parser.render(),
        "<foo><bar><baz>BarText</baz></bar>Some other text</foo>"
    );
}

#[test]
fn unbalanced_close_reports_both_names() {
    let mut parser = XmlParser::new();
    assert_eq!(
        parser.feed("<a><b></a>"),
        Err(ParseError::UnbalancedTag {
            expected: "b".to_string(),
            found: "a".to_string()
        })
    );
}

#[test]
fn unbalanced_close_is_detected_at_any_depth() {
    let mut parser = XmlParser::new();
    assert_eq!(
        parser.feed("<a><b><c><d></c>"),
        Err(ParseError::UnbalancedTag {
            expected: "d".to_string(),
            found: "c".to_string()
        })
    );
}

#[test]
fn close_without_open_is_rejected_immediately() {
    let mut parser = XmlParser::new();
    assert_eq!(
        parser.feed("</a>"),
        Err(ParseError::UnexpectedClose("a".to_string()))
    );
}

#[test]
fn self_closing_tags_never_expect_a_close() {
    let mut parser = XmlParser::new();
    parser.feed("<b/>").unwrap();
    assert!(parser.is_finished());
    assert_eq!(
        parser.feed("</b>"),
        Err(ParseError::UnexpectedClose("b".to_string()))
    );
}

#[test]
fn second_top_level_element_is_rejected() {
    let mut parser = XmlParser::new();
    parser.feed("<a></a>").unwrap();
    assert_eq!(
        parser.feed("<b>"),
        Err(ParseError::MultipleTopLevelElements("b".to_string()))
    );
}

#[test]
fn second_top_level_element_is_rejected_after_self_closing_root() {
    let mut parser = XmlParser::new();
    assert_eq!(
        parser.feed("<a/><b/>"),
        Err(ParseError::MultipleTopLevelElements("b".to_string()))
    );
}

#[test]
fn errors_poison_the_parser() {
    let mut parser = XmlParser::new();
    let error = parser.feed("</a>").unwrap_err();
    assert_eq!(parser.feed("<ok></ok>"), Err(error));
    assert!(!parser.is_finished());
}

#[test]
fn is_finished_tracks_the_open_stack() {
    let mut parser = XmlParser::new();
    assert!(!parser.is_finished());
    parser.feed("<a><b>").unwrap();
    assert!(!parser.is_finished());
    parser.feed("</b>").unwrap();
    assert!(!parser.is_finished());
    parser.feed("</a>").unwrap();
    assert!(parser.is_finished());
}

#[test]
fn processing_instructions_never_enter_the_tree() {
    let parser = parse("<r><?xml version?>text</r>");
    let root = parser.root_element().expect("root element");
    assert_eq!(root.children().len(), 1);
    assert_eq!(parser.render(), "<r>text</r>");
}

#[test]
fn top_level_text_attaches_to_the_document() {
    let parser = parse("lead<a></a>");
    assert!(parser.is_finished());
    assert_eq!(parser.render(), "lead<a></a>");
    assert_eq!(parser.root_element().map(|el| el.name().to_string()), Some("a".to_string()));
}

#[test]
fn duplicate_attributes_are_preserved_in_source_order() {
    let parser = parse("<a k=\"1\" k=\"2\"></a>");
    assert_eq!(parser.render(), "<a k=\"1\" k=\"2\"></a>");
    assert_eq!(parser.root_element().and_then(|el| el.attribute("k")), Some("1"));
}

#[test]
fn into_document_hands_over_the_tree() {
    let parser = parse("<a>hi</a>");
    let document = parser.into_document();
    assert_eq!(document.render(), "<a>hi</a>");
}
