//! The tree-building parser and a debug tree dump.

mod core;

pub use core::XmlParser;

use picoxml_dom::{Document, XmlNode};

/// Prints an indented dump of the document tree to stdout.
///
/// One line per node: elements as `<name key="value">`, text as
/// `#text "contents"`. Children are indented under their parent.
pub fn print_tree(document: &Document) {
    for node in document.children() {
        print_node(node, 0);
    }
}

fn print_node(node: &XmlNode, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        XmlNode::Text(text) => println!("{indent}#text {:?}", text.text()),
        XmlNode::Element(element) => {
            let mut line = format!("{indent}<{}", element.name());
            for attr in element.attributes() {
                line.push_str(&format!(" {}={:?}", attr.name(), attr.value()));
            }
            line.push('>');
            println!("{line}");
            for child in element.children() {
                print_node(child, depth + 1);
            }
        }
    }
}
