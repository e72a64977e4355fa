use crate::render::node::{AttrValue, Element, Node};
use crate::utils::safe_url;

/// Serialize nodes into HTML markup.
///
/// Text is escaped for text context and every attribute value for a
/// double-quoted attribute. URL attributes are scheme-checked first.
pub fn to_html(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node);
    }
    out
}

/// Serialize a single node, appending to `out`
pub fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(content) => {
            html_escape::encode_text_to_string(content, out);
        }
        Node::Element(element) => write_element(out, element),
    }
}

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(element.tag);

    for (name, value) in &element.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        match value {
            AttrValue::Text(value) => {
                html_escape::encode_double_quoted_attribute_to_string(value, out);
            }
            AttrValue::Url(value) => {
                html_escape::encode_double_quoted_attribute_to_string(safe_url(value), out);
            }
        }
        out.push('"');
    }
    out.push('>');

    if element.is_void() {
        return;
    }

    for child in &element.children {
        write_node(out, child);
    }

    out.push_str("</");
    out.push_str(element.tag);
    out.push('>');
}
