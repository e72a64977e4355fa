//! Typed view tree produced by the renderer.
//!
//! Nothing in here knows about markup syntax; [`crate::render::html`] turns a
//! tree into escaped HTML.

/// A node in the view tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// Attribute value, tagged with how the backend must treat it
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Plain value, escaped for attribute context
    Text(String),
    /// Link target or resource source; scheme-checked before escaping
    Url(String),
}

impl AttrValue {
    pub fn as_str(&self) -> &str {
        match self {
            AttrValue::Text(value) | AttrValue::Url(value) => value,
        }
    }
}

/// An element with attributes and children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, AttrValue)>,
    pub children: Vec<Node>,
}

/// Start building an element
pub fn el(tag: &'static str) -> Element {
    Element::new(tag)
}

/// Create a text node
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, AttrValue::Text(value.into())));
        self
    }

    pub fn url_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, AttrValue::Url(value.into())));
        self
    }

    pub fn class(self, class: &'static str) -> Self {
        self.attr("class", class)
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append a text child
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(text(content))
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr, _)| *attr == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr_value("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Whether this element never has children or a closing tag
    pub fn is_void(&self) -> bool {
        matches!(self.tag, "img" | "br" | "hr" | "input" | "meta" | "link")
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<String> for Node {
    fn from(content: String) -> Self {
        Node::Text(content)
    }
}

impl From<&str> for Node {
    fn from(content: &str) -> Self {
        Node::Text(content.to_string())
    }
}

impl Node {
    /// Concatenated text of this node and all its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(content) => out.push_str(content),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// All elements with the given tag, in document order, including this node
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk(&mut |element| {
            if element.tag == tag {
                found.push(element);
            }
        });
        found
    }

    /// All elements carrying the given class, in document order
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk(&mut |element| {
            if element.has_class(class) {
                found.push(element);
            }
        });
        found
    }

    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        if let Node::Element(element) = self {
            visit(element);
            for child in &element.children {
                child.walk(visit);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_queries() {
        let node: Node = el("div")
            .class("result-item")
            .child(el("p").text("one"))
            .child(el("p").class("note").text("two"))
            .into();

        assert_eq!(node.text_content(), "onetwo");
        assert_eq!(node.find_all("p").len(), 2);
        assert_eq!(node.find_by_class("note").len(), 1);
        assert_eq!(node.find_by_class("result-item")[0].tag, "div");
    }

    #[test]
    fn test_has_class_matches_whole_names() {
        let element = el("button").class("tab-btn active");
        assert!(element.has_class("active"));
        assert!(element.has_class("tab-btn"));
        assert!(!element.has_class("tab"));
    }
}
