//! Minimal tag-tree reader and writer for the collection file.
//!
//! The format only needs named elements with either text or nested
//! elements - no attributes, comments or processing instructions. The
//! five markup-reserved characters are escaped on write and restored on
//! read so field text round-trips unchanged.

use crate::StorageError;

/// A parsed element: a name plus either text content or child elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Element {
    pub name: String,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    /// Creates an element that will hold child elements.
    pub fn node(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Creates a text-only element.
    pub fn leaf(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Appends a child element.
    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// First child with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Trimmed text of the first child with the given name.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(|c| c.text.trim())
    }

    /// All children with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Parses a document consisting of a single root element.
    pub fn parse(input: &str) -> Result<Element, StorageError> {
        let mut cursor = Cursor { input, pos: 0 };
        cursor.skip_ws();
        let root = cursor.parse_element()?;
        cursor.skip_ws();
        if !cursor.at_end() {
            return Err(StorageError::parse("trailing content after root element"));
        }
        Ok(root)
    }

    /// Renders the element tree with two-space indentation.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0);
        out
    }

    fn render_into(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        if self.children.is_empty() {
            out.push_str(&format!(
                "{indent}<{name}>{text}</{name}>\n",
                name = self.name,
                text = escape(&self.text)
            ));
        } else {
            out.push_str(&format!("{indent}<{}>\n", self.name));
            for child in &self.children {
                child.render_into(out, depth + 1);
            }
            out.push_str(&format!("{indent}</{}>\n", self.name));
        }
    }
}

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl Cursor<'_> {
    fn rest(&self) -> &str {
        &self.input[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn skip_ws(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.input.len() - trimmed.len();
    }

    fn expect(&mut self, token: &str) -> Result<(), StorageError> {
        if self.rest().starts_with(token) {
            self.pos += token.len();
            Ok(())
        } else {
            Err(StorageError::parse(format!(
                "expected {token:?} at offset {}",
                self.pos
            )))
        }
    }

    fn read_name(&mut self) -> Result<String, StorageError> {
        let name: String = self
            .rest()
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();
        if name.is_empty() {
            return Err(StorageError::parse(format!(
                "expected element name at offset {}",
                self.pos
            )));
        }
        self.pos += name.len();
        Ok(name)
    }

    fn parse_element(&mut self) -> Result<Element, StorageError> {
        self.expect("<")?;
        let name = self.read_name()?;
        self.expect(">")?;

        let mut element = Element::node(name);

        self.skip_ws();
        if self.rest().starts_with('<') && !self.rest().starts_with("</") {
            // Nested elements until the closing tag.
            while !self.rest().starts_with("</") {
                element.push(self.parse_element()?);
                self.skip_ws();
            }
        } else if !self.rest().starts_with("</") {
            // Text content up to the next tag.
            let end = self
                .rest()
                .find('<')
                .ok_or_else(|| StorageError::parse(format!("unclosed <{}>", element.name)))?;
            element.text = unescape(&self.rest()[..end])?;
            self.pos += end;
        }

        self.expect("</")?;
        let closing = self.read_name()?;
        self.expect(">")?;
        if closing != element.name {
            return Err(StorageError::parse(format!(
                "mismatched closing tag: expected </{}>, found </{closing}>",
                element.name
            )));
        }
        Ok(element)
    }
}

/// Escapes the five markup-reserved characters.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Reverses [`escape`]. Unknown entities are a parse error.
pub(crate) fn unescape(text: &str) -> Result<String, StorageError> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(idx) = rest.find('&') {
        out.push_str(&rest[..idx]);
        rest = &rest[idx..];
        let entity = [
            ("&amp;", '&'),
            ("&lt;", '<'),
            ("&gt;", '>'),
            ("&quot;", '"'),
            ("&apos;", '\''),
        ]
        .iter()
        .find(|(token, _)| rest.starts_with(token));
        match entity {
            Some((token, replacement)) => {
                out.push(*replacement);
                rest = &rest[token.len()..];
            }
            None => {
                let preview: String = rest.chars().take(8).collect();
                return Err(StorageError::parse(format!("unknown entity: {preview:?}")));
            }
        }
    }
    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_leaf() {
        let el = Element::parse("<id>42</id>").unwrap();
        assert_eq!(el.name, "id");
        assert_eq!(el.text, "42");
        assert!(el.children.is_empty());
    }

    #[test]
    fn parse_empty_leaf() {
        let el = Element::parse("<semesterEnum></semesterEnum>").unwrap();
        assert_eq!(el.text, "");
    }

    #[test]
    fn parse_nested() {
        let el = Element::parse("<coordinates>\n  <x>1</x>\n  <y>2.5</y>\n</coordinates>").unwrap();
        assert_eq!(el.children.len(), 2);
        assert_eq!(el.child_text("x"), Some("1"));
        assert_eq!(el.child_text("y"), Some("2.5"));
        assert_eq!(el.child_text("z"), None);
    }

    #[test]
    fn fields_found_by_name_not_position() {
        let el = Element::parse("<p><b>2</b><a>1</a></p>").unwrap();
        assert_eq!(el.child_text("a"), Some("1"));
        assert_eq!(el.child_text("b"), Some("2"));
    }

    #[test]
    fn mismatched_closing_tag_is_rejected() {
        let err = Element::parse("<a>text</b>").unwrap_err();
        assert!(matches!(err, StorageError::Parse(_)));
    }

    #[test]
    fn trailing_content_is_rejected() {
        let err = Element::parse("<a>1</a><b>2</b>").unwrap_err();
        assert!(matches!(err, StorageError::Parse(_)));
    }

    #[test]
    fn truncated_document_is_rejected() {
        assert!(Element::parse("<a><b>1</b>").is_err());
        assert!(Element::parse("<a>unterminated").is_err());
        assert!(Element::parse("").is_err());
    }

    #[test]
    fn escaping_round_trips() {
        let original = r#"math & <physics> "lab" 'A'"#;
        let escaped = escape(original);
        assert!(!escaped.contains('<'));
        assert_eq!(unescape(&escaped).unwrap(), original);
    }

    #[test]
    fn unknown_entity_is_rejected() {
        assert!(unescape("&bogus;").is_err());
    }

    #[test]
    fn render_then_parse_preserves_tree() {
        let mut root = Element::node("root");
        root.push(Element::leaf("name", "a < b"));
        let mut nested = Element::node("inner");
        nested.push(Element::leaf("value", ""));
        root.push(nested);

        let rendered = root.render();
        let reparsed = Element::parse(&rendered).unwrap();
        assert_eq!(reparsed, root);
    }
}
