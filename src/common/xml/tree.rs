//! Owned element tree for small markup documents.
//!
//! Chapter documents are tiny, so they are parsed fully into a tree of
//! [`Element`]s and then queried by tag name. Only elements and attributes
//! are kept; text content, comments and processing instructions are dropped.

use crate::common::{Result, StructureError};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use smallvec::SmallVec;

/// A single markup element with its attributes and child elements.
///
/// Dropping is iterative, so arbitrarily deep documents never exhaust the
/// stack.
#[derive(Debug)]
pub struct Element {
    name: String,
    attributes: SmallVec<[(String, String); 2]>,
    children: Vec<Element>,
}

impl Element {
    /// Create an element with no attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: SmallVec::new(),
            children: Vec::new(),
        }
    }

    /// Qualified tag name, including any namespace prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the named attribute, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Child elements in document order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// All descendant elements with the given tag name, in document order.
    ///
    /// The search covers the whole subtree below this element but never the
    /// element itself, so a match nested inside another match is reported too.
    pub fn descendants_named<'a>(&'a self, name: &'a str) -> Descendants<'a> {
        Descendants::new(&self.children, name)
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self> {
        let name = std::str::from_utf8(start.name().as_ref())?.to_string();
        let mut element = Self::new(name);

        for attr in start.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
            let value = attr
                .unescape_value()
                .map_err(|e| StructureError::Malformed(format!("attribute {}: {}", key, e)))?
                .into_owned();
            element.attributes.push((key, value));
        }

        Ok(element)
    }
}

impl Drop for Element {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut child) = pending.pop() {
            pending.append(&mut child.children);
        }
    }
}

/// Preorder iterator over elements matching a tag name.
///
/// Keeps one slice iterator per open level, so traversal is iterative and
/// document order is preserved.
pub struct Descendants<'a> {
    stack: Vec<std::slice::Iter<'a, Element>>,
    name: &'a str,
}

impl<'a> Descendants<'a> {
    fn new(roots: &'a [Element], name: &'a str) -> Self {
        Self {
            stack: vec![roots.iter()],
            name,
        }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some(element) => {
                    if !element.children.is_empty() {
                        self.stack.push(element.children.iter());
                    }
                    if element.name == self.name {
                        return Some(element);
                    }
                },
                None => {
                    self.stack.pop();
                },
            }
        }
    }
}

/// A parsed, well-formed markup document.
#[derive(Debug)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Parse a document, rejecting anything that is not well-formed.
    ///
    /// Besides the checks quick-xml performs (mismatched end tags, broken
    /// attributes), this rejects unclosed elements, a missing root, more than
    /// one root, and text, entity references or CDATA outside the root.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut open: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event()? {
                Event::Start(ref e) => {
                    open.push(Element::from_start(e)?);
                },
                Event::Empty(ref e) => {
                    let element = Element::from_start(e)?;
                    Self::attach(&mut open, &mut root, element)?;
                },
                Event::End(ref e) => {
                    let element = open.pop().ok_or_else(|| {
                        StructureError::Malformed(format!(
                            "unexpected closing tag </{}>",
                            String::from_utf8_lossy(e.name().as_ref())
                        ))
                    })?;
                    Self::attach(&mut open, &mut root, element)?;
                },
                Event::Text(ref t) => {
                    if open.is_empty() && !t.iter().all(u8::is_ascii_whitespace) {
                        return Err(StructureError::Malformed(
                            "text outside the document element".to_string(),
                        ));
                    }
                },
                Event::GeneralRef(_) if open.is_empty() => {
                    return Err(StructureError::Malformed(
                        "entity reference outside the document element".to_string(),
                    ));
                },
                Event::CData(_) if open.is_empty() => {
                    return Err(StructureError::Malformed(
                        "CDATA outside the document element".to_string(),
                    ));
                },
                Event::Eof => break,
                _ => {},
            }
        }

        if let Some(element) = open.last() {
            return Err(StructureError::Malformed(format!(
                "unclosed element <{}>",
                element.name
            )));
        }

        root.map(|root| Self { root })
            .ok_or_else(|| StructureError::Malformed("no document element".to_string()))
    }

    /// The document element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// All elements with the given tag name, document element included.
    pub fn elements_named<'a>(&'a self, name: &'a str) -> Descendants<'a> {
        Descendants::new(std::slice::from_ref(&self.root), name)
    }

    fn attach(open: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
        match open.last_mut() {
            Some(parent) => parent.children.push(element),
            None if root.is_none() => *root = Some(element),
            None => {
                return Err(StructureError::Malformed(format!(
                    "second document element <{}>",
                    element.name
                )));
            },
        }
        Ok(())
    }
}
