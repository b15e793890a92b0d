//! XML support layer: a small owned element tree plus the safe child-value
//! accessors the response mappers are built on, and the ordered emitter used
//! by the request serializers.
//!
//! The accessor family never fails: a missing, empty, or unparseable child
//! yields the documented zero value for its type. This keeps the mappers
//! resilient to the server omitting optional fields, at the cost of not
//! distinguishing "absent" from "present but zero" -- callers that care must
//! inspect [`Element::child`] directly.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use quick_xml::events::Event;
use quick_xml::Reader;
use rust_decimal::Decimal;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    #[error("malformed XML: {0}")]
    Malformed(String),

    #[error("missing element: {0}")]
    MissingElement(String),
}

impl From<quick_xml::Error> for XmlError {
    fn from(err: quick_xml::Error) -> Self {
        XmlError::Malformed(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Element -- owned XML tree
// ---------------------------------------------------------------------------

/// One child node of an [`Element`]: nested element, text run, or CDATA
/// section. Text and CDATA are kept distinct so CDATA-bearing content can be
/// reproduced on re-serialization.
#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Text(String),
    CData(String),
}

/// An owned XML element with its attributes and child nodes.
#[derive(Debug, Clone)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    nodes: Vec<Node>,
}

impl Element {
    /// Parse an XML document and return its root element.
    ///
    /// This is the only place in the mapping layer that can fail: a document
    /// that does not tokenize, or that contains no root element, is an error.
    /// Everything below the root is accessed through the lenient accessors.
    pub fn parse(xml: &str) -> Result<Element, XmlError> {
        let mut reader = Reader::from_str(xml);
        // Leave text untrimmed: this quick-xml version emits entity references
        // (`&amp;` etc.) as separate `GeneralRef` events, splitting a text run
        // into pieces. Per-event trimming would then eat the whitespace that
        // sits next to an entity inside a value. Whitespace-only runs (the
        // pretty-print indentation between elements) are dropped below instead.
        reader.config_mut().trim_text(false);

        let mut stack: Vec<Element> = Vec::new();

        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    stack.push(element_from_start(&start)?);
                }
                Event::Empty(start) => {
                    let element = element_from_start(&start)?;
                    match stack.last_mut() {
                        Some(parent) => parent.nodes.push(Node::Element(element)),
                        None => return Ok(element),
                    }
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| XmlError::Malformed("unbalanced end tag".to_string()))?;
                    match stack.last_mut() {
                        Some(parent) => parent.nodes.push(Node::Element(element)),
                        None => return Ok(element),
                    }
                }
                Event::Text(text) => {
                    let decoded = text
                        .decode()
                        .map_err(|e| XmlError::Malformed(e.to_string()))?;
                    let unescaped = quick_xml::escape::unescape(&decoded)
                        .map_err(|e| XmlError::Malformed(e.to_string()))?;
                    // Drop whitespace-only runs (inter-element indentation).
                    if !unescaped.trim().is_empty() {
                        if let Some(parent) = stack.last_mut() {
                            parent.nodes.push(Node::Text(unescaped.into_owned()));
                        }
                    }
                }
                Event::GeneralRef(reference) => {
                    let decoded = reference
                        .decode()
                        .map_err(|e| XmlError::Malformed(e.to_string()))?;
                    let entity = format!("&{decoded};");
                    let unescaped = quick_xml::escape::unescape(&entity)
                        .map_err(|e| XmlError::Malformed(e.to_string()))?;
                    if let Some(parent) = stack.last_mut() {
                        parent.nodes.push(Node::Text(unescaped.into_owned()));
                    }
                }
                Event::CData(cdata) => {
                    let decoded = std::str::from_utf8(cdata.as_ref())
                        .map_err(|e| XmlError::Malformed(e.to_string()))?;
                    if let Some(parent) = stack.last_mut() {
                        parent.nodes.push(Node::CData(decoded.to_string()));
                    }
                }
                Event::Eof => {
                    return Err(XmlError::MissingElement("document root".to_string()));
                }
                // Declarations, comments, processing instructions.
                _ => {}
            }
        }
    }

    /// The element's tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterate over all child elements, in document order.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// The first child element with the given name, if any.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.child_elements().find(|e| e.name == name)
    }

    /// All child elements with the given name, in document order.
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.child_elements().filter(move |e| e.name == name)
    }

    /// Concatenated text content of this element and all its descendants,
    /// CDATA included, in document order.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.nodes {
            match node {
                Node::Element(e) => e.collect_text(out),
                Node::Text(t) => out.push_str(t),
                Node::CData(t) => out.push_str(t),
            }
        }
    }

    // -- Safe child accessors ----------------------------------------------

    /// Text of the named child, or "" when the child is absent.
    pub fn child_text(&self, name: &str) -> String {
        self.child(name).map(|e| e.text()).unwrap_or_default()
    }

    /// Named child parsed as `i32`, or 0 when absent or unparseable.
    pub fn child_i32(&self, name: &str) -> i32 {
        self.child(name)
            .and_then(|e| e.text().trim().parse().ok())
            .unwrap_or(0)
    }

    /// Named child parsed as `i64`, or 0 when absent or unparseable.
    pub fn child_i64(&self, name: &str) -> i64 {
        self.child(name)
            .and_then(|e| e.text().trim().parse().ok())
            .unwrap_or(0)
    }

    /// Named child parsed as a decimal, or zero when absent or unparseable.
    ///
    /// Thousands separators are tolerated, matching the currency-style
    /// parsing of the original wire format.
    pub fn child_decimal(&self, name: &str) -> Decimal {
        self.child(name)
            .and_then(|e| {
                let text = e.text();
                let trimmed = text.trim().replace(',', "");
                Decimal::from_str(&trimmed).ok()
            })
            .unwrap_or(Decimal::ZERO)
    }

    /// Named child parsed as a UTC timestamp, or `None` when absent or
    /// unparseable.
    pub fn child_datetime(&self, name: &str) -> Option<DateTime<Utc>> {
        self.child(name)
            .and_then(|e| parse_datetime(e.text().trim()))
    }

    /// Named child parsed as an absolute URL, or `None` when absent, empty,
    /// or invalid.
    pub fn child_url(&self, name: &str) -> Option<Url> {
        self.child(name).and_then(|e| {
            let text = e.text();
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Url::parse(trimmed).ok()
            }
        })
    }

    /// Concatenation of every CDATA section under the named child (at any
    /// depth), or "" when the child is absent. Multi-segment CDATA joins in
    /// document order.
    pub fn child_cdata(&self, name: &str) -> String {
        let mut out = String::new();
        if let Some(child) = self.child(name) {
            child.collect_cdata(&mut out);
        }
        out
    }

    fn collect_cdata(&self, out: &mut String) {
        for node in &self.nodes {
            match node {
                Node::Element(e) => e.collect_cdata(out),
                Node::CData(t) => out.push_str(t),
                Node::Text(_) => {}
            }
        }
    }

    // -- Re-serialization --------------------------------------------------

    /// Render this element back to an XML fragment.
    ///
    /// Used for the arbitrary description fragments that pass through the
    /// product mapper untouched. Text is escaped, CDATA sections are
    /// preserved as CDATA.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        self.write_xml(&mut out);
        out
    }

    fn write_xml(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&quick_xml::escape::escape(value.as_str()));
            out.push('"');
        }
        if self.nodes.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for node in &self.nodes {
            match node {
                Node::Element(e) => e.write_xml(out),
                Node::Text(t) => out.push_str(&quick_xml::escape::partial_escape(t.as_str())),
                Node::CData(t) => {
                    out.push_str("<![CDATA[");
                    out.push_str(t);
                    out.push_str("]]>");
                }
            }
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

fn element_from_start(start: &quick_xml::events::BytesStart<'_>) -> Result<Element, XmlError> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|e| XmlError::Malformed(e.to_string()))?
        .to_string();

    let mut attributes = Vec::new();
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| XmlError::Malformed(e.to_string()))?;
        let key = std::str::from_utf8(attribute.key.as_ref())
            .map_err(|e| XmlError::Malformed(e.to_string()))?
            .to_string();
        let value = attribute
            .unescape_value()
            .map_err(|e| XmlError::Malformed(e.to_string()))?
            .into_owned();
        attributes.push((key, value));
    }

    Ok(Element {
        name,
        attributes,
        nodes: Vec::new(),
    })
}

/// Parse an ISO 8601 timestamp, falling back to the naive `...Z` form the
/// server sometimes emits without an offset.
fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.fZ")
                .map(|ndt| ndt.and_utc())
                .ok()
        })
}

// ---------------------------------------------------------------------------
// XmlBuilder -- ordered request emitter
// ---------------------------------------------------------------------------

/// Push-style XML emitter for request bodies.
///
/// Sibling order on the wire is exactly call order; the server may be strict
/// about it, so each serializer states its element order explicitly rather
/// than deriving it. Raw and CDATA passthrough exist for the description
/// fragments that must bypass escaping.
#[derive(Debug, Default)]
pub struct XmlBuilder {
    out: String,
}

impl XmlBuilder {
    pub fn new() -> Self {
        XmlBuilder::default()
    }

    /// Open a container element.
    pub fn open(&mut self, tag: &str) -> &mut Self {
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push('>');
        self
    }

    /// Close a container element.
    pub fn close(&mut self, tag: &str) -> &mut Self {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
        self
    }

    /// Emit `<tag>text</tag>` with the text escaped.
    pub fn element(&mut self, tag: &str, text: &str) -> &mut Self {
        self.open(tag);
        self.out
            .push_str(&quick_xml::escape::partial_escape(text));
        self.close(tag)
    }

    /// Emit `<tag>text</tag>` only when the value is present.
    pub fn element_opt(&mut self, tag: &str, text: Option<&str>) -> &mut Self {
        if let Some(text) = text {
            self.element(tag, text);
        }
        self
    }

    /// Emit a pre-rendered fragment without escaping.
    pub fn raw(&mut self, fragment: &str) -> &mut Self {
        self.out.push_str(fragment);
        self
    }

    /// Emit `<tag><![CDATA[text]]></tag>`.
    pub fn cdata_element(&mut self, tag: &str, text: &str) -> &mut Self {
        self.open(tag);
        self.out.push_str("<![CDATA[");
        self.out.push_str(text);
        self.out.push_str("]]>");
        self.close(tag)
    }

    /// Consume the builder and return the accumulated XML.
    pub fn finish(self) -> String {
        self.out
    }
}
