//! Unit tests for the XML element tree, the safe accessors, and the emitter.

use ondemand_sdk::xml::{Element, XmlBuilder};
use rust_decimal::Decimal;

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

#[test]
fn parse_returns_the_root_element() {
    let root = Element::parse("<Quote><QuoteID>132</QuoteID></Quote>").unwrap();
    assert_eq!("Quote", root.name());
}

#[test]
fn parse_skips_the_declaration() {
    let root = Element::parse("<?xml version='1.0' encoding='UTF-8'?><File/>").unwrap();
    assert_eq!("File", root.name());
}

#[test]
fn parse_rejects_malformed_documents() {
    assert!(Element::parse("<Quote><QuoteID>132</Quote>").is_err());
    assert!(Element::parse("").is_err());
}

#[test]
fn text_concatenates_descendants() {
    let root = Element::parse("<A>one<B>two</B>three</A>").unwrap();
    assert_eq!("onetwothree", root.text());
}

#[test]
fn text_unescapes_entities() {
    let root = Element::parse("<A>fish &amp; chips</A>").unwrap();
    assert_eq!("fish & chips", root.text());
}

// ---------------------------------------------------------------------------
// Safe accessors: absent, empty, and malformed children all default
// ---------------------------------------------------------------------------

#[test]
fn child_text_defaults_to_empty() {
    let root = Element::parse("<A><B>x</B></A>").unwrap();
    assert_eq!("x", root.child_text("B"));
    assert_eq!("", root.child_text("Missing"));
}

#[test]
fn child_i32_defaults_to_zero() {
    let root = Element::parse("<A><N>41</N><Bad>forty-one</Bad><Empty/></A>").unwrap();
    assert_eq!(41, root.child_i32("N"));
    assert_eq!(0, root.child_i32("Bad"));
    assert_eq!(0, root.child_i32("Empty"));
    assert_eq!(0, root.child_i32("Missing"));
}

#[test]
fn child_i64_defaults_to_zero() {
    let root = Element::parse("<A><N>5000000000</N><Bad>x</Bad></A>").unwrap();
    assert_eq!(5_000_000_000, root.child_i64("N"));
    assert_eq!(0, root.child_i64("Bad"));
}

#[test]
fn child_decimal_defaults_to_zero() {
    let root = Element::parse("<A><D>1.70</D><Grouped>1,234.56</Grouped><Bad>-</Bad><Empty/></A>")
        .unwrap();
    assert_eq!(Decimal::new(170, 2), root.child_decimal("D"));
    assert_eq!(Decimal::new(123_456, 2), root.child_decimal("Grouped"));
    assert_eq!(Decimal::ZERO, root.child_decimal("Bad"));
    assert_eq!(Decimal::ZERO, root.child_decimal("Empty"));
    assert_eq!(Decimal::ZERO, root.child_decimal("Missing"));
}

#[test]
fn child_datetime_defaults_to_none() {
    let root =
        Element::parse("<A><When>2014-01-25T10:32:02Z</When><Bad>yesterday</Bad></A>").unwrap();
    let when = root.child_datetime("When").unwrap();
    assert_eq!("2014-01-25 10:32:02 UTC", when.to_string());
    assert!(root.child_datetime("Bad").is_none());
    assert!(root.child_datetime("Missing").is_none());
}

#[test]
fn child_url_defaults_to_none() {
    let root = Element::parse(
        "<A><U>https://example.com/x</U><Bad>not a url</Bad><Empty></Empty></A>",
    )
    .unwrap();
    assert_eq!(
        "https://example.com/x",
        root.child_url("U").unwrap().as_str()
    );
    assert!(root.child_url("Bad").is_none());
    assert!(root.child_url("Empty").is_none());
    assert!(root.child_url("Missing").is_none());
}

#[test]
fn child_cdata_concatenates_segments() {
    let root = Element::parse(
        "<A><Summary><![CDATA[first]]>ignored<![CDATA[ second]]></Summary></A>",
    )
    .unwrap();
    assert_eq!("first second", root.child_cdata("Summary"));
    assert_eq!("", root.child_cdata("Missing"));
}

#[test]
fn children_iterates_matching_elements_in_order() {
    let root = Element::parse("<A><B>1</B><C>x</C><B>2</B></A>").unwrap();
    let values: Vec<String> = root.children("B").map(|e| e.text()).collect();
    assert_eq!(vec!["1".to_string(), "2".to_string()], values);
}

// ---------------------------------------------------------------------------
// Re-serialization of arbitrary fragments
// ---------------------------------------------------------------------------

#[test]
fn to_xml_round_trips_a_fragment() {
    let root = Element::parse(r#"<Detail kind="shoe"><Size>44 &amp; up</Size></Detail>"#).unwrap();
    assert_eq!(
        r#"<Detail kind="shoe"><Size>44 &amp; up</Size></Detail>"#,
        root.to_xml()
    );
}

#[test]
fn to_xml_preserves_cdata() {
    let root = Element::parse("<S><![CDATA[a <b> c]]></S>").unwrap();
    assert_eq!("<S><![CDATA[a <b> c]]></S>", root.to_xml());
}

#[test]
fn to_xml_collapses_empty_elements() {
    let root = Element::parse("<A><B></B></A>").unwrap();
    assert_eq!("<A><B/></A>", root.to_xml());
}

// ---------------------------------------------------------------------------
// XmlBuilder
// ---------------------------------------------------------------------------

#[test]
fn builder_emits_in_call_order() {
    let mut xml = XmlBuilder::new();
    xml.open("Root");
    xml.element("First", "1");
    xml.element("Second", "2");
    xml.close("Root");
    assert_eq!("<Root><First>1</First><Second>2</Second></Root>", xml.finish());
}

#[test]
fn builder_escapes_text_content() {
    let mut xml = XmlBuilder::new();
    xml.element("T", "a < b & c");
    assert_eq!("<T>a &lt; b &amp; c</T>", xml.finish());
}

#[test]
fn builder_skips_absent_optional_elements() {
    let mut xml = XmlBuilder::new();
    xml.element_opt("Present", Some("x"));
    xml.element_opt("Absent", None);
    assert_eq!("<Present>x</Present>", xml.finish());
}

#[test]
fn builder_passes_cdata_and_raw_through_unescaped() {
    let mut xml = XmlBuilder::new();
    xml.cdata_element("Summary", "some <b>bold</b> html");
    xml.raw("<Verbatim/>");
    assert_eq!(
        "<Summary><![CDATA[some <b>bold</b> html]]></Summary><Verbatim/>",
        xml.finish()
    );
}
