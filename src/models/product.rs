//! Product assets: structured commerce items submitted for translation.

use chrono::{DateTime, Utc};

use crate::models::language::{SourceLanguage, TargetLanguage};
use crate::xml::{Element, XmlBuilder};

// ---------------------------------------------------------------------------
// Sku
// ---------------------------------------------------------------------------

/// A stock-keeping unit belonging to a product.
///
/// Item specifics are ordered name/value pairs; on parse, the first
/// occurrence of a name wins and later duplicates are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sku {
    pub sku_number: String,
    pub item_specifics: Vec<(String, String)>,
}

impl Sku {
    pub fn new(sku_number: &str) -> Sku {
        Sku {
            sku_number: sku_number.to_string(),
            item_specifics: Vec::new(),
        }
    }

    pub fn with_specifics(sku_number: &str, item_specifics: Vec<(String, String)>) -> Sku {
        Sku {
            sku_number: sku_number.to_string(),
            item_specifics,
        }
    }

    pub fn from_element(element: &Element) -> Sku {
        let mut sku = Sku {
            sku_number: element.child_text("SKUNumber"),
            item_specifics: Vec::new(),
        };

        if let Some(specifics) = element.child("ItemSpecifics") {
            for pair in specifics.children("ItemSpecific") {
                let name = pair.child_text("Name");
                let value = pair.child_text("Value");
                if name.is_empty() {
                    continue;
                }
                // First occurrence wins.
                if !sku.item_specifics.iter().any(|(n, _)| *n == name) {
                    sku.item_specifics.push((name, value));
                }
            }
        }

        sku
    }

    /// Map each `<SKU>` child of a container into an instance. A missing
    /// container yields an empty list.
    pub fn parse_list(container: Option<&Element>) -> Vec<Sku> {
        container
            .map(|c| c.children("SKU").map(Sku::from_element).collect())
            .unwrap_or_default()
    }

    /// Element order: SKUNumber, then ItemSpecifics (omitted when empty).
    pub fn to_xml(&self) -> String {
        let mut xml = XmlBuilder::new();
        xml.open("SKU");
        xml.element("SKUNumber", &self.sku_number);

        if !self.item_specifics.is_empty() {
            xml.open("ItemSpecifics");
            for (name, value) in &self.item_specifics {
                xml.open("ItemSpecific");
                xml.element("Name", name);
                xml.element("Value", value);
                xml.close("ItemSpecific");
            }
            xml.close("ItemSpecifics");
        }

        xml.close("SKU");
        xml.finish()
    }
}

// ---------------------------------------------------------------------------
// ProductDescription
// ---------------------------------------------------------------------------

/// The description block of a product.
///
/// Well-formed XML fragments go in `elements` and pass through serialization
/// untouched, in their original order. HTML that is not well-formed XML goes
/// in `summary` and is CDATA-wrapped on the wire. The `<Features>` container
/// is always emitted, even when empty.
#[derive(Debug, Clone, Default)]
pub struct ProductDescription {
    /// Raw XML fragments providing free-form description content.
    pub elements: Vec<String>,
    /// Summary HTML, CDATA-wrapped on the wire.
    pub summary: String,
    /// Product features as ordered name/value pairs.
    pub features: Vec<(String, String)>,
}

impl ProductDescription {
    pub fn from_summary(summary: &str) -> ProductDescription {
        ProductDescription {
            summary: summary.to_string(),
            ..ProductDescription::default()
        }
    }

    pub fn from_features(features: Vec<(String, String)>) -> ProductDescription {
        ProductDescription {
            features,
            ..ProductDescription::default()
        }
    }

    pub fn from_element(element: &Element) -> ProductDescription {
        let features = element
            .child("Features")
            .map(|container| {
                container
                    .child_elements()
                    .map(|feature| (feature.name().to_string(), feature.text()))
                    .collect()
            })
            .unwrap_or_default();

        let elements = element
            .child_elements()
            .filter(|e| e.name() != "Summary" && e.name() != "Features")
            .map(Element::to_xml)
            .collect();

        ProductDescription {
            elements,
            summary: element.child_cdata("Summary"),
            features,
        }
    }

    /// Element order: arbitrary fragments, optional CDATA summary, the
    /// always-present features container.
    pub fn to_xml(&self) -> String {
        let mut xml = XmlBuilder::new();
        xml.open("Description");

        for fragment in &self.elements {
            xml.raw(fragment);
        }

        if !self.summary.is_empty() {
            xml.cdata_element("Summary", &self.summary);
        }

        xml.open("Features");
        for (name, value) in &self.features {
            xml.element(name, value);
        }
        xml.close("Features");

        xml.close("Description");
        xml.finish()
    }
}

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

/// A product with title, categories, SKUs and description to be translated.
#[derive(Debug, Clone, Default)]
pub struct Product {
    /// Server-assigned identifier, 0 before submission.
    pub asset_id: i32,
    pub title: String,
    pub description: ProductDescription,
    /// ID of the product's primary category.
    pub primary_category: i32,
    /// ID of the top-level category the product sits in.
    pub top_level_category: i32,
    /// Path through the category hierarchy, for translator context.
    pub category_path: String,
    /// When the translation is scheduled to complete, UTC.
    pub due_date: Option<DateTime<Utc>>,
    /// Never null; defaults to an empty list.
    pub skus: Vec<Sku>,
    /// URL of the project that translated this item.
    pub project_url: String,
    /// ID of the most recent project that translated this item.
    pub project_id: i32,
    pub source_language: SourceLanguage,
    pub target_languages: Vec<TargetLanguage>,
}

impl Product {
    pub fn new(
        title: &str,
        primary_category: i32,
        top_level_category: i32,
        category_path: &str,
        skus: Vec<Sku>,
        description: ProductDescription,
    ) -> Product {
        Product {
            title: title.to_string(),
            primary_category,
            top_level_category,
            category_path: category_path.to_string(),
            skus,
            description,
            ..Product::default()
        }
    }

    pub fn from_element(element: &Element) -> Product {
        Product {
            asset_id: element.child_i32("AssetID"),
            title: element.child_text("Title"),
            description: element
                .child("Description")
                .map(ProductDescription::from_element)
                .unwrap_or_default(),
            primary_category: element.child_i32("PrimaryCategory"),
            top_level_category: element.child_i32("TopLevelCategory"),
            category_path: element.child_text("CategoryPath"),
            due_date: element.child_datetime("DueDate"),
            skus: Sku::parse_list(element.child("SKUs")),
            project_url: element.child_text("ProjectURL"),
            project_id: element.child_i32("ProjectID"),
            source_language: SourceLanguage::from_element(element.child("SourceLanguage")),
            target_languages: TargetLanguage::parse_list(element.child("TargetLanguages")),
        }
    }

    /// Map each `<Product>` child of a container into an instance. A missing
    /// container yields an empty list.
    pub fn parse_list(container: Option<&Element>) -> Vec<Product> {
        container
            .map(|c| c.children("Product").map(Product::from_element).collect())
            .unwrap_or_default()
    }

    /// Full wire form. Element order: AssetID (when assigned), Title,
    /// PrimaryCategory, TopLevelCategory, CategoryPath, Description, SKUs,
    /// DueDate (when set).
    pub fn to_xml(&self) -> String {
        let mut xml = XmlBuilder::new();
        xml.open("Product");

        if self.asset_id > 0 {
            xml.element("AssetID", &self.asset_id.to_string());
        }

        xml.element("Title", &self.title);
        xml.element("PrimaryCategory", &self.primary_category.to_string());
        xml.element("TopLevelCategory", &self.top_level_category.to_string());
        xml.element("CategoryPath", &self.category_path);
        xml.raw(&self.description.to_xml());

        xml.open("SKUs");
        for sku in &self.skus {
            xml.raw(&sku.to_xml());
        }
        xml.close("SKUs");

        if let Some(due_date) = self.due_date {
            xml.element("DueDate", &format_utc(due_date));
        }

        xml.close("Product");
        xml.finish()
    }

    /// Reduced wire form used inside project-reference payloads: the asset
    /// reference and SKUs without the descriptive fields.
    pub fn to_xml_simple(&self) -> String {
        let mut xml = XmlBuilder::new();
        xml.open("Product");

        if self.asset_id > 0 {
            xml.element("AssetID", &self.asset_id.to_string());
        }

        xml.open("SKUs");
        for sku in &self.skus {
            xml.raw(&sku.to_xml());
        }
        xml.close("SKUs");

        if let Some(due_date) = self.due_date {
            xml.element("DueDate", &format_utc(due_date));
        }

        xml.close("Product");
        xml.finish()
    }
}

pub(crate) fn format_utc(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

// ---------------------------------------------------------------------------
// ProductTranslation
// ---------------------------------------------------------------------------

/// The translation of a product into one target language.
///
/// The source fields sit at the top level; the translated fields are nested
/// under `<TranslatedFields>` on the wire.
#[derive(Debug, Clone, Default)]
pub struct ProductTranslation {
    pub asset_id: i32,
    pub source_title: String,
    pub source_skus: Vec<Sku>,
    pub service_id: i32,
    /// Locale code of the translation.
    pub language: String,
    /// Translated title.
    pub title: String,
    /// Translated description.
    pub description: ProductDescription,
    /// Translated primary category.
    pub primary_category: i32,
    /// Translated SKUs.
    pub skus: Vec<Sku>,
}

impl ProductTranslation {
    pub fn from_element(element: &Element) -> ProductTranslation {
        let mut translation = ProductTranslation {
            asset_id: element.child_i32("AssetID"),
            source_title: element.child_text("SourceTitle"),
            source_skus: Sku::parse_list(element.child("SKUs")),
            service_id: element.child_i32("Service"),
            language: element.child_text("Language"),
            ..ProductTranslation::default()
        };

        if let Some(translated) = element.child("TranslatedFields") {
            translation.title = translated.child_text("Title");
            translation.primary_category = translated.child_i32("PrimaryCategory");
            translation.description = translated
                .child("Description")
                .map(ProductDescription::from_element)
                .unwrap_or_default();
            translation.skus = Sku::parse_list(translated.child("SKUs"));
        }

        translation
    }
}
