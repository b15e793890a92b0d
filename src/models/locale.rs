use crate::xml::Element;

/// A language locale supported by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// Human-readable name of the locale.
    pub name: String,
    /// ISO locale code, e.g. `en-us`.
    pub code: String,
}

impl Locale {
    pub fn from_element(element: &Element) -> Locale {
        Locale {
            name: element.child_text("Name"),
            code: element.child_text("Code"),
        }
    }

    /// Map each `<Locale>` child of a `<Locales>` container into an
    /// instance. A missing container yields an empty list.
    pub fn parse_list(container: Option<&Element>) -> Vec<Locale> {
        container
            .map(|c| c.children("Locale").map(Locale::from_element).collect())
            .unwrap_or_default()
    }
}
