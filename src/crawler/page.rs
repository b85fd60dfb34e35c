//! Parsed review page

use crate::ReviewError;
use scraper::{ElementRef, Html, Selector};

/// The parsed DOM of one fetched page
///
/// Lives for a single loop iteration. `scraper::Html` is not `Send`, so a
/// document is never held across an await point.
pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    pub fn select<'a, 'b>(
        &'a self,
        selector: &'b Selector,
    ) -> scraper::html::Select<'a, 'b> {
        self.html.select(selector)
    }
}

/// Compiles a CSS selector, mapping failure into a `ReviewError`
pub(crate) fn compile_selector(selector: &str) -> Result<Selector, ReviewError> {
    Selector::parse(selector).map_err(|_| ReviewError::Selector(selector.to_string()))
}

/// Concatenated text of an element and its descendants
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// Text of the first descendant matching `selector`, if any
pub(crate) fn first_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element.select(selector).next().map(element_text)
}
