//! HTML parser for extracting the page title
//!
//! Only the first `<title>` element anywhere in the document is looked at.

use crate::prober::PageTitle;
use scraper::{Html, Selector};

/// Extracts the text of the first `<title>` element, trimmed
///
/// Returns `None` when the document has no `<title>` element. A title that
/// is present but blank yields `Some("")`.
///
/// # Example
///
/// ```
/// use robots_probe::prober::extract_title;
///
/// let html = "<html><head><title> Secret Page </title></head></html>";
/// assert_eq!(extract_title(html), Some("Secret Page".to_string()));
/// ```
pub fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
}

/// Determines the title to report for a response
///
/// The body is only parsed for a 200 response.
pub fn title_for(status: u16, body: &str) -> PageTitle {
    if status != 200 {
        return PageTitle::NotFetched;
    }

    match extract_title(body) {
        Some(title) => PageTitle::Found(title),
        None => PageTitle::Missing,
    }
}
