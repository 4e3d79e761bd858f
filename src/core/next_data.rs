//! Access to the application-state JSON that the docs site embeds in every
//! server-rendered page.
//!
//! Pages carry a `<script id="__NEXT_DATA__">` element whose text is the full
//! page state. Extraction and navigation are kept separate so that each failure
//! mode surfaces as its own [`DumpError`] variant.

use scraper::{Html, Selector};
use serde_json::Value;

use super::error::{DumpError, Result};

/// Relative markdown link prefix rewritten by [`rewrite_doc_links`]
const RELATIVE_LINK: &str = "](/";

/// Pull the text of the element with the given id out of an HTML page.
pub fn extract_embedded_json(html: &str, element_id: &str, url: &str) -> Result<String> {
    let selector = Selector::parse(&format!("#{}", element_id))
        .map_err(|e| DumpError::InvalidSelector(format!("#{}: {:?}", element_id, e)))?;

    let document = Html::parse_document(html);
    let text = document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(DumpError::MissingData {
            url: url.to_string(),
            element: element_id.to_string(),
        });
    }

    Ok(text)
}

/// Turn relative markdown links into absolute ones.
///
/// This is a plain substring replace over the raw JSON text: any `](/` is
/// rewritten, whether or not it belongs to a markdown link.
pub fn rewrite_doc_links(text: &str, docs_base_url: &str) -> String {
    text.replace(RELATIVE_LINK, &format!("]({}", docs_base_url))
}

/// Follow a dotted path of object keys, e.g. `props.pageProps.data`.
pub fn navigate<'a>(root: &'a Value, path: &str) -> Result<&'a Value> {
    let mut current = root;
    let mut walked = Vec::new();

    for key in path.split('.') {
        walked.push(key);
        current = current
            .as_object()
            .and_then(|object| object.get(key))
            .ok_or_else(|| DumpError::Schema {
                path: walked.join("."),
                reason: "key not found".to_string(),
            })?;
    }

    Ok(current)
}
