use serde::Deserialize;
use serde_json::Value;

use super::error::{DumpError, Result};
use super::model::EnumDescriptor;
use super::next_data;
use crate::config::SourceConfig;
use crate::source::PageSource;

/// Location of the enum reference inside a detail page state
pub const API_REFERENCE_PATH: &str = "props.pageProps.data.apiReference";

/// Fetch one enum detail page and decode its descriptor
pub async fn fetch_enum_descriptor(
    source: &dyn PageSource,
    url: &str,
    config: &SourceConfig,
) -> Result<EnumDescriptor> {
    let html = source.fetch_page(url).await?;
    parse_detail_page(&html, url, config)
}

/// Decode a descriptor from a detail page already in memory.
///
/// Relative doc links are rewritten on the raw JSON text before parsing.
pub fn parse_detail_page(html: &str, url: &str, config: &SourceConfig) -> Result<EnumDescriptor> {
    let text = next_data::extract_embedded_json(html, &config.data_element_id, url)?;
    let text = next_data::rewrite_doc_links(&text, &config.docs_base_url);
    let state: Value = serde_json::from_str(&text)?;

    let reference = next_data::navigate(&state, API_REFERENCE_PATH)?;
    EnumDescriptor::deserialize(reference).map_err(|e| DumpError::Schema {
        path: API_REFERENCE_PATH.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::testing::StaticSource;

    const URL: &str = "https://create.roblox.com/docs/reference/engine/enums/SortOrder";

    fn page(reference: &str) -> String {
        format!(
            r#"<html><body><script id="__NEXT_DATA__" type="application/json">{{"props":{{"pageProps":{{"data":{{"apiReference":{}}}}}}}}}</script></body></html>"#,
            reference
        )
    }

    #[tokio::test]
    async fn test_fetch_enum_descriptor() {
        let source = StaticSource::default().with_page(
            URL,
            page(r#"{"name":"SortOrder","summary":"See [sorting](/tutorials/sort).","items":[{"name":"Name","value":0}]}"#),
        );

        let descriptor = fetch_enum_descriptor(&source, URL, &SourceConfig::default())
            .await
            .unwrap();
        assert_eq!(descriptor.name, "SortOrder");
        assert_eq!(
            descriptor.summary,
            "See [sorting](https://create.roblox.com/docs/tutorials/sort)."
        );
        assert_eq!(descriptor.items.len(), 1);
    }

    #[test]
    fn test_missing_api_reference() {
        let html = r#"<html><body><script id="__NEXT_DATA__">{"props":{"pageProps":{"data":{}}}}</script></body></html>"#;
        let err = parse_detail_page(html, URL, &SourceConfig::default()).unwrap_err();
        assert!(matches!(err, DumpError::Schema { .. }));
    }

    #[test]
    fn test_wrong_shape() {
        let html = page(r#"{"name":"Broken","items":[{"name":"A","value":-1}]}"#);
        let err = parse_detail_page(&html, URL, &SourceConfig::default()).unwrap_err();
        assert!(matches!(err, DumpError::Schema { .. }));
    }

    #[test]
    fn test_missing_embedded_data() {
        let err = parse_detail_page("<html></html>", URL, &SourceConfig::default()).unwrap_err();
        assert!(matches!(err, DumpError::MissingData { .. }));
    }
}
