use serde_json::Value;
use tracing::{debug, info};

use super::error::{DumpError, Result};
use super::next_data;
use crate::config::SourceConfig;
use crate::source::PageSource;

/// Location of the enum name list inside the index page state
pub const ENUM_LIST_PATH: &str = "props.pageProps.data.references.Enum";

/// Fetch the index page and return the detail-page URL of every enum, in
/// the order the index lists them.
pub async fn list_enum_urls(source: &dyn PageSource, config: &SourceConfig) -> Result<Vec<String>> {
    info!("Fetching enum index from {}", config.entry_url);

    let html = source.fetch_page(&config.entry_url).await?;
    let names = parse_index_page(&html, config)?;

    debug!("Index lists {} enums", names.len());
    Ok(names.iter().map(|name| config.detail_url(name)).collect())
}

/// Extract the ordered list of enum names from an index page
pub fn parse_index_page(html: &str, config: &SourceConfig) -> Result<Vec<String>> {
    let text = next_data::extract_embedded_json(html, &config.data_element_id, &config.entry_url)?;
    let state: Value = serde_json::from_str(&text)?;

    let list = next_data::navigate(&state, ENUM_LIST_PATH)?
        .as_array()
        .ok_or_else(|| DumpError::Schema {
            path: ENUM_LIST_PATH.to_string(),
            reason: "expected an array of enum names".to_string(),
        })?;

    list.iter()
        .enumerate()
        .map(|(i, entry)| {
            entry
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| DumpError::Schema {
                    path: format!("{}[{}]", ENUM_LIST_PATH, i),
                    reason: "expected a string".to_string(),
                })
        })
        .collect()
}
