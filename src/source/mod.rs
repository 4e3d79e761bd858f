mod http;

use async_trait::async_trait;

use crate::core::error::Result;

pub use http::HttpSource;

/// Trait for anything that can hand back the HTML of a docs page
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Get the source name
    fn name(&self) -> &str;

    /// Fetch a page and return its full body
    async fn fetch_page(&self, url: &str) -> Result<String>;
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use crate::core::error::DumpError;
    use std::collections::HashMap;

    /// Serves pages from memory, failing like the network for unknown URLs
    #[derive(Default)]
    pub struct StaticSource {
        pages: HashMap<String, String>,
    }

    impl StaticSource {
        pub fn with_page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
            self.pages.insert(url.into(), body.into());
            self
        }
    }

    #[async_trait]
    impl PageSource for StaticSource {
        fn name(&self) -> &str {
            "static"
        }

        async fn fetch_page(&self, url: &str) -> Result<String> {
            self.pages.get(url).cloned().ok_or_else(|| DumpError::Network {
                url: url.to_string(),
                reason: "no such page".to_string(),
            })
        }
    }
}
