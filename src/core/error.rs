use thiserror::Error;

/// Failures while fetching, extracting or rendering enum data
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    #[error("page {url} has no embedded data in #{element}")]
    MissingData { url: String, element: String },

    #[error("embedded data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unexpected data shape at `{path}`: {reason}")]
    Schema { path: String, reason: String },

    #[error("enum {enum_name} maps value {value} to both {first} and {second}")]
    DuplicateValue {
        enum_name: String,
        value: u32,
        first: String,
        second: String,
    },

    #[error("invalid element selector: {0}")]
    InvalidSelector(String),
}

pub type Result<T> = std::result::Result<T, DumpError>;
