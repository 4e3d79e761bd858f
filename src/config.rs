use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG: &str = r#"# enum-dumper configuration

[source]
# Index page listing every engine enum
entry_url = "https://create.roblox.com/docs/reference/engine/enums"

# Detail pages live at <detail_base_url>/<EnumName>
detail_base_url = "https://create.roblox.com/docs/reference/engine/enums"

# Relative markdown links `](/...)` are rewritten against this base
docs_base_url = "https://create.roblox.com/docs/"

# Id of the script element holding the embedded page state
data_element_id = "__NEXT_DATA__"

user_agent = "enum-dumper/0.1"

# Request timeout in seconds (unset waits indefinitely)
# timeout_secs = 30

# Detail pages fetched at once; output order is unaffected
concurrency = 1

[output]
dir = "."
rust_file = "enums.rs"
cpp_file = "enums.hpp"
banner = "// Generated by enum-dumper from https://create.roblox.com/docs/reference/engine/enums"
"#;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DumperConfig {
    pub source: SourceConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub entry_url: String,
    pub detail_base_url: String,
    pub docs_base_url: String,
    pub data_element_id: String,
    pub user_agent: String,
    pub timeout_secs: Option<u64>,
    pub concurrency: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            entry_url: "https://create.roblox.com/docs/reference/engine/enums".to_string(),
            detail_base_url: "https://create.roblox.com/docs/reference/engine/enums".to_string(),
            docs_base_url: "https://create.roblox.com/docs/".to_string(),
            data_element_id: "__NEXT_DATA__".to_string(),
            user_agent: concat!("enum-dumper/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: None,
            concurrency: 1,
        }
    }
}

impl SourceConfig {
    /// URL of the detail page for one enum
    pub fn detail_url(&self, enum_name: &str) -> String {
        format!("{}/{}", self.detail_base_url.trim_end_matches('/'), enum_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub rust_file: String,
    pub cpp_file: String,
    pub banner: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            rust_file: "enums.rs".to_string(),
            cpp_file: "enums.hpp".to_string(),
            banner: "// Generated by enum-dumper from https://create.roblox.com/docs/reference/engine/enums"
                .to_string(),
        }
    }
}

impl OutputConfig {
    pub fn rust_path(&self) -> PathBuf {
        self.dir.join(&self.rust_file)
    }

    pub fn cpp_path(&self) -> PathBuf {
        self.dir.join(&self.cpp_file)
    }
}

impl DumperConfig {
    /// Load from an explicit path, else the user config file, else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

pub fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("dev", "enum-dumper", "enum-dumper")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

pub fn default_config_path() -> Option<PathBuf> {
    project_dirs()
        .ok()
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
