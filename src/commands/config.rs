use anyhow::Result;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::config::{project_dirs, DEFAULT_CONFIG};

pub fn run(init: bool, explicit: Option<&Path>) -> Result<()> {
    let config_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => project_dirs()?.config_dir().join("config.toml"),
    };

    if init {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, DEFAULT_CONFIG)?;
        info!("Created config file at: {}", config_path.display());
    } else if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        println!("Config file: {}\n", config_path.display());
        println!("{}", content);
    } else {
        println!("No config file found, built-in defaults are in use.");
        println!("Run `enum-dumper config --init` to create one at:");
        println!("  {}", config_path.display());
        println!("\nOr point at a file explicitly:");
        println!("  ENUM_DUMPER_CONFIG=./enum-dumper.toml");
    }

    Ok(())
}
