use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::config::DumperConfig;
use crate::core::{detail, EnumDescriptor};
use crate::output::Dialect;

pub struct RenderArgs {
    pub config: Option<PathBuf>,
    pub path: PathBuf,
    pub dialect: Dialect,
    pub html: bool,
}

/// Render a single enum from a local file and print it
pub fn run(args: RenderArgs) -> Result<()> {
    let content = fs::read_to_string(&args.path)
        .with_context(|| format!("Failed to read {}", args.path.display()))?;

    let descriptor = if args.html {
        let config = DumperConfig::load(args.config.as_deref())?;
        detail::parse_detail_page(&content, &args.path.display().to_string(), &config.source)?
    } else {
        serde_json::from_str::<EnumDescriptor>(&content)
            .with_context(|| format!("{} is not an enum descriptor", args.path.display()))?
    };

    debug!(
        "Rendering {} ({} members) as {:?}",
        descriptor.name,
        descriptor.items.len(),
        args.dialect
    );

    let output = args.dialect.render(&descriptor)?;
    if output.is_empty() {
        warn!("{} has no members, nothing to render", descriptor.name);
    } else {
        println!("{}", output);
    }

    Ok(())
}
