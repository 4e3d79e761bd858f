use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::{DumperConfig, OutputConfig};
use crate::core::{detail, index};
use crate::output::Dialect;
use crate::source::{HttpSource, PageSource};

pub struct DumpArgs {
    pub config: Option<PathBuf>,
    pub entry_url: Option<String>,
    pub output: Option<PathBuf>,
    pub concurrency: Option<usize>,
}

/// Accumulated output of a full run
#[derive(Debug, Default)]
pub struct GeneratedFiles {
    pub rust: String,
    pub cpp: String,
    pub emitted: usize,
    pub skipped: usize,
}

pub async fn run(args: DumpArgs) -> Result<()> {
    let mut config = DumperConfig::load(args.config.as_deref())?;

    if let Some(entry_url) = args.entry_url {
        config.source.entry_url = entry_url;
    }
    if let Some(dir) = args.output {
        config.output.dir = dir;
    }
    if let Some(concurrency) = args.concurrency {
        config.source.concurrency = concurrency;
    }

    let source = HttpSource::new(&config.source)?;
    let files = generate(&source, &config).await?;
    write_files(&files, &config.output)?;

    info!(
        "✅ Wrote {} enums to {} and {} ({} without members skipped)",
        files.emitted,
        config.output.rust_path().display(),
        config.output.cpp_path().display(),
        files.skipped
    );
    Ok(())
}

/// Fetch every enum listed on the index page and render both dialects.
///
/// Any failure aborts the whole run. Detail pages may be fetched
/// concurrently, but results are consumed in index order.
pub async fn generate(source: &dyn PageSource, config: &DumperConfig) -> Result<GeneratedFiles> {
    let urls = index::list_enum_urls(source, &config.source)
        .await
        .context("Failed to load the enum index")?;
    let total = urls.len();

    let mut files = GeneratedFiles {
        rust: Dialect::Rust.preamble(&config.output.banner),
        cpp: Dialect::Cpp.preamble(&config.output.banner),
        ..Default::default()
    };

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{prefix:.bold.dim} [{bar:30}] {pos}/{len} {wide_msg}")?
            .progress_chars("=> "),
    );
    pb.set_prefix("Dumping");

    let concurrency = config.source.concurrency.max(1);
    debug!("Fetching {} detail pages via {} (concurrency: {})", total, source.name(), concurrency);

    let mut pages = stream::iter(urls.iter())
        .map(|url| async move {
            let result = detail::fetch_enum_descriptor(source, url, &config.source).await;
            (url, result)
        })
        .buffered(concurrency);

    let mut position = 0;
    while let Some((url, result)) = pages.next().await {
        let descriptor = result.with_context(|| format!("Failed to load {}", url))?;
        position += 1;
        info!("{} {}/{}", url, position, total);
        pb.set_message(descriptor.name.clone());

        let rust = Dialect::Rust
            .render(&descriptor)
            .with_context(|| format!("Failed to render {}", descriptor.name))?;
        let cpp = Dialect::Cpp.render(&descriptor)?;

        if rust.is_empty() {
            debug!("Skipping {}: no members", descriptor.name);
            files.skipped += 1;
        } else {
            files.rust.push_str(&rust);
            files.rust.push_str("\n\n");
            files.cpp.push_str(&cpp);
            files.cpp.push_str("\n\n");
            files.emitted += 1;
        }

        pb.inc(1);
    }

    pb.finish_with_message(format!("{} enums rendered", files.emitted));
    Ok(files)
}

/// Write both files, replacing any previous content
pub fn write_files(files: &GeneratedFiles, output: &OutputConfig) -> Result<()> {
    fs::create_dir_all(&output.dir)
        .with_context(|| format!("Failed to create {}", output.dir.display()))?;

    let rust_path = output.rust_path();
    fs::write(&rust_path, &files.rust)
        .with_context(|| format!("Failed to write {}", rust_path.display()))?;

    let cpp_path = output.cpp_path();
    fs::write(&cpp_path, &files.cpp)
        .with_context(|| format!("Failed to write {}", cpp_path.display()))?;

    Ok(())
}
