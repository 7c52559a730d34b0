//! Command-line entry point.
//!
//! Renders the bookmark icon set and writes it under `icons/` in the current
//! working directory. No flags; configuration happens in code.

use std::path::Path;

use anyhow::Context;

/// Output directory, relative to the working directory.
const OUTPUT_DIR: &str = "icons";

fn init_logging() {
    let mut builder = env_logger::Builder::new();
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let out_dir = Path::new(OUTPUT_DIR);
    let written = bookmark_icons::write_icon_set(out_dir)
        .with_context(|| format!("failed to generate icons under {}", out_dir.display()))?;

    log::info!("generated {} icons in {}", written.len(), out_dir.display());
    Ok(())
}
