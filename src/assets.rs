//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};
use tracing::debug;

const BASE: &str = include_str!("../assets/base.css");
const PREVIEW_PAGE: &str = include_str!("../assets/preview.css");

/// Writes all bundled CSS assets to output directory
///
/// Creates the directory when missing.
///
/// # Errors
///
/// Returns error if directory creation or any file write fails
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    fs::create_dir_all(assets_dir).with_context(|| {
        format!(
            "Failed to create assets directory: {}",
            assets_dir.display()
        )
    })?;
    write_bundled(assets_dir, "preview.css", &[BASE, PREVIEW_PAGE])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), &css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    debug!(asset = name, bytes = css.len(), "wrote css asset");
    Ok(())
}
