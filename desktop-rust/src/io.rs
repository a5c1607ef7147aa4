use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use recetas_common::Catalog;

pub fn load_catalog_file(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let catalog =
        Catalog::from_json(&content).with_context(|| format!("parse {}", path.display()))?;
    Ok(catalog)
}
