//! Manifest generation for a directory of published cheat sheets.

use std::fs;
use std::path::Path;

use tracing::info;

use sheet_core::{Manifest, ManifestEntry};

use crate::error::ManifestError;

const MANIFEST_FILE: &str = "manifest.json";

/// Files that live alongside the documents but are not documents.
const EXCLUDED_FILES: [&str; 4] = ["manifest.json", "Example.json", "_redirects", "README.txt"];

/// Scan `dir` for `*.json` documents and build their index.
///
/// Entries are sorted case-insensitively by display name.
///
/// # Errors
///
/// Returns `ManifestError::Io` when the directory cannot be read.
pub fn generate_manifest(dir: &Path) -> Result<Manifest, ManifestError> {
    let mut cheatsheets = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };
        if EXCLUDED_FILES.contains(&file_name) {
            continue;
        }
        let Some(name) = file_name.strip_suffix(".json") else {
            continue;
        };
        cheatsheets.push(ManifestEntry::from_name(name));
    }

    cheatsheets.sort_by(|a, b| {
        a.display_name
            .to_lowercase()
            .cmp(&b.display_name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });

    Ok(Manifest { cheatsheets })
}

/// Generate the index for `dir` and write it to `dir/manifest.json`.
///
/// # Errors
///
/// Returns `ManifestError::Io` for directory or write failures and
/// `ManifestError::Json` if the manifest cannot be serialized.
pub fn write_manifest(dir: &Path) -> Result<Manifest, ManifestError> {
    let manifest = generate_manifest(dir)?;
    let json = serde_json::to_string_pretty(&manifest)?;
    fs::write(dir.join(MANIFEST_FILE), json)?;
    info!(
        count = manifest.cheatsheets.len(),
        dir = %dir.display(),
        "manifest written"
    );
    Ok(manifest)
}
