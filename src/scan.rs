use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::alert::{Alert, overflow_message};
use crate::config::ScanConfig;
use crate::model::FileEntry;

/// Lists marker-extension files directly inside `directory`, in iteration order.
///
/// Collection stops at `config.max_entries`. If one more matching file turns
/// up after that, the overflow is reported and the rest of the directory is
/// left unread. An empty result is not an error.
pub fn scan_directory(
    directory: &Path,
    config: &ScanConfig,
    alert: &dyn Alert,
) -> Result<Vec<FileEntry>> {
    let extension = OsStr::new(&config.extension);
    let mut entries = Vec::new();

    let listing = fs::read_dir(directory)
        .with_context(|| format!("Could not read directory {}", directory.display()))?;

    for dir_entry in listing {
        let dir_entry = dir_entry
            .with_context(|| format!("Could not read directory {}", directory.display()))?;
        let path = dir_entry.path();

        if path.extension() != Some(extension) || !path.is_file() {
            continue;
        }

        if entries.len() >= config.max_entries {
            log::warn!(
                "More than {} .{} files in {:?}, ignoring the rest",
                config.max_entries,
                config.extension,
                directory
            );
            alert.alert(&overflow_message(config.max_entries));
            return Ok(entries);
        }

        let Some(label) = display_label(&path) else {
            log::warn!("Skipping {:?}: file name is not valid UTF-8", path);
            continue;
        };
        log::debug!("Found link file {:?} -> {:?}", path, label);
        entries.push(FileEntry::new(label, directory));
    }

    Ok(entries)
}

/// Base name with the extension stripped. `Example.txt` becomes `Example`.
pub fn display_label(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(OsStr::to_str)
        .map(str::to_string)
}
