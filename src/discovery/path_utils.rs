use std::path::{Path, PathBuf};

use crate::core::constants::reports;
use crate::core::error::{PerfDashError, Result};

/// List report files (`*.rpt`) under `dir`, sorted by file name.
///
/// Only direct children are listed unless `recursive` is set. Hidden files and
/// ignore files are not honoured: every report in the directory counts.
pub fn list_report_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(PerfDashError::DirectoryNotFound(dir.display().to_string()));
    }
    if !dir.is_dir() {
        return Err(PerfDashError::InvalidArgument(format!(
            "'{}' is not a directory. Expected a directory containing report files.",
            dir.display()
        )));
    }

    let mut builder = ignore::WalkBuilder::new(dir);
    builder
        .standard_filters(false)
        .follow_links(true)
        .sort_by_file_name(|a, b| a.cmp(b));
    if !recursive {
        builder.max_depth(Some(1));
    }

    let mut result_paths = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let entry_path = entry.path();

        if entry_path.is_file() && has_report_extension(entry_path) {
            result_paths.push(entry_path.to_path_buf());
        }
    }

    Ok(result_paths)
}

fn has_report_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == reports::EXTENSION)
}

/// Report identifier for a path: its file stem
pub fn report_id(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}
