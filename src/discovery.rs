//! Project discovery for the native linter.
//!
//! Recursively scans a directory for JS/TS sources and runs the per-file
//! analysis over them, one rayon task per file. Results are keyed by path.

#[cfg(feature = "napi")]
use napi_derive::napi;
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::analyze::analyze_source;
use crate::cache::IncrementalCache;
use crate::diagnostics::LintDiagnostic;

const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "mjs", "cjs", "ts", "tsx"];

/// Analyze every source file under `base_dir`.
///
/// Files that fail to read are skipped with a log line; one unreadable file
/// never aborts the scan. Unchanged files are answered from the incremental
/// cache instead of being re-parsed.
pub fn analyze_project(base_dir: &str) -> HashMap<String, Vec<LintDiagnostic>> {
    let path = Path::new(base_dir);
    if !path.exists() {
        return HashMap::new();
    }

    let files = find_source_files(path);
    let cache = IncrementalCache::new();

    files
        .par_iter()
        .filter_map(|file_path| {
            let source = match fs::read_to_string(file_path) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("[LinterNative] Failed to read {:?}: {}", file_path, e);
                    // Continue despite errors in one file
                    return None;
                }
            };
            let path_str = file_path.to_string_lossy().to_string();

            if let Some(cached) = cache.get(&path_str, &source) {
                return Some((path_str, cached));
            }

            let diagnostics = analyze_source(&source, &path_str);
            cache.set(&path_str, &source, &diagnostics);
            Some((path_str, diagnostics))
        })
        .collect()
}

/// Recursively find all analyzable source files in a directory.
fn find_source_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let walker = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| entry.file_name() != "node_modules");

    for entry in walker {
        if let Ok(entry) = entry {
            let path = entry.path();
            if path.is_file() {
                if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                    if SOURCE_EXTENSIONS.contains(&ext) {
                        files.push(path.to_path_buf());
                    }
                }
            }
        }
    }

    files
}

#[cfg(feature = "napi")]
#[napi]
pub fn analyze_project_native(base_dir: String) -> serde_json::Value {
    let reports = analyze_project(&base_dir);
    serde_json::to_value(reports).unwrap_or(serde_json::Value::Null)
}
