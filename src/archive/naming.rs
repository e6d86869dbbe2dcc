//! Output file naming

use std::io;
use std::path::Path;

use chrono::{Local, NaiveDateTime};

use crate::model::SHORT_HASH_LEN;

/// Characters that are not allowed in file names on common platforms
const INVALID_FILENAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Maximum length of each ref in a generated name
const MAX_REF_LEN: usize = 20;

/// Length of a full SHA-1 hex hash
const FULL_HASH_LEN: usize = 40;

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Generate `<repo>_<start>_to_<end>_<YYYYMMDD_HHMMSS>.zip` for the current local time
pub fn generate_output_name(repo_name: &str, start_ref: &str, end_ref: &str) -> String {
    generate_output_name_at(repo_name, start_ref, end_ref, Local::now().naive_local())
}

/// Generate an output name for a fixed timestamp
pub fn generate_output_name_at(
    repo_name: &str,
    start_ref: &str,
    end_ref: &str,
    timestamp: NaiveDateTime,
) -> String {
    format!(
        "{}_{}_to_{}_{}.zip",
        repo_name,
        clean_ref_for_filename(start_ref),
        clean_ref_for_filename(end_ref),
        timestamp.format(TIMESTAMP_FORMAT)
    )
}

/// Make a ref safe for use in a file name
///
/// Invalid characters become `_`, a full hex hash is abbreviated to its
/// short form, and the result is cut to [`MAX_REF_LEN`] characters.
fn clean_ref_for_filename(reference: &str) -> String {
    let cleaned: String = reference
        .chars()
        .map(|c| if INVALID_FILENAME_CHARS.contains(&c) { '_' } else { c })
        .collect();

    if cleaned.len() == FULL_HASH_LEN && cleaned.chars().all(|c| c.is_ascii_hexdigit()) {
        return cleaned[..SHORT_HASH_LEN].to_string();
    }

    cleaned.chars().take(MAX_REF_LEN).collect()
}

/// Create the parent directory of `output_path` if it does not exist
pub fn ensure_output_dir(output_path: &Path) -> io::Result<()> {
    match output_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir),
        _ => Ok(()),
    }
}
