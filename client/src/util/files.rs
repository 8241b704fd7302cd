//! Attachment helpers: human-readable sizes and file-picker conversion.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use crate::state::composer::UploadedFile;

const UNITS: [&str; 3] = ["KB", "MB", "GB"];

/// Format a byte count as `512 B`, `12.4 KB`, `3.0 MB`, or `1.2 GB`.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

/// Collect the files chosen in an `<input type="file">`.
#[cfg(feature = "hydrate")]
pub fn uploaded_files_from_list(list: &web_sys::FileList) -> Vec<UploadedFile> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let size = file.size().max(0.0) as u64;
            UploadedFile::new(file.name(), file.type_(), size)
        })
        .collect()
}

/// Browser-only; the server never sees picked files.
#[cfg(not(feature = "hydrate"))]
pub fn uploaded_files_from_list<T>(_list: &T) -> Vec<UploadedFile> {
    Vec::new()
}
