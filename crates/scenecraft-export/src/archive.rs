//! Zip packaging of exported group documents.
//!
//! Each document lands as `<group>/<group>.obj` inside the archive.
//! Timestamps are injected by the caller so document bodies stay
//! byte-identical across repeated exports of the same scene.

use indexmap::IndexMap;
use scenecraft_core::ExportError;
use std::io::{Cursor, Write};
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

/// Suggested archive file name: `<group>.zip` for a single-group
/// export, `Full_Project_<timestamp>.zip` otherwise.
pub fn archive_name(documents: &IndexMap<String, String>, timestamp: &str) -> String {
    match documents.keys().next() {
        Some(only) if documents.len() == 1 => format!("{}.zip", only),
        _ => format!("Full_Project_{}.zip", timestamp),
    }
}

/// Package documents into a deflate-compressed zip archive.
pub fn pack_archive(documents: &IndexMap<String, String>) -> Result<Vec<u8>, ExportError> {
    if documents.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let buffer = Cursor::new(Vec::new());
    let mut zip = ZipWriter::new(buffer);

    let file_options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    for (group, body) in documents {
        zip.add_directory(group.as_str(), file_options.clone())
            .map_err(|e| ExportError::Archive { reason: e.to_string() })?;
        zip.start_file(format!("{}/{}.obj", group, group), file_options.clone())
            .map_err(|e| ExportError::Archive { reason: e.to_string() })?;
        zip.write_all(body.as_bytes())?;
    }

    let result = zip
        .finish()
        .map_err(|e| ExportError::Archive { reason: e.to_string() })?;

    Ok(result.into_inner())
}
