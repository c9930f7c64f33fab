// src/export/archive.rs

use crate::errors::{AppError, AppResult};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Local file header signature every zip archive starts with.
const ZIP_MAGIC: [u8; 4] = *b"PK\x03\x04";

pub fn has_zip_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("zip"))
        .unwrap_or(false)
}

/// Whether the file content is a zip archive, whatever its name.
pub fn is_archive(path: &Path) -> AppResult<bool> {
    let mut head = Vec::with_capacity(ZIP_MAGIC.len());
    fs::File::open(path)?
        .take(ZIP_MAGIC.len() as u64)
        .read_to_end(&mut head)?;
    Ok(head == ZIP_MAGIC)
}

/// Compress `path` into a sibling `.zip` and remove the original.
pub fn compress(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    if zip_path == path {
        return Err(AppError::Export(format!(
            "Cannot compress {} onto itself",
            path.display()
        )));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| AppError::Export(format!("Not a file: {}", path.display())))?;

    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(name, options)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish()?;

    fs::remove_file(path)?;
    Ok(zip_path)
}

/// Text of the first file stored in the archive.
pub fn read_first_file(path: &Path) -> AppResult<String> {
    let mut archive = ZipArchive::new(fs::File::open(path)?)?;

    if archive.len() == 0 {
        return Err(AppError::Export(format!(
            "Archive is empty: {}",
            path.display()
        )));
    }

    let mut text = String::new();
    archive.by_index(0)?.read_to_string(&mut text)?;
    Ok(text)
}
