//! Recursive asset copying.
//!
//! Duplicates an arbitrary file tree byte-for-byte: once into the output
//! root's `assets/` and once under each language directory. The source is
//! optional; a site without assets builds fine.
//!
//! Copying is idempotent. Existing destination files are overwritten, so
//! repeating a copy produces an identical tree.

use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Copy `src` to `dst` recursively.
///
/// A missing `src` is a silent no-op. A file `src` is copied to the path
/// `dst` (parent directories created as needed). A directory `src` is
/// mirrored under `dst`, preserving relative names. Symlinks and
/// permissions get platform-default treatment, nothing more.
pub fn copy_tree(src: &Path, dst: &Path) -> io::Result<()> {
    if !src.exists() {
        return Ok(());
    }

    if src.is_file() {
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(src, dst)?;
        return Ok(());
    }

    for entry in WalkDir::new(src) {
        let entry = entry?;
        let rel = match entry.path().strip_prefix(src) {
            Ok(rel) => rel,
            Err(_) => continue,
        };
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
