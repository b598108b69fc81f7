//! Build-directory bookkeeping: the filesystem capability trait, its
//! `std::fs` implementation, and the ensure-exists / clean operations.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Error;

/// A top-level directory entry as the clean pass sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Filesystem capability for the output directory.
///
/// Just enough surface for ensure-exists and clean; tests substitute an
/// in-memory fake.
pub trait DirOps {
    fn exists(&self, path: &Path) -> bool;

    /// Create a single directory level. A missing parent is an error.
    fn create_dir(&mut self, path: &Path) -> io::Result<()>;

    /// Top-level entries of `path`, directories flagged. Symlinks count
    /// as files so they are unlinked, never followed.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<Entry>>;

    fn remove_file(&mut self, path: &Path) -> io::Result<()>;

    fn remove_dir_all(&mut self, path: &Path) -> io::Result<()>;
}

/// The real filesystem.
#[derive(Debug, Default)]
pub struct OsDirOps;

impl DirOps for OsDirOps {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir(&mut self, path: &Path) -> io::Result<()> {
        fs::create_dir(path)
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<Entry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            // file_type() does not follow symlinks
            let is_dir = entry.file_type()?.is_dir();
            entries.push(Entry {
                path: entry.path(),
                is_dir,
            });
        }
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }

    fn remove_file(&mut self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn remove_dir_all(&mut self, path: &Path) -> io::Result<()> {
        fs::remove_dir_all(path)
    }
}

/// Create the output directory when it is missing.
pub fn ensure_dir<D: DirOps>(dirs: &mut D, path: &Path) -> Result<(), Error> {
    if !dirs.exists(path) {
        info!("creating {}", path.display());
        dirs.create_dir(path)?;
    }
    Ok(())
}

/// Empty the output directory: every top-level file first, then every
/// subdirectory with its contents. The first failed deletion aborts the
/// whole pass.
pub fn clean_dir<D: DirOps>(dirs: &mut D, path: &Path) -> Result<(), Error> {
    info!("cleaning {}", path.display());
    let entries = dirs.list_dir(path)?;
    for entry in entries.iter().filter(|e| !e.is_dir) {
        debug!("removing file {}", entry.path.display());
        dirs.remove_file(&entry.path)?;
    }
    for entry in entries.iter().filter(|e| e.is_dir) {
        debug!("removing directory {}", entry.path.display());
        dirs.remove_dir_all(&entry.path)?;
    }
    Ok(())
}
