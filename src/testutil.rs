//! In-memory stand-ins for the filesystem and process collaborators.
//!
//! Both fakes record what was asked of them so tests can assert on
//! ordering and on what never happened at all.

use std::io;
use std::path::{Path, PathBuf};

use crate::cmd::{Invocation, Runner};
use crate::dir::{DirOps, Entry};
use crate::error::Error;

/// One recorded call against a fake, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreateDir(PathBuf),
    RemoveFile(PathBuf),
    RemoveDirAll(PathBuf),
    Find(String),
    Run(String),
}

/// Fake filesystem modelling the single directory this crate manages.
#[derive(Debug, Default)]
pub struct FakeDirOps {
    pub root_exists: bool,
    pub entries: Vec<Entry>,
    pub actions: Vec<Action>,
    /// Path whose removal fails with a permission error.
    pub fail_on: Option<PathBuf>,
}

impl FakeDirOps {
    /// A directory that already exists and holds `entries`.
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        FakeDirOps {
            root_exists: true,
            entries,
            ..FakeDirOps::default()
        }
    }

    fn remove(&mut self, path: &Path) -> io::Result<()> {
        if self.fail_on.as_deref() == Some(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "locked"));
        }
        self.entries.retain(|e| e.path != path);
        Ok(())
    }
}

impl DirOps for FakeDirOps {
    fn exists(&self, _path: &Path) -> bool {
        self.root_exists
    }

    fn create_dir(&mut self, path: &Path) -> io::Result<()> {
        self.actions.push(Action::CreateDir(path.to_path_buf()));
        self.root_exists = true;
        Ok(())
    }

    fn list_dir(&self, _path: &Path) -> io::Result<Vec<Entry>> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }

    fn remove_file(&mut self, path: &Path) -> io::Result<()> {
        self.remove(path)?;
        self.actions.push(Action::RemoveFile(path.to_path_buf()));
        Ok(())
    }

    fn remove_dir_all(&mut self, path: &Path) -> io::Result<()> {
        self.remove(path)?;
        self.actions.push(Action::RemoveDirAll(path.to_path_buf()));
        Ok(())
    }
}

/// Fake process table: scripted exit codes, tools that cannot be found,
/// and a record of every invocation that would have run.
#[derive(Debug, Default)]
pub struct FakeRunner {
    /// Exit codes handed out per run, front first. Empty means `Some(0)`.
    pub codes: Vec<Option<i32>>,
    /// Programs `find` refuses to resolve.
    pub missing: Vec<String>,
    pub actions: Vec<Action>,
    pub runs: Vec<Invocation>,
}

impl FakeRunner {
    pub fn with_codes(codes: Vec<Option<i32>>) -> Self {
        FakeRunner {
            codes,
            ..FakeRunner::default()
        }
    }
}

impl Runner for FakeRunner {
    fn find(&mut self, invocation: &Invocation) -> Result<(), Error> {
        self.actions.push(Action::Find(invocation.program.clone()));
        if self.missing.iter().any(|m| *m == invocation.program) {
            return Err(Error::ToolNotFound {
                tool: invocation.program.clone(),
            });
        }
        Ok(())
    }

    fn run(&mut self, invocation: &Invocation) -> Result<Option<i32>, Error> {
        self.actions.push(Action::Run(invocation.program.clone()));
        self.runs.push(invocation.clone());
        let code = if self.codes.is_empty() {
            Some(0)
        } else {
            self.codes.remove(0)
        };
        Ok(code)
    }
}
