//! Construction and execution of the external tool invocations.
//!
//! Commands are explicit ordered argument lists; nothing here goes
//! through a shell, so no quoting rules apply to the values.

use std::env;
use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::Error;
use crate::opts::{Generator, Options};
use crate::project::Project;

const CMAKE: &str = "cmake";
const NINJA: &str = "ninja";
const MSBUILD: &str = "MSBuild.exe";

/// One external process to run: program, argument list, the directory
/// the child starts in, and an optional search-path prefix applied to
/// the child's environment only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub path_prefix: Option<PathBuf>,
}

impl Invocation {
    fn new<T, P>(program: T, cwd: P) -> Self
    where
        T: Into<String>,
        P: Into<PathBuf>,
    {
        Invocation {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
            path_prefix: None,
        }
    }

    fn arg<T>(mut self, arg: T) -> Self
    where
        T: Into<String>,
    {
        self.args.push(arg.into());
        self
    }
}

impl fmt::Display for Invocation {
    /// Render for the step echo. Arguments with spaces are quoted so the
    /// line is copy-pasteable; the child itself never sees a shell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.contains(' ') {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// The configure call: log level, build type, tests toggle, generator
/// and the source reference, in that order, run inside the build
/// directory.
pub fn configure(opts: &Options, project: &Project) -> Invocation {
    let mut invocation = Invocation::new(CMAKE, &project.build_dir)
        .arg(format!("--log-level={}", opts.log_level()))
        .arg(format!("-DCMAKE_BUILD_TYPE={}", opts.build_type()))
        .arg(format!("-DOPT_TESTS={}", opts.tests_flag()))
        .arg("-G")
        .arg(opts.generator().cmake_name())
        .arg(project.source_dir.display().to_string());
    if opts.generator() == Generator::Msvc19 {
        invocation.path_prefix = project.msbuild_dir.clone();
    }
    invocation
}

/// The build-execution call: plain `ninja`, or MSBuild against the
/// solution with an explicit configuration.
pub fn execute(opts: &Options, project: &Project) -> Invocation {
    match opts.generator() {
        Generator::Ninja => Invocation::new(NINJA, &project.build_dir),
        Generator::Msvc19 => {
            let mut invocation = Invocation::new(MSBUILD, &project.build_dir)
                .arg(&project.solution)
                .arg(format!("/p:Configuration={}", opts.build_type()));
            invocation.path_prefix = project.msbuild_dir.clone();
            invocation
        }
    }
}

/// Process-spawning capability.
///
/// The run logic only ever talks to this trait; tests substitute a
/// recording fake for the real process table.
pub trait Runner {
    /// Resolve the invocation's program on the search path, before any
    /// spawn happens.
    fn find(&mut self, invocation: &Invocation) -> Result<(), Error>;

    /// Run the invocation to completion and hand back the child's exit
    /// code. `None` means the child did not exit normally.
    fn run(&mut self, invocation: &Invocation) -> Result<Option<i32>, Error>;
}

/// Runs invocations through `std::process`, stdio inherited so the tools
/// talk to the terminal directly.
#[derive(Debug, Default)]
pub struct OsRunner;

impl Runner for OsRunner {
    fn find(&mut self, invocation: &Invocation) -> Result<(), Error> {
        let found = match &invocation.path_prefix {
            Some(prefix) => {
                which::which_in(&invocation.program, Some(prefixed_path(prefix)?), ".")
            }
            None => which::which(&invocation.program),
        };
        found.map(|_| ()).map_err(|_| Error::ToolNotFound {
            tool: invocation.program.clone(),
        })
    }

    fn run(&mut self, invocation: &Invocation) -> Result<Option<i32>, Error> {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args).current_dir(&invocation.cwd);
        if let Some(prefix) = &invocation.path_prefix {
            command.env("PATH", prefixed_path(prefix)?);
        }
        let status = command.status()?;
        Ok(status.code())
    }
}

/// The child's search path: `prefix` in front of this process's own.
fn prefixed_path(prefix: &Path) -> Result<OsString, Error> {
    let mut parts = vec![prefix.to_path_buf()];
    if let Some(path) = env::var_os("PATH") {
        parts.extend(env::split_paths(&path));
    }
    env::join_paths(parts).map_err(|err| Error::Io(io::Error::other(err)))
}
