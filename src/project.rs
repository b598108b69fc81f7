//! Project context: every path and name a run needs, resolved once at
//! startup and passed down as a plain value.

use std::env;
use std::io;
use std::path::PathBuf;

/// Output directory, relative to where the wrapper is invoked.
pub const BUILD_DIR: &str = "build";

/// Where everything lives for one run.
///
/// The orchestrator never consults the process environment or the
/// working directory itself; whatever it needs arrives here. That keeps
/// the run logic free of ambient state and lets tests hand in whatever
/// layout they like.
#[derive(Debug, Clone)]
pub struct Project {
    /// Directory the tools run inside; created on demand, emptied on `--clean`.
    pub build_dir: PathBuf,
    /// Source reference handed to cmake, relative to `build_dir`.
    pub source_dir: PathBuf,
    /// Solution file MSBuild builds in msvc19 mode.
    pub solution: String,
    /// Directory holding MSBuild, prefixed onto the children's search
    /// path in msvc19 mode. Absent outside Windows setups.
    pub msbuild_dir: Option<PathBuf>,
}

impl Project {
    /// Resolve the context from the invocation directory.
    ///
    /// The solution name follows cmake's Visual Studio generator, which
    /// names the solution after the project; the MSBuild location is
    /// derived from the platform's program-files variable when present.
    pub fn from_cwd() -> io::Result<Self> {
        let cwd = env::current_dir()?;
        let name = cwd
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("project"));

        Ok(Project {
            solution: format!("{name}.sln"),
            msbuild_dir: env::var_os("ProgramFiles(x86)").map(|programs| {
                PathBuf::from(programs)
                    .join("Microsoft Visual Studio")
                    .join("2019")
                    .join("Community")
                    .join("MSBuild")
                    .join("Current")
                    .join("Bin")
            }),
            ..Project::default()
        })
    }
}

impl Default for Project {
    fn default() -> Self {
        Project {
            build_dir: PathBuf::from(BUILD_DIR),
            source_dir: PathBuf::from(".."),
            solution: String::from("project.sln"),
            msbuild_dir: None,
        }
    }
}
