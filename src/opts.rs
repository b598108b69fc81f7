//! Command-line flags and the values derived from them.

use std::fmt;

use clap::Parser;

use crate::error::Error;

/// Flags accepted by the wrapper.
///
/// All of them are booleans; everything else a run needs is derived from
/// this record once it is parsed. The record never changes after that.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "buildr", version, about = "Configure-then-build helper for CMake projects")]
pub struct Options {
    /// Empty the build directory before anything else runs.
    #[arg(short, long)]
    pub clean: bool,

    /// Configure the project and build it.
    #[arg(short, long)]
    pub build: bool,

    /// Configure with tests enabled (-DOPT_TESTS=ON).
    #[arg(short, long)]
    pub tests: bool,

    /// Configure a Debug build instead of the default Release.
    #[arg(short, long)]
    pub debug: bool,

    /// Explicitly request a Release build.
    #[arg(long)]
    pub release: bool,

    /// Chattier output, and STATUS instead of WARNING for cmake's log level.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate a Visual Studio 16 2019 solution and build it with MSBuild.
    #[arg(long)]
    pub msvc19: bool,
}

impl Options {
    /// Reject contradictory flag combinations.
    ///
    /// Runs before anything touches the filesystem or spawns a process.
    pub fn validate(&self) -> Result<(), Error> {
        if self.debug && self.release {
            return Err(Error::BuildTypeConflict);
        }
        Ok(())
    }

    /// Build type for cmake and MSBuild. Release unless `--debug` was given.
    pub fn build_type(&self) -> BuildType {
        if self.debug {
            BuildType::Debug
        } else {
            BuildType::Release
        }
    }

    /// Value for the `-DOPT_TESTS=` define.
    pub fn tests_flag(&self) -> &'static str {
        if self.tests { "ON" } else { "OFF" }
    }

    /// Value for cmake's `--log-level=` switch.
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "STATUS" } else { "WARNING" }
    }

    /// Which generator the configure step targets.
    pub fn generator(&self) -> Generator {
        if self.msvc19 {
            Generator::Msvc19
        } else {
            Generator::Ninja
        }
    }
}

/// Build type handed to the external tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildType {
    Debug,
    Release,
}

impl BuildType {
    pub fn as_str(self) -> &'static str {
        match self {
            BuildType::Debug => "Debug",
            BuildType::Release => "Release",
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which build-instruction format the configure step emits, and with it
/// which tool executes the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    Ninja,
    Msvc19,
}

impl Generator {
    /// Generator name exactly as cmake expects it after `-G`.
    pub fn cmake_name(self) -> &'static str {
        match self {
            Generator::Ninja => "Ninja",
            Generator::Msvc19 => "Visual Studio 16 2019",
        }
    }
}
