//! # buildr
//!
//! A small wrapper around the CMake configure and build steps.
//!
//! `buildr` parses a handful of boolean flags, keeps the `./build`
//! output directory in shape (creating it on demand, emptying it on
//! request), and then runs `cmake` followed by `ninja`, or MSBuild for
//! a Visual Studio 2019 solution. Steps run one after the other and the
//! first failure stops the run with that tool's exit code.
//!
//! ## Quick Start
//!
//! ```no_run
//! use buildr::{run, Options, OsDirOps, OsRunner, Project};
//!
//! let opts = Options {
//!     clean: true,
//!     build: true,
//!     ..Options::default()
//! };
//! let project = Project::from_cwd().unwrap();
//!
//! let result = run(&opts, &project, &mut OsDirOps, &mut OsRunner);
//! assert!(result.is_ok());
//! ```

pub mod cmd;
pub mod dir;
pub mod error;
pub mod opts;
pub mod orchestrator;
pub mod project;
#[cfg(test)]
pub(crate) mod testutil;

pub use cmd::{Invocation, OsRunner, Runner};
pub use dir::{DirOps, Entry, OsDirOps};
pub use error::Error;
pub use opts::{BuildType, Generator, Options};
pub use orchestrator::run;
pub use project::{Project, BUILD_DIR};
