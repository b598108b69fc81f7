//! One full run: validate the flags, prepare the output directory,
//! then configure and build, stopping at the first thing that fails.

use tracing::info;

use crate::cmd::{self, Invocation, Runner};
use crate::dir::{self, DirOps};
use crate::error::Error;
use crate::opts::Options;
use crate::project::Project;

/// Drive a complete run against the given collaborators.
///
/// Order is fixed: flag validation, directory ensure, optional clean,
/// then (with `--build`) both tools are resolved up front and run one
/// after the other. The first error wins and nothing after it happens.
pub fn run<D, R>(
    opts: &Options,
    project: &Project,
    dirs: &mut D,
    runner: &mut R,
) -> Result<(), Error>
where
    D: DirOps,
    R: Runner,
{
    opts.validate()?;
    info!(
        "args: clean:{}, build:{}, tests:{}, type:{}",
        opts.clean,
        opts.build,
        opts.tests_flag(),
        opts.build_type()
    );

    dir::ensure_dir(dirs, &project.build_dir)?;
    if opts.clean {
        dir::clean_dir(dirs, &project.build_dir)?;
    }

    if opts.build {
        let configure = cmd::configure(opts, project);
        let execute = cmd::execute(opts, project);
        // both tools must resolve before anything spawns
        runner.find(&configure)?;
        runner.find(&execute)?;
        invoke(runner, &configure)?;
        invoke(runner, &execute)?;
    }

    Ok(())
}

fn invoke<R: Runner>(runner: &mut R, invocation: &Invocation) -> Result<(), Error> {
    info!("running {invocation}");
    match runner.run(invocation)? {
        Some(0) => Ok(()),
        code => Err(Error::ToolFailed {
            tool: invocation.program.clone(),
            code,
        }),
    }
}
