use std::path::PathBuf;
use std::process::{Command, Stdio};

/// A fully resolved external command invocation.
///
/// Built by callers, executed through a [`CommandRunner`] so tests can
/// observe invocations without spawning real processes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

/// Captured result of a finished command.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub success: bool,
    pub stderr: String,
}

/// Single chokepoint for spawning external processes.
pub trait CommandRunner {
    /// Run the command to completion, capturing its output.
    fn run(&self, spec: &CommandSpec) -> std::io::Result<RunOutput>;
}

/// Runner backed by `std::process::Command`.
///
/// The child gets no terminal: stdin is closed and stdout/stderr are
/// captured, so diagnostics can be attached to errors by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> std::io::Result<RunOutput> {
        let output = Command::new(&spec.program)
            .args(&spec.args)
            .stdin(Stdio::null())
            .output()?;

        Ok(RunOutput {
            success: output.status.success(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
