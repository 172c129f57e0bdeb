//! Conan CLI process adapter.

use std::path::{Path, PathBuf};
use std::process::Command;

use akiro_core::{
    application::{ApplicationError, ports::PackageManager},
    domain::InstallCommand,
    error::AkiroResult,
};
use tracing::{debug, info};

/// Drives the real `conan` binary, one sequential invocation at a time.
///
/// Stdout and stderr are inherited so Conan's own progress output reaches
/// the user untouched; this adapter only cares about the exit status.
pub struct ConanCli {
    program: PathBuf,
}

impl ConanCli {
    /// Use `conan` from `PATH`.
    pub fn new() -> Self {
        Self::with_program("conan")
    }

    /// Use a specific binary (from configuration).
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn run(&self, args: &[String]) -> AkiroResult<()> {
        info!(program = %self.program.display(), args = %args.join(" "), "EXECUTE");

        let status = Command::new(&self.program).args(args).status().map_err(|e| {
            ApplicationError::SpawnFailed {
                program: self.program.display().to_string(),
                reason: e.to_string(),
            }
        })?;

        debug!(?status, "conan exited");
        if status.success() {
            Ok(())
        } else {
            Err(ApplicationError::CommandFailed {
                command: args.first().cloned().unwrap_or_default(),
                status: status.code().unwrap_or(-1),
            }
            .into())
        }
    }
}

impl Default for ConanCli {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageManager for ConanCli {
    fn install(&self, command: &InstallCommand) -> AkiroResult<()> {
        self.run(command.tokens())
    }

    fn install_with_graph(&self, command: &InstallCommand, graph_out: &Path) -> AkiroResult<()> {
        let args = command.with_extra_args([
            "--format=json".to_string(),
            format!("--out-file={}", graph_out.display()),
        ]);
        self.run(&args)
    }

    fn list_built(&self, graph: &Path, out: &Path) -> AkiroResult<()> {
        self.run(&[
            "list".into(),
            format!("--graph={}", graph.display()),
            "--graph-binaries=build".into(),
            "--format=json".into(),
            format!("--out-file={}", out.display()),
        ])
    }

    fn merge_lists(&self, lists: &[PathBuf], out: &Path) -> AkiroResult<()> {
        let mut args: Vec<String> = vec!["pkglist".into(), "merge".into()];
        args.extend(lists.iter().map(|list| format!("--list={}", list.display())));
        args.push("--format=json".into());
        args.push(format!("--out-file={}", out.display()));
        self.run(&args)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
