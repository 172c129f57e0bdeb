//! In-memory package-manager adapter for testing.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use akiro_core::{
    application::{ApplicationError, ports::PackageManager},
    domain::InstallCommand,
    error::AkiroResult,
};

/// Records every invocation instead of spawning anything.
///
/// Clones share the same invocation log, so a test can keep one handle
/// and hand another to the service under test.
#[derive(Debug, Default, Clone)]
pub struct RecordingRunner {
    invocations: Arc<Mutex<Vec<Vec<String>>>>,
    fail_from: Arc<Mutex<Option<usize>>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every invocation from the given 1-based index onwards.
    pub fn fail_from(&self, index: usize) {
        *self.fail_from.lock().unwrap() = Some(index);
    }

    /// Every argument list seen so far, in call order.
    pub fn invocations(&self) -> Vec<Vec<String>> {
        self.invocations.lock().unwrap().clone()
    }

    fn record(&self, args: Vec<String>) -> AkiroResult<()> {
        let mut invocations = self.invocations.lock().unwrap();
        let call_index = invocations.len() + 1;

        if let Some(fail_from) = *self.fail_from.lock().unwrap() {
            if call_index >= fail_from {
                return Err(ApplicationError::CommandFailed {
                    command: args.first().cloned().unwrap_or_default(),
                    status: 1,
                }
                .into());
            }
        }

        invocations.push(args);
        Ok(())
    }
}

impl PackageManager for RecordingRunner {
    fn install(&self, command: &InstallCommand) -> AkiroResult<()> {
        self.record(command.tokens().to_vec())
    }

    fn install_with_graph(&self, command: &InstallCommand, graph_out: &Path) -> AkiroResult<()> {
        self.record(command.with_extra_args([
            "--format=json".to_string(),
            format!("--out-file={}", graph_out.display()),
        ]))
    }

    fn list_built(&self, graph: &Path, out: &Path) -> AkiroResult<()> {
        self.record(vec![
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
        self.record(args)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use akiro_core::domain::{CommandPlan, Requirement};

    #[test]
    fn records_in_call_order() {
        let runner = RecordingRunner::new();
        let plan = CommandPlan::default();

        runner
            .install(&plan.command(Requirement::new("zlib", "1.3.1")))
            .unwrap();
        runner
            .install(&plan.command(Requirement::new("fmt", "10.2.1")))
            .unwrap();

        let invocations = runner.invocations();
        assert_eq!(invocations.len(), 2);
        assert!(invocations[0].contains(&"--requires=zlib/1.3.1".to_string()));
        assert!(invocations[1].contains(&"--requires=fmt/10.2.1".to_string()));
    }

    #[test]
    fn fail_from_rejects_later_calls() {
        let runner = RecordingRunner::new();
        runner.fail_from(2);
        let plan = CommandPlan::default();

        assert!(runner
            .install(&plan.command(Requirement::new("zlib", "1.3.1")))
            .is_ok());
        assert!(runner
            .install(&plan.command(Requirement::new("fmt", "10.2.1")))
            .is_err());
        assert_eq!(runner.invocations().len(), 1);
    }
}
