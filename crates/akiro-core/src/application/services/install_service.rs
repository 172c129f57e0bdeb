//! Install Service - sequential command execution.
//!
//! This service drives the package manager through the generated command
//! list, strictly one invocation at a time. The first failure aborts the
//! run; there is no partial-continuation policy.
//!
//! With the built-list pipeline enabled, each install additionally exports
//! its dependency graph, derives the list of binaries that were actually
//! built, and folds that list into an accumulated manifest.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::ports::{PackageManager, Workspace},
    domain::InstallCommand,
    error::AkiroResult,
};

/// Orchestrates sequential package-manager invocations.
pub struct InstallService {
    runner: Box<dyn PackageManager>,
    workspace: Box<dyn Workspace>,
}

impl InstallService {
    /// Create a new install service with the given adapters.
    pub fn new(runner: Box<dyn PackageManager>, workspace: Box<dyn Workspace>) -> Self {
        Self { runner, workspace }
    }

    /// Run every command in order, aborting on the first failure.
    #[instrument(skip_all, fields(commands = commands.len()))]
    pub fn run(&self, commands: &[InstallCommand]) -> AkiroResult<()> {
        for (index, command) in commands.iter().enumerate() {
            info!(step = index + 1, total = commands.len(), %command, "install");
            self.runner.install(command)?;
        }
        Ok(())
    }

    /// Run every command in order, accumulating the built-package manifest.
    ///
    /// Per command: install with graph export, derive the built list from
    /// the graph, then fold it into `out`. The first command's list seeds
    /// the manifest; later lists are merged through the package manager's
    /// own merge operation (the manifest format is opaque to us).
    ///
    /// `scratch` is a caller-owned directory for intermediate files; the
    /// caller controls its lifetime (the CLI uses a temp dir).
    #[instrument(skip_all, fields(commands = commands.len(), out = %out.display()))]
    pub fn run_with_built_list(
        &self,
        commands: &[InstallCommand],
        scratch: &Path,
        out: &Path,
    ) -> AkiroResult<()> {
        for (index, command) in commands.iter().enumerate() {
            info!(step = index + 1, total = commands.len(), %command, "install");

            let graph = scratch.join(format!("graph-{index}.json"));
            let built = scratch.join(format!("built-{index}.json"));

            self.runner.install_with_graph(command, &graph)?;
            self.runner.list_built(&graph, &built)?;

            if index == 0 {
                self.workspace.copy_file(&built, out)?;
            } else {
                // The merge operation cannot write into one of its inputs,
                // so the accumulated manifest moves aside first.
                let previous = scratch.join(format!("merge-{index}.json"));
                self.workspace.copy_file(out, &previous)?;
                self.runner
                    .merge_lists(&[previous.clone(), built.clone()], out)?;
                self.workspace.remove_file(&previous)?;
            }

            self.workspace.remove_file(&graph)?;
            self.workspace.remove_file(&built)?;
        }

        info!(manifest = %out.display(), "built-list complete");
        Ok(())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use crate::application::ApplicationError;
    use crate::domain::{CommandPlan, Requirement};
    use crate::error::AkiroError;

    /// Test double recording every port call in order.
    #[derive(Default)]
    struct Recorder {
        calls: Arc<Mutex<Vec<String>>>,
        fail_on_install: Option<usize>,
        installs_seen: Mutex<usize>,
    }

    impl Recorder {
        fn log(&self, entry: String) {
            self.calls.lock().unwrap().push(entry);
        }
    }

    impl PackageManager for Recorder {
        fn install(&self, command: &InstallCommand) -> AkiroResult<()> {
            let seen = {
                let mut seen = self.installs_seen.lock().unwrap();
                *seen += 1;
                *seen
            };
            if self.fail_on_install == Some(seen) {
                return Err(AkiroError::Application(ApplicationError::CommandFailed {
                    command: command.to_string(),
                    status: 1,
                }));
            }
            self.log(format!("install {command}"));
            Ok(())
        }

        fn install_with_graph(
            &self,
            command: &InstallCommand,
            graph_out: &Path,
        ) -> AkiroResult<()> {
            self.log(format!("graph {} -> {}", command, graph_out.display()));
            Ok(())
        }

        fn list_built(&self, graph: &Path, out: &Path) -> AkiroResult<()> {
            self.log(format!("list {} -> {}", graph.display(), out.display()));
            Ok(())
        }

        fn merge_lists(&self, lists: &[PathBuf], out: &Path) -> AkiroResult<()> {
            let inputs: Vec<String> = lists.iter().map(|l| l.display().to_string()).collect();
            self.log(format!("merge {} -> {}", inputs.join("+"), out.display()));
            Ok(())
        }
    }

    impl Workspace for Recorder {
        fn copy_file(&self, from: &Path, to: &Path) -> AkiroResult<()> {
            self.log(format!("copy {} -> {}", from.display(), to.display()));
            Ok(())
        }

        fn remove_file(&self, path: &Path) -> AkiroResult<()> {
            self.log(format!("remove {}", path.display()));
            Ok(())
        }

        fn exists(&self, _path: &Path) -> bool {
            true
        }
    }

    fn commands(count: usize) -> Vec<InstallCommand> {
        let plan = CommandPlan::default();
        (0..count)
            .map(|i| plan.command(Requirement::new("pkg", &format!("1.{i}"))))
            .collect()
    }

    fn service_with(recorder: Recorder) -> (InstallService, Arc<Mutex<Vec<String>>>) {
        let calls = recorder.calls.clone();
        let workspace = Recorder {
            calls: calls.clone(),
            ..Default::default()
        };
        (
            InstallService::new(Box::new(recorder), Box::new(workspace)),
            calls,
        )
    }

    #[test]
    fn run_invokes_every_command_in_order() {
        let (service, calls) = service_with(Recorder::default());
        service.run(&commands(3)).unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 3);
        assert!(calls[0].contains("pkg/1.0"));
        assert!(calls[2].contains("pkg/1.2"));
    }

    #[test]
    fn run_aborts_on_first_failure() {
        let recorder = Recorder {
            fail_on_install: Some(2),
            ..Default::default()
        };
        let (service, calls) = service_with(recorder);
        let err = service.run(&commands(4)).unwrap_err();

        assert!(matches!(
            err,
            AkiroError::Application(ApplicationError::CommandFailed { .. })
        ));
        // Only the first install completed; commands 3 and 4 never ran.
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn built_list_seeds_then_merges() {
        let (service, calls) = service_with(Recorder::default());
        let scratch = PathBuf::from("/scratch");
        service
            .run_with_built_list(&commands(2), &scratch, Path::new("built.json"))
            .unwrap();

        let calls = calls.lock().unwrap();
        let copies: Vec<&String> = calls.iter().filter(|c| c.starts_with("copy")).collect();
        let merges: Vec<&String> = calls.iter().filter(|c| c.starts_with("merge")).collect();

        // First command copies its list into place; second moves the
        // manifest aside and merges.
        assert_eq!(copies[0], "copy /scratch/built-0.json -> built.json");
        assert_eq!(copies[1], "copy built.json -> /scratch/merge-1.json");
        assert_eq!(
            merges,
            ["merge /scratch/merge-1.json+/scratch/built-1.json -> built.json"]
        );
    }

    #[test]
    fn built_list_cleans_up_scratch_files() {
        let (service, calls) = service_with(Recorder::default());
        service
            .run_with_built_list(&commands(1), Path::new("/scratch"), Path::new("built.json"))
            .unwrap();

        let calls = calls.lock().unwrap();
        assert!(calls.iter().any(|c| c == "remove /scratch/graph-0.json"));
        assert!(calls.iter().any(|c| c == "remove /scratch/built-0.json"));
    }
}
