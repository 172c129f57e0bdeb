//! Built-list pipeline tests: core service + test-double adapters.
//!
//! Verifies the exact Conan argument sequences the pipeline produces,
//! with no real process or filesystem involved.

use std::path::Path;

use akiro_adapters::{MemoryWorkspace, RecordingRunner};
use akiro_core::application::{InstallService, Workspace};
use akiro_core::domain::{CommandPlan, InstallCommand, Requirement};

fn commands(names: &[(&str, &str)]) -> Vec<InstallCommand> {
    let plan = CommandPlan::new("Release", "default");
    names
        .iter()
        .map(|(package, version)| plan.command(Requirement::new(*package, *version)))
        .collect()
}

#[test]
fn single_install_exports_graph_and_seeds_manifest() {
    let runner = RecordingRunner::new();
    let workspace = MemoryWorkspace::new();
    // The runner never touches files, so the built list it would have
    // written is seeded up front.
    workspace.put("/scratch/built-0.json", "{\"zlib\": \"built\"}");

    let service = InstallService::new(Box::new(runner.clone()), Box::new(workspace.clone()));
    service
        .run_with_built_list(
            &commands(&[("zlib", "1.3.1")]),
            Path::new("/scratch"),
            Path::new("/out/built.json"),
        )
        .unwrap();

    let invocations = runner.invocations();
    assert_eq!(invocations.len(), 2);
    assert_eq!(
        invocations[0],
        [
            "install",
            "-pr:a",
            "default",
            "--build=missing",
            "-s",
            "build_type=Release",
            "--requires=zlib/1.3.1",
            "--format=json",
            "--out-file=/scratch/graph-0.json",
        ]
    );
    assert_eq!(
        invocations[1],
        [
            "list",
            "--graph=/scratch/graph-0.json",
            "--graph-binaries=build",
            "--format=json",
            "--out-file=/scratch/built-0.json",
        ]
    );

    // First (only) built list is copied straight to the manifest.
    assert_eq!(
        workspace.get(Path::new("/out/built.json")).as_deref(),
        Some("{\"zlib\": \"built\"}")
    );
}

#[test]
fn second_install_merges_into_the_manifest() {
    let runner = RecordingRunner::new();
    let workspace = MemoryWorkspace::new();
    workspace.put("/scratch/built-0.json", "first");
    workspace.put("/scratch/built-1.json", "second");

    let service = InstallService::new(Box::new(runner.clone()), Box::new(workspace.clone()));
    service
        .run_with_built_list(
            &commands(&[("zlib", "1.3.1"), ("fmt", "10.2.1")]),
            Path::new("/scratch"),
            Path::new("/out/built.json"),
        )
        .unwrap();

    let invocations = runner.invocations();
    assert_eq!(invocations.len(), 5);
    // The accumulated manifest is staged aside before the merge so the
    // merge never writes into one of its own inputs.
    assert_eq!(
        invocations[4],
        [
            "pkglist",
            "merge",
            "--list=/scratch/merge-1.json",
            "--list=/scratch/built-1.json",
            "--format=json",
            "--out-file=/out/built.json",
        ]
    );

    // Intermediate files are cleaned up; the manifest survives.
    assert!(!workspace.exists(Path::new("/scratch/merge-1.json")));
    assert!(!workspace.exists(Path::new("/scratch/built-0.json")));
    assert!(!workspace.exists(Path::new("/scratch/built-1.json")));
    assert!(workspace.exists(Path::new("/out/built.json")));
}

#[test]
fn runner_failure_stops_the_pipeline() {
    let runner = RecordingRunner::new();
    runner.fail_from(3); // fail on the second package's install
    let workspace = MemoryWorkspace::new();
    workspace.put("/scratch/built-0.json", "first");

    let service = InstallService::new(Box::new(runner.clone()), Box::new(workspace.clone()));
    let result = service.run_with_built_list(
        &commands(&[("zlib", "1.3.1"), ("fmt", "10.2.1")]),
        Path::new("/scratch"),
        Path::new("/out/built.json"),
    );

    assert!(result.is_err());
    // Only the first package's install and list ran.
    assert_eq!(runner.invocations().len(), 2);
    // The manifest still holds the first package's list.
    assert_eq!(
        workspace.get(Path::new("/out/built.json")).as_deref(),
        Some("first")
    );
}
