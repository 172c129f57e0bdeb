//! Implementation of the `akiro plan` command.

use akiro_adapters::TeraSpecLoader;
use akiro_core::{
    application::SpecService,
    domain::{CommandPlan, RenderVars},
};

use crate::{
    cli::{PlanArgs, PlanFormat, global::GlobalArgs},
    commands::{resolve_build_type, resolve_profile, resolve_spec_path},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: PlanArgs,
    _global: GlobalArgs,
    config: AppConfig,
    _output: OutputManager,
) -> CliResult<()> {
    let spec_path = resolve_spec_path(&args.spec, &config)?;
    let build_type = resolve_build_type(&args.spec, &config);
    let profile = resolve_profile(args.profile.as_ref(), &config);

    let vars = RenderVars::for_host(&build_type);
    let plan = CommandPlan::new(&build_type, &profile);

    let spec_service = SpecService::new(Box::new(TeraSpecLoader::new()));
    let commands = spec_service.plan(&spec_path, &vars, &plan)?;

    match args.format {
        PlanFormat::List => {
            for command in &commands {
                println!("{command}");
            }
        }
        PlanFormat::Json => {
            // Serialise as a JSON array of argv token lists to stdout
            // (bypasses OutputManager because JSON output must be parseable
            // even in non-TTY pipes).
            let tokens: Vec<&[String]> = commands.iter().map(|c| c.tokens()).collect();
            let json = serde_json::to_string_pretty(&tokens).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }
    }

    Ok(())
}
