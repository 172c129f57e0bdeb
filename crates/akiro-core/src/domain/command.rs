//! Install-command assembly.
//!
//! A [`CommandPlan`] holds the fixed invocation parameters (build type and
//! profile) and turns each [`Requirement`] into a full [`InstallCommand`]
//! by prepending the install prefix. Pure, order-preserving mapping.

use std::fmt;

use crate::domain::requirement::Requirement;

/// Default build type when the caller supplies none.
pub const DEFAULT_BUILD_TYPE: &str = "Release";

/// Default profile when the caller supplies none.
pub const DEFAULT_PROFILE: &str = "default";

/// The fixed parameters shared by every install invocation in one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPlan {
    build_type: String,
    profile: String,
}

impl CommandPlan {
    pub fn new(build_type: impl Into<String>, profile: impl Into<String>) -> Self {
        Self {
            build_type: build_type.into(),
            profile: profile.into(),
        }
    }

    pub fn build_type(&self) -> &str {
        &self.build_type
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// The constant prefix every install command starts with.
    fn prefix(&self) -> Vec<String> {
        vec![
            "install".into(),
            "-pr:a".into(),
            self.profile.clone(),
            "--build=missing".into(),
            "-s".into(),
            format!("build_type={}", self.build_type),
        ]
    }

    /// Prefix one requirement into a runnable command.
    pub fn command(&self, requirement: Requirement) -> InstallCommand {
        let mut tokens = self.prefix();
        tokens.extend(requirement.into_tokens());
        InstallCommand { tokens }
    }

    /// Map a whole requirement list to commands, preserving order.
    pub fn commands(&self, requirements: Vec<Requirement>) -> Vec<InstallCommand> {
        requirements
            .into_iter()
            .map(|requirement| self.command(requirement))
            .collect()
    }
}

impl Default for CommandPlan {
    fn default() -> Self {
        Self::new(DEFAULT_BUILD_TYPE, DEFAULT_PROFILE)
    }
}

/// One complete argument list for the package manager.
///
/// Tokens exclude the program name; [`fmt::Display`] renders the full
/// command line (`conan install ...`) for dry-run output and logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    tokens: Vec<String>,
}

impl InstallCommand {
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Tokens plus extra trailing arguments, for variants like graph export.
    pub fn with_extra_args<I, S>(&self, extra: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens = self.tokens.clone();
        tokens.extend(extra.into_iter().map(Into::into));
        tokens
    }
}

impl fmt::Display for InstallCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conan")?;
        for token in &self.tokens {
            write!(f, " {token}")?;
        }
        Ok(())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_layout_is_fixed() {
        let plan = CommandPlan::new("Debug", "clang");
        let command = plan.command(Requirement::new("zlib", "1.3.1"));
        assert_eq!(
            command.tokens(),
            [
                "install",
                "-pr:a",
                "clang",
                "--build=missing",
                "-s",
                "build_type=Debug",
                "--requires=zlib/1.3.1",
            ]
        );
    }

    #[test]
    fn defaults_are_release_and_default_profile() {
        let plan = CommandPlan::default();
        assert_eq!(plan.build_type(), "Release");
        assert_eq!(plan.profile(), "default");
    }

    #[test]
    fn commands_preserve_requirement_order() {
        let plan = CommandPlan::default();
        let commands = plan.commands(vec![
            Requirement::new("zlib", "1.3.1"),
            Requirement::new("fmt", "10.2.1"),
        ]);
        assert_eq!(commands.len(), 2);
        assert!(commands[0].tokens().contains(&"--requires=zlib/1.3.1".to_string()));
        assert!(commands[1].tokens().contains(&"--requires=fmt/10.2.1".to_string()));
    }

    #[test]
    fn display_prepends_program_name() {
        let plan = CommandPlan::default();
        let command = plan.command(Requirement::new("zlib", "1.3.1"));
        assert_eq!(
            command.to_string(),
            "conan install -pr:a default --build=missing -s build_type=Release --requires=zlib/1.3.1"
        );
    }

    #[test]
    fn extra_args_append_after_requirement() {
        let plan = CommandPlan::default();
        let command = plan.command(Requirement::new("zlib", "1.3.1"));
        let tokens = command.with_extra_args(["--format=json", "--out-file=/tmp/graph.json"]);
        assert_eq!(tokens.last().unwrap(), "--out-file=/tmp/graph.json");
        assert_eq!(tokens.len(), command.tokens().len() + 2);
    }
}
