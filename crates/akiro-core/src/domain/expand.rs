//! Requirement expansion — the specification-to-token-list transformation.
//!
//! A single deterministic pass over the document: every (package, version,
//! configuration-block) triple becomes one [`Requirement`], in document
//! order. A bare version counts as exactly one triple.
//!
//! Expansion is all-or-nothing: an unknown scope anywhere in the document
//! fails the whole pass and no requirements are returned.

use tracing::{debug, instrument};

use crate::domain::{
    error::DomainError,
    requirement::Requirement,
    scope::Scope,
    spec::{ConfigBlock, SpecDocument, VersionConfig},
};

/// Expand a specification document into its requirement list.
#[instrument(skip_all, fields(packages = document.packages.len()))]
pub fn expand_requirements(document: &SpecDocument) -> Result<Vec<Requirement>, DomainError> {
    let mut requirements = Vec::new();

    for package in &document.packages {
        for version in &package.versions {
            match &version.config {
                VersionConfig::Bare => {
                    requirements.push(Requirement::new(&package.name, &version.version));
                }
                VersionConfig::Blocks(blocks) => {
                    for block in blocks {
                        requirements.push(expand_block(&package.name, &version.version, block)?);
                    }
                }
            }
        }
    }

    debug!(requirements = requirements.len(), "expansion complete");
    Ok(requirements)
}

/// Expand one configuration block into a requirement.
///
/// Group order is fixed: settings, configurations, options, tool-requires.
/// Entries are trimmed; entries that trim to the empty string are dropped
/// silently (they contribute no tokens and are not an error).
fn expand_block(
    package: &str,
    version: &str,
    block: &ConfigBlock,
) -> Result<Requirement, DomainError> {
    let scope = match &block.scope {
        Some(raw) => raw.parse::<Scope>()?,
        None => Scope::default(),
    };

    let mut requirement = Requirement::new(package, version);

    for setting in trimmed(&block.settings) {
        requirement.push_scoped('s', scope, setting);
    }
    for configuration in trimmed(&block.configurations) {
        requirement.push_scoped('c', scope, configuration);
    }
    for option in trimmed(&block.options) {
        requirement.push_scoped('o', scope, option);
    }
    for tool in trimmed(&block.tool_requires) {
        requirement.push_tool_requires(tool);
    }

    Ok(requirement)
}

/// Trim entries and drop the ones that end up empty, preserving order.
fn trimmed(entries: &[String]) -> impl Iterator<Item = &str> {
    entries.iter().map(|e| e.trim()).filter(|e| !e.is_empty())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::spec::{PackageSpec, VersionSpec};

    fn doc(packages: Vec<PackageSpec>) -> SpecDocument {
        SpecDocument::new(packages)
    }

    fn tokens(requirements: &[Requirement]) -> Vec<Vec<String>> {
        requirements
            .iter()
            .map(|r| r.tokens().to_vec())
            .collect()
    }

    #[test]
    fn bare_version_expands_to_single_requires_token() {
        let document = doc(vec![PackageSpec::new(
            "zlib",
            vec![VersionSpec::bare("1.3.1")],
        )]);
        let requirements = expand_requirements(&document).unwrap();
        assert_eq!(tokens(&requirements), [["--requires=zlib/1.3.1"]]);
    }

    #[test]
    fn bare_versions_yield_one_requirement_per_pair() {
        let document = doc(vec![
            PackageSpec::new(
                "zlib",
                vec![VersionSpec::bare("1.3.1"), VersionSpec::bare("1.2.13")],
            ),
            PackageSpec::new("fmt", vec![VersionSpec::bare("10.2.1")]),
        ]);
        let requirements = expand_requirements(&document).unwrap();
        assert_eq!(requirements.len(), document.version_count());
        for requirement in &requirements {
            assert_eq!(requirement.tokens().len(), 1);
            assert!(requirement.tokens()[0].starts_with("--requires="));
        }
    }

    #[test]
    fn settings_and_options_with_default_scope() {
        // The concrete scenario from the expansion contract: an empty
        // settings entry contributes nothing.
        let block = ConfigBlock {
            settings: vec!["os=Linux".into(), "".into()],
            options: vec!["shared=True".into()],
            ..Default::default()
        };
        let document = doc(vec![PackageSpec::new(
            "zlib",
            vec![VersionSpec::with_blocks("1.3.1", vec![block])],
        )]);
        let requirements = expand_requirements(&document).unwrap();
        assert_eq!(
            tokens(&requirements),
            [[
                "--requires=zlib/1.3.1",
                "-s:a",
                "os=Linux",
                "-o:a",
                "shared=True"
            ]]
        );
    }

    #[test]
    fn explicit_scope_tags_all_three_categories() {
        let block = ConfigBlock {
            scope: Some(" build ".into()),
            settings: vec!["os=Linux".into()],
            configurations: vec!["tools.build:jobs=4".into()],
            options: vec!["shared=False".into()],
            ..Default::default()
        };
        let document = doc(vec![PackageSpec::new(
            "boost",
            vec![VersionSpec::with_blocks("1.84.0", vec![block])],
        )]);
        let requirements = expand_requirements(&document).unwrap();
        assert_eq!(
            tokens(&requirements),
            [[
                "--requires=boost/1.84.0",
                "-s:b",
                "os=Linux",
                "-c:b",
                "tools.build:jobs=4",
                "-o:b",
                "shared=False"
            ]]
        );
    }

    #[test]
    fn tool_requires_has_no_scope_suffix() {
        // Even under an explicit host scope, tool requirements are emitted
        // as a single combined token with no scope flag pair.
        let block = ConfigBlock {
            scope: Some("host".into()),
            tool_requires: vec!["cmake/3.27".into()],
            ..Default::default()
        };
        let document = doc(vec![PackageSpec::new(
            "openssl",
            vec![VersionSpec::with_blocks("3.0", vec![block])],
        )]);
        let requirements = expand_requirements(&document).unwrap();
        assert_eq!(
            tokens(&requirements),
            [["--requires=openssl/3.0", "--tool-requires=cmake/3.27"]]
        );
    }

    #[test]
    fn whitespace_only_entries_contribute_zero_tokens() {
        let block = ConfigBlock {
            settings: vec!["   ".into()],
            configurations: vec!["\t".into()],
            options: vec![" ".into()],
            tool_requires: vec!["".into()],
            ..Default::default()
        };
        let document = doc(vec![PackageSpec::new(
            "zlib",
            vec![VersionSpec::with_blocks("1.3.1", vec![block])],
        )]);
        let requirements = expand_requirements(&document).unwrap();
        assert_eq!(tokens(&requirements), [["--requires=zlib/1.3.1"]]);
    }

    #[test]
    fn group_order_is_fixed_regardless_of_source_key_order() {
        // Build the block from YAML with the keys deliberately reversed;
        // the serde field order has no bearing on emission order.
        let block: ConfigBlock = serde_yaml::from_str(
            "tool_requires: [ninja/1.11.1]\noptions: [shared=True]\nsettings: [os=Linux]\n",
        )
        .unwrap();
        let document = doc(vec![PackageSpec::new(
            "zlib",
            vec![VersionSpec::with_blocks("1.3.1", vec![block])],
        )]);
        let requirements = expand_requirements(&document).unwrap();
        assert_eq!(
            tokens(&requirements),
            [[
                "--requires=zlib/1.3.1",
                "-s:a",
                "os=Linux",
                "-o:a",
                "shared=True",
                "--tool-requires=ninja/1.11.1"
            ]]
        );
    }

    #[test]
    fn multiple_blocks_yield_one_requirement_each() {
        let blocks = vec![
            ConfigBlock {
                options: vec!["shared=True".into()],
                ..Default::default()
            },
            ConfigBlock {
                options: vec!["shared=False".into()],
                ..Default::default()
            },
        ];
        let document = doc(vec![PackageSpec::new(
            "zlib",
            vec![VersionSpec::with_blocks("1.3.1", blocks)],
        )]);
        let requirements = expand_requirements(&document).unwrap();
        assert_eq!(
            tokens(&requirements),
            [
                ["--requires=zlib/1.3.1", "-o:a", "shared=True"],
                ["--requires=zlib/1.3.1", "-o:a", "shared=False"],
            ]
        );
    }

    #[test]
    fn unknown_scope_fails_the_whole_expansion() {
        let blocks = vec![ConfigBlock {
            scope: Some("test".into()),
            ..Default::default()
        }];
        let document = doc(vec![
            PackageSpec::new("zlib", vec![VersionSpec::bare("1.3.1")]),
            PackageSpec::new("fmt", vec![VersionSpec::with_blocks("10.2.1", blocks)]),
        ]);
        let err = expand_requirements(&document).unwrap_err();
        assert!(matches!(err, DomainError::UnknownScope { scope } if scope == "test"));
    }

    #[test]
    fn expansion_is_deterministic() {
        let blocks = vec![ConfigBlock {
            scope: Some("host".into()),
            settings: vec!["compiler.cppstd=17".into()],
            tool_requires: vec!["cmake/3.27".into()],
            ..Default::default()
        }];
        let document = doc(vec![
            PackageSpec::new("openssl", vec![VersionSpec::with_blocks("3.0", blocks)]),
            PackageSpec::new("zlib", vec![VersionSpec::bare("1.3.1")]),
        ]);
        let first = expand_requirements(&document).unwrap();
        let second = expand_requirements(&document).unwrap();
        assert_eq!(first, second);
    }
}
