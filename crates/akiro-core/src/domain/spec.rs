//! The in-memory specification document.
//!
//! This is the structured result of rendering and parsing a package
//! specification file: packages, their versions, and the configuration
//! blocks requested for each version.
//!
//! # Ordering
//!
//! Document order is load-bearing: requirements must come out in exactly
//! the order the specification declares them, every time. The model
//! therefore uses `Vec`s throughout — never a hash map — and the loader
//! adapter is responsible for preserving YAML mapping order when it builds
//! these values.

use serde::{Deserialize, Serialize};

/// A fully parsed specification document.
///
/// Constructed once per invocation by the spec-loader adapter, consumed
/// immediately by the expander, never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecDocument {
    /// Packages in declaration order.
    pub packages: Vec<PackageSpec>,
}

impl SpecDocument {
    pub fn new(packages: Vec<PackageSpec>) -> Self {
        Self { packages }
    }

    /// Total number of (package, version) pairs in the document.
    pub fn version_count(&self) -> usize {
        self.packages.iter().map(|p| p.versions.len()).sum()
    }
}

/// One package and all the versions requested for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    pub name: String,
    /// Versions in declaration order.
    pub versions: Vec<VersionSpec>,
}

impl PackageSpec {
    pub fn new(name: impl Into<String>, versions: Vec<VersionSpec>) -> Self {
        Self {
            name: name.into(),
            versions,
        }
    }
}

/// One version of a package plus its requested build variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSpec {
    pub version: String,
    pub config: VersionConfig,
}

impl VersionSpec {
    /// A version with no configuration at all (`<version>: null` in YAML).
    pub fn bare(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            config: VersionConfig::Bare,
        }
    }

    pub fn with_blocks(version: impl Into<String>, blocks: Vec<ConfigBlock>) -> Self {
        Self {
            version: version.into(),
            config: VersionConfig::Blocks(blocks),
        }
    }
}

/// Whether a version carries configuration blocks.
///
/// The absence-marker is an explicit variant rather than an empty list so
/// the two expansion paths stay exhaustive: a bare version always yields
/// exactly one requirement, while `Blocks(vec![])` would yield zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionConfig {
    /// No configuration — expands to a single `--requires=` token.
    Bare,
    /// One requirement per block, in declaration order.
    Blocks(Vec<ConfigBlock>),
}

/// One build variant requested for a package version.
///
/// All keys are optional; an empty block behaves like a bare version
/// requirement with the default `all` scope. Unknown YAML keys are
/// ignored rather than rejected, matching how Conan itself treats
/// unrecognised profile entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigBlock {
    /// Scope literal as written in the document. Validated lazily during
    /// expansion, not at parse time.
    #[serde(default)]
    pub scope: Option<String>,

    /// `key=value` setting expressions (`-s:<scope>` pairs).
    #[serde(default)]
    pub settings: Vec<String>,

    /// `key=value` conf expressions (`-c:<scope>` pairs).
    #[serde(default)]
    pub configurations: Vec<String>,

    /// `key=value` option expressions (`-o:<scope>` pairs).
    #[serde(default)]
    pub options: Vec<String>,

    /// `package/version` tool requirements (`--tool-requires=` tokens).
    #[serde(default)]
    pub tool_requires: Vec<String>,
}

/// The substitution variables available when a specification template is
/// rendered.
///
/// Exactly two names are defined: `os` and `build_type`. Referencing any
/// other variable in a template is a render error, so this is a closed
/// struct rather than an open map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderVars {
    /// Normalized lowercase host platform name (`linux`, `macos`, ...).
    pub os: String,
    /// Caller-supplied build type; defaults to `Release` at the CLI layer.
    pub build_type: String,
}

impl RenderVars {
    pub fn new(os: impl Into<String>, build_type: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            build_type: build_type.into(),
        }
    }

    /// Variables for the machine we are running on.
    pub fn for_host(build_type: impl Into<String>) -> Self {
        Self::new(std::env::consts::OS, build_type)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
