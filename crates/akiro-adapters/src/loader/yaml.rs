//! Rendered-document to domain-model conversion.
//!
//! This is the schema boundary: everything past it is the typed
//! [`SpecDocument`], everything before it is untyped YAML. Document order
//! survives the conversion because `serde_yaml::Mapping` iterates in
//! insertion order and the domain model is `Vec`-based.

use akiro_core::{
    application::ApplicationError,
    domain::{ConfigBlock, PackageSpec, SpecDocument, VersionConfig, VersionSpec},
    error::AkiroResult,
};
use serde_yaml::Value;

/// Convert a parsed YAML document into a [`SpecDocument`].
///
/// Shape rules:
/// - the root must be a mapping containing a `packages` key;
/// - each package maps versions to either `null` or a sequence of
///   configuration-block mappings;
/// - package and version keys may be strings or numeric scalars (an
///   unquoted `3.0:` in YAML arrives as a number and stringifies back
///   to `3.0`).
///
/// Any other shape is a schema error. Scope values are *not* checked
/// here — that stays lazy, in the expansion pass.
pub fn document_from_yaml(root: Value) -> AkiroResult<SpecDocument> {
    let Value::Mapping(mut root) = root else {
        return Err(schema("top level must be a mapping"));
    };

    let Some(packages) = root.remove("packages") else {
        return Err(schema("missing 'packages' key"));
    };
    let Value::Mapping(packages) = packages else {
        return Err(schema("'packages' must be a mapping of package names"));
    };

    let mut specs = Vec::with_capacity(packages.len());
    for (name, versions) in packages {
        let name = scalar_key(&name, "package name")?;
        let Value::Mapping(versions) = versions else {
            return Err(schema(format!(
                "package '{name}' must map versions to configurations"
            )));
        };

        let mut version_specs = Vec::with_capacity(versions.len());
        for (version, config) in versions {
            let version = scalar_key(&version, "version")?;
            version_specs.push(VersionSpec {
                config: version_config(&name, &version, config)?,
                version,
            });
        }
        specs.push(PackageSpec::new(name, version_specs));
    }

    Ok(SpecDocument::new(specs))
}

fn version_config(package: &str, version: &str, value: Value) -> AkiroResult<VersionConfig> {
    match value {
        Value::Null => Ok(VersionConfig::Bare),
        Value::Sequence(entries) => {
            let mut blocks = Vec::with_capacity(entries.len());
            for entry in entries {
                let block: ConfigBlock = serde_yaml::from_value(entry).map_err(|e| {
                    schema(format!(
                        "invalid configuration block for {package}/{version}: {e}"
                    ))
                })?;
                blocks.push(block);
            }
            Ok(VersionConfig::Blocks(blocks))
        }
        other => Err(schema(format!(
            "{package}/{version} must be null or a list of configuration blocks, got {}",
            value_kind(&other)
        ))),
    }
}

/// Stringify a mapping key.
///
/// YAML scalars that look numeric (`3.0:`) parse as numbers; they are
/// legitimate package versions and round-trip through `Display`.
fn scalar_key(key: &Value, what: &str) -> AkiroResult<String> {
    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(schema(format!(
            "{what} must be a scalar, got {}",
            value_kind(other)
        ))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

fn schema(message: impl Into<String>) -> akiro_core::error::AkiroError {
    ApplicationError::Schema {
        message: message.into(),
    }
    .into()
}

// ── tests ─────────────────────────────────────────────────────────────────────
