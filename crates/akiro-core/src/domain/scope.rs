//! Build-role scopes for settings, configurations, and options.
//!
//! # Design
//!
//! `Scope` is a pure value type — `Copy`, equality-by-value, no identity.
//! The set is small, fixed, and closed: Conan only understands the three
//! `-X:a` / `-X:b` / `-X:h` suffixes, so this is a literal enumeration,
//! not an open-ended table.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The build-role context a setting, configuration, or option applies to.
///
/// Controls which side of a cross-compilation boundary the value lands on:
/// `Build` is the machine doing the compiling, `Host` is the machine the
/// binaries will run on, `All` is both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Applies to both contexts (`-s:a`, `-c:a`, `-o:a`).
    #[default]
    All,
    /// Build context only (`-s:b`, ...).
    Build,
    /// Host context only (`-s:h`, ...).
    Host,
}

impl Scope {
    /// The one-letter code Conan expects after the flag colon.
    pub const fn code(&self) -> char {
        match self {
            Self::All => 'a',
            Self::Build => 'b',
            Self::Host => 'h',
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Build => "build",
            Self::Host => "host",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = DomainError;

    /// Parse a scope literal.
    ///
    /// Surrounding whitespace is tolerated; anything that is not exactly
    /// one of the three literals after trimming is an unknown scope, which
    /// aborts the whole expansion (see `domain::expand`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" => Ok(Self::All),
            "build" => Ok(Self::Build),
            "host" => Ok(Self::Host),
            other => Err(DomainError::UnknownScope {
                scope: other.to_string(),
            }),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
