//! The `Requirement` token list.

use std::fmt;

use crate::domain::scope::Scope;

/// One invocation's worth of requirement arguments.
///
/// A flat, ordered token list: exactly one leading `--requires=<pkg>/<ver>`
/// token, followed by scope-tagged flag/value pairs for settings,
/// configurations, and options, then combined `--tool-requires=` tokens.
/// Token order is fixed by construction and never re-sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    tokens: Vec<String>,
}

impl Requirement {
    /// Start a requirement for one package/version pair.
    pub fn new(package: &str, version: &str) -> Self {
        Self {
            tokens: vec![format!("--requires={package}/{version}")],
        }
    }

    /// Append a scope-tagged flag/value pair, e.g. `-s:b` `os=Linux`.
    ///
    /// `flag` is the bare letter (`s`, `c`, or `o`); the value lands as its
    /// own token, not appended to the flag.
    pub fn push_scoped(&mut self, flag: char, scope: Scope, value: &str) {
        self.tokens.push(format!("-{flag}:{}", scope.code()));
        self.tokens.push(value.to_string());
    }

    /// Append a combined `--tool-requires=<reference>` token.
    ///
    /// Tool requirements never carry a scope suffix — this asymmetry with
    /// the other three categories is deliberate and must be preserved.
    pub fn push_tool_requires(&mut self, reference: &str) {
        self.tokens.push(format!("--tool-requires={reference}"));
    }

    /// The tokens in emission order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_requirement_is_single_requires_token() {
        let req = Requirement::new("zlib", "1.3.1");
        assert_eq!(req.tokens(), ["--requires=zlib/1.3.1"]);
    }

    #[test]
    fn scoped_pair_emits_flag_then_value() {
        let mut req = Requirement::new("zlib", "1.3.1");
        req.push_scoped('s', Scope::Build, "os=Linux");
        assert_eq!(
            req.tokens(),
            ["--requires=zlib/1.3.1", "-s:b", "os=Linux"]
        );
    }

    #[test]
    fn tool_requires_is_one_combined_token() {
        let mut req = Requirement::new("openssl", "3.0");
        req.push_tool_requires("cmake/3.27");
        assert_eq!(
            req.tokens(),
            ["--requires=openssl/3.0", "--tool-requires=cmake/3.27"]
        );
    }

    #[test]
    fn display_joins_with_single_spaces() {
        let mut req = Requirement::new("zlib", "1.3.1");
        req.push_scoped('o', Scope::All, "shared=True");
        assert_eq!(req.to_string(), "--requires=zlib/1.3.1 -o:a shared=True");
    }
}
