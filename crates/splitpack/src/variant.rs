//! Deployment variants and selector validation.
//!
//! The variant is the one positional input of a build. It is validated
//! before anything else happens, so an invalid invocation never derives a
//! job or touches the output directory.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Target deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Browser environment
    ///
    /// Assumes APIs like window, document, fetch are available.
    Browser,

    /// Node.js environment
    ///
    /// Assumes Node.js built-in modules are available (fs, path, http, etc.).
    Node,
}

impl Variant {
    /// Every supported variant, in declaration order.
    pub const ALL: [Variant; 2] = [Variant::Browser, Variant::Node];

    /// Name used on the command line, in paths, and as the esbuild platform.
    pub const fn as_str(self) -> &'static str {
        match self {
            Variant::Browser => "browser",
            Variant::Node => "node",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "browser" => Ok(Variant::Browser),
            "node" => Ok(Variant::Node),
            other => Err(SelectorError::Unsupported(other.to_string())),
        }
    }
}

/// Errors raised while validating the variant selector.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SelectorError {
    /// No selector was given
    #[error("You must specify a build target ({})", supported_names("/"))]
    #[diagnostic(
        code(splitpack::selector::missing),
        help("Pass the target as the first argument, e.g. `splitpack node`")
    )]
    Missing,

    /// The selector is not one of the supported variants
    #[error("Invalid build target '{}' (expected one of: {})", .0, supported_names(", "))]
    #[diagnostic(
        code(splitpack::selector::unsupported),
        help("Targets are case-sensitive")
    )]
    Unsupported(String),
}

fn supported_names(separator: &str) -> String {
    Variant::ALL
        .iter()
        .map(|v| v.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Validate a raw selector.
///
/// # Errors
///
/// - [`SelectorError::Missing`] when `raw` is `None`
/// - [`SelectorError::Unsupported`] when `raw` names no supported variant
///
/// # Examples
///
/// ```
/// use splitpack::variant::{validate, SelectorError, Variant};
///
/// assert_eq!(validate(Some("node")), Ok(Variant::Node));
/// assert_eq!(validate(None), Err(SelectorError::Missing));
/// assert!(matches!(validate(Some("deno")), Err(SelectorError::Unsupported(_))));
/// ```
pub fn validate(raw: Option<&str>) -> Result<Variant, SelectorError> {
    raw.ok_or(SelectorError::Missing)?.parse()
}
