use serde::{Deserialize, Serialize};
use std::fmt;

/// Module-linkage format of an emitted artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CommonJS modules (require/module.exports)
    Cjs,

    /// ECMAScript modules (import/export syntax)
    Esm,
}

impl OutputFormat {
    /// Every format a build emits, in dispatch order.
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Cjs, OutputFormat::Esm];

    /// Name passed to esbuild's `--format`.
    pub const fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Cjs => "cjs",
            OutputFormat::Esm => "esm",
        }
    }

    /// File extension of the artifact.
    ///
    /// Must stay unique per format: sibling jobs write into the same
    /// directory and rely on distinct file names.
    pub const fn extension(self) -> &'static str {
        match self {
            OutputFormat::Cjs => "cjs",
            OutputFormat::Esm => "mjs",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
