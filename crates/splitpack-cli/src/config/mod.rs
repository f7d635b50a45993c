//! Configuration system for splitpack with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and config files.
//! Priority: CLI > Environment > File > Defaults

mod conversions;
mod defaults;
mod loading;
mod tests;
mod validation;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use crate::cli::EsTarget;
pub use defaults::*;
pub use loading::{CONFIG_FILE, ENV_PREFIX};

/// splitpack configuration - loaded from splitpack.config.json, the
/// environment, and CLI args.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SplitpackConfig {
    /// Directory holding one source folder per variant (default: project root)
    #[serde(default)]
    pub src_dir: PathBuf,

    /// Output directory
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Bundle dependencies into output
    #[serde(default = "default_bundle")]
    pub bundle: bool,

    /// Emit an external source map next to each artifact
    #[serde(default = "default_sourcemap")]
    pub sourcemap: bool,

    /// JavaScript target version
    #[serde(default = "default_target")]
    pub target: EsTarget,

    /// Enable minification
    #[serde(default)]
    pub minify: bool,

    /// External packages to exclude from bundle
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external: Vec<String>,

    /// Maximum number of formats built at once (default: all)
    #[schemars(range(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_parallel: Option<usize>,

    /// Path to the esbuild executable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub esbuild: Option<PathBuf>,

    /// Remove the variant's output directory before building
    #[serde(default)]
    pub clean: bool,
}

impl Default for SplitpackConfig {
    fn default() -> Self {
        Self {
            src_dir: PathBuf::new(),
            out_dir: default_out_dir(),
            bundle: default_bundle(),
            sourcemap: default_sourcemap(),
            target: default_target(),
            minify: false,
            external: Vec::new(),
            max_parallel: None,
            esbuild: None,
            clean: false,
        }
    }
}

impl SplitpackConfig {
    /// Generate JSON Schema for splitpack.config.json.
    pub fn json_schema() -> serde_json::Value {
        let schema = schemars::schema_for!(SplitpackConfig);
        serde_json::to_value(schema).expect("Schema serialization should never fail")
    }
}
