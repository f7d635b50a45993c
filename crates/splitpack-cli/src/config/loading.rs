use crate::cli::BuildArgs;
use crate::config::{EsTarget, SplitpackConfig};
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default config file name, looked up in the project root.
pub const CONFIG_FILE: &str = "splitpack.config.json";

/// Prefix of environment overrides (`SPLITPACK_OUT_DIR`, `SPLITPACK_MINIFY`, ...).
pub const ENV_PREFIX: &str = "SPLITPACK_";

/// Keys accepted from the environment, after snake_case to camelCase mapping.
const ENV_KEYS: &[&str] = &[
    "srcDir",
    "outDir",
    "bundle",
    "sourcemap",
    "target",
    "minify",
    "external",
    "maxParallel",
    "esbuild",
    "clean",
];

/// Values given on the command line. Unset options are skipped so they
/// never shadow lower layers.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    src_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    out_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bundle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sourcemap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<EsTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    minify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    external: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_parallel: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    esbuild: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    clean: Option<bool>,
}

impl From<&BuildArgs> for CliOverrides {
    fn from(args: &BuildArgs) -> Self {
        Self {
            src_dir: args.src_dir.clone(),
            out_dir: args.out_dir.clone(),
            bundle: args.no_bundle.then_some(false),
            sourcemap: args.no_sourcemap.then_some(false),
            target: args.target,
            minify: args.minify.then_some(true),
            external: (!args.external.is_empty()).then(|| args.external.clone()),
            max_parallel: args.max_parallel,
            esbuild: args.esbuild.clone(),
            clean: args.clean.then_some(true),
        }
    }
}

impl SplitpackConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    ///
    /// `root` is the project root: the default config file is looked up
    /// there and a relative `--config` path is resolved against it.
    pub fn load(args: &BuildArgs, root: &Path) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = config_file(args.config.as_deref(), root)? {
            debug!(path = %path.display(), "loading config file");
            let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
            figment = figment.merge(Json::string(&contents));
        }

        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .map(|key| camel_case(key.as_str()).into())
                .only(ENV_KEYS)
                .lowercase(false),
        );

        figment = figment.merge(Serialized::defaults(CliOverrides::from(args)));

        let config: Self = figment.extract().map_err(|e| ConfigError::InvalidValue {
            field: "configuration".to_string(),
            value: e.to_string(),
            hint: format!("Check {} syntax, field types, and {}* variables", CONFIG_FILE, ENV_PREFIX),
        })?;

        config.validate()?;
        Ok(config)
    }
}

/// Resolve which config file to read, if any.
///
/// An explicit path must exist; the default file is optional.
fn config_file(explicit: Option<&Path>, root: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            let path = root.join(path);
            if path.is_file() {
                Ok(Some(path))
            } else {
                Err(ConfigError::NotFound(path).into())
            }
        }
        None => {
            let default_path = root.join(CONFIG_FILE);
            Ok(default_path.is_file().then_some(default_path))
        }
    }
}

/// `out_dir` -> `outDir`
pub(crate) fn camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper = false;

    for c in key.chars() {
        if c == '_' {
            upper = !out.is_empty();
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}
