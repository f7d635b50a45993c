use clap::Args;
use std::path::PathBuf;

use crate::cli::enums::EsTarget;
use crate::cli::validation::{parse_external, parse_max_parallel};

/// Build options shared by every variant.
///
/// Every option is an override: unset options fall back to the environment,
/// then `splitpack.config.json`, then the built-in defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Path to the configuration file
    ///
    /// Defaults to `splitpack.config.json` in the project root. A missing
    /// default file is not an error; a missing explicit file is.
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project root directory
    ///
    /// Relative paths in the configuration resolve against this directory.
    /// Defaults to the current working directory.
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Output directory for bundled files (default: dist)
    ///
    /// Artifacts are written to `<DIR>/<variant>/index.{cjs,mjs}`.
    #[arg(short = 'd', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Directory holding one source folder per variant
    ///
    /// The entry point is `<DIR>/<variant>/index.ts`. Defaults to the
    /// project root.
    #[arg(long, value_name = "DIR")]
    pub src_dir: Option<PathBuf>,

    /// ECMAScript target version (default: es2015)
    #[arg(short = 't', long, value_enum)]
    pub target: Option<EsTarget>,

    /// Do not emit external source maps
    #[arg(long)]
    pub no_sourcemap: bool,

    /// Do not inline dependencies into the output
    #[arg(long)]
    pub no_bundle: bool,

    /// Minify the output
    #[arg(short = 'm', long)]
    pub minify: bool,

    /// Package to leave out of the bundle (repeatable)
    ///
    /// Examples:
    ///   splitpack node --external react --external react-dom
    #[arg(short = 'e', long, value_name = "PACKAGE", value_parser = parse_external)]
    pub external: Vec<String>,

    /// Maximum number of formats built at once (default: all)
    #[arg(long, value_name = "N", value_parser = parse_max_parallel)]
    pub max_parallel: Option<usize>,

    /// Path to the esbuild executable
    ///
    /// Defaults to `node_modules/.bin/esbuild` under the project root, then
    /// `esbuild` on the PATH.
    #[arg(long, value_name = "PATH")]
    pub esbuild: Option<PathBuf>,

    /// Remove the variant's output directory before building
    ///
    /// Only `<outDir>/<variant>` is removed; other variants are left intact.
    #[arg(long)]
    pub clean: bool,

    /// Validate and print the job plan as JSON without building
    #[arg(long)]
    pub dry_run: bool,

    /// Print the JSON schema of splitpack.config.json and exit
    #[arg(long, exclusive = true)]
    pub print_schema: bool,
}
