//! Integration tests for configuration loading.
//!
//! Tests verify multi-source configuration loading with priority ordering:
//! CLI > Environment > File > Defaults

use serial_test::serial;
use splitpack_cli::cli::{BuildArgs, EsTarget};
use splitpack_cli::config::{CONFIG_FILE, SplitpackConfig};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Clears every `SPLITPACK_*` variable a test sets, even on panic.
struct EnvGuard(&'static [&'static str]);

impl EnvGuard {
    fn set(vars: &'static [(&'static str, &'static str)], keys: &'static [&'static str]) -> Self {
        for (key, value) in vars {
            unsafe {
                std::env::set_var(key, value);
            }
        }
        Self(keys)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in self.0 {
            unsafe {
                std::env::remove_var(key);
            }
        }
    }
}

fn write_config(dir: &std::path::Path, json: &str) {
    fs::write(dir.join(CONFIG_FILE), json).unwrap();
}

#[test]
#[serial]
fn test_config_file_is_optional() {
    let temp = TempDir::new().unwrap();

    let config = SplitpackConfig::load(&BuildArgs::default(), temp.path()).unwrap();
    assert_eq!(config, SplitpackConfig::default());
}

#[test]
#[serial]
fn test_config_file_values() {
    let temp = TempDir::new().unwrap();
    write_config(
        temp.path(),
        r#"{
            "srcDir": "src",
            "outDir": "lib",
            "bundle": false,
            "external": ["react"],
            "maxParallel": 1,
            "clean": true
        }"#,
    );

    let config = SplitpackConfig::load(&BuildArgs::default(), temp.path()).unwrap();
    assert_eq!(config.src_dir, PathBuf::from("src"));
    assert_eq!(config.out_dir, PathBuf::from("lib"));
    assert!(!config.bundle);
    assert_eq!(config.external, vec!["react"]);
    assert_eq!(config.max_parallel, Some(1));
    assert!(config.clean);
    // Untouched fields keep their defaults
    assert!(config.sourcemap);
    assert_eq!(config.target, EsTarget::Es2015);
}

#[test]
#[serial]
fn test_explicit_config_path() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("configs")).unwrap();
    fs::write(
        temp.path().join("configs/release.json"),
        r#"{ "minify": true }"#,
    )
    .unwrap();

    let args = BuildArgs {
        config: Some(PathBuf::from("configs/release.json")),
        ..BuildArgs::default()
    };
    let config = SplitpackConfig::load(&args, temp.path()).unwrap();
    assert!(config.minify);
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), r#"{ "outDir": "file-dist", "minify": false }"#);

    let _env = EnvGuard::set(
        &[("SPLITPACK_OUT_DIR", "env-dist"), ("SPLITPACK_MINIFY", "true")],
        &["SPLITPACK_OUT_DIR", "SPLITPACK_MINIFY"],
    );

    let config = SplitpackConfig::load(&BuildArgs::default(), temp.path()).unwrap();
    assert_eq!(config.out_dir, PathBuf::from("env-dist"));
    assert!(config.minify);
}

#[test]
#[serial]
fn test_cli_overrides_env() {
    let temp = TempDir::new().unwrap();

    let _env = EnvGuard::set(
        &[("SPLITPACK_OUT_DIR", "env-dist"), ("SPLITPACK_MAX_PARALLEL", "4")],
        &["SPLITPACK_OUT_DIR", "SPLITPACK_MAX_PARALLEL"],
    );

    let args = BuildArgs {
        out_dir: Some(PathBuf::from("cli-dist")),
        ..BuildArgs::default()
    };
    let config = SplitpackConfig::load(&args, temp.path()).unwrap();
    assert_eq!(config.out_dir, PathBuf::from("cli-dist"));
    assert_eq!(config.max_parallel, Some(4));
}

#[test]
#[serial]
fn test_unrelated_env_vars_are_ignored() {
    let temp = TempDir::new().unwrap();

    let _env = EnvGuard::set(&[("SPLITPACK_LOG", "debug")], &["SPLITPACK_LOG"]);

    let config = SplitpackConfig::load(&BuildArgs::default(), temp.path()).unwrap();
    assert_eq!(config, SplitpackConfig::default());
}

#[test]
#[serial]
fn test_unset_cli_flags_keep_file_values() {
    let temp = TempDir::new().unwrap();
    write_config(
        temp.path(),
        r#"{ "sourcemap": false, "minify": true, "external": ["vue"] }"#,
    );

    // Absent flags must not reset the file's values to defaults
    let config = SplitpackConfig::load(&BuildArgs::default(), temp.path()).unwrap();
    assert!(!config.sourcemap);
    assert!(config.minify);
    assert_eq!(config.external, vec!["vue"]);
}

#[test]
#[serial]
fn test_invalid_env_value_fails() {
    let temp = TempDir::new().unwrap();

    let _env = EnvGuard::set(&[("SPLITPACK_TARGET", "es5")], &["SPLITPACK_TARGET"]);

    let err = SplitpackConfig::load(&BuildArgs::default(), temp.path()).unwrap_err();
    assert!(err.to_string().contains("Configuration error"));
}
