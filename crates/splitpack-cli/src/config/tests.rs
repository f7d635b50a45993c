#[cfg(test)]
mod tests {
    use crate::cli::BuildArgs;
    use crate::config::loading::camel_case;
    use crate::config::*;
    use crate::error::{CliError, ConfigError};
    use splitpack::{BaseConfig, Variant};
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_serialization() {
        let config = SplitpackConfig {
            external: vec!["react".to_string()],
            max_parallel: Some(1),
            ..SplitpackConfig::default()
        };

        let json_val = serde_json::to_value(&config).unwrap();
        assert_eq!(json_val["outDir"], "dist");
        assert_eq!(json_val["target"], "es2015");
        assert_eq!(json_val["maxParallel"], 1);
        assert!(json_val.get("out_dir").is_none());

        // skip_serializing_if
        let minimal = serde_json::to_value(SplitpackConfig::default()).unwrap();
        assert!(minimal.get("external").is_none());
        assert!(minimal.get("maxParallel").is_none());
        assert!(minimal.get("esbuild").is_none());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: SplitpackConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SplitpackConfig::default());
        assert!(config.bundle);
        assert!(config.sourcemap);
        assert_eq!(config.target, EsTarget::Es2015);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<SplitpackConfig, _> = serde_json::from_str(r#"{ "format": "iife" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validation() {
        assert!(SplitpackConfig::default().validate().is_ok());

        assert!(
            SplitpackConfig {
                out_dir: PathBuf::new(),
                ..SplitpackConfig::default()
            }
            .validate()
            .is_err()
        );

        assert!(
            SplitpackConfig {
                max_parallel: Some(0),
                ..SplitpackConfig::default()
            }
            .validate()
            .is_err()
        );

        assert!(
            SplitpackConfig {
                external: vec!["react".to_string(), " ".to_string()],
                ..SplitpackConfig::default()
            }
            .validate()
            .is_err()
        );

        assert!(
            SplitpackConfig {
                esbuild: Some(PathBuf::new()),
                ..SplitpackConfig::default()
            }
            .validate()
            .is_err()
        );
    }

    #[test]
    fn test_conversions() {
        assert_eq!(
            splitpack::EsTarget::from(EsTarget::Es2020),
            splitpack::EsTarget::Es2020
        );
        assert_eq!(
            splitpack::EsTarget::from(EsTarget::Esnext),
            splitpack::EsTarget::Esnext
        );

        let config = SplitpackConfig {
            src_dir: PathBuf::from("src"),
            out_dir: PathBuf::from("build"),
            sourcemap: false,
            minify: true,
            external: vec!["react".to_string()],
            ..SplitpackConfig::default()
        };
        let base = BaseConfig::from(&config);

        assert_eq!(
            base,
            BaseConfig::new()
                .src_dir("src")
                .out_dir("build")
                .sourcemap(false)
                .minify(true)
                .external(["react"])
        );
        assert_eq!(
            base.entry_for(Variant::Node),
            PathBuf::from("src/node/index.ts")
        );
    }

    #[test]
    fn test_default_config_matches_core_default() {
        assert_eq!(
            BaseConfig::from(&SplitpackConfig::default()),
            BaseConfig::default()
        );
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("out_dir"), "outDir");
        assert_eq!(camel_case("OUT_DIR"), "outDir");
        assert_eq!(camel_case("max_parallel"), "maxParallel");
        assert_eq!(camel_case("minify"), "minify");
    }

    #[test]
    fn test_schema() {
        let schema = SplitpackConfig::json_schema();
        assert!(schema.is_object());
        assert!(schema["properties"].get("outDir").is_some());
        assert!(schema["properties"].get("maxParallel").is_some());
    }

    #[test]
    #[serial_test::serial]
    fn test_load_without_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = SplitpackConfig::load(&BuildArgs::default(), temp.path()).unwrap();
        assert_eq!(config, SplitpackConfig::default());
    }

    #[test]
    #[serial_test::serial]
    fn test_load_missing_explicit_file_fails() {
        let temp = TempDir::new().unwrap();
        let args = BuildArgs {
            config: Some(PathBuf::from("custom.json")),
            ..BuildArgs::default()
        };

        let err = SplitpackConfig::load(&args, temp.path()).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    #[serial_test::serial]
    fn test_cli_flags_override_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILE),
            r#"{ "outDir": "lib", "minify": false, "sourcemap": true, "target": "es2018" }"#,
        )
        .unwrap();

        let args = BuildArgs {
            minify: true,
            no_sourcemap: true,
            ..BuildArgs::default()
        };
        let config = SplitpackConfig::load(&args, temp.path()).unwrap();

        // From file
        assert_eq!(config.out_dir, PathBuf::from("lib"));
        assert_eq!(config.target, EsTarget::Es2018);
        // From CLI
        assert!(config.minify);
        assert!(!config.sourcemap);
    }

    #[test]
    #[serial_test::serial]
    fn test_unreadable_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE), [0xff, 0xfe, 0x7b]).unwrap();

        let err = SplitpackConfig::load(&BuildArgs::default(), temp.path()).unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::Io(_))));
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    #[serial_test::serial]
    fn test_invalid_file_value_fails() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE), r#"{ "maxParallel": 0 }"#).unwrap();

        let err = SplitpackConfig::load(&BuildArgs::default(), temp.path()).unwrap_err();
        assert!(err.to_string().contains("maxParallel"));
    }
}
