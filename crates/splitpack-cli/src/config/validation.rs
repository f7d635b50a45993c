use crate::config::SplitpackConfig;
use crate::error::{ConfigError, Result};

impl SplitpackConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.out_dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "outDir".to_string(),
                hint: "Set an output directory, e.g. \"dist\"".to_string(),
            }
            .into());
        }

        if self.max_parallel == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "maxParallel".to_string(),
                value: "0".to_string(),
                hint: "At least one job must be allowed to run".to_string(),
            }
            .into());
        }

        if let Some(pkg) = self.external.iter().find(|p| p.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "external".to_string(),
                value: format!("{:?}", pkg),
                hint: "External entries must be package names".to_string(),
            }
            .into());
        }

        if let Some(esbuild) = &self.esbuild {
            if esbuild.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "esbuild".to_string(),
                    value: "\"\"".to_string(),
                    hint: "Remove the field to look esbuild up automatically".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}
