//! `--print-schema`: print the JSON schema of `splitpack.config.json`.

use crate::config::SplitpackConfig;
use crate::error::Result;

/// Print the configuration schema as pretty JSON on stdout.
pub fn execute() -> Result<()> {
    let schema = serde_json::to_string_pretty(&SplitpackConfig::json_schema())?;
    println!("{}", schema);
    Ok(())
}
