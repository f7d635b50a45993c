/// Parse and validate a package name passed to `--external`.
///
/// Accepts bare and scoped package names, optionally with a subpath or a
/// trailing `*` wildcard as esbuild does (`react`, `@scope/pkg`, `lodash/*`).
///
/// # Errors
///
/// Returns an error message if the name is empty or contains whitespace.
pub fn parse_external(s: &str) -> Result<String, String> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err("External package name cannot be empty".to_string());
    }

    if trimmed.chars().any(char::is_whitespace) {
        return Err(format!(
            "External package name cannot contain whitespace: '{}'",
            s
        ));
    }

    Ok(trimmed.to_string())
}

/// Parse the `--max-parallel` job limit.
///
/// # Errors
///
/// Returns an error message unless the value is an integer of at least 1.
pub fn parse_max_parallel(s: &str) -> Result<usize, String> {
    let value: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("Expected a positive integer, got '{}'", s))?;

    if value == 0 {
        return Err("Max parallel jobs must be at least 1".to_string());
    }

    Ok(value)
}
