use super::schema::Config;

/// Validate a resolved configuration before any file is read.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if !config.exports_dir.is_dir() {
        errors.push(format!(
            "exports_dir: directory not found '{}'",
            config.exports_dir.display()
        ));
    }

    for (field, name) in [
        ("averages_file", &config.averages_file),
        ("singles_file", &config.singles_file),
    ] {
        if name.trim().is_empty() {
            errors.push(format!("{}: must not be empty", field));
        }
    }

    if config.output.as_os_str().is_empty() {
        errors.push("output: must not be empty".to_string());
    } else if config.output.is_dir() {
        errors.push(format!(
            "output: '{}' is a directory, expected a file path",
            config.output.display()
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
