use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The file '{file}' is not readable."));
    }
    Ok(path)
}

/// # Errors
///
/// Will return `Err` if the value does not look like an http(s) URL or
/// carries a fragment
pub fn check_base_url(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(format!(
            "The share base url '{value}' must start with http:// or https://."
        ));
    }
    if trimmed.contains('#') {
        return Err(format!("The share base url '{value}' must not contain a fragment."));
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(format!("The share base url '{value}' must not contain whitespace."));
    }
    Ok(trimmed.to_string())
}
