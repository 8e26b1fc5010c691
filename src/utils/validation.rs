use crate::utils::error::{Result, UnifierError};
use std::collections::HashSet;
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let as_text = path.to_string_lossy();

    if as_text.is_empty() {
        return Err(UnifierError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: as_text.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if as_text.contains('\0') {
        return Err(UnifierError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: as_text.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extensions(
    field_name: &str,
    files: &[&Path],
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    for file in files {
        match file.extension().and_then(|ext| ext.to_str()) {
            Some(extension) if allowed_set.contains(extension.to_ascii_lowercase().as_str()) => {}
            Some(extension) => {
                return Err(UnifierError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.display().to_string(),
                    reason: format!(
                        "Unsupported file extension: {}. Allowed extensions: {}",
                        extension,
                        allowed_extensions.join(", ")
                    ),
                });
            }
            None => {
                return Err(UnifierError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.display().to_string(),
                    reason: "File has no extension or invalid filename".to_string(),
                });
            }
        }
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(UnifierError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output", Path::new("out.xlsx")).is_ok());
        assert!(validate_path("output", Path::new("")).is_err());
        assert!(validate_path("output", Path::new("bad\0name.xlsx")).is_err());
    }

    #[test]
    fn test_validate_file_extensions() {
        let good = Path::new("result.XLSX");
        assert!(validate_file_extensions("output", &[good], &["xlsx"]).is_ok());

        let wrong = Path::new("result.csv");
        assert!(validate_file_extensions("output", &[wrong], &["xlsx"]).is_err());

        let missing = Path::new("result");
        assert!(validate_file_extensions("output", &[missing], &["xlsx"]).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("target", "CEP Unificado").is_ok());
        assert!(validate_non_empty_string("target", "   ").is_err());
    }
}
