use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - manifest filename is non-empty
/// - manifest filename is a bare file name, not a path
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let manifest = &config.rename.manifest_filename;

    if manifest.is_empty() {
        return Err(ConfigError::ValidationError(
            "rename.manifest_filename cannot be empty".to_string(),
        ));
    }

    if manifest.contains('/') || manifest.contains('\\') {
        return Err(ConfigError::ValidationError(
            "rename.manifest_filename must not contain path separators".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenameConfig;

    #[test]
    fn test_validate_valid_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_empty_manifest_filename() {
        let config = Config {
            rename: RenameConfig {
                manifest_filename: String::new(),
                ..RenameConfig::default()
            },
        };
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_manifest_filename_with_path_separator() {
        let config = Config {
            rename: RenameConfig {
                manifest_filename: "../names.txt".to_string(),
                ..RenameConfig::default()
            },
        };
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
