//! Pre-flight checks run before either pipeline phase touches the network or
//! the filesystem.

use reqwest::Url;
use std::path::Path;
use tracing::debug;

use crate::config::Settings;
use crate::shared::error::RegistryError;
use crate::shared::Result;

/// Validates the settings a run depends on.
///
/// The data directory is created when missing. It must be a real directory,
/// never a symbolic link. The search URL must use http or https.
pub fn validate_environment(settings: &Settings) -> Result<()> {
    validate_data_dir(&settings.data_dir)?;
    validate_search_url(&settings.search_url)?;
    Ok(())
}

fn validate_data_dir(path: &Path) -> Result<()> {
    let invalid = |reason: String| RegistryError::InvalidDataDir {
        path: path.to_path_buf(),
        reason,
    };

    match std::fs::symlink_metadata(path) {
        Ok(metadata) => {
            if metadata.is_symlink() {
                return Err(invalid(
                    "Security: Data directory is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
                )
                .into());
            }
            if !metadata.is_dir() {
                return Err(invalid("Not a directory".to_string()).into());
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "creating data directory");
            std::fs::create_dir_all(path)
                .map_err(|e| invalid(format!("Failed to create directory: {}", e)))?;
        }
        Err(e) => {
            return Err(invalid(format!("Failed to read path metadata: {}", e)).into());
        }
    }

    Ok(())
}

fn validate_search_url(url: &str) -> Result<()> {
    let parsed = Url::parse(url).map_err(|e| RegistryError::Validation {
        message: format!("Invalid search URL '{}': {}", url, e),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(RegistryError::Validation {
            message: format!(
                "Invalid search URL '{}': scheme must be http or https, got '{}'",
                url, scheme
            ),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFile;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn settings(data_dir: PathBuf) -> Settings {
        Settings::from_config(ConfigFile::default(), Some(data_dir)).unwrap()
    }

    #[test]
    fn test_existing_directory_is_accepted() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_environment(&settings(temp_dir.path().to_path_buf())).is_ok());
    }

    #[test]
    fn test_missing_directory_is_created() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("nested").join("data");

        validate_environment(&settings(data_dir.clone())).unwrap();
        assert!(data_dir.is_dir());
    }

    #[test]
    fn test_file_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("data");
        fs::write(&file_path, "not a directory").unwrap();

        let err = validate_environment(&settings(file_path)).unwrap_err();
        assert!(err.to_string().contains("Not a directory"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real");
        fs::create_dir(&target).unwrap();
        let link = temp_dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = validate_environment(&settings(link)).unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
    }

    #[test]
    fn test_non_http_search_url_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut settings = settings(temp_dir.path().to_path_buf());

        settings.search_url = "ftp://registry.npmjs.org/-/v1/search".to_string();
        let err = validate_environment(&settings).unwrap_err();
        assert!(err.to_string().contains("scheme must be http or https"));

        settings.search_url = "not a url".to_string();
        assert!(validate_environment(&settings).is_err());

        settings.search_url = "http://localhost:4873/-/v1/search".to_string();
        assert!(validate_environment(&settings).is_ok());
    }
}
