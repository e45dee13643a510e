pub mod toml_config;

use crate::core::{ConfigProvider, UploadConfig};
#[cfg(feature = "cli")]
use crate::utils::error::{Result, UploadError};
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;

impl ConfigProvider for UploadConfig {
    fn folder_id(&self) -> &str {
        &self.folder_id
    }

    fn credentials_json(&self) -> &str {
        &self.credentials_json
    }

    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "drive-upload")]
#[command(about = "Upload saved images to a Google Drive folder with a service account")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Destination folder id (overrides the config file)
    #[arg(long)]
    pub folder_id: Option<String>,

    /// Service-account JSON key file (overrides the config file)
    #[arg(long)]
    pub credentials_file: Option<String>,

    /// Drive API base URL (overrides the config file)
    #[arg(long)]
    pub api_base_url: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit one JSON object per log line
    #[arg(long)]
    pub log_json: bool,

    /// Saved images, one upload each; read from stdin when empty
    pub files: Vec<String>,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 設定檔為底，命令列參數覆蓋
    pub fn resolve(&self) -> Result<UploadConfig> {
        let mut config = match &self.config {
            Some(path) => Some(toml_config::TomlConfig::from_file(path)?),
            None => None,
        };

        if let Some(toml) = config.as_mut() {
            if let Some(folder_id) = &self.folder_id {
                toml.drive.folder_id = folder_id.clone();
            }
            if let Some(file) = &self.credentials_file {
                toml.drive.credentials_json = None;
                toml.drive.credentials_file = Some(file.clone());
            }
            if let Some(url) = &self.api_base_url {
                toml.drive.api_base_url = Some(url.clone());
            }
        }

        let upload = match config {
            Some(toml) => toml.into_upload_config()?,
            None => {
                let folder_id = self.folder_id.clone().ok_or_else(|| {
                    UploadError::config("folder_id", "--folder-id or --config is required")
                })?;
                let file = self.credentials_file.as_deref().ok_or_else(|| {
                    UploadError::config(
                        "credentials_file",
                        "--credentials-file or --config is required",
                    )
                })?;
                let mut upload = UploadConfig::new(
                    folder_id,
                    toml_config::read_credentials_file(file)?,
                );
                if let Some(url) = &self.api_base_url {
                    upload.api_base_url = url.clone();
                }
                upload
            }
        };

        upload.validate()?;
        Ok(upload)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_flags_only() {
        let dir = TempDir::new().unwrap();
        let key = dir.path().join("sa.json");
        std::fs::write(&key, "{\"client_email\":\"a@b.c\"}").unwrap();

        let cli = CliConfig::parse_from([
            "drive-upload",
            "--folder-id",
            "F1",
            "--credentials-file",
            key.to_str().unwrap(),
            "out/00001.png",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.folder_id, "F1");
        assert_eq!(config.credentials_json, "{\"client_email\":\"a@b.c\"}");
        assert_eq!(cli.files, vec!["out/00001.png".to_string()]);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("drive-upload.toml");
        std::fs::write(
            &config_path,
            "[drive]\nfolder_id = \"from-file\"\ncredentials_json = \"{}\"\n",
        )
        .unwrap();

        let cli = CliConfig::parse_from([
            "drive-upload",
            "--config",
            config_path.to_str().unwrap(),
            "--folder-id",
            "from-flag",
            "--api-base-url",
            "http://127.0.0.1:9",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.folder_id, "from-flag");
        assert_eq!(config.api_base_url, "http://127.0.0.1:9");
        assert_eq!(config.credentials_json, "{}");
    }

    #[test]
    fn test_log_json_flag() {
        let cli = CliConfig::parse_from(["drive-upload", "--log-json", "a.png"]);
        assert!(cli.log_json);
        assert!(!cli.verbose);

        let cli = CliConfig::parse_from(["drive-upload", "a.png"]);
        assert!(!cli.log_json);
    }

    #[test]
    fn test_missing_config_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.toml");
        let cli = CliConfig::parse_from(["drive-upload", "--config", missing.to_str().unwrap()]);

        let err = cli.resolve().unwrap_err();
        assert!(matches!(err, UploadError::ConfigError { .. }));
    }

    #[test]
    fn test_missing_folder_id() {
        let cli = CliConfig::parse_from(["drive-upload", "--credentials-file", "sa.json"]);
        let err = cli.resolve().unwrap_err();
        assert!(matches!(err, UploadError::ConfigError { .. }));
    }
}
