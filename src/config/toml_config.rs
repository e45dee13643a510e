use crate::domain::model::{UploadConfig, DEFAULT_API_BASE_URL, DEFAULT_MIME_TYPE};
use crate::utils::error::{Result, UploadError};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub drive: DriveSection,
    pub upload: Option<UploadSection>,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct DriveSection {
    pub folder_id: String,
    /// Inline key document. Takes precedence over `credentials_file`.
    pub credentials_json: Option<String>,
    pub credentials_file: Option<String>,
    pub api_base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadSection {
    pub mime_type: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl std::fmt::Debug for DriveSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriveSection")
            .field("folder_id", &self.folder_id)
            .field(
                "credentials_json",
                &self.credentials_json.as_ref().map(|_| "<redacted>"),
            )
            .field("credentials_file", &self.credentials_file)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl std::fmt::Debug for TomlConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TomlConfig")
            .field("drive", &self.drive)
            .field("upload", &self.upload)
            .finish()
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            UploadError::config(
                "config",
                format!(
                    "cannot read config file '{}': {}",
                    path.as_ref().display(),
                    e
                ),
            )
        })?;
        let mut config = Self::from_toml_str(&content)?;

        // 相對的金鑰路徑以設定檔所在目錄為準
        if let (Some(file), Some(dir)) = (
            config.drive.credentials_file.as_ref(),
            path.as_ref().parent(),
        ) {
            let candidate = PathBuf::from(file);
            if candidate.is_relative() {
                config.drive.credentials_file = Some(dir.join(candidate).to_string_lossy().into_owned());
            }
        }

        Ok(config)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content)
            .map_err(|e| UploadError::config("toml_parsing", format!("TOML parsing error: {}", e)))?;
        let mut value = toml::Value::Table(table);

        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| UploadError::config("toml_parsing", e.to_string()))?;
        substitute_env_vars(&mut value, &re);

        value
            .try_into()
            .map_err(|e| UploadError::config("toml_parsing", format!("TOML parsing error: {}", e)))
    }

    pub fn into_upload_config(self) -> Result<UploadConfig> {
        let credentials_json = match (self.drive.credentials_json, self.drive.credentials_file) {
            (Some(inline), _) => inline,
            (None, Some(file)) => read_credentials_file(&file)?,
            (None, None) => {
                return Err(UploadError::config(
                    "drive.credentials_file",
                    "either credentials_json or credentials_file must be set",
                ))
            }
        };

        let upload = self.upload.unwrap_or_default();
        let config = UploadConfig {
            folder_id: self.drive.folder_id,
            credentials_json,
            api_base_url: self
                .drive
                .api_base_url
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            mime_type: upload
                .mime_type
                .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string()),
            timeout_seconds: upload.timeout_seconds,
        };

        config.validate()?;
        Ok(config)
    }
}

/// 替換環境變數 (例如 ${DRIVE_FOLDER_ID})，未設定的保持原樣
///
/// 解析後才逐一替換字串值，變數內容含引號或換行也不會破壞 TOML 結構
fn substitute_env_vars(value: &mut toml::Value, re: &Regex) {
    match value {
        toml::Value::String(text) => {
            if re.is_match(text) {
                *text = re
                    .replace_all(text, |caps: &regex::Captures| {
                        let var_name = &caps[1];
                        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
                    })
                    .into_owned();
            }
        }
        toml::Value::Array(items) => {
            for item in items {
                substitute_env_vars(item, re);
            }
        }
        toml::Value::Table(table) => {
            for (_, item) in table.iter_mut() {
                substitute_env_vars(item, re);
            }
        }
        _ => {}
    }
}

pub fn read_credentials_file(path: &str) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        UploadError::config(
            "credentials_file",
            format!("cannot read credentials file '{}': {}", path, e),
        )
    })
}
