use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com";
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// Operator-supplied settings, fixed for the whole run.
#[derive(Clone)]
pub struct UploadConfig {
    pub folder_id: String,
    /// Complete service-account JSON key. Secret.
    pub credentials_json: String,
    pub api_base_url: String,
    pub mime_type: String,
    pub timeout_seconds: Option<u64>,
}

impl UploadConfig {
    pub fn new(folder_id: impl Into<String>, credentials_json: impl Into<String>) -> Self {
        Self {
            folder_id: folder_id.into(),
            credentials_json: credentials_json.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            mime_type: DEFAULT_MIME_TYPE.to_string(),
            timeout_seconds: None,
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }
}

impl fmt::Debug for UploadConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadConfig")
            .field("folder_id", &self.folder_id)
            .field("credentials_json", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("mime_type", &self.mime_type)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

/// Fired by the host once per image, after the file is on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveEvent {
    pub filename: String,
}

impl SaveEvent {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
        }
    }

    /// 遠端檔名只取最後一段路徑
    pub fn display_name(&self) -> String {
        Path::new(&self.filename)
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| self.filename.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteFile {
    pub id: Option<String>,
}
