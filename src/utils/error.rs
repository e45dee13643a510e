use thiserror::Error;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Authentication failed: {message}")]
    AuthFailed { message: String },

    #[error("Remote API error{}: {message}", status_suffix(.status))]
    RemoteError { status: Option<u16>, message: String },

    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigError { field: String, message: String },
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" ({})", s)).unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    Remote,
    LocalFile,
    Configuration,
}

impl UploadError {
    pub fn auth(message: impl Into<String>) -> Self {
        UploadError::AuthFailed {
            message: message.into(),
        }
    }

    pub fn remote(status: Option<u16>, message: impl Into<String>) -> Self {
        UploadError::RemoteError {
            status,
            message: message.into(),
        }
    }

    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        UploadError::ConfigError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            UploadError::AuthFailed { .. } => ErrorCategory::Authentication,
            UploadError::RemoteError { .. } => ErrorCategory::Remote,
            UploadError::FileError(_) => ErrorCategory::LocalFile,
            UploadError::ConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 遠端 API 錯誤會被吞掉，其餘錯誤中斷當前事件
    pub fn is_fatal(&self) -> bool {
        !matches!(self, UploadError::RemoteError { .. })
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            UploadError::AuthFailed { .. } => {
                "Check that the credentials are a complete service-account JSON key and that the account is enabled"
            }
            UploadError::RemoteError { status: Some(404), .. } => {
                "Check the folder id and share the folder with the service account's client_email"
            }
            UploadError::RemoteError { status: Some(403), .. } => {
                "The service account lacks permission or quota for the destination folder"
            }
            UploadError::RemoteError { .. } => "The upload was skipped; save the image again to retry",
            UploadError::FileError(_) => "Make sure the saved image still exists and is readable",
            UploadError::ConfigError { .. } => "Fix the configuration value and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, UploadError>;
