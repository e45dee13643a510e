use crate::domain::model::UploadConfig;
use crate::utils::error::{Result, UploadError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(UploadError::config(field_name, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(UploadError::config(
                field_name,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(UploadError::config(
            field_name,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(UploadError::config(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(UploadError::config(
            field_name,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_mime_type(field_name: &str, value: &str) -> Result<()> {
    match value.split_once('/') {
        Some((kind, sub)) if !kind.trim().is_empty() && !sub.trim().is_empty() => Ok(()),
        _ => Err(UploadError::config(
            field_name,
            format!("'{}' is not a type/subtype MIME string", value),
        )),
    }
}

/// 只做結構檢查；金鑰本身在每次上傳時才解析
impl Validate for UploadConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("folder_id", &self.folder_id)?;
        validate_non_empty_string("credentials_json", &self.credentials_json)?;
        validate_url("api_base_url", &self.api_base_url)?;
        validate_mime_type("mime_type", &self.mime_type)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout as usize, 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api_base_url", "https://www.googleapis.com").is_ok());
        assert!(validate_url("api_base_url", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("api_base_url", "").is_err());
        assert!(validate_url("api_base_url", "invalid-url").is_err());
        assert!(validate_url("api_base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_mime_type() {
        assert!(validate_mime_type("mime_type", "image/jpeg").is_ok());
        assert!(validate_mime_type("mime_type", "jpeg").is_err());
        assert!(validate_mime_type("mime_type", "image/").is_err());
    }

    #[test]
    fn test_upload_config_validation() {
        assert!(UploadConfig::new("F1", "{}").validate().is_ok());

        let err = UploadConfig::new("  ", "{}").validate().unwrap_err();
        assert!(err.to_string().contains("folder_id"));

        let err = UploadConfig::new("F1", "").validate().unwrap_err();
        assert!(err.to_string().contains("credentials_json"));

        let err = UploadConfig::new("F1", "{}")
            .with_api_base_url("not a url")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("api_base_url"));
    }
}
