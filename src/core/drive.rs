//! Drive v3 "create file" through the generated `google-drive3` client.
//!
//! The resumable protocol (session, chunking, 308 handling) lives in the
//! client library; this module only shapes the request and maps errors.

use crate::core::auth::{Connector, DRIVE_SCOPES};
use crate::domain::model::RemoteFile;
use crate::utils::error::{Result, UploadError};
use google_drive3 as drive3;
use std::io::{Read, Seek};
use std::time::Duration;

use drive3::yup_oauth2::authenticator::Authenticator;
use drive3::DriveHub;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub name: String,
    pub parents: Vec<String>,
}

impl From<&FileMetadata> for drive3::api::File {
    fn from(metadata: &FileMetadata) -> Self {
        drive3::api::File {
            name: Some(metadata.name.clone()),
            parents: Some(metadata.parents.clone()),
            ..Default::default()
        }
    }
}

pub struct DriveClient {
    hub: DriveHub<Connector>,
    timeout: Option<Duration>,
}

impl DriveClient {
    /// `base_url` is the API host, e.g. `https://www.googleapis.com`.
    pub fn new(connector: Connector, auth: Authenticator<Connector>, base_url: &str) -> Self {
        let client = drive3::hyper_util::client::legacy::Client::builder(
            drive3::hyper_util::rt::TokioExecutor::new(),
        )
        .build(connector);

        let mut hub = DriveHub::new(client, auth);
        let base = base_url.trim_end_matches('/');
        hub.root_url(format!("{}/", base));
        hub.base_url(format!("{}/drive/v3/", base));

        Self { hub, timeout: None }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// 建立檔案並以 resumable 方式上傳內容，回傳遠端 id
    pub async fn create_file<R>(
        &self,
        metadata: &FileMetadata,
        reader: R,
        mime_type: &str,
    ) -> Result<RemoteFile>
    where
        R: Read + Seek + Send,
    {
        let mime: mime::Mime = mime_type
            .parse()
            .map_err(|_| UploadError::config("mime_type", format!("'{}' is not a MIME type", mime_type)))?;

        let call = self
            .hub
            .files()
            .create(metadata.into())
            .supports_all_drives(true)
            .param("fields", "id")
            .add_scopes(DRIVE_SCOPES)
            .upload_resumable(reader, mime);

        let outcome = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call).await.map_err(|_| {
                UploadError::remote(None, format!("upload timed out after {}s", limit.as_secs()))
            })?,
            None => call.await,
        };

        let (_response, created) = outcome.map_err(map_drive_error)?;
        Ok(RemoteFile { id: created.id })
    }
}

/// Drive 錯誤格式: {"error": {"code": 404, "message": "File not found: F1."}}
fn map_drive_error(err: drive3::Error) -> UploadError {
    match err {
        drive3::Error::MissingToken(e) => UploadError::auth(e.to_string()),
        drive3::Error::Io(e) => UploadError::FileError(e),
        drive3::Error::BadRequest(body) => {
            let error = body.get("error");
            let status = error
                .and_then(|e| e.get("code"))
                .and_then(|c| c.as_u64())
                .and_then(|c| u16::try_from(c).ok());
            let message = error
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| body.to_string());
            UploadError::remote(status, message)
        }
        drive3::Error::Failure(response) => {
            let status = response.status();
            UploadError::remote(
                Some(status.as_u16()),
                status.canonical_reason().unwrap_or("request failed").to_string(),
            )
        }
        other => UploadError::remote(None, other.to_string()),
    }
}
