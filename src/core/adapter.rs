use crate::core::auth;
use crate::core::drive::{DriveClient, FileMetadata};
use crate::core::{ConfigProvider, RemoteFile, SaveEvent, SaveEventHandler, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Uploads each saved image into the configured Drive folder.
///
/// Nothing is cached between events: every call parses the credentials,
/// builds its own authenticator and client, and so fetches a fresh token.
pub struct UploadAdapter<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> UploadAdapter<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub async fn upload(&self, event: &SaveEvent) -> Result<RemoteFile> {
        // 金鑰解析與開檔都在任何網路請求之前
        let key = auth::parse_key(self.config.credentials_json())?;
        let reader = self.storage.open_file(&event.filename).await?;

        let authenticator = auth::authenticator(key, auth::https_connector()?).await?;
        let drive = DriveClient::new(
            auth::https_connector()?,
            authenticator,
            self.config.api_base_url(),
        )
        .with_timeout(self.config.timeout_seconds().map(Duration::from_secs));

        let metadata = FileMetadata {
            name: event.display_name(),
            parents: vec![self.config.folder_id().to_string()],
        };
        tracing::debug!(
            "Uploading {} as '{}' into folder {}",
            event.filename,
            metadata.name,
            self.config.folder_id()
        );

        drive
            .create_file(&metadata, reader, self.config.mime_type())
            .await
    }
}

#[async_trait]
impl<S: Storage, C: ConfigProvider> SaveEventHandler for UploadAdapter<S, C> {
    async fn on_image_saved(&self, event: &SaveEvent) -> Result<Option<RemoteFile>> {
        match self.upload(event).await {
            Ok(file) => {
                tracing::info!(
                    "☁️ File ID: \"{}\".",
                    file.id.as_deref().unwrap_or("<none>")
                );
                Ok(Some(file))
            }
            Err(e) if !e.is_fatal() => {
                tracing::error!("❌ An error occurred: {}", e);
                tracing::debug!("💡 {}", e.recovery_suggestion());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
