use crate::domain::model::{RemoteFile, SaveEvent};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where saved images are read from. The reader is handed to the upload
/// as-is, so a large image is streamed rather than buffered.
pub trait Storage: Send + Sync {
    type Reader: std::io::Read + std::io::Seek + Send + 'static;

    fn open_file(&self, path: &str) -> impl std::future::Future<Output = Result<Self::Reader>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn folder_id(&self) -> &str;
    fn credentials_json(&self) -> &str;
    fn api_base_url(&self) -> &str;
    fn mime_type(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
}

/// The single entry point the host calls after it saves an image.
///
/// `Ok(None)` means the upload was skipped because the remote API refused it;
/// the failure has already been logged.
#[async_trait]
pub trait SaveEventHandler: Send + Sync {
    async fn on_image_saved(&self, event: &SaveEvent) -> Result<Option<RemoteFile>>;
}
