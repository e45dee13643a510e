pub mod adapter;
pub mod auth;
pub mod drive;

pub use crate::domain::model::{RemoteFile, SaveEvent, UploadConfig};
pub use crate::domain::ports::{ConfigProvider, SaveEventHandler, Storage};
pub use crate::utils::error::Result;
