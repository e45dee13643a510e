pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::toml_config::TomlConfig;
pub use core::adapter::UploadAdapter;
pub use domain::model::{RemoteFile, SaveEvent, UploadConfig};
pub use domain::ports::SaveEventHandler;
pub use utils::error::{Result, UploadError};
