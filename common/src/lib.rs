//! Material Lookup Common Library
//!
//! CLIとデスクトップ版で共有される検索ロジック

pub mod catalog;
pub mod code;
pub mod config;
pub mod documents;
pub mod error;
pub mod photos;
pub mod storage;
pub mod viewer;

pub use catalog::{CatalogStore, MaterialRecord};
pub use code::{format_code, normalize_code};
pub use config::AppConfig;
pub use documents::{CommandOpener, DocumentKind, DocumentOpener, DocumentRoute, DocumentRouter, SystemOpener};
pub use error::{Error, Result};
pub use photos::PhotoLocator;
pub use storage::{check_storage_access, DesktopStorage, StorageAccess};
pub use viewer::{PhotoViewer, ZoomRange};

/// 設定から組み立てた検索サービス一式
#[derive(Debug, Clone)]
pub struct Lookup {
    pub catalog: CatalogStore,
    pub photos: PhotoLocator,
    pub documents: DocumentRouter,
}

impl Lookup {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            catalog: CatalogStore::new(config.catalog_path()),
            photos: PhotoLocator::new(config.asset_dir()),
            documents: DocumentRouter::from_config(config),
        }
    }
}
