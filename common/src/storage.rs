//! ストレージアクセス権の確認
//!
//! 起動時に一度だけ確認する。検索処理そのものはこの結果に依存しない。

use std::path::PathBuf;

pub trait StorageAccess {
    fn granted(&self) -> bool;
}

/// デスクトップ環境: アセットフォルダが読めれば許可とみなす
#[derive(Debug, Clone)]
pub struct DesktopStorage {
    assets_root: PathBuf,
}

impl DesktopStorage {
    pub fn new(assets_root: impl Into<PathBuf>) -> Self {
        Self { assets_root: assets_root.into() }
    }
}

impl StorageAccess for DesktopStorage {
    fn granted(&self) -> bool {
        std::fs::read_dir(&self.assets_root).is_ok()
    }
}

/// 起動時チェック。拒否時は警告を残して `false` を返す
pub fn check_storage_access(access: &dyn StorageAccess) -> bool {
    let granted = access.granted();
    if !granted {
        tracing::warn!("storage access not granted; lookups will fail");
    }
    granted
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_desktop_storage_granted_for_existing_dir() {
        let dir = tempdir().unwrap();
        assert!(check_storage_access(&DesktopStorage::new(dir.path())));
    }

    #[test]
    fn test_desktop_storage_denied_for_missing_dir() {
        assert!(!check_storage_access(&DesktopStorage::new("/nonexistent/assets/root")));
    }
}
