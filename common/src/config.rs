//! アプリ設定モジュール
//!
//! `~/.config/material-lookup/config.json` に保存する。
//! ファイルが無ければ既定値で動作する。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 写真・カタログを置くサブフォルダ名
pub const ASSET_SUBDIR: &str = "App_ptro";

/// カタログファイル名
pub const CATALOG_FILE_NAME: &str = "modelo.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// アセットのルートフォルダ
    pub assets_root: PathBuf,
    /// 「Haste」分類の資料（assets_root からの相対パス可）
    pub haste_document: String,
    /// 「Tubo」分類の資料
    pub tubo_document: String,
    /// どちらにも該当しない場合の資料（空 = 未設定）
    pub default_document: String,
    pub zoom_min: f32,
    pub zoom_max: f32,
    pub zoom_step: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assets_root: PathBuf::from("assets"),
            haste_document: format!("{}/Haste.pdf", ASSET_SUBDIR),
            tubo_document: format!("{}/Tubo.pdf", ASSET_SUBDIR),
            default_document: String::new(),
            zoom_min: 0.5,
            zoom_max: 3.0,
            zoom_step: 0.25,
        }
    }
}

impl AppConfig {
    /// 既定の場所から読み込み
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("config not found at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("material-lookup").join("config.json"))
    }

    /// 写真とカタログが置かれるフォルダ
    pub fn asset_dir(&self) -> PathBuf {
        self.assets_root.join(ASSET_SUBDIR)
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.asset_dir().join(CATALOG_FILE_NAME)
    }

    /// 資料パスを解決する。空文字は未設定として `None`
    pub fn resolve_document(&self, document: &str) -> Option<PathBuf> {
        let trimmed = document.trim();
        if trimmed.is_empty() {
            return None;
        }
        let path = Path::new(trimmed);
        if path.is_absolute() {
            Some(path.to_path_buf())
        } else {
            Some(self.assets_root.join(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_paths() {
        let config = AppConfig {
            assets_root: PathBuf::from("/data/assets"),
            ..Default::default()
        };
        assert_eq!(config.asset_dir(), PathBuf::from("/data/assets/App_ptro"));
        assert_eq!(config.catalog_path(), PathBuf::from("/data/assets/App_ptro/modelo.json"));
        assert_eq!(
            config.resolve_document(&config.haste_document),
            Some(PathBuf::from("/data/assets/App_ptro/Haste.pdf"))
        );
    }

    #[test]
    fn test_empty_document_is_unconfigured() {
        let config = AppConfig::default();
        assert_eq!(config.resolve_document(&config.default_document), None);
        assert_eq!(config.resolve_document("   "), None);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = AppConfig {
            assets_root: PathBuf::from("/srv/catalogo"),
            default_document: "geral.pdf".to_string(),
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"zoom_max": 4.0}"#).unwrap();
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.zoom_max, 4.0);
        assert_eq!(config.zoom_min, 0.5);
        assert_eq!(config.assets_root, PathBuf::from("assets"));
    }
}
