//! 材料写真の検索モジュール
//!
//! アセットフォルダ直下から、正規化コードで始まる JPEG ファイルを探す。

use crate::code::format_code;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 該当写真が無いときに表示する画像
pub const FALLBACK_PHOTO: &str = "sem foto.jpg";

const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

#[derive(Debug, Clone)]
pub struct PhotoLocator {
    asset_dir: PathBuf,
}

impl PhotoLocator {
    pub fn new(asset_dir: impl Into<PathBuf>) -> Self {
        Self { asset_dir: asset_dir.into() }
    }

    pub fn asset_dir(&self) -> &Path {
        &self.asset_dir
    }

    pub fn fallback_path(&self) -> PathBuf {
        self.asset_dir.join(FALLBACK_PHOTO)
    }

    /// コードに対応する写真のパス一覧
    ///
    /// 並びはディレクトリの列挙順（OS依存、ソートしない）。
    /// 一致が無ければ `sem foto.jpg` が存在する場合に限りそれ1件を返す。
    pub fn find(&self, code: &str) -> Vec<PathBuf> {
        let prefix = format_code(code);
        let mut photos = match self.scan(&prefix) {
            Ok(photos) => photos,
            Err(e) => {
                tracing::warn!("photo scan failed: {}", e);
                Vec::new()
            }
        };

        if photos.is_empty() {
            let fallback = self.fallback_path();
            if fallback.is_file() {
                photos.push(fallback);
            }
        }
        photos
    }

    /// フォルダ直下を走査して接頭辞と拡張子が合うファイルを集める
    pub fn scan(&self, prefix: &str) -> Result<Vec<PathBuf>> {
        let mut photos = Vec::new();

        for entry in WalkDir::new(&self.asset_dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| Error::Scan {
                path: self.asset_dir.display().to_string(),
                source: e.into(),
            })?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if name.starts_with(prefix) && is_photo_extension(path) {
                tracing::debug!("photo match: {}", name);
                photos.push(path.to_path_buf());
            }
        }

        Ok(photos)
    }
}

/// 拡張子が jpg / jpeg か（大文字小文字を区別しない）
pub fn is_photo_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            PHOTO_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
