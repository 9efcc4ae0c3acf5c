use anyhow::{Context, Result};
use image::{ImageReader, RgbaImage};
use std::path::{Path, PathBuf};

pub const THUMB_SIZE: (u32, u32) = (220, 160);
pub const FULL_SIZE: (u32, u32) = (2048, 2048);

/// 画像を読み込み、指定サイズ内に縮小した RGBA を返す
pub fn load_rgba(path: &Path, max: (u32, u32)) -> Result<RgbaImage> {
    let image = ImageReader::open(path)
        .with_context(|| format!("open {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("detect format {}", path.display()))?
        .decode()
        .with_context(|| format!("decode {}", path.display()))?;

    let image = if image.width() > max.0 || image.height() > max.1 {
        image.thumbnail(max.0, max.1)
    } else {
        image
    };
    Ok(image.to_rgba8())
}

pub fn texture_key(path: &Path, full: bool) -> String {
    if full {
        format!("full:{}", path.display())
    } else {
        format!("thumb:{}", path.display())
    }
}

/// 現在の一覧のサムネイルか、ビューアで開いている写真のテクスチャか
pub fn is_live_key(key: &str, photos: &[PathBuf], open: Option<&Path>) -> bool {
    photos.iter().any(|p| texture_key(p, false) == key)
        || open.is_some_and(|p| texture_key(p, true) == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_texture_key_distinguishes_sizes() {
        let path = Path::new("12.345.678.jpg");
        assert_ne!(texture_key(path, true), texture_key(path, false));
    }

    #[test]
    fn test_is_live_key() {
        let photos = vec![PathBuf::from("12.345.678.jpg")];
        let open = Path::new("12.345.678.jpg");

        assert!(is_live_key(&texture_key(&photos[0], false), &photos, None));
        // 閉じたビューアのフル画像は不要
        assert!(!is_live_key(&texture_key(open, true), &photos, None));
        assert!(is_live_key(&texture_key(open, true), &photos, Some(open)));
        // 前回検索の写真は不要
        let old = Path::new("87.654.321.jpg");
        assert!(!is_live_key(&texture_key(old, false), &photos, Some(open)));
    }

    #[test]
    fn test_load_rgba_shrinks_large_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("12.345.678.jpg");
        image::RgbImage::new(600, 300).save(&path).unwrap();

        let rgba = load_rgba(&path, THUMB_SIZE).unwrap();
        assert!(rgba.width() <= THUMB_SIZE.0);
        assert!(rgba.height() <= THUMB_SIZE.1);
    }

    #[test]
    fn test_load_rgba_missing_file() {
        let err = load_rgba(Path::new("/nonexistent/sem foto.jpg"), THUMB_SIZE).unwrap_err();
        assert!(err.to_string().contains("open"));
    }
}
