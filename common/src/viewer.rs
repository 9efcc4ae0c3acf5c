//! 写真ビューアの状態
//!
//! 拡大率は `[min, max]` に収め、固定刻みで増減する。

use crate::config::AppConfig;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl Default for ZoomRange {
    fn default() -> Self {
        Self { min: 0.5, max: 3.0, step: 0.25 }
    }
}

impl ZoomRange {
    /// 設定値から作る。不正な値（min > max、step <= 0）は既定値に戻す
    pub fn from_config(config: &AppConfig) -> Self {
        let range = Self {
            min: config.zoom_min,
            max: config.zoom_max,
            step: config.zoom_step,
        };
        if range.min > 0.0 && range.min <= range.max && range.step > 0.0 {
            range
        } else {
            tracing::warn!("invalid zoom range in config, using defaults");
            Self::default()
        }
    }

    pub fn clamp(&self, zoom: f32) -> f32 {
        zoom.clamp(self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhotoViewer {
    range: ZoomRange,
    zoom: f32,
    photo: Option<PathBuf>,
}

impl PhotoViewer {
    pub fn new(range: ZoomRange) -> Self {
        Self {
            zoom: range.clamp(1.0),
            range,
            photo: None,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn photo(&self) -> Option<&Path> {
        self.photo.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.photo.is_some()
    }

    pub fn open(&mut self, photo: impl Into<PathBuf>) {
        self.photo = Some(photo.into());
        self.reset_zoom();
    }

    pub fn zoom_in(&mut self) {
        self.zoom = self.range.clamp(self.zoom + self.range.step);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.range.clamp(self.zoom - self.range.step);
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom < self.range.max
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom > self.range.min
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = self.range.clamp(1.0);
    }

    /// ビューアを閉じて一覧に戻る
    pub fn back(&mut self) {
        self.photo = None;
        self.reset_zoom();
    }
}

impl Default for PhotoViewer {
    fn default() -> Self {
        Self::new(ZoomRange::default())
    }
}
