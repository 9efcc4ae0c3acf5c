//! 参考資料の振り分けモジュール
//!
//! 追加情報に含まれる分類キーワードから開くべき PDF を決め、
//! OS の既定アプリで開く。

use crate::config::AppConfig;
use crate::error::{Error, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::Command;

pub const HASTE_KEYWORD: &str = "Haste";
pub const TUBO_KEYWORD: &str = "Tubo";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DocumentKind {
    Haste,
    Tubo,
    Default,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Haste => write!(f, "Haste"),
            DocumentKind::Tubo => write!(f, "Tubo"),
            DocumentKind::Default => write!(f, "Padrão"),
        }
    }
}

/// 振り分け結果。`path` が `None` なら資料未設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRoute {
    pub kind: DocumentKind,
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct DocumentRouter {
    haste: Option<PathBuf>,
    tubo: Option<PathBuf>,
    default: Option<PathBuf>,
}

impl DocumentRouter {
    pub fn new(haste: Option<PathBuf>, tubo: Option<PathBuf>, default: Option<PathBuf>) -> Self {
        Self { haste, tubo, default }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.resolve_document(&config.haste_document),
            config.resolve_document(&config.tubo_document),
            config.resolve_document(&config.default_document),
        )
    }

    /// 部分一致で判定し、Haste を Tubo より優先する
    pub fn route(&self, additional: &str) -> DocumentRoute {
        let (kind, path) = if additional.contains(HASTE_KEYWORD) {
            (DocumentKind::Haste, &self.haste)
        } else if additional.contains(TUBO_KEYWORD) {
            (DocumentKind::Tubo, &self.tubo)
        } else {
            (DocumentKind::Default, &self.default)
        };
        DocumentRoute { kind, path: path.clone() }
    }
}

/// ファイルを既定アプリで開く処理
pub trait DocumentOpener {
    fn open(&self, path: &Path) -> std::io::Result<()>;
}

/// 外部コマンドでファイルを開く
///
/// ハンドラの終了を待ち、非0終了は失敗として返す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOpener {
    program: String,
    args: Vec<String>,
}

impl CommandOpener {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// OS の既定ハンドラ
    pub fn platform_default() -> Self {
        #[cfg(target_os = "windows")]
        {
            Self::new("cmd", &["/C", "start", ""])
        }
        #[cfg(target_os = "macos")]
        {
            Self::new("open", &[])
        }
        #[cfg(all(not(target_os = "windows"), not(target_os = "macos")))]
        {
            Self::new("xdg-open", &[])
        }
    }
}

impl DocumentOpener for CommandOpener {
    fn open(&self, path: &Path) -> std::io::Result<()> {
        let status = Command::new(&self.program).args(&self.args).arg(path).status()?;
        if status.success() {
            Ok(())
        } else {
            Err(std::io::Error::other(format!("{} exited with {}", self.program, status)))
        }
    }
}

/// OS の既定ハンドラを起動する
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl DocumentOpener for SystemOpener {
    fn open(&self, path: &Path) -> std::io::Result<()> {
        CommandOpener::platform_default().open(path)
    }
}

/// 振り分け結果の資料を開く。空パスは OS に渡さない
pub fn open_route(route: &DocumentRoute, opener: &dyn DocumentOpener) -> Result<PathBuf> {
    let path = route.path.as_ref().ok_or(Error::DocumentNotConfigured)?;
    if !path.is_file() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    opener.open(path).map_err(|e| Error::Open {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    tracing::debug!("opened {} document {}", route.kind, path.display());
    Ok(path.clone())
}

/// 資料を開き、結果を画面表示用の文言で返す
pub fn open_route_message(route: &DocumentRoute, opener: &dyn DocumentOpener) -> String {
    match open_route(route, opener) {
        Ok(path) => format!("Abrindo documento: {}", path.display()),
        Err(e) => {
            tracing::warn!("document open failed: {}", e);
            match e {
                Error::DocumentNotConfigured => {
                    "Nenhum documento configurado para este material.".to_string()
                }
                Error::FileNotFound(path) => format!("Documento não encontrado: {}", path),
                _ => "Não foi possível abrir o documento.".to_string(),
            }
        }
    }
}
