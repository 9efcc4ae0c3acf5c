//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Parse error in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Scan error in {path}: {source}")]
    Scan {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Material not found: {0}")]
    NotFound(String),

    #[error("No document configured")]
    DocumentNotConfigured,

    #[error("Failed to open {path}: {reason}")]
    Open { path: String, reason: String },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = Error::Io(io_error);
        let display = format!("{}", error);
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_error_display_parse() {
        let source = serde_json::from_str::<serde_json::Value>("[{").unwrap_err();
        let error = Error::Parse { path: "modelo.json".to_string(), source };
        let display = format!("{}", error);
        assert!(display.starts_with("Parse error in modelo.json"));
    }

    #[test]
    fn test_error_display_open() {
        let error = Error::Open {
            path: "Haste.pdf".to_string(),
            reason: "no handler".to_string(),
        };
        assert_eq!(format!("{}", error), "Failed to open Haste.pdf: no handler");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::NotFound("12.345.678".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("NotFound"));
        assert!(debug.contains("12.345.678"));
    }
}
