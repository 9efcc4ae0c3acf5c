//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use material_lookup::error::LookupError;
use material_lookup_common::documents::open_route_message;
use material_lookup_common::{DocumentRouter, PhotoLocator, SystemOpener};
use std::path::Path;
use tempfile::tempdir;

/// 存在しないフォルダの写真検索はエラーにならず空
#[test]
fn test_photos_nonexistent_folder() {
    let locator = PhotoLocator::new(Path::new("/nonexistent/path/12345"));
    assert!(locator.find("12345678").is_empty());
}

/// 未設定の資料は OS に渡さずメッセージを返す
#[test]
fn test_unconfigured_document_message() {
    let router = DocumentRouter::default();
    let route = router.route("Válvula");
    assert_eq!(
        open_route_message(&route, &SystemOpener),
        "Nenhum documento configurado para este material."
    );
}

/// 存在しない資料ファイル
#[test]
fn test_missing_document_message() {
    let dir = tempdir().expect("Failed to create temp dir");
    let router = DocumentRouter::new(Some(dir.path().join("Haste.pdf")), None, None);
    let message = open_route_message(&router.route("Haste"), &SystemOpener);
    assert!(message.starts_with("Documento não encontrado"));
}

/// LookupErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        LookupError::Config("テスト設定エラー".to_string()),
        LookupError::FileNotFound("catalogo.xlsx".to_string()),
        LookupError::Excel("シートがありません".to_string()),
        LookupError::Prompt("入力中断".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: LookupError = io_err.into();

    assert!(matches!(err, LookupError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: LookupError = json_err.into();

    assert!(matches!(err, LookupError::JsonParse(_)));
}

/// common::Errorからの変換（透過的）
#[test]
fn test_common_error_transparent() {
    let common_err = material_lookup_common::Error::NotFound("12.345.678".to_string());
    let err: LookupError = common_err.into();

    assert!(matches!(err, LookupError::Common(_)));
    assert_eq!(format!("{}", err), "Material not found: 12.345.678");
}
