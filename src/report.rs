//! 検索結果の組み立てと表示
//!
//! ## 対話モード
//! コードを入力するたびに検索し、`d` で直前の資料を開く。

use crate::error::{LookupError, Result};
use dialoguer::Input;
use material_lookup_common::documents::open_route_message;
use material_lookup_common::{format_code, DocumentOpener, DocumentRoute, Lookup};
use serde::Serialize;
use std::path::PathBuf;

/// 1回分の検索結果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupReport {
    pub code: String,
    pub formatted: String,
    pub description: String,
    pub additional: String,
    pub photos: Vec<PathBuf>,
    pub route: DocumentRoute,
}

/// 検索・写真・資料振り分けをまとめて実行
pub fn run_lookup(lookup: &Lookup, code: &str) -> LookupReport {
    let (description, additional) = lookup.catalog.search(code);
    let photos = lookup.photos.find(code);
    let route = lookup.documents.route(&additional);

    LookupReport {
        code: code.to_string(),
        formatted: format_code(code),
        description,
        additional,
        photos,
        route,
    }
}

pub fn print_photos(photos: &[PathBuf]) {
    if photos.is_empty() {
        println!("  写真: なし");
        return;
    }
    println!("  写真: {}枚", photos.len());
    for photo in photos {
        println!("    - {}", photo.display());
    }
}

pub fn print_route(route: &DocumentRoute) {
    match &route.path {
        Some(path) => println!("  資料 ({}): {}", route.kind, path.display()),
        None => println!("  資料 ({}): 未設定", route.kind),
    }
}

pub fn print_report(report: &LookupReport) {
    println!("  コード: {}", report.formatted);
    println!("  Descrição: {}", report.description);
    println!("  Adicionais: {}", report.additional);
    print_photos(&report.photos);
    print_route(&report.route);
}

/// 対話アクション
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    /// コードを検索
    Search(String),
    /// 直前の結果の資料を開く
    OpenDocument,
    /// 終了
    Quit,
}

pub fn parse_prompt_action(input: &str) -> PromptAction {
    match input.trim() {
        "" | "q" => PromptAction::Quit,
        "d" => PromptAction::OpenDocument,
        code => PromptAction::Search(code.to_string()),
    }
}

/// 対話式で繰り返し検索
pub fn run_interactive(lookup: &Lookup, opener: &dyn DocumentOpener) -> Result<()> {
    println!("操作: コード入力で検索 [d]資料を開く [q/Enter]終了");
    println!("---\n");

    let mut last: Option<LookupReport> = None;

    loop {
        let input: String = Input::new()
            .with_prompt("Código")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| LookupError::Prompt(e.to_string()))?;

        match parse_prompt_action(&input) {
            PromptAction::Quit => break,
            PromptAction::OpenDocument => match &last {
                Some(report) => println!("  {}", open_route_message(&report.route, opener)),
                None => println!("  先にコードを検索してください"),
            },
            PromptAction::Search(code) => {
                let report = run_lookup(lookup, &code);
                print_report(&report);
                println!();
                last = Some(report);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use material_lookup_common::DocumentKind;

    #[test]
    fn test_report_serializes_camel_case() {
        let report = LookupReport {
            code: "12345678".to_string(),
            formatted: "12.345.678".to_string(),
            description: "Valve".to_string(),
            additional: "Haste tipo A".to_string(),
            photos: vec![PathBuf::from("12.345.678.jpg")],
            route: DocumentRoute { kind: DocumentKind::Haste, path: None },
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["formatted"], "12.345.678");
        assert_eq!(json["photos"][0], "12.345.678.jpg");
        assert_eq!(json["route"]["kind"], "Haste");
        assert!(json["route"]["path"].is_null());
    }

    #[test]
    fn test_parse_prompt_action() {
        assert_eq!(parse_prompt_action(""), PromptAction::Quit);
        assert_eq!(parse_prompt_action(" q "), PromptAction::Quit);
        assert_eq!(parse_prompt_action("d"), PromptAction::OpenDocument);
        assert_eq!(
            parse_prompt_action(" 12.345.678 "),
            PromptAction::Search("12.345.678".to_string())
        );
    }
}
