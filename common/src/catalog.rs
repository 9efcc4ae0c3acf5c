//! 材料カタログモジュール
//!
//! `modelo.json`（材料レコードのJSON配列）を検索のたびに読み込み、
//! 正規化したコードで線形探索する。キャッシュはしない。

use crate::code::format_code;
use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub const NOT_FOUND_MESSAGE: &str = "Código não encontrado!";
pub const NO_ADDITIONAL_MESSAGE: &str = "Nenhum adicional disponível";
pub const ACCESS_ERROR_MESSAGE: &str = "Erro ao acessar os dados.";

/// カタログの1レコード
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    #[serde(rename = "Material", default, deserialize_with = "lenient_text")]
    pub material: String,

    #[serde(rename = "Descrição", default, deserialize_with = "lenient_text")]
    pub description: String,

    /// 分類キーワード（Haste / Tubo など）を含む自由記述
    #[serde(rename = "Adicionais", default, deserialize_with = "lenient_text")]
    pub additional: String,
}

/// 数値やnullもテキストとして受け入れる（Excel由来のJSON対策）
fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

/// JSONカタログへのアクセス
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// カタログを読み込む（失敗はエラーとして返す）
    pub fn try_load(&self) -> Result<Vec<MaterialRecord>> {
        if !self.path.exists() {
            return Err(Error::FileNotFound(self.path.display().to_string()));
        }
        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|source| Error::Parse {
            path: self.path.display().to_string(),
            source,
        })
    }

    /// カタログを読み込む。ファイル欠落・JSON不正は空として扱う
    pub fn load(&self) -> Vec<MaterialRecord> {
        match self.try_load() {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("catalog load failed: {}", e);
                Vec::new()
            }
        }
    }

    /// コードに一致するレコードを探す（先頭一致優先）
    pub fn find_record(&self, code: &str) -> Result<MaterialRecord> {
        let formatted = format_code(code);
        self.try_load()?
            .into_iter()
            .find(|record| record.material.trim() == formatted)
            .ok_or(Error::NotFound(formatted))
    }

    /// 画面表示用の (説明, 追加情報) を返す
    ///
    /// 失敗は全て定型メッセージに変換し、呼び出し側へは伝播しない。
    pub fn search(&self, code: &str) -> (String, String) {
        match self.find_record(code) {
            Ok(record) => {
                let additional = if record.additional.trim().is_empty() {
                    NO_ADDITIONAL_MESSAGE.to_string()
                } else {
                    record.additional
                };
                (record.description, additional)
            }
            Err(Error::NotFound(formatted)) => {
                tracing::debug!("material {} not in catalog", formatted);
                (NOT_FOUND_MESSAGE.to_string(), NO_ADDITIONAL_MESSAGE.to_string())
            }
            Err(e) => {
                tracing::warn!("catalog search failed: {}", e);
                (ACCESS_ERROR_MESSAGE.to_string(), NO_ADDITIONAL_MESSAGE.to_string())
            }
        }
    }
}
