//! Excelからのカタログ取り込み
//!
//! シートのヘッダー行から `Material` / `Descrição` / `Adicionais` 列を探し、
//! `modelo.json` 形式で書き出す。

use crate::error::{LookupError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use material_lookup_common::code::CANONICAL_DIGITS;
use material_lookup_common::{format_code, MaterialRecord};
use std::path::{Path, PathBuf};

pub const MATERIAL_HEADER: &str = "Material";
pub const DESCRIPTION_HEADER: &str = "Descrição";
pub const ADDITIONAL_HEADER: &str = "Adicionais";

/// 取り込み結果
#[derive(Debug, Clone)]
pub struct ImportSummary {
    pub records: usize,
    pub skipped: usize,
    pub output: PathBuf,
}

/// 列位置
#[derive(Debug, Clone, Copy)]
struct Columns {
    header_row: usize,
    material: usize,
    description: Option<usize>,
    additional: Option<usize>,
}

/// ワークブックを読み込みレコード一覧に変換
///
/// 戻り値の2番目は材料コードが空でスキップした行数。
pub fn read_workbook(path: &Path, sheet: Option<&str>) -> Result<(Vec<MaterialRecord>, usize)> {
    if !path.exists() {
        return Err(LookupError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| LookupError::Excel(format!("{}: {}", path.display(), e)))?;

    let range = match sheet {
        Some(name) => workbook
            .worksheet_range(name)
            .map_err(|e| LookupError::Excel(format!("シート {}: {}", name, e)))?,
        None => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| LookupError::Excel("シートがありません".into()))?
            .map_err(|e| LookupError::Excel(e.to_string()))?,
    };

    records_from_range(&range)
}

fn records_from_range(range: &Range<Data>) -> Result<(Vec<MaterialRecord>, usize)> {
    let columns = find_columns(range)?;
    let mut records = Vec::new();
    let mut skipped = 0;

    for row in range.rows().skip(columns.header_row + 1) {
        let material = material_text(row, columns.material);
        if material.is_empty() {
            skipped += 1;
            continue;
        }

        records.push(MaterialRecord {
            material: format_code(&material),
            description: cell_text(row, columns.description),
            additional: cell_text(row, columns.additional),
        });
    }

    Ok((records, skipped))
}

/// `Material` を含む最初の行をヘッダーとみなす
fn find_columns(range: &Range<Data>) -> Result<Columns> {
    for (row_idx, row) in range.rows().enumerate() {
        let position = |name: &str| row.iter().position(|c| c.to_string().trim() == name);

        if let Some(material) = position(MATERIAL_HEADER) {
            return Ok(Columns {
                header_row: row_idx,
                material,
                description: position(DESCRIPTION_HEADER),
                additional: position(ADDITIONAL_HEADER),
            });
        }
    }

    Err(LookupError::Excel(format!("{} 列が見つかりません", MATERIAL_HEADER)))
}

/// 材料コードのセル。数値セルは先頭の0が落ちているので8桁に0埋めする
fn material_text(row: &[Data], column: usize) -> String {
    let padded = |value: u64| format!("{:0width$}", value, width = CANONICAL_DIGITS);
    match row.get(column) {
        Some(Data::Float(f)) if *f >= 0.0 && f.fract() == 0.0 => padded(*f as u64),
        Some(Data::Int(i)) if *i >= 0 => padded(*i as u64),
        _ => cell_text(row, Some(column)),
    }
}

fn cell_text(row: &[Data], column: Option<usize>) -> String {
    column
        .and_then(|idx| row.get(idx))
        .map(|cell| cell.to_string().trim().to_string())
        .unwrap_or_default()
}

/// ワークブックを読み込み、JSONカタログとして保存
///
/// 既存の出力ファイルは `force` が無い限り上書きしない。
pub fn import_workbook(
    path: &Path,
    sheet: Option<&str>,
    output: &Path,
    force: bool,
) -> Result<ImportSummary> {
    if output.exists() && !force {
        return Err(LookupError::OutputExists(output.display().to_string()));
    }

    let (records, skipped) = read_workbook(path, sheet)?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(&records)?;
    std::fs::write(output, json)?;
    tracing::debug!("wrote {} records to {}", records.len(), output.display());

    Ok(ImportSummary {
        records: records.len(),
        skipped,
        output: output.to_path_buf(),
    })
}
