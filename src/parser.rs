//! LastPass CSV パーサー
//!
//! 1行目（ヘッダー）を読み捨て、残りの行を順番通りに [`Record`] へ変換する。
//! 列が足りない行は空文字列で補い、バッチ全体は止めない。

use crate::error::{ImportError, Result};
use crate::record::Record;
use clap::ValueEnum;
use std::collections::VecDeque;
use std::io::Read;
use std::path::Path;

/// 列の並び
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColumnLayout {
    /// url, username, password, fav, grouping, name, extra...
    #[default]
    Positional,
    /// url, username, password, extra..., name, grouping, fav（LastPass のエクスポート順）
    Export,
}

impl ColumnLayout {
    /// 1行分のフィールドから Record を組み立てる
    pub fn record_from_fields(self, fields: Vec<String>) -> Record {
        let mut fields: VecDeque<String> = fields.into();
        let url = fields.pop_front().unwrap_or_default();
        let username = fields.pop_front().unwrap_or_default();
        let password = fields.pop_front().unwrap_or_default();

        let name = match self {
            ColumnLayout::Positional => {
                let _fav = fields.pop_front();
                let _grouping = fields.pop_front();
                fields.pop_front().unwrap_or_default()
            }
            ColumnLayout::Export => {
                let _fav = fields.pop_back();
                let _grouping = fields.pop_back();
                fields.pop_back().unwrap_or_default()
            }
        };

        // クォートの都合で分割された notes をカンマで戻す
        let extra = Vec::from(fields).join(",");

        Record::new(name, url, username, password, extra)
    }
}

/// ファイルを読み込んでレコード列を返す
pub fn parse_file(path: &Path, layout: ColumnLayout) -> Result<Vec<Record>> {
    if !path.is_file() {
        return Err(ImportError::FileNotFound(path.to_path_buf()));
    }
    let file = std::fs::File::open(path)?;
    parse_reader(file, layout)
}

/// 任意の Reader からレコード列を返す
pub fn parse_reader<R: Read>(reader: R, layout: ColumnLayout) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let fields: Vec<String> = row.iter().map(str::to_string).collect();
        records.push(layout.record_from_fields(fields));
    }

    tracing::debug!(count = records.len(), ?layout, "parsed csv rows");
    Ok(records)
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
