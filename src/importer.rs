//! インポート処理
//!
//! レコードを CSV の行順に1件ずつ処理する。
//! 名前の衝突確認は直前までの挿入結果を観測する必要があるため、並列化しない。

use crate::config::ImportOptions;
use crate::error::Result;
use crate::record::Record;
use crate::store::PasswordStore;

/// 1件分の処理結果
#[derive(Debug)]
pub struct RecordOutcome {
    /// 衝突解決後の名前
    pub name: String,
    pub result: Result<()>,
}

impl RecordOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// バッチ全体の結果
#[derive(Debug, Default)]
pub struct ImportReport {
    /// 成功件数
    pub successful: usize,
    /// 失敗したレコード（出現順）
    pub failed: Vec<Record>,
}

impl ImportReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }

    /// 失敗したレコードの表示名
    pub fn failed_names(&self) -> Vec<String> {
        self.failed.iter().map(Record::display_name).collect()
    }
}

/// ストアへのインポーター
pub struct Importer<S: PasswordStore> {
    store: S,
    options: ImportOptions,
}

impl<S: PasswordStore> Importer<S> {
    pub fn new(store: S, options: ImportOptions) -> Self {
        Self { store, options }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// 挿入先の名前を決める
    ///
    /// - 空いていればそのまま
    /// - `force` なら既存でもそのまま（上書きはストア側に任せる）
    /// - それ以外は `"<name> (2)"`, `"<name> (3)"`, ... と空くまで試す
    pub fn resolve_name(&self, record: &Record) -> String {
        let base = record.display_name();
        if !self.store.contains(&base) {
            return base;
        }
        if self.options.force {
            tracing::debug!(name = %base, "entry exists, overwriting");
            return base;
        }

        let resolved = (2u64..)
            .map(|copy| format!("{base} ({copy})"))
            .find(|candidate| !self.store.contains(candidate))
            .unwrap_or_else(|| base.clone());
        tracing::debug!(name = %base, %resolved, "entry exists, renamed");
        resolved
    }

    /// 1件インポート
    pub fn import_one(&mut self, record: &Record) -> RecordOutcome {
        let name = self.resolve_name(record);
        let result = self
            .store
            .insert(&name, &record.serialized_body(), self.options.force);

        if let Err(e) = &result {
            tracing::warn!(%name, error = %e, "insert failed");
        }

        RecordOutcome { name, result }
    }

    /// 全件を順番にインポートする
    ///
    /// 1件の失敗でバッチは止めない。`on_outcome` は各レコードの処理直後に呼ばれる。
    pub fn run<I, F>(&mut self, records: I, mut on_outcome: F) -> ImportReport
    where
        I: IntoIterator<Item = Record>,
        F: FnMut(&RecordOutcome),
    {
        let mut report = ImportReport::default();

        for record in records {
            let outcome = self.import_one(&record);
            on_outcome(&outcome);

            if outcome.is_success() {
                report.successful += 1;
            } else {
                report.failed.push(record);
            }
        }

        report
    }
}

#[cfg(test)]
#[path = "importer_test.rs"]
mod tests;
