//! テスト用モックストア

use super::*;
use std::collections::{HashMap, HashSet};
use std::process::ExitStatus;

/// 挿入呼び出しの記録
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub name: String,
    pub body: String,
    pub force: bool,
}

/// テスト用モックストア
#[derive(Debug, Default)]
pub struct MockStore {
    entries: HashMap<String, String>,
    failing: HashSet<String>,
    insertions: Vec<Insertion>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存エントリを追加
    pub fn with_entry(mut self, name: &str) -> Self {
        self.entries.insert(name.to_string(), String::new());
        self
    }

    /// 指定名への挿入を失敗させる
    pub fn failing_on(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    /// 挿入呼び出しの履歴
    pub fn insertions(&self) -> &[Insertion] {
        &self.insertions
    }

    /// 挿入された名前（呼び出し順）
    pub fn inserted_names(&self) -> Vec<&str> {
        self.insertions.iter().map(|i| i.name.as_str()).collect()
    }

    pub fn body(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }
}

#[cfg(unix)]
fn failed_status() -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(1 << 8)
}

#[cfg(windows)]
fn failed_status() -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(1)
}

impl PasswordStore for MockStore {
    fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    fn insert(&mut self, name: &str, body: &str, force: bool) -> Result<()> {
        self.insertions.push(Insertion {
            name: name.to_string(),
            body: body.to_string(),
            force,
        });

        if self.failing.contains(name) || (self.entries.contains_key(name) && !force) {
            return Err(ImportError::StoreCommand {
                name: name.to_string(),
                status: failed_status(),
            });
        }

        self.entries.insert(name.to_string(), body.to_string());
        Ok(())
    }
}
