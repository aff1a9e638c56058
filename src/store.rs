//! パスワードストア抽象化
//!
//! 既存エントリの存在確認と、外部コマンド経由の挿入を抽象化する。
//! テスト時は MockStore を注入する。本番コードでは PassStore を使用する。

use crate::config::{StoreConfig, STORE_DIR_ENV};
use crate::error::{ImportError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// ストア操作を抽象化するトレイト
pub trait PasswordStore {
    /// 指定名のエントリが既に存在するか
    fn contains(&self, name: &str) -> bool;

    /// エントリを作成
    ///
    /// - 本文は標準入力で渡す（引数には載せない）
    /// - `force` なら既存エントリを上書き
    /// - 成功後は `contains(name)` が true になる
    fn insert(&mut self, name: &str, body: &str, force: bool) -> Result<()>;
}

/// `pass insert` を呼び出す本番用ストア
#[derive(Debug, Clone)]
pub struct PassStore {
    config: StoreConfig,
}

impl PassStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// `pass insert` の引数
    fn insert_args(name: &str, force: bool) -> Vec<&str> {
        let mut args = vec!["insert", "--multiline"];
        if force {
            args.push("--force");
        }
        args.push(name);
        args
    }
}

impl PasswordStore for PassStore {
    fn contains(&self, name: &str) -> bool {
        self.config.entry_path(name).exists()
    }

    fn insert(&mut self, name: &str, body: &str, force: bool) -> Result<()> {
        let program = &self.config.program;
        tracing::debug!(%program, %name, force, "spawning store insert");

        let mut child = Command::new(program)
            .args(Self::insert_args(name, force))
            .env(STORE_DIR_ENV, &self.config.store_dir)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(|source| ImportError::StoreUnavailable {
                program: program.clone(),
                source,
            })?;

        // stdin はこのスコープで閉じる（閉じないと子プロセスが EOF を待ち続ける）
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(body.as_bytes()),
            None => Ok(()),
        };

        let status = child.wait()?;
        if !status.success() {
            return Err(ImportError::StoreCommand {
                name: name.to_string(),
                status,
            });
        }
        written?;
        Ok(())
    }
}

#[cfg(test)]
pub mod mock;

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
