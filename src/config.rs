//! ストア設定
//!
//! ストアのルートディレクトリと `pass` コマンドの解決を行う。
//! 優先順位: 明示的な指定 > 環境変数 > デフォルト

use std::path::PathBuf;

/// `pass` が参照するストアディレクトリの環境変数
pub const STORE_DIR_ENV: &str = "PASSWORD_STORE_DIR";

/// デフォルトのストアディレクトリ名（ホーム直下）
pub const DEFAULT_STORE_DIR: &str = ".password-store";

/// デフォルトのストアコマンド
pub const DEFAULT_PROGRAM: &str = "pass";

/// 環境変数を取得（空文字列はNoneとして扱う）
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

fn home_dir() -> PathBuf {
    dirs::home_dir()
        .or_else(|| env_var("HOME").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("~"))
}

/// ストア設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// ストアのルート（`<store_dir>/<name>.gpg` で存在確認する）
    pub store_dir: PathBuf,
    /// 呼び出すストアコマンド
    pub program: String,
}

impl StoreConfig {
    /// 明示的な指定と環境からストア設定を解決
    pub fn resolve(store_dir: Option<PathBuf>, program: Option<String>) -> Self {
        let store_dir = store_dir
            .or_else(|| env_var(STORE_DIR_ENV).map(PathBuf::from))
            .unwrap_or_else(|| home_dir().join(DEFAULT_STORE_DIR));
        let program = program
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());

        Self { store_dir, program }
    }

    /// エントリ名に対応する暗号化ファイルのパス
    pub fn entry_path(&self, name: &str) -> PathBuf {
        self.store_dir.join(format!("{name}.gpg"))
    }
}

/// インポートオプション
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOptions {
    /// 既存エントリを上書きする（名前の連番付けをしない）
    pub force: bool,
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
