//! LastPass のレコードモデル
//!
//! CSV の1行から作られ、ストア上の名前と秘密情報の本文を導出する。
//! 生成後に変更されることはない。

/// セキュアノートを示す URL
pub const SECURE_NOTE_URL: &str = "http://sn";

/// セキュアノートを格納するディレクトリ
pub const SECURE_NOTES_PREFIX: &str = "Secure Notes/";

/// インポート対象の1件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    name: String,
    url: String,
    username: String,
    password: String,
    extra: String,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        extra: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            username: username.into(),
            password: password.into(),
            extra: extra.into(),
        }
    }

    #[cfg(test)]
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn is_secure_note(&self) -> bool {
        self.url == SECURE_NOTE_URL
    }

    /// ストア上の名前
    ///
    /// セキュアノートは `Secure Notes/` 配下に置く。シングルクォートは除去する。
    pub fn display_name(&self) -> String {
        let mut name = String::new();
        if self.is_secure_note() {
            name.push_str(SECURE_NOTES_PREFIX);
        }
        name.push_str(&self.name);
        name.retain(|c| c != '\'');
        name
    }

    /// ストアに書き込む本文
    ///
    /// 1行目は必ずパスワード。`pass` はこの規約に依存している。
    pub fn serialized_body(&self) -> String {
        let mut body = format!("{}\n", self.password);
        if !self.username.is_empty() {
            body.push_str(&format!("username: {}\n", self.username));
        }
        if !self.is_secure_note() {
            body.push_str(&format!("url: {}\n", self.url));
        }
        if !self.extra.is_empty() {
            body.push_str(&format!("{}\n", self.extra));
        }
        body
    }
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;

#[cfg(test)]
#[path = "record_proptests.rs"]
mod proptests;
