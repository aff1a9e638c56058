use super::*;
use proptest::prelude::*;

/// 改行を含まない任意のフィールド
fn field_strategy() -> impl Strategy<Value = String> {
    "[^\n\r]{0,24}"
}

/// URL（セキュアノートを一定割合で含む）
fn url_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(SECURE_NOTE_URL.to_string()),
        "https?://[a-z]{1,10}\\.[a-z]{2,3}",
        field_strategy(),
    ]
}

fn record_strategy() -> impl Strategy<Value = Record> {
    (
        field_strategy(),
        url_strategy(),
        field_strategy(),
        field_strategy(),
        field_strategy(),
    )
        .prop_map(|(name, url, username, password, extra)| {
            Record::new(name, url, username, password, extra)
        })
}

proptest! {
    /// 表示名にシングルクォートは含まれない
    #[test]
    fn prop_display_name_has_no_single_quotes(record in record_strategy()) {
        prop_assert!(!record.display_name().contains('\''));
    }

    /// 本文の1行目は常にパスワードそのもの
    #[test]
    fn prop_body_first_line_is_password(record in record_strategy()) {
        let body = record.serialized_body();
        let first_line = body.split('\n').next().unwrap_or_default();
        prop_assert_eq!(first_line, record.password());
        prop_assert!(body.ends_with('\n'));
    }

    /// セキュアノートは接頭辞付きで、url 行を持たない
    #[test]
    fn prop_secure_note_shape(
        name in field_strategy(),
        username in field_strategy(),
        password in field_strategy(),
        extra in field_strategy(),
    ) {
        let record = Record::new(name, SECURE_NOTE_URL, username, password, extra);
        prop_assert!(record.display_name().starts_with(SECURE_NOTES_PREFIX));
        let url_line = format!("url: {}", SECURE_NOTE_URL);
        prop_assert!(!record.serialized_body().lines().any(|line| line == url_line));
    }
}
