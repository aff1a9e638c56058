use super::*;

fn login(name: &str) -> Record {
    Record::new(name, "https://example.com", "alice", "hunter2", "")
}

#[test]
fn test_display_name_plain_login() {
    assert_eq!(login("Example").display_name(), "Example");
}

#[test]
fn test_display_name_secure_note_prefix() {
    let record = Record::new("My Note", SECURE_NOTE_URL, "", "mynote", "extra info");
    assert_eq!(record.display_name(), "Secure Notes/My Note");
}

#[test]
fn test_display_name_strips_single_quotes() {
    assert_eq!(login("Bob's 'bank'").display_name(), "Bobs bank");
}

#[test]
fn test_display_name_empty_name() {
    assert_eq!(login("").display_name(), "");

    let note = Record::new("", SECURE_NOTE_URL, "", "", "");
    assert_eq!(note.display_name(), "Secure Notes/");
}

#[test]
fn test_display_name_is_stable() {
    let record = login("Stable 'one'");
    assert_eq!(record.display_name(), record.display_name());
}

#[test]
fn test_serialized_body_full_login() {
    let record = Record::new("Example", "https://example.com", "alice", "hunter2", "pin: 1234");
    assert_eq!(
        record.serialized_body(),
        "hunter2\nusername: alice\nurl: https://example.com\npin: 1234\n"
    );
}

#[test]
fn test_serialized_body_omits_empty_username_and_extra() {
    let record = Record::new("Example", "https://example.com", "", "hunter2", "");
    assert_eq!(record.serialized_body(), "hunter2\nurl: https://example.com\n");
}

#[test]
fn test_serialized_body_keeps_empty_url_for_logins() {
    let record = Record::new("Example", "", "", "hunter2", "");
    assert_eq!(record.serialized_body(), "hunter2\nurl: \n");
}

#[test]
fn test_serialized_body_secure_note() {
    let record = Record::new("My Note", SECURE_NOTE_URL, "", "mynote", "extra info");
    assert_eq!(record.serialized_body(), "mynote\nextra info\n");
}

#[test]
fn test_serialized_body_missing_password_is_empty_line() {
    let record = Record::new("Example", "https://example.com", "alice", "", "");
    assert!(record.serialized_body().starts_with('\n'));
}
