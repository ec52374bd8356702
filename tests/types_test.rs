use email_reply_parser::*;

// --- SenderIdentity ---

#[test]
fn test_sender_last_first() {
    let sender = SenderIdentity::parse(Some("\"Smith, Jim\" <jim@x.com>"));
    assert_eq!(sender.raw_name, "Smith, Jim");
    assert_eq!(sender.normalized_name, "Jim Smith");
    assert_eq!(sender.email, "jim@x.com");
}

#[test]
fn test_sender_single_quotes() {
    let sender = SenderIdentity::parse(Some("'Jim Smith' <jim@x.com>"));
    assert_eq!(sender.raw_name, "Jim Smith");
    assert_eq!(sender.normalized_name, "Jim Smith");
    assert_eq!(sender.email, "jim@x.com");
}

#[test]
fn test_sender_unquoted_name() {
    let sender = SenderIdentity::parse(Some("Jim Smith <jim@x.com>"));
    assert_eq!(sender.raw_name, "Jim Smith");
    assert_eq!(sender.email, "jim@x.com");
}

#[test]
fn test_sender_bare_address() {
    let sender = SenderIdentity::parse(Some("jim@x.com"));
    assert_eq!(sender.raw_name, "");
    assert_eq!(sender.normalized_name, "");
    assert_eq!(sender.email, "jim@x.com");
}

#[test]
fn test_sender_missing() {
    assert_eq!(SenderIdentity::parse(None), SenderIdentity::default());
}

#[test]
fn test_sender_name_with_space_before_comma() {
    let sender = SenderIdentity::parse(Some("\"Smith Jr, Jim\" <jim@x.com>"));
    assert_eq!(sender.normalized_name, "Smith Jr");
}

#[test]
fn test_sender_drops_trailing_qualification() {
    let sender = SenderIdentity::parse(Some("\"Smith, Jim, PhD\" <jim@x.com>"));
    assert_eq!(sender.normalized_name, "Jim Smith");
}

#[test]
fn test_sender_trailing_comma() {
    let sender = SenderIdentity::parse(Some("\"Smith,\" <jim@x.com>"));
    assert_eq!(sender.normalized_name, "Smith");
}

#[test]
fn test_sender_encoded_name() {
    let sender = SenderIdentity::parse(Some("=?UTF-8?Q?Jim_Smith?= <jim@x.com>"));
    assert_eq!(sender.raw_name, "Jim Smith");
    assert_eq!(sender.email, "jim@x.com");
}

// --- Email / Fragment ---

#[test]
fn test_default_email_is_empty() {
    let email = Email::default();
    assert!(email.is_empty());
    assert_eq!(email.visible_text(), "");
}

#[test]
fn test_fragment_display() {
    let email = read("Hello\n\n-- \nBob", None);
    assert_eq!(email.fragments()[1].to_string(), "-- \nBob");
}

#[test]
fn test_visible_text_skips_hidden() {
    let email = read("Hi\n\n> one\n> two\n", None);
    assert_eq!(email.visible_text(), "Hi");
    assert!(email.fragments().iter().any(Fragment::is_hidden));
}

#[test]
fn test_email_serializes() {
    let email = read("Hi folks\n\n-Bob\n", None);
    let json = serde_json::to_string(&email).unwrap();

    assert!(json.contains("\"signature\":true"));

    let back: Email = serde_json::from_str(&json).unwrap();
    assert_eq!(back, email);
}
