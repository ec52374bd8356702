use email_reply_parser::SignatureClassifier;

fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

#[test]
fn test_delimiters_and_boilerplate() {
    let classifier = SignatureClassifier::default();

    for line in ["--", "-- ", "__", "________", "-Bob", "Sent from my iPhone"] {
        assert!(classifier.is_signature_start(&reverse(line)), "{line:?}");
    }
    for line in ["Hello there", "sent from my iPhone", "Sent from my very old work phone"] {
        assert!(!classifier.is_signature_start(&reverse(line)), "{line:?}");
    }
}

#[test]
fn test_sender_name_ratio() {
    let classifier = SignatureClassifier::new("Jim Smith", 0.25);

    assert!(classifier.is_signature_start(&reverse("Jim Smith")));
    assert!(classifier.is_signature_start(&reverse("jim r. smith")));
    assert!(classifier.is_signature_start(&reverse("Cheers, Jim Smith")));
    assert!(!classifier.is_signature_start(&reverse(
        "I talked to Jim Smith about the numbers today"
    )));
    assert!(!classifier.is_signature_start(&reverse("Smith Jim")));
}

#[test]
fn test_lower_ratio_accepts_longer_lines() {
    let line = reverse("I talked to Jim Smith about the numbers today");

    assert!(SignatureClassifier::new("Jim Smith", 0.1).is_signature_start(&line));
}

#[test]
fn test_empty_name_disables_name_check() {
    let classifier = SignatureClassifier::new("  ", 0.25);

    assert!(!classifier.is_signature_start(&reverse("Jim Smith")));
}
