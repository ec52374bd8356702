use email_reply_parser::{ParserConfig, ReplyParseError, ReplyParser};

#[test]
fn test_default_config_is_valid() {
    let config = ParserConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.date_labels, ["Date", "Sent", "Enviada em"]);
    assert!((config.signature_name_ratio - 0.25).abs() < f64::EPSILON);
}

#[test]
fn test_from_json_fills_defaults() {
    let config = ParserConfig::from_json(r#"{"from_labels": ["From", "Von"]}"#).unwrap();

    assert_eq!(config.from_labels, ["From", "Von"]);
    assert_eq!(config.to_labels, ParserConfig::default().to_labels);
}

#[test]
fn test_from_json_rejects_bad_ratio() {
    let err = ParserConfig::from_json(r#"{"signature_name_ratio": 2.0}"#).unwrap_err();
    assert!(matches!(err, ReplyParseError::Config(_)));
}

#[test]
fn test_from_json_rejects_malformed_input() {
    let err = ParserConfig::from_json("not json").unwrap_err();
    assert!(matches!(err, ReplyParseError::ConfigFormat(_)));
}

#[test]
fn test_empty_labels_rejected() {
    let config = ParserConfig {
        subject_labels: Vec::new(),
        ..ParserConfig::default()
    };

    let err = ReplyParser::new(config).unwrap_err();
    assert!(err.to_string().contains("subject_labels"));
}

#[test]
fn test_labels_matched_literally() {
    let mut config = ParserConfig::default();
    config.from_labels.push("F.*m".into());
    let parser = ReplyParser::new(config).unwrap();

    let body = "Ok\n\nFxxm: Alice\nTo: Bob\nDate: Monday\nSubject: Lunch\n\nLunch?\n";
    assert_eq!(parser.read(body, None).fragments().len(), 1);
}

#[test]
fn test_ratio_controls_name_signature() {
    let body = "Hi\n\nthanks a lot for everything, Jim Smith\n";
    let from = Some("Jim Smith <jim@x.com>");

    let strict = ReplyParser::default();
    assert_eq!(strict.read(body, from).fragments().len(), 1);

    let config = ParserConfig {
        signature_name_ratio: 0.1,
        ..ParserConfig::default()
    };
    let loose = ReplyParser::new(config).unwrap();
    let email = loose.read(body, from);
    assert_eq!(email.fragments().len(), 2);
    assert!(email.fragments()[1].is_signature());
}
