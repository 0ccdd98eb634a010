use std::error::Error;

use courier::errors::SqsError;

#[test]
fn test_sqs_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = SqsError::FormatError("bad record".to_string());
    assert_error(&error);
}

#[test]
fn test_sqs_error_display() {
    let error = SqsError::FormatError("bad uuid".to_string());
    assert_eq!(format!("{error}"), "Failed to parse SQS record: bad uuid");

    let error = SqsError::TransportError("connection reset".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to interact with SQS: connection reset"
    );
}

#[test]
fn test_sqs_error_from_conversions() {
    let json_error = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
    assert!(matches!(SqsError::from(json_error), SqsError::FormatError(_)));

    let uuid_error = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();
    assert!(matches!(SqsError::from(uuid_error), SqsError::FormatError(_)));

    let int_error = "ten".parse::<u32>().unwrap_err();
    assert!(matches!(SqsError::from(int_error), SqsError::FormatError(_)));
}
