use thiserror::Error;

#[derive(Debug, Error)]
pub enum SqsError {
    #[error("Failed to parse SQS record: {0}")]
    FormatError(String),

    #[error("Failed to interact with SQS: {0}")]
    TransportError(String),
}

impl From<serde_json::Error> for SqsError {
    fn from(error: serde_json::Error) -> Self {
        SqsError::FormatError(error.to_string())
    }
}

impl From<uuid::Error> for SqsError {
    fn from(error: uuid::Error) -> Self {
        SqsError::FormatError(error.to_string())
    }
}

impl From<std::num::ParseIntError> for SqsError {
    fn from(error: std::num::ParseIntError) -> Self {
        SqsError::FormatError(error.to_string())
    }
}

// Generic implementation for AWS SDK errors
impl<E, R> From<aws_sdk_sqs::error::SdkError<E, R>> for SqsError
where
    E: std::fmt::Display,
{
    fn from(error: aws_sdk_sqs::error::SdkError<E, R>) -> Self {
        SqsError::TransportError(error.to_string())
    }
}
