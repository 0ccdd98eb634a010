use courier::clients::SqsClient;
use courier::clients::sqs::backoff_visibility_timeout;
use courier::codec::Payload;
use courier::core::config::AppConfig;
use courier::core::models::SqsMessage;
use courier::sqs_parser::parse_sqs_messages;
use serde_json::json;

fn disabled_config() -> AppConfig {
    AppConfig {
        stage: "TEST".to_string(),
        region: "us-west-2".to_string(),
        account_id: "120356305272".to_string(),
        disabled: true,
    }
}

fn sample_message() -> SqsMessage {
    let event = json!({
        "Records": [{
            "messageId": "059f36b4-87a3-44ab-83d2-661975830a7d",
            "receiptHandle": "AQEBwJnKyrHigUMZj6rYigCgxlaS3SLy0a",
            "body": "{\"task\": \"resize\"}",
            "attributes": {
                "ApproximateReceiveCount": "7",
                "SentTimestamp": "1545082649183",
                "SenderId": "AIDAIENQZJOLO23YVJ4VO",
                "ApproximateFirstReceiveTimestamp": "1545082649185"
            },
            "md5OfBody": "e4e68fb7bd0e697a0ae8f1bb342846b3",
            "eventSource": "aws:sqs",
            "eventSourceARN": "arn:aws:sqs:us-west-2:120356305272:my-queue",
            "awsRegion": "us-west-2"
        }]
    });
    parse_sqs_messages(&event)
        .expect("parse")
        .pop()
        .expect("one record")
}

#[test]
fn test_backoff_grows_linearly_then_clamps() {
    assert_eq!(backoff_visibility_timeout(1), 10);
    assert_eq!(backoff_visibility_timeout(7), 70);
    assert_eq!(backoff_visibility_timeout(60), 600);
    assert_eq!(backoff_visibility_timeout(70), 600);
    assert_eq!(backoff_visibility_timeout(u32::MAX), 600);
}

#[tokio::test]
async fn test_url_for_queue_is_stage_namespaced() {
    let client = SqsClient::new(disabled_config()).await;
    assert_eq!(
        client.url_for_queue("thumbnails"),
        "https://us-west-2.queue.amazonaws.com/120356305272/TEST-service-template-thumbnails"
    );
}

#[tokio::test]
async fn test_disabled_client_send_is_a_noop() {
    let client = SqsClient::new(disabled_config()).await;
    let payloads = vec![Payload::from("ping"), Payload::from("pong")];

    client
        .send_messages("thumbnails", &payloads)
        .await
        .expect("disabled send should succeed without network access");
}

#[tokio::test]
async fn test_disabled_client_visibility_update_is_a_noop() {
    let client = SqsClient::new(disabled_config()).await;
    let message = sample_message();

    client
        .set_visibility_timeout_with_backoff(&message)
        .await
        .expect("disabled visibility update should succeed without network access");
}
