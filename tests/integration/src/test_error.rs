//! Service and local error surfacing against a running endpoint.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use dynoclient_core::ClientConfig;
    use dynoclient_dynamodb_core::DynamoDbClient;
    use dynoclient_dynamodb_http::{Error, RetryPolicy, TransportErrorKind};
    use dynoclient_dynamodb_model::input::{DescribeTableInput, GetItemInput, PutItemInput};
    use dynoclient_dynamodb_model::{
        AttributeValue, DeprecatedCondition, ServiceErrorCode, ValidationError,
    };

    use crate::{cleanup_table, create_test_table, dynamodb_client, item, test_table_name};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_report_missing_table() -> anyhow::Result<()> {
        let client = dynamodb_client();
        let err = client
            .describe_table(&DescribeTableInput::new(test_table_name("absent")))
            .await
            .unwrap_err();
        assert_eq!(
            err.service_code(),
            Some(ServiceErrorCode::ResourceNotFoundException)
        );
        let service = err.as_service().expect("service error");
        assert_eq!(service.status.as_u16(), 400);
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_report_failed_condition() -> anyhow::Result<()> {
        let client = dynamodb_client();
        let table = create_test_table(&client, "cond", false).await?;
        let row = item(&[("pk", AttributeValue::string("only-once"))]);
        client.put_item(&PutItemInput::new(&table, row.clone())).await?;

        let guarded = PutItemInput {
            expected: HashMap::from([("pk".to_owned(), DeprecatedCondition::not_exists())]),
            ..PutItemInput::new(&table, row)
        };
        let err = client.put_item(&guarded).await.unwrap_err();
        assert_eq!(
            err.service_code(),
            Some(ServiceErrorCode::ConditionalCheckFailedException)
        );

        cleanup_table(&client, &table).await;
        Ok(())
    }

    #[tokio::test]
    async fn test_should_reject_invalid_input_locally() {
        let client = dynamodb_client();
        let err = client
            .get_item(&GetItemInput::new("some-table", HashMap::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::EmptyKey(_))));
    }

    #[tokio::test]
    #[ignore = "requires local networking"]
    async fn test_should_give_up_on_unreachable_endpoint() {
        let config = ClientConfig::builder()
            .endpoint_url(Some("http://127.0.0.1:1".to_owned()))
            .build();
        let client = DynamoDbClient::from_config(&config)
            .expect("client")
            .with_retry_policy(RetryPolicy {
                min_attempts: 2,
                total: Duration::ZERO,
                delay: Duration::from_millis(10),
            });
        let err = client
            .describe_table(&DescribeTableInput::new("anything"))
            .await
            .unwrap_err();
        match err {
            Error::Transport(err) => assert_eq!(err.kind(), TransportErrorKind::Connect),
            other => panic!("expected transport error, got {other:?}"),
        }
    }
}
