//! Batch operations against a running endpoint.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use dynoclient_dynamodb_model::input::{BatchGetItemInput, BatchWriteItemInput, ScanInput};
    use dynoclient_dynamodb_model::{AttributeValue, KeysAndAttributes, WriteRequest};

    use crate::{cleanup_table, create_test_table, dynamodb_client, item, string_key};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_batch_write_then_batch_get() -> anyhow::Result<()> {
        let client = dynamodb_client();
        let users = create_test_table(&client, "busers", false).await?;
        let orders = create_test_table(&client, "borders", false).await?;

        let writes = BatchWriteItemInput::new(HashMap::from([
            (
                users.clone(),
                (0..3)
                    .map(|n| {
                        WriteRequest::put(item(&[
                            ("pk", AttributeValue::string(format!("user-{n}"))),
                            ("n", AttributeValue::number(n)),
                        ]))
                    })
                    .collect::<Vec<_>>(),
            ),
            (
                orders.clone(),
                vec![WriteRequest::put(item(&[("pk", AttributeValue::string("order-1"))]))],
            ),
        ]));
        let written = client.batch_write_item(&writes).await?;
        assert!(written.is_complete());

        let gets = BatchGetItemInput::new(HashMap::from([
            (
                users.clone(),
                KeysAndAttributes::new(vec![
                    string_key("pk", "user-0"),
                    string_key("pk", "user-2"),
                ]),
            ),
            (
                orders.clone(),
                KeysAndAttributes::new(vec![string_key("pk", "order-1")]),
            ),
        ]));
        let got = client.batch_get_item(&gets).await?;
        assert_eq!(got.responses[&users].len(), 2);
        assert_eq!(got.responses[&orders].len(), 1);
        assert!(got.unprocessed_keys.is_empty());

        cleanup_table(&client, &users).await;
        cleanup_table(&client, &orders).await;
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_batch_delete() -> anyhow::Result<()> {
        let client = dynamodb_client();
        let table = create_test_table(&client, "bdelete", false).await?;

        let puts = BatchWriteItemInput::new(HashMap::from([(
            table.clone(),
            vec![
                WriteRequest::put(item(&[("pk", AttributeValue::string("a"))])),
                WriteRequest::put(item(&[("pk", AttributeValue::string("b"))])),
            ],
        )]));
        client.batch_write_item(&puts).await?;

        let deletes = BatchWriteItemInput::new(HashMap::from([(
            table.clone(),
            vec![
                WriteRequest::delete(string_key("pk", "a")),
                WriteRequest::delete(string_key("pk", "b")),
            ],
        )]));
        let output = client.batch_write_item(&deletes).await?;
        assert!(output.is_complete());

        let remaining = client.scan(&ScanInput::new(&table)).await?;
        assert_eq!(remaining.count, 0);

        cleanup_table(&client, &table).await;
        Ok(())
    }
}
