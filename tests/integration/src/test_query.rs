//! Query and Scan against a running endpoint.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use dynoclient_dynamodb_model::input::{PutItemInput, QueryInput, ScanInput};
    use dynoclient_dynamodb_model::types::{ComparisonOperator, Select};
    use dynoclient_dynamodb_model::{AttributeValue, Condition};

    use crate::{cleanup_table, create_test_table, dynamodb_client, item};

    async fn seed(
        client: &dynoclient_dynamodb_core::DynamoDbClient,
        table: &str,
    ) -> anyhow::Result<()> {
        for pk in ["alpha", "beta"] {
            for n in 0..5 {
                let row = item(&[
                    ("pk", AttributeValue::string(pk)),
                    ("sk", AttributeValue::string(format!("item#{n:02}"))),
                    ("n", AttributeValue::number(n)),
                ]);
                client.put_item(&PutItemInput::new(table, row)).await?;
            }
        }
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_query_with_key_conditions() -> anyhow::Result<()> {
        let client = dynamodb_client();
        let table = create_test_table(&client, "query", true).await?;
        seed(&client, &table).await?;

        let input = QueryInput::new(&table)
            .with_key_condition("pk", Condition::equals(AttributeValue::string("alpha")))
            .with_key_condition(
                "sk",
                Condition::between(
                    AttributeValue::string("item#01"),
                    AttributeValue::string("item#03"),
                ),
            );
        let output = client.query(&input).await?;
        assert_eq!(output.count, 3);
        let sort_keys: Vec<_> = output
            .items
            .iter()
            .filter_map(|i| i["sk"].as_s())
            .collect();
        assert_eq!(sort_keys, ["item#01", "item#02", "item#03"]);

        let backwards = QueryInput {
            scan_index_forward: Some(false),
            ..QueryInput::new(&table)
                .with_key_condition("pk", Condition::equals(AttributeValue::string("beta")))
        };
        let output = client.query(&backwards).await?;
        assert_eq!(output.items[0]["sk"].as_s(), Some("item#04"));

        cleanup_table(&client, &table).await;
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_page_through_query_results() -> anyhow::Result<()> {
        let client = dynamodb_client();
        let table = create_test_table(&client, "qpage", true).await?;
        seed(&client, &table).await?;

        let mut input = QueryInput {
            limit: Some(2),
            ..QueryInput::new(&table)
                .with_key_condition("pk", Condition::equals(AttributeValue::string("alpha")))
        };
        let mut total = 0;
        let mut pages = 0;
        loop {
            let page = client.query(&input).await?;
            total += page.items.len();
            pages += 1;
            match page.next_input(&input) {
                Some(next) => input = next,
                None => break,
            }
        }
        assert_eq!(total, 5);
        assert!(pages >= 3);

        cleanup_table(&client, &table).await;
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_scan_with_filter_and_count() -> anyhow::Result<()> {
        let client = dynamodb_client();
        let table = create_test_table(&client, "scan", true).await?;
        seed(&client, &table).await?;

        let filtered = ScanInput {
            scan_filter: HashMap::from([(
                "n".to_owned(),
                Condition::new(ComparisonOperator::Ge, [AttributeValue::number(3)]),
            )]),
            ..ScanInput::new(&table)
        };
        let output = client.scan(&filtered).await?;
        assert_eq!(output.count, 4);
        assert_eq!(output.scanned_count, 10);

        let counted = ScanInput {
            select: Some(Select::Count),
            ..ScanInput::new(&table)
        };
        let output = client.scan(&counted).await?;
        assert_eq!(output.count, 10);
        assert!(output.items.is_empty());

        cleanup_table(&client, &table).await;
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_cover_table_with_parallel_scan() -> anyhow::Result<()> {
        let client = dynamodb_client();
        let table = create_test_table(&client, "pscan", true).await?;
        seed(&client, &table).await?;

        let mut tasks = Vec::new();
        for segment in ScanInput::new(&table).segments(3) {
            let client = client.clone();
            tasks.push(tokio::spawn(async move { client.scan(&segment).await }));
        }
        let mut total = 0;
        for task in tasks {
            total += task.await??.count;
        }
        assert_eq!(total, 10);

        cleanup_table(&client, &table).await;
        Ok(())
    }
}
