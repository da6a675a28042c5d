//! Table management against a running endpoint.

#[cfg(test)]
mod tests {
    use dynoclient_dynamodb_model::input::{
        DescribeTableInput, ListTablesInput, UpdateTableInput,
    };
    use dynoclient_dynamodb_model::types::{KeyType, ProvisionedThroughput, TableStatus};

    use crate::{cleanup_table, create_test_table, dynamodb_client, wait_for_active};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_create_and_describe_table() -> anyhow::Result<()> {
        let client = dynamodb_client();
        let table = create_test_table(&client, "create", true).await?;

        let output = client
            .describe_table(&DescribeTableInput::new(&table))
            .await?;
        let desc = output.table.expect("table description");
        assert_eq!(desc.table_name.as_deref(), Some(table.as_str()));
        assert_eq!(desc.table_status, Some(TableStatus::Active));
        assert_eq!(desc.key_schema.len(), 2);
        assert_eq!(desc.key_schema[0].attribute_name, "pk");
        assert_eq!(desc.key_schema[0].key_type, KeyType::Hash);
        assert_eq!(desc.key_schema[1].key_type, KeyType::Range);

        cleanup_table(&client, &table).await;
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_list_tables_across_pages() -> anyhow::Result<()> {
        let client = dynamodb_client();
        let first = create_test_table(&client, "list", false).await?;
        let second = create_test_table(&client, "list", false).await?;

        let mut input = ListTablesInput {
            limit: Some(1),
            ..ListTablesInput::default()
        };
        let mut names = Vec::new();
        loop {
            let page = client.list_tables(&input).await?;
            assert!(page.table_names.len() <= 1);
            names.extend(page.table_names.iter().cloned());
            match page.next_input(&input) {
                Some(next) => input = next,
                None => break,
            }
        }
        assert!(names.contains(&first));
        assert!(names.contains(&second));

        cleanup_table(&client, &first).await;
        cleanup_table(&client, &second).await;
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_update_throughput() -> anyhow::Result<()> {
        let client = dynamodb_client();
        let table = create_test_table(&client, "update", false).await?;

        let input = UpdateTableInput {
            provisioned_throughput: Some(ProvisionedThroughput::new(10, 7)),
            ..UpdateTableInput::new(&table)
        };
        let output = client.update_table(&input).await?;
        assert!(output.table_description.is_some());
        wait_for_active(&client, &table).await?;

        let desc = client
            .describe_table(&DescribeTableInput::new(&table))
            .await?
            .table
            .expect("table description");
        let throughput = desc.provisioned_throughput.expect("throughput");
        assert_eq!(throughput.read_capacity_units, Some(10));
        assert_eq!(throughput.write_capacity_units, Some(7));

        cleanup_table(&client, &table).await;
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_delete_table() -> anyhow::Result<()> {
        let client = dynamodb_client();
        let table = create_test_table(&client, "deltbl", false).await?;

        let output = client
            .delete_table(&dynoclient_dynamodb_model::input::DeleteTableInput::new(&table))
            .await?;
        let desc = output.table_description.expect("table description");
        assert_eq!(desc.table_name.as_deref(), Some(table.as_str()));
        Ok(())
    }
}
