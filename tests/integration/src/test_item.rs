//! Single-item operations against a running endpoint.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use bytes::Bytes;
    use dynoclient_dynamodb_model::input::{
        DeleteItemInput, GetItemInput, PutItemInput, UpdateItemInput,
    };
    use dynoclient_dynamodb_model::types::ReturnValue;
    use dynoclient_dynamodb_model::{AttributeUpdate, AttributeValue, DeprecatedCondition};

    use crate::{cleanup_table, create_test_table, dynamodb_client, item, string_key};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_put_and_get_every_attribute_type() -> anyhow::Result<()> {
        let client = dynamodb_client();
        let table = create_test_table(&client, "putget", false).await?;

        let stored = item(&[
            ("pk", AttributeValue::string("user-1")),
            ("age", AttributeValue::number(42)),
            ("avatar", AttributeValue::binary(Bytes::from_static(b"\x89PNG"))),
            ("tags", AttributeValue::string_set(["a", "b"])),
            ("scores", AttributeValue::number_set([1, 2, 3])),
            (
                "blobs",
                AttributeValue::binary_set([Bytes::from_static(b"x"), Bytes::from_static(b"y")]),
            ),
        ]);
        client
            .put_item(&PutItemInput::new(&table, stored.clone()))
            .await?;

        let input = GetItemInput {
            consistent_read: Some(true),
            ..GetItemInput::new(&table, string_key("pk", "user-1"))
        };
        let found = client.get_item(&input).await?.into_item().expect("item");
        assert_eq!(found["pk"], stored["pk"]);
        assert_eq!(found["age"].as_n(), Some("42"));
        assert_eq!(found["avatar"].as_b().map(|b| &b[..]), Some(&b"\x89PNG"[..]));
        let mut tags = found["tags"].as_ss().expect("string set").to_vec();
        tags.sort();
        assert_eq!(tags, ["a", "b"]);
        assert_eq!(found["scores"].as_ns().map(<[String]>::len), Some(3));
        assert_eq!(found["blobs"].as_bs().map(<[Bytes]>::len), Some(2));

        cleanup_table(&client, &table).await;
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_report_missing_item_as_none() -> anyhow::Result<()> {
        let client = dynamodb_client();
        let table = create_test_table(&client, "missing", false).await?;

        let output = client
            .get_item(&GetItemInput::new(&table, string_key("pk", "nobody")))
            .await?;
        assert!(output.into_item().is_none());

        cleanup_table(&client, &table).await;
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_update_item_attributes() -> anyhow::Result<()> {
        let client = dynamodb_client();
        let table = create_test_table(&client, "update", false).await?;
        let key = string_key("pk", "counter");

        client
            .put_item(&PutItemInput::new(
                &table,
                item(&[
                    ("pk", AttributeValue::string("counter")),
                    ("visits", AttributeValue::number(1)),
                    ("note", AttributeValue::string("remove me")),
                ]),
            ))
            .await?;

        let input = UpdateItemInput {
            return_values: Some(ReturnValue::AllNew),
            ..UpdateItemInput::new(&table, key.clone())
                .with_update("visits", AttributeUpdate::add(AttributeValue::number(2)))
                .with_update("colour", AttributeUpdate::put(AttributeValue::string("blue")))
                .with_update("note", AttributeUpdate::delete())
        };
        let output = client.update_item(&input).await?;
        assert_eq!(output.attributes["visits"].as_n(), Some("3"));
        assert_eq!(output.attributes["colour"].as_s(), Some("blue"));
        assert!(!output.attributes.contains_key("note"));

        cleanup_table(&client, &table).await;
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_delete_item_returning_old_values() -> anyhow::Result<()> {
        let client = dynamodb_client();
        let table = create_test_table(&client, "delete", false).await?;
        let key = string_key("pk", "gone");

        client
            .put_item(&PutItemInput::new(
                &table,
                item(&[
                    ("pk", AttributeValue::string("gone")),
                    ("name", AttributeValue::string("old")),
                ]),
            ))
            .await?;

        let input = DeleteItemInput {
            expected: HashMap::from([(
                "name".to_owned(),
                DeprecatedCondition::value_equals(AttributeValue::string("old")),
            )]),
            return_values: Some(ReturnValue::AllOld),
            ..DeleteItemInput::new(&table, key.clone())
        };
        let output = client.delete_item(&input).await?;
        assert_eq!(output.attributes["name"].as_s(), Some("old"));

        let after = client.get_item(&GetItemInput::new(&table, key)).await?;
        assert!(after.item.is_none());

        cleanup_table(&client, &table).await;
        Ok(())
    }
}
