//! Integration tests for dynoclient against a DynamoDB-compatible endpoint.
//!
//! These tests require a running endpoint at `localhost:4566` (override with
//! `DYNAMODB_ENDPOINT`). They are marked `#[ignore]` so they don't run during
//! normal `cargo test`.
//!
//! Run them with:
//! ```text
//! cargo test -p dynoclient-integration -- --ignored
//! ```

use std::collections::HashMap;
use std::sync::Once;
use std::time::Duration;

use anyhow::{Context, bail};
use dynoclient_core::ClientConfig;
use dynoclient_dynamodb_core::DynamoDbClient;
use dynoclient_dynamodb_model::AttributeValue;
use dynoclient_dynamodb_model::input::{CreateTableInput, DeleteTableInput, DescribeTableInput};
use dynoclient_dynamodb_model::types::{
    AttributeDefinition, KeySchemaElement, ProvisionedThroughput, ScalarAttributeType,
};
use dynoclient_dynamodb_model::{Item, Key};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Endpoint URL for the server.
fn endpoint_url() -> String {
    std::env::var("DYNAMODB_ENDPOINT").unwrap_or_else(|_| "http://localhost:4566".to_owned())
}

/// Configuration pointing at the local server.
#[must_use]
pub fn test_config() -> ClientConfig {
    ClientConfig::builder()
        .endpoint_url(Some(endpoint_url()))
        .access_key_id("test".to_owned())
        .secret_access_key("test".to_owned())
        .build()
}

/// Create a client pointing at the local server.
#[must_use]
pub fn dynamodb_client() -> DynamoDbClient {
    init_tracing();
    DynamoDbClient::from_config(&test_config())
        .unwrap_or_else(|e| panic!("failed to build client: {e}"))
}

/// Generate a unique table name for a test.
#[must_use]
pub fn test_table_name(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    format!("test-{prefix}-{id}")
}

/// Single-attribute string key.
#[must_use]
pub fn string_key(name: &str, value: &str) -> Key {
    HashMap::from([(name.to_owned(), AttributeValue::string(value))])
}

/// Item from `(name, value)` pairs.
#[must_use]
pub fn item(attributes: &[(&str, AttributeValue)]) -> Item {
    attributes
        .iter()
        .map(|(name, value)| ((*name).to_owned(), value.clone()))
        .collect()
}

/// Create a table keyed by string `pk` (and string `sk` when `with_range`),
/// then wait for it to become active.
pub async fn create_test_table(
    client: &DynamoDbClient,
    prefix: &str,
    with_range: bool,
) -> anyhow::Result<String> {
    let name = test_table_name(prefix);
    let mut definitions = vec![AttributeDefinition::new("pk", ScalarAttributeType::S)];
    let mut schema = vec![KeySchemaElement::hash("pk")];
    if with_range {
        definitions.push(AttributeDefinition::new("sk", ScalarAttributeType::S));
        schema.push(KeySchemaElement::range("sk"));
    }
    let input = CreateTableInput::new(&name, definitions, schema, ProvisionedThroughput::new(5, 5));
    client
        .create_table(&input)
        .await
        .with_context(|| format!("failed to create table {name}"))?;
    wait_for_active(client, &name).await?;
    Ok(name)
}

/// Poll `DescribeTable` until the table is `ACTIVE`.
pub async fn wait_for_active(client: &DynamoDbClient, table: &str) -> anyhow::Result<()> {
    for _ in 0..50 {
        let output = client.describe_table(&DescribeTableInput::new(table)).await?;
        if output.table.as_ref().is_some_and(|t| t.is_active()) {
            return Ok(());
        }
        tokio::time::sleep(Duration::from_millis(200)).await;
    }
    bail!("table {table} did not become active")
}

/// Delete a table, ignoring errors.
pub async fn cleanup_table(client: &DynamoDbClient, table: &str) {
    if let Err(e) = client.delete_table(&DeleteTableInput::new(table)).await {
        tracing::warn!(table, error = %e, "failed to delete test table");
    }
}

mod test_batch;
mod test_error;
mod test_item;
mod test_query;
mod test_table;
