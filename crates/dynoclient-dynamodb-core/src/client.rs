//! The client facade.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use dynoclient_core::{ClientConfig, CredentialProvider};
use dynoclient_dynamodb_http::{Dispatcher, HttpTransport, Result, RetryPolicy, Signer, dispatch};
use dynoclient_dynamodb_model::OperationRequest;
use dynoclient_dynamodb_model::input::{
    BatchGetItemInput, BatchWriteItemInput, CreateTableInput, DeleteItemInput, DeleteTableInput,
    DescribeTableInput, GetItemInput, ListTablesInput, PutItemInput, QueryInput, ScanInput,
    UpdateItemInput, UpdateTableInput,
};
use dynoclient_dynamodb_model::output::{
    BatchGetItemOutput, BatchWriteItemOutput, CreateTableOutput, DeleteItemOutput,
    DeleteTableOutput, DescribeTableOutput, GetItemOutput, ListTablesOutput, PutItemOutput,
    QueryOutput, ScanOutput, UpdateItemOutput, UpdateTableOutput,
};

/// Async DynamoDB client.
///
/// Cheap to clone; clones share configuration, transport, signer and retry
/// policy. Every call validates its input locally, then sends it with
/// retries.
///
/// # Examples
///
/// ```no_run
/// use std::collections::HashMap;
///
/// use dynoclient_dynamodb_core::model::AttributeValue;
/// use dynoclient_dynamodb_core::model::input::GetItemInput;
/// use dynoclient_dynamodb_core::{ClientConfig, DynamoDbClient};
///
/// # async fn run() -> dynoclient_dynamodb_core::Result<()> {
/// let client = DynamoDbClient::from_config(&ClientConfig::from_env())?;
/// let key = HashMap::from([("id".to_owned(), AttributeValue::string("42"))]);
/// let output = client.get_item(&GetItemInput::new("users", key)).await?;
/// match output.into_item() {
///     Some(item) => println!("found {} attributes", item.len()),
///     None => println!("no such item"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DynamoDbClient {
    dispatcher: Arc<Dispatcher>,
    cancel: CancellationToken,
}

impl DynamoDbClient {
    /// Client over an assembled [`Dispatcher`].
    #[must_use]
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            cancel: CancellationToken::new(),
        }
    }

    /// Client built from configuration, unsigned and sending through
    /// `reqwest`.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        tracing::debug!(?config, "creating DynamoDB client");
        Ok(Self::new(Dispatcher::from_config(config)?))
    }

    /// Client configured from the environment.
    pub fn from_env() -> Result<Self> {
        Self::from_config(&ClientConfig::from_env())
    }

    /// A clone whose calls end with [`Error::Cancelled`] once `token` is
    /// cancelled.
    ///
    /// [`Error::Cancelled`]: dynoclient_dynamodb_http::Error::Cancelled
    #[must_use]
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            dispatcher: Arc::clone(&self.dispatcher),
            cancel: token,
        }
    }

    /// Replace the signer.
    #[must_use]
    pub fn with_signer(self, signer: Arc<dyn Signer>) -> Self {
        self.map_dispatcher(|d| d.with_signer(signer))
    }

    /// Replace the transport.
    #[must_use]
    pub fn with_transport(self, transport: Arc<dyn HttpTransport>) -> Self {
        self.map_dispatcher(|d| d.with_transport(transport))
    }

    /// Replace the credential source.
    #[must_use]
    pub fn with_credential_provider(self, provider: Arc<dyn CredentialProvider>) -> Self {
        self.map_dispatcher(|d| d.with_credential_provider(provider))
    }

    /// Replace the retry policy.
    #[must_use]
    pub fn with_retry_policy(self, retry: RetryPolicy) -> Self {
        self.map_dispatcher(|d| d.with_retry_policy(retry))
    }

    fn map_dispatcher(self, f: impl FnOnce(Dispatcher) -> Dispatcher) -> Self {
        let dispatcher = Arc::unwrap_or_clone(self.dispatcher);
        Self {
            dispatcher: Arc::new(f(dispatcher)),
            cancel: self.cancel,
        }
    }

    /// The shared dispatcher.
    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Send any operation input.
    pub async fn send<T: OperationRequest>(&self, input: &T) -> Result<T::Output> {
        dispatch(&self.dispatcher, input, &self.cancel).await
    }

    // --- Tables ---

    /// Create a table. It starts in `CREATING`.
    pub async fn create_table(&self, input: &CreateTableInput) -> Result<CreateTableOutput> {
        self.send(input).await
    }

    /// Delete a table.
    pub async fn delete_table(&self, input: &DeleteTableInput) -> Result<DeleteTableOutput> {
        self.send(input).await
    }

    /// Describe a table.
    pub async fn describe_table(&self, input: &DescribeTableInput) -> Result<DescribeTableOutput> {
        self.send(input).await
    }

    /// Change provisioned throughput or global secondary indexes.
    pub async fn update_table(&self, input: &UpdateTableInput) -> Result<UpdateTableOutput> {
        self.send(input).await
    }

    /// List one page of table names.
    pub async fn list_tables(&self, input: &ListTablesInput) -> Result<ListTablesOutput> {
        self.send(input).await
    }

    // --- Items ---

    /// Create or replace an item.
    pub async fn put_item(&self, input: &PutItemInput) -> Result<PutItemOutput> {
        self.send(input).await
    }

    /// Read one item. A missing item is `Ok` with `item: None`.
    pub async fn get_item(&self, input: &GetItemInput) -> Result<GetItemOutput> {
        self.send(input).await
    }

    /// Modify attributes of one item, creating it if absent.
    pub async fn update_item(&self, input: &UpdateItemInput) -> Result<UpdateItemOutput> {
        self.send(input).await
    }

    /// Remove one item.
    pub async fn delete_item(&self, input: &DeleteItemInput) -> Result<DeleteItemOutput> {
        self.send(input).await
    }

    // --- Reads over many items ---

    /// One page of a query; see [`QueryOutput::next_input`].
    pub async fn query(&self, input: &QueryInput) -> Result<QueryOutput> {
        self.send(input).await
    }

    /// One page of a scan; see [`ScanOutput::next_input`].
    pub async fn scan(&self, input: &ScanInput) -> Result<ScanOutput> {
        self.send(input).await
    }

    // --- Batches ---

    /// Read items from several tables. Keys the service skipped come back in
    /// `unprocessed_keys`.
    pub async fn batch_get_item(&self, input: &BatchGetItemInput) -> Result<BatchGetItemOutput> {
        self.send(input).await
    }

    /// Put or delete items across tables. Skipped writes come back in
    /// `unprocessed_items`.
    pub async fn batch_write_item(
        &self,
        input: &BatchWriteItemInput,
    ) -> Result<BatchWriteItemOutput> {
        self.send(input).await
    }
}
