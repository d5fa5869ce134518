use crate::config::aws_client_config::AwsClientConfig;
use async_trait::async_trait;
use rusoto_core::region::ParseRegionError;
use rusoto_core::RusotoError;
use rusoto_dynamodb::{
    BatchWriteItemError, BatchWriteItemInput, BatchWriteItemOutput, DynamoDb, DynamoDbClient,
};

pub fn get_dynamodb_client(config: &AwsClientConfig) -> Result<DynamoDbClient, ParseRegionError> {
    Ok(DynamoDbClient::new(config.region()?))
}

/// The slice of the DynamoDB API the sync pipeline depends on.
#[async_trait]
pub trait BatchWriteClient
where
    Self: Sync + Send,
{
    async fn batch_write_item(
        &self,
        input: BatchWriteItemInput,
    ) -> Result<BatchWriteItemOutput, RusotoError<BatchWriteItemError>>;
}

#[async_trait]
impl<D: DynamoDb + Sync + Send> BatchWriteClient for D {
    async fn batch_write_item(
        &self,
        input: BatchWriteItemInput,
    ) -> Result<BatchWriteItemOutput, RusotoError<BatchWriteItemError>> {
        DynamoDb::batch_write_item(self, input).await
    }
}
